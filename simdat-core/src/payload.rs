//! Копирование потока выборок (f32, нативный порядок байт) без изменений.

use std::io::{self, ErrorKind, Read, Write};

use log::warn;
use simdat_types::DatResult;

/// Размер одной выборки потока
pub const SAMPLE_SIZE: usize = 4;

/// Статистика копирования потока.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CopyStats {
    /// Скопировано полных выборок.
    pub samples: u64,
    /// Записано байт.
    pub bytes_written: u64,
    /// Отброшенный хвост (1-3 байта неполной выборки), 0 если хвоста нет.
    pub dropped_tail_bytes: usize,
}

impl CopyStats {
    /// Число полных спектров по `nf` каналов и остаток выборок.
    ///
    /// `None`, если `nf` не положительно.
    pub fn time_samples(
        &self,
        nf: i32,
    ) -> Option<(u64, u64)> {
        if nf <= 0 {
            return None;
        }

        let nf = nf as u64;
        Some((self.samples / nf, self.samples % nf))
    }

    pub fn has_partial_tail(&self) -> bool {
        self.dropped_tail_bytes != 0
    }
}

impl std::fmt::Display for CopyStats {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "{} samples ({} bytes) copied",
            self.samples, self.bytes_written
        )?;

        if self.has_partial_tail() {
            write!(f, ", {} trailing bytes dropped", self.dropped_tail_bytes)?;
        }

        Ok(())
    }
}

/// Читает до `SAMPLE_SIZE` байт в `buf`, возвращает сколько прочитано.
///
/// Меньше `SAMPLE_SIZE` возвращается только на конце потока.
pub fn read_sample<R: Read>(
    reader: &mut R,
    buf: &mut [u8; SAMPLE_SIZE],
) -> io::Result<usize> {
    let mut filled = 0;

    while filled < SAMPLE_SIZE {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(filled)
}

/// Копирует оставшиеся выборки из `reader` в `writer` байт в байт.
///
/// Чистый конец потока завершает копирование. Неполная последняя выборка
/// не записывается: она учитывается в [`CopyStats::dropped_tail_bytes`] и
/// сопровождается предупреждением в лог.
pub fn copy_payload<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> DatResult<CopyStats> {
    let mut stats = CopyStats::default();
    let mut sample = [0u8; SAMPLE_SIZE];

    loop {
        match read_sample(reader, &mut sample)? {
            0 => break,
            SAMPLE_SIZE => {
                writer.write_all(&sample)?;
                stats.samples += 1;
                stats.bytes_written += SAMPLE_SIZE as u64;
            }
            partial => {
                warn!("Truncated payload: dropping {partial} trailing byte(s) of an incomplete sample");
                stats.dropped_tail_bytes = partial;
                break;
            }
        }
    }

    writer.flush()?;

    Ok(stats)
}
