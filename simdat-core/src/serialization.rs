use std::io::{BufReader, BufWriter, Read, Write};

use byteorder::{NativeEndian, WriteBytesExt};
use log::{debug, warn};
use simdat_types::{DatError, DatResult, SimHeader};

use crate::{
    format::SimHeaderExt,
    payload::{copy_payload, read_sample, CopyStats, SAMPLE_SIZE},
};

/// Потоковый читатель файла симуляции.
pub struct SimReader<R: Read> {
    reader: BufReader<R>,
    header: SimHeader,
    dropped_tail_bytes: usize,
    eof: bool,
}

/// Потоковый писатель файла симуляции.
pub struct SimWriter<W: Write> {
    writer: BufWriter<W>,
    samples_written: u64,
}

impl<R: Read> SimReader<R> {
    /// Создаёт читатель, сразу декодируя заголовок из `inner`.
    pub fn new(inner: R) -> DatResult<Self> {
        let mut reader = BufReader::new(inner);
        let header = SimHeader::read_from(&mut reader)?;

        debug!(
            "header {} occupies {} bytes",
            header.format,
            header.encoded_len()
        );

        Ok(Self {
            reader,
            header,
            dropped_tail_bytes: 0,
            eof: false,
        })
    }

    /// Декодированный заголовок файла.
    pub fn header(&self) -> &SimHeader {
        &self.header
    }

    pub fn into_header(self) -> SimHeader {
        self.header
    }

    /// Сколько байт неполной последней выборки было отброшено итератором.
    pub fn dropped_tail_bytes(&self) -> usize {
        self.dropped_tail_bytes
    }

    /// Копирует весь оставшийся поток выборок в `writer`.
    pub fn copy_payload_to<W: Write>(
        &mut self,
        writer: &mut W,
    ) -> DatResult<CopyStats> {
        let stats = copy_payload(&mut self.reader, writer)?;
        self.dropped_tail_bytes = stats.dropped_tail_bytes;
        self.eof = true;
        Ok(stats)
    }

    /// Возвращает следующую выборку или `None` на конце потока.
    pub fn next_sample(&mut self) -> Option<DatResult<f32>> {
        if self.eof {
            return None;
        }

        let mut buf = [0u8; SAMPLE_SIZE];

        match read_sample(&mut self.reader, &mut buf) {
            Ok(SAMPLE_SIZE) => Some(Ok(f32::from_ne_bytes(buf))),
            Ok(0) => {
                self.eof = true;
                None
            }
            Ok(partial) => {
                warn!("Truncated payload: dropping {partial} trailing byte(s) of an incomplete sample");
                self.dropped_tail_bytes = partial;
                self.eof = true;
                None
            }
            Err(e) => {
                self.eof = true;
                Some(Err(DatError::Io(e)))
            }
        }
    }
}

impl<R: Read> Iterator for SimReader<R> {
    type Item = DatResult<f32>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_sample()
    }
}

impl<W: Write> SimWriter<W> {
    /// Создаёт писатель, немедленно записывая заголовок в поток.
    pub fn new(
        inner: W,
        header: &SimHeader,
    ) -> DatResult<Self> {
        let mut writer = BufWriter::new(inner);

        header.write_to(&mut writer)?;

        Ok(Self {
            writer,
            samples_written: 0,
        })
    }

    pub fn write_sample(
        &mut self,
        sample: f32,
    ) -> DatResult<()> {
        self.writer.write_f32::<NativeEndian>(sample)?;
        self.samples_written += 1;
        Ok(())
    }

    pub fn write_samples(
        &mut self,
        samples: &[f32],
    ) -> DatResult<()> {
        for &s in samples {
            self.write_sample(s)?;
        }
        Ok(())
    }

    /// Количество записанных выборок.
    pub fn samples_written(&self) -> u64 {
        self.samples_written
    }

    /// Сбрасывает буфер и возвращает внутренний поток.
    pub fn finish(self) -> DatResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| DatError::Io(e.into_error()))
    }
}
