//! Раскладки заголовка файла симуляции (`dm500.dat`).
//!
//! Файл начинается с 64-байтового слота метки формата, за которым идут поля
//! выбранной раскладки. Все числа хранятся в нативном порядке байт, без
//! выравнивания.
//!
//! ```text
//! FORMAT 1    name[128] t1 t2 dt f1 f2 nf raj decj use_angle seed
//! FORMAT 1.1  ... как FORMAT 1 ... has_labels
//! FORMAT 1.2  name[128] t1 t2 dt f1 f2 nf pos (raj decj | posf[128])
//!             use_angle seed has_labels
//! FORMAT 2.1  как FORMAT 1.2
//! ```
//!
//! f32: t1, t2, dt, f1, f2, raj, decj. i32: nf, pos, use_angle, has_labels.
//! i64: seed.

use std::io::{Read, Write};

use log::debug;
use simdat_types::{
    decode_fixed_text, DatError, DatResult, FormatVersion, SimHeader, SkyPosition,
    FORMAT_TAG_SIZE, POS_ANGLES, TEXT_FIELD_SIZE,
};

use crate::{
    binary::{
        read_f32_field, read_i32_field, read_i64_field, read_text_field, write_f32_field,
        write_i32_field, write_i64_field, write_text_field,
    },
    text::normalize_str,
};

/// Чтение и запись заголовка поверх [`SimHeader`].
pub trait SimHeaderExt: Sized {
    /// Читает слот метки и поля соответствующей раскладки.
    fn read_from<R: Read>(reader: &mut R) -> DatResult<Self>;

    /// Пишет заголовок в той же раскладке, в которой он читается.
    fn write_to<W: Write>(
        &self,
        writer: &mut W,
    ) -> DatResult<()>;

    /// Сериализация заголовка в байты.
    fn serialize(&self) -> DatResult<Vec<u8>>;
}

/// Читает 64-байтовый слот и возвращает нормализованную метку.
pub fn read_format_tag<R: Read>(reader: &mut R) -> DatResult<String> {
    let slot = read_text_field::<_, FORMAT_TAG_SIZE>(reader, "format")?;
    Ok(normalize_str(&slot).into_owned())
}

/// Декодирует поля заголовка для метки `tag`.
///
/// `reader` должен стоять сразу за слотом метки. Для неизвестной метки ни
/// один байт не читается. Поток продвигается ровно на размер раскладки.
pub fn decode_fields<R: Read>(
    tag: &str,
    reader: &mut R,
) -> DatResult<SimHeader> {
    let format = FormatVersion::from_tag(tag)?;

    let name = decode_fixed_text(&read_text_field::<_, TEXT_FIELD_SIZE>(reader, "name")?);
    let t1 = read_f32_field(reader, "t1")?;
    let t2 = read_f32_field(reader, "t2")?;
    let dt = read_f32_field(reader, "dt")?;
    let f1 = read_f32_field(reader, "f1")?;
    let f2 = read_f32_field(reader, "f2")?;
    let nf = read_i32_field(reader, "nf")?;

    let position = if format.has_position_selector() {
        let pos = read_i32_field(reader, "pos")?;
        if pos == POS_ANGLES {
            read_angles(reader)?
        } else {
            let posf = read_text_field::<_, TEXT_FIELD_SIZE>(reader, "posf")?;
            SkyPosition::named(decode_fixed_text(&posf))
        }
    } else {
        read_angles(reader)?
    };

    let use_angle = read_i32_field(reader, "use_angle")?;
    let seed = read_i64_field(reader, "seed")?;

    let has_labels = if format.has_labels_flag() {
        Some(read_i32_field(reader, "has_labels")?)
    } else {
        None
    };

    if has_labels == Some(1) {
        return Err(DatError::UnsupportedLabels);
    }

    debug!("decoded {format} header for {name:?}");

    Ok(SimHeader {
        format,
        name,
        t1,
        t2,
        dt,
        f1,
        f2,
        nf,
        position,
        use_angle,
        seed,
        has_labels,
    })
}

fn read_angles<R: Read>(reader: &mut R) -> DatResult<SkyPosition> {
    let raj = read_f32_field(reader, "raj")?;
    let decj = read_f32_field(reader, "decj")?;
    Ok(SkyPosition::angles(raj, decj))
}

impl SimHeaderExt for SimHeader {
    fn read_from<R: Read>(reader: &mut R) -> DatResult<Self> {
        let tag = read_format_tag(reader)?;
        decode_fields(&tag, reader)
    }

    fn write_to<W: Write>(
        &self,
        writer: &mut W,
    ) -> DatResult<()> {
        let format = self.format;

        write_text_field::<_, FORMAT_TAG_SIZE>(writer, format.as_tag())?;
        write_text_field::<_, TEXT_FIELD_SIZE>(writer, &self.name)?;
        write_f32_field(writer, self.t1)?;
        write_f32_field(writer, self.t2)?;
        write_f32_field(writer, self.dt)?;
        write_f32_field(writer, self.f1)?;
        write_f32_field(writer, self.f2)?;
        write_i32_field(writer, self.nf)?;

        if format.has_position_selector() {
            write_i32_field(writer, self.position.selector())?;
            match &self.position {
                SkyPosition::Angles { raj, decj } => {
                    write_f32_field(writer, *raj)?;
                    write_f32_field(writer, *decj)?;
                }
                SkyPosition::Named { text } => {
                    write_text_field::<_, TEXT_FIELD_SIZE>(writer, text)?;
                }
            }
        } else {
            let (raj, decj) = self.position.as_angles().ok_or_else(|| {
                DatError::format_violation(format!(
                    "{format} stores the position as angles only"
                ))
            })?;
            write_f32_field(writer, raj)?;
            write_f32_field(writer, decj)?;
        }

        write_i32_field(writer, self.use_angle)?;
        write_i64_field(writer, self.seed)?;

        if format.has_labels_flag() {
            write_i32_field(writer, self.has_labels.unwrap_or(0))?;
        }

        Ok(())
    }

    fn serialize(&self) -> DatResult<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.write_to(&mut buf)?;
        Ok(buf)
    }
}
