use std::io::{self, ErrorKind, Read};

use byteorder::{NativeEndian, ReadBytesExt};
use simdat_types::{DatError, DatResult};

/// Короткое чтение обязательного поля превращается в `TruncatedHeader`.
fn field_error(field: &'static str) -> impl FnOnce(io::Error) -> DatError {
    move |e| {
        if e.kind() == ErrorKind::UnexpectedEof {
            DatError::truncated(field)
        } else {
            DatError::Io(e)
        }
    }
}

pub fn read_f32_field<R: Read>(
    reader: &mut R,
    field: &'static str,
) -> DatResult<f32> {
    reader.read_f32::<NativeEndian>().map_err(field_error(field))
}

pub fn read_i32_field<R: Read>(
    reader: &mut R,
    field: &'static str,
) -> DatResult<i32> {
    reader.read_i32::<NativeEndian>().map_err(field_error(field))
}

pub fn read_i64_field<R: Read>(
    reader: &mut R,
    field: &'static str,
) -> DatResult<i64> {
    reader.read_i64::<NativeEndian>().map_err(field_error(field))
}

pub fn read_text_field<R: Read, const N: usize>(
    reader: &mut R,
    field: &'static str,
) -> DatResult<[u8; N]> {
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf).map_err(field_error(field))?;
    Ok(buf)
}
