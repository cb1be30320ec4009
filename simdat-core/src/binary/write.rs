use std::io::Write;

use byteorder::{NativeEndian, WriteBytesExt};
use simdat_types::{encode_fixed_text, DatResult};

pub fn write_f32_field<W: Write>(
    writer: &mut W,
    val: f32,
) -> DatResult<()> {
    writer.write_f32::<NativeEndian>(val)?;
    Ok(())
}

pub fn write_i32_field<W: Write>(
    writer: &mut W,
    val: i32,
) -> DatResult<()> {
    writer.write_i32::<NativeEndian>(val)?;
    Ok(())
}

pub fn write_i64_field<W: Write>(
    writer: &mut W,
    val: i64,
) -> DatResult<()> {
    writer.write_i64::<NativeEndian>(val)?;
    Ok(())
}

/// Пишет строку в слот фиксированной длины `N` (NUL-дополнение).
pub fn write_text_field<W: Write, const N: usize>(
    writer: &mut W,
    val: &str,
) -> DatResult<()> {
    writer.write_all(&encode_fixed_text::<N>(val))?;
    Ok(())
}
