//! Нормализация метки формата.
//!
//! Метка хранится в 64-байтовом слоте и может быть окружена пробелами,
//! переводами строк и NUL-хвостом. Пробельными считаются символы класса
//! `isspace` из C: пробел, `\t`, `\n`, `\r`, `\x0b`, `\x0c`.

use std::borrow::Cow;

/// Пробельный символ в смысле `isspace` (в отличие от
/// `u8::is_ascii_whitespace`, включает вертикальную табуляцию).
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Обрезает пробелы по краям занятой части буфера (до первого NUL).
///
/// Возвращает подсрез исходного буфера, копирования нет.
pub fn normalize(buf: &[u8]) -> &[u8] {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    let occupied = &buf[..end];

    let Some(first) = occupied.iter().position(|&b| !is_space(b)) else {
        return &occupied[..0];
    };
    // first найден, значит last тоже существует
    let last = occupied.iter().rposition(|&b| !is_space(b)).unwrap_or(first);

    &occupied[first..=last]
}

/// [`normalize`] с декодированием в строку (некорректный UTF-8 заменяется).
pub fn normalize_str(buf: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(normalize(buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surrounding_whitespace_removed() {
        assert_eq!(normalize(b"  FORMAT 1  \n"), b"FORMAT 1");
        assert_eq!(normalize(b"\x0b\x0cFORMAT 2.1\r\n"), b"FORMAT 2.1");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(normalize(b""), b"");
        assert_eq!(normalize(b"\t\t"), b"");
        assert_eq!(normalize(b"   \n\0FORMAT 1"), b"");
    }

    #[test]
    fn test_clean_input_is_same_slice() {
        let buf = b"FORMAT 1";
        let out = normalize(buf);
        assert_eq!(out, b"FORMAT 1");
        assert_eq!(out.as_ptr(), buf.as_ptr());
        assert_eq!(out.len(), buf.len());
    }

    #[test]
    fn test_stops_at_nul() {
        let mut slot = [0u8; 64];
        slot[..12].copy_from_slice(b"FORMAT 1.2 \n");
        slot[20..25].copy_from_slice(b"trash");
        assert_eq!(normalize(&slot), b"FORMAT 1.2");
    }

    #[test]
    fn test_interior_whitespace_kept() {
        assert_eq!(normalize(b" FORMAT\t1 "), b"FORMAT\t1");
    }

    #[test]
    fn test_normalize_str() {
        assert_eq!(normalize_str(b"  FORMAT 1.1\0\0"), "FORMAT 1.1");
        assert_eq!(normalize_str(&[b' ', 0xFF, b' ']), "\u{FFFD}");
    }
}
