/// Размер текстовых полей заголовка (имя, текстовая позиция)
pub const TEXT_FIELD_SIZE: usize = 128;

/// Декодирует текстовое поле фиксированной длины.
///
/// Поле обрезается по первому NUL, остаток декодируется как UTF-8 с заменой
/// некорректных последовательностей на U+FFFD.
pub fn decode_fixed_text(buf: &[u8]) -> String {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..end]).into_owned()
}

/// Кодирует строку в поле фиксированной длины `N`, дополняя нулями.
///
/// Строка длиннее `N` байт обрезается.
pub fn encode_fixed_text<const N: usize>(s: &str) -> [u8; N] {
    let mut buf = [0u8; N];
    let bytes = s.as_bytes();
    let n = bytes.len().min(N);
    buf[..n].copy_from_slice(&bytes[..n]);
    buf
}
