use thiserror::Error;

/// Результат для операций simdat
pub type DatResult<T> = std::result::Result<T, DatError>;

/// Типы ошибок разбора файла симуляции.
#[derive(Debug, Error)]
pub enum DatError {
    /// Метка формата не совпала ни с одним известным вариантом
    #[error("Unable to process this file format: {0:?}")]
    UnrecognizedFormat(String),

    /// Файл содержит разметку (labels), которая не поддерживается
    #[error("Don't support labels yet")]
    UnsupportedLabels,

    /// Поток закончился раньше, чем было прочитано обязательное поле
    #[error("Truncated header: stream ended while reading `{field}`")]
    TruncatedHeader { field: &'static str },

    /// Заголовок не может быть записан в выбранной раскладке
    #[error("Format violation: {0}")]
    FormatViolation(String),

    /// Ошибки ввода/вывода (автоконвертируются из std::io::Error)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DatError {
    /// Удобные конструкторы
    pub fn unrecognized_format<S: Into<String>>(s: S) -> Self {
        Self::UnrecognizedFormat(s.into())
    }

    pub fn format_violation<S: Into<String>>(s: S) -> Self {
        Self::FormatViolation(s.into())
    }

    pub fn truncated(field: &'static str) -> Self {
        Self::TruncatedHeader { field }
    }

    /// Короткое имя вида ошибки для диагностики.
    pub fn kind(&self) -> &'static str {
        match self {
            DatError::UnrecognizedFormat(_) => "unrecognized format",
            DatError::UnsupportedLabels => "unsupported labels",
            DatError::TruncatedHeader { .. } => "truncated header",
            DatError::FormatViolation(_) => "format violation",
            DatError::Io(_) => "i/o",
        }
    }
}
