use std::path::PathBuf;

use simdat_types::DatError;
use thiserror::Error;

pub type CheckResult<T> = std::result::Result<T, CheckError>;

#[derive(Debug, Error)]
pub enum CheckError {
    /// Заголовок отвергнут декодером
    #[error("{0}")]
    Dat(#[from] DatError),

    /// Не удалось открыть входной файл
    #[error("Cannot open input {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Не удалось создать выходной файл
    #[error("Cannot create output {path:?}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Ошибка записи отчёта
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка JSON-отчёта
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CheckError {
    /// Вид ошибки для диагностической строки.
    pub fn kind(&self) -> &'static str {
        match self {
            CheckError::Dat(e) => e.kind(),
            CheckError::Open { .. } | CheckError::Create { .. } | CheckError::Io(_) => "i/o",
            CheckError::Json(_) => "report",
        }
    }
}
