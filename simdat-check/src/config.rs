use std::path::PathBuf;

/// Входной файл по умолчанию (в рабочем каталоге)
pub const DEFAULT_INPUT: &str = "dm500.dat";

/// Выходной файл по умолчанию
pub const DEFAULT_OUTPUT: &str = "frb.sim";

/// Вид отчёта по заголовку.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStyle {
    /// Построчный текст
    Text,
    /// JSON-объект
    Json,
}

/// Конфигурация одного запуска.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Путь к файлу симуляции
    pub input_path: PathBuf,
    /// Путь к файлу для потока выборок
    pub output_path: PathBuf,
    /// Вид отчёта
    pub report: ReportStyle,
    /// Копировать ли поток выборок (false = только отчёт)
    pub copy_payload: bool,
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для ReportStyle, CheckConfig
////////////////////////////////////////////////////////////////////////////////

impl std::fmt::Display for ReportStyle {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            ReportStyle::Text => write!(f, "text"),
            ReportStyle::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for ReportStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportStyle::Text),
            "json" => Ok(ReportStyle::Json),
            _ => Err(format!("Unknown report style: '{s}'. Use: text, json")),
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            report: ReportStyle::Text,
            copy_payload: true,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
