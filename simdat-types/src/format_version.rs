use serde::Serialize;

use crate::{DatError, DatResult};

/// Размер слота метки формата в начале файла
pub const FORMAT_TAG_SIZE: usize = 64;

/// Версия раскладки заголовка, выбираемая меткой формата
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FormatVersion {
    /// `FORMAT 1` — координаты всегда углами, без флага разметки
    #[serde(rename = "FORMAT 1")]
    V1,
    /// `FORMAT 1.1` — как `FORMAT 1` плюс флаг разметки
    #[serde(rename = "FORMAT 1.1")]
    V1_1,
    /// `FORMAT 1.2` — дискриминатор позиции (углы или текст)
    #[serde(rename = "FORMAT 1.2")]
    V1_2,
    /// `FORMAT 2.1` — раскладка 1.2, данные сжаты
    #[serde(rename = "FORMAT 2.1")]
    V2_1,
}

impl FormatVersion {
    pub const ALL: [FormatVersion; 4] = [
        FormatVersion::V1,
        FormatVersion::V1_1,
        FormatVersion::V1_2,
        FormatVersion::V2_1,
    ];

    /// Разбирает нормализованную метку. Сравнение точное.
    pub fn from_tag(tag: &str) -> DatResult<Self> {
        match tag {
            "FORMAT 1" => Ok(FormatVersion::V1),
            "FORMAT 1.1" => Ok(FormatVersion::V1_1),
            "FORMAT 1.2" => Ok(FormatVersion::V1_2),
            "FORMAT 2.1" => Ok(FormatVersion::V2_1),
            _ => Err(DatError::unrecognized_format(tag)),
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            FormatVersion::V1 => "FORMAT 1",
            FormatVersion::V1_1 => "FORMAT 1.1",
            FormatVersion::V1_2 => "FORMAT 1.2",
            FormatVersion::V2_1 => "FORMAT 2.1",
        }
    }

    /// Есть ли в раскладке дискриминатор позиции `pos`.
    pub fn has_position_selector(&self) -> bool {
        matches!(self, FormatVersion::V1_2 | FormatVersion::V2_1)
    }

    /// Есть ли в раскладке флаг `has_labels`.
    pub fn has_labels_flag(&self) -> bool {
        !matches!(self, FormatVersion::V1)
    }

    /// Данные `FORMAT 2.1` пишутся симулятором в сжатом виде.
    pub fn is_compressed(&self) -> bool {
        matches!(self, FormatVersion::V2_1)
    }
}

impl std::fmt::Display for FormatVersion {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl std::str::FromStr for FormatVersion {
    type Err = DatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}
