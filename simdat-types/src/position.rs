use serde::Serialize;

/// Позиция источника на небе.
///
/// В раскладках `FORMAT 1.2` и `FORMAT 2.1` выбирается дискриминатором `pos`
/// (1 — пара углов, иначе — текстовое описание). `FORMAT 1` и `FORMAT 1.1`
/// всегда хранят углы.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkyPosition {
    /// Прямое восхождение и склонение, радианы
    Angles { raj: f32, decj: f32 },
    /// Свободный текст (до 128 байт)
    Named { text: String },
}

/// Значение дискриминатора `pos`, выбирающее пару углов
pub const POS_ANGLES: i32 = 1;

/// Значение дискриминатора `pos`, записываемое для текстовой позиции
pub const POS_NAMED: i32 = 0;

impl SkyPosition {
    pub fn angles(
        raj: f32,
        decj: f32,
    ) -> Self {
        SkyPosition::Angles { raj, decj }
    }

    pub fn named<S: Into<String>>(text: S) -> Self {
        SkyPosition::Named { text: text.into() }
    }

    /// Значение дискриминатора для записи на диск.
    pub fn selector(&self) -> i32 {
        match self {
            SkyPosition::Angles { .. } => POS_ANGLES,
            SkyPosition::Named { .. } => POS_NAMED,
        }
    }

    /// Пара `(raj, decj)`, если позиция задана углами.
    pub fn as_angles(&self) -> Option<(f32, f32)> {
        match self {
            SkyPosition::Angles { raj, decj } => Some((*raj, *decj)),
            SkyPosition::Named { .. } => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SkyPosition::Angles { .. } => None,
            SkyPosition::Named { text } => Some(text.as_str()),
        }
    }
}

impl Default for SkyPosition {
    fn default() -> Self {
        SkyPosition::Angles { raj: 0.0, decj: 0.0 }
    }
}
