use serde::Serialize;

use crate::{FormatVersion, SkyPosition, FORMAT_TAG_SIZE, TEXT_FIELD_SIZE};

/// Заголовок файла симуляции.
///
/// Создаётся один раз декодером и далее не изменяется.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimHeader {
    /// Раскладка, выбранная меткой формата
    pub format: FormatVersion,
    /// Имя симуляции / источника (поле 128 байт)
    pub name: String,
    /// Время начала симуляции, с
    pub t1: f32,
    /// Время окончания симуляции, с
    pub t2: f32,
    /// Интервал дискретизации, с
    pub dt: f32,
    /// Нижняя граница полосы, МГц
    pub f1: f32,
    /// Верхняя граница полосы, МГц
    pub f2: f32,
    /// Количество частотных каналов
    pub nf: i32,
    /// Позиция источника
    pub position: SkyPosition,
    /// Флаг использования угла
    pub use_angle: i32,
    /// Начальное значение генератора случайных чисел
    pub seed: i64,
    /// Флаг разметки (отсутствует в `FORMAT 1`)
    pub has_labels: Option<i32>,
}

impl SimHeader {
    /// Заголовок `FORMAT 1` с нулевыми величинами.
    pub fn new<S: Into<String>>(name: S) -> Self {
        SimHeader {
            format: FormatVersion::V1,
            name: name.into(),
            t1: 0.0,
            t2: 0.0,
            dt: 0.0,
            f1: 0.0,
            f2: 0.0,
            nf: 0,
            position: SkyPosition::default(),
            use_angle: 0,
            seed: 0,
            has_labels: None,
        }
    }

    pub fn is_compressed(&self) -> bool {
        self.format.is_compressed()
    }

    pub fn uses_angle(&self) -> bool {
        self.use_angle != 0
    }

    pub fn writes_labels(&self) -> bool {
        matches!(self.has_labels, Some(v) if v != 0)
    }

    /// Размер заголовка на диске, включая 64-байтовый слот метки.
    pub fn encoded_len(&self) -> usize {
        // name + t1, t2, dt, f1, f2 + nf
        let mut len = FORMAT_TAG_SIZE + TEXT_FIELD_SIZE + 5 * 4 + 4;

        if self.format.has_position_selector() {
            len += 4;
            len += match self.position {
                SkyPosition::Angles { .. } => 2 * 4,
                SkyPosition::Named { .. } => TEXT_FIELD_SIZE,
            };
        } else {
            len += 2 * 4;
        }

        // use_angle + seed
        len += 4 + 8;

        if self.format.has_labels_flag() {
            len += 4;
        }

        len
    }
}
