//! Текстовый и JSON-отчёт по декодированному заголовку.

use simdat_types::{SimHeader, SkyPosition};

/// Ширина колонки подписей
const LABEL_WIDTH: usize = 14;

/// Отчёт по заголовку: одна строка на поле, порядок фиксирован.
///
/// t1, t2, f1, f2 выводятся с шестью знаками (как `%f`), dt и углы —
/// кратчайшим представлением, восстанавливающим значение.
pub struct HeaderReport<'a> {
    header: &'a SimHeader,
}

impl<'a> HeaderReport<'a> {
    pub fn new(header: &'a SimHeader) -> Self {
        Self { header }
    }
}

impl std::fmt::Display for HeaderReport<'_> {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        let h = self.header;
        let w = LABEL_WIDTH;

        writeln!(f, "{:<w$}{}", "Format:", h.format)?;
        writeln!(f, "{:<w$}{}", "Name:", h.name)?;
        writeln!(f, "{:<w$}{:.6}", "t1 (sec):", h.t1)?;
        writeln!(f, "{:<w$}{:.6}", "t2 (sec):", h.t2)?;
        writeln!(f, "{:<w$}{}", "dt (sec):", h.dt)?;
        writeln!(f, "{:<w$}{:.6}", "f1 (MHz):", h.f1)?;
        writeln!(f, "{:<w$}{:.6}", "f2 (MHz):", h.f2)?;
        writeln!(f, "{:<w$}{}", "nf:", h.nf)?;

        match &h.position {
            SkyPosition::Angles { raj, decj } => {
                writeln!(f, "{:<w$}{}", "RAJ (rad):", raj)?;
                writeln!(f, "{:<w$}{}", "DECJ (rad):", decj)?;
            }
            SkyPosition::Named { text } => {
                writeln!(f, "{:<w$}{}", "Position:", text)?;
            }
        }

        writeln!(f, "{:<w$}{}", "Use angle:", h.use_angle)?;
        writeln!(f, "{:<w$}{}", "Random seed:", h.seed)?;
        writeln!(f, "{:<w$}{}", "Compressed:", yes_no(h.is_compressed()))?;

        let labels = match h.has_labels {
            Some(v) => yes_no(v != 0),
            None => "n/a",
        };
        writeln!(f, "{:<w$}{}", "Labels:", labels)
    }
}

fn yes_no(v: bool) -> &'static str {
    if v {
        "yes"
    } else {
        "no"
    }
}

/// JSON-представление заголовка (для `--json`).
pub fn to_json(header: &SimHeader) -> serde_json::Result<String> {
    serde_json::to_string_pretty(header)
}
