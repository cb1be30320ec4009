//! Декодер файлов симуляции всплесков (`dm500.dat`)
//!
//! Разбирает версионированный заголовок, формирует отчёт и копирует поток
//! выборок (f32) без изменений.
//!
//! # Быстрый старт
//!
//! ```no_run
//! use std::fs::File;
//!
//! use simdat_core::{HeaderReport, SimReader};
//!
//! let mut reader = SimReader::new(File::open("dm500.dat")?)?;
//! print!("{}", HeaderReport::new(reader.header()));
//!
//! let mut out = File::create("frb.sim")?;
//! let stats = reader.copy_payload_to(&mut out)?;
//! println!("{stats}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod binary;
pub mod format;
pub mod payload;
pub mod report;
pub mod serialization;
pub mod text;

pub use binary::*;
pub use format::*;
pub use payload::*;
pub use report::*;
pub use serialization::*;
pub use text::*;

/// Версия библиотеки.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
