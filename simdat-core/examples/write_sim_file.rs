//! Пример: запись файла симуляции через SimWriter
//!
//! Демонстрирует:
//! - создание заголовка FORMAT 1.2 с позицией в радианах
//! - генерацию синтетического дисперсированного всплеска
//! - запись выборок спектр за спектром

use std::fs::File;

use simdat_core::SimWriter;
use simdat_types::{FormatVersion, SimHeader, SkyPosition};

/// Задержка распространения (с) для меры дисперсии `dm` между частотами, МГц.
fn dispersive_delay(
    f: f32,
    f0: f32,
    dm: f32,
) -> f32 {
    4.148_806_4e3 * dm * (f.powi(-2) - f0.powi(-2))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_path = "simdat-core/dm500.dat";

    // --- Заголовок ---
    let nf = 64;
    let mut header = SimHeader::new("FAKE FRB #1000");
    header.format = FormatVersion::V1_2;
    header.t2 = 1.0;
    header.dt = 1.31072e-3;
    header.f1 = 300.0;
    header.f2 = 500.0;
    header.nf = nf;
    header.position = SkyPosition::angles(1.459_672, 0.384_225);
    header.use_angle = 1;
    header.seed = 42;
    header.has_labels = Some(0);

    let file = File::create(output_path)?;
    let mut writer = SimWriter::new(file, &header)?;

    // --- Всплеск DM 500 в момент 0.1 с ---
    let dm = 500.0_f32;
    let df = (header.f2 - header.f1) / nf as f32;
    let n_time = ((header.t2 - header.t1) / header.dt) as usize;

    for t_idx in 0..n_time {
        let t = t_idx as f32 * header.dt;
        let spectrum: Vec<f32> = (0..nf)
            .map(|ch| {
                let f = header.f2 - ch as f32 * df;
                let arrival = 0.1 + dispersive_delay(f, header.f2, dm);
                if (t - arrival).abs() < header.dt {
                    1.0
                } else {
                    0.0
                }
            })
            .collect();
        writer.write_samples(&spectrum)?;
    }

    let total = writer.samples_written();
    writer.finish()?;

    println!("✓ Записано: {output_path}");
    println!("  Spectra  : {n_time}");
    println!("  Samples  : {total}");

    Ok(())
}
