//! Пример: чтение файла симуляции через SimReader
//!
//! Демонстрирует:
//! - декодирование заголовка при открытии
//! - вывод отчёта
//! - итерацию выборок и поиск пика по каждому каналу

use std::fs::File;

use simdat_core::{HeaderReport, SimReader};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input_path = "simdat-core/dm500.dat";

    let file = File::open(input_path)?;
    let reader = match SimReader::new(file) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("✗ Header rejected ({}): {e}", e.kind());
            return Err(Box::new(e));
        }
    };

    println!("✓ Header decoded");
    print!("{}", HeaderReport::new(reader.header()));

    let nf = reader.header().nf.max(1) as usize;
    let mut peak = vec![(0usize, f32::MIN); nf];
    let mut count = 0usize;

    for sample in reader {
        let value = sample?;
        let (ch, t) = (count % nf, count / nf);
        if value > peak[ch].1 {
            peak[ch] = (t, value);
        }
        count += 1;
    }

    println!("\n✓ Read complete: {count} samples, {} spectra", count / nf);

    println!("\nFirst channels:");
    for (ch, (t, v)) in peak.iter().take(3).enumerate() {
        println!("  [{ch}] peak {v} @ spectrum {t}");
    }

    Ok(())
}
