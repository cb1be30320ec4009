use std::path::PathBuf;

use clap::Parser;
use log::{error, LevelFilter};
use simdat_check::{CheckConfig, CheckSession, ReportStyle, DEFAULT_INPUT, DEFAULT_OUTPUT};

#[derive(Parser, Debug)]
#[command(
    name = "simdat-check",
    version = env!("CARGO_PKG_VERSION"),
    about = "Print a simulated burst header and extract its flux payload",
    long_about = None,
)]
struct Cli {
    /// Файл симуляции
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// Файл для потока выборок
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Вывести заголовок в JSON
    #[arg(long)]
    json: bool,
    /// Только отчёт, без копирования потока
    #[arg(long)]
    no_copy: bool,
    /// Тихий режим (только ошибки)
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
    /// Отладочный вывод
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let level = if cli.quiet {
        LevelFilter::Error
    } else if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_secs()
        .init();

    let config = CheckConfig {
        input_path: cli.input,
        output_path: cli.output,
        report: if cli.json {
            ReportStyle::Json
        } else {
            ReportStyle::Text
        },
        copy_payload: !cli.no_copy,
    };

    let session = CheckSession::new(config);
    let result = session.run(&mut std::io::stdout().lock());

    if let Err(e) = result {
        error!("{}: {e}", e.kind());
        std::process::exit(1);
    }
}
