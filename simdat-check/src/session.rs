use std::{
    fs::File,
    io::{BufWriter, Write},
};

use log::{debug, info, warn};
use simdat_core::{to_json, CopyStats, HeaderReport, SimReader};
use simdat_types::SimHeader;

use crate::{CheckConfig, CheckError, CheckResult, ReportStyle};

/// Итог успешного запуска.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub header: SimHeader,
    /// `None`, если копирование отключено.
    pub copy: Option<CopyStats>,
}

/// Один запуск: декодирование заголовка, отчёт, копирование потока.
pub struct CheckSession {
    config: CheckConfig,
}

impl CheckSession {
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Запускает обработку, печатая отчёт в `out`.
    ///
    /// Выходной файл создаётся только после успешного декодирования
    /// заголовка.
    pub fn run<O: Write>(
        &self,
        out: &mut O,
    ) -> CheckResult<CheckOutcome> {
        let cfg = &self.config;

        let input = File::open(&cfg.input_path).map_err(|source| CheckError::Open {
            path: cfg.input_path.clone(),
            source,
        })?;
        let mut reader = SimReader::new(input)?;

        debug!(
            "{:?}: {} header, {} bytes",
            cfg.input_path,
            reader.header().format,
            reader.header().encoded_len()
        );

        Self::print_header(reader.header(), cfg.report, out)?;

        if !cfg.copy_payload {
            info!("Payload copy disabled, {:?} not written", cfg.output_path);
            return Ok(CheckOutcome {
                header: reader.into_header(),
                copy: None,
            });
        }

        let output = File::create(&cfg.output_path).map_err(|source| CheckError::Create {
            path: cfg.output_path.clone(),
            source,
        })?;
        let mut writer = BufWriter::new(output);
        let stats = reader.copy_payload_to(&mut writer)?;

        info!("{stats} -> {:?}", cfg.output_path);

        match stats.time_samples(reader.header().nf) {
            Some((spectra, 0)) => debug!("{spectra} spectra of {} channels", reader.header().nf),
            Some((spectra, rest)) => warn!(
                "Payload is not a whole number of spectra: {spectra} full, {rest} samples left over"
            ),
            None => warn!("nf = {} in header, spectra not counted", reader.header().nf),
        }

        Ok(CheckOutcome {
            header: reader.into_header(),
            copy: Some(stats),
        })
    }

    fn print_header<O: Write>(
        header: &SimHeader,
        style: ReportStyle,
        out: &mut O,
    ) -> CheckResult<()> {
        match style {
            ReportStyle::Text => write!(out, "{}", HeaderReport::new(header))?,
            ReportStyle::Json => writeln!(out, "{}", to_json(header)?)?,
        }
        out.flush()?;
        Ok(())
    }
}
