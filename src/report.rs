// src/report.rs

use log::info;
use std::error::Error;
use std::path::PathBuf;

use crate::plot_functions::plot_detector_ttc::plot_detector_ttc;
use crate::report_config::ReportConfig;

/// Writes one TTC chart per configured detector, in order.
///
/// Every detector gets an image, even without data. The first unreadable or
/// malformed input file aborts the run; charts already written stay on disk.
pub fn generate_report(config: &ReportConfig) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    info!(
        "Reading TTC files from '{}', writing charts to '{}'",
        config.input_dir.display(),
        config.output_dir.display()
    );

    let mut written = Vec::with_capacity(config.detectors.len());
    for detector in &config.detectors {
        info!("--- Generating {detector} TTC Plot ---");
        written.push(plot_detector_ttc(config, detector)?);
    }
    Ok(written)
}

// src/report.rs
