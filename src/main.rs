// src/main.rs

use log::{error, info};
use std::process::ExitCode;

use ttc_report::crate_version;
use ttc_report::report::generate_report;
use ttc_report::report_config::ReportConfig;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("ttc-report {}", crate_version());

    let config = ReportConfig::default();
    match generate_report(&config) {
        Ok(written) => {
            info!("Finished: {} TTC charts written.", written.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Report aborted: {e}");
            ExitCode::FAILURE
        }
    }
}
