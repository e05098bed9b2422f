// src/report_config.rs

use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, DESCRIPTOR_NAMES, DETECTOR_NAMES, OUTPUT_FILE_EXTENSION,
    SOURCE_FILE_EXTENSION,
};

/// Names and locations driving a report run.
///
/// One chart is produced per entry in `detectors`; within a chart, series are
/// tried in `descriptors` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub detectors: Vec<String>,
    pub descriptors: Vec<String>,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            detectors: DETECTOR_NAMES.iter().map(|s| s.to_string()).collect(),
            descriptors: DESCRIPTOR_NAMES.iter().map(|s| s.to_string()).collect(),
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl ReportConfig {
    /// Default name lists with custom input and output directories.
    pub fn with_dirs(input_dir: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Self {
        Self {
            input_dir: input_dir.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// `<detector>_<descriptor>.txt`
    pub fn source_file_name(detector: &str, descriptor: &str) -> String {
        format!("{detector}_{descriptor}.{SOURCE_FILE_EXTENSION}")
    }

    pub fn source_path(&self, detector: &str, descriptor: &str) -> PathBuf {
        self.input_dir
            .join(Self::source_file_name(detector, descriptor))
    }

    pub fn output_path(&self, detector: &str) -> PathBuf {
        self.output_dir
            .join(format!("{detector}.{OUTPUT_FILE_EXTENSION}"))
    }
}


// src/report_config.rs
