// src/data_input/ttc_parser.rs

use log::{debug, info};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{SENTINEL_TOKENS, TTC_SENTINEL};
use crate::data_input::ttc_data::TtcSeries;

/// Failures that abort a report run while reading TTC files.
#[derive(Debug, Error)]
pub enum TtcParseError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("'{}' line {line}: '{value}' is not a TTC value", path.display())]
    InvalidValue {
        path: PathBuf,
        line: usize,
        value: String,
    },
}

/// Converts one line of a TTC file into seconds.
///
/// The literal tokens `nan`, `inf` and `-inf` become `TTC_SENTINEL`, as does any
/// other token that parses to a non-finite value. Returns `None` for text that
/// is not a number at all.
pub fn parse_ttc_token(token: &str) -> Option<f64> {
    let token = token.trim();
    if SENTINEL_TOKENS.contains(&token) {
        return Some(TTC_SENTINEL);
    }
    let value = token.parse::<f64>().ok()?;
    if value.is_finite() {
        Some(value)
    } else {
        Some(TTC_SENTINEL)
    }
}

/// Reads a value-per-line TTC file.
///
/// A missing file is not an error: it is logged and yields an empty series.
/// The first line that is not a number stops the read with
/// `TtcParseError::InvalidValue`, carrying the 1-based line number.
pub fn parse_ttc_file(path: &Path) -> Result<TtcSeries, TtcParseError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let name = path.file_name().unwrap_or(path.as_os_str());
            info!("No {}", name.to_string_lossy());
            return Ok(TtcSeries::new());
        }
        Err(source) => {
            return Err(TtcParseError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let mut series = TtcSeries::new();
    for (line_index, line_result) in BufReader::new(file).lines().enumerate() {
        let line = line_result.map_err(|source| TtcParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match parse_ttc_token(&line) {
            Some(value) => series.push(value),
            None => {
                return Err(TtcParseError::InvalidValue {
                    path: path.to_path_buf(),
                    line: line_index + 1,
                    value: line,
                })
            }
        }
    }

    debug!("Read {} TTC values from '{}'", series.len(), path.display());
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_values() {
        assert_eq!(parse_ttc_token("12.5"), Some(12.5));
        assert_eq!(parse_ttc_token("0"), Some(0.0));
        assert_eq!(parse_ttc_token("-3.25"), Some(-3.25));
        assert_eq!(parse_ttc_token("1e1"), Some(10.0));
    }

    #[test]
    fn test_sentinel_tokens() {
        for token in ["nan", "inf", "-inf"] {
            assert_eq!(parse_ttc_token(token), Some(TTC_SENTINEL), "token {token}");
        }
    }

    #[test]
    fn test_other_non_finite_spellings_become_sentinel() {
        assert_eq!(parse_ttc_token("NaN"), Some(TTC_SENTINEL));
        assert_eq!(parse_ttc_token("infinity"), Some(TTC_SENTINEL));
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert_eq!(parse_ttc_token("  8.75\r"), Some(8.75));
        assert_eq!(parse_ttc_token("nan\r"), Some(TTC_SENTINEL));
    }

    #[test]
    fn test_garbage_rejected() {
        assert_eq!(parse_ttc_token(""), None);
        assert_eq!(parse_ttc_token("abc"), None);
        assert_eq!(parse_ttc_token("1.0.0"), None);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let series = parse_ttc_file(Path::new("definitely_missing_TTC_file.txt"));
        assert!(series.unwrap().is_empty());
    }
}

// src/data_input/ttc_parser.rs
