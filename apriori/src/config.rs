//! Run configuration shared by the binary and library callers.

use std::path::PathBuf;

use tracing::Level;

use crate::error::{AprioriError, Result};

/// Rejects thresholds outside the open interval (0, 1).
pub fn validate_minsup(minsup: f64) -> Result<f64> {
    if minsup > 0.0 && minsup < 1.0 {
        Ok(minsup)
    } else {
        Err(AprioriError::InvalidThreshold(minsup))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinerConfig {
    pub input: PathBuf,
    pub minsup: f64,
    pub show_log: bool,
}

impl MinerConfig {
    pub fn new(input: impl Into<PathBuf>, minsup: f64) -> Result<Self> {
        Ok(Self {
            input: input.into(),
            minsup: validate_minsup(minsup)?,
            show_log: false,
        })
    }

    pub fn with_log(mut self, show_log: bool) -> Self {
        self.show_log = show_log;
        self
    }

    /// Progress logs at info level when requested, otherwise errors only.
    pub fn log_level(&self) -> Level {
        if self.show_log {
            Level::INFO
        } else {
            Level::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minsup_bounds() {
        assert!(validate_minsup(0.5).is_ok());
        assert!(validate_minsup(0.0001).is_ok());

        for bad in [0.0, 1.0, -0.2, 1.5, f64::NAN] {
            assert!(matches!(
                validate_minsup(bad),
                Err(AprioriError::InvalidThreshold(_))
            ));
        }
    }

    #[test]
    fn test_config_builder() {
        let config = MinerConfig::new("db.txt", 0.25).unwrap().with_log(true);
        assert_eq!(config.input, PathBuf::from("db.txt"));
        assert_eq!(config.minsup, 0.25);
        assert!(config.show_log);
        assert_eq!(config.log_level(), Level::INFO);
        assert_eq!(config.with_log(false).log_level(), Level::ERROR);

        assert!(MinerConfig::new("db.txt", 1.0).is_err());
    }
}
