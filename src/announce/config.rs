//! Announcement policy configuration.
//!
//! Read from TOML, e.g.:
//!
//! ```toml
//! max_age_days = 7
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{DiffError, DiffResult};

/// Tunables for the change-announcement policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Snapshots whose start date is more than this many days in the past
    /// are assumed seen and never announced.
    #[serde(default = "default_max_age_days")]
    pub max_age_days: i64,
}

fn default_max_age_days() -> i64 {
    7
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            max_age_days: default_max_age_days(),
        }
    }
}

impl PolicyConfig {
    /// Sets the staleness threshold.
    pub fn with_max_age_days(mut self, days: i64) -> Self {
        self.max_age_days = days;
        self
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> DiffResult<Self> {
        let config: PolicyConfig = toml::from_str(content)
            .map_err(|e| DiffError::Config(format!("Failed to parse policy config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a TOML configuration file.
    ///
    /// # Returns
    /// * `Ok(PolicyConfig)` if the file parses and validates
    /// * `Err(DiffError::Config)` otherwise
    pub fn from_file<P: AsRef<Path>>(path: P) -> DiffResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            DiffError::Config(format!(
                "Failed to read policy config {}: {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Rejects negative thresholds.
    pub fn validate(&self) -> DiffResult<()> {
        if self.max_age_days < 0 {
            return Err(DiffError::Config(format!(
                "max_age_days must be non-negative, got {}",
                self.max_age_days
            )));
        }
        Ok(())
    }
}
