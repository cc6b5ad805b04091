/*!
 * Alignment configuration management.
 *
 * Holds the default gap penalty and threshold applied when a call supplies
 * neither, including loading from a JSON file and validation.
 */

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Default knobs for the alignment service
///
/// Both values are optional: a call-time override always wins, and a call
/// fails if neither a call-time nor a configured value exists for a knob.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct AlignConfig {
    /// Cost charged per unit left unmatched in the alignment
    #[serde(default)]
    pub gap_penalty: Option<f64>,

    /// Maximum cost for a pairing to be kept in the output
    #[serde(default)]
    pub threshold: Option<f64>,
}

impl AlignConfig {
    /// Create a configuration with the given defaults
    pub fn new(gap_penalty: Option<f64>, threshold: Option<f64>) -> Self {
        Self {
            gap_penalty,
            threshold,
        }
    }

    /// Load and validate a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())
            .with_context(|| format!("Failed to open config file: {}", path.as_ref().display()))?;
        let reader = BufReader::new(file);

        let config: Self = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration for usable values
    pub fn validate(&self) -> Result<()> {
        if let Some(gap_penalty) = self.gap_penalty {
            if !gap_penalty.is_finite() {
                return Err(anyhow!("Gap penalty must be finite, got {}", gap_penalty));
            }
        }

        if let Some(threshold) = self.threshold {
            if !threshold.is_finite() {
                return Err(anyhow!("Threshold must be finite, got {}", threshold));
            }
        }

        Ok(())
    }
}
