//! Configuration types for a fitness run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default generation target matching the original batch runs.
fn default_generations() -> u32 {
    1000
}

/// Top-level run configuration: board shape, generation target and the
/// design files to score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Board height in cells.
    pub rows: usize,
    /// Board width in cells.
    pub columns: usize,
    /// Generation counter value at which a run stops. The counter starts
    /// at 1, so reaching generation N takes N - 1 steps.
    #[serde(default = "default_generations")]
    pub generations: u32,
    /// Design files to score, in report order.
    pub designs: Vec<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            rows: 32,
            columns: 32,
            generations: 1000,
            designs: vec![
                PathBuf::from("designs/design1.txt"),
                PathBuf::from("designs/design2.txt"),
                PathBuf::from("designs/design3.txt"),
            ],
        }
    }
}

impl RunConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::InvalidDimensions {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if self.generations == 0 {
            return Err(ConfigError::InvalidGenerations);
        }
        if self.designs.is_empty() {
            return Err(ConfigError::NoDesigns);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("grid dimensions must be non-zero, got {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },
    #[error("generation target must be at least 1")]
    InvalidGenerations,
    #[error("no design files listed")]
    NoDesigns,
}
