use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("minimum item-set size must be positive, got {0}")]
    InvalidMinSize(usize),
    #[error("minimum support (sigma) must be positive, got {0}")]
    InvalidSigma(usize),
}

/// Mining parameters. `min_size` is the smallest item-set width reported in
/// the output; `sigma` is the minimum support count. Both must be positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiningConfig {
    pub min_size: usize,
    pub sigma: usize,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self { min_size: 3, sigma: 4 }
    }
}

impl MiningConfig {
    pub fn new(min_size: usize, sigma: usize) -> Self {
        Self { min_size, sigma }
    }

    /// Rejects non-positive parameters before any counting starts.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.min_size == 0 {
            return Err(ConfigurationError::InvalidMinSize(self.min_size));
        }
        if self.sigma == 0 {
            return Err(ConfigurationError::InvalidSigma(self.sigma));
        }
        Ok(())
    }
}
