//! Rating engine configuration
//!
//! This module defines the tunable constants of the Elo update, their
//! defaults, and validation of the values supplied at engine construction.

use crate::error::{RatingError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the Elo rating calculator
///
/// Immutable once an engine has been constructed from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EloConfig {
    /// Update sensitivity: how far a single match can move a rating
    pub k_factor: f64,
    /// Logistic scale: larger values flatten the rating-gap-to-probability curve
    pub c_value: f64,
    /// Margin-of-victory bonus sensitivity
    pub l_factor: f64,
}

impl Default for EloConfig {
    fn default() -> Self {
        Self {
            k_factor: 32.0,
            c_value: 400.0,
            l_factor: 16.0,
        }
    }
}

impl EloConfig {
    /// Create a validated configuration
    pub fn new(k_factor: f64, c_value: f64, l_factor: f64) -> Result<Self> {
        let config = Self {
            k_factor,
            c_value,
            l_factor,
        };
        config.validate()?;
        Ok(config)
    }

    /// Create conservative configuration (slower rating changes)
    pub fn conservative() -> Self {
        Self {
            k_factor: 16.0,
            c_value: 400.0,
            l_factor: 8.0,
        }
    }

    /// Create aggressive configuration (faster rating changes)
    pub fn aggressive() -> Self {
        Self {
            k_factor: 64.0,
            c_value: 400.0,
            l_factor: 32.0,
        }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !self.k_factor.is_finite() || self.k_factor <= 0.0 {
            return Err(RatingError::ConfigurationError {
                message: format!("K-factor must be finite and positive, got {}", self.k_factor),
            }
            .into());
        }

        // A zero C-value would divide by zero in the logistic exponent
        if !self.c_value.is_finite() || self.c_value <= 0.0 {
            return Err(RatingError::ConfigurationError {
                message: format!("C-value must be finite and positive, got {}", self.c_value),
            }
            .into());
        }

        if !self.l_factor.is_finite() || self.l_factor < 0.0 {
            return Err(RatingError::ConfigurationError {
                message: format!(
                    "L-factor must be finite and non-negative, got {}",
                    self.l_factor
                ),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EloConfig::default();
        assert_eq!(config.k_factor, 32.0);
        assert_eq!(config.c_value, 400.0);
        assert_eq!(config.l_factor, 16.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        // Valid config should pass
        assert!(EloConfig::default().validate().is_ok());

        // Non-positive K-factor
        assert!(EloConfig::new(0.0, 400.0, 16.0).is_err());
        assert!(EloConfig::new(-32.0, 400.0, 16.0).is_err());

        // Non-positive C-value
        assert!(EloConfig::new(32.0, 0.0, 16.0).is_err());
        assert!(EloConfig::new(32.0, -400.0, 16.0).is_err());

        // Negative L-factor; zero is allowed (disables the bonus)
        assert!(EloConfig::new(32.0, 400.0, -1.0).is_err());
        assert!(EloConfig::new(32.0, 400.0, 0.0).is_ok());

        // Non-finite values
        assert!(EloConfig::new(f64::NAN, 400.0, 16.0).is_err());
        assert!(EloConfig::new(32.0, f64::INFINITY, 16.0).is_err());
        assert!(EloConfig::new(32.0, 400.0, f64::NAN).is_err());
    }

    #[test]
    fn test_config_presets() {
        let conservative = EloConfig::conservative();
        let aggressive = EloConfig::aggressive();
        let default = EloConfig::default();

        // Conservative moves ratings less per match, aggressive more
        assert!(conservative.k_factor < default.k_factor);
        assert!(aggressive.k_factor > default.k_factor);

        // All should be valid
        assert!(conservative.validate().is_ok());
        assert!(aggressive.validate().is_ok());
        assert!(default.validate().is_ok());
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = EloConfig::new(24.0, 300.0, 12.0).unwrap();
        let json = serde_json::to_value(config).unwrap();
        let back: EloConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }
}
