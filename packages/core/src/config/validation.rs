//! Configuration Validation Utilities
//!
//! Common validation helpers and the error type returned when a configuration is rejected.

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid limit: {0}")]
    InvalidLimit(String),

    #[error("Invalid configuration parameter: {0}")]
    InvalidParameter(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidLimit` - if a size or depth limit is zero or exceeds its ceiling
    /// - `InvalidParameter` - if a parameter is outside its valid range
    fn validate(&self) -> ConfigResult<()>;
}

/// Common configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a non-zero limit that must not exceed `max`
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidLimit` if:
    /// - The limit is zero
    /// - The limit exceeds `max`
    pub fn validate_limit(value: usize, max: usize, name: &str) -> ConfigResult<()> {
        if value == 0 {
            return Err(ConfigurationError::InvalidLimit(format!(
                "{name} cannot be zero"
            )));
        }
        if value > max {
            return Err(ConfigurationError::InvalidLimit(format!(
                "{name} of {value} exceeds maximum of {max}"
            )));
        }
        Ok(())
    }
}
