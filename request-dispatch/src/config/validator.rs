use crate::config::types::DispatchConfig;
use crate::error::{DispatchError, Result};
use crate::traits::ConfigValidator;
use std::path::Path;
use url::Url;

/// Configuration validator implementation
pub struct ConfigValidatorImpl;

impl ConfigValidator for ConfigValidatorImpl {
    type Config = DispatchConfig;

    fn validate(&self, config: &DispatchConfig) -> Result<()> {
        self.validate_with_context(config, "configuration")
    }
}

impl ConfigValidatorImpl {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }

    /// Validation with the config source named in errors
    pub fn validate_with_context<P: AsRef<Path>>(
        &self,
        config: &DispatchConfig,
        config_path: P,
    ) -> Result<()> {
        let source = config_path.as_ref().to_string_lossy();

        if config.base_path.trim().is_empty() {
            return Err(DispatchError::invalid_config(format!(
                "No base_path configured in {}",
                source
            )));
        }

        let url = Url::parse(&config.base_path).map_err(|e| {
            DispatchError::invalid_config(format!(
                "base_path '{}' in {} is not a valid URL: {}",
                config.base_path, source, e
            ))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(DispatchError::invalid_config(format!(
                "base_path in {} must use http or https, got '{}'",
                source,
                url.scheme()
            )));
        }

        if config.token_key.is_empty() {
            return Err(DispatchError::invalid_config(format!(
                "token_key in {} must not be empty",
                source
            )));
        }

        if config.timeout_seconds == 0 {
            return Err(DispatchError::invalid_config(format!(
                "timeout_seconds in {} must be greater than zero",
                source
            )));
        }

        Ok(())
    }
}

impl Default for ConfigValidatorImpl {
    fn default() -> Self {
        Self::new()
    }
}
