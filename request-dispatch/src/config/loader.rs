use crate::config::types::DispatchConfig;
use crate::error::{DispatchError, Result};
use crate::config::validator::ConfigValidatorImpl;
use crate::traits::ConfigValidator;
use std::path::Path;

/// Configuration loader trait
pub trait ConfigLoader {
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<DispatchConfig>;
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<DispatchConfig>;
}

/// Default configuration loader implementation
pub struct DefaultConfigLoader;

impl ConfigLoader for DefaultConfigLoader {
    /// Load configuration from a TOML file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<DispatchConfig> {
        let content = std::fs::read_to_string(&path).map_err(|_| DispatchError::ConfigNotFound {
            path: path.as_ref().to_path_buf(),
        })?;

        let config: DispatchConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load and validate, naming the file in every error
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<DispatchConfig> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(DispatchError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref).map_err(DispatchError::Io)?;

        let config: DispatchConfig = toml::from_str(&content).map_err(|e| {
            DispatchError::invalid_config(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            ))
        })?;

        ConfigValidatorImpl::new().validate_with_context(&config, path_ref)?;
        Ok(config)
    }
}

impl DispatchConfig {
    /// Create a new config builder
    pub fn builder() -> crate::config::builder::DispatchConfigBuilder {
        crate::config::builder::DispatchConfigBuilder::new()
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_from_file(path)
    }

    /// Load configuration and validate it
    pub fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_with_validation(path)
    }

    /// Validate this configuration
    pub fn validate(&self) -> Result<()> {
        ConfigValidatorImpl::new().validate(self)
    }
}
