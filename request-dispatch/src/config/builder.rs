use crate::config::types::DispatchConfig;
use crate::error::Result;

/// Builder for DispatchConfig
pub struct DispatchConfigBuilder {
    config: DispatchConfig,
}

impl DispatchConfigBuilder {
    /// Create a new config builder
    pub fn new() -> Self {
        Self {
            config: DispatchConfig::default(),
        }
    }

    #[must_use]
    pub fn base_path<S: Into<String>>(mut self, base_path: S) -> Self {
        self.config.base_path = base_path.into();
        self
    }

    #[must_use]
    pub fn token_key<S: Into<String>>(mut self, key: S) -> Self {
        self.config.token_key = key.into();
        self
    }

    /// Set timeout in seconds
    #[must_use]
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.config.timeout_seconds = seconds;
        self
    }

    /// Set whether to follow redirects
    #[must_use]
    pub fn follow_redirects(mut self, follow: bool) -> Self {
        self.config.follow_redirects = follow;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<DispatchConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for DispatchConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
