use serde::{Deserialize, Serialize};

/// Dispatcher configuration, usually read from `dispatch.toml`.
///
/// Only deployment settings live here. The content type, loading label,
/// toast icon and toast duration are part of the wire and UI contract and are
/// constants in `dispatcher` and `notification`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Base path every target path is appended to
    pub base_path: String,
    /// Storage key holding the session token
    pub token_key: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// Whether to follow redirects
    pub follow_redirects: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            token_key: "token".to_string(),
            timeout_seconds: 30,
            follow_redirects: true,
        }
    }
}

impl DispatchConfig {
    /// Default configuration pointed at `base_path`
    pub fn with_base_path<S: Into<String>>(base_path: S) -> Self {
        Self {
            base_path: base_path.into(),
            ..Self::default()
        }
    }

    /// Full URL for a target path. Plain concatenation, no normalisation.
    pub fn full_url(&self, target_path: &str) -> String {
        format!("{}{}", self.base_path, target_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: DispatchConfig = toml::from_str(
            r#"
base_path = "https://api.example.com"
timeout_seconds = 5
"#,
        )
        .unwrap();

        assert_eq!(config.base_path, "https://api.example.com");
        assert_eq!(config.timeout_seconds, 5);
        assert_eq!(config.token_key, "token");
        assert!(config.follow_redirects);
    }

    #[test]
    fn test_full_url_is_concatenation() {
        let config = DispatchConfig::with_base_path("https://api.example.com/v1");
        assert_eq!(config.full_url("/users"), "https://api.example.com/v1/users");
        assert_eq!(config.full_url("users"), "https://api.example.com/v1users");
    }
}
