use crate::error::Result;
use std::path::Path;

/// Generate the default dispatch.toml template
pub fn generate_default_config_template() -> String {
    r#"# Request dispatch configuration

# Base path every request path is appended to
base_path = "https://api.example.com"

# Storage key holding the session token
token_key = "token"

# Request timeout in seconds
timeout_seconds = 30

# Whether to follow HTTP redirects
follow_redirects = true
"#
    .to_string()
}

/// Write the default template if the file is missing (or `force` is set).
/// Returns true when a file was written.
pub fn ensure_config_file_exists<P: AsRef<Path>>(path: P, force: bool) -> Result<bool> {
    let path = path.as_ref();
    if path.exists() && !force {
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, generate_default_config_template())?;
    Ok(true)
}
