use crate::error::{CliError, Result, ResultExt};
use request_dispatch::FileStore;
use std::path::PathBuf;

const STORE_FILE: &str = "storage.json";

/// Where the session store lives: `--store` or `<config dir>/rqd/storage.json`
pub fn store_path(explicit: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(PathBuf::from(path));
    }

    dirs::config_dir()
        .map(|dir| dir.join("rqd").join(STORE_FILE))
        .ok_or_else(|| CliError::Other("Could not determine the user config directory".to_string()))
}

pub fn open_store(explicit: Option<&str>) -> Result<FileStore> {
    let path = store_path(explicit)?;
    FileStore::open(&path).with_context(|| format!("Failed to open session store {}", path.display()))
}
