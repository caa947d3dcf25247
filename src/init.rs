use crate::error::{Result, ResultExt};
use crate::ui::{self, Tone};
use request_dispatch::config::ensure_config_file_exists;

pub fn execute(config_path: &str, force: bool) -> Result<()> {
    ui::heading("Dispatch Configuration Setup");

    let written = ensure_config_file_exists(config_path, force)
        .with_context(|| format!("Failed to create {}", config_path))?;

    if written {
        ui::status(Tone::Done, &format!("Created {}", config_path));
        ui::status(Tone::Note, &format!("Edit {} to point base_path at your API", config_path));
    } else {
        ui::status(Tone::Caution, &format!(
            "{} already exists; use --force to overwrite it",
            config_path
        ));
    }

    Ok(())
}
