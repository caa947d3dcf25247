use crate::cli::TokenAction;
use crate::error::{CliError, Result, ResultExt};
use crate::store::open_store;
use crate::ui::{self, Tone};
use dialoguer::{theme::ColorfulTheme, Confirm};
use request_dispatch::{DispatchConfig, KeyValueStore};
use std::path::Path;

pub fn execute(action: TokenAction, config_path: &str, store_path: Option<&str>) -> Result<()> {
    let token_key = token_key(config_path)?;
    let store = open_store(store_path)?;

    match action {
        TokenAction::Show => match store.get(&token_key) {
            Some(token) => println!("{token}"),
            None => ui::status(Tone::Note, "No session token stored"),
        },
        TokenAction::Set { value } => {
            if value.is_empty() {
                return Err(CliError::Other("Token must not be empty".to_string()));
            }
            store
                .set(&token_key, &value)
                .with_context(|| "Failed to store token")?;
            ui::status(Tone::Done, "Session token stored");
        }
        TokenAction::Clear { yes } => {
            let confirmed = yes
                || Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(format!("Wipe every entry in {}?", store.path().display()))
                    .default(false)
                    .interact()?;

            if confirmed {
                store.clear_all().with_context(|| "Failed to clear session store")?;
                ui::status(Tone::Done, "Session store cleared");
            } else {
                ui::status(Tone::Caution, "Nothing cleared");
            }
        }
    }

    Ok(())
}

/// Token key from the config file, or the default when there is none
fn token_key(config_path: &str) -> Result<String> {
    if Path::new(config_path).exists() {
        let config = DispatchConfig::load_from_file(config_path)
            .with_context(|| "Failed to load configuration")?;
        Ok(config.token_key)
    } else {
        Ok(DispatchConfig::default().token_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_and_clear() {
        let dir = TempDir::new().unwrap();
        let store = dir.path().join("storage.json");
        let store = store.to_str().unwrap();
        let missing_config = dir.path().join("none.toml");
        let missing_config = missing_config.to_str().unwrap();

        execute(TokenAction::Set { value: "abc".to_string() }, missing_config, Some(store)).unwrap();
        assert_eq!(open_store(Some(store)).unwrap().get("token").as_deref(), Some("abc"));

        execute(TokenAction::Clear { yes: true }, missing_config, Some(store)).unwrap();
        assert!(open_store(Some(store)).unwrap().entries().is_empty());
    }

    #[test]
    fn test_custom_token_key() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("dispatch.toml");
        std::fs::write(&config, "token_key = \"session\"\n").unwrap();

        assert_eq!(token_key(config.to_str().unwrap()).unwrap(), "session");
    }

    #[test]
    fn test_empty_token_rejected() {
        let dir = TempDir::new().unwrap();
        let store = dir.path().join("storage.json");
        let result = execute(
            TokenAction::Set { value: String::new() },
            "missing.toml",
            store.to_str(),
        );
        assert!(result.is_err());
    }
}
