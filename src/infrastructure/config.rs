use std::path::{Path, PathBuf};
use std::time::Duration;

use config::ConfigError;
use serde::Deserialize;

use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

/// File name of the saved relay list inside the data directory
pub const RELAYS_FILE: &str = "relays.json";

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    /// Registry seed used until a relay list has been saved
    #[serde(default)]
    pub relays: Vec<String>,
    #[serde(default)]
    pub directory_url: String,
    #[serde(default)]
    pub fetch_timeout_secs: u64,
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(&utils::get_config_dir(), &utils::get_data_dir())
    }

    /// Load user configuration from `config_dir`, falling back to the
    /// built-in defaults for anything left unset
    pub fn load(config_dir: &Path, data_dir: &Path) -> Result<Self, ConfigError> {
        let default_config: Config = json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))?;
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().into_owned())?
            .set_default("_config_dir", config_dir.to_string_lossy().into_owned())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!("No configuration file found, using defaults");
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        if cfg.relays.is_empty() {
            cfg.relays.clone_from(&default_config.relays);
        }
        if cfg.directory_url.is_empty() {
            cfg.directory_url.clone_from(&default_config.directory_url);
        }
        if cfg.fetch_timeout_secs == 0 {
            cfg.fetch_timeout_secs = default_config.fetch_timeout_secs;
        }

        Ok(cfg)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn relays_path(&self) -> PathBuf {
        self.config._data_dir.join(RELAYS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults_without_config_file() -> color_eyre::Result<()> {
        let config_dir = tempfile::tempdir()?;
        let data_dir = tempfile::tempdir()?;

        let cfg = Config::load(config_dir.path(), data_dir.path())?;

        assert!(!cfg.relays.is_empty());
        assert_eq!(cfg.directory_url, "https://api.nostr.watch/v1/online");
        assert_eq!(cfg.fetch_timeout(), Duration::from_secs(10));
        assert_eq!(cfg.relays_path(), data_dir.path().join(RELAYS_FILE));
        Ok(())
    }

    #[test]
    fn test_user_config_overrides_defaults() -> color_eyre::Result<()> {
        let config_dir = tempfile::tempdir()?;
        let data_dir = tempfile::tempdir()?;
        std::fs::write(
            config_dir.path().join("config.toml"),
            "relays = [\"wss://mine.example\"]\nfetch_timeout_secs = 3\n",
        )?;

        let cfg = Config::load(config_dir.path(), data_dir.path())?;

        assert_eq!(cfg.relays, vec!["wss://mine.example"]);
        assert_eq!(cfg.fetch_timeout_secs, 3);
        assert_eq!(cfg.directory_url, "https://api.nostr.watch/v1/online");
        Ok(())
    }

    #[test]
    fn test_empty_relays_fall_back_to_defaults() -> color_eyre::Result<()> {
        let config_dir = tempfile::tempdir()?;
        let data_dir = tempfile::tempdir()?;
        std::fs::write(
            config_dir.path().join("config.json5"),
            "{ relays: [], directory_url: 'http://localhost:8080/online' }",
        )?;

        let cfg = Config::load(config_dir.path(), data_dir.path())?;

        assert!(cfg.relays.contains(&String::from("wss://relay.damus.io")));
        assert_eq!(cfg.directory_url, "http://localhost:8080/online");
        Ok(())
    }
}
