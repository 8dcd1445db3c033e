use std::fs;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::{error::RelayError, relay, store::RelayBackend};

/// Relay list saved as a JSON array of URLs
///
/// Until the first write the list comes from the configured defaults and
/// nothing is written to disk. Malformed or repeated entries are dropped on
/// load, so the next write leaves a clean file.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
    relays: Vec<String>,
}

impl JsonFileBackend {
    pub fn open(path: impl Into<PathBuf>, defaults: &[String]) -> Result<Self, RelayError> {
        let path = path.into();
        let relays = if path.exists() {
            let content = fs::read_to_string(&path)?;
            normalize(serde_json::from_str(&content)?)
        } else {
            log::info!(
                "No saved relays at {}, starting from defaults",
                path.display()
            );
            defaults.to_vec()
        };

        Ok(Self { path, relays })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Write to a sibling temp file first so a crash never leaves a torn
    // list; the temp file is removed if it cannot be moved into place.
    fn save(&self, relays: &[String]) -> Result<(), RelayError> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, relays)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

fn normalize(stored: Vec<String>) -> Vec<String> {
    let mut relays: Vec<String> = Vec::with_capacity(stored.len());
    for url in stored {
        if !relay::validate(&url) {
            log::warn!("Dropping malformed saved relay: {url}");
        } else if relays.contains(&url) {
            log::warn!("Dropping duplicated saved relay: {url}");
        } else {
            relays.push(url);
        }
    }
    relays
}

impl RelayBackend for JsonFileBackend {
    fn relays(&self) -> Result<Vec<String>, RelayError> {
        Ok(self.relays.clone())
    }

    fn add_relay(&mut self, url: &str) -> Result<(), RelayError> {
        let mut relays = self.relays.clone();
        relays.push(url.to_owned());
        self.save(&relays)?;
        self.relays = relays;
        Ok(())
    }

    fn remove_relay(&mut self, url: &str) -> Result<(), RelayError> {
        let mut relays = self.relays.clone();
        relays.retain(|r| r != url);
        self.save(&relays)?;
        self.relays = relays;
        Ok(())
    }
}
