use std::fmt;

use tokio::sync::watch;

use crate::domain::{
    error::RelayError,
    gate::{Intent, Operation},
    relay::Relay,
};

/// Durable storage for the relay list.
///
/// The store keeps its own in-memory copy and only calls into the backend
/// after its invariants have been checked.
pub trait RelayBackend: Send {
    fn relays(&self) -> Result<Vec<String>, RelayError>;
    fn add_relay(&mut self, url: &str) -> Result<(), RelayError>;
    fn remove_relay(&mut self, url: &str) -> Result<(), RelayError>;
}

/// Non-durable backend, for tests and embedders that persist elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    relays: Vec<String>,
}

impl MemoryBackend {
    pub fn new<I, S>(relays: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            relays: relays.into_iter().map(Into::into).collect(),
        }
    }
}

impl RelayBackend for MemoryBackend {
    fn relays(&self) -> Result<Vec<String>, RelayError> {
        Ok(self.relays.clone())
    }

    fn add_relay(&mut self, url: &str) -> Result<(), RelayError> {
        self.relays.push(url.to_owned());
        Ok(())
    }

    fn remove_relay(&mut self, url: &str) -> Result<(), RelayError> {
        self.relays.retain(|r| r != url);
        Ok(())
    }
}

/// The canonical, ordered set of connected relays.
///
/// Invariants:
/// - each URL appears at most once (case-sensitive exact match)
/// - a removal never leaves the registry empty
pub struct RelayStore<B: RelayBackend> {
    backend: B,
    relays: Vec<Relay>,
    changes: watch::Sender<Vec<Relay>>,
}

impl<B: RelayBackend> RelayStore<B> {
    /// Load the registry from `backend`.
    ///
    /// Persisted entries that are malformed or repeated are skipped.
    pub fn new(backend: B) -> Result<Self, RelayError> {
        let mut relays: Vec<Relay> = Vec::new();
        for url in backend.relays()? {
            match Relay::parse(url) {
                Ok(relay) if relays.contains(&relay) => {
                    log::warn!("Skipping duplicated relay: {relay}");
                }
                Ok(relay) => relays.push(relay),
                Err(e) => log::warn!("Skipping stored relay: {e}"),
            }
        }

        if relays.is_empty() {
            log::warn!("Relay registry is empty");
        }

        let (changes, _) = watch::channel(relays.clone());
        Ok(Self {
            backend,
            relays,
            changes,
        })
    }

    pub fn list(&self) -> &[Relay] {
        &self.relays
    }

    pub fn len(&self) -> usize {
        self.relays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relays.is_empty()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.relays.iter().any(|r| r.url() == url)
    }

    /// Receives the full list after every successful mutation.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Relay>> {
        self.changes.subscribe()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn add(&mut self, url: &str) -> Result<(), RelayError> {
        let relay = Relay::parse(url)?;
        if self.relays.contains(&relay) {
            return Err(RelayError::Duplicate(relay.into()));
        }

        self.backend.add_relay(relay.url())?;
        log::info!("Added relay: {relay}");
        self.relays.push(relay);
        self.notify();
        Ok(())
    }

    pub fn remove(&mut self, url: &str) -> Result<(), RelayError> {
        let index = self
            .relays
            .iter()
            .position(|r| r.url() == url)
            .ok_or_else(|| RelayError::NotFound(url.to_owned()))?;
        if self.relays.len() == 1 {
            return Err(RelayError::LastRelay(url.to_owned()));
        }

        self.backend.remove_relay(url)?;
        let relay = self.relays.remove(index);
        log::info!("Removed relay: {relay}");
        self.notify();
        Ok(())
    }

    /// Carry out a confirmed intent.
    pub fn apply(&mut self, intent: &Intent) -> Result<(), RelayError> {
        match intent.operation {
            Operation::Add => self.add(&intent.url),
            Operation::Remove => self.remove(&intent.url),
        }
    }

    fn notify(&self) {
        self.changes.send_replace(self.relays.clone());
    }
}

impl<B: RelayBackend + fmt::Debug> fmt::Debug for RelayStore<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayStore")
            .field("backend", &self.backend)
            .field("relays", &self.relays)
            .finish()
    }
}
