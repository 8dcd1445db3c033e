use std::collections::HashSet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{error::RelayError, relay::Relay};

/// Source of candidate relay URLs.
///
/// One call is one attempt; there is no retry.
#[async_trait]
pub trait SuggestionFetcher: Send + Sync {
    async fn fetch_suggestions(&self) -> Result<Vec<String>, RelayError>;
}

/// A suggested relay, as presented next to the current registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub url: String,
    pub already_added: bool,
}

/// Drop repeated URLs, keeping the first occurrence.
pub fn dedup(urls: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(urls.len());
    urls.into_iter()
        .filter(|url| seen.insert(url.clone()))
        .collect()
}

/// Mark which suggestions are already in `relays`, without filtering them.
pub fn annotate(suggestions: &[String], relays: &[Relay]) -> Vec<Suggestion> {
    suggestions
        .iter()
        .map(|url| Suggestion {
            url: url.clone(),
            already_added: relays.iter().any(|r| r.url() == url),
        })
        .collect()
}
