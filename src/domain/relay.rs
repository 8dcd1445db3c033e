use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::error::RelayError;

lazy_static! {
    // Scheme, then at least one non-space non-quote char, never ending in a period.
    static ref RELAY_URL: Regex =
        Regex::new(r#"^(?:http|ws)s?://[^\s"]*[^\s."]$"#).expect("relay url pattern is valid");
}

/// Returns true if `candidate` is a syntactically acceptable relay URL.
///
/// The whole string must match; no reachability check is made.
pub fn validate(candidate: &str) -> bool {
    RELAY_URL.is_match(candidate)
}

/// A relay endpoint, valid by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Relay {
    url: String,
}

impl Relay {
    pub fn parse(url: impl Into<String>) -> Result<Self, RelayError> {
        let url = url.into();
        if validate(&url) {
            Ok(Self { url })
        } else {
            Err(RelayError::Validation(url))
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl TryFrom<String> for Relay {
    type Error = RelayError;

    fn try_from(url: String) -> Result<Self, Self::Error> {
        Self::parse(url)
    }
}

impl From<Relay> for String {
    fn from(relay: Relay) -> Self {
        relay.url
    }
}

impl fmt::Display for Relay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("wss://relay.example.com", true)]
    #[case("ws://localhost:7777", true)]
    #[case("https://relay.example.com/path?q=1", true)]
    #[case("http://x", true)]
    #[case("wss://relay1.example", true)]
    #[case("wss://a", true)]
    #[case("", false)]
    #[case("   ", false)]
    #[case("ftp://x", false)]
    #[case("relay.example.com", false)]
    #[case("wss://", false)]
    #[case("wss://bad.url.", false)]
    #[case("wss://.", false)]
    #[case("wss://relay.example.com/\"", false)]
    #[case("wss://relay .example.com", false)]
    #[case(" wss://relay.example.com", false)]
    #[case("wss://relay.example.com\n", false)]
    #[case("WSS://relay.example.com", false)]
    #[case("wsss://relay.example.com", false)]
    fn test_validate(#[case] candidate: &str, #[case] expected: bool) {
        assert_eq!(validate(candidate), expected);
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert_eq!(
            Relay::parse("ftp://x"),
            Err(RelayError::Validation(String::from("ftp://x")))
        );
    }

    #[test]
    fn test_parse_keeps_url_verbatim() -> color_eyre::Result<()> {
        let relay = Relay::parse("wss://relay.example.com/")?;
        assert_eq!(relay.url(), "wss://relay.example.com/");
        assert_eq!(relay.to_string(), "wss://relay.example.com/");
        Ok(())
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Result<Vec<Relay>, _> = serde_json::from_str(r#"["wss://a", "wss://b"]"#);
        assert!(ok.is_ok());

        let bad: Result<Vec<Relay>, _> = serde_json::from_str(r#"["wss://a", "nope"]"#);
        assert!(bad.is_err());
    }
}
