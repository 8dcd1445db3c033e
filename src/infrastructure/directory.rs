use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{error::RelayError, suggestion::SuggestionFetcher};

/// Default public relay directory
pub const DEFAULT_DIRECTORY_URL: &str = "https://api.nostr.watch/v1/online";

/// Fallback ceiling for a directory request
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// HTTP client for a relay directory returning a JSON array of URLs
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    client: reqwest::Client,
    url: String,
}

impl DirectoryClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for DirectoryClient {
    fn default() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
                .build()
                .unwrap_or_default(),
            url: String::from(DEFAULT_DIRECTORY_URL),
        }
    }
}

#[async_trait]
impl SuggestionFetcher for DirectoryClient {
    async fn fetch_suggestions(&self) -> Result<Vec<String>, RelayError> {
        tracing::debug!(url = %self.url, "fetching suggested relays");
        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<Vec<String>>().await?)
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::eyre::Result;
    use pretty_assertions::assert_eq;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    use super::*;

    /// Serve one canned HTTP response and return the URL to reach it
    async fn serve_once(status: &'static str, body: &'static str) -> Result<String> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        Ok(format!("http://{addr}/v1/online"))
    }

    fn client(url: String) -> Result<DirectoryClient> {
        Ok(DirectoryClient::new(url, Duration::from_secs(5))?)
    }

    #[tokio::test]
    async fn test_fetch_suggestions() -> Result<()> {
        let url = serve_once("200 OK", r#"["wss://s1","wss://s2"]"#).await?;

        let suggestions = client(url)?.fetch_suggestions().await?;

        assert_eq!(suggestions, vec!["wss://s1", "wss://s2"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_server_error_is_fetch_error() -> Result<()> {
        let url = serve_once("500 Internal Server Error", "[]").await?;

        let result = client(url)?.fetch_suggestions().await;

        assert!(matches!(result, Err(RelayError::Fetch(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_body_is_fetch_error() -> Result<()> {
        let url = serve_once("200 OK", r#"{"relays": 1}"#).await?;

        let result = client(url)?.fetch_suggestions().await;

        assert!(matches!(result, Err(RelayError::Fetch(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_unreachable_directory_is_fetch_error() -> Result<()> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        drop(listener);

        let result = client(format!("http://{addr}/v1/online"))?
            .fetch_suggestions()
            .await;

        assert!(matches!(result, Err(RelayError::Fetch(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_timeout_is_fetch_error() -> Result<()> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        // Accept and then never answer
        let server = tokio::spawn(async move {
            let accepted = listener.accept().await;
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(accepted);
        });

        let client = DirectoryClient::new(
            format!("http://{addr}/v1/online"),
            Duration::from_millis(200),
        )?;
        let result = client.fetch_suggestions().await;

        assert!(matches!(result, Err(RelayError::Fetch(_))));
        server.abort();
        Ok(())
    }

    #[test]
    fn test_default_points_at_public_directory() {
        assert_eq!(DirectoryClient::default().url(), DEFAULT_DIRECTORY_URL);
    }
}
