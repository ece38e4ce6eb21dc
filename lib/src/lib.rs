//! Telegram Bot API bindings for Rust
//! Provides a small blocking client for sending messages to a fixed chat

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use thiserror::Error;

const API_BASE: &str = "https://api.telegram.org";
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum TelegramError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Telegram API rejected the request: {0}")]
    Api(String),
}

/// Envelope returned by every Bot API method
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    description: Option<String>,
}

pub struct TelegramClient {
    base_url: String,
    token: String,
    chat_id: String,
    client: Client,
}

impl TelegramClient {
    pub fn new(token: &str, chat_id: &str) -> Result<Self, TelegramError> {
        let client = Client::builder().timeout(SEND_TIMEOUT).build()?;

        Ok(Self {
            base_url: API_BASE.to_string(),
            token: token.to_string(),
            chat_id: chat_id.to_string(),
            client,
        })
    }

    /// Override the API base URL (useful for pointing at a test server)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }

    /// Send an HTML-formatted message to the configured chat
    pub fn send_message(&self, text: &str) -> Result<(), TelegramError> {
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .form(&[
                ("chat_id", self.chat_id.as_str()),
                ("text", text),
                ("parse_mode", "HTML"),
            ])
            .send()?
            .error_for_status()?;

        let body: ApiResponse = response.json()?;
        if !body.ok {
            return Err(TelegramError::Api(
                body.description
                    .unwrap_or_else(|| "no description".to_string()),
            ));
        }

        Ok(())
    }
}

/// Create a new Telegram client
pub fn create_client(token: &str, chat_id: &str) -> Result<TelegramClient, TelegramError> {
    TelegramClient::new(token, chat_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_url_embeds_token() {
        let client = TelegramClient::new("123:abc", "42").unwrap();
        assert_eq!(
            client.method_url("sendMessage"),
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let client = TelegramClient::new("123:abc", "42")
            .unwrap()
            .with_base_url("http://localhost:8080/");
        assert_eq!(
            client.method_url("sendMessage"),
            "http://localhost:8080/bot123:abc/sendMessage"
        );
    }
}
