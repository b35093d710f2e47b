//! HTTP client for the scoring backend

use crate::errors::{FeedError, Result};
use crate::models::TeamRecord;
use reqwest::{Client, Response};
use serde_json::{Value, json};
use std::time::Duration;
use tracing::debug;

/// HTTP client for team scores and sign-in against the scoring backend.
///
/// A failed request is reported to the caller as-is; the polling feed decides
/// whether to retain the previous snapshot. There is no retry here — a missed
/// cycle simply waits for the next scheduled poll.
#[derive(Debug, Clone)]
pub struct ScoreClient {
    client: Client,
    base_url: String,
}

impl ScoreClient {
    /// Create a new client against `base_url` with the given request timeout.
    pub fn new(base_url: String, http_timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(http_timeout)
            .user_agent(format!("scorefeed/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FeedError::Http)?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full team collection from `{base_url}{path}`.
    ///
    /// Non-2xx responses and malformed bodies are errors; a valid body that
    /// is missing required team fields fails decoding rather than being
    /// silently coerced.
    pub async fn fetch_teams(&self, path: &str) -> Result<Vec<TeamRecord>> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Fetching team scores from {}", url);

        let response = self.client.get(&url).send().await.map_err(FeedError::Http)?;
        let response = Self::require_success(response).await?;

        let body = response.text().await.map_err(FeedError::Http)?;
        let teams: Vec<TeamRecord> = serde_json::from_str(&body).map_err(FeedError::Json)?;

        debug!("Fetched {} team records", teams.len());
        Ok(teams)
    }

    /// One-shot sign-in exchange against `{base_url}/signin`.
    ///
    /// On rejection the backend's `message` field is surfaced as the
    /// user-displayable error; a body without one gets a generic message.
    pub async fn signin(&self, username: &str, password: &str) -> Result<()> {
        let url = format!("{}/signin", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .map_err(FeedError::Http)?;

        if response.status().is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|value| value["message"].as_str().map(str::to_string))
            .unwrap_or_else(|| "Sign-in failed".to_string());

        Err(FeedError::Login(message))
    }

    /// Map a non-success response to a status error carrying the body.
    async fn require_success(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        Err(FeedError::Status {
            code: status.as_u16(),
            body,
        })
    }
}
