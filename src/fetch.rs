use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::types::Snapshot;

/// HTTP client for the game server's stats API.
#[derive(Clone, Debug)]
pub struct StatsClient {
    http: reqwest::Client,
    stats_url: String,
}

impl StatsClient {
    /// Build a client for a game server base URL (e.g. `http://10.60.0.1:8080`).
    /// Every request is bounded by `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        let stats_url = format!("{}/api/getStats", base_url.trim_end_matches('/'));
        Ok(Self { http, stats_url })
    }

    /// Full URL of the stats endpoint this client polls.
    pub fn stats_url(&self) -> &str {
        &self.stats_url
    }

    /// Fetch, decode, and validate the current scoreboard snapshot.
    ///
    /// Non-2xx responses become an error carrying the actual status and a body
    /// snippet, so failures are diagnosable from the status line alone.
    pub async fn fetch_stats(&self) -> Result<Snapshot> {
        let resp = self
            .http
            .get(&self.stats_url)
            .send()
            .await
            .with_context(|| format!("GET {} failed", self.stats_url))?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            bail!("GET {} returned {}: {}", self.stats_url, status, snippet(&body));
        }
        let snapshot: Snapshot = resp
            .json()
            .await
            .with_context(|| format!("GET {} returned an undecodable body", self.stats_url))?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}

/// First 200 characters of a response body, for error messages.
fn snippet(body: &str) -> &str {
    match body.char_indices().nth(200) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
