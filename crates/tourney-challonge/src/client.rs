//! # Challonge HTTP Client
//!
//! A thin typed wrapper around `reqwest::Client` carrying the API key,
//! base URL, and per-request timeout. Errors are mapped to
//! [`ChallongeError`] with the endpoint, HTTP status, and a response-body
//! excerpt for diagnostics. Retries are NOT built in — ingestion is an
//! interactive, one-shot operation.

use std::time::Duration;

use thiserror::Error;

use crate::api::{ApiTournament, TournamentEnvelope};

/// Production Challonge API root.
pub const DEFAULT_BASE_URL: &str = "https://api.challonge.com/v1";

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "CHALLONGE_API_KEY";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Error from the Challonge API surface.
#[derive(Error, Debug)]
pub enum ChallongeError {
    /// Client-side configuration problem (missing key, bad base URL).
    #[error("challonge client not configured: {reason}")]
    NotConfigured { reason: String },

    /// HTTP transport error (connection, TLS, timeout).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API returned a non-2xx status.
    #[error("Challonge API {endpoint} returned {status}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Configuration for the Challonge client.
#[derive(Debug, Clone)]
pub struct ChallongeConfig {
    /// API root, e.g. `https://api.challonge.com/v1`.
    pub base_url: String,
    /// API key, sent as the `api_key` query parameter.
    pub api_key: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl ChallongeConfig {
    /// Configuration with the production base URL and default timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Read the API key from the `CHALLONGE_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, ChallongeError> {
        match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.is_empty() => Ok(Self::new(key)),
            _ => Err(ChallongeError::NotConfigured {
                reason: format!("set your Challonge API key in the {API_KEY_VAR} environment variable"),
            }),
        }
    }
}

/// Typed client for the Challonge v1 API.
#[derive(Debug)]
pub struct ChallongeClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ChallongeClient {
    /// Build a client from configuration.
    pub fn new(config: ChallongeConfig) -> Result<Self, ChallongeError> {
        url::Url::parse(&config.base_url).map_err(|e| ChallongeError::NotConfigured {
            reason: format!("invalid base URL {:?}: {e}", config.base_url),
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ChallongeError::NotConfigured {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    /// Fetch one tournament with its matches and participants included.
    pub async fn fetch_tournament(&self, id: &str) -> Result<ApiTournament, ChallongeError> {
        let endpoint = format!("{}/tournaments/{id}.json", self.base_url);
        tracing::debug!(%endpoint, "fetching tournament");

        let response = self
            .client
            .get(&endpoint)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("include_participants", "1"),
                ("include_matches", "1"),
            ])
            .send()
            .await
            .map_err(|source| ChallongeError::Http {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChallongeError::Api {
                endpoint,
                status: status.as_u16(),
                body,
            });
        }

        let envelope: TournamentEnvelope =
            response
                .json()
                .await
                .map_err(|source| ChallongeError::Deserialization {
                    endpoint: endpoint.clone(),
                    source,
                })?;

        tracing::debug!(
            matches = envelope.tournament.matches.len(),
            participants = envelope.tournament.participants.len(),
            "fetched tournament"
        );
        Ok(envelope.tournament)
    }
}
