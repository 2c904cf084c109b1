use std::env;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::CompressionError;

const DEFAULT_BASE_URL: &str = "https://api.scaledown.xyz";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

//
// ─── CONFIG ───────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug)]
pub struct CompressionConfig {
    pub base_url: String,
    pub api_key: String,
}

impl CompressionConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("SCALEDOWN_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url =
            env::var("SCALEDOWN_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Some(Self { base_url, api_key })
    }
}

//
// ─── RESULTS ──────────────────────────────────────────────────────────────────
//

/// Whether a compressed prompt came from the live API or the fallback text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionStatus {
    Live,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedPrompt {
    pub text: String,
    pub status: CompressionStatus,
}

//
// ─── SERVICE ──────────────────────────────────────────────────────────────────
//

/// Client for the external prompt-compression API.
///
/// Unconfigured instances stay usable: `compress` fails with `Disabled` and
/// `compress_or_fallback` serves the fallback text, so callers never need to
/// special-case a missing API key.
#[derive(Clone)]
pub struct CompressionService {
    client: Client,
    config: Option<CompressionConfig>,
}

impl CompressionService {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(CompressionConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<CompressionConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Compress `prompt` against `context` through the API.
    ///
    /// One POST with a fixed timeout; no retries.
    ///
    /// # Errors
    ///
    /// Returns `CompressionError` when the service is unconfigured, the
    /// request fails or times out, the API answers with a non-2xx status, or
    /// the response carries no compressed text.
    pub async fn compress(
        &self,
        context: &str,
        prompt: &str,
    ) -> Result<String, CompressionError> {
        let config = self.config.as_ref().ok_or(CompressionError::Disabled)?;

        let url = format!("{}/compress/raw/", config.base_url.trim_end_matches('/'));
        let payload = CompressRequest {
            context,
            prompt,
            scaledown: ScaleDownOptions { rate: "auto" },
        };

        let response = self
            .client
            .post(url)
            .header("x-api-key", &config.api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CompressionError::HttpStatus(response.status()));
        }

        let body: CompressResponse = response.json().await?;
        let text = body.compressed_prompt.unwrap_or_default();
        if text.trim().is_empty() {
            return Err(CompressionError::EmptyResponse);
        }

        Ok(text.trim().to_string())
    }

    /// Compress, substituting `fallback` on any failure.
    ///
    /// Local try/fallback, not a retry loop; the status on the returned value
    /// records which branch ran, and the failure is logged at `warn`.
    pub async fn compress_or_fallback(
        &self,
        context: &str,
        prompt: &str,
        fallback: &str,
    ) -> CompressedPrompt {
        match self.compress(context, prompt).await {
            Ok(text) => CompressedPrompt {
                text,
                status: CompressionStatus::Live,
            },
            Err(err) => {
                warn!(error = %err, "prompt compression unavailable, using fallback text");
                CompressedPrompt {
                    text: fallback.to_string(),
                    status: CompressionStatus::Fallback,
                }
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct CompressRequest<'a> {
    context: &'a str,
    prompt: &'a str,
    scaledown: ScaleDownOptions,
}

#[derive(Debug, Serialize)]
struct ScaleDownOptions {
    rate: &'static str,
}

#[derive(Debug, Deserialize)]
struct CompressResponse {
    compressed_prompt: Option<String>,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
