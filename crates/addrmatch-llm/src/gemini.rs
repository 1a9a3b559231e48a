//! Gemini Provider Implementation
//!
//! Integration with Google's Generative Language API (`generateContent`).
//! The API credential is injected at construction and sent as a request
//! header, so it never appears in URLs, error messages, or logs.
//!
//! # Examples
//!
//! ```no_run
//! use addrmatch_llm::GeminiOracle;
//!
//! let oracle = GeminiOracle::new("api-key-from-config");
//! ```

use addrmatch_domain::{OracleError, TextOracle};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::error;

/// Default Generative Language API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default timeout for oracle requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Gemini API provider
///
/// Performs one `generateContent` call per `generate` invocation. No
/// retries: every failure is terminal for the calling request.
pub struct GeminiOracle {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

/// Request body for the generateContent API
#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

/// A content block in the request or response
#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

/// A single text part
#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

/// Success envelope from the generateContent API
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

/// One generation candidate; only the first is consulted
#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

impl GeminiOracle {
    /// Create a new Gemini provider with the default endpoint and model
    ///
    /// # Parameters
    ///
    /// - `api_key`: Generative Language API credential
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, DEFAULT_MODEL, api_key)
    }

    /// Create a new Gemini provider
    ///
    /// # Parameters
    ///
    /// - `endpoint`: API base URL (e.g., "https://generativelanguage.googleapis.com/v1beta")
    /// - `model`: Model to use (e.g., "gemini-2.0-flash")
    /// - `api_key`: Generative Language API credential
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap();
        self
    }

    /// The model this provider is configured for
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextOracle for GeminiOracle {
    /// Generate text via the generateContent API
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The API is unreachable or the request times out
    /// - The API returns a non-success status
    /// - The success envelope cannot be decoded
    /// - The envelope contains no candidates or no text parts
    async fn generate(&self, prompt: &str) -> Result<String, OracleError> {
        let url = format!("{}/models/{}:generateContent", self.endpoint, self.model);

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| OracleError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            // Raw provider error bodies are logged for diagnosis, never returned
            error!("Gemini API error (HTTP {}): {}", status, error_text);

            return match status {
                reqwest::StatusCode::NOT_FOUND => {
                    Err(OracleError::ModelNotAvailable(self.model.clone()))
                }
                reqwest::StatusCode::TOO_MANY_REQUESTS => Err(OracleError::RateLimitExceeded),
                _ => Err(OracleError::Communication(format!("HTTP {}", status))),
            };
        }

        let envelope: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| OracleError::InvalidResponse(format!("Failed to decode response: {}", e)))?;

        let candidate = envelope
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| OracleError::InvalidResponse("Response contained no candidates".to_string()))?;

        let part = candidate
            .content
            .parts
            .into_iter()
            .next()
            .ok_or_else(|| OracleError::InvalidResponse("Candidate contained no text parts".to_string()))?;

        Ok(part.text)
    }
}
