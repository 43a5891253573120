use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::TranslationProvider;
use crate::errors::ProviderError;

/// Client for the JSON translation endpoint.
///
/// Wire contract: `POST {endpoint}` with body `{"text": "..."}`, expecting
/// `{"translated": "..."}` back. Anything else - non-2xx status, unparseable
/// body, missing `translated` field - is a hard failure of the request.
#[derive(Debug, Clone)]
pub struct TranslateApi {
    /// Endpoint URL requests are posted to
    endpoint: String,
    /// HTTP client for making requests
    client: Client,
}

/// Request body for the translation endpoint
#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    /// Source text to translate
    text: &'a str,
}

/// Response body from the translation endpoint
#[derive(Debug, Deserialize)]
struct TranslateResponse {
    /// Translated text; absent means the response is malformed
    translated: Option<String>,
}

impl TranslateApi {
    /// Create a new client with a per-request timeout
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ProviderError::ConnectionError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(TranslateApi {
            endpoint: endpoint.into(),
            client,
        })
    }

    /// Endpoint this client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TranslationProvider for TranslateApi {
    async fn translate(&self, text: &str) -> Result<String, ProviderError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&TranslateRequest { text })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::ConnectionError(format!("Request timed out: {}", e))
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!("Translation endpoint returned {}: {}", status, message);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body: TranslateResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        body.translated
            .ok_or_else(|| ProviderError::MissingField("translated".to_string()))
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        // A minimal round trip; the endpoint has no health route of its own
        self.translate("ping").await.map(|_| ())
    }
}
