/*!
 * Core translation service implementation.
 *
 * This module contains the TranslationService struct, which owns the provider
 * client and issues one request per item on behalf of the batch orchestrator.
 */

use anyhow::Result;
use std::sync::Arc;

use crate::app_config::TranslationConfig;
use crate::errors::ProviderError;
use crate::providers::translate_api::TranslateApi;
use crate::providers::TranslationProvider;

/// Translation service over a provider client
///
/// Cheap to clone; clones share the provider, so every worker task in a batch
/// reuses the same HTTP connection pool.
#[derive(Debug, Clone)]
pub struct TranslationService {
    /// The provider answering translation requests
    provider: Arc<dyn TranslationProvider>,

    /// Translation configuration
    pub config: TranslationConfig,
}

impl TranslationService {
    /// Create a service talking to the configured HTTP endpoint
    pub fn new(config: TranslationConfig) -> Result<Self> {
        let provider = TranslateApi::new(&config.endpoint, config.timeout_secs)?;
        Ok(TranslationService {
            provider: Arc::new(provider),
            config,
        })
    }

    /// Create a service over an explicit provider (used by tests to inject
    /// mocks, and by callers with non-default endpoint shapes)
    pub fn with_provider(provider: Arc<dyn TranslationProvider>, config: TranslationConfig) -> Self {
        TranslationService { provider, config }
    }

    /// Translate one piece of text.
    ///
    /// The service applies no caching or deduplication; identical text in two
    /// items produces two requests, as the endpoint is treated as a pure
    /// function of its input.
    pub async fn translate_text(&self, text: &str) -> Result<String, ProviderError> {
        self.provider.translate(text).await
    }

    /// Check that the provider is reachable
    pub async fn test_connection(&self) -> Result<(), ProviderError> {
        self.provider.test_connection().await
    }
}
