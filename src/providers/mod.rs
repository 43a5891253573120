/*!
 * Provider implementations for translation endpoints.
 *
 * This module defines the seam between the orchestrator and the external
 * translation service, plus the HTTP client for the default JSON endpoint.
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for translation providers
///
/// The orchestrator only ever sees this trait, so tests can substitute a mock
/// and the HTTP client stays swappable for other endpoint shapes.
#[async_trait]
pub trait TranslationProvider: Send + Sync + Debug {
    /// Translate a single piece of text
    ///
    /// # Arguments
    /// * `text` - The source text to translate
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translated text or an error
    async fn translate(&self, text: &str) -> Result<String, ProviderError>;

    /// Test the connection to the provider
    ///
    /// # Returns
    /// * `Result<(), ProviderError>` - Ok if the endpoint answers, or an error
    async fn test_connection(&self) -> Result<(), ProviderError>;
}

pub mod translate_api;
