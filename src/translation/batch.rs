/*!
 * Batch translation processing.
 *
 * This module fans one request per extracted item out over a bounded worker
 * pool and joins on all of them, with an all-or-nothing batch outcome.
 */

use futures::stream::{self, StreamExt};
use log::{debug, error};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Semaphore;

use crate::document_processor::TranslationItem;
use crate::errors::{ProviderError, TranslationError};

use super::core::TranslationService;

/// Aggregate result of one batch.
///
/// A batch either completes with every item translated or fails as a whole;
/// callers never see a partially filled item set presented as success.
#[derive(Debug)]
pub enum BatchOutcome {
    /// Every item received a translation, returned in placeholder order
    AllSucceeded(Vec<TranslationItem>),

    /// At least one request failed; the lowest-numbered failure is reported
    Failed {
        /// Placeholder number of the failed item
        placeholder_number: usize,
        /// The provider failure for that item
        error: ProviderError,
    },
}

impl BatchOutcome {
    /// Convert the outcome into a Result for `?`-style callers
    pub fn into_result(self) -> Result<Vec<TranslationItem>, TranslationError> {
        match self {
            BatchOutcome::AllSucceeded(items) => Ok(items),
            BatchOutcome::Failed {
                placeholder_number,
                error,
            } => Err(TranslationError::BatchFailed {
                placeholder_number,
                source: error,
            }),
        }
    }
}

/// Batch translator dispatching items against a bounded worker pool
pub struct BatchTranslator {
    /// The translation service to use
    service: TranslationService,

    /// Maximum number of concurrent requests
    max_concurrent_requests: usize,
}

impl BatchTranslator {
    /// Create a new batch translator with the service's configured ceiling
    pub fn new(service: TranslationService) -> Self {
        Self {
            max_concurrent_requests: service.config.concurrent_requests.max(1),
            service,
        }
    }

    /// Translate a batch of items.
    ///
    /// Submits exactly one request per item, with at most the configured
    /// number in flight at a time. Completion order is whatever the endpoint
    /// returns first; correlation is by item identity, so each item only ever
    /// receives the text its own request produced. The pool lives for this
    /// call only, and the method returns after every dispatched request has
    /// resolved. The progress callback sees (completed, total) counts.
    pub async fn translate_items(
        &self,
        items: Vec<TranslationItem>,
        progress_callback: impl Fn(usize, usize) + Clone + Send + 'static,
    ) -> BatchOutcome {
        if items.is_empty() {
            return BatchOutcome::AllSucceeded(Vec::new());
        }

        let total_items = items.len();
        debug!(
            "Dispatching {} translation request(s), at most {} in flight",
            total_items, self.max_concurrent_requests
        );

        // Create a semaphore to limit concurrent requests
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent_requests));
        let completed_items = Arc::new(AtomicUsize::new(0));

        let results = stream::iter(items.into_iter())
            .map(|mut item| {
                let service = self.service.clone();
                let semaphore = semaphore.clone();
                let completed_items = completed_items.clone();
                let progress_callback = progress_callback.clone();

                async move {
                    // Acquire a permit from the semaphore
                    let _permit = semaphore.acquire().await.unwrap();

                    let result = service.translate_text(&item.original_content).await;

                    let current = completed_items.fetch_add(1, Ordering::SeqCst) + 1;
                    progress_callback(current, total_items);

                    match result {
                        Ok(translated) => {
                            item.translate_content = Some(translated);
                            Ok(item)
                        }
                        Err(e) => Err((item.placeholder_number, e)),
                    }
                }
            })
            .buffer_unordered(self.max_concurrent_requests)
            .collect::<Vec<_>>()
            .await;

        // Fan-in: split successes from failures
        let mut translated_items = Vec::with_capacity(total_items);
        let mut failures = Vec::new();

        for result in results {
            match result {
                Ok(item) => translated_items.push(item),
                Err(failure) => failures.push(failure),
            }
        }

        // Any single failure fails the whole batch; report the lowest-numbered
        // one so repeated runs surface a stable error
        if let Some((placeholder_number, error)) = failures.into_iter().min_by_key(|(n, _)| *n) {
            error!(
                "Batch failed: item {} could not be translated: {}",
                placeholder_number, error
            );
            return BatchOutcome::Failed {
                placeholder_number,
                error,
            };
        }

        // Restore placeholder order lost to unordered completion
        translated_items.sort_by_key(|item| item.placeholder_number);
        BatchOutcome::AllSucceeded(translated_items)
    }
}
