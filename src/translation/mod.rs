/*!
 * Translation orchestration for extracted document items.
 *
 * - `core`: service definition and per-item requests against the provider
 * - `batch`: bounded-concurrency fan-out/fan-in over a whole item batch
 */

// Re-export main types for easier usage
pub use self::batch::{BatchOutcome, BatchTranslator};
pub use self::core::TranslationService;

// Submodules
pub mod batch;
pub mod core;
