/*!
 * # doctran - placeholder-based document translation
 *
 * A Rust library for translating structured documents through an external
 * translation service while preserving layout and formatting.
 *
 * ## How it works
 *
 * - Extraction walks the document tree (paragraphs, then table cells) and
 *   replaces each text body with a numbered `{{n}}` placeholder token,
 *   keeping section-numbering prefixes like "2.1 " in place
 * - The template document is persisted as an intermediate artifact
 * - Every extracted item is translated through the external endpoint under a
 *   bounded worker pool, all-or-nothing per batch
 * - Refill substitutes the translations back into the template, carrying over
 *   each paragraph's first-run formatting
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `document`: Document tree and run-style model
 * - `document_processor`: Placeholder extraction and refill engine
 * - `template_store`: Template artifact and output persistence
 * - `translation`: Batch translation orchestration:
 *   - `translation::core`: Service definition and per-item requests
 *   - `translation::batch`: Bounded-concurrency fan-out/fan-in
 * - `providers`: Client for the external translation endpoint
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod document;
pub mod document_processor;
pub mod errors;
pub mod providers;
pub mod template_store;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use document::{Document, Paragraph, Run, RunStyle, Table, TableCell, TableRow};
pub use document_processor::{DocumentProcessor, DocumentRecord, TranslationItem};
pub use errors::{AppError, DocumentError, ProviderError, TranslationError};
pub use template_store::TemplateStore;
pub use translation::{BatchOutcome, BatchTranslator, TranslationService};
