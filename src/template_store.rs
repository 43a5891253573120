use anyhow::{Context, Result};
use chrono::Utc;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::app_config::StorageConfig;
use crate::document::Document;
use crate::errors::DocumentError;

// @module: Template artifact and output document persistence

/// Stores template artifacts between the extract and fill phases, and writes
/// the filled output documents.
///
/// The template artifact is the document with its content replaced by
/// placeholder tokens; it is the only state that crosses the extract/translate
/// boundary besides the in-memory item list, so it has to be re-readable by
/// the fill phase under the filename generated here.
pub struct TemplateStore {
    // @field: Directory for template artifacts
    template_dir: PathBuf,

    // @field: Directory for filled documents
    product_dir: PathBuf,
}

impl TemplateStore {
    /// Create a store over the configured directories
    pub fn new(config: &StorageConfig) -> Self {
        TemplateStore {
            template_dir: config.template_dir.clone(),
            product_dir: config.product_dir.clone(),
        }
    }

    /// Generate the template filename for an uploaded document.
    ///
    /// "report.json" becomes "report_template_{unix_ts}.json" so concurrent
    /// extractions of the same file never collide on disk.
    pub fn template_filename(original_filename: &str) -> String {
        let base_name = original_filename
            .strip_suffix(".json")
            .unwrap_or(original_filename);
        format!("{}_template_{}.json", base_name, Utc::now().timestamp_millis())
    }

    /// Persist a template document under a generated filename, returning it
    pub fn save_template(&self, document: &Document, original_filename: &str) -> Result<String> {
        ensure_dir(&self.template_dir)?;

        let template_filename = Self::template_filename(original_filename);
        let path = self.template_dir.join(&template_filename);
        let content = serde_json::to_string_pretty(document)
            .context("Failed to serialize template document")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write template artifact: {:?}", path))?;

        debug!("Saved template artifact {:?}", path);
        Ok(template_filename)
    }

    /// Load a template document back for the fill phase
    pub fn load_template(&self, template_filename: &str) -> Result<Document, DocumentError> {
        let path = self.template_dir.join(template_filename);
        if !path.exists() {
            return Err(DocumentError::TemplateMissing(template_filename.to_string()));
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| DocumentError::Fill(format!("cannot read template {:?}: {}", path, e)))?;
        serde_json::from_str(&content)
            .map_err(|e| DocumentError::Fill(format!("cannot parse template {:?}: {}", path, e)))
    }

    /// Write a filled document to the product directory under the original
    /// filename, returning the full output path
    pub fn save_product(&self, document: &Document, original_filename: &str) -> Result<PathBuf> {
        ensure_dir(&self.product_dir)?;

        let path = self.product_dir.join(original_filename);
        let content = serde_json::to_string_pretty(document)
            .context("Failed to serialize output document")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write output document: {:?}", path))?;

        debug!("Saved output document {:?}", path);
        Ok(path)
    }
}

/// Read a document from an arbitrary path (the upload side of the cycle)
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Document, DocumentError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| DocumentError::Parse(format!("cannot read {:?}: {}", path, e)))?;
    serde_json::from_str(&content)
        .map_err(|e| DocumentError::Parse(format!("cannot parse {:?}: {}", path, e)))
}

// @creates: Directory and parents if needed
fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {:?}", path))?;
    }
    Ok(())
}
