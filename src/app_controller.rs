use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::app_config::Config;
use crate::document_processor::{DocumentProcessor, DocumentRecord};
use crate::template_store::{self, TemplateStore};
use crate::translation::{BatchTranslator, TranslationService};

// @module: Application controller for document translation

/// Main application controller for one upload-translate-download cycle
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Run the full cycle on a single document file: extract, translate, fill.
    ///
    /// Any failure - parse, translation batch, or fill - aborts the run with
    /// an error and no output document is written. A half-translated document
    /// is never produced.
    pub async fn run(&self, input_file: PathBuf, force_overwrite: bool) -> Result<()> {
        let start_time = std::time::Instant::now();

        if !input_file.exists() {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let original_filename = Self::original_filename(&input_file)?;
        let store = TemplateStore::new(&self.config.storage);

        // Skip if the output already exists
        let output_path = self.config.storage.product_dir.join(&original_filename);
        if output_path.exists() && !force_overwrite {
            warn!("Skipping file, output already exists (use -f to force overwrite)");
            return Ok(());
        }

        // Phase 1: extract content into numbered placeholders
        let record = self.extract(&input_file, &store)?;
        info!(
            "Extracted {} translatable item(s) from {}",
            record.items.len(),
            original_filename
        );

        // Phase 2: translate every item, all-or-nothing
        let record = self.translate(record).await?;

        // Phase 3: refill the persisted template with the translations
        let output_path = self.fill(&record, &store)?;

        info!(
            "Translated document written to {:?} in {:.1}s",
            output_path,
            start_time.elapsed().as_secs_f64()
        );
        Ok(())
    }

    /// Run the cycle on every document found under a directory
    pub async fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        if !input_dir.is_dir() {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let mut processed = 0usize;
        let mut failed = 0usize;

        for entry in WalkDir::new(&input_dir).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();
            if !path.is_file() || path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }

            info!("Processing {:?}", path);
            match self.run(path.to_path_buf(), force_overwrite).await {
                Ok(()) => processed += 1,
                Err(e) => {
                    error!("Failed to process {:?}: {}", path, e);
                    failed += 1;
                }
            }
        }

        if processed == 0 && failed == 0 {
            warn!("No document files found under {:?}", input_dir);
        } else {
            info!("Processed {} document(s), {} failed", processed, failed);
        }

        if failed > 0 {
            return Err(anyhow!("{} document(s) failed to translate", failed));
        }
        Ok(())
    }

    /// Extract only: produce the template artifact and the item record
    /// without calling the translation endpoint.
    pub fn extract_to_record(&self, input_file: &Path) -> Result<DocumentRecord> {
        let store = TemplateStore::new(&self.config.storage);
        self.extract(input_file, &store)
    }

    // Extraction phase: read, walk, persist the template artifact.
    fn extract(&self, input_file: &Path, store: &TemplateStore) -> Result<DocumentRecord> {
        let original_filename = Self::original_filename(input_file)?;
        let mut document = template_store::read_document(input_file)?;

        let items = DocumentProcessor::extract_content(&mut document);
        if items.is_empty() {
            warn!("Document has no translatable content");
        }

        let template_filename = store.save_template(&document, &original_filename)?;
        Ok(DocumentRecord::new(original_filename, template_filename, items))
    }

    // Translation phase: bounded fan-out over the record's items with a
    // progress bar, returning the record with every item translated.
    async fn translate(&self, mut record: DocumentRecord) -> Result<DocumentRecord> {
        if record.items.is_empty() {
            return Ok(record);
        }

        let service = TranslationService::new(self.config.translation.clone())?;
        let translator = BatchTranslator::new(service);

        let progress_bar = ProgressBar::new(record.items.len() as u64);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} items")?
                .progress_chars("=> "),
        );

        let pb = progress_bar.clone();
        let items = std::mem::take(&mut record.items);
        let outcome = translator
            .translate_items(items, move |current, _total| {
                pb.set_position(current as u64);
            })
            .await;
        progress_bar.finish_and_clear();

        record.items = outcome.into_result()?;
        debug!("All {} item(s) translated", record.items.len());
        Ok(record)
    }

    // Fill phase: reload the template artifact and substitute translations.
    fn fill(&self, record: &DocumentRecord, store: &TemplateStore) -> Result<PathBuf> {
        let mut template = store.load_template(&record.template_filename)?;
        DocumentProcessor::fill_template(&mut template, &record.items);
        store.save_product(&template, &record.original_filename)
    }

    fn original_filename(input_file: &Path) -> Result<String> {
        input_file
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(|| anyhow!("Input path has no filename: {:?}", input_file))
    }
}
