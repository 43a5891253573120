/*!
 * Tests for template artifact persistence
 */

use anyhow::Result;
use doctran::errors::DocumentError;
use doctran::template_store::{read_document, TemplateStore};

use crate::common;

/// Template save/load round trip through the store
#[test]
fn test_save_and_load_template_shouldRoundTrip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = common::config_with_storage(&temp_dir);
    let store = TemplateStore::new(&config.storage);

    let document = common::sample_document();
    let template_filename = store.save_template(&document, "contract.json")?;

    assert!(template_filename.starts_with("contract_template_"));
    assert!(template_filename.ends_with(".json"));

    let loaded = store.load_template(&template_filename)?;
    assert_eq!(loaded, document);
    Ok(())
}

/// A missing template artifact is reported as such, not as a parse error
#[test]
fn test_load_template_withMissingFile_shouldReturnTemplateMissing() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = common::config_with_storage(&temp_dir);
    let store = TemplateStore::new(&config.storage);

    let result = store.load_template("gone_template_0.json");
    assert!(matches!(result, Err(DocumentError::TemplateMissing(_))));
    Ok(())
}

#[test]
fn test_save_product_shouldWriteUnderOriginalFilename() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = common::config_with_storage(&temp_dir);
    let store = TemplateStore::new(&config.storage);

    let document = common::sample_document();
    let output_path = store.save_product(&document, "contract.json")?;

    assert_eq!(output_path, config.storage.product_dir.join("contract.json"));
    assert!(output_path.exists());

    let reloaded = read_document(&output_path)?;
    assert_eq!(reloaded, document);
    Ok(())
}

/// Unreadable input surfaces as a document parsing error
#[test]
fn test_read_document_withGarbage_shouldReturnParseError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("broken.json");
    std::fs::write(&path, "this is not a document")?;

    let result = read_document(&path);
    assert!(matches!(result, Err(DocumentError::Parse(_))));

    let missing = read_document(temp_dir.path().join("absent.json"));
    assert!(matches!(missing, Err(DocumentError::Parse(_))));
    Ok(())
}

#[test]
fn test_template_filename_shouldStripJsonSuffix() {
    let name = TemplateStore::template_filename("report.json");
    assert!(name.starts_with("report_template_"));
    assert!(!name.contains(".json_"));
}
