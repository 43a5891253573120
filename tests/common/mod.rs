/*!
 * Common test utilities for the doctran test suite
 */

// Allow dead code - helpers are shared across independent test modules
#![allow(dead_code)]

use anyhow::Result;
use tempfile::TempDir;

use doctran::app_config::{Config, StorageConfig};
use doctran::document::{Document, Paragraph, Run, RunStyle, Table, TableCell, TableRow};


/// Create a temporary directory for test artifacts
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Config whose storage directories live under the given temp dir
pub fn config_with_storage(temp_dir: &TempDir) -> Config {
    Config {
        storage: StorageConfig {
            template_dir: temp_dir.path().join("templates"),
            product_dir: temp_dir.path().join("products"),
        },
        ..Config::default()
    }
}

/// A document exercising every traversal case: a numbered heading with run
/// styling, a plain paragraph, an empty paragraph, and a 2x2 table
pub fn sample_document() -> Document {
    let heading_style = RunStyle {
        bold: Some(true),
        font: Some("Calibri".to_string()),
        ..RunStyle::default()
    };

    Document {
        paragraphs: vec![
            Paragraph {
                runs: vec![Run::styled("2.1 Scope of Work", heading_style)],
            },
            Paragraph::from_text("The contractor shall deliver the goods."),
            Paragraph::default(),
            Paragraph::from_text("   "),
        ],
        tables: vec![Table {
            rows: vec![
                TableRow {
                    cells: vec![
                        TableCell {
                            paragraphs: vec![Paragraph::from_text("Deliverable")],
                        },
                        TableCell {
                            paragraphs: vec![Paragraph::from_text("Due date")],
                        },
                    ],
                },
                TableRow {
                    cells: vec![
                        TableCell {
                            paragraphs: vec![Paragraph::from_text("Final report")],
                        },
                        TableCell {
                            paragraphs: vec![Paragraph::from_text("End of quarter")],
                        },
                    ],
                },
            ],
        }],
    }
}

/// Texts of the sample document's non-empty paragraphs, in traversal order
pub fn sample_document_texts() -> Vec<&'static str> {
    vec![
        "2.1 Scope of Work",
        "The contractor shall deliver the goods.",
        "Deliverable",
        "Due date",
        "Final report",
        "End of quarter",
    ]
}
