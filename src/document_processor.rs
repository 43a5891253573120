use std::collections::HashMap;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::document::{Document, Paragraph};

// @module: Placeholder extraction and refill over document trees

// @const: Leading section-numbering regex ("2.1.3 " style prefixes)
static NUMBERING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)*\s+)(.*)$").unwrap()
});

// @const: Placeholder token regex ({{n}})
static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{(\d+)\}\}").unwrap()
});

/// One translatable slot extracted from a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationItem {
    /// Number of the placeholder token standing in for this item
    pub placeholder_number: usize,

    /// Text extracted from the document (numbering prefix removed)
    pub original_content: String,

    /// Translated text, populated by the orchestrator before refill
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub translate_content: Option<String>,
}

impl TranslationItem {
    /// Create a not-yet-translated item
    pub fn new(placeholder_number: usize, original_content: impl Into<String>) -> Self {
        TranslationItem {
            placeholder_number,
            original_content: original_content.into(),
            translate_content: None,
        }
    }
}

/// Everything produced by one extraction: the record that ties a template
/// artifact to its translation items for the rest of the cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Opaque identifier of this extraction
    pub id: String,

    /// Filename of the uploaded document
    pub original_filename: String,

    /// Filename of the persisted template artifact
    pub template_filename: String,

    /// Items in placeholder-number order
    pub items: Vec<TranslationItem>,
}

impl DocumentRecord {
    /// Create a record with a fresh id
    pub fn new(
        original_filename: impl Into<String>,
        template_filename: impl Into<String>,
        items: Vec<TranslationItem>,
    ) -> Self {
        DocumentRecord {
            id: Uuid::new_v4().to_string(),
            original_filename: original_filename.into(),
            template_filename: template_filename.into(),
            items,
        }
    }
}

/// Split a paragraph's text into a section-numbering prefix and the body.
///
/// A prefix is a leading dotted numeric sequence followed by whitespace
/// ("2.1 ", "3.2.1\t"). The prefix is returned verbatim, trailing whitespace
/// included, so it can be written back in front of the placeholder token.
/// Text without such a prefix comes back as ("", whole text).
pub fn split_numbering(text: &str) -> (&str, &str) {
    match NUMBERING_REGEX.captures(text) {
        Some(caps) => {
            let prefix = caps.get(1).map_or("", |m| m.as_str());
            let body = caps.get(2).map_or("", |m| m.as_str());
            (prefix, body)
        }
        None => ("", text),
    }
}

/// Token text written into the document in place of an extracted body
pub fn placeholder_token(prefix: &str, number: usize) -> String {
    format!("{}{{{{{}}}}}", prefix, number)
}

/// Replace every `{{n}}` token whose number is present in the lookup.
///
/// One left-to-right pass. Tokens without a mapping are kept verbatim so a
/// missing translation never corrupts the surrounding text; literal text
/// between tokens is preserved byte-for-byte, and replacement values are
/// inserted literally (never rescanned for placeholder syntax).
pub fn substitute_placeholders(text: &str, lookup: &HashMap<usize, String>) -> String {
    PLACEHOLDER_REGEX
        .replace_all(text, |caps: &regex::Captures| {
            let number: usize = caps[1].parse().unwrap_or(0);
            match lookup.get(&number) {
                Some(translated) => translated.clone(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Document-level placeholder extraction and refill
pub struct DocumentProcessor;

impl DocumentProcessor {
    /// Extract translatable content from a document, in place.
    ///
    /// Visits every text-bearing paragraph exactly once - top-level paragraphs
    /// first, then every table cell's paragraphs - replacing each body with a
    /// numbered placeholder token and collecting one item per token. The
    /// counter is threaded through the whole walk so numbers stay globally
    /// unique across paragraphs and nested table cells. Running twice on the
    /// same document assigns identical numbers to the same positions.
    pub fn extract_content(document: &mut Document) -> Vec<TranslationItem> {
        let mut items = Vec::new();
        let mut counter: usize = 1;

        for paragraph in &mut document.paragraphs {
            Self::extract_paragraph(paragraph, &mut counter, &mut items);
        }

        for table in &mut document.tables {
            for row in &mut table.rows {
                for cell in &mut row.cells {
                    for paragraph in &mut cell.paragraphs {
                        Self::extract_paragraph(paragraph, &mut counter, &mut items);
                    }
                }
            }
        }

        debug!("Extracted {} translatable item(s) from document", items.len());
        items
    }

    /// Refill a template document with translated content, in place.
    ///
    /// Builds a number-to-text lookup from the items (untranslated items
    /// contribute no key, leaving their tokens untouched) and walks the
    /// document in the same order as extraction, substituting every mapped
    /// token and rewriting each paragraph with its first run's style kept.
    pub fn fill_template(document: &mut Document, items: &[TranslationItem]) {
        let lookup: HashMap<usize, String> = items
            .iter()
            .filter_map(|item| {
                item.translate_content
                    .as_ref()
                    .map(|content| (item.placeholder_number, content.clone()))
            })
            .collect();

        for paragraph in &mut document.paragraphs {
            Self::fill_paragraph(paragraph, &lookup);
        }

        for table in &mut document.tables {
            for row in &mut table.rows {
                for cell in &mut row.cells {
                    for paragraph in &mut cell.paragraphs {
                        Self::fill_paragraph(paragraph, &lookup);
                    }
                }
            }
        }

        debug!("Filled document from {} item(s)", items.len());
    }

    // Empty or whitespace-only paragraphs are skipped without consuming a
    // placeholder number.
    fn extract_paragraph(
        paragraph: &mut Paragraph,
        counter: &mut usize,
        items: &mut Vec<TranslationItem>,
    ) {
        let original_text = paragraph.text();
        if original_text.trim().is_empty() {
            return;
        }

        let (prefix, body) = split_numbering(&original_text);
        let token_text = placeholder_token(prefix, *counter);

        items.push(TranslationItem::new(*counter, body));
        paragraph.rewrite_text(token_text);
        *counter += 1;
    }

    fn fill_paragraph(paragraph: &mut Paragraph, lookup: &HashMap<usize, String>) {
        let text = paragraph.text();
        if text.trim().is_empty() {
            return;
        }

        let replaced = substitute_placeholders(&text, lookup);
        paragraph.rewrite_text(replaced);
    }
}
