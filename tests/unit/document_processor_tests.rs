/*!
 * Tests for placeholder extraction and refill
 */

use std::collections::HashMap;

use doctran::document::{Document, Paragraph, Run, RunStyle};
use doctran::document_processor::{
    placeholder_token, split_numbering, substitute_placeholders, DocumentProcessor,
    TranslationItem,
};

use crate::common;

/// Test numbering prefix detection
#[test]
fn test_split_numbering_withSectionPrefix_shouldSeparatePrefixAndBody() {
    let (prefix, body) = split_numbering("2.1 Scope of Work");
    assert_eq!(prefix, "2.1 ");
    assert_eq!(body, "Scope of Work");

    let (prefix, body) = split_numbering("3.2.1\tDeeply nested heading");
    assert_eq!(prefix, "3.2.1\t");
    assert_eq!(body, "Deeply nested heading");
}

#[test]
fn test_split_numbering_withoutPrefix_shouldReturnWholeTextAsBody() {
    let (prefix, body) = split_numbering("Scope of Work");
    assert_eq!(prefix, "");
    assert_eq!(body, "Scope of Work");
}

/// A bare number with no trailing whitespace is not a section prefix
#[test]
fn test_split_numbering_withBareNumber_shouldNotMatch() {
    let (prefix, body) = split_numbering("2.1");
    assert_eq!(prefix, "");
    assert_eq!(body, "2.1");
}

#[test]
fn test_placeholder_token_shouldKeepPrefixVerbatim() {
    assert_eq!(placeholder_token("2.1 ", 7), "2.1 {{7}}");
    assert_eq!(placeholder_token("", 1), "{{1}}");
}

/// Test multi-token substitution in one pass
#[test]
fn test_substitute_placeholders_withMultipleTokens_shouldReplaceAll() {
    let lookup: HashMap<usize, String> =
        [(1, "A".to_string()), (2, "B".to_string())].into_iter().collect();
    assert_eq!(substitute_placeholders("{{1}} / {{2}}", &lookup), "A / B");
}

/// Tokens without a mapping must be left untouched
#[test]
fn test_substitute_placeholders_withUnknownToken_shouldLeaveTextUnchanged() {
    let lookup: HashMap<usize, String> = HashMap::new();
    assert_eq!(
        substitute_placeholders("See {{7}} below", &lookup),
        "See {{7}} below"
    );
}

/// Replacement values are inserted literally, never rescanned for tokens
#[test]
fn test_substitute_placeholders_withTokenInReplacement_shouldNotReinterpret() {
    let lookup: HashMap<usize, String> = [
        (1, "see {{2}}".to_string()),
        (2, "other".to_string()),
    ]
    .into_iter()
    .collect();
    assert_eq!(substitute_placeholders("{{1}}", &lookup), "see {{2}}");
}

#[test]
fn test_substitute_placeholders_shouldPreserveSurroundingLiteralText() {
    let lookup: HashMap<usize, String> = [(3, "translated".to_string())].into_iter().collect();
    assert_eq!(
        substitute_placeholders("before {{3}} after", &lookup),
        "before translated after"
    );
}

/// Extraction assigns sequential numbers to every non-empty paragraph
#[test]
fn test_extract_content_withSampleDocument_shouldNumberAllNonEmptyParagraphs() {
    let mut document = common::sample_document();
    let items = DocumentProcessor::extract_content(&mut document);

    assert_eq!(items.len(), common::sample_document_texts().len());
    for (index, item) in items.iter().enumerate() {
        assert_eq!(item.placeholder_number, index + 1);
        assert!(item.translate_content.is_none());
    }

    // Numbering prefix is kept in the document, body moved to the item
    assert_eq!(document.paragraphs[0].text(), "2.1 {{1}}");
    assert_eq!(items[0].original_content, "Scope of Work");
    assert_eq!(document.paragraphs[1].text(), "{{2}}");
    assert_eq!(items[1].original_content, "The contractor shall deliver the goods.");
}

/// Empty and whitespace-only paragraphs consume no placeholder number
#[test]
fn test_extract_content_withEmptyParagraphs_shouldSkipWithoutConsumingNumbers() {
    let mut document = common::sample_document();
    let items = DocumentProcessor::extract_content(&mut document);

    assert_eq!(document.paragraphs[2].text(), "");
    assert_eq!(document.paragraphs[3].text(), "   ");

    // The table cell right after the skipped paragraphs continues the sequence
    assert_eq!(items[2].placeholder_number, 3);
    assert_eq!(items[2].original_content, "Deliverable");
}

/// Table cell numbers strictly follow all top-level paragraph numbers,
/// ordered row-major then cell order
#[test]
fn test_extract_content_withTable_shouldNumberCellsAfterParagraphsRowMajor() {
    let mut document = common::sample_document();
    let items = DocumentProcessor::extract_content(&mut document);

    let top_level_max = 2; // two non-empty top-level paragraphs
    let cell_items: Vec<&TranslationItem> = items.iter().skip(top_level_max).collect();
    assert!(cell_items.iter().all(|i| i.placeholder_number > top_level_max));

    let cell_contents: Vec<&str> = cell_items.iter().map(|i| i.original_content.as_str()).collect();
    assert_eq!(
        cell_contents,
        vec!["Deliverable", "Due date", "Final report", "End of quarter"]
    );

    let cell_texts: Vec<String> = document.tables[0]
        .rows
        .iter()
        .flat_map(|row| row.cells.iter())
        .flat_map(|cell| cell.paragraphs.iter())
        .map(|p| p.text())
        .collect();
    assert_eq!(cell_texts, vec!["{{3}}", "{{4}}", "{{5}}", "{{6}}"]);
}

/// Running extraction twice on the same input assigns identical numbers
#[test]
fn test_extract_content_shouldBeDeterministic() {
    let mut first = common::sample_document();
    let mut second = common::sample_document();

    let items_first = DocumentProcessor::extract_content(&mut first);
    let items_second = DocumentProcessor::extract_content(&mut second);

    assert_eq!(items_first, items_second);
    assert_eq!(first, second);
}

/// Identity round-trip: translating every item to itself reproduces the
/// original visible text
#[test]
fn test_extract_then_fill_withIdentityTranslation_shouldRoundTrip() {
    let original = common::sample_document();
    let mut template = original.clone();

    let mut items = DocumentProcessor::extract_content(&mut template);
    for item in &mut items {
        item.translate_content = Some(item.original_content.clone());
    }

    DocumentProcessor::fill_template(&mut template, &items);

    assert_eq!(template.all_text(), original.all_text());
}

/// Untranslated items leave their tokens in place rather than corrupting text
#[test]
fn test_fill_template_withMissingTranslation_shouldKeepToken() {
    let mut document = common::sample_document();
    let mut items = DocumentProcessor::extract_content(&mut document);

    for item in &mut items {
        if item.placeholder_number != 2 {
            item.translate_content = Some(item.original_content.to_uppercase());
        }
    }

    DocumentProcessor::fill_template(&mut document, &items);

    assert_eq!(document.paragraphs[0].text(), "2.1 SCOPE OF WORK");
    assert_eq!(document.paragraphs[1].text(), "{{2}}");
}

/// First-run formatting survives both extraction and refill
#[test]
fn test_extract_and_fill_shouldPreserveFirstRunStyle() {
    let style = RunStyle {
        bold: Some(true),
        italic: Some(true),
        ..RunStyle::default()
    };
    let mut document = Document {
        paragraphs: vec![Paragraph {
            runs: vec![
                Run::styled("1 Heading ", style.clone()),
                Run::new("with a plain tail"),
            ],
        }],
        tables: Vec::new(),
    };

    let mut items = DocumentProcessor::extract_content(&mut document);
    assert_eq!(document.paragraphs[0].runs.len(), 1);
    assert_eq!(document.paragraphs[0].runs[0].style, Some(style.clone()));

    items[0].translate_content = Some("translated".to_string());
    DocumentProcessor::fill_template(&mut document, &items);

    assert_eq!(document.paragraphs[0].text(), "1 translated");
    assert_eq!(document.paragraphs[0].runs[0].style, Some(style));
}

/// Multi-run paragraph text is concatenated before matching, so the prefix
/// can span run boundaries
#[test]
fn test_extract_content_withPrefixAcrossRuns_shouldStillDetectPrefix() {
    let mut document = Document {
        paragraphs: vec![Paragraph {
            runs: vec![Run::new("2."), Run::new("3 Body text")],
        }],
        tables: Vec::new(),
    };

    let items = DocumentProcessor::extract_content(&mut document);

    assert_eq!(document.paragraphs[0].text(), "2.3 {{1}}");
    assert_eq!(items[0].original_content, "Body text");
}
