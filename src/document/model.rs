use serde::{Deserialize, Serialize};

// @module: Document tree and run-level formatting model

/// Formatting attributes of a single run.
///
/// A small immutable value object; cloning one is the way formatting survives
/// a rewrite. All fields are optional so an empty style means "inherit the
/// document defaults".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RunStyle {
    /// Font family name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,

    /// Font size in points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_pt: Option<f32>,

    /// Bold flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,

    /// Italic flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,

    /// Underline flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,

    /// Text color as a hex string (e.g. "FF0000")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A contiguous span of text sharing one style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// Text content of the run
    pub text: String,

    /// Style applied to the run, if any
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub style: Option<RunStyle>,
}

impl Run {
    /// Create an unstyled run
    pub fn new(text: impl Into<String>) -> Self {
        Run {
            text: text.into(),
            style: None,
        }
    }

    /// Create a run with an explicit style
    pub fn styled(text: impl Into<String>, style: RunStyle) -> Self {
        Run {
            text: text.into(),
            style: Some(style),
        }
    }
}

/// A paragraph: an ordered list of runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Paragraph {
    /// Runs making up the paragraph
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Create a paragraph holding a single unstyled run
    pub fn from_text(text: impl Into<String>) -> Self {
        Paragraph {
            runs: vec![Run::new(text)],
        }
    }

    /// Concatenated text of all runs, in run order
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Replace the paragraph's entire text while keeping the first run's style.
    ///
    /// Collapses the run structure into a single run. Any formatting
    /// boundaries between runs are lost; the new run inherits whatever style
    /// the first existing run carried, or none if the paragraph was empty or
    /// its first run was unstyled.
    pub fn rewrite_text(&mut self, new_text: impl Into<String>) {
        let copied_style = self.runs.first().and_then(|run| run.style.clone());
        self.runs.clear();
        self.runs.push(Run {
            text: new_text.into(),
            style: copied_style,
        });
    }
}

/// A table cell holding nested paragraphs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TableCell {
    /// Paragraphs inside the cell
    pub paragraphs: Vec<Paragraph>,
}

/// A table row holding cells in column order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TableRow {
    /// Cells of the row
    pub cells: Vec<TableCell>,
}

/// A table holding rows in document order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Table {
    /// Rows of the table
    pub rows: Vec<TableRow>,
}

/// A structured document: top-level paragraphs followed by tables.
///
/// Traversal order is fixed: paragraphs in document order first, then tables
/// in document order, each table row by row, each row cell by cell, each cell
/// paragraph by paragraph. Everything that walks a document relies on this
/// order being stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Document {
    /// Top-level paragraphs in document order
    pub paragraphs: Vec<Paragraph>,

    /// Tables in document order
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Document {
    /// Visible text of every paragraph in traversal order.
    ///
    /// Used by tests and diagnostics to compare document content without
    /// caring about run boundaries.
    pub fn all_text(&self) -> Vec<String> {
        let mut texts: Vec<String> = self.paragraphs.iter().map(|p| p.text()).collect();
        for table in &self.tables {
            for row in &table.rows {
                for cell in &row.cells {
                    for paragraph in &cell.paragraphs {
                        texts.push(paragraph.text());
                    }
                }
            }
        }
        texts
    }
}
