/*!
 * Document model for structured, text-bearing documents.
 *
 * The model mirrors the layout of a word-processing document: a flat list of
 * paragraphs followed by tables, where each table cell again holds paragraphs.
 * Paragraphs are made of runs, each run carrying an optional style.
 */

pub use self::model::{Document, Paragraph, Run, RunStyle, Table, TableCell, TableRow};

pub mod model;
