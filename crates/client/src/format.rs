//! Plain-text rendering of search results.

use crate::mdn::SearchDocument;

/// Line placed between rendered documents.
pub const SEPARATOR: &str = "----------\n";

/// Render one document as a title/path/summary block.
///
/// ```text
/// Title: <title>
/// Path: `<mdn_url>`
/// Summary:
/// <summary>
/// ```
pub fn render_document(doc: &SearchDocument) -> String {
    format!("Title: {}\nPath: `{}`\nSummary:\n{}\n", doc.title, doc.mdn_url, doc.summary)
}

/// Render all documents in order, joined by [`SEPARATOR`].
///
/// An empty slice renders as an empty string.
pub fn render_documents(docs: &[SearchDocument]) -> String {
    docs.iter().map(render_document).collect::<Vec<_>>().join(SEPARATOR)
}
