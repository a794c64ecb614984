//! Page values handed over by document loaders

/// Marker inserted between pages when a document is flattened to text
pub const PAGE_BREAK_MARKER: &str = "--- PAGE BREAK ---";

/// A single page of extracted document text
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Page {
    pub text: String,
    pub index: u32, // 0-based position in the source document
}

impl Page {
    pub fn new(index: u32, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }
}

/// Join pages into one document string with explicit page-break markers
pub fn join_pages(pages: &[Page]) -> String {
    let separator = format!("\n\n{}\n\n", PAGE_BREAK_MARKER);
    pages
        .iter()
        .map(|page| page.text.as_str())
        .collect::<Vec<_>>()
        .join(&separator)
}

/// Split plain extracted text into pages on form-feed characters
/// (the page separator written by most PDF-to-text tools).
pub fn split_pages(text: &str) -> Vec<Page> {
    text.split('\u{c}')
        .enumerate()
        .filter(|(_, chunk)| !chunk.trim().is_empty())
        .map(|(i, chunk)| Page::new(i as u32, chunk))
        .collect()
}
