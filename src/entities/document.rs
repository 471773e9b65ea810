//! Lightweight facts about a document gathered before extraction.

/// What the probe learned about a single document.
///
/// Textual fields are kept raw here; they are sanitized only when the metadata line is written.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DocInfo {
    pub pages: usize,
    pub size: u64,
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub keywords: Option<String>,
}

impl DocInfo {
    pub fn new(pages: usize, size: u64) -> Self {
        Self {
            pages,
            size,
            ..Default::default()
        }
    }

    /// Only documents with more than one page are sent to extraction.
    pub fn is_eligible(&self) -> bool {
        self.pages > 1
    }
}
