//! Abstraction for inspecting a document before it is sent to extraction.
use crate::entities::document::DocInfo;
use crate::result::ProbeErr;

use std::path::Path;

pub type Probe = Box<dyn DocumentProbe>;

/// Reads page count, size and descriptive metadata of a document.
///
/// The document is opened and released within a single call; nothing stays open afterwards.
pub trait DocumentProbe: Send + Sync {
    /// Fails when the file cannot be read or is not a valid document.
    fn inspect(&self, path: &Path) -> Result<DocInfo, ProbeErr>;
}
