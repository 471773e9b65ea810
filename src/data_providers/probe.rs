//! Reads page count and the document information dictionary of PDF files.
use crate::entities::document::DocInfo;
use crate::result::ProbeErr;
use crate::use_cases::probe::DocumentProbe;

use lopdf::{decode_text_string, Dictionary, Document, Object};
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

/// Inspects PDF documents with [`lopdf`].
///
/// The whole file is read once and parsed from memory, so its length is the reported size. The
/// parsed [`Document`] is dropped before `inspect` returns.
#[derive(Debug, Default)]
pub struct LopdfProbe;

impl DocumentProbe for LopdfProbe {
    #[instrument(skip(self))]
    fn inspect(&self, path: &Path) -> Result<DocInfo, ProbeErr> {
        let bytes = fs::read(path)?;
        let doc = Document::load_mem(&bytes)?;
        let mut info = DocInfo::new(doc.get_pages().len(), bytes.len() as u64);
        if let Some(dict) = info_dict(&doc) {
            info.title = text(dict, b"Title");
            info.author = text(dict, b"Author");
            info.subject = text(dict, b"Subject");
            info.keywords = text(dict, b"Keywords");
        }
        debug!("document has {} page(s)", info.pages);
        Ok(info)
    }
}

fn info_dict(doc: &Document) -> Option<&Dictionary> {
    match doc.trailer.get(b"Info").ok()? {
        Object::Reference(id) => doc.get_dictionary(*id).ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

fn text(dict: &Dictionary, key: &[u8]) -> Option<String> {
    let value = decode_text_string(dict.get(key).ok()?).ok()?;
    Some(value.trim_start_matches('\u{FEFF}').to_string())
}
