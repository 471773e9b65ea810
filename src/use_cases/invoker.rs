//! Abstraction for the external extraction service.
use crate::entities::extraction::ExtractionConfig;
use crate::result::InvokerErr;

use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

pub type Invoker = Box<dyn ExtractionInvoker>;

/// Sends a single document to the extraction service.
///
/// Implementations make exactly one attempt per call. Every failure is reported through one of
/// the [`InvokerErr`] categories so it can be logged against the document.
pub trait ExtractionInvoker: Send + Sync {
    fn extract(&self, input: &Path, cfg: &ExtractionConfig) -> Result<Artifact, InvokerErr>;
}

/// Result returned by the service, kept in memory until it's saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    bytes: Vec<u8>,
}

impl Artifact {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[instrument(skip(self))]
    pub fn save_as(&self, path: &Path) -> std::io::Result<()> {
        debug!("saving {} bytes", self.bytes.len());
        fs::write(path, &self.bytes)
    }
}
