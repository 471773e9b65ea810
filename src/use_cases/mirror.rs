//! Mirrors the input directory structure under the output root.
use std::ffi::OsString;
use std::fs::create_dir_all;
use std::io;
use std::path::PathBuf;
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
pub struct PathMirror {
    output_root: PathBuf,
}

impl PathMirror {
    pub fn new<P: Into<PathBuf>>(output_root: P) -> Self {
        Self {
            output_root: output_root.into(),
        }
    }

    /// Output directory for the given segments, without touching the filesystem.
    pub fn resolve(&self, segments: &[OsString]) -> PathBuf {
        segments
            .iter()
            .fold(self.output_root.clone(), |dir, segment| dir.join(segment))
    }

    /// Same as [`PathMirror::resolve`], but also creates all missing directories.
    ///
    /// Existing directories are left as they are, so calling it again for the same segments is
    /// harmless.
    #[instrument(skip(self))]
    pub fn ensure(&self, segments: &[OsString]) -> io::Result<PathBuf> {
        let dir = self.resolve(segments);
        if !dir.is_dir() {
            debug!("creating output directory '{}'", dir.display());
            create_dir_all(&dir)?;
        }
        Ok(dir)
    }
}
