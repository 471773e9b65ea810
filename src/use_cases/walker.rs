//! Recursive traversal of the input tree.
use crate::entities::path_stack::PathStack;
use crate::use_cases::handler::PerFileHandler;

use rayon::Scope;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{instrument, trace, warn};

/// Receives every regular file found by the [`BatchWalker`].
pub trait FileVisitor {
    /// `segments` are the directory names between the input root and `file`.
    fn visit(&self, file: PathBuf, segments: Vec<OsString>);
}

impl FileVisitor for PerFileHandler<'_> {
    fn visit(&self, file: PathBuf, segments: Vec<OsString>) {
        self.handle(&file, &segments);
    }
}

/// Hands files over to a thread pool instead of handling them on the walking thread.
pub struct PooledVisitor<'a, 'scope> {
    scope: &'a Scope<'scope>,
    handler: &'scope PerFileHandler<'scope>,
}

impl<'a, 'scope> PooledVisitor<'a, 'scope> {
    pub fn new(scope: &'a Scope<'scope>, handler: &'scope PerFileHandler<'scope>) -> Self {
        Self { scope, handler }
    }
}

impl FileVisitor for PooledVisitor<'_, '_> {
    fn visit(&self, file: PathBuf, segments: Vec<OsString>) {
        let handler = self.handler;
        self.scope.spawn(move |_| {
            handler.handle(&file, &segments);
        });
    }
}

/// Depth-first walk which keeps the [`PathStack`] in sync with the directory being listed.
///
/// Entries are visited in the order the OS lists them. Symlinked directories are not followed,
/// symlinked files are visited. Unreadable entries and directories are skipped with a warning.
#[derive(Debug, Default)]
pub struct BatchWalker;

impl BatchWalker {
    #[instrument(skip(self, stack, visitor))]
    pub fn walk(&self, dir: &Path, stack: &mut PathStack, visitor: &dyn FileVisitor) {
        let entries = match dir.read_dir() {
            Ok(entries) => entries,
            Err(e) => {
                warn!("failed to list '{}': '{}'", dir.display(), e);
                return;
            }
        };
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("failed to read entry of '{}': '{}'", dir.display(), e);
                    continue;
                }
            };
            let path = entry.path();
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if is_dir {
                let mut guard = stack.push(entry.file_name());
                trace!("entering '{}' at depth {}", guard.relative().display(), guard.depth());
                self.walk(&path, &mut guard, visitor);
            } else if path.is_file() {
                visitor.visit(path, stack.snapshot());
            } else {
                trace!("skipping '{}'", path.display());
            }
        }
    }
}
