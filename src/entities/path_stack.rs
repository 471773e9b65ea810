//! Position of the traversal relative to the input root.
use std::ffi::OsString;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;

/// Directory names from the input root down to the directory being walked.
///
/// Segments are pushed through [`PathStack::push`], which hands back a [`SegmentGuard`]. The
/// segment is popped when the guard goes out of scope, so the depth of the stack always matches
/// the depth of the walk, whichever way the walk leaves a directory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PathStack {
    segments: Vec<OsString>,
}

impl PathStack {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "the segment is popped as soon as the guard is dropped"]
    pub fn push<S: Into<OsString>>(&mut self, segment: S) -> SegmentGuard<'_> {
        self.segments.push(segment.into());
        SegmentGuard { stack: self }
    }

    pub fn snapshot(&self) -> Vec<OsString> {
        self.segments.clone()
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn relative(&self) -> PathBuf {
        self.segments.iter().collect()
    }
}

/// Keeps one segment on the [`PathStack`] for as long as it lives.
#[derive(Debug)]
pub struct SegmentGuard<'a> {
    stack: &'a mut PathStack,
}

impl Deref for SegmentGuard<'_> {
    type Target = PathStack;

    fn deref(&self) -> &Self::Target {
        self.stack
    }
}

impl DerefMut for SegmentGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.stack
    }
}

impl Drop for SegmentGuard<'_> {
    fn drop(&mut self) {
        self.stack.segments.pop();
    }
}
