//! Records written to the run logs.
//!
//! Each log has its own record type and exactly one serialization, its [`Display`]
//! implementation. Lines are comma separated and never contain the line terminator, which is
//! appended by the logger.
use crate::entities::document::DocInfo;

use chrono::{DateTime, Local};
use std::fmt::{self, Display};
use std::time::Duration;

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";
const NONE: &str = "None";
const ERROR_MARKER: &str = "Error";

/// Replaces commas with spaces, rendering missing or empty values as `None`.
pub fn format_field(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.replace(',', " "),
        _ => NONE.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunResult {
    Elapsed(Duration),
    Error,
}

/// Entry of `log.csv`: `timestamp,name,<size> bytes,<seconds>|Error`.
#[derive(Debug, Clone, PartialEq)]
pub struct RunLine {
    timestamp: DateTime<Local>,
    name: String,
    size: u64,
    result: RunResult,
}

impl RunLine {
    pub fn new<S: Into<String>>(
        timestamp: DateTime<Local>,
        name: S,
        size: u64,
        result: RunResult,
    ) -> Self {
        Self {
            timestamp,
            name: name.into(),
            size,
            result,
        }
    }
}

impl Display for RunLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{} bytes,",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.name,
            self.size
        )?;
        match self.result {
            RunResult::Elapsed(elapsed) => write!(f, "{}", elapsed.as_secs_f64()),
            RunResult::Error => write!(f, "{ERROR_MARKER}"),
        }
    }
}

/// Entry of `error_log.csv`: `name,description`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLine {
    name: String,
    description: String,
}

impl ErrorLine {
    pub fn new<S: Into<String>, D: Display>(name: S, err: D) -> Self {
        Self {
            name: name.into(),
            description: err.to_string().replace(['\r', '\n'], " "),
        }
    }
}

impl Display for ErrorLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.name, self.description)
    }
}

/// Entry of `additional_info.csv`: `pages,title,author,subject,keywords`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaLine {
    pages: usize,
    title: String,
    author: String,
    subject: String,
    keywords: String,
}

impl From<&DocInfo> for MetaLine {
    fn from(info: &DocInfo) -> Self {
        Self {
            pages: info.pages,
            title: format_field(info.title.as_deref()),
            author: format_field(info.author.as_deref()),
            subject: format_field(info.subject.as_deref()),
            keywords: format_field(info.keywords.as_deref()),
        }
    }
}

impl Display for MetaLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.pages, self.title, self.author, self.subject, self.keywords
        )
    }
}
