//! Interface for loading the [`Config`] structure.
//!
//! The actual place where the config will be read from is not tight to this interface and it's
//! considered to be implementation detail.
use crate::entities::extraction::ExtractionConfig;
use crate::result::ConfigurationErr;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub type CfgResolver = Box<dyn ConfigResolver>;

pub type CfgLoader = Box<dyn ConfigLoader>;

/// Responsible for reading the configuration from some medium.
pub trait ConfigLoader: Send {
    /// Reads the configuration.
    ///
    /// The `path` argument doesn't need to represent the location on the File System, this is
    /// the implementation detail.
    fn load(&self, path: &Path) -> Result<Config, ConfigurationErr>;
}

/// Handles config override.
///
/// When user specifies configuration path during startup, this interface handles this case.
pub trait ConfigResolver: Send {
    /// Loads the [`Config`] using specified path.
    ///
    /// If the path is `None`, then no override takes place and configuration should be loaded from
    /// original path.
    fn handle_config(&self, path_override: Option<String>) -> Result<Config, ConfigurationErr>;
}

#[derive(Debug, PartialEq, Eq, Deserialize, Serialize, Clone)]
pub struct Config {
    pub input_dir: PathBuf,
    #[serde(default = "output_dir_default")]
    pub output_dir: PathBuf,
    #[serde(default = "credentials_path_default")]
    pub credentials_path: PathBuf,
    #[serde(default = "document_ext_default")]
    pub document_ext: String,
    #[serde(default = "archive_ext_default")]
    pub archive_ext: String,
    #[serde(default = "workers_default")]
    pub workers: usize,
    pub service: ServiceConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

#[derive(Debug, PartialEq, Eq, Deserialize, Serialize, Clone)]
pub struct ServiceConfig {
    pub endpoint: String,
    #[serde(default = "timeout_default")]
    pub timeout: Duration,
}

impl Config {
    /// Where the archive of the document named `name` is saved, inside mirrored `dir`.
    pub fn archive_path<S: AsRef<str>>(&self, dir: &Path, name: S) -> PathBuf {
        dir.join(format!("{}.{}", name.as_ref(), self.archive_ext))
    }
}

fn output_dir_default() -> PathBuf {
    PathBuf::from("output")
}

fn credentials_path_default() -> PathBuf {
    PathBuf::from("pdfservices-api-credentials.json")
}

fn document_ext_default() -> String {
    "pdf".into()
}

fn archive_ext_default() -> String {
    "zip".into()
}

fn workers_default() -> usize {
    1
}

fn timeout_default() -> Duration {
    Duration::from_secs(300)
}
