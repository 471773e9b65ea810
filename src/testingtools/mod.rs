use crate::entities::extraction::ExtractionConfig;
use crate::use_cases::config::{Config, ServiceConfig};
use crate::use_cases::context::RunContext;
use crate::use_cases::run_log::{ERROR_LOG, META_LOG, RUN_LOG};

use anyhow::Result;
use std::fs::{self, create_dir_all, read_to_string};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tracing::debug;

pub mod services;

/// Input and output directories of a single test, removed on drop.
pub struct TestEnv {
    _input_dir: TempDir,
    _output_dir: TempDir,
    pub cfg: Config,
}

impl TestEnv {
    pub fn new() -> Result<Self> {
        let input_dir = input_dir_path()?;
        let output_dir = output_dir_path()?;
        let cfg = Config {
            input_dir: input_dir.path().to_path_buf(),
            output_dir: output_dir.path().join("output"),
            credentials_path: input_dir.path().join("credentials.json"),
            document_ext: "pdf".into(),
            archive_ext: "zip".into(),
            workers: 1,
            service: ServiceConfig {
                endpoint: "http://localhost:1/extract".into(),
                timeout: Duration::from_secs(5),
            },
            extraction: ExtractionConfig::default(),
        };
        Ok(Self {
            _input_dir: input_dir,
            _output_dir: output_dir,
            cfg,
        })
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.cfg.workers = workers;
        self
    }

    pub fn context(&self) -> Result<RunContext> {
        Ok(RunContext::open(&self.cfg.output_dir)?)
    }

    /// Creates an (empty) file under the input directory, creating parents as needed.
    pub fn input_file<P: AsRef<Path>>(&self, rel_path: P) -> Result<PathBuf> {
        let path = self.cfg.input_dir.join(rel_path);
        if let Some(parent) = path.parent() {
            create_dir_all(parent)?;
        }
        fs::write(&path, "anything")?;
        Ok(path)
    }

    pub fn input_pdf<P: AsRef<Path>>(&self, rel_path: P, pages: usize) -> Result<PathBuf> {
        let path = self.cfg.input_dir.join(rel_path);
        testutils::mk_pdf(&path, pages, &testutils::PdfInfo::default())?;
        Ok(path)
    }

    pub fn logs(&self) -> Result<Logs> {
        Ok(Logs {
            run: lines(self.cfg.output_dir.join(RUN_LOG))?,
            error: lines(self.cfg.output_dir.join(ERROR_LOG))?,
            meta: lines(self.cfg.output_dir.join(META_LOG))?,
        })
    }
}

fn lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    Ok(read_to_string(path)?.lines().map(String::from).collect())
}

#[derive(Debug)]
pub struct Logs {
    pub run: Vec<String>,
    pub error: Vec<String>,
    pub meta: Vec<String>,
}

impl Logs {
    pub fn all_empty(&self) -> bool {
        self.run.is_empty() && self.error.is_empty() && self.meta.is_empty()
    }
}

pub fn input_dir_path() -> Result<TempDir> {
    debug!("creating input directory");
    Ok(tempfile::tempdir()?)
}

pub fn output_dir_path() -> Result<TempDir> {
    debug!("creating output directory");
    Ok(tempfile::tempdir()?)
}

/// Counts calls of a tracked method.
#[derive(Debug, Clone, Default)]
pub struct Spy {
    calls: Arc<AtomicUsize>,
}

impl Spy {
    pub fn signal(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    pub fn method_called(&self) -> bool {
        self.calls() > 0
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}
