//! Processing of a single file, the unit of failure isolation.
use crate::entities::document::DocInfo;
use crate::entities::log_line::{ErrorLine, MetaLine, RunLine, RunResult};
use crate::helpers::PathRefExt;
use crate::result::AttemptErr;
use crate::use_cases::config::Config;
use crate::use_cases::context::RunContext;
use crate::use_cases::invoker::ExtractionInvoker;
use crate::use_cases::mirror::PathMirror;
use crate::use_cases::probe::DocumentProbe;

use chrono::Local;
use std::ffi::OsString;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Terminal state of a single file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Extension doesn't match, nothing was logged.
    Skipped,
    /// Couldn't be opened as a document, only the error log got a line.
    Unreadable,
    /// Not more than one page, nothing was logged.
    Ineligible,
    Extracted(Duration),
    Failed,
}

pub struct PerFileHandler<'a> {
    cfg: &'a Config,
    ctx: &'a RunContext,
    mirror: PathMirror,
    probe: &'a dyn DocumentProbe,
    invoker: &'a dyn ExtractionInvoker,
}

impl<'a> PerFileHandler<'a> {
    pub fn new(
        cfg: &'a Config,
        ctx: &'a RunContext,
        probe: &'a dyn DocumentProbe,
        invoker: &'a dyn ExtractionInvoker,
    ) -> Self {
        Self {
            cfg,
            ctx,
            mirror: PathMirror::new(&cfg.output_dir),
            probe,
            invoker,
        }
    }

    /// Handles `file` found under the directories named by `segments`.
    ///
    /// Never fails: whatever goes wrong ends up in the logs and in the returned [`Outcome`].
    #[instrument(skip(self))]
    pub fn handle(&self, file: &Path, segments: &[OsString]) -> Outcome {
        if !file.ext_is(&self.cfg.document_ext) {
            debug!("not a document, skipping");
            return Outcome::Skipped;
        }
        let name = file.filestem();

        let info = match self.probe.inspect(file) {
            Ok(info) => info,
            Err(e) => {
                warn!("failed to open '{}': '{}'", file.display(), e);
                self.ctx.log_error(&ErrorLine::new(&name, e));
                return Outcome::Unreadable;
            }
        };

        if !info.is_eligible() {
            debug!("document has {} page(s), skipping", info.pages);
            return Outcome::Ineligible;
        }

        self.ctx.record_attempt();
        self.attempt(file, segments, &name, &info)
    }

    fn attempt(&self, file: &Path, segments: &[OsString], name: &str, info: &DocInfo) -> Outcome {
        let timestamp = Local::now();
        match self.extract(file, segments, name) {
            Ok(elapsed) => {
                info!("extracted '{}' in {:?}", file.display(), elapsed);
                let run = RunLine::new(timestamp, name, info.size, RunResult::Elapsed(elapsed));
                self.ctx.log_success(&run, &MetaLine::from(info));
                Outcome::Extracted(elapsed)
            }
            Err(e) => {
                warn!("failed to extract '{}': '{}'", file.display(), e);
                let run = RunLine::new(timestamp, name, info.size, RunResult::Error);
                self.ctx.log_failure(&run, &ErrorLine::new(name, e));
                Outcome::Failed
            }
        }
    }

    /// Returns the time spent in the service call and saving its result.
    fn extract(
        &self,
        file: &Path,
        segments: &[OsString],
        name: &str,
    ) -> Result<Duration, AttemptErr> {
        let dir = self.mirror.ensure(segments).map_err(AttemptErr::OutputDir)?;
        let start = Instant::now();
        let artifact = self.invoker.extract(file, &self.cfg.extraction)?;
        let archive = self.cfg.archive_path(&dir, name);
        artifact.save_as(&archive).map_err(AttemptErr::Save)?;
        Ok(start.elapsed())
    }
}
