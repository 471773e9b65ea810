//! State shared by every file of a single run.
use crate::entities::log_line::{ErrorLine, MetaLine, RunLine};
use crate::result::LoggerErr;
use crate::use_cases::run_log::RunLogger;

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{error, instrument};

/// Owns the run logs and the counter of documents sent to extraction.
///
/// Both live behind one mutex, so files handled on different threads never interleave partial
/// lines and the counter always agrees with what's in the logs.
#[derive(Debug)]
pub struct RunContext {
    state: Mutex<RunState>,
}

#[derive(Debug)]
struct RunState {
    logger: RunLogger,
    attempted: usize,
}

/// What a finished run reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Documents sent to extraction, whether the extraction succeeded or not.
    pub attempted: usize,
}

impl RunContext {
    pub fn open(output_dir: &Path) -> Result<Self, LoggerErr> {
        Ok(Self {
            state: Mutex::new(RunState {
                logger: RunLogger::open(output_dir)?,
                attempted: 0,
            }),
        })
    }

    pub fn record_attempt(&self) {
        self.lock().attempted += 1;
    }

    #[instrument(skip(self))]
    pub fn log_success(&self, run: &RunLine, meta: &MetaLine) {
        let mut state = self.lock();
        if let Err(e) = state.logger.append_run(run) {
            error!("failed to append run line: '{}'", e);
        }
        if let Err(e) = state.logger.append_meta(meta) {
            error!("failed to append metadata line: '{}'", e);
        }
    }

    #[instrument(skip(self))]
    pub fn log_failure(&self, run: &RunLine, err: &ErrorLine) {
        let mut state = self.lock();
        if let Err(e) = state.logger.append_run(run) {
            error!("failed to append run line: '{}'", e);
        }
        if let Err(e) = state.logger.append_error(err) {
            error!("failed to append error line: '{}'", e);
        }
    }

    #[instrument(skip(self))]
    pub fn log_error(&self, err: &ErrorLine) {
        if let Err(e) = self.lock().logger.append_error(err) {
            error!("failed to append error line: '{}'", e);
        }
    }

    pub fn close(self) -> Result<RunSummary, LoggerErr> {
        let state = self
            .state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        state.logger.close()?;
        Ok(RunSummary {
            attempted: state.attempted,
        })
    }

    fn lock(&self) -> MutexGuard<'_, RunState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
