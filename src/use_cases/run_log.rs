//! The three append-only logs written during a run.
use crate::entities::log_line::{ErrorLine, MetaLine, RunLine};
use crate::result::LoggerErr;

use std::fmt::Display;
use std::fs::{create_dir_all, File};
use std::io::{self, LineWriter, Write};
use std::path::Path;
use tracing::{debug, instrument};

pub const RUN_LOG: &str = "log.csv";
pub const ERROR_LOG: &str = "error_log.csv";
pub const META_LOG: &str = "additional_info.csv";

/// Run log, error log and metadata log of a single run.
///
/// Files are truncated when opened. Each append writes one whole line; writers are line
/// buffered, and [`RunLogger::close`] flushes whatever is left.
#[derive(Debug)]
pub struct RunLogger {
    run: LineWriter<File>,
    error: LineWriter<File>,
    meta: LineWriter<File>,
}

impl RunLogger {
    #[instrument]
    pub fn open(output_dir: &Path) -> Result<Self, LoggerErr> {
        create_dir_all(output_dir)?;
        debug!("opening run logs in '{}'", output_dir.display());
        Ok(Self {
            run: LineWriter::new(File::create(output_dir.join(RUN_LOG))?),
            error: LineWriter::new(File::create(output_dir.join(ERROR_LOG))?),
            meta: LineWriter::new(File::create(output_dir.join(META_LOG))?),
        })
    }

    pub fn append_run(&mut self, line: &RunLine) -> io::Result<()> {
        append(&mut self.run, line)
    }

    pub fn append_error(&mut self, line: &ErrorLine) -> io::Result<()> {
        append(&mut self.error, line)
    }

    pub fn append_meta(&mut self, line: &MetaLine) -> io::Result<()> {
        append(&mut self.meta, line)
    }

    #[instrument(skip(self))]
    pub fn close(mut self) -> Result<(), LoggerErr> {
        self.run.flush()?;
        self.error.flush()?;
        self.meta.flush()?;
        debug!("run logs closed");
        Ok(())
    }
}

fn append<W: Write, L: Display>(w: &mut W, line: &L) -> io::Result<()> {
    writeln!(w, "{line}")
}
