//! A single run over the whole input tree.
use crate::entities::path_stack::PathStack;
use crate::result::BatchErr;
use crate::use_cases::config::Config;
use crate::use_cases::context::{RunContext, RunSummary};
use crate::use_cases::handler::PerFileHandler;
use crate::use_cases::invoker::ExtractionInvoker;
use crate::use_cases::probe::DocumentProbe;
use crate::use_cases::walker::{BatchWalker, PooledVisitor};

use rayon::ThreadPoolBuilder;
use tracing::{debug, info, instrument};

/// Walks `cfg.input_dir` and handles every file found there.
///
/// Logs are opened before the walk and closed after it, so a returned error means the run
/// didn't start or its logs couldn't be flushed. Failures of single files never end up here.
#[instrument(skip(cfg, probe, invoker), fields(input_dir = %cfg.input_dir.display()))]
pub fn run_batch(
    cfg: &Config,
    probe: &dyn DocumentProbe,
    invoker: &dyn ExtractionInvoker,
) -> Result<RunSummary, BatchErr> {
    let pool = if cfg.workers > 1 {
        Some(ThreadPoolBuilder::new().num_threads(cfg.workers).build()?)
    } else {
        None
    };
    let ctx = RunContext::open(&cfg.output_dir)?;
    let handler = PerFileHandler::new(cfg, &ctx, probe, invoker);
    let mut stack = PathStack::new();

    match pool {
        Some(pool) => {
            debug!("handling files on {} workers", cfg.workers);
            pool.scope(|s| {
                let visitor = PooledVisitor::new(s, &handler);
                BatchWalker.walk(&cfg.input_dir, &mut stack, &visitor);
            });
        }
        None => BatchWalker.walk(&cfg.input_dir, &mut stack, &handler),
    }
    debug_assert!(stack.is_empty());

    let summary = ctx.close()?;
    info!("run finished, {} document(s) sent to extraction", summary.attempted);
    Ok(summary)
}
