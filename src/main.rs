#![allow(clippy::module_name_repetitions)]

use crate::configuration::factories::{
    config_loader, config_resolver, credentials, invoker, probe,
};
use crate::configuration::telemetry::init_tracing;
use crate::use_cases::batch::run_batch;

use anyhow::Result;
use std::env;
use tracing::debug;

mod configuration;
mod data_providers;
mod entities;
mod use_cases;

mod helpers;
mod result;

#[cfg(test)]
mod testingtools;

fn main() -> Result<()> {
    init_tracing();

    let path_override = env::args()
        .nth(1)
        .or_else(|| env::var("PDFBATCH_CONFIG").ok());

    let resolver = config_resolver(config_loader());
    let cfg = resolver.handle_config(path_override)?;
    debug!("using config: {:?}", cfg);

    let credentials = credentials(&cfg)?;
    let probe = probe();
    let invoker = invoker(&cfg, credentials);

    let summary = run_batch(&cfg, probe.as_ref(), invoker.as_ref())?;
    println!("Total PDFs extracted:{}", summary.attempted);

    Ok(())
}
