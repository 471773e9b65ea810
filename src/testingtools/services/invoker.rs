use crate::entities::extraction::ExtractionConfig;
use crate::helpers::PathRefExt;
use crate::result::InvokerErr;
use crate::testingtools::Spy;
use crate::use_cases::invoker::{Artifact, ExtractionInvoker, Invoker};

use std::path::Path;
use std::thread;
use std::time::Duration;
use tracing::instrument;

pub const ARTIFACT: &[u8] = b"PK\x03\x04extracted";

pub fn working() -> Invoker {
    WorkingInvoker::make()
}

struct WorkingInvoker;

impl WorkingInvoker {
    fn make() -> Invoker {
        Box::new(Self)
    }
}

impl ExtractionInvoker for WorkingInvoker {
    fn extract(&self, _input: &Path, _cfg: &ExtractionConfig) -> Result<Artifact, InvokerErr> {
        Ok(Artifact::new(ARTIFACT.to_vec()))
    }
}

/// Succeeds after `delay`.
pub fn slow(delay: Duration) -> Invoker {
    SlowInvoker::make(delay)
}

struct SlowInvoker {
    delay: Duration,
}

impl SlowInvoker {
    fn make(delay: Duration) -> Invoker {
        Box::new(Self { delay })
    }
}

impl ExtractionInvoker for SlowInvoker {
    fn extract(&self, _input: &Path, _cfg: &ExtractionConfig) -> Result<Artifact, InvokerErr> {
        thread::sleep(self.delay);
        Ok(Artifact::new(ARTIFACT.to_vec()))
    }
}

pub fn failing() -> Invoker {
    FailingInvoker::make(None)
}

/// Fails only for documents whose file stem is one of `names`.
pub fn failing_for(names: &[&str]) -> Invoker {
    FailingInvoker::make(Some(names.iter().map(ToString::to_string).collect()))
}

struct FailingInvoker {
    names: Option<Vec<String>>,
}

impl FailingInvoker {
    fn make(names: Option<Vec<String>>) -> Invoker {
        Box::new(Self { names })
    }
}

impl ExtractionInvoker for FailingInvoker {
    fn extract(&self, input: &Path, _cfg: &ExtractionConfig) -> Result<Artifact, InvokerErr> {
        match &self.names {
            Some(names) if !names.contains(&input.filestem()) => {
                Ok(Artifact::new(ARTIFACT.to_vec()))
            }
            _ => Err(InvokerErr::Service {
                status: 500,
                message: "internal error".into(),
            }),
        }
    }
}

pub fn tracked(invoker: Invoker) -> (InvokerSpies, Invoker) {
    TrackedInvoker::wrap(invoker)
}

struct TrackedInvoker {
    invoker: Invoker,
    extract_spy: Spy,
}

impl TrackedInvoker {
    fn wrap(invoker: Invoker) -> (InvokerSpies, Invoker) {
        let extract_spy = Spy::default();
        (
            InvokerSpies {
                extract_spy: extract_spy.clone(),
            },
            Box::new(Self {
                invoker,
                extract_spy,
            }),
        )
    }
}

impl ExtractionInvoker for TrackedInvoker {
    #[instrument(skip(self))]
    fn extract(&self, input: &Path, cfg: &ExtractionConfig) -> Result<Artifact, InvokerErr> {
        let res = self.invoker.extract(input, cfg);
        self.extract_spy.signal();
        res
    }
}

pub struct InvokerSpies {
    extract_spy: Spy,
}

impl InvokerSpies {
    pub fn extract_called(&self) -> bool {
        self.extract_spy.method_called()
    }

    pub fn extract_calls(&self) -> usize {
        self.extract_spy.calls()
    }
}
