use crate::entities::document::DocInfo;
use crate::result::ProbeErr;
use crate::use_cases::probe::{DocumentProbe, Probe};

use std::io::{Error, ErrorKind};
use std::path::Path;

pub fn pages(pages: usize) -> Probe {
    with_info(DocInfo::new(pages, 1024))
}

pub fn with_info(info: DocInfo) -> Probe {
    ProbeStub::make(info)
}

struct ProbeStub {
    info: DocInfo,
}

impl ProbeStub {
    fn make(info: DocInfo) -> Probe {
        Box::new(Self { info })
    }
}

impl DocumentProbe for ProbeStub {
    fn inspect(&self, _path: &Path) -> Result<DocInfo, ProbeErr> {
        Ok(self.info.clone())
    }
}

pub fn unreadable() -> Probe {
    UnreadableProbe::make()
}

struct UnreadableProbe;

impl UnreadableProbe {
    fn make() -> Probe {
        Box::new(Self)
    }
}

impl DocumentProbe for UnreadableProbe {
    fn inspect(&self, _path: &Path) -> Result<DocInfo, ProbeErr> {
        Err(ProbeErr::IoError(Error::new(
            ErrorKind::InvalidData,
            "not a document",
        )))
    }
}
