//! Talks to the extraction service over HTTP.
use crate::entities::credentials::Credentials;
use crate::entities::extraction::ExtractionConfig;
use crate::result::InvokerErr;
use crate::use_cases::config::ServiceConfig;
use crate::use_cases::invoker::{Artifact, ExtractionInvoker};

use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{debug, instrument, warn};
use ureq::{Agent, AgentBuilder};

/// Sends the document as the request body and expects the archive as the response body.
///
/// Every request is bounded by the configured timeout; running out of time is reported as
/// [`InvokerErr::Transport`].
pub struct HttpInvoker {
    agent: Agent,
    endpoint: String,
    credentials: Credentials,
}

impl HttpInvoker {
    pub fn new(service: &ServiceConfig, credentials: Credentials) -> Self {
        let agent = AgentBuilder::new().timeout(service.timeout).build();
        Self {
            agent,
            endpoint: service.endpoint.clone(),
            credentials,
        }
    }
}

impl ExtractionInvoker for HttpInvoker {
    #[instrument(skip(self))]
    fn extract(&self, input: &Path, cfg: &ExtractionConfig) -> Result<Artifact, InvokerErr> {
        let body = fs::read(input)?;
        let mut request = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/pdf")
            .set("x-api-key", &self.credentials.client_id)
            .set(
                "Authorization",
                &format!("Bearer {}", self.credentials.client_secret),
            );
        for (name, value) in cfg.query_pairs() {
            request = request.query(name, &value);
        }
        debug!("sending {} bytes to '{}'", body.len(), self.endpoint);
        let response = request.send_bytes(&body).map_err(categorize)?;
        let mut bytes = Vec::new();
        response.into_reader().read_to_end(&mut bytes)?;
        let artifact = Artifact::new(bytes);
        if artifact.is_empty() {
            warn!("service answered with an empty body");
        }
        debug!("received {} bytes", artifact.len());
        Ok(artifact)
    }
}

fn categorize(err: ureq::Error) -> InvokerErr {
    match err {
        ureq::Error::Status(status, response) => {
            let message = response.into_string().unwrap_or_default();
            from_status(status, message)
        }
        ureq::Error::Transport(transport) => InvokerErr::Transport(transport.to_string()),
    }
}

fn from_status(status: u16, message: String) -> InvokerErr {
    match status {
        401 | 403 => InvokerErr::Auth { status, message },
        429 => InvokerErr::Quota(message),
        _ => InvokerErr::Service { status, message },
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use anyhow::Result;
    use claim::assert_matches;
    use std::net::TcpListener;
    use std::path::PathBuf;
    use std::time::{Duration, Instant};
    use tempfile::tempdir;
    use testutils::{closed_endpoint, mk_pdf, PdfInfo, StubService, STUB_ARCHIVE};

    fn credentials() -> Credentials {
        Credentials {
            client_id: "id".into(),
            client_secret: "secret".into(),
        }
    }

    fn service(endpoint: String) -> ServiceConfig {
        ServiceConfig {
            endpoint,
            timeout: Duration::from_secs(10),
        }
    }

    fn sample_pdf(dir: &Path) -> Result<PathBuf> {
        let pdf = dir.join("doc.pdf");
        mk_pdf(&pdf, 2, &PdfInfo::default())?;
        Ok(pdf)
    }

    #[test]
    fn status_codes_are_categorized() {
        assert_matches!(from_status(401, String::new()), InvokerErr::Auth { status: 401, .. });
        assert_matches!(from_status(403, String::new()), InvokerErr::Auth { status: 403, .. });
        assert_matches!(from_status(429, String::new()), InvokerErr::Quota(_));
        assert_matches!(from_status(500, String::new()), InvokerErr::Service { status: 500, .. });
        assert_matches!(from_status(404, String::new()), InvokerErr::Service { status: 404, .. });
    }

    #[test]
    fn response_body_becomes_artifact() -> Result<()> {
        // given
        let stub = StubService::start()?;
        let dir = tempdir()?;
        let pdf = sample_pdf(dir.path())?;
        let invoker = HttpInvoker::new(&service(stub.endpoint()), credentials());

        // when
        let artifact = invoker.extract(&pdf, &ExtractionConfig::default())?;

        // then
        assert_eq!(artifact, Artifact::new(STUB_ARCHIVE.to_vec()));
        assert_eq!(stub.requests(), 1);

        Ok(())
    }

    #[test]
    fn unreachable_service_is_a_transport_error() -> Result<()> {
        // given
        let dir = tempdir()?;
        let pdf = sample_pdf(dir.path())?;
        let invoker = HttpInvoker::new(&service(closed_endpoint()?), credentials());

        // when
        let res = invoker.extract(&pdf, &ExtractionConfig::default());

        // then
        assert_matches!(res, Err(InvokerErr::Transport(_)));

        Ok(())
    }

    #[test]
    fn missing_input_is_an_io_error() -> Result<()> {
        // given
        let dir = tempdir()?;
        let invoker = HttpInvoker::new(&service(closed_endpoint()?), credentials());

        // when
        let res = invoker.extract(&dir.path().join("missing.pdf"), &ExtractionConfig::default());

        // then
        assert_matches!(res, Err(InvokerErr::IoError(_)));

        Ok(())
    }

    #[test]
    fn silent_service_times_out_as_transport_error() -> Result<()> {
        // given
        let dir = tempdir()?;
        let pdf = sample_pdf(dir.path())?;
        // connections wait in the backlog, nothing ever answers
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let cfg = ServiceConfig {
            endpoint: format!("http://{}/extract", listener.local_addr()?),
            timeout: Duration::from_secs(1),
        };
        let invoker = HttpInvoker::new(&cfg, credentials());
        let start = Instant::now();

        // when
        let res = invoker.extract(&pdf, &ExtractionConfig::default());

        // then
        assert_matches!(res, Err(InvokerErr::Transport(_)));
        assert!(start.elapsed() >= Duration::from_secs(1));
        assert!(start.elapsed() < Duration::from_secs(10));
        drop(listener);

        Ok(())
    }
}
