#![allow(clippy::missing_errors_doc)]

use anyhow::{bail, Result};
use lopdf::{dictionary, Document, Object, ObjectId};
use rocket::data::{Data, ToByteUnit};
use rocket::{post, routes, State};
use serde::Serialize;
use std::fs::{self, create_dir_all};
use std::io::Write;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tempfile::TempDir;
use tracing::debug;

/// Document information written into generated PDFs.
#[derive(Debug, Default, Clone)]
pub struct PdfInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub keywords: Option<String>,
}

/// Writes a PDF with `pages` blank pages to `path`, creating parent directories.
pub fn mk_pdf<P: AsRef<Path>>(path: P, pages: usize, info: &PdfInfo) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let kids: Vec<Object> = (0..pages)
        .map(|_| {
            let page: ObjectId = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            });
            page.into()
        })
        .collect();
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut info_dict = lopdf::Dictionary::new();
    let fields = [
        ("Title", &info.title),
        ("Author", &info.author),
        ("Subject", &info.subject),
        ("Keywords", &info.keywords),
    ];
    let mut has_info = false;
    for (key, value) in fields {
        if let Some(value) = value {
            info_dict.set(key, Object::string_literal(value.as_str()));
            has_info = true;
        }
    }
    if has_info {
        let info_id = doc.add_object(info_dict);
        doc.trailer.set("Info", info_id);
    }

    debug!("writing {} page pdf to {}", pages, path.display());
    doc.save(path)?;
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TestConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub credentials_path: PathBuf,
    pub workers: usize,
    pub service: TestServiceConfig,
}

#[derive(Debug, Serialize)]
pub struct TestServiceConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

/// Directories used by a single end to end run, removed on drop.
pub struct TestEnv {
    pub input_dir: TempDir,
    pub output_dir: TempDir,
    pub config_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Result<Self> {
        Ok(Self {
            input_dir: tempfile::tempdir()?,
            output_dir: tempfile::tempdir()?,
            config_dir: tempfile::tempdir()?,
        })
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.path().join("output")
    }

    pub fn credentials_path(&self) -> PathBuf {
        self.config_dir.path().join("credentials.json")
    }

    pub fn write_credentials(&self) -> Result<()> {
        let creds = serde_json::json!({
            "client_id": "test-client",
            "client_secret": "test-secret",
        });
        fs::write(self.credentials_path(), serde_json::to_string_pretty(&creds)?)?;
        Ok(())
    }

    pub fn pdf<P: AsRef<Path>>(&self, rel_path: P, pages: usize) -> Result<PathBuf> {
        let path = self.input_dir.path().join(rel_path);
        mk_pdf(&path, pages, &PdfInfo::default())?;
        Ok(path)
    }

    pub fn create_cfg_file(&self, endpoint: &str) -> Result<PathBuf> {
        let cfg = TestConfig {
            input_dir: self.input_dir.path().to_path_buf(),
            output_dir: self.output_path(),
            credentials_path: self.credentials_path(),
            workers: 1,
            service: TestServiceConfig {
                endpoint: endpoint.to_string(),
                timeout: Duration::from_secs(10),
            },
        };
        let config_path = config_path(&self.config_dir);
        let config = toml::to_string(&cfg)?;
        let mut file = fs::File::create(&config_path)?;
        debug!("writing {} to {}", config, config_path.display());
        file.write_all(config.as_bytes())?;
        Ok(config_path)
    }

    pub fn log_lines(&self, name: &str) -> Result<Vec<String>> {
        Ok(fs::read_to_string(self.output_path().join(name))?
            .lines()
            .map(String::from)
            .collect())
    }
}

#[inline]
pub fn config_path<P: AsRef<Path>>(config_dir: P) -> PathBuf {
    config_dir.as_ref().join("pdfbatch.toml")
}

/// Runs the binary at `bin` to completion.
pub fn run_batch_bin<P: AsRef<Path>>(bin: &str, config_path: P) -> Result<Output> {
    debug!("running '{} {}'", bin, config_path.as_ref().display());
    let output = Command::new(bin)
        .arg(config_path.as_ref())
        .env("RUST_LOG", "warn")
        .output()?;
    Ok(output)
}

/// Address on which nothing listens.
pub fn closed_endpoint() -> Result<String> {
    Ok(format!("http://{}/extract", free_addr()?))
}

fn free_addr() -> Result<SocketAddr> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(addr)
}

pub const STUB_ARCHIVE: &[u8] = b"PK\x03\x04stub-archive";

struct RequestCount(Arc<AtomicUsize>);

#[post("/extract", data = "<body>")]
async fn extract(body: Data<'_>, requests: &State<RequestCount>) -> Option<&'static [u8]> {
    body.open(16.mebibytes()).into_bytes().await.ok()?;
    requests.0.fetch_add(1, Ordering::SeqCst);
    Some(STUB_ARCHIVE)
}

/// Extraction service answering every document with [`STUB_ARCHIVE`].
///
/// Runs on a background thread for as long as the test process lives.
pub struct StubService {
    addr: SocketAddr,
    requests: Arc<AtomicUsize>,
}

impl StubService {
    pub fn start() -> Result<Self> {
        let addr = free_addr()?;
        let requests = Arc::new(AtomicUsize::new(0));
        let figment = rocket::Config::figment()
            .merge(("address", addr.ip().to_string()))
            .merge(("port", addr.port()))
            .merge(("log_level", "off"));
        let server = rocket::custom(figment)
            .mount("/", routes![extract])
            .manage(RequestCount(requests.clone()));
        thread::spawn(move || {
            if let Err(e) = rocket::execute(server.launch()) {
                debug!("stub service stopped: {}", e);
            }
        });
        wait_until_listening(addr)?;
        Ok(Self { addr, requests })
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/extract", self.addr)
    }

    /// Number of documents received so far.
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

fn wait_until_listening(addr: SocketAddr) -> Result<()> {
    for _ in 0..100 {
        if TcpStream::connect(addr).is_ok() {
            return Ok(());
        }
        thread::sleep(Duration::from_millis(50));
    }
    bail!("stub service didn't start listening on {}", addr)
}

pub fn ls<P: AsRef<Path>>(dir: P) -> Result<Vec<String>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        bail!("I can list only directories");
    }
    let mut result = Vec::new();
    for path in dir.read_dir()? {
        let path = path?;
        result.push(path.file_name().to_string_lossy().to_string());
    }
    result.sort();
    Ok(result)
}
