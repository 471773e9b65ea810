//! Loads service credentials from a JSON file.
use crate::entities::credentials::Credentials;
use crate::result::CredentialsErr;

use std::fs::read_to_string;
use std::path::Path;
use tracing::{debug, instrument};

#[instrument]
pub fn load_credentials(path: &Path) -> Result<Credentials, CredentialsErr> {
    debug!("loading credentials");
    Ok(serde_json::from_str(&read_to_string(path)?)?)
}
