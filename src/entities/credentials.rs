use serde::Deserialize;
use std::fmt;

/// Whatever the extraction service needs to authorize requests.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}
