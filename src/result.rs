use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationErr {
    #[error("failed to read configuration file: '{0}'")]
    IoError(#[from] std::io::Error),

    #[error("error when deserializing from toml: '{0}'")]
    Toml(#[from] toml::de::Error),

    #[error("invalid configuration path: '{0}'")]
    InvalidConfigPath(String),

    #[error("invalid input directory: '{0}'")]
    InvalidInputDir(String),

    #[error("invalid output directory: '{0}'")]
    InvalidOutputDir(String),

    #[error("invalid number of workers: '{0}'")]
    InvalidWorkers(usize),
}

#[derive(Debug, Error)]
pub enum CredentialsErr {
    #[error("failed to read credentials file: '{0}'")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse credentials: '{0}'")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ProbeErr {
    #[error("failed to read document: '{0}'")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse document: '{0}'")]
    Pdf(#[from] lopdf::Error),
}

#[derive(Debug, Error)]
pub enum InvokerErr {
    #[error("authentication failed (status {status}): '{message}'")]
    Auth { status: u16, message: String },

    #[error("usage quota exceeded: '{0}'")]
    Quota(String),

    #[error("extraction service failed (status {status}): '{message}'")]
    Service { status: u16, message: String },

    #[error("failed to reach extraction service: '{0}'")]
    Transport(String),

    #[error("failed to read or write data: '{0}'")]
    IoError(#[from] std::io::Error),
}

/// Failure of a single extraction attempt, after the document was found eligible.
#[derive(Debug, Error)]
pub enum AttemptErr {
    #[error("failed to create output directory: '{0}'")]
    OutputDir(std::io::Error),

    #[error("extraction failed: {0}")]
    Invoker(#[from] InvokerErr),

    #[error("failed to save result: '{0}'")]
    Save(std::io::Error),
}

#[derive(Debug, Error)]
pub enum LoggerErr {
    #[error("failed to open or write log file: '{0}'")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum BatchErr {
    #[error("failed to setup run logs: '{0}'")]
    Logger(#[from] LoggerErr),

    #[error("failed to create thread pool: '{0}'")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
