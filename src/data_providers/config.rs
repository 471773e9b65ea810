use crate::helpers::PathRefExt;
use crate::result::ConfigurationErr;
use crate::use_cases::config::{CfgLoader, Config, ConfigLoader, ConfigResolver};

use std::fs::read_to_string;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

pub struct FsConfigLoader;

/// Loads configuration file.
///
/// It reads a toml file from the filesystem and decodes it into [`Config`] structure.
impl ConfigLoader for FsConfigLoader {
    #[instrument(skip(self))]
    fn load(&self, path: &Path) -> Result<Config, ConfigurationErr> {
        Ok(toml::from_str(&read_to_string(path)?)?)
    }
}

/// Handles configuration override and validates what was loaded.
///
/// The priority order is as follows:
/// 1. Config override.
/// 2. Default configuration path. See [`config_path`].
///
/// A missing configuration file is an error, there is nothing sensible to run without the input
/// directory.
pub struct FsConfigResolver {
    config_loader: CfgLoader,
}

impl FsConfigResolver {
    pub fn new(config_loader: CfgLoader) -> Self {
        Self { config_loader }
    }
}

impl ConfigResolver for FsConfigResolver {
    #[instrument(skip(self))]
    fn handle_config(&self, path_override: Option<String>) -> Result<Config, ConfigurationErr> {
        let config_path = match path_override {
            Some(path) => PathBuf::from(path),
            None => config_path()?,
        };
        if !config_path.is_file() {
            return Err(ConfigurationErr::InvalidConfigPath(format!(
                "No configuration file at '{}'",
                config_path.str()
            )));
        }
        debug!("loading config from '{}'", config_path.str());
        let cfg = self.config_loader.load(&config_path)?;
        validate(&cfg)?;
        Ok(cfg)
    }
}

pub fn config_path() -> Result<PathBuf, ConfigurationErr> {
    let config_dir = dirs::config_dir().ok_or_else(|| {
        ConfigurationErr::InvalidConfigPath("Can't determine system config directory".into())
    })?;
    Ok(config_dir.join("pdfbatch/pdfbatch.toml"))
}

fn validate(cfg: &Config) -> Result<(), ConfigurationErr> {
    check_input_dir(cfg)?;
    check_output_dir(cfg)?;
    check_workers(cfg)?;
    Ok(())
}

fn check_input_dir(cfg: &Config) -> Result<(), ConfigurationErr> {
    if !cfg.input_dir.is_dir() {
        return Err(ConfigurationErr::InvalidInputDir(format!(
            "It needs to be an existing directory: '{}'",
            cfg.input_dir.str()
        )));
    }
    Ok(())
}

fn check_output_dir(cfg: &Config) -> Result<(), ConfigurationErr> {
    if cfg.output_dir.exists() && !cfg.output_dir.is_dir() {
        return Err(ConfigurationErr::InvalidOutputDir(format!(
            "It needs to be a directory: '{}'",
            cfg.output_dir.str()
        )));
    }
    Ok(())
}

fn check_workers(cfg: &Config) -> Result<(), ConfigurationErr> {
    if cfg.workers == 0 {
        return Err(ConfigurationErr::InvalidWorkers(cfg.workers));
    }
    Ok(())
}
