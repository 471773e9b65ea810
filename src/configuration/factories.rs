use crate::data_providers::config::{FsConfigLoader, FsConfigResolver};
use crate::data_providers::credentials::load_credentials;
use crate::data_providers::invoker::HttpInvoker;
use crate::data_providers::probe::LopdfProbe;
use crate::entities::credentials::Credentials;
use crate::result::CredentialsErr;
use crate::use_cases::config::{CfgLoader, CfgResolver, Config};
use crate::use_cases::invoker::Invoker;
use crate::use_cases::probe::Probe;

pub fn config_resolver(config_loader: CfgLoader) -> CfgResolver {
    Box::new(FsConfigResolver::new(config_loader))
}

pub fn config_loader() -> CfgLoader {
    Box::new(FsConfigLoader)
}

pub fn credentials(cfg: &Config) -> Result<Credentials, CredentialsErr> {
    load_credentials(&cfg.credentials_path)
}

pub fn probe() -> Probe {
    Box::new(LopdfProbe)
}

pub fn invoker(cfg: &Config, credentials: Credentials) -> Invoker {
    Box::new(HttpInvoker::new(&cfg.service, credentials))
}
