pub mod config;
pub mod credentials;
pub mod invoker;
pub mod probe;
