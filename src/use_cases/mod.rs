pub mod batch;
pub mod config;
pub mod context;
pub mod handler;
pub mod invoker;
pub mod mirror;
pub mod probe;
pub mod run_log;
pub mod walker;
