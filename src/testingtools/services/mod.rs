pub mod invoker;
pub mod probe;
