pub mod credentials;
pub mod document;
pub mod extraction;
pub mod log_line;
pub mod path_stack;
