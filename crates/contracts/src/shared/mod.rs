pub mod config;
pub mod shell_context;
pub mod url_state;
