//! CLI module - argument parsing and the interactive session

pub mod args;
pub mod forms;
pub mod helpers;
pub mod session;
pub mod table;

pub use args::Cli;
pub use session::Session;
