// Command-line interface: argument parsing and non-interactive commands
pub mod commands;

pub use commands::run;
