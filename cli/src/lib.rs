pub mod commands;
pub mod context;
pub mod logging;

pub use context::CliContext;
