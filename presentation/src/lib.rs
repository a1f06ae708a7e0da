//! Presentation layer for folio
//!
//! This crate contains the CLI definition and the console host: command
//! parsing, terminal rendering of the page and the interactive session loop.

pub mod cli;
pub mod console;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use console::{
    CommandParseError, ConsoleCommand, ConsoleSession, ConsoleSurface, Flow, WallClock,
};
