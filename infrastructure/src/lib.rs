//! Infrastructure layer for folio
//!
//! This crate contains adapters for the ports defined in the application
//! layer: configuration file loading and the JSONL interaction log.

pub mod config;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileCopyConfig, FileLoggingConfig, FileOutputConfig,
    FilePageConfig, FileSectionConfig, FileTimingsConfig,
};
pub use logging::JsonlInteractionLogger;
