//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod interaction_logger;
pub mod scheduler;
pub mod surface;
