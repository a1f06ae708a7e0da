//! Application layer for folio
//!
//! This crate contains the controllers, port definitions, the virtual-time
//! scheduler and the interaction configuration. It depends only on the
//! domain layer.

pub mod config;
pub mod ports;
pub mod scheduling;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use config::InteractionConfig;
pub use ports::{
    interaction_logger::{InteractionLogger, InteractionRecord, NoInteractionLog},
    scheduler::{Scheduler, TimerHandle, TimerTask},
    surface::{FeedbackSurface, FormSurface, PageSurface, SubmitControl, SubmitStyle},
};
pub use scheduling::TimerQueue;
pub use use_cases::contact_form::{ContactFormController, SubmitOutcome};
pub use use_cases::feedback::FeedbackRenderer;
pub use use_cases::page::PageController;
pub use use_cases::site::{EventOutcome, Site, SiteError};
