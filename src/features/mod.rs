//! # Features
//!
//! The three stages of a reminder run plus the driver that chains them.
//!
//! | Feature | Role |
//! |---------|------|
//! | manifest | Load events from JSON |
//! | evaluator | Classify events against now |
//! | notifier | Email due-soon events |
//! | pipeline | Run the stages in order |

pub mod evaluator;
pub mod manifest;
pub mod notifier;
pub mod pipeline;

pub use evaluator::{evaluate_event, Outcome, DUE_SOON_DAYS};
pub use manifest::{Event, Manifest};
pub use notifier::{Delivery, Notifier, SmtpNotifier};
pub use pipeline::{run, RunReport};
