// Core layer - configuration and calendar helpers
pub mod core;

// Features layer - manifest, evaluator, notifier, pipeline
pub mod features;

pub use core::Config;

pub use features::{
    // Manifest
    Event, Manifest,
    // Evaluator
    evaluate_event, Outcome, DUE_SOON_DAYS,
    // Notifier
    Delivery, Notifier, SmtpNotifier,
    // Pipeline
    run, RunReport,
};
