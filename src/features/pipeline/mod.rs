//! # Feature: Reminder Pipeline
//!
//! Walks the manifest in order, evaluating each event against one
//! captured "now" and handing due-soon events to a [`Notifier`]. A bad
//! event never stops the run.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

use chrono::{DateTime, TimeZone};
use log::{error, info, warn};

use crate::features::evaluator::{evaluate_event, Outcome};
use crate::features::manifest::Event;
use crate::features::notifier::{Delivery, Notifier};

/// Tally of one run over the manifest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Events with a usable date
    pub evaluated: usize,
    pub invalid: usize,
    pub expired: usize,
    pub due_soon: usize,
    pub sent: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunReport {
    fn record(&mut self, delivery: Delivery) {
        match delivery {
            Delivery::Sent => self.sent += 1,
            Delivery::Skipped => self.skipped += 1,
            Delivery::Failed => self.failed += 1,
        }
    }
}

/// Process every event sequentially.
pub async fn run<Tz, N>(events: &[Event], now: &DateTime<Tz>, notifier: &N) -> RunReport
where
    Tz: TimeZone,
    N: Notifier + ?Sized,
{
    let mut report = RunReport::default();

    for event in events {
        let outcome = match evaluate_event(event, now) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(
                    "Skipping event \"{}\" with time {:?}: {e:#}",
                    event.title, event.time
                );
                report.invalid += 1;
                continue;
            }
        };
        report.evaluated += 1;

        let day = match outcome {
            Outcome::Expired => {
                warn!("Event \"{}\" ({}) is expired", event.title, event.time);
                report.expired += 1;
                continue;
            }
            Outcome::Upcoming { day } => day,
        };

        info!("Event \"{}\" ({}) in {day} day(s)", event.title, event.time);

        if outcome.due_soon_day().is_some() {
            report.due_soon += 1;
            let delivery = notifier.notify(event, day).await;
            report.record(delivery);
        }
    }

    info!(
        "Run complete: {} evaluated, {} invalid, {} expired, {} due soon ({} sent, {} skipped, {} failed)",
        report.evaluated,
        report.invalid,
        report.expired,
        report.due_soon,
        report.sent,
        report.skipped,
        report.failed
    );

    report
}
