//! Reminder email rendering.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use super::mime::encode_word;
use crate::features::manifest::Event;

/// Display name shown on the From header
pub const SENDER_NAME: &str = "Monitor";
pub const SUBJECT_TAG: &str = "「RED」";
pub const SUBJECT_TEXT: &str = "Event reminder";
pub const CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Header values and body of one reminder email, already header-encoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub content_type: String,
    pub body: String,
}

impl ReminderMessage {
    /// Build a self-addressed reminder for `event` with `day` days left.
    pub fn new(mailbox: &str, event: &Event, day: i64) -> Self {
        ReminderMessage {
            from: format!("{} <{}>", encode_word(SENDER_NAME), mailbox),
            to: mailbox.to_string(),
            subject: encode_word(&format!("{SUBJECT_TAG}{SUBJECT_TEXT}")),
            content_type: CONTENT_TYPE.to_string(),
            body: reminder_body(event, day),
        }
    }

    /// Render into the bytes submitted to the relay
    pub fn render(&self) -> Vec<u8> {
        format!(
            "From: {}\r\nTo: {}\r\nSubject: {}\r\nContent-Type: {}\r\n\r\n{}",
            self.from, self.to, self.subject, self.content_type, self.body
        )
        .into_bytes()
    }
}

/// Body text for an event `day` days away
pub fn reminder_body(event: &Event, day: i64) -> String {
    if day > 0 {
        format!("{day} days remain until \"{}\"\n\n", event.title)
    } else {
        format!("today is \"{}\"\n\n", event.title)
    }
}
