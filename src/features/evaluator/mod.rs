//! # Feature: Date Evaluator
//!
//! Classifies an event against the current time. The manifest date is the
//! day before the deadline: an event dated `2025-06-01` is due at midnight
//! starting `2025-06-02`.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

use anyhow::{anyhow, Result};
use chrono::{DateTime, TimeZone};

use crate::core::clock;
use crate::features::manifest::Event;

/// Events this many days out (or fewer) trigger a reminder
pub const DUE_SOON_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Deadline already passed
    Expired,
    /// Deadline still ahead; `day` whole days remain (0 = today)
    Upcoming { day: i64 },
}

impl Outcome {
    /// Days remaining when the event should be forwarded for notification
    pub fn due_soon_day(&self) -> Option<i64> {
        match *self {
            Outcome::Upcoming { day } if day <= DUE_SOON_DAYS => Some(day),
            _ => None,
        }
    }
}

/// Evaluate one event against `now`, in `now`'s timezone.
///
/// Fails only when the event date cannot be parsed. A deadline midnight
/// skipped by a DST change moves to the first local time after the gap.
pub fn evaluate_event<Tz: TimeZone>(event: &Event, now: &DateTime<Tz>) -> Result<Outcome> {
    let date = clock::parse_date(&event.time)?;
    let deadline_date = clock::next_day(date)?;
    let deadline = clock::start_of_day(deadline_date, &now.timezone())
        .ok_or_else(|| anyhow!("no local time exists on {deadline_date}"))?;

    if deadline < *now {
        return Ok(Outcome::Expired);
    }

    Ok(Outcome::Upcoming {
        day: clock::whole_days_between(now, &deadline),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn may_28() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 28, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_deadline_is_day_after_manifest_date() {
        let outcome = evaluate_event(&Event::new("Launch", "2025-06-01"), &may_28()).unwrap();
        assert_eq!(outcome, Outcome::Upcoming { day: 5 });
        assert_eq!(outcome.due_soon_day(), Some(5));
    }

    #[test]
    fn test_day_before_yesterday_is_expired() {
        let outcome = evaluate_event(&Event::new("Past", "2025-05-26"), &may_28()).unwrap();
        assert_eq!(outcome, Outcome::Expired);
        assert_eq!(outcome.due_soon_day(), None);
    }

    #[test]
    fn test_yesterday_deadline_equal_to_now_is_today() {
        // Deadline is exactly now, which is not before now
        let outcome = evaluate_event(&Event::new("Edge", "2025-05-27"), &may_28()).unwrap();
        assert_eq!(outcome, Outcome::Upcoming { day: 0 });
        assert_eq!(outcome.due_soon_day(), Some(0));
    }

    #[test]
    fn test_today_later_in_the_day() {
        let now = Utc.with_ymd_and_hms(2025, 5, 28, 18, 30, 0).unwrap();
        let outcome = evaluate_event(&Event::new("Today", "2025-05-28"), &now).unwrap();
        assert_eq!(outcome, Outcome::Upcoming { day: 0 });
    }

    #[test]
    fn test_seven_days_is_due_eight_is_not() {
        let seven = evaluate_event(&Event::new("Week", "2025-06-03"), &may_28()).unwrap();
        assert_eq!(seven, Outcome::Upcoming { day: 7 });
        assert_eq!(seven.due_soon_day(), Some(7));

        let eight = evaluate_event(&Event::new("Later", "2025-06-04"), &may_28()).unwrap();
        assert_eq!(eight, Outcome::Upcoming { day: 8 });
        assert_eq!(eight.due_soon_day(), None);
    }

    #[test]
    fn test_partial_days_round_down() {
        let now = Utc.with_ymd_and_hms(2025, 5, 28, 6, 0, 0).unwrap();
        let outcome = evaluate_event(&Event::new("Launch", "2025-06-01"), &now).unwrap();
        assert_eq!(outcome, Outcome::Upcoming { day: 4 });
    }

    #[test]
    fn test_uses_timezone_of_now() {
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        let now = tz.with_ymd_and_hms(2025, 5, 28, 0, 0, 0).unwrap();
        let outcome = evaluate_event(&Event::new("Launch", "2025-06-01"), &now).unwrap();
        assert_eq!(outcome, Outcome::Upcoming { day: 5 });
    }

    #[test]
    fn test_deadline_in_dst_gap_rolls_forward() {
        let tz = chrono_tz::America::Sao_Paulo;
        let now = tz.with_ymd_and_hms(2018, 11, 1, 0, 0, 0).unwrap();
        // Deadline midnight 2018-11-04 does not exist there; 01:00 is used
        let outcome = evaluate_event(&Event::new("Fair", "2018-11-03"), &now).unwrap();
        assert_eq!(outcome, Outcome::Upcoming { day: 3 });
    }

    #[test]
    fn test_malformed_date_is_an_error() {
        assert!(evaluate_event(&Event::new("Bad", "2025-13-40"), &may_28()).is_err());
        assert!(evaluate_event(&Event::new("Empty", ""), &may_28()).is_err());
    }
}
