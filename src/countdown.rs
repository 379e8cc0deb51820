//! Time left before an event

use std::fmt::{Display, Formatter};

use chrono::{Duration, NaiveDateTime};

/// The time remaining until a target instant, broken down the way a countdown
/// displays it.
///
/// This is a pure computation over its two arguments; re-evaluating it once per
/// second (or however often a display refreshes) is the caller's business.
///
/// ```
/// use corkboard::Countdown;
/// use chrono::NaiveDate;
///
/// let target = NaiveDate::from_ymd_opt(2023, 8, 20).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let now = NaiveDate::from_ymd_opt(2023, 8, 19).unwrap().and_hms_opt(6, 58, 55).unwrap();
/// assert_eq!(Countdown::at(target, now).to_string(), "1d 2h 1m 5s");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Countdown {
    Remaining {
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    },
    /// The target instant has passed
    Ended,
}

impl Countdown {
    /// Compute the countdown to `target` as observed at `now`
    pub fn at(target: NaiveDateTime, now: NaiveDateTime) -> Self {
        let distance = target.signed_duration_since(now);
        if distance < Duration::zero() {
            return Countdown::Ended;
        }

        let total_seconds = distance.num_seconds();
        Countdown::Remaining {
            days: total_seconds / 86_400,
            hours: (total_seconds % 86_400) / 3_600,
            minutes: (total_seconds % 3_600) / 60,
            seconds: total_seconds % 60,
        }
    }

    pub fn is_ended(&self) -> bool {
        matches!(self, Countdown::Ended)
    }
}

impl Display for Countdown {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Countdown::Remaining {
                days,
                hours,
                minutes,
                seconds,
            } => write!(f, "{}d {}h {}m {}s", days, hours, minutes, seconds),
            Countdown::Ended => write!(f, "ended"),
        }
    }
}
