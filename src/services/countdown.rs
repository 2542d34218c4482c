//! Countdown to the annually recurring celebration day
//!
//! The day starts at local midnight in the caller's time zone, but the
//! distance to it is measured between instants, so a daylight-saving
//! change in between shortens or lengthens the wait by its real amount.

use crate::domain::types::Countdown;
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};

/// Years searched for the next occurrence; Feb 29 recurs within eight
const MAX_YEARS_AHEAD: i32 = 8;

/// Pin a local wall-clock time to an instant in `tz`. Ambiguous times take
/// the earlier instant; a time skipped by a forward shift moves an hour on.
fn resolve_local<Tz: TimeZone>(tz: &Tz, local: &NaiveDateTime) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(local)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(*local + TimeDelta::hours(1))).earliest())
}

/// Local midnight of the first occurrence of `target`'s month/day strictly
/// after `now`, in `now`'s time zone. Starts from `now`'s local year, so
/// once this year's day has begun the next year's occurrence is used.
pub fn next_occurrence<Tz: TimeZone>(target: NaiveDate, now: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let tz = now.timezone();
    let year = now.naive_local().year();
    (0..=MAX_YEARS_AHEAD)
        .filter_map(|offset| {
            let midnight = NaiveDate::from_ymd_opt(year + offset, target.month(), target.day())?
                .and_hms_opt(0, 0, 0)?;
            resolve_local(&tz, &midnight)
        })
        .find(|occurrence| now < occurrence)
}

/// Time left from `now` until the next occurrence of `target`.
///
/// Pure; only the month and day of `target` are used.
///
/// # Example
///
/// ```
/// use birthday_journey::services::countdown::countdown_to;
/// use chrono::NaiveDate;
///
/// let target = NaiveDate::from_ymd_opt(2025, 8, 14).unwrap();
/// let now = NaiveDate::from_ymd_opt(2025, 8, 13).unwrap().and_hms_opt(23, 0, 0).unwrap().and_utc();
/// let left = countdown_to(target, now);
/// assert_eq!((left.days, left.hours, left.minutes, left.seconds), (0, 1, 0, 0));
/// ```
pub fn countdown_to<Tz: TimeZone>(target: NaiveDate, now: DateTime<Tz>) -> Countdown {
    let remaining_ms = next_occurrence(target, &now)
        .map(|occurrence| occurrence.signed_duration_since(&now).num_milliseconds().max(0) as u64)
        .unwrap_or(0);
    Countdown::from_millis(remaining_ms)
}

/// `countdown_to` against the local clock and time zone
pub fn countdown_from_local_now(target: NaiveDate) -> Countdown {
    countdown_to(target, Local::now())
}
