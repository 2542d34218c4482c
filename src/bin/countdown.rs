//! Countdown tool - prints time left until the next celebration day
//!
//! Uses the local clock unless `--now` pins the reference instant.

use birthday_journey::domain::types::{Countdown, CELEBRATION_DATE};
use birthday_journey::infra::logging::init_stderr_logging;
use birthday_journey::services::countdown::{countdown_from_local_now, countdown_to};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use clap::Parser;
use tracing::debug;

/// Accepted `--now` format without an offset, read in the local time zone
const NOW_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Parser, Debug)]
#[command(name = "journey-countdown", version, about = "Time left until the celebration day")]
struct Args {
    /// Reference time, e.g. 2025-08-13T23:00:00 (local) or 2025-08-13T23:00:00+02:00
    #[arg(long)]
    now: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Countdown from an explicit `--now`. An RFC 3339 offset is honoured;
/// a bare date-time is local time.
fn countdown_at(raw: &str) -> Result<Countdown, Box<dyn std::error::Error>> {
    let raw = raw.trim();
    if let Ok(now) = DateTime::parse_from_rfc3339(raw) {
        return Ok(countdown_to(CELEBRATION_DATE, now));
    }

    let naive = NaiveDateTime::parse_from_str(raw, NOW_FORMAT)
        .map_err(|e| format!("invalid --now '{}': {} (expected YYYY-MM-DDTHH:MM:SS)", raw, e))?;
    let now = Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| format!("--now '{}' does not exist in the local time zone", raw))?;
    Ok(countdown_to(CELEBRATION_DATE, now))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_stderr_logging(&args.log_level);

    let remaining = match args.now.as_deref() {
        Some(raw) => countdown_at(raw)?,
        None => countdown_from_local_now(CELEBRATION_DATE),
    };
    debug!(now = ?args.now, remaining = %remaining, "countdown_computed");

    if args.json {
        println!("{}", serde_json::to_string(&remaining)?);
    } else {
        println!("{}", remaining);
        if remaining.is_final_day() {
            println!("It's almost time!");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_at_with_offset() {
        let left = countdown_at("2025-08-13T23:00:00+02:00").unwrap();
        assert_eq!(left, Countdown { days: 0, hours: 1, minutes: 0, seconds: 0 });
    }

    #[test]
    fn test_countdown_at_rejects_garbage() {
        let err = countdown_at("tomorrow").unwrap_err();
        assert!(err.to_string().contains("invalid --now"));
    }
}
