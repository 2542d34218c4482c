//! Shared types for the birthday journey

use chrono::NaiveDate;
use serde::Serialize;

/// The date the gate question expects ("when did we start dating?")
pub const GATE_ANSWER_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2025, 3, 16) {
    Some(date) => date,
    None => panic!("invalid gate answer date"),
};

/// The celebration day. Only month and day are used; it recurs every year.
pub const CELEBRATION_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2025, 8, 14) {
    Some(date) => date,
    None => panic!("invalid celebration date"),
};

/// Number of stages in the journey
pub const STAGE_COUNT: u8 = 6;

/// One of the six fixed pages of the journey, ordered by rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    DateGate = 1,
    Countdown = 2,
    Birthday = 3,
    Message = 4,
    Wishes = 5,
    Gallery = 6,
}

impl Stage {
    pub const ALL: [Stage; STAGE_COUNT as usize] = [
        Stage::DateGate,
        Stage::Countdown,
        Stage::Birthday,
        Stage::Message,
        Stage::Wishes,
        Stage::Gallery,
    ];

    /// Rank in 1..=6
    #[inline]
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            1 => Some(Stage::DateGate),
            2 => Some(Stage::Countdown),
            3 => Some(Stage::Birthday),
            4 => Some(Stage::Message),
            5 => Some(Stage::Wishes),
            6 => Some(Stage::Gallery),
            _ => None,
        }
    }

    /// Successor stage, `None` for the gallery
    pub fn next(self) -> Option<Self> {
        Self::from_rank(self.rank() + 1)
    }

    pub fn route(self) -> &'static str {
        match self {
            Stage::DateGate => "/",
            Stage::Countdown => "/countdown",
            Stage::Birthday => "/birthday",
            Stage::Message => "/message",
            Stage::Wishes => "/wishes",
            Stage::Gallery => "/gallery",
        }
    }

    /// Parse a route path. A trailing slash is tolerated and an empty
    /// path is the entry route.
    pub fn from_route(route: &str) -> Option<Self> {
        let route = route.trim();
        let path = match route.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Stage::ALL.into_iter().find(|stage| stage.route() == path)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::DateGate => "date_gate",
            Stage::Countdown => "countdown",
            Stage::Birthday => "birthday",
            Stage::Message => "message",
            Stage::Wishes => "wishes",
            Stage::Gallery => "gallery",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of a gate answer. A rejection is a normal, repeatable result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateResult {
    Accepted,
    Rejected,
}

impl GateResult {
    #[inline]
    pub fn is_accepted(self) -> bool {
        self == GateResult::Accepted
    }
}

/// Time left until the next celebration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Countdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Countdown {
    const MS_PER_SECOND: u64 = 1000;
    const MS_PER_MINUTE: u64 = 60 * Self::MS_PER_SECOND;
    const MS_PER_HOUR: u64 = 60 * Self::MS_PER_MINUTE;
    const MS_PER_DAY: u64 = 24 * Self::MS_PER_HOUR;

    /// Decompose a millisecond difference by successive division/modulo
    pub fn from_millis(ms: u64) -> Self {
        Self {
            days: ms / Self::MS_PER_DAY,
            hours: (ms / Self::MS_PER_HOUR) % 24,
            minutes: (ms / Self::MS_PER_MINUTE) % 60,
            seconds: (ms / Self::MS_PER_SECOND) % 60,
        }
    }

    /// Less than a day to go
    #[inline]
    pub fn is_final_day(&self) -> bool {
        self.days == 0
    }

    pub fn is_zero(&self) -> bool {
        *self == Countdown::default()
    }
}

impl std::fmt::Display for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}d {:02}h {:02}m {:02}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_ranks_and_successors() {
        for (i, stage) in Stage::ALL.iter().enumerate() {
            assert_eq!(stage.rank() as usize, i + 1);
            assert_eq!(Stage::from_rank(stage.rank()), Some(*stage));
        }
        assert_eq!(Stage::DateGate.next(), Some(Stage::Countdown));
        assert_eq!(Stage::Wishes.next(), Some(Stage::Gallery));
        assert_eq!(Stage::Gallery.next(), None);
    }

    #[test]
    fn test_from_rank_out_of_range() {
        assert_eq!(Stage::from_rank(0), None);
        assert_eq!(Stage::from_rank(7), None);
        assert_eq!(Stage::from_rank(255), None);
    }

    #[test]
    fn test_route_round_trip() {
        for stage in Stage::ALL {
            assert_eq!(Stage::from_route(stage.route()), Some(stage));
        }
    }

    #[test]
    fn test_from_route_tolerates_trailing_slash_and_blank() {
        assert_eq!(Stage::from_route("/gallery/"), Some(Stage::Gallery));
        assert_eq!(Stage::from_route(" /wishes "), Some(Stage::Wishes));
        assert_eq!(Stage::from_route(""), Some(Stage::DateGate));
        assert_eq!(Stage::from_route("//"), Some(Stage::DateGate));
        assert_eq!(Stage::from_route("/nope"), None);
        assert_eq!(Stage::from_route("gallery"), None);
    }

    #[test]
    fn test_countdown_from_millis() {
        let ms = 2 * 86_400_000 + 3 * 3_600_000 + 4 * 60_000 + 5_000 + 999;
        let countdown = Countdown::from_millis(ms);
        assert_eq!(countdown, Countdown { days: 2, hours: 3, minutes: 4, seconds: 5 });
        assert!(!countdown.is_final_day());
        assert_eq!(countdown.to_string(), "2d 03h 04m 05s");
    }

    #[test]
    fn test_countdown_zero() {
        let countdown = Countdown::from_millis(999);
        assert!(countdown.is_zero());
        assert!(countdown.is_final_day());
    }

    #[test]
    fn test_gate_result_is_accepted() {
        assert!(GateResult::Accepted.is_accepted());
        assert!(!GateResult::Rejected.is_accepted());
    }

    #[test]
    fn test_constants() {
        assert_eq!(GATE_ANSWER_DATE.to_string(), "2025-03-16");
        assert_eq!(CELEBRATION_DATE.to_string(), "2025-08-14");
    }
}
