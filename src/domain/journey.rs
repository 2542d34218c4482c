//! Journey data model: the gating state and the session journal

use crate::domain::types::Stage;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Generate a new UUIDv7 (time-sortable)
pub fn new_uuid_v7() -> String {
    Uuid::now_v7().to_string()
}

/// Get current epoch milliseconds
#[inline]
pub fn epoch_ms() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis() as u64
}

/// Gating state for one session.
///
/// `unlocked` is derived from the furthest stage, so `unlocked` holds
/// exactly when the furthest stage is the countdown or later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JourneyState {
    furthest: Stage,
}

impl JourneyState {
    pub fn new() -> Self {
        Self { furthest: Stage::DateGate }
    }

    #[inline]
    pub fn unlocked(&self) -> bool {
        self.furthest >= Stage::Countdown
    }

    #[inline]
    pub fn furthest_stage(&self) -> Stage {
        self.furthest
    }

    /// Raise the furthest stage. Never lowers it.
    /// Returns true if the state changed.
    pub(crate) fn raise_to(&mut self, stage: Stage) -> bool {
        if stage > self.furthest {
            self.furthest = stage;
            true
        } else {
            false
        }
    }
}

impl Default for JourneyState {
    fn default() -> Self {
        Self::new()
    }
}

/// Event types recorded in the session journal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JourneyEventType {
    GateRejected,
    GateAccepted,
    StageAdvanced,
    Redirected,
}

impl JourneyEventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JourneyEventType::GateRejected => "gate_rejected",
            JourneyEventType::GateAccepted => "gate_accepted",
            JourneyEventType::StageAdvanced => "stage_advanced",
            JourneyEventType::Redirected => "redirected",
        }
    }
}

/// A single journal entry
#[derive(Debug, Clone)]
pub struct JourneyEvent {
    pub t: JourneyEventType,
    pub stage: Option<Stage>,
    pub ts: u64,
    pub extra: Option<String>,
}

impl JourneyEvent {
    pub fn new(event_type: JourneyEventType, ts: u64) -> Self {
        Self { t: event_type, stage: None, ts, extra: None }
    }

    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stage = Some(stage);
        self
    }

    pub fn with_extra(mut self, extra: &str) -> Self {
        self.extra = Some(extra.to_string());
        self
    }

    fn to_json_value(&self) -> serde_json::Value {
        let mut obj = serde_json::Map::new();
        obj.insert("t".to_string(), serde_json::Value::String(self.t.as_str().to_string()));
        if let Some(stage) = self.stage {
            obj.insert("s".to_string(), serde_json::Value::Number(stage.rank().into()));
        }
        obj.insert("ts".to_string(), serde_json::Value::Number(self.ts.into()));
        if let Some(x) = &self.extra {
            obj.insert("x".to_string(), serde_json::Value::String(x.clone()));
        }
        serde_json::Value::Object(obj)
    }
}

/// One visitor session: the gating state plus what happened along the way
#[derive(Debug, Clone)]
pub struct Journey {
    pub sid: String, // UUIDv7 session ID
    pub state: JourneyState,
    pub gate_attempts: u32,
    pub started_at: u64,       // epoch ms
    pub ended_at: Option<u64>, // epoch ms
    pub events: Vec<JourneyEvent>,
}

impl Journey {
    /// Start a fresh session at the entry stage.
    ///
    /// # Example
    ///
    /// ```
    /// use birthday_journey::domain::journey::Journey;
    /// use birthday_journey::domain::types::Stage;
    ///
    /// let journey = Journey::new();
    /// assert_eq!(journey.state.furthest_stage(), Stage::DateGate);
    /// assert!(!journey.state.unlocked());
    /// ```
    pub fn new() -> Self {
        Self {
            sid: new_uuid_v7(),
            state: JourneyState::new(),
            gate_attempts: 0,
            started_at: epoch_ms(),
            ended_at: None,
            events: Vec::with_capacity(16),
        }
    }

    pub fn add_event(&mut self, event: JourneyEvent) {
        self.events.push(event);
    }

    pub fn complete(&mut self) {
        self.ended_at = Some(epoch_ms());
    }

    /// Convert to short-key JSON string
    pub fn to_json(&self) -> String {
        let mut obj = serde_json::Map::new();

        obj.insert("sid".to_string(), serde_json::Value::String(self.sid.clone()));
        obj.insert("unlocked".to_string(), serde_json::Value::Bool(self.state.unlocked()));
        obj.insert(
            "furthest".to_string(),
            serde_json::Value::Number(self.state.furthest_stage().rank().into()),
        );
        obj.insert("attempts".to_string(), serde_json::Value::Number(self.gate_attempts.into()));
        obj.insert("t0".to_string(), serde_json::Value::Number(self.started_at.into()));
        if let Some(ended) = self.ended_at {
            obj.insert("t1".to_string(), serde_json::Value::Number(ended.into()));
        }

        let events: Vec<serde_json::Value> =
            self.events.iter().map(|e| e.to_json_value()).collect();
        obj.insert("ev".to_string(), serde_json::Value::Array(events));

        serde_json::Value::Object(obj).to_string()
    }
}

impl Default for Journey {
    fn default() -> Self {
        Self::new()
    }
}
