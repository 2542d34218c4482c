//! Journey controller - the single authority over which stage may be shown
//!
//! Owns the session's `JourneyState`. Pages ask `can_enter` before they are
//! drawn, call `advance` when the visitor leaves them, and the entry page
//! submits the gate answer. Nothing here fails: a wrong answer is rejected
//! and a disallowed stage resolves to the entry stage.

use crate::domain::journey::{epoch_ms, Journey, JourneyEvent, JourneyEventType};
use crate::domain::types::{GateResult, Stage, GATE_ANSWER_DATE};
use chrono::NaiveDate;
use tracing::{debug, info, warn};

/// Accepted text format for the gate answer
const GATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Parse free-form gate input. Anything that is not a valid `YYYY-MM-DD`
/// calendar date yields `None`.
pub fn parse_gate_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), GATE_INPUT_FORMAT).ok()
}

pub struct JourneyController {
    journey: Journey,
    gate_answer: NaiveDate,
}

impl JourneyController {
    pub fn new() -> Self {
        Self::with_gate_answer(GATE_ANSWER_DATE)
    }

    pub fn with_gate_answer(gate_answer: NaiveDate) -> Self {
        let journey = Journey::new();
        info!(sid = %journey.sid, "journey_started");
        Self { journey, gate_answer }
    }

    pub fn journey(&self) -> &Journey {
        &self.journey
    }

    #[inline]
    pub fn is_unlocked(&self) -> bool {
        self.journey.state.unlocked()
    }

    #[inline]
    pub fn furthest_stage(&self) -> Stage {
        self.journey.state.furthest_stage()
    }

    /// Check a date against the gate answer.
    ///
    /// A match unlocks the countdown (idempotent once unlocked). Anything
    /// else leaves the state untouched; there is no retry limit.
    pub fn submit_gate_answer(&mut self, input: NaiveDate) -> GateResult {
        self.journey.gate_attempts += 1;
        let attempt = self.journey.gate_attempts;

        if input != self.gate_answer {
            info!(sid = %self.journey.sid, attempt = %attempt, "gate_answer_rejected");
            self.journey.add_event(
                JourneyEvent::new(JourneyEventType::GateRejected, epoch_ms())
                    .with_extra(&input.to_string()),
            );
            return GateResult::Rejected;
        }

        if self.journey.state.raise_to(Stage::Countdown) {
            info!(sid = %self.journey.sid, attempt = %attempt, "gate_answer_accepted");
            self.journey.add_event(
                JourneyEvent::new(JourneyEventType::GateAccepted, epoch_ms())
                    .with_stage(Stage::Countdown),
            );
        } else {
            debug!(sid = %self.journey.sid, attempt = %attempt, "gate_answer_repeated");
        }
        GateResult::Accepted
    }

    /// Check raw text input. Malformed dates are rejected like wrong ones.
    pub fn submit_gate_input(&mut self, raw: &str) -> GateResult {
        match parse_gate_input(raw) {
            Some(date) => self.submit_gate_answer(date),
            None => {
                self.journey.gate_attempts += 1;
                info!(
                    sid = %self.journey.sid,
                    attempt = %self.journey.gate_attempts,
                    input_len = %raw.len(),
                    "gate_input_malformed"
                );
                self.journey.add_event(
                    JourneyEvent::new(JourneyEventType::GateRejected, epoch_ms())
                        .with_extra("malformed"),
                );
                GateResult::Rejected
            }
        }
    }

    /// Record that the visitor is leaving `from`.
    ///
    /// Only moves the furthest stage when `from` is the furthest stage;
    /// repeated or out-of-order calls are silent no-ops. The gallery has
    /// no successor, so advancing from it changes nothing.
    pub fn advance(&mut self, from: Stage) {
        let furthest = self.furthest_stage();
        if from != furthest {
            debug!(
                sid = %self.journey.sid,
                from = %from,
                furthest = %furthest,
                "advance_ignored"
            );
            return;
        }

        let Some(next) = from.next() else {
            return;
        };

        self.journey.state.raise_to(next);
        info!(sid = %self.journey.sid, from = %from, to = %next, "stage_advanced");
        self.journey.add_event(
            JourneyEvent::new(JourneyEventType::StageAdvanced, epoch_ms()).with_stage(next),
        );
    }

    /// `advance` for a raw rank; out-of-range ranks are ignored
    pub fn advance_rank(&mut self, rank: u8) {
        if let Some(stage) = Stage::from_rank(rank) {
            self.advance(stage);
        }
    }

    pub fn can_enter(&self, stage: Stage) -> bool {
        match stage {
            Stage::DateGate => true,
            Stage::Countdown => self.is_unlocked(),
            _ => self.furthest_stage() >= stage,
        }
    }

    /// `can_enter` for a raw rank; out-of-range ranks are never enterable
    pub fn can_enter_rank(&self, rank: u8) -> bool {
        Stage::from_rank(rank).is_some_and(|stage| self.can_enter(stage))
    }

    /// Stage to actually show for a request: the stage itself when
    /// permitted, otherwise the entry stage.
    pub fn resolve(&mut self, requested: Stage) -> Stage {
        if self.can_enter(requested) {
            return requested;
        }

        warn!(
            sid = %self.journey.sid,
            requested = %requested,
            furthest = %self.furthest_stage(),
            "navigation_redirected"
        );
        self.journey.add_event(
            JourneyEvent::new(JourneyEventType::Redirected, epoch_ms()).with_stage(requested),
        );
        Stage::DateGate
    }

    /// Resolve a route path. Unknown routes land on the entry stage.
    pub fn resolve_route(&mut self, route: &str) -> Stage {
        match Stage::from_route(route) {
            Some(stage) => self.resolve(stage),
            None => {
                warn!(sid = %self.journey.sid, route = %route, "unknown_route");
                self.journey.add_event(
                    JourneyEvent::new(JourneyEventType::Redirected, epoch_ms()).with_extra(route),
                );
                Stage::DateGate
            }
        }
    }

    /// Close the session and hand back its journal
    pub fn finish(mut self) -> Journey {
        self.journey.complete();
        info!(
            sid = %self.journey.sid,
            furthest = %self.furthest_stage(),
            attempts = %self.journey.gate_attempts,
            events = %self.journey.events.len(),
            "journey_finished"
        );
        self.journey
    }
}

impl Default for JourneyController {
    fn default() -> Self {
        Self::new()
    }
}
