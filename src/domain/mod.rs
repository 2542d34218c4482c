//! Domain models - stages, gating state and page content
//!
//! This module contains the canonical data types used throughout the system:
//! - `Stage` - the six ordered pages of the journey
//! - `JourneyState` - what the visitor is currently allowed to see
//! - `Journey` - one session: state plus journal of events
//! - `content` - hard-coded strings, wish cards and photos

pub mod content;
pub mod journey;
pub mod types;
