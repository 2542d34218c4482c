//! Services - journey logic and presentation timing
//!
//! This module contains:
//! - `journey_controller` - Gate answer, stage advancement and entry checks
//! - `countdown` - Time left until the recurring celebration day
//! - `scheduler` - Cancellable timers feeding the UI loop

pub mod countdown;
pub mod journey_controller;
pub mod scheduler;

// Re-export commonly used types
pub use countdown::countdown_to;
pub use journey_controller::JourneyController;
pub use scheduler::{PageTimer, Scheduler, TimerFired, TimerHandle};
