//! IO modules - files written by the application
//!
//! - `transcript` - Finished journeys to file (JSONL format)

pub mod transcript;

pub use transcript::Transcript;
