//! Session transcript - appends finished journeys to a file
//!
//! Journeys are written in JSONL format (one JSON object per line).
//! The file is only ever appended to; nothing reads it back, so a restart
//! always begins a fresh journey.

use crate::domain::journey::Journey;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::{debug, error, info};

/// Transcript writer for journeys
pub struct Transcript {
    file_path: String,
}

impl Transcript {
    pub fn new(file_path: &str) -> Self {
        info!(file_path = %file_path, "transcript_initialized");
        Self { file_path: file_path.to_string() }
    }

    /// Write a journey to the transcript file
    /// Returns true if successful, false otherwise
    pub fn write_journey(&self, journey: &Journey) -> bool {
        let json = journey.to_json();

        match self.append_line(&json) {
            Ok(()) => {
                info!(
                    sid = %journey.sid,
                    furthest = %journey.state.furthest_stage(),
                    events = %journey.events.len(),
                    "journey_transcribed"
                );
                true
            }
            Err(e) => {
                error!(sid = %journey.sid, error = %e, "journey_transcript_failed");
                false
            }
        }
    }

    fn append_line(&self, line: &str) -> std::io::Result<()> {
        let path = Path::new(&self.file_path);

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;

        writeln!(file, "{}", line)?;
        debug!(file = %self.file_path, bytes = %line.len(), "transcript_written");

        Ok(())
    }
}
