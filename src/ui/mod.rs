//! Terminal front end
//!
//! - `app` - Session state, navigation and input routing
//! - `pages` - Per-page presentation state and timers
//! - `draw` - ratatui rendering

pub mod app;
pub mod draw;
pub mod pages;

pub use app::App;

use crate::domain::journey::Journey;
use crate::infra::Config;
use crate::io::Transcript;
use crate::services::TimerFired;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedReceiver;

pub type Tui = Terminal<CrosstermBackend<io::Stdout>>;

pub fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

pub fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

/// Draw, read keys and deliver timer events until the visitor quits
pub async fn run(
    terminal: &mut Tui,
    app: &mut App,
    timers: &mut UnboundedReceiver<TimerFired>,
    tick_rate: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| draw::draw_ui(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        while let Ok(fired) = timers.try_recv() {
            app.handle_timer(fired);
        }

        if app.should_quit() {
            return Ok(());
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }

        tokio::task::yield_now().await;
    }
}

/// Close the session and append it to the transcript when enabled
pub fn end_session(app: App, config: &Config) -> Journey {
    let journey = app.finish();
    if config.transcript_enabled() {
        Transcript::new(config.transcript_file()).write_journey(&journey);
    }
    journey
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::Scheduler;
    use tempfile::tempdir;

    fn config_with_transcript(dir: &std::path::Path, enabled: bool) -> (Config, std::path::PathBuf) {
        let transcript = dir.join("journeys.jsonl");
        let config_path = dir.join("journey.toml");
        std::fs::write(
            &config_path,
            format!("[transcript]\nenabled = {}\nfile = {:?}\n", enabled, transcript.display().to_string()),
        )
        .unwrap();
        (Config::from_file(&config_path).unwrap(), transcript)
    }

    #[tokio::test]
    async fn test_end_session_writes_transcript() {
        let dir = tempdir().unwrap();
        let (config, transcript) = config_with_transcript(dir.path(), true);
        let (scheduler, _rx) = Scheduler::channel();
        let mut app = App::new(&config, scheduler);
        app.open_route("/gallery");

        let journey = end_session(app, &config);
        assert!(journey.ended_at.is_some());

        let content = std::fs::read_to_string(&transcript).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
        assert_eq!(parsed["sid"], journey.sid);
    }

    #[tokio::test]
    async fn test_end_session_skips_disabled_transcript() {
        let dir = tempdir().unwrap();
        let (config, transcript) = config_with_transcript(dir.path(), false);
        let (scheduler, _rx) = Scheduler::channel();

        end_session(App::new(&config, scheduler), &config);
        assert!(!transcript.exists());
    }
}
