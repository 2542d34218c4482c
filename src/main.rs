//! Birthday Journey - a gated, six-page birthday greeting in the terminal
//!
//! Module structure:
//! - `domain/` - Stages, gating state, page content
//! - `services/` - Journey controller, countdown, page timers
//! - `ui/` - ratatui pages and the event loop
//! - `io/` - Session transcript
//! - `infra/` - Config, logging

use birthday_journey::infra::logging::init_file_logging;
use birthday_journey::infra::Config;
use birthday_journey::services::Scheduler;
use birthday_journey::ui::{self, App};
use clap::Parser;
use std::time::Duration;
use tracing::{error, info};

/// Birthday Journey - interactive birthday greeting
#[derive(Parser, Debug)]
#[command(name = "birthday-journey", version, about)]
struct Args {
    /// Path to TOML configuration file (falls back to CONFIG_FILE, then config/journey.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// Route to open first, e.g. /countdown
    #[arg(short, long, default_value = "/")]
    route: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_path = Config::resolve_config_path(args.config.as_deref());
    let config = Config::load_from_path(&config_path);

    // The terminal belongs to the UI, so logs go to a file
    init_file_logging(&config)?;

    info!(version = %env!("CARGO_PKG_VERSION"), git = %env!("GIT_HASH"), "birthday-journey starting");
    info!(
        config_file = %config.config_file(),
        tick_ms = %config.tick_ms(),
        log_file = %config.log_file(),
        transcript = %config.transcript_enabled(),
        "config_loaded"
    );

    let (scheduler, mut timers) = Scheduler::channel();
    let mut app = App::new(&config, scheduler);
    app.open_route(&args.route);

    let mut terminal = ui::setup_terminal()?;
    let result = ui::run(&mut terminal, &mut app, &mut timers, Duration::from_millis(config.tick_ms())).await;
    if let Err(e) = ui::restore_terminal(&mut terminal) {
        error!(error = %e, "terminal_restore_failed");
    }

    if let Err(e) = &result {
        error!(error = %e, "ui_failed");
    }

    // The transcript is written even when the terminal could not be restored
    ui::end_session(app, &config);

    info!("birthday-journey shutdown complete");
    result
}
