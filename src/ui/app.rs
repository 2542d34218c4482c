//! Interactive journey session
//!
//! Owns the controller and the mounted page. Every navigation goes through
//! the controller's route guard, bumps the scheduler epoch and mounts a
//! fresh page, so timers armed by the previous page can never fire into
//! the new one.

use crate::domain::journey::{epoch_ms, Journey};
use crate::domain::types::Stage;
use crate::infra::config::{Config, Timings};
use crate::services::{JourneyController, Scheduler, TimerFired};
use crate::ui::pages::{GatePage, Page, PageAction, PageContext};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info, trace};

/// Longest route the route bar accepts
const ROUTE_BAR_MAX: usize = 32;

pub struct App {
    controller: JourneyController,
    scheduler: Scheduler,
    page_scheduler: Scheduler,
    timings: Timings,
    page: Page,
    epoch: u64,
    seed: u64,
    route_bar: Option<String>,
    should_quit: bool,
}

impl App {
    /// Start a new session on the date gate
    pub fn new(config: &Config, scheduler: Scheduler) -> Self {
        Self::with_controller(config, scheduler, JourneyController::new())
    }

    /// Resume with an existing controller. The entry page is mounted through
    /// the usual landing rule, so an unlocked visitor starts on the countdown.
    pub fn with_controller(config: &Config, scheduler: Scheduler, controller: JourneyController) -> Self {
        info!(sid = %controller.journey().sid, "session_started");

        let mut app = Self {
            page_scheduler: scheduler.with_epoch(0),
            controller,
            scheduler,
            timings: config.timings(),
            page: Page::Gate(GatePage::mount()),
            epoch: 0,
            seed: epoch_ms(),
            route_bar: None,
            should_quit: false,
        };
        app.show(Stage::DateGate);
        app
    }

    pub fn controller(&self) -> &JourneyController {
        &self.controller
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn current_stage(&self) -> Stage {
        self.page.stage()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Text typed into the route bar, when it is open
    pub fn route_bar(&self) -> Option<&str> {
        self.route_bar.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Open a route typed by the visitor
    pub fn open_route(&mut self, route: &str) {
        let stage = self.controller.resolve_route(route);
        self.show(stage);
    }

    /// Request a stage; the controller decides where the visitor lands
    pub fn navigate(&mut self, requested: Stage) {
        let stage = self.controller.resolve(requested);
        self.show(stage);
    }

    fn show(&mut self, stage: Stage) {
        // A visitor who already answered never sees the question again
        let stage = if stage == Stage::DateGate && self.controller.is_unlocked() {
            debug!("gate_already_answered");
            Stage::Countdown
        } else {
            stage
        };

        self.epoch += 1;
        self.page_scheduler = self.scheduler.with_epoch(self.epoch);
        let ctx = PageContext {
            controller: &mut self.controller,
            scheduler: &self.page_scheduler,
            timings: self.timings,
            seed: self.seed,
        };
        // Dropping the previous page cancels its timers
        self.page = Page::mount(stage, &ctx);

        info!(stage = %stage, route = %stage.route(), epoch = %self.epoch, "page_mounted");
    }

    fn apply(&mut self, action: PageAction) {
        match action {
            PageAction::Stay => {}
            PageAction::Continue => {
                let from = self.page.stage();
                self.controller.advance(from);
                if let Some(next) = from.next() {
                    self.navigate(next);
                }
            }
            PageAction::Navigate(stage) => self.navigate(stage),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if let Some(bar) = self.route_bar.as_mut() {
            match key.code {
                KeyCode::Esc => self.route_bar = None,
                KeyCode::Enter => {
                    let route = self.route_bar.take().unwrap_or_default();
                    self.open_route(&route);
                }
                KeyCode::Backspace => {
                    bar.pop();
                }
                KeyCode::Char(c) if bar.len() < ROUTE_BAR_MAX => bar.push(c),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char(':') => self.route_bar = Some(String::new()),
            code => {
                let mut ctx = PageContext {
                    controller: &mut self.controller,
                    scheduler: &self.page_scheduler,
                    timings: self.timings,
                    seed: self.seed,
                };
                let action = self.page.handle_key(code, &mut ctx);
                self.apply(action);
            }
        }
    }

    pub fn handle_timer(&mut self, fired: TimerFired) {
        if fired.epoch != self.epoch {
            trace!(timer = %fired.timer.as_str(), epoch = %fired.epoch, "stale_timer_discarded");
            return;
        }

        let mut ctx = PageContext {
            controller: &mut self.controller,
            scheduler: &self.page_scheduler,
            timings: self.timings,
            seed: self.seed,
        };
        let action = self.page.on_timer(fired.timer, &mut ctx);
        self.apply(action);
    }

    pub fn on_tick(&mut self) {
        self.page.on_tick();
    }

    /// End the session and hand back its journal
    pub fn finish(self) -> Journey {
        self.controller.finish()
    }
}
