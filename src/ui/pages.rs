//! Per-page presentation state
//!
//! Everything here is ephemeral: it lives as long as the page is mounted
//! and is dropped (timers included) when the visitor moves on. The only
//! state that outlives a page is the controller's.

use crate::domain::content::{PERSONAL_MESSAGE, PHOTOS, WISHES};
use crate::domain::types::{Countdown, GateResult, Stage, CELEBRATION_DATE};
use crate::infra::config::Timings;
use crate::services::countdown::{countdown_from_local_now, countdown_to};
use crate::services::{JourneyController, PageTimer, Scheduler, TimerHandle};
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use crossterm::event::KeyCode;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use tracing::debug;

/// Longest gate input accepted (`YYYY-MM-DD`)
const GATE_INPUT_MAX: usize = 10;

pub const CONFETTI_COUNT: usize = 100;
pub const CONFETTI_COLORS: usize = 6;

/// Wish cards are laid out in rows of this many
pub const WISH_COLUMNS: usize = 3;

/// What the app should do after a page handled an input or timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Stay,
    /// Leave this page: advance the controller, then go to the successor
    Continue,
    Navigate(Stage),
}

/// What a page may touch while handling an event
pub struct PageContext<'a> {
    pub controller: &'a mut JourneyController,
    pub scheduler: &'a Scheduler,
    pub timings: Timings,
    pub seed: u64,
}

pub struct GatePage {
    input: String,
    hint_visible: bool,
    success_visible: bool,
    hint_timer: Option<TimerHandle>,
    proceed_timer: Option<TimerHandle>,
}

impl GatePage {
    pub fn mount() -> Self {
        Self {
            input: String::with_capacity(GATE_INPUT_MAX),
            hint_visible: false,
            success_visible: false,
            hint_timer: None,
            proceed_timer: None,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    pub fn success_visible(&self) -> bool {
        self.success_visible
    }

    /// Submitting is disabled while the input is empty or after success
    pub fn can_submit(&self) -> bool {
        !self.input.is_empty() && !self.success_visible
    }

    fn handle_key(&mut self, key: KeyCode, ctx: &mut PageContext<'_>) -> PageAction {
        match key {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                if !self.success_visible && self.input.len() < GATE_INPUT_MAX {
                    self.input.push(c);
                }
            }
            KeyCode::Backspace if !self.success_visible => {
                self.input.pop();
            }
            KeyCode::Enter => {
                self.submit(ctx);
            }
            _ => {}
        }
        PageAction::Stay
    }

    /// Submit the current input. `None` when submitting is disabled.
    pub fn submit(&mut self, ctx: &mut PageContext<'_>) -> Option<GateResult> {
        if !self.can_submit() {
            return None;
        }

        let result = ctx.controller.submit_gate_input(&self.input);
        if result.is_accepted() {
            self.hint_visible = false;
            self.hint_timer = None;
            self.success_visible = true;
            self.proceed_timer =
                Some(ctx.scheduler.once(ctx.timings.gate_success_delay, PageTimer::GateProceed));
        } else {
            self.hint_visible = true;
            // Replacing the handle cancels a hint timer still pending
            self.hint_timer =
                Some(ctx.scheduler.once(ctx.timings.hint_visible, PageTimer::HideHint));
        }
        Some(result)
    }

    fn on_timer(&mut self, timer: PageTimer) -> PageAction {
        match timer {
            PageTimer::HideHint => {
                self.hint_visible = false;
                self.hint_timer = None;
            }
            PageTimer::GateProceed => {
                self.proceed_timer = None;
                return PageAction::Navigate(Stage::Countdown);
            }
            _ => {}
        }
        PageAction::Stay
    }
}

pub struct CountdownPage {
    target: NaiveDate,
    remaining: Countdown,
    _refresh: TimerHandle,
}

impl CountdownPage {
    pub fn mount(ctx: &PageContext<'_>) -> Self {
        Self {
            target: CELEBRATION_DATE,
            remaining: countdown_from_local_now(CELEBRATION_DATE),
            _refresh: ctx.scheduler.every(ctx.timings.countdown_refresh, PageTimer::CountdownRefresh),
        }
    }

    pub fn remaining(&self) -> Countdown {
        self.remaining
    }

    /// The "It's Time!" action is offered on the final day
    pub fn celebration_ready(&self) -> bool {
        self.remaining.is_final_day()
    }

    pub fn refresh_at<Tz: TimeZone>(&mut self, now: DateTime<Tz>) {
        self.remaining = countdown_to(self.target, now);
    }

    fn handle_key(&mut self, key: KeyCode) -> PageAction {
        match key {
            KeyCode::Enter if self.celebration_ready() => PageAction::Continue,
            KeyCode::Char('s') => PageAction::Continue,
            _ => PageAction::Stay,
        }
    }

    fn on_timer(&mut self, timer: PageTimer) -> PageAction {
        if timer == PageTimer::CountdownRefresh {
            self.refresh_at(Local::now());
        }
        PageAction::Stay
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfettiPiece {
    /// Horizontal position in 0..1
    pub column: f32,
    /// Starting vertical offset in 0..1
    pub phase: f32,
    /// Fall speed multiplier in 0.5..1.5
    pub speed: f32,
    pub color: usize,
}

impl ConfettiPiece {
    /// Vertical position in 0..1 at animation frame `frame`
    pub fn height_at(&self, frame: u64) -> f32 {
        (self.phase + frame as f32 * 0.015 * self.speed).fract()
    }
}

/// Deterministic pseudo-random value in 0..1 for piece `index`
fn scatter(seed: u64, index: usize, salt: u8) -> f32 {
    let mut hasher = FxHasher::default();
    (seed, index, salt).hash(&mut hasher);
    ((hasher.finish() >> 32) % 10_000) as f32 / 10_000.0
}

pub fn generate_confetti(seed: u64, count: usize) -> Vec<ConfettiPiece> {
    (0..count)
        .map(|i| ConfettiPiece {
            column: scatter(seed, i, 0),
            phase: scatter(seed, i, 1),
            speed: 0.5 + scatter(seed, i, 2),
            color: (scatter(seed, i, 3) * CONFETTI_COLORS as f32) as usize % CONFETTI_COLORS,
        })
        .collect()
}

pub struct BirthdayPage {
    message_visible: bool,
    button_visible: bool,
    confetti: Vec<ConfettiPiece>,
    frame: u64,
    _timers: [TimerHandle; 2],
}

impl BirthdayPage {
    pub fn mount(ctx: &PageContext<'_>) -> Self {
        Self {
            message_visible: false,
            button_visible: false,
            confetti: generate_confetti(ctx.seed, CONFETTI_COUNT),
            frame: 0,
            _timers: [
                ctx.scheduler.once(ctx.timings.birthday_message_delay, PageTimer::RevealMessage),
                ctx.scheduler.once(ctx.timings.birthday_button_delay, PageTimer::RevealButton),
            ],
        }
    }

    pub fn message_visible(&self) -> bool {
        self.message_visible
    }

    pub fn button_visible(&self) -> bool {
        self.button_visible
    }

    pub fn confetti(&self) -> &[ConfettiPiece] {
        &self.confetti
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    fn handle_key(&mut self, key: KeyCode) -> PageAction {
        match key {
            KeyCode::Enter if self.button_visible => PageAction::Continue,
            _ => PageAction::Stay,
        }
    }

    fn on_timer(&mut self, timer: PageTimer) -> PageAction {
        match timer {
            PageTimer::RevealMessage => self.message_visible = true,
            PageTimer::RevealButton => self.button_visible = true,
            _ => {}
        }
        PageAction::Stay
    }
}

pub struct MessagePage {
    shown: usize,
    button_visible: bool,
    interval: Option<TimerHandle>,
}

impl MessagePage {
    pub fn mount(ctx: &PageContext<'_>) -> Self {
        Self {
            shown: 1,
            button_visible: false,
            interval: Some(
                ctx.scheduler.every(ctx.timings.paragraph_interval, PageTimer::NextParagraph),
            ),
        }
    }

    pub fn visible_paragraphs(&self) -> &'static [&'static str] {
        let all: &'static [&'static str] = &PERSONAL_MESSAGE;
        &all[..self.shown]
    }

    pub fn button_visible(&self) -> bool {
        self.button_visible
    }

    fn handle_key(&mut self, key: KeyCode) -> PageAction {
        match key {
            KeyCode::Enter if self.button_visible => PageAction::Continue,
            _ => PageAction::Stay,
        }
    }

    fn on_timer(&mut self, timer: PageTimer) -> PageAction {
        if timer != PageTimer::NextParagraph {
            return PageAction::Stay;
        }
        if self.shown < PERSONAL_MESSAGE.len() {
            self.shown += 1;
        } else {
            self.button_visible = true;
            self.interval = None;
        }
        PageAction::Stay
    }
}

pub struct WishesPage {
    revealed: [bool; WISHES.len()],
    selected: usize,
    all_revealed: bool,
    complete_timer: Option<TimerHandle>,
}

impl WishesPage {
    pub fn mount() -> Self {
        Self {
            revealed: [false; WISHES.len()],
            selected: 0,
            all_revealed: false,
            complete_timer: None,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Every card is open and the continue prompt is showing
    pub fn all_revealed(&self) -> bool {
        self.all_revealed
    }

    /// Open a card. Revealing is one-way; returns true on a new reveal.
    pub fn reveal(&mut self, index: usize, ctx: &PageContext<'_>) -> bool {
        match self.revealed.get_mut(index) {
            Some(revealed) if !*revealed => *revealed = true,
            _ => return false,
        }
        debug!(card = %index, "wish_revealed");

        if self.revealed.iter().all(|r| *r) {
            self.complete_timer =
                Some(ctx.scheduler.once(ctx.timings.wishes_complete_delay, PageTimer::WishesComplete));
        }
        true
    }

    fn handle_key(&mut self, key: KeyCode, ctx: &PageContext<'_>) -> PageAction {
        let count = WISHES.len();
        match key {
            KeyCode::Left => self.selected = (self.selected + count - 1) % count,
            KeyCode::Right => self.selected = (self.selected + 1) % count,
            KeyCode::Up if self.selected >= WISH_COLUMNS => self.selected -= WISH_COLUMNS,
            KeyCode::Down if self.selected + WISH_COLUMNS < count => {
                self.selected += WISH_COLUMNS
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if index < count {
                    self.selected = index;
                    self.reveal(index, ctx);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.all_revealed {
                    return PageAction::Continue;
                }
                self.reveal(self.selected, ctx);
            }
            _ => {}
        }
        PageAction::Stay
    }

    fn on_timer(&mut self, timer: PageTimer) -> PageAction {
        if timer == PageTimer::WishesComplete {
            self.all_revealed = true;
            self.complete_timer = None;
        }
        PageAction::Stay
    }
}

pub struct GalleryPage {
    current: usize,
    playing: bool,
    controls_visible: bool,
    slideshow: Option<TimerHandle>,
    hide_controls: Option<TimerHandle>,
}

impl GalleryPage {
    pub fn mount(ctx: &PageContext<'_>) -> Self {
        Self {
            current: 0,
            playing: true,
            controls_visible: true,
            slideshow: Some(
                ctx.scheduler.every(ctx.timings.slideshow_interval, PageTimer::SlideshowAdvance),
            ),
            hide_controls: Some(
                ctx.scheduler.once(ctx.timings.controls_hide_delay, PageTimer::HideControls),
            ),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn playing(&self) -> bool {
        self.playing
    }

    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    fn rearm_hide(&mut self, ctx: &PageContext<'_>) {
        self.hide_controls =
            Some(ctx.scheduler.once(ctx.timings.controls_hide_delay, PageTimer::HideControls));
    }

    fn show_controls(&mut self, ctx: &PageContext<'_>) {
        self.controls_visible = true;
        self.rearm_hide(ctx);
    }

    pub fn next(&mut self, ctx: &PageContext<'_>) {
        self.current = (self.current + 1) % PHOTOS.len();
        self.show_controls(ctx);
    }

    pub fn prev(&mut self, ctx: &PageContext<'_>) {
        self.current = (self.current + PHOTOS.len() - 1) % PHOTOS.len();
        self.show_controls(ctx);
    }

    pub fn jump(&mut self, index: usize, ctx: &PageContext<'_>) {
        if index < PHOTOS.len() {
            self.current = index;
        }
        self.show_controls(ctx);
    }

    /// Pausing cancels auto-play; resuming starts a fresh interval
    pub fn toggle_play(&mut self, ctx: &PageContext<'_>) {
        self.playing = !self.playing;
        self.slideshow = if self.playing {
            Some(ctx.scheduler.every(ctx.timings.slideshow_interval, PageTimer::SlideshowAdvance))
        } else {
            None
        };
        self.show_controls(ctx);
    }

    fn handle_key(&mut self, key: KeyCode, ctx: &PageContext<'_>) -> PageAction {
        match key {
            KeyCode::Left | KeyCode::Char('h') => self.prev(ctx),
            KeyCode::Right | KeyCode::Char('l') => self.next(ctx),
            KeyCode::Char(' ') | KeyCode::Char('p') => self.toggle_play(ctx),
            KeyCode::Char(c @ '1'..='9') => self.jump(c as usize - '1' as usize, ctx),
            _ => self.show_controls(ctx),
        }
        PageAction::Stay
    }

    fn on_timer(&mut self, timer: PageTimer, ctx: &PageContext<'_>) -> PageAction {
        match timer {
            PageTimer::SlideshowAdvance if self.playing => {
                self.current = (self.current + 1) % PHOTOS.len();
                self.rearm_hide(ctx);
            }
            PageTimer::HideControls => {
                self.controls_visible = false;
                self.hide_controls = None;
            }
            _ => {}
        }
        PageAction::Stay
    }
}

/// The mounted page, one variant per stage
pub enum Page {
    Gate(GatePage),
    Countdown(CountdownPage),
    Birthday(BirthdayPage),
    Message(MessagePage),
    Wishes(WishesPage),
    Gallery(GalleryPage),
}

impl Page {
    /// Build the page for `stage` and start its timers
    pub fn mount(stage: Stage, ctx: &PageContext<'_>) -> Self {
        match stage {
            Stage::DateGate => Page::Gate(GatePage::mount()),
            Stage::Countdown => Page::Countdown(CountdownPage::mount(ctx)),
            Stage::Birthday => Page::Birthday(BirthdayPage::mount(ctx)),
            Stage::Message => Page::Message(MessagePage::mount(ctx)),
            Stage::Wishes => Page::Wishes(WishesPage::mount()),
            Stage::Gallery => Page::Gallery(GalleryPage::mount(ctx)),
        }
    }

    pub fn stage(&self) -> Stage {
        match self {
            Page::Gate(_) => Stage::DateGate,
            Page::Countdown(_) => Stage::Countdown,
            Page::Birthday(_) => Stage::Birthday,
            Page::Message(_) => Stage::Message,
            Page::Wishes(_) => Stage::Wishes,
            Page::Gallery(_) => Stage::Gallery,
        }
    }

    pub fn handle_key(&mut self, key: KeyCode, ctx: &mut PageContext<'_>) -> PageAction {
        match self {
            Page::Gate(page) => page.handle_key(key, ctx),
            Page::Countdown(page) => page.handle_key(key),
            Page::Birthday(page) => page.handle_key(key),
            Page::Message(page) => page.handle_key(key),
            Page::Wishes(page) => page.handle_key(key, ctx),
            Page::Gallery(page) => page.handle_key(key, ctx),
        }
    }

    pub fn on_timer(&mut self, timer: PageTimer, ctx: &mut PageContext<'_>) -> PageAction {
        match self {
            Page::Gate(page) => page.on_timer(timer),
            Page::Countdown(page) => page.on_timer(timer),
            Page::Birthday(page) => page.on_timer(timer),
            Page::Message(page) => page.on_timer(timer),
            Page::Wishes(page) => page.on_timer(timer),
            Page::Gallery(page) => page.on_timer(timer, ctx),
        }
    }

    /// Animation frame
    pub fn on_tick(&mut self) {
        if let Page::Birthday(page) = self {
            page.frame = page.frame.wrapping_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::GATE_ANSWER_DATE;
    use tokio::sync::mpsc;

    struct Harness {
        controller: JourneyController,
        scheduler: Scheduler,
        #[allow(dead_code)]
        rx: mpsc::UnboundedReceiver<crate::services::TimerFired>,
    }

    impl Harness {
        fn new() -> Self {
            let (scheduler, rx) = Scheduler::channel();
            Self { controller: JourneyController::new(), scheduler, rx }
        }

        fn ctx(&mut self) -> PageContext<'_> {
            PageContext {
                controller: &mut self.controller,
                scheduler: &self.scheduler,
                timings: Timings::default(),
                seed: 42,
            }
        }
    }

    fn type_into(page: &mut GatePage, text: &str, ctx: &mut PageContext<'_>) {
        for c in text.chars() {
            page.handle_key(KeyCode::Char(c), ctx);
        }
    }

    #[tokio::test]
    async fn test_gate_input_filters_characters() {
        let mut h = Harness::new();
        let mut ctx = h.ctx();
        let mut page = GatePage::mount();

        type_into(&mut page, "2025a-03/-16xyz9999", &mut ctx);
        assert_eq!(page.input(), "2025-03-16");
        page.handle_key(KeyCode::Backspace, &mut ctx);
        assert_eq!(page.input(), "2025-03-1");
    }

    #[tokio::test]
    async fn test_gate_empty_submit_is_disabled() {
        let mut h = Harness::new();
        let mut page = GatePage::mount();
        assert!(!page.can_submit());
        assert_eq!(page.submit(&mut h.ctx()), None);
        assert_eq!(h.controller.journey().gate_attempts, 0);
    }

    #[tokio::test]
    async fn test_gate_wrong_answer_shows_hint_until_timer() {
        let mut h = Harness::new();
        let mut page = GatePage::mount();
        {
            let mut ctx = h.ctx();
            type_into(&mut page, "2024-03-16", &mut ctx);
            assert_eq!(page.submit(&mut ctx), Some(GateResult::Rejected));
        }
        assert!(page.hint_visible());
        assert!(!page.success_visible());
        assert!(!h.controller.is_unlocked());

        assert_eq!(page.on_timer(PageTimer::HideHint), PageAction::Stay);
        assert!(!page.hint_visible());
    }

    #[tokio::test]
    async fn test_gate_correct_answer_proceeds_after_timer() {
        let mut h = Harness::new();
        let mut page = GatePage::mount();
        {
            let mut ctx = h.ctx();
            type_into(&mut page, &GATE_ANSWER_DATE.to_string(), &mut ctx);
            page.handle_key(KeyCode::Enter, &mut ctx);
        }
        assert!(page.success_visible());
        assert!(h.controller.is_unlocked());
        assert!(!page.can_submit());

        // Input is frozen once the answer is accepted
        type_into(&mut page, "1", &mut h.ctx());
        assert_eq!(page.input(), "2025-03-16");

        assert_eq!(
            page.on_timer(PageTimer::GateProceed),
            PageAction::Navigate(Stage::Countdown)
        );
    }

    #[tokio::test]
    async fn test_countdown_continue_actions() {
        let mut h = Harness::new();
        let mut page = CountdownPage::mount(&h.ctx());

        let far = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap().and_hms_opt(12, 0, 0).unwrap().and_utc();
        page.refresh_at(far);
        assert!(!page.celebration_ready());
        assert_eq!(page.handle_key(KeyCode::Enter), PageAction::Stay);
        assert_eq!(page.handle_key(KeyCode::Char('s')), PageAction::Continue);

        let eve = NaiveDate::from_ymd_opt(2025, 8, 13).unwrap().and_hms_opt(23, 0, 0).unwrap().and_utc();
        page.refresh_at(eve);
        assert_eq!(page.remaining(), Countdown { days: 0, hours: 1, minutes: 0, seconds: 0 });
        assert!(page.celebration_ready());
        assert_eq!(page.handle_key(KeyCode::Enter), PageAction::Continue);
    }

    #[tokio::test]
    async fn test_birthday_reveals_in_order() {
        let mut h = Harness::new();
        let mut page = BirthdayPage::mount(&h.ctx());
        assert_eq!(page.confetti().len(), CONFETTI_COUNT);
        assert!(!page.message_visible());
        assert_eq!(page.handle_key(KeyCode::Enter), PageAction::Stay);

        page.on_timer(PageTimer::RevealMessage);
        assert!(page.message_visible());
        assert_eq!(page.handle_key(KeyCode::Enter), PageAction::Stay);

        page.on_timer(PageTimer::RevealButton);
        assert!(page.button_visible());
        assert_eq!(page.handle_key(KeyCode::Enter), PageAction::Continue);
    }

    #[test]
    fn test_confetti_is_deterministic_and_in_range() {
        let a = generate_confetti(7, 50);
        let b = generate_confetti(7, 50);
        assert_eq!(a, b);
        assert_ne!(a, generate_confetti(8, 50));

        for piece in &a {
            assert!((0.0..1.0).contains(&piece.column));
            assert!((0.5..1.5).contains(&piece.speed));
            assert!(piece.color < CONFETTI_COLORS);
            for frame in [0, 1, 100, 10_000] {
                assert!((0.0..1.0).contains(&piece.height_at(frame)));
            }
        }
    }

    #[tokio::test]
    async fn test_message_paragraphs_then_button() {
        let mut h = Harness::new();
        let mut page = MessagePage::mount(&h.ctx());
        assert_eq!(page.visible_paragraphs().len(), 1);

        for expected in 2..=PERSONAL_MESSAGE.len() {
            page.on_timer(PageTimer::NextParagraph);
            assert_eq!(page.visible_paragraphs().len(), expected);
            assert!(!page.button_visible());
        }

        page.on_timer(PageTimer::NextParagraph);
        assert!(page.button_visible());
        assert!(page.interval.is_none());
        assert_eq!(page.visible_paragraphs().len(), PERSONAL_MESSAGE.len());
        assert_eq!(page.handle_key(KeyCode::Enter), PageAction::Continue);
    }

    #[tokio::test]
    async fn test_wishes_reveal_once_and_complete() {
        let mut h = Harness::new();
        let ctx = h.ctx();
        let mut page = WishesPage::mount();

        assert!(page.reveal(0, &ctx));
        assert!(!page.reveal(0, &ctx));
        assert!(!page.reveal(99, &ctx));

        for i in 1..WISHES.len() - 1 {
            page.reveal(i, &ctx);
        }
        assert!(page.complete_timer.is_none());
        // Enter on an unrevealed selection reveals instead of continuing
        page.selected = WISHES.len() - 1;
        assert_eq!(page.handle_key(KeyCode::Enter, &ctx), PageAction::Stay);
        assert!(page.is_revealed(WISHES.len() - 1));
        assert!(page.complete_timer.is_some());
        assert!(!page.all_revealed());

        page.on_timer(PageTimer::WishesComplete);
        assert!(page.all_revealed());
        assert_eq!(page.handle_key(KeyCode::Enter, &ctx), PageAction::Continue);
    }

    #[tokio::test]
    async fn test_wishes_selection_moves_on_grid() {
        let mut h = Harness::new();
        let ctx = h.ctx();
        let mut page = WishesPage::mount();

        page.handle_key(KeyCode::Left, &ctx);
        assert_eq!(page.selected(), WISHES.len() - 1);
        page.handle_key(KeyCode::Right, &ctx);
        assert_eq!(page.selected(), 0);
        page.handle_key(KeyCode::Down, &ctx);
        assert_eq!(page.selected(), WISH_COLUMNS);
        page.handle_key(KeyCode::Down, &ctx);
        assert_eq!(page.selected(), WISH_COLUMNS);
        page.handle_key(KeyCode::Up, &ctx);
        assert_eq!(page.selected(), 0);

        page.handle_key(KeyCode::Char('5'), &ctx);
        assert_eq!(page.selected(), 4);
        assert!(page.is_revealed(4));
        page.handle_key(KeyCode::Char('9'), &ctx);
        assert_eq!(page.selected(), 4);
    }

    #[tokio::test]
    async fn test_gallery_navigation_wraps() {
        let mut h = Harness::new();
        let ctx = h.ctx();
        let mut page = GalleryPage::mount(&ctx);
        assert!(page.playing());
        assert!(page.controls_visible());

        page.prev(&ctx);
        assert_eq!(page.current(), PHOTOS.len() - 1);
        page.next(&ctx);
        assert_eq!(page.current(), 0);
        page.jump(3, &ctx);
        assert_eq!(page.current(), 3);
        page.jump(42, &ctx);
        assert_eq!(page.current(), 3);
    }

    #[tokio::test]
    async fn test_gallery_autoplay_respects_pause() {
        let mut h = Harness::new();
        let ctx = h.ctx();
        let mut page = GalleryPage::mount(&ctx);

        page.on_timer(PageTimer::SlideshowAdvance, &ctx);
        assert_eq!(page.current(), 1);

        page.toggle_play(&ctx);
        assert!(!page.playing());
        assert!(page.slideshow.is_none());
        page.on_timer(PageTimer::SlideshowAdvance, &ctx);
        assert_eq!(page.current(), 1);

        page.handle_key(KeyCode::Char(' '), &ctx);
        assert!(page.playing());
        assert!(page.slideshow.is_some());
    }

    #[tokio::test]
    async fn test_gallery_controls_hide_and_return() {
        let mut h = Harness::new();
        let ctx = h.ctx();
        let mut page = GalleryPage::mount(&ctx);

        page.on_timer(PageTimer::HideControls, &ctx);
        assert!(!page.controls_visible());

        page.handle_key(KeyCode::Char('x'), &ctx);
        assert!(page.controls_visible());
        assert!(page.hide_controls.is_some());
    }

    #[tokio::test]
    async fn test_page_stage_mapping() {
        let mut h = Harness::new();
        let ctx = h.ctx();
        for stage in Stage::ALL {
            assert_eq!(Page::mount(stage, &ctx).stage(), stage);
        }
    }
}
