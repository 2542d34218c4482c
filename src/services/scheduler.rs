//! Presentation timers - fire-and-forget reveals, off the state machine
//!
//! Pages ask for a timer and keep the returned handle. Firing only posts a
//! `TimerFired` into the UI loop's channel; the loop hands it back to the
//! page that is mounted. Dropping a handle aborts its task, so a page that
//! is torn down takes its timers with it. Each mount gets a fresh epoch and
//! the loop discards anything still queued from an older one.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::trace;

/// What a timer means to the page that scheduled it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTimer {
    HideHint,
    GateProceed,
    CountdownRefresh,
    RevealMessage,
    RevealButton,
    NextParagraph,
    WishesComplete,
    SlideshowAdvance,
    HideControls,
}

impl PageTimer {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageTimer::HideHint => "hide_hint",
            PageTimer::GateProceed => "gate_proceed",
            PageTimer::CountdownRefresh => "countdown_refresh",
            PageTimer::RevealMessage => "reveal_message",
            PageTimer::RevealButton => "reveal_button",
            PageTimer::NextParagraph => "next_paragraph",
            PageTimer::WishesComplete => "wishes_complete",
            PageTimer::SlideshowAdvance => "slideshow_advance",
            PageTimer::HideControls => "hide_controls",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFired {
    pub epoch: u64,
    pub timer: PageTimer,
}

/// Cancellable timer. Aborts the underlying task on drop.
#[derive(Debug)]
pub struct TimerHandle {
    timer: PageTimer,
    task: JoinHandle<()>,
}

impl TimerHandle {
    pub fn timer(&self) -> PageTimer {
        self.timer
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawns timers that report back into the UI loop
#[derive(Debug, Clone)]
pub struct Scheduler {
    tx: mpsc::UnboundedSender<TimerFired>,
    epoch: u64,
}

impl Scheduler {
    /// Create a scheduler and the receiver the UI loop drains
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<TimerFired>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx, epoch: 0 }, rx)
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// A scheduler whose timers are tagged with `epoch`
    pub fn with_epoch(&self, epoch: u64) -> Self {
        Self { tx: self.tx.clone(), epoch }
    }

    /// Fire once after `delay`
    pub fn once(&self, delay: Duration, timer: PageTimer) -> TimerHandle {
        let tx = self.tx.clone();
        let fired = TimerFired { epoch: self.epoch, timer };
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            trace!(timer = %timer.as_str(), epoch = %fired.epoch, "timer_fired");
            let _ = tx.send(fired);
        });
        TimerHandle { timer, task }
    }

    /// Fire every `period`, first after one full period
    pub fn every(&self, period: Duration, timer: PageTimer) -> TimerHandle {
        let tx = self.tx.clone();
        let fired = TimerFired { epoch: self.epoch, timer };
        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(fired).is_err() {
                    break;
                }
            }
        });
        TimerHandle { timer, task }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    fn millis(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    #[tokio::test]
    async fn test_once_fires_with_epoch() {
        let (scheduler, mut rx) = Scheduler::channel();
        let scheduler = scheduler.with_epoch(7);
        let _handle = scheduler.once(millis(10), PageTimer::HideHint);

        let fired = timeout(millis(1000), rx.recv()).await.unwrap().unwrap();
        assert_eq!(fired, TimerFired { epoch: 7, timer: PageTimer::HideHint });
    }

    #[tokio::test]
    async fn test_dropped_handle_never_fires() {
        let (scheduler, mut rx) = Scheduler::channel();
        let handle = scheduler.once(millis(30), PageTimer::RevealButton);
        assert_eq!(handle.timer(), PageTimer::RevealButton);
        handle.cancel();

        assert!(timeout(millis(150), rx.recv()).await.is_err());
    }

    #[tokio::test]
    async fn test_every_repeats_until_dropped() {
        let (scheduler, mut rx) = Scheduler::channel();
        let handle = scheduler.every(millis(10), PageTimer::SlideshowAdvance);

        for _ in 0..3 {
            let fired = timeout(millis(1000), rx.recv()).await.unwrap().unwrap();
            assert_eq!(fired.timer, PageTimer::SlideshowAdvance);
        }

        drop(handle);
        // Let the abort land, then drain anything sent before it
        tokio::time::sleep(millis(30)).await;
        while rx.try_recv().is_ok() {}
        assert!(timeout(millis(100), rx.recv()).await.is_err());
    }

    #[tokio::test]
    async fn test_once_task_finishes() {
        let (scheduler, mut rx) = Scheduler::channel();
        let handle = scheduler.once(millis(5), PageTimer::GateProceed);
        timeout(millis(1000), rx.recv()).await.unwrap().unwrap();
        tokio::time::sleep(millis(20)).await;
        assert!(handle.is_finished());
    }
}
