// SDRLog - app/refresh.rs
//
// Auto-refresh timer: a single cancelable periodic task that asks the UI
// thread to re-read the current log file.
//
// Architecture:
//   - `RefreshTimer` lives on the UI thread; `run_timer` runs on a background
//     thread that sleeps for the interval and then sends a `RefreshTick`.
//   - An `Arc<AtomicBool>` cancel flag allows the UI to stop the timer.
//   - The timer never touches log state. The UI thread drains ticks each
//     frame and performs the refresh itself, so refreshes stay serialized
//     with every other user action.
//
// At most one timer is active: `start` cancels the previous one first, and
// `stop` drops the receiver so ticks already queued by a cancelled timer are
// discarded unread.

use crate::util::constants::REFRESH_CANCEL_CHECK_INTERVAL_MS;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::time::Duration;

/// One elapsed interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTick {
    /// Generation of the timer that produced the tick.
    pub generation: u64,
}

/// Single-slot handle for the periodic refresh task.
#[derive(Debug, Default)]
pub struct RefreshTimer {
    /// Channel receiver for the UI to poll ticks.
    tick_rx: Option<mpsc::Receiver<RefreshTick>>,
    /// Cancel flag shared with the background thread.
    cancel_flag: Option<Arc<AtomicBool>>,
    /// Incremented on every start; identifies the live timer.
    generation: u64,
}

impl RefreshTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start ticking every `interval`.
    ///
    /// Any running timer is cancelled before the new one is armed.
    pub fn start(&mut self, interval: Duration) {
        self.stop();

        let (tx, rx) = mpsc::channel();
        let cancel = Arc::new(AtomicBool::new(false));
        self.generation += 1;

        self.tick_rx = Some(rx);
        self.cancel_flag = Some(Arc::clone(&cancel));

        let generation = self.generation;
        std::thread::spawn(move || {
            run_timer(interval, generation, tx, cancel);
        });

        tracing::info!(
            interval_ms = interval.as_millis() as u64,
            generation,
            "Auto-refresh started"
        );
    }

    /// Cancel the running timer, if any. No tick is delivered afterwards.
    pub fn stop(&mut self) {
        if let Some(flag) = self.cancel_flag.take() {
            flag.store(true, Ordering::SeqCst);
            tracing::info!(generation = self.generation, "Auto-refresh stopped");
        }
        self.tick_rx = None;
    }

    /// Returns `true` while a timer is armed.
    pub fn is_active(&self) -> bool {
        self.cancel_flag.is_some()
    }

    /// Drain pending ticks without blocking and return how many arrived.
    ///
    /// Ticks from an earlier generation cannot appear here because each
    /// start replaces the receiver.
    pub fn poll_ticks(&self) -> usize {
        let Some(rx) = &self.tick_rx else {
            return 0;
        };
        let mut count = 0;
        while let Ok(tick) = rx.try_recv() {
            debug_assert_eq!(tick.generation, self.generation);
            count += 1;
        }
        count
    }
}

impl Drop for RefreshTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Background loop: sleep for `interval` in cancel-check slices, then tick.
fn run_timer(
    interval: Duration,
    generation: u64,
    tx: mpsc::Sender<RefreshTick>,
    cancel: Arc<AtomicBool>,
) {
    let check = Duration::from_millis(REFRESH_CANCEL_CHECK_INTERVAL_MS).min(interval);
    let check = check.max(Duration::from_millis(1));

    loop {
        let mut slept = Duration::ZERO;
        while slept < interval {
            let step = check.min(interval - slept);
            std::thread::sleep(step);
            slept += step;
            if cancel.load(Ordering::SeqCst) {
                tracing::debug!(generation, "Refresh timer exiting");
                return;
            }
        }

        if tx.send(RefreshTick { generation }).is_err() {
            // Receiver dropped: the timer was replaced or stopped.
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    /// Poll until at least one tick arrives or `timeout` passes.
    fn wait_for_ticks(timer: &RefreshTimer, timeout: Duration) -> usize {
        let deadline = Instant::now() + timeout;
        let mut total = 0;
        while Instant::now() < deadline {
            total += timer.poll_ticks();
            if total > 0 {
                break;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        total
    }

    #[test]
    fn test_inactive_timer_yields_no_ticks() {
        let timer = RefreshTimer::new();
        assert!(!timer.is_active());
        assert_eq!(timer.poll_ticks(), 0);
    }

    #[test]
    fn test_ticks_arrive_while_active() {
        let mut timer = RefreshTimer::new();
        timer.start(Duration::from_millis(10));
        assert!(timer.is_active());
        assert!(wait_for_ticks(&timer, Duration::from_secs(5)) > 0);
        timer.stop();
    }

    #[test]
    fn test_restart_cancels_previous_timer() {
        let mut timer = RefreshTimer::new();
        timer.start(Duration::from_millis(10));
        let first_flag = Arc::clone(timer.cancel_flag.as_ref().unwrap());
        let first_generation = timer.generation;

        timer.start(Duration::from_millis(10));
        assert!(first_flag.load(Ordering::SeqCst), "old timer must be cancelled");
        assert_eq!(timer.generation, first_generation + 1);
        assert!(timer.is_active());

        // Only the live generation can deliver ticks.
        assert!(wait_for_ticks(&timer, Duration::from_secs(5)) > 0);
        timer.stop();
    }

    #[test]
    fn test_stop_delivers_no_further_ticks() {
        let mut timer = RefreshTimer::new();
        timer.start(Duration::from_millis(5));
        std::thread::sleep(Duration::from_millis(50));
        timer.stop();
        assert!(!timer.is_active());
        // Ticks queued before stop are discarded with the receiver.
        assert_eq!(timer.poll_ticks(), 0);
        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(timer.poll_ticks(), 0);
    }

    #[test]
    fn test_stop_when_idle_is_noop() {
        let mut timer = RefreshTimer::new();
        timer.stop();
        timer.stop();
        assert!(!timer.is_active());
    }
}
