// clock.rs - Repeating simulation timer

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

pub const MIN_INTERVAL_MS: u64 = 50;
pub const MAX_INTERVAL_MS: u64 = 3000;
pub const DEFAULT_INTERVAL_MS: u64 = 200;

pub type Waker = Arc<dyn Fn() + Send + Sync>;

#[inline]
pub fn clamp_interval(ms: u64) -> u64 {
    ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS)
}

/// Owns the single repeating timer that drives generations.
///
/// The timer runs as a task on the given tokio runtime and only bumps a
/// shared tick counter; whoever owns the grid collects it with [`take_ticks`]
/// on its own thread. At most one timer task exists at a time, and missed
/// ticks only raise the counter, so nothing queues up while nobody reads it.
///
/// [`take_ticks`]: SimulationClock::take_ticks
pub struct SimulationClock {
    runtime: Handle,
    interval_ms: u64,
    timer: Option<JoinHandle<()>>,
    pending: Arc<AtomicUsize>,
    waker: Option<Waker>,
}

impl SimulationClock {
    /// Created inactive.
    pub fn new(runtime: Handle, interval_ms: u64) -> Self {
        Self {
            runtime,
            interval_ms: clamp_interval(interval_ms),
            timer: None,
            pending: Arc::new(AtomicUsize::new(0)),
            waker: None,
        }
    }

    /// Called from the timer task after each tick is posted, e.g. to wake a
    /// GUI event loop. Takes effect on the next `arm`.
    pub fn set_waker(&mut self, waker: impl Fn() + Send + Sync + 'static) {
        self.waker = Some(Arc::new(waker));
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.timer.is_some()
    }

    #[inline]
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Clamps and stores the interval. An active clock is re-armed with the
    /// new period and stays active. Returns the stored value.
    pub fn set_interval(&mut self, ms: u64) -> u64 {
        self.interval_ms = clamp_interval(ms);
        log::debug!("Tick interval set to {} ms", self.interval_ms);
        if self.is_active() {
            self.arm();
        }
        self.interval_ms
    }

    /// Cancels any pending timer and starts a new one with the current period.
    /// The first tick fires one full period after arming.
    pub fn arm(&mut self) {
        self.cancel_timer();

        let period = self.interval();
        let pending = Arc::clone(&self.pending);
        let waker = self.waker.clone();

        self.timer = Some(self.runtime.spawn(async move {
            let mut ticks = time::interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                pending.fetch_add(1, Ordering::AcqRel);
                if let Some(waker) = &waker {
                    waker();
                }
            }
        }));
    }

    /// Cancels the timer and forgets ticks that were not yet taken.
    pub fn disarm(&mut self) {
        self.cancel_timer();
        self.pending.store(0, Ordering::Release);
    }

    /// Number of ticks fired since the last call.
    pub fn take_ticks(&mut self) -> usize {
        self.pending.swap(0, Ordering::AcqRel)
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for SimulationClock {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_is_clamped() {
        assert_eq!(clamp_interval(10), MIN_INTERVAL_MS);
        assert_eq!(clamp_interval(10_000), MAX_INTERVAL_MS);
        assert_eq!(clamp_interval(750), 750);
    }

    #[tokio::test]
    async fn new_clock_is_inactive_with_clamped_interval() {
        let clock = SimulationClock::new(Handle::current(), 1);
        assert!(!clock.is_active());
        assert_eq!(clock.interval_ms(), MIN_INTERVAL_MS);
    }

    #[tokio::test(start_paused = true)]
    async fn armed_clock_ticks_once_per_period() {
        let mut clock = SimulationClock::new(Handle::current(), 50);
        clock.arm();
        time::sleep(Duration::from_millis(120)).await;
        assert_eq!(clock.take_ticks(), 2);
        assert_eq!(clock.take_ticks(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn disarmed_clock_stops_ticking() {
        let mut clock = SimulationClock::new(Handle::current(), 50);
        clock.arm();
        time::sleep(Duration::from_millis(60)).await;
        clock.disarm();
        assert!(!clock.is_active());
        time::sleep(Duration::from_millis(500)).await;
        assert_eq!(clock.take_ticks(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn changing_interval_rearms_active_clock() {
        let mut clock = SimulationClock::new(Handle::current(), 1000);
        clock.arm();
        time::sleep(Duration::from_millis(10)).await;
        assert_eq!(clock.set_interval(100), 100);
        assert!(clock.is_active());
        // Runs past t=1000, where the cancelled 1000 ms timer would have fired.
        time::sleep(Duration::from_millis(1050)).await;
        assert_eq!(clock.take_ticks(), 10);
    }

    #[tokio::test]
    async fn changing_interval_leaves_idle_clock_idle() {
        let mut clock = SimulationClock::new(Handle::current(), 200);
        assert_eq!(clock.set_interval(10_000), MAX_INTERVAL_MS);
        assert!(!clock.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn waker_runs_per_tick() {
        let woken = Arc::new(AtomicUsize::new(0));
        let mut clock = SimulationClock::new(Handle::current(), 100);
        let counter = Arc::clone(&woken);
        clock.set_waker(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        clock.arm();
        time::sleep(Duration::from_millis(250)).await;
        assert_eq!(woken.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn unread_ticks_collapse_into_a_count() {
        let mut clock = SimulationClock::new(Handle::current(), 50);
        clock.arm();
        time::sleep(Duration::from_millis(60_010)).await;
        assert_eq!(clock.take_ticks(), 1200);
        assert_eq!(clock.take_ticks(), 0);
    }
}
