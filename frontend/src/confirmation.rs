//! Timed "copied!" confirmation.
//!
//! A trigger hides the primary affordance, shows the confirmation after a
//! short delay, fills a progress bar over the full duration and then plays
//! the exit before settling back to idle. The phase is a pure function of
//! the time since the last trigger; the driver owns the one ticking timer.

use crate::timing::{Clock, Scheduler};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Action fired, the primary affordance is blurring out.
    ActionPerformed,
    ConfirmationVisible,
    /// Duration over, the confirmation is on its way out.
    Reverting,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfirmationTimings {
    pub reveal_delay_ms: f64,
    pub duration_ms: f64,
    pub revert_delay_ms: f64,
    pub tick_ms: u32,
}

impl Default for ConfirmationTimings {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 300.0,
            duration_ms: 2000.0,
            revert_delay_ms: 300.0,
            tick_ms: 16,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimedConfirmation {
    timings: ConfirmationTimings,
    phase: Phase,
    started_at: f64,
    elapsed_ms: f64,
}

impl TimedConfirmation {
    pub fn new(timings: ConfirmationTimings) -> Self {
        Self {
            timings,
            phase: Phase::Idle,
            started_at: 0.0,
            elapsed_ms: 0.0,
        }
    }

    /// Starts a cycle, or restarts the running one from zero.
    pub fn trigger(&mut self, now: f64) {
        self.phase = Phase::ActionPerformed;
        self.started_at = now;
        self.elapsed_ms = 0.0;
    }

    /// Advances to `now`. Returns whether the cycle is still running.
    pub fn tick(&mut self, now: f64) -> bool {
        if self.phase == Phase::Idle {
            return false;
        }

        let ConfirmationTimings {
            reveal_delay_ms,
            duration_ms,
            revert_delay_ms,
            ..
        } = self.timings;
        let elapsed = (now - self.started_at).max(0.0);

        if elapsed >= duration_ms + revert_delay_ms {
            self.phase = Phase::Idle;
            self.elapsed_ms = 0.0;
            return false;
        }

        self.elapsed_ms = elapsed.min(duration_ms);
        self.phase = if elapsed >= duration_ms {
            Phase::Reverting
        } else if elapsed >= reveal_delay_ms {
            Phase::ConfirmationVisible
        } else {
            Phase::ActionPerformed
        };
        true
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[cfg(test)]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// True from trigger until the cycle is fully over.
    pub fn is_confirming(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn is_visible(&self) -> bool {
        self.phase == Phase::ConfirmationVisible
    }

    /// Percent of the duration elapsed, `0..=100`.
    pub fn progress(&self) -> f64 {
        if self.timings.duration_ms <= 0.0 {
            return if self.is_confirming() { 100.0 } else { 0.0 };
        }
        (self.elapsed_ms / self.timings.duration_ms * 100.0).min(100.0)
    }
}

/// A [`TimedConfirmation`] plus the single timer that drives it.
pub struct ConfirmationDriver<C: Clock, S: Scheduler> {
    machine: TimedConfirmation,
    clock: C,
    scheduler: S,
    ticker: Option<S::Handle>,
}

impl<C: Clock, S: Scheduler> ConfirmationDriver<C, S> {
    pub fn new(timings: ConfirmationTimings, clock: C, scheduler: S) -> Self {
        Self {
            machine: TimedConfirmation::new(timings),
            clock,
            scheduler,
            ticker: None,
        }
    }

    /// Restarts the cycle. `on_tick` is called every tick period and should
    /// lead back to [`ConfirmationDriver::tick`].
    pub fn trigger(&mut self, on_tick: impl Fn() + 'static) {
        // cancel before arming so two timers never overlap
        self.ticker = None;
        self.machine.trigger(self.clock.now_ms());
        let period = self.machine.timings.tick_ms;
        self.ticker = Some(self.scheduler.every(period, Box::new(on_tick)));
    }

    /// Returns whether the cycle is still running. The timer is released as
    /// soon as it is not.
    pub fn tick(&mut self) -> bool {
        let running = self.machine.tick(self.clock.now_ms());
        if !running {
            self.ticker = None;
        }
        running
    }

    pub fn state(&self) -> &TimedConfirmation {
        &self.machine
    }

    #[cfg(test)]
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeClock(Rc<Cell<f64>>);

    impl FakeClock {
        fn advance(&self, ms: f64) {
            self.0.set(self.0.get() + ms);
        }
    }

    impl Clock for FakeClock {
        fn now_ms(&self) -> f64 {
            self.0.get()
        }
    }

    #[derive(Clone, Default)]
    struct FakeScheduler {
        live: Rc<Cell<usize>>,
        started: Rc<Cell<usize>>,
    }

    struct FakeHandle(Rc<Cell<usize>>);

    impl Drop for FakeHandle {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    impl Scheduler for FakeScheduler {
        type Handle = FakeHandle;

        fn every(&self, period_ms: u32, _tick: Box<dyn Fn()>) -> FakeHandle {
            assert_eq!(period_ms, 16);
            self.live.set(self.live.get() + 1);
            self.started.set(self.started.get() + 1);
            FakeHandle(self.live.clone())
        }
    }

    fn driver() -> (ConfirmationDriver<FakeClock, FakeScheduler>, FakeClock, FakeScheduler) {
        let clock = FakeClock::default();
        let scheduler = FakeScheduler::default();
        let driver = ConfirmationDriver::new(
            ConfirmationTimings::default(),
            clock.clone(),
            scheduler.clone(),
        );
        (driver, clock, scheduler)
    }

    // Ticks every 16ms for `ms`, counting how often the bar lands on 100%.
    fn run_for(
        driver: &mut ConfirmationDriver<FakeClock, FakeScheduler>,
        clock: &FakeClock,
        ms: f64,
    ) -> usize {
        let mut full = 0;
        let mut last = driver.state().progress();
        let mut waited = 0.0;
        while waited < ms {
            clock.advance(16.0);
            waited += 16.0;
            if driver.is_ticking() {
                driver.tick();
            }
            let progress = driver.state().progress();
            if progress == 100.0 && last < 100.0 {
                full += 1;
            }
            last = progress;
        }
        full
    }

    #[test]
    fn walks_through_every_phase() {
        let mut machine = TimedConfirmation::new(ConfirmationTimings::default());
        assert_eq!(machine.phase(), Phase::Idle);

        machine.trigger(1000.0);
        assert_eq!(machine.phase(), Phase::ActionPerformed);
        assert!(!machine.is_visible());

        assert!(machine.tick(1299.0));
        assert_eq!(machine.phase(), Phase::ActionPerformed);

        assert!(machine.tick(1300.0));
        assert_eq!(machine.phase(), Phase::ConfirmationVisible);
        assert!(machine.is_visible());

        assert!(machine.tick(2000.0));
        assert_eq!(machine.progress(), 50.0);

        assert!(machine.tick(3000.0));
        assert_eq!(machine.phase(), Phase::Reverting);
        assert!(!machine.is_visible());
        assert_eq!(machine.progress(), 100.0);

        assert!(!machine.tick(3300.0));
        assert_eq!(machine.phase(), Phase::Idle);
    }

    #[test]
    fn full_cycle_resets_to_idle() {
        let mut machine = TimedConfirmation::new(ConfirmationTimings::default());
        machine.trigger(0.0);
        machine.tick(1500.0);
        machine.tick(5000.0);

        assert_eq!(machine.phase(), Phase::Idle);
        assert_eq!(machine.elapsed_ms(), 0.0);
        assert_eq!(machine.progress(), 0.0);
        assert!(!machine.is_visible());
        assert!(!machine.is_confirming());
    }

    #[test]
    fn retrigger_restarts_elapsed_time() {
        let mut machine = TimedConfirmation::new(ConfirmationTimings::default());
        machine.trigger(0.0);
        machine.tick(1200.0);
        assert_eq!(machine.phase(), Phase::ConfirmationVisible);

        machine.trigger(1200.0);
        assert_eq!(machine.elapsed_ms(), 0.0);
        assert_eq!(machine.phase(), Phase::ActionPerformed);

        machine.tick(2400.0);
        assert_eq!(machine.elapsed_ms(), 1200.0);
    }

    #[test]
    fn progress_only_grows_within_a_cycle() {
        let mut machine = TimedConfirmation::new(ConfirmationTimings::default());
        machine.trigger(0.0);
        let mut last = 0.0;
        let mut now = 0.0;
        while machine.tick(now) {
            if machine.phase() != Phase::Idle {
                assert!(machine.progress() >= last);
                last = machine.progress();
            }
            now += 16.0;
        }
        assert_eq!(last, 100.0);
    }

    #[test]
    fn idle_tick_is_inert() {
        let mut machine = TimedConfirmation::new(ConfirmationTimings::default());
        assert!(!machine.tick(10_000.0));
        assert_eq!(machine.phase(), Phase::Idle);
        assert_eq!(machine.progress(), 0.0);
    }

    #[test]
    fn driver_returns_to_idle_and_releases_timer() {
        let (mut driver, clock, scheduler) = driver();
        driver.trigger(|| {});
        assert_eq!(scheduler.live.get(), 1);

        let full = run_for(&mut driver, &clock, 2400.0);

        assert_eq!(full, 1);
        assert_eq!(driver.state().phase(), Phase::Idle);
        assert_eq!(driver.state().elapsed_ms(), 0.0);
        assert!(!driver.state().is_visible());
        assert_eq!(scheduler.live.get(), 0);
    }

    #[test]
    fn rapid_triggers_keep_a_single_timer() {
        let (mut driver, clock, scheduler) = driver();
        driver.trigger(|| {});
        clock.advance(40.0);
        driver.trigger(|| {});
        assert_eq!(scheduler.started.get(), 2);
        assert_eq!(scheduler.live.get(), 1);

        let full = run_for(&mut driver, &clock, 2400.0);
        assert_eq!(full, 1);
        assert_eq!(scheduler.live.get(), 0);
    }

    #[test]
    fn retrigger_while_visible_plays_one_more_cycle() {
        let (mut driver, clock, scheduler) = driver();
        driver.trigger(|| {});
        assert_eq!(run_for(&mut driver, &clock, 1000.0), 0);
        assert!(driver.state().is_visible());

        driver.trigger(|| {});
        assert_eq!(scheduler.live.get(), 1);
        assert_eq!(run_for(&mut driver, &clock, 2400.0), 1);
        assert_eq!(driver.state().phase(), Phase::Idle);
    }

    #[test]
    fn dropping_driver_cancels_timer() {
        let (mut driver, _clock, scheduler) = driver();
        driver.trigger(|| {});
        assert_eq!(scheduler.live.get(), 1);
        drop(driver);
        assert_eq!(scheduler.live.get(), 0);
    }
}
