//! Time sources and timers behind small traits so the timed widgets can be
//! driven by a fake clock in tests.

use gloo_timers::callback::{Interval, Timeout};

pub trait Clock {
    fn now_ms(&self) -> f64;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        web_sys::js_sys::Date::now()
    }
}

/// Starts a repeating timer. Dropping the handle must cancel it.
pub trait Scheduler {
    type Handle;

    fn every(&self, period_ms: u32, tick: Box<dyn Fn()>) -> Self::Handle;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    type Handle = Interval;

    fn every(&self, period_ms: u32, tick: Box<dyn Fn()>) -> Interval {
        Interval::new(period_ms, move || tick())
    }
}

/// Runs `fire` once after `delay_ms`. Dropping the handle must cancel it.
pub trait Delay {
    type Handle;

    fn after(&self, delay_ms: u32, fire: Box<dyn FnOnce()>) -> Self::Handle;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GlooDelay;

impl Delay for GlooDelay {
    type Handle = Timeout;

    fn after(&self, delay_ms: u32, fire: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, move || fire())
    }
}
