//! Delayed Task Scheduling
//!
//! A cancellable one-shot delay. The slideshow cancels and re-arms it on every
//! transition.

use std::time::Duration;

use gloo_timers::callback::Timeout;

/// Runs a task once after a delay, unless cancelled first
pub trait Scheduler {
    /// Token for a pending task
    type Handle;

    /// Arm `task` to run after `delay`
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;

    /// Drop a pending task. Cancelling a task that already ran is harmless.
    fn cancel(&self, handle: Self::Handle);
}

/// Longest delay browser timers accept; larger values wrap to zero and fire
/// immediately
pub const MAX_TIMER_MILLIS: u32 = i32::MAX as u32;

/// Milliseconds for a browser timer, clamped to [`MAX_TIMER_MILLIS`]
pub fn timer_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).map_or(MAX_TIMER_MILLIS, |ms| ms.min(MAX_TIMER_MILLIS))
}

/// Browser `setTimeout` scheduler backed by gloo-timers
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(timer_millis(delay), task)
    }

    fn cancel(&self, handle: Timeout) {
        // The returned closure is dropped here; wasm-bindgen defers the free
        // if it is the one currently executing.
        drop(handle.cancel());
    }
}
