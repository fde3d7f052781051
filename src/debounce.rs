//! Cancel-and-reschedule debouncing for search input
//!
//! The terminal loop is poll driven, so instead of a timer callback the
//! debouncer is polled: each [`Debouncer::push`] cancels whatever was
//! pending and moves the deadline, and [`Debouncer::poll`] hands back the
//! settled value once the quiet period has elapsed.

use std::time::{Duration, Instant};

/// Default quiet period before a query is applied
pub const DEFAULT_QUIET: Duration = Duration::from_millis(300);

/// Source of the current time
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Debug)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Holds the latest input until it has been quiet for `quiet`
#[derive(Debug)]
pub struct Debouncer<T, C: Clock = SystemClock> {
    quiet: Duration,
    clock: C,
    pending: Option<Pending<T>>,
}

impl<T, C: Clock> Debouncer<T, C> {
    pub fn with_clock(quiet: Duration, clock: C) -> Self {
        Self {
            quiet,
            clock,
            pending: None,
        }
    }

    /// Replace any pending value and restart the quiet period
    pub fn push(&mut self, value: T) {
        let deadline = self.clock.now() + self.quiet;
        self.pending = Some(Pending { value, deadline });
    }

    /// Take the pending value if its quiet period has elapsed
    pub fn poll(&mut self) -> Option<T> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|p| self.clock.now() >= p.deadline);
        if due {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    /// Drop the pending value without firing
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
