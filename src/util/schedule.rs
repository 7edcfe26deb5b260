//! Deferred one-shot callbacks.
//!
//! `TimerScheduler` arms a browser `setTimeout` through `gloo-timers` and
//! forgets the handle, so the callback is never cancelled. Off the browser it
//! drops the task. `QueuedScheduler` holds tasks until the owner runs them.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Task);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TimerScheduler;

impl Scheduler for TimerScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        #[cfg(feature = "hydrate")]
        {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            gloo_timers::callback::Timeout::new(millis, task).forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::debug!("no browser timer; dropping task deferred by {delay:?}");
            drop(task);
        }
    }
}

/// Collects scheduled tasks. Clones share the same queue.
#[derive(Clone, Default)]
pub struct QueuedScheduler {
    pending: Rc<RefCell<Vec<(Duration, Task)>>>,
}

impl QueuedScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays of the tasks still waiting, in scheduling order.
    pub fn pending_delays(&self) -> Vec<Duration> {
        self.pending.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    /// Run every pending task in scheduling order. Returns how many ran.
    ///
    /// Tasks scheduled while running wait for the next call.
    pub fn run_pending(&self) -> usize {
        let tasks = std::mem::take(&mut *self.pending.borrow_mut());
        let count = tasks.len();
        for (_, task) in tasks {
            task();
        }
        count
    }
}

impl Scheduler for QueuedScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        self.pending.borrow_mut().push((delay, task));
    }
}
