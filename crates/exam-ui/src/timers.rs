//! Deferred task scheduling
//!
//! Behaviors hand deferred work to a [`Scheduler`]. In the browser this is a
//! `setTimeout` via gloo-timers; headless runs use [`ManualScheduler`], a
//! virtual clock advanced explicitly.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// A deferred action; it owns everything it touches
pub type Task = Box<dyn FnOnce()>;

/// Runs tasks after a delay on the page's main thread
///
/// There is no cancellation: a scheduled task always runs.
pub trait Scheduler: Clone + 'static {
    /// Run `task` once `delay_ms` milliseconds have elapsed
    fn schedule(&self, delay_ms: u32, task: Task);
}

/// `setTimeout`-backed scheduler
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        // Fire-and-forget: dropping the handle would clear the timeout
        Timeout::new(delay_ms, task).forget();
    }
}

struct Pending {
    due: u64,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct Clock {
    now: u64,
    next_seq: u64,
    queue: Vec<Pending>,
}

impl Clock {
    /// Take the earliest task due at or before `limit`, ties in scheduling order
    fn pop_due(&mut self, limit: u64) -> Option<Pending> {
        let index = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= limit)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;
        Some(self.queue.swap_remove(index))
    }
}

/// Virtual-clock scheduler
///
/// Time only moves when [`ManualScheduler::advance`] is called. Tasks scheduled
/// by a running task are picked up in the same advance if they fall due.
/// Clones share the same clock.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let clock = self.clock.borrow();
        f.debug_struct("ManualScheduler")
            .field("now", &clock.now)
            .field("pending", &clock.queue.len())
            .finish()
    }
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds elapsed on the virtual clock
    #[must_use]
    pub fn now(&self) -> u64 {
        self.clock.borrow().now
    }

    /// Number of tasks not yet run
    #[must_use]
    pub fn pending(&self) -> usize {
        self.clock.borrow().queue.len()
    }

    /// Move the clock forward, running every task that falls due
    ///
    /// Returns the number of tasks run.
    pub fn advance(&self, ms: u64) -> usize {
        let target = self.now().saturating_add(ms);
        let mut ran = 0_usize;

        loop {
            // The borrow must end before the task runs; tasks may schedule more work
            let next = {
                let mut clock = self.clock.borrow_mut();
                let next = clock.pop_due(target);
                if let Some(pending) = &next {
                    clock.now = pending.due;
                }
                next
            };
            let Some(pending) = next else { break };
            (pending.task)();
            ran = ran.saturating_add(1);
        }

        self.clock.borrow_mut().now = target;
        ran
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        let mut clock = self.clock.borrow_mut();
        let due = clock.now.saturating_add(u64::from(delay_ms));
        let seq = clock.next_seq;
        clock.next_seq = seq.saturating_add(1);
        clock.queue.push(Pending { due, seq, task });
    }
}
