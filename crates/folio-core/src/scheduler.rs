//! Single-shot timers with cancellation.
//!
//! [`TimerSlot`] holds at most one pending task for a self-rescheduling
//! machine: arming it cancels whatever was pending before. The slot is
//! generic over the timer handle so the browser binding can plug in real
//! timeouts while tests use [`ManualScheduler`], a virtual clock.

use std::cell::Cell;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;
use std::time::Duration;

/// A pending timer that can be called off.
pub trait Cancel {
    fn cancel(self);
}

/// Holder of the one pending task of a machine.
#[derive(Debug)]
pub struct TimerSlot<H: Cancel> {
    pending: Option<H>,
}

impl<H: Cancel> Default for TimerSlot<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H: Cancel> TimerSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `handle`, cancelling the previous one. Returns whether a
    /// previous handle was replaced.
    pub fn arm(&mut self, handle: H) -> bool {
        let replaced = self.pending.take().map(Cancel::cancel).is_some();
        self.pending = Some(handle);
        replaced
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

impl<H: Cancel> Drop for TimerSlot<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// A scheduled task
#[derive(Debug)]
struct ScheduledTask {
    /// When the task should run, on the virtual clock
    run_at: Duration,
    id: u64,
    cancelled: Rc<Cell<bool>>,
}

impl PartialEq for ScheduledTask {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ScheduledTask {}

impl PartialOrd for ScheduledTask {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScheduledTask {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior (earliest first, then FIFO)
        other
            .run_at
            .cmp(&self.run_at)
            .then_with(|| other.id.cmp(&self.id))
    }
}

/// Handle to a task on a [`ManualScheduler`].
#[derive(Debug)]
pub struct ManualTimer {
    id: u64,
    cancelled: Rc<Cell<bool>>,
}

impl ManualTimer {
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Cancel for ManualTimer {
    fn cancel(self) {
        self.cancelled.set(true);
    }
}

/// Deterministic virtual-time scheduler.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    tasks: BinaryHeap<ScheduledTask>,
    next_id: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Add a one-shot task
    pub fn schedule_after(&mut self, delay: Duration) -> ManualTimer {
        let id = self.next_id;
        self.next_id += 1;
        let cancelled = Rc::new(Cell::new(false));

        self.tasks.push(ScheduledTask {
            run_at: self.now + delay,
            id,
            cancelled: cancelled.clone(),
        });

        ManualTimer { id, cancelled }
    }

    /// Number of tasks that are neither fired nor cancelled
    pub fn pending(&self) -> usize {
        self.tasks.iter().filter(|t| !t.cancelled.get()).count()
    }

    /// Jump the clock to the earliest live task and return its id.
    pub fn advance(&mut self) -> Option<u64> {
        while let Some(task) = self.tasks.pop() {
            if task.cancelled.get() {
                continue;
            }
            self.now = task.run_at;
            return Some(task.id);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_time_order() {
        let mut sched = ManualScheduler::new();
        let late = sched.schedule_after(Duration::from_millis(300));
        let early = sched.schedule_after(Duration::from_millis(100));

        assert_eq!(sched.advance(), Some(early.id()));
        assert_eq!(sched.now(), Duration::from_millis(100));
        assert_eq!(sched.advance(), Some(late.id()));
        assert_eq!(sched.advance(), None);
    }

    #[test]
    fn equal_deadlines_fire_fifo() {
        let mut sched = ManualScheduler::new();
        let a = sched.schedule_after(Duration::from_millis(10));
        let b = sched.schedule_after(Duration::from_millis(10));
        assert_eq!(sched.advance(), Some(a.id()));
        assert_eq!(sched.advance(), Some(b.id()));
    }

    #[test]
    fn slot_cancels_previous_timer() {
        let mut sched = ManualScheduler::new();
        let mut slot = TimerSlot::new();

        assert!(!slot.arm(sched.schedule_after(Duration::from_millis(50))));
        assert!(slot.arm(sched.schedule_after(Duration::from_millis(80))));
        assert_eq!(sched.pending(), 1);

        let fired = sched.advance();
        assert_eq!(sched.now(), Duration::from_millis(80));
        assert_eq!(fired, Some(1));
    }

    #[test]
    fn slot_cancel_and_drop_clear_pending() {
        let mut sched = ManualScheduler::new();
        let mut slot = TimerSlot::new();
        slot.arm(sched.schedule_after(Duration::from_millis(5)));
        slot.cancel();
        assert!(!slot.is_armed());
        assert_eq!(sched.pending(), 0);

        {
            let mut scoped = TimerSlot::new();
            scoped.arm(sched.schedule_after(Duration::from_millis(5)));
        }
        assert_eq!(sched.pending(), 0);
        assert_eq!(sched.advance(), None);
    }
}
