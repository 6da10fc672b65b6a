//! Virtual-clock timer queue.
//!
//! Time is a `Duration` since the queue was created and only moves when the
//! owner advances it, which keeps every controller timeline deterministic.
//! Cancellation is lazy: cancelled entries stay in the heap and are skipped
//! when they reach the top.

use crate::id::{ElementId, TimerId};
use crate::traits::{Scheduler, TimerKind};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::time::Duration;

const LOG_TARGET: &str = "double_confirm.timer";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FiredTimer {
    pub id: TimerId,
    pub element: ElementId,
    pub kind: TimerKind,
    pub deadline: Duration,
}

#[derive(Clone, Copy, Debug)]
struct Armed {
    element: ElementId,
    kind: TimerKind,
    deadline: Duration,
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    // Ordered by deadline, then by id, so equal deadlines fire in scheduling order.
    heap: BinaryHeap<Reverse<(Duration, TimerId)>>,
    armed: HashMap<TimerId, Armed>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Move the clock forward. Moving backwards is ignored.
    pub fn advance_to(&mut self, t: Duration) {
        if t > self.now {
            self.now = t;
        }
    }

    pub fn is_armed(&self, timer: TimerId) -> bool {
        self.armed.contains_key(&timer)
    }

    /// Number of timers that have neither fired nor been cancelled.
    pub fn armed_len(&self) -> usize {
        self.armed.len()
    }

    /// Deadline of the earliest armed timer.
    pub fn next_deadline(&mut self) -> Option<Duration> {
        self.discard_cancelled();
        self.heap.peek().map(|Reverse((deadline, _))| *deadline)
    }

    /// Pop the earliest armed timer whose deadline is at or before `until`,
    /// moving the clock to its deadline.
    pub fn pop_due(&mut self, until: Duration) -> Option<FiredTimer> {
        self.discard_cancelled();
        let Reverse((deadline, id)) = *self.heap.peek()?;
        if deadline > until {
            return None;
        }
        self.heap.pop();

        let armed = self.armed.remove(&id)?;
        self.advance_to(deadline);
        log::trace!(
            target: LOG_TARGET,
            "fire {:?} {:?} for {} at {:?}",
            id,
            armed.kind,
            armed.element,
            deadline
        );
        Some(FiredTimer {
            id,
            element: armed.element,
            kind: armed.kind,
            deadline: armed.deadline,
        })
    }

    fn discard_cancelled(&mut self) {
        while let Some(Reverse((_, id))) = self.heap.peek() {
            if self.armed.contains_key(id) {
                break;
            }
            self.heap.pop();
        }
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, element: ElementId, kind: TimerKind, delay: Duration) -> TimerId {
        let id = TimerId::from_raw(self.next_id);
        self.next_id += 1;

        let deadline = self.now.saturating_add(delay);
        self.armed.insert(
            id,
            Armed {
                element,
                kind,
                deadline,
            },
        );
        self.heap.push(Reverse((deadline, id)));
        log::trace!(
            target: LOG_TARGET,
            "schedule {id:?} {kind:?} for {element} at {deadline:?}"
        );
        id
    }

    fn cancel(&mut self, timer: TimerId) {
        if self.armed.remove(&timer).is_some() {
            log::trace!(target: LOG_TARGET, "cancel {timer:?}");
        }
    }
}
