//! One-shot timers ordered by due time.

use std::collections::{BTreeMap, HashMap};

use crate::Millis;

/// Handle returned by [`TimerQueue::schedule`], used to cancel a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// A queue of pending one-shot timers.
///
/// Timers due at the same instant fire in the order they were scheduled.
#[derive(Debug)]
pub struct TimerQueue<T> {
    next_id: u64,
    by_due: BTreeMap<(Millis, u64), T>,
    due_of: HashMap<u64, Millis>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            by_due: BTreeMap::new(),
            due_of: HashMap::new(),
        }
    }

    pub fn schedule(&mut self, due_at: Millis, payload: T) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        self.by_due.insert((due_at, id), payload);
        self.due_of.insert(id, due_at);
        TimerId(id)
    }

    /// Cancel a pending timer. Returns its payload if it had not fired yet.
    pub fn cancel(&mut self, timer: TimerId) -> Option<T> {
        let due_at = self.due_of.remove(&timer.0)?;
        self.by_due.remove(&(due_at, timer.0))
    }

    pub fn next_due(&self) -> Option<Millis> {
        self.by_due.first_key_value().map(|(&(due_at, _), _)| due_at)
    }

    /// Remove and return the earliest timer if it is due at or before `now`.
    pub fn pop_due(&mut self, now: Millis) -> Option<(Millis, T)> {
        if self.next_due()? > now {
            return None;
        }
        let ((due_at, id), payload) = self.by_due.pop_first()?;
        self.due_of.remove(&id);
        Some((due_at, payload))
    }

    pub fn len(&self) -> usize {
        self.by_due.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_due.is_empty()
    }
}
