//! Timer scheduler
//!
//! One-shot timers driven by the caller's clock. Nothing fires on its own;
//! `advance` moves time forward and reports which timers expired. Cancelled
//! or fired handles are never reused, so a stale id is simply not pending.

use std::time::Duration;

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    pub struct TimerId;
}

#[derive(Debug)]
struct Timer {
    remaining: Duration,
}

/// Pending one-shot timers
#[derive(Debug, Default)]
pub struct Timers {
    timers: SlotMap<TimerId, Timer>,
}

impl Timers {
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
        }
    }

    /// Schedule a timer that expires after `delay`
    pub fn schedule(&mut self, delay: Duration) -> TimerId {
        self.timers.insert(Timer { remaining: delay })
    }

    /// Cancel a pending timer. Returns false if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.remove(id).is_some()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// Move time forward by `dt`, returning the timers that expired
    pub fn advance(&mut self, dt: Duration) -> SmallVec<[TimerId; 4]> {
        let mut fired = SmallVec::new();
        for (id, timer) in self.timers.iter_mut() {
            timer.remaining = timer.remaining.saturating_sub(dt);
            if timer.remaining.is_zero() {
                fired.push(id);
            }
        }
        for id in &fired {
            self.timers.remove(*id);
        }
        if !fired.is_empty() {
            tracing::trace!("{} timer(s) expired", fired.len());
        }
        fired
    }

    /// Cancel everything
    pub fn clear(&mut self) {
        self.timers.clear();
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}
