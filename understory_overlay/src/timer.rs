// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exclusive timer slot for delayed open/close transitions.
//!
//! An engine owns one [`ExclusiveTimer`]. Scheduling any timer replaces
//! whatever was pending, so an enter, leave and touch-hold timer can never be
//! pending at the same time and two delayed transitions can never race.

use core::time::Duration;

use crate::time::Timestamp;

/// Which delayed transition a timer drives.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Hover enter delay; opens on expiry.
    Enter,
    /// Hover leave delay; closes on expiry.
    Leave,
    /// Touch-and-hold delay; opens on expiry.
    TouchHold,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Scheduled {
    kind: TimerKind,
    deadline: Timestamp,
}

/// A single slot holding at most one pending timer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExclusiveTimer {
    pending: Option<Scheduled>,
}

impl ExclusiveTimer {
    /// Create an empty timer slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Cancel whatever is pending, then schedule `kind` to fire at `now + delay`.
    ///
    /// Returns the new deadline.
    pub fn schedule(&mut self, kind: TimerKind, now: Timestamp, delay: Duration) -> Timestamp {
        if let Some(old) = self.pending {
            log::trace!("timer {:?} replaced by {:?}", old.kind, kind);
        }
        let deadline = now + delay;
        self.pending = Some(Scheduled { kind, deadline });
        deadline
    }

    /// Cancel the pending timer, returning its kind.
    pub fn cancel(&mut self) -> Option<TimerKind> {
        self.pending.take().map(|s| s.kind)
    }

    /// Cancel the pending timer only if it is of `kind`.
    pub fn cancel_kind(&mut self, kind: TimerKind) -> bool {
        if self.pending() == Some(kind) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Kind of the pending timer.
    #[must_use]
    pub fn pending(&self) -> Option<TimerKind> {
        self.pending.map(|s| s.kind)
    }

    /// Deadline of the pending timer.
    #[must_use]
    pub fn deadline(&self) -> Option<Timestamp> {
        self.pending.map(|s| s.deadline)
    }

    /// Remove and return the pending timer if its deadline has been reached.
    pub fn take_due(&mut self, now: Timestamp) -> Option<TimerKind> {
        match self.pending {
            Some(s) if s.deadline <= now => {
                self.pending = None;
                Some(s.kind)
            }
            _ => None,
        }
    }
}
