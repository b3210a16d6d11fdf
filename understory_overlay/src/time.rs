// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-supplied monotonic time.
//!
//! The engine never reads a clock. Every event and [`poll`](crate::overlay::Overlay::poll)
//! carries a [`Timestamp`] from the host's monotonic clock, and delays are plain
//! [`Duration`]s.

use core::fmt;
use core::ops::Add;
use core::time::Duration;

/// A point in host time, measured from an arbitrary host epoch.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(Duration);

impl Timestamp {
    /// The host epoch.
    pub const ZERO: Self = Self(Duration::ZERO);

    /// Milliseconds since the host epoch.
    #[inline]
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    /// Duration since `earlier`, or zero if `earlier` is later than `self`.
    #[inline]
    #[must_use]
    pub const fn saturating_duration_since(self, earlier: Self) -> Duration {
        self.0.saturating_sub(earlier.0)
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Duration) -> Self {
        Self(self.0.saturating_add(rhs))
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({:?})", self.0)
    }
}
