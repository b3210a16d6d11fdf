// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handle composition: one setter that forwards an element handle to several owners.
//!
//! The overlay needs its own copy of the anchor handle, and so does whoever
//! rendered the anchor. Instead of aliasing a single mutable slot, the host
//! hands the engine a [`RefSink`] and the engine forwards every update through
//! a [`ComposedRef`].
//!
//! ```
//! use understory_overlay::handle::{ComposedRef, RefSink};
//!
//! let mut mine: Option<u32> = None;
//! let mut theirs: Option<u32> = None;
//! ComposedRef::new([&mut mine as &mut dyn RefSink<u32>, &mut theirs]).set(Some(7));
//! assert_eq!((mine, theirs), (Some(7), Some(7)));
//! ```

use alloc::vec::Vec;

/// Receives handle updates; `None` means the element went away.
pub trait RefSink<T> {
    /// Store the new handle.
    fn set(&mut self, handle: Option<T>);
}

impl<T> RefSink<T> for Option<T> {
    #[inline]
    fn set(&mut self, handle: Option<T>) {
        *self = handle;
    }
}

impl<T, F: FnMut(Option<T>)> RefSink<T> for F {
    #[inline]
    fn set(&mut self, handle: Option<T>) {
        self(handle);
    }
}

/// A sink that discards updates.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoSink;

impl<T> RefSink<T> for NoSink {
    #[inline]
    fn set(&mut self, _handle: Option<T>) {}
}

/// Forwards each update to every sink, in order.
pub struct ComposedRef<'a, T> {
    sinks: Vec<&'a mut dyn RefSink<T>>,
}

impl<T> core::fmt::Debug for ComposedRef<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ComposedRef")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

impl<'a, T: Clone> ComposedRef<'a, T> {
    /// Compose the given sinks.
    pub fn new(sinks: impl IntoIterator<Item = &'a mut dyn RefSink<T>>) -> Self {
        Self {
            sinks: sinks.into_iter().collect(),
        }
    }

    /// Forward `handle` to every sink.
    pub fn set(&mut self, handle: Option<T>) {
        for sink in &mut self.sinks {
            sink.set(handle.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn forwards_to_slots_and_closures() {
        let mut slot: Option<u32> = Some(1);
        let mut seen = vec![];
        let mut record = |h: Option<u32>| seen.push(h);
        let mut discard = NoSink;
        {
            let mut composed =
                ComposedRef::new([&mut slot as &mut dyn RefSink<u32>, &mut record, &mut discard]);
            composed.set(Some(5));
            composed.set(None);
        }
        assert_eq!(slot, None);
        assert_eq!(seen, vec![Some(5), None]);
    }
}
