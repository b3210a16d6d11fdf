// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mount target selection: inline next to the anchor, or portaled elsewhere.

/// Where the caller asked the content to be mounted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MountRequest<K> {
    /// Render in place, next to the anchor.
    Inline,
    /// Render into an external container; `None` means the document root.
    Portal(Option<K>),
}

impl<K> Default for MountRequest<K> {
    fn default() -> Self {
        Self::Portal(None)
    }
}

/// Resolved mount target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mount<K> {
    /// Render in place, next to the anchor.
    Inline,
    /// Render into the given container.
    Target(K),
    /// Render into the document-level root.
    Root,
}

/// Answers whether a container can currently host overlay content.
pub trait MountLookup<K> {
    /// Returns true if `target` exists and is attached to the document.
    fn is_attached(&self, target: &K) -> bool;
}

/// A lookup that accepts every target.
#[derive(Copy, Clone, Debug, Default)]
pub struct AnyTarget;

impl<K> MountLookup<K> for AnyTarget {
    #[inline]
    fn is_attached(&self, _target: &K) -> bool {
        true
    }
}

/// Resolve a [`MountRequest`], falling back to [`Mount::Root`] when the
/// requested container is missing or detached.
pub fn resolve_mount<K: core::fmt::Debug>(
    request: MountRequest<K>,
    lookup: &impl MountLookup<K>,
) -> Mount<K> {
    match request {
        MountRequest::Inline => Mount::Inline,
        MountRequest::Portal(None) => Mount::Root,
        MountRequest::Portal(Some(target)) => {
            if lookup.is_attached(&target) {
                Mount::Target(target)
            } else {
                log::warn!("mount target {target:?} is not attached; using document root");
                Mount::Root
            }
        }
    }
}
