// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accessibility wiring between the anchor and the overlay content.
//!
//! The content carries a stable [`OverlayId`] and a tooltip role; the anchor
//! references that id as its description only while the overlay is open.

use core::fmt;
use core::num::NonZeroU32;
use core::sync::atomic::{AtomicU32, Ordering};

static NEXT_ID: AtomicU32 = AtomicU32::new(1);

/// Identifier linking overlay content to its anchor.
///
/// Formats as `understory-overlay-{n}` for use as a document id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OverlayId(NonZeroU32);

impl OverlayId {
    /// Allocate a process-unique id.
    #[must_use]
    pub fn next() -> Self {
        loop {
            let raw = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            // Zero only shows up after wrapping around.
            if let Some(id) = NonZeroU32::new(raw) {
                return Self(id);
            }
        }
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "understory-overlay-{}", self.0)
    }
}

/// Accessibility role of the overlay content.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    /// A tooltip describing its anchor.
    #[default]
    Tooltip,
}

impl Role {
    /// Role name as used by ARIA.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tooltip => "tooltip",
        }
    }
}

/// Attributes for the overlay content node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ContentAria {
    /// Id of the content node.
    pub id: OverlayId,
    /// Role marker.
    pub role: Role,
    /// Hidden from assistive technology; mirrors `!open`.
    pub hidden: bool,
}

/// Attributes for the anchor node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AnchorAria {
    /// Description reference; set only while the overlay is open.
    pub described_by: Option<OverlayId>,
}

impl ContentAria {
    /// Content attributes for the given open state.
    #[must_use]
    pub const fn new(id: OverlayId, open: bool) -> Self {
        Self {
            id,
            role: Role::Tooltip,
            hidden: !open,
        }
    }
}

impl AnchorAria {
    /// Anchor attributes for the given open state.
    #[must_use]
    pub const fn new(id: OverlayId, open: bool) -> Self {
        Self {
            described_by: if open { Some(id) } else { None },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn ids_are_unique() {
        let a = OverlayId::next();
        let b = OverlayId::next();
        assert_ne!(a, b);
        assert_ne!(format!("{a}"), format!("{b}"));
        assert!(format!("{a}").starts_with("understory-overlay-"));
    }

    #[test]
    fn description_only_while_open() {
        let id = OverlayId::next();
        assert_eq!(AnchorAria::new(id, true).described_by, Some(id));
        assert_eq!(AnchorAria::new(id, false).described_by, None);
        assert!(ContentAria::new(id, false).hidden);
        assert!(!ContentAria::new(id, true).hidden);
        assert_eq!(ContentAria::new(id, true).role.as_str(), "tooltip");
    }
}
