// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measurement controller: the deferred layout commit protocol.
//!
//! ## Why two phases
//!
//! An overlay's size is unknown until its content has been mounted and laid
//! out. Each open cycle therefore runs:
//!
//! 1. [`Measurement::begin`]: `Closed → Measuring`. The host mounts the content
//!    hidden at [`OFFSCREEN`] so the mount cannot flash on screen.
//! 2. After the host's layout pass, [`Measurement::commit`]:
//!    `Measuring → Positioned`. The content box is read through
//!    [`LayoutHost::measure_content`], fed with the anchor box to
//!    [`compute_position`], and the result is committed and revealed.
//!
//! While open, a resize drops the measured size and loops back to
//! `Measuring` ([`Measurement::invalidate_size`]). A scroll keeps the size and
//! only recomputes against a fresh anchor box ([`Measurement::reposition`]).
//! [`Measurement::close`] forgets everything; no state survives between open
//! cycles.

use kurbo::{Point, Rect, Size};

use crate::placement::{PlacementConfig, PositionResult, compute_position};
use crate::types::Placement;

/// Where hidden content is parked while it is measured.
pub const OFFSCREEN: Point = Point::new(-9999.0, -9999.0);

/// Layout queries answered by the host.
///
/// All rectangles are viewport-relative.
pub trait LayoutHost {
    /// Current box of the anchor element.
    fn anchor_bounds(&self) -> Rect;
    /// Size of the mounted content.
    ///
    /// Implementations must force a layout pass first so the returned size
    /// reflects the current content and style, not a previous mount.
    fn measure_content(&mut self) -> Size;
    /// Size of the visible viewport.
    fn viewport_size(&self) -> Size;
}

/// Phase of the measurement protocol.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MeasurePhase {
    /// Content is not mounted.
    #[default]
    Closed,
    /// Content is mounted hidden and waits for [`Measurement::commit`].
    Measuring,
    /// Content is shown at committed coordinates.
    Positioned,
}

/// Flags describing how far the current open cycle has progressed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MeasurementState {
    /// The content size has been read this cycle.
    pub has_measured: bool,
    /// Coordinates have been committed and the content is visible.
    pub is_positioned: bool,
}

/// What the host should render for the content.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Presentation {
    /// Nothing is mounted.
    Unmounted,
    /// Mounted but invisible, parked at `origin`.
    Hidden {
        /// Where the content is parked.
        origin: Point,
    },
    /// Mounted and visible at `origin`.
    Visible {
        /// Committed top-left corner.
        origin: Point,
    },
}

/// Per-open-cycle measurement state.
#[derive(Clone, Debug, Default)]
pub struct Measurement {
    phase: MeasurePhase,
    size: Option<Size>,
    committed: Option<PositionResult>,
}

impl Measurement {
    /// A closed controller.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: MeasurePhase::Closed,
            size: None,
            committed: None,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> MeasurePhase {
        self.phase
    }

    /// Progress flags for the current cycle.
    #[must_use]
    pub fn state(&self) -> MeasurementState {
        MeasurementState {
            has_measured: self.size.is_some(),
            is_positioned: self.phase == MeasurePhase::Positioned,
        }
    }

    /// Last measured content size in this cycle.
    #[must_use]
    pub fn content_size(&self) -> Option<Size> {
        self.size
    }

    /// Committed position, if the content is visible.
    #[must_use]
    pub fn committed(&self) -> Option<PositionResult> {
        self.committed
    }

    /// Whether a [`Measurement::commit`] is outstanding.
    #[must_use]
    pub fn needs_commit(&self) -> bool {
        self.phase == MeasurePhase::Measuring
    }

    /// Start an open cycle. Returns false if one is already running.
    pub fn begin(&mut self) -> bool {
        if self.phase != MeasurePhase::Closed {
            return false;
        }
        self.phase = MeasurePhase::Measuring;
        true
    }

    /// Measure if needed, place, and reveal.
    ///
    /// Returns `None` without changing phase when no cycle is running or when
    /// the anchor has no area (detached or hidden); the host should try again
    /// after its next layout pass.
    pub fn commit<H: LayoutHost + ?Sized>(
        &mut self,
        host: &mut H,
        placement: Placement,
        config: &PlacementConfig,
    ) -> Option<PositionResult> {
        if self.phase == MeasurePhase::Closed {
            return None;
        }
        let anchor = host.anchor_bounds();
        if !has_area(anchor) {
            log::warn!("anchor has no area; skipping overlay positioning this cycle");
            return None;
        }
        let size = match self.size {
            Some(size) => size,
            None => {
                let size = host.measure_content();
                self.size = Some(size);
                size
            }
        };
        let pos = compute_position(anchor, size, placement, config, host.viewport_size());
        self.committed = Some(pos);
        self.phase = MeasurePhase::Positioned;
        Some(pos)
    }

    /// Drop the measured size so the next commit measures again.
    ///
    /// Used on viewport resize. Returns true if a commit is now needed.
    pub fn invalidate_size(&mut self) -> bool {
        if self.phase == MeasurePhase::Closed {
            return false;
        }
        self.size = None;
        self.committed = None;
        self.phase = MeasurePhase::Measuring;
        true
    }

    /// Recompute the position against a fresh anchor box, reusing the size.
    ///
    /// Used on scroll. Only acts while positioned; the previous position is
    /// kept if the anchor has lost its area.
    pub fn reposition<H: LayoutHost + ?Sized>(
        &mut self,
        host: &H,
        placement: Placement,
        config: &PlacementConfig,
    ) -> Option<PositionResult> {
        if self.phase != MeasurePhase::Positioned {
            return None;
        }
        let size = self.size?;
        let anchor = host.anchor_bounds();
        if !has_area(anchor) {
            log::warn!("anchor has no area; keeping previous overlay position");
            return None;
        }
        let pos = compute_position(anchor, size, placement, config, host.viewport_size());
        self.committed = Some(pos);
        Some(pos)
    }

    /// End the cycle and forget everything measured in it.
    pub fn close(&mut self) {
        *self = Self::new();
    }

    /// What the host should render right now.
    #[must_use]
    pub fn presentation(&self) -> Presentation {
        match (self.phase, self.committed) {
            (MeasurePhase::Closed, _) => Presentation::Unmounted,
            (MeasurePhase::Positioned, Some(pos)) => Presentation::Visible { origin: pos.origin },
            _ => Presentation::Hidden { origin: OFFSCREEN },
        }
    }
}

fn has_area(rect: Rect) -> bool {
    rect.width() > 0.0 && rect.height() > 0.0
}
