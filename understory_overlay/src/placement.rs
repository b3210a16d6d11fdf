// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement calculator: anchor box + content size → clamped overlay origin.
//!
//! ## Overview
//!
//! [`compute_position`] aligns the content's cross axis with the anchor
//! (start, center or end), pushes it `offset` units away from the anchor on the
//! requested side, then clamps the result into the viewport inset by
//! `viewport_padding`.
//!
//! ## Clamp, not flip
//!
//! Overflow is resolved by sliding the content along each axis. The requested
//! side is never swapped, so [`PositionResult::placement`] always equals the
//! placement that was asked for. Callers that want flip-on-overflow can test
//! [`overflows`] and retry with [`Placement::flipped`].
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_overlay::placement::{PlacementConfig, compute_position};
//! use understory_overlay::types::Placement;
//!
//! let anchor = Rect::from_origin_size((200.0, 100.0), (40.0, 20.0));
//! let config = PlacementConfig { offset: 10.0, ..PlacementConfig::default() };
//! let pos = compute_position(
//!     anchor,
//!     Size::new(80.0, 30.0),
//!     Placement::BOTTOM,
//!     &config,
//!     Size::new(1024.0, 768.0),
//! );
//! assert_eq!((pos.top(), pos.left()), (130.0, 180.0));
//! ```

use kurbo::{Point, Rect, Size};

use crate::types::{Align, Placement, Side};

/// Distances used by the calculator.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementConfig {
    /// Gap between the anchor edge and the content, on the placement side.
    pub offset: f64,
    /// Minimum distance kept between the content and every viewport edge.
    pub viewport_padding: f64,
}

impl PlacementConfig {
    /// Offset and padding of 8 units.
    pub const DEFAULT: Self = Self {
        offset: 8.0,
        viewport_padding: 8.0,
    };
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Result of [`compute_position`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PositionResult {
    /// Top-left corner of the content in viewport coordinates.
    pub origin: Point,
    /// The requested placement, unchanged by clamping.
    pub placement: Placement,
}

impl PositionResult {
    /// Vertical coordinate of the content's top edge.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.origin.y
    }

    /// Horizontal coordinate of the content's left edge.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.origin.x
    }

    /// The content box for a content of the given size.
    #[must_use]
    pub fn rect(&self, size: Size) -> Rect {
        Rect::from_origin_size(self.origin, size)
    }
}

/// Compute the clamped origin of `content` placed against `anchor`.
///
/// `anchor` is the anchor's viewport-relative box and `viewport` the size of the
/// visible area. Content with a zero or negative extent cannot be placed; the
/// anchor's top-left corner is returned instead and a warning is logged.
#[must_use]
pub fn compute_position(
    anchor: Rect,
    content: Size,
    placement: Placement,
    config: &PlacementConfig,
    viewport: Size,
) -> PositionResult {
    if !has_extent(content) {
        log::warn!(
            "overlay content has no extent ({}x{}); falling back to anchor origin",
            content.width,
            content.height
        );
        return PositionResult {
            origin: anchor.origin(),
            placement,
        };
    }
    let raw = unclamped_origin(anchor, content, placement, config.offset);
    let pad = config.viewport_padding;
    let origin = Point::new(
        clamp_axis(raw.x, content.width, viewport.width, pad),
        clamp_axis(raw.y, content.height, viewport.height, pad),
    );
    PositionResult { origin, placement }
}

/// Whether the unclamped position for `placement` leaves the padded viewport.
///
/// The calculator never acts on this. It is exposed for callers that want to
/// flip to [`Placement::flipped`] themselves.
#[must_use]
pub fn overflows(
    anchor: Rect,
    content: Size,
    placement: Placement,
    config: &PlacementConfig,
    viewport: Size,
) -> bool {
    if !has_extent(content) {
        return false;
    }
    let raw = unclamped_origin(anchor, content, placement, config.offset);
    let pad = config.viewport_padding;
    raw.x < pad
        || raw.y < pad
        || raw.x + content.width > viewport.width - pad
        || raw.y + content.height > viewport.height - pad
}

fn has_extent(size: Size) -> bool {
    size.width > 0.0 && size.height > 0.0 && size.is_finite()
}

fn unclamped_origin(anchor: Rect, content: Size, placement: Placement, offset: f64) -> Point {
    if placement.side.is_vertical() {
        let x = cross_axis(anchor.x0, anchor.width(), content.width, placement.align);
        let y = match placement.side {
            Side::Top => anchor.y0 - content.height - offset,
            _ => anchor.y0 + anchor.height() + offset,
        };
        Point::new(x, y)
    } else {
        let y = cross_axis(anchor.y0, anchor.height(), content.height, placement.align);
        let x = match placement.side {
            Side::Left => anchor.x0 - content.width - offset,
            _ => anchor.x0 + anchor.width() + offset,
        };
        Point::new(x, y)
    }
}

// Position along the axis parallel to the placement side.
fn cross_axis(anchor_start: f64, anchor_len: f64, content_len: f64, align: Align) -> f64 {
    match align {
        Align::Start => anchor_start,
        Align::Center => anchor_start + anchor_len / 2.0 - content_len / 2.0,
        Align::End => anchor_start + anchor_len - content_len,
    }
}

// The far-edge check runs last, so it wins when the viewport is too small.
fn clamp_axis(mut pos: f64, len: f64, viewport_len: f64, pad: f64) -> f64 {
    if pos < pad {
        pos = pad;
    }
    if pos + len > viewport_len - pad {
        pos = viewport_len - len - pad;
    }
    pos
}
