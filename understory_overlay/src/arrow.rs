// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrow alignment: where a connector indicator sits on the overlay.
//!
//! The arrow lives on the overlay edge that faces the anchor, which is the
//! side opposite the placement side. Its alignment along that edge follows the
//! placement's alignment.
//!
//! ```
//! use understory_overlay::arrow::{ArrowSpec, resolve_arrow};
//! use understory_overlay::types::{Align, Placement, Side};
//!
//! assert_eq!(
//!     resolve_arrow(Placement::TOP_START),
//!     ArrowSpec { side: Side::Bottom, align: Align::Start },
//! );
//! ```

use kurbo::{Point, Size};

use crate::types::{Align, Placement, Side};

/// Edge and alignment of the overlay's connector indicator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArrowSpec {
    /// Edge of the overlay that carries the arrow.
    pub side: Side,
    /// Position of the arrow along that edge.
    pub align: Align,
}

impl Default for ArrowSpec {
    fn default() -> Self {
        Self {
            side: Side::Bottom,
            align: Align::Center,
        }
    }
}

impl ArrowSpec {
    /// Resolve an arrow from a textual placement such as `"right-end"`.
    ///
    /// Unrecognized names resolve to `bottom`/`center`, the arrow of the
    /// default `top` placement.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        name.parse::<Placement>()
            .map(resolve_arrow)
            .unwrap_or_default()
    }

    /// Attachment point of the arrow in content-local coordinates.
    ///
    /// `inset` is the distance from the corner used for start and end
    /// alignment; it is limited to half the edge length.
    #[must_use]
    pub fn anchor_point(&self, content: Size, inset: f64) -> Point {
        let along = |len: f64| {
            let inset = inset.min(len / 2.0).max(0.0);
            match self.align {
                Align::Start => inset,
                Align::Center => len / 2.0,
                Align::End => len - inset,
            }
        };
        match self.side {
            Side::Top => Point::new(along(content.width), 0.0),
            Side::Bottom => Point::new(along(content.width), content.height),
            Side::Left => Point::new(0.0, along(content.height)),
            Side::Right => Point::new(content.width, along(content.height)),
        }
    }
}

/// Map a placement to its arrow: opposite side, same alignment.
#[must_use]
pub const fn resolve_arrow(placement: Placement) -> ArrowSpec {
    ArrowSpec {
        side: placement.side.opposite(),
        align: placement.align,
    }
}
