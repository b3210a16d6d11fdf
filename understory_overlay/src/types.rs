// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement vocabulary: sides, alignments, and the twelve placements.

use core::fmt;
use core::str::FromStr;

/// The side of the anchor an overlay is placed on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Side {
    /// Above the anchor.
    #[default]
    Top,
    /// Below the anchor.
    Bottom,
    /// Left of the anchor.
    Left,
    /// Right of the anchor.
    Right,
}

impl Side {
    /// The geometrically opposite side.
    ///
    /// This is the flip lookup. The placement calculator never applies it on
    /// its own; callers that want flip-on-overflow can combine it with
    /// [`overflows`](crate::placement::overflows).
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// True for [`Side::Top`] and [`Side::Bottom`], where the main axis is vertical.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Lowercase name as used in placement strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Cross-axis alignment of an overlay against its anchor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Align {
    /// Align with the anchor's leading edge (left or top).
    Start,
    /// Center on the anchor.
    #[default]
    Center,
    /// Align with the anchor's trailing edge (right or bottom).
    End,
}

impl Align {
    /// Lowercase name as used in placement strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

/// A requested placement: exactly one [`Side`] and one [`Align`].
///
/// The textual form is `side` or `side-align`, for example `top`, `top-start`
/// or `right-end`. A bare side implies [`Align::Center`].
///
/// ```
/// use understory_overlay::types::{Align, Placement, Side};
///
/// let p: Placement = "right-end".parse().unwrap();
/// assert_eq!(p, Placement::new(Side::Right, Align::End));
/// assert_eq!(Placement::default(), Placement::TOP);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Side of the anchor.
    pub side: Side,
    /// Alignment along that side.
    pub align: Align,
}

impl Placement {
    /// `top`
    pub const TOP: Self = Self::new(Side::Top, Align::Center);
    /// `top-start`
    pub const TOP_START: Self = Self::new(Side::Top, Align::Start);
    /// `top-end`
    pub const TOP_END: Self = Self::new(Side::Top, Align::End);
    /// `bottom`
    pub const BOTTOM: Self = Self::new(Side::Bottom, Align::Center);
    /// `bottom-start`
    pub const BOTTOM_START: Self = Self::new(Side::Bottom, Align::Start);
    /// `bottom-end`
    pub const BOTTOM_END: Self = Self::new(Side::Bottom, Align::End);
    /// `left`
    pub const LEFT: Self = Self::new(Side::Left, Align::Center);
    /// `left-start`
    pub const LEFT_START: Self = Self::new(Side::Left, Align::Start);
    /// `left-end`
    pub const LEFT_END: Self = Self::new(Side::Left, Align::End);
    /// `right`
    pub const RIGHT: Self = Self::new(Side::Right, Align::Center);
    /// `right-start`
    pub const RIGHT_START: Self = Self::new(Side::Right, Align::Start);
    /// `right-end`
    pub const RIGHT_END: Self = Self::new(Side::Right, Align::End);

    /// All twelve placements.
    pub const ALL: [Self; 12] = [
        Self::TOP,
        Self::TOP_START,
        Self::TOP_END,
        Self::BOTTOM,
        Self::BOTTOM_START,
        Self::BOTTOM_END,
        Self::LEFT,
        Self::LEFT_START,
        Self::LEFT_END,
        Self::RIGHT,
        Self::RIGHT_START,
        Self::RIGHT_END,
    ];

    /// Create a placement from a side and an alignment.
    #[must_use]
    pub const fn new(side: Side, align: Align) -> Self {
        Self { side, align }
    }

    /// The same alignment on the opposite side.
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self::new(self.side.opposite(), self.align)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.align {
            Align::Center => f.write_str(self.side.as_str()),
            align => write!(f, "{}-{}", self.side.as_str(), align.as_str()),
        }
    }
}

/// Error returned when parsing a [`Placement`] from text fails.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParsePlacementError {
    /// The side component was not one of `top`, `bottom`, `left`, `right`.
    UnknownSide,
    /// The alignment component was not one of `start`, `center`, `end`.
    UnknownAlign,
}

impl fmt::Display for ParsePlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSide => f.write_str("unknown placement side"),
            Self::UnknownAlign => f.write_str("unknown placement alignment"),
        }
    }
}

impl core::error::Error for ParsePlacementError {}

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (side, align) = match s.split_once('-') {
            Some((side, align)) => (side, Some(align)),
            None => (s, None),
        };
        let side = match side {
            "top" => Side::Top,
            "bottom" => Side::Bottom,
            "left" => Side::Left,
            "right" => Side::Right,
            _ => return Err(ParsePlacementError::UnknownSide),
        };
        let align = match align {
            None | Some("center") => Align::Center,
            Some("start") => Align::Start,
            Some("end") => Align::End,
            Some(_) => return Err(ParsePlacementError::UnknownAlign),
        };
        Ok(Self::new(side, align))
    }
}
