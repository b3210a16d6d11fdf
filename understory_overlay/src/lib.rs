// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_overlay --heading-base-level=0

//! Understory Overlay: placement and interaction engine for floating overlays.
//!
//! ## Overview
//!
//! This crate decides *when* a floating overlay such as a tooltip is open and
//! *where* it goes. It does not render anything, own a clock, or touch a
//! document tree. The host feeds it input events, timestamps, and element
//! boxes, and applies the [`Effect`](crate::overlay::Effect)s it returns.
//!
//! ## Pieces
//!
//! - [`placement`]: pure calculator from anchor box, content size, and one of
//!   twelve [`Placement`](crate::types::Placement)s to a viewport-clamped origin.
//!   It clamps and never flips; [`Placement::flipped`](crate::types::Placement::flipped)
//!   and [`overflows`](crate::placement::overflows) are there for callers that want to.
//! - [`arrow`]: where an indicator sits, always on the side facing the anchor.
//! - [`measure`]: the two-phase protocol. Content is mounted hidden, measured
//!   after a layout pass, then placed and revealed.
//! - [`trigger`]: open/closed state machine over hover, focus, click, touch,
//!   and manual control, with delays run through one
//!   [`ExclusiveTimer`](crate::timer::ExclusiveTimer).
//! - [`mount`], [`aria`], [`handle`]: mount target selection, accessibility
//!   wiring, and anchor handle forwarding.
//! - [`overlay`]: [`Overlay`](crate::overlay::Overlay) ties it together.
//!
//! ## Workflow
//!
//! 1) Build an [`Overlay`](crate::overlay::Overlay) from an
//!    [`OverlayConfig`](crate::overlay::OverlayConfig) and attach the anchor
//!    handlers listed by [`Overlay::bindings`](crate::overlay::Overlay::bindings).
//! 2) Forward events with [`Overlay::handle_event`](crate::overlay::Overlay::handle_event)
//!    and call [`Overlay::poll`](crate::overlay::Overlay::poll) at
//!    [`Overlay::next_deadline`](crate::overlay::Overlay::next_deadline).
//! 3) Apply the returned effects. After `RequestLayout`, run layout and call
//!    [`Overlay::layout`](crate::overlay::Overlay::layout) with a
//!    [`LayoutHost`](crate::measure::LayoutHost).
//! 4) While open, forward window resize and scroll.
//!
//! ```
//! use core::time::Duration;
//! use kurbo::{Rect, Size};
//! use understory_overlay::measure::{LayoutHost, Presentation};
//! use understory_overlay::mount::AnyTarget;
//! use understory_overlay::overlay::{Effect, Overlay, OverlayConfig};
//! use understory_overlay::time::Timestamp;
//! use understory_overlay::trigger::InputEvent;
//! use understory_overlay::types::Placement;
//!
//! struct Page;
//! impl LayoutHost for Page {
//!     fn anchor_bounds(&self) -> Rect { Rect::from_origin_size((200.0, 100.0), (40.0, 20.0)) }
//!     fn measure_content(&mut self) -> Size { Size::new(80.0, 30.0) }
//!     fn viewport_size(&self) -> Size { Size::new(1024.0, 768.0) }
//! }
//!
//! let config = OverlayConfig { placement: Placement::BOTTOM, ..OverlayConfig::default() };
//! let mut tip: Overlay<u32> = Overlay::new(config, None, &AnyTarget);
//!
//! let t0 = Timestamp::ZERO;
//! assert!(tip.handle_event(InputEvent::PointerEnter, t0).is_empty());
//! let effects = tip.poll(t0 + Duration::from_millis(500));
//! assert!(effects.contains(&Effect::AttachWindowListeners));
//!
//! let pos = tip.layout(&mut Page).unwrap();
//! assert_eq!(tip.presentation(), Presentation::Visible { origin: pos.origin });
//! assert_eq!((pos.top(), pos.left()), (128.0, 180.0));
//! ```
//!
//! ## Diagnostics
//!
//! Degraded cases (content without extent, anchors without area, detached
//! mount targets) never fail; they fall back and report through the [`log`]
//! facade.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod aria;
pub mod arrow;
pub mod handle;
pub mod measure;
pub mod mount;
pub mod overlay;
pub mod placement;
pub mod time;
pub mod timer;
pub mod trigger;
pub mod types;

pub use overlay::{Effect, Overlay, OverlayConfig};
pub use types::{Align, Placement, Side};
