// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The overlay engine: interaction, measurement, and host effects for one overlay.
//!
//! ## Overview
//!
//! [`Overlay`] ties an [`Interaction`] to a [`Measurement`]. Every operation
//! that may change the displayed open state returns the [`Effect`]s the host
//! must apply, in order:
//!
//! - on entering open: [`Effect::Mount`], [`Effect::RequestLayout`],
//!   [`Effect::AttachWindowListeners`];
//! - on leaving open, by any path including [`Overlay::teardown`]:
//!   [`Effect::Unmount`], [`Effect::DetachWindowListeners`].
//!
//! Window listeners are therefore held exactly while the overlay is open.
//! After [`Effect::RequestLayout`] the host runs its layout pass and calls
//! [`Overlay::layout`], which measures the content and commits its position.
//!
//! ## Host loop sketch
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_overlay::measure::LayoutHost;
//! use understory_overlay::mount::AnyTarget;
//! use understory_overlay::overlay::{Effect, Overlay, OverlayConfig};
//! use understory_overlay::time::Timestamp;
//! use understory_overlay::trigger::InputEvent;
//!
//! struct Page;
//! impl LayoutHost for Page {
//!     fn anchor_bounds(&self) -> Rect { Rect::new(100.0, 100.0, 140.0, 120.0) }
//!     fn measure_content(&mut self) -> Size { Size::new(80.0, 30.0) }
//!     fn viewport_size(&self) -> Size { Size::new(800.0, 600.0) }
//! }
//!
//! let mut overlay: Overlay<u32> = Overlay::new(OverlayConfig::default(), None, &AnyTarget);
//! let effects = overlay.handle_event(InputEvent::FocusIn, Timestamp::ZERO);
//! assert!(effects.contains(&Effect::RequestLayout));
//!
//! let pos = overlay.layout(&mut Page).unwrap();
//! assert_eq!((pos.top(), pos.left()), (62.0, 80.0));
//! assert_eq!(overlay.anchor_aria().described_by, Some(overlay.id()));
//! ```

use alloc::vec::Vec;

use crate::arrow::{ArrowSpec, resolve_arrow};
use crate::aria::{AnchorAria, ContentAria, OverlayId};
use crate::handle::{ComposedRef, RefSink};
use crate::measure::{LayoutHost, MeasurePhase, Measurement, MeasurementState, Presentation};
use crate::mount::{Mount, MountLookup, MountRequest, resolve_mount};
use crate::placement::{PlacementConfig, PositionResult};
use crate::time::Timestamp;
use crate::trigger::{
    EventBindings, InputEvent, Interaction, InteractionConfig, InteractionState, OpenChange,
};
use crate::types::Placement;

/// Everything needed to build an [`Overlay`].
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayConfig<K> {
    /// Requested placement. Defaults to `top`.
    pub placement: Placement,
    /// Offset and viewport padding.
    pub geometry: PlacementConfig,
    /// Triggers, delays, and the disabled flag.
    pub interaction: InteractionConfig,
    /// Whether an arrow indicator is drawn.
    pub arrow: bool,
    /// Where the content is mounted.
    pub mount: MountRequest<K>,
}

impl<K> Default for OverlayConfig<K> {
    fn default() -> Self {
        Self {
            placement: Placement::default(),
            geometry: PlacementConfig::default(),
            interaction: InteractionConfig::default(),
            arrow: false,
            mount: MountRequest::default(),
        }
    }
}

/// Work the host must carry out after an engine call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Effect<K> {
    /// Open state change notification. In controlled mode the host decides
    /// whether to apply it.
    OpenChange(OpenChange),
    /// Mount the content, hidden and off-screen, into the given target.
    Mount(Mount<K>),
    /// Run a layout pass, then call [`Overlay::layout`].
    RequestLayout,
    /// Remove the content.
    Unmount,
    /// Start delivering window resize and scroll to the overlay.
    AttachWindowListeners,
    /// Stop delivering window resize and scroll to the overlay.
    DetachWindowListeners,
}

/// Placement and interaction engine for a single floating overlay.
#[derive(Clone, Debug)]
pub struct Overlay<K> {
    id: OverlayId,
    placement: Placement,
    geometry: PlacementConfig,
    arrow: bool,
    mount: Mount<K>,
    interaction: Interaction,
    measurement: Measurement,
    anchor: Option<K>,
    listening: bool,
    torn_down: bool,
}

impl<K: Copy + core::fmt::Debug> Overlay<K> {
    /// Build an engine. `controlled` fixes, for the engine's life, whether the
    /// open state comes from the host.
    ///
    /// The mount request is resolved once, against `mounts`.
    pub fn new(
        config: OverlayConfig<K>,
        controlled: Option<bool>,
        mounts: &impl MountLookup<K>,
    ) -> Self {
        Self {
            id: OverlayId::next(),
            placement: config.placement,
            geometry: config.geometry,
            arrow: config.arrow,
            mount: resolve_mount(config.mount, mounts),
            interaction: Interaction::new(config.interaction, controlled),
            measurement: Measurement::new(),
            anchor: None,
            listening: false,
            torn_down: false,
        }
    }

    /// Effects for the initial state.
    ///
    /// Only a controlled overlay constructed open produces any; call once after
    /// [`Overlay::new`].
    pub fn start(&mut self) -> Vec<Effect<K>> {
        if self.torn_down {
            return Vec::new();
        }
        self.sync(None)
    }

    /// Unique id linking content and anchor.
    #[must_use]
    pub fn id(&self) -> OverlayId {
        self.id
    }

    /// Requested placement.
    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Resolved mount target.
    #[must_use]
    pub fn mount(&self) -> Mount<K> {
        self.mount
    }

    /// Displayed open state.
    ///
    /// False until the open cycle has started, so a controlled overlay
    /// constructed open reports closed until [`Overlay::start`]. Always false
    /// after [`Overlay::teardown`].
    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.torn_down
            && self.interaction.is_open()
            && self.measurement.phase() != MeasurePhase::Closed
    }

    /// Open and controlled flags.
    #[must_use]
    pub fn interaction_state(&self) -> InteractionState {
        InteractionState {
            open: self.is_open(),
            ..self.interaction.state()
        }
    }

    /// Measurement progress of the current open cycle.
    #[must_use]
    pub fn measurement_state(&self) -> MeasurementState {
        self.measurement.state()
    }

    /// What the host should render for the content.
    #[must_use]
    pub fn presentation(&self) -> Presentation {
        self.measurement.presentation()
    }

    /// Committed position, once measured.
    #[must_use]
    pub fn position(&self) -> Option<PositionResult> {
        self.measurement.committed()
    }

    /// Arrow placement, if an arrow was requested.
    ///
    /// Always derived from the requested placement, even when the content was
    /// clamped.
    #[must_use]
    pub fn arrow(&self) -> Option<ArrowSpec> {
        self.arrow.then(|| resolve_arrow(self.placement))
    }

    /// Attributes for the content node.
    #[must_use]
    pub fn content_aria(&self) -> ContentAria {
        ContentAria::new(self.id, self.is_open())
    }

    /// Attributes for the anchor node.
    #[must_use]
    pub fn anchor_aria(&self) -> AnchorAria {
        AnchorAria::new(self.id, self.is_open())
    }

    /// Anchor handlers the host should attach.
    #[must_use]
    pub fn bindings(&self) -> EventBindings {
        if self.torn_down {
            EventBindings::empty()
        } else {
            self.interaction.bindings()
        }
    }

    /// When the host should next call [`Overlay::poll`].
    #[must_use]
    pub fn next_deadline(&self) -> Option<Timestamp> {
        self.interaction.next_deadline()
    }

    /// Whether window resize and scroll listeners are currently held.
    #[must_use]
    pub fn window_listeners_attached(&self) -> bool {
        self.listening
    }

    /// Current anchor handle.
    #[must_use]
    pub fn anchor(&self) -> Option<K> {
        self.anchor
    }

    /// Record the anchor handle and forward it to the caller's own sink.
    pub fn attach_anchor(&mut self, handle: Option<K>, caller: &mut dyn RefSink<K>) {
        ComposedRef::new([&mut self.anchor as &mut dyn RefSink<K>, caller]).set(handle);
    }

    /// Change the requested placement. Takes effect on the next
    /// [`Overlay::layout`] or scroll.
    pub fn set_placement(&mut self, placement: Placement) {
        self.placement = placement;
    }

    /// Feed an input event received at `now`.
    pub fn handle_event(&mut self, event: InputEvent, now: Timestamp) -> Vec<Effect<K>> {
        if self.torn_down {
            return Vec::new();
        }
        let change = self.interaction.handle(event, now);
        self.sync(change)
    }

    /// Fire a due delayed transition.
    pub fn poll(&mut self, now: Timestamp) -> Vec<Effect<K>> {
        if self.torn_down {
            return Vec::new();
        }
        let change = self.interaction.poll(now);
        self.sync(change)
    }

    /// Open or close on behalf of the host.
    pub fn request(&mut self, open: bool) -> Vec<Effect<K>> {
        if self.torn_down {
            return Vec::new();
        }
        let change = self.interaction.request(open);
        self.sync(change)
    }

    /// Apply the host's open value. Ignored when not controlled.
    pub fn set_controlled(&mut self, open: bool) -> Vec<Effect<K>> {
        if self.torn_down {
            return Vec::new();
        }
        self.interaction.set_controlled(open);
        self.sync(None)
    }

    /// Enable or disable the overlay.
    pub fn set_disabled(&mut self, disabled: bool) -> Vec<Effect<K>> {
        if self.torn_down {
            return Vec::new();
        }
        let change = self.interaction.set_disabled(disabled);
        self.sync(change)
    }

    /// Measure (when needed) and commit the content position.
    ///
    /// Call after the layout pass requested by [`Effect::RequestLayout`]. Also
    /// useful to re-place visible content after [`Overlay::set_placement`].
    pub fn layout<H: LayoutHost + ?Sized>(&mut self, host: &mut H) -> Option<PositionResult> {
        if !self.is_open() {
            return None;
        }
        self.measurement.commit(host, self.placement, &self.geometry)
    }

    /// The window was resized: the content must be measured again.
    pub fn window_resized(&mut self) -> Vec<Effect<K>> {
        let mut out = Vec::new();
        if self.listening && self.measurement.invalidate_size() {
            out.push(Effect::RequestLayout);
        }
        out
    }

    /// The window scrolled: re-place against the anchor's new box.
    pub fn window_scrolled<H: LayoutHost + ?Sized>(
        &mut self,
        host: &H,
    ) -> Option<PositionResult> {
        if !self.listening {
            return None;
        }
        self.measurement
            .reposition(host, self.placement, &self.geometry)
    }

    /// Release everything: pending timers, window listeners, mounted content.
    ///
    /// Every later call is a no-op.
    pub fn teardown(&mut self) -> Vec<Effect<K>> {
        if self.torn_down {
            return Vec::new();
        }
        self.torn_down = true;
        self.interaction.cancel_timers();
        let mut out = Vec::new();
        self.close_cycle(&mut out);
        out
    }

    fn sync(&mut self, change: Option<OpenChange>) -> Vec<Effect<K>> {
        let mut out = Vec::new();
        if let Some(change) = change {
            out.push(Effect::OpenChange(change));
        }
        let open = self.interaction.is_open();
        let showing = self.measurement.phase() != MeasurePhase::Closed;
        if open && !showing {
            self.open_cycle(&mut out);
        } else if !open && showing {
            self.interaction.cancel_timers();
            self.close_cycle(&mut out);
        }
        out
    }

    fn open_cycle(&mut self, out: &mut Vec<Effect<K>>) {
        if self.measurement.begin() {
            out.push(Effect::Mount(self.mount));
            out.push(Effect::RequestLayout);
        }
        if !self.listening {
            self.listening = true;
            out.push(Effect::AttachWindowListeners);
        }
    }

    fn close_cycle(&mut self, out: &mut Vec<Effect<K>>) {
        if self.measurement.phase() != MeasurePhase::Closed {
            self.measurement.close();
            out.push(Effect::Unmount);
        }
        if self.listening {
            self.listening = false;
            out.push(Effect::DetachWindowListeners);
        }
    }
}
