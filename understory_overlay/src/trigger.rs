// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger interaction state machine: input events → open/closed.
//!
//! ## Overview
//!
//! [`Interaction`] owns the open state of one overlay. It turns input events
//! from the modalities enabled in its [`Triggers`] into open/close requests,
//! running hover and touch-hold delays through a single
//! [`ExclusiveTimer`](crate::timer::ExclusiveTimer).
//!
//! | Trigger | Event | Effect |
//! |---|---|---|
//! | hover | pointer enter | open after `enter_delay` |
//! | hover | pointer leave | close after `leave_delay` |
//! | focus | focus in / out | open / close now |
//! | click | click | toggle now |
//! | touch | touch start / end | open after `touch_hold_delay` / close now |
//! | any | Escape | close now |
//!
//! Touch is implied by hover or focus, see [`Triggers::effective`].
//!
//! ## Controlled mode
//!
//! When an external open value is supplied at construction the machine is
//! controlled for its whole life. Transitions are still reported as
//! [`OpenChange`] values, but only [`Interaction::set_controlled`] changes what
//! [`Interaction::is_open`] reports.
//!
//! ```
//! use core::time::Duration;
//! use understory_overlay::time::Timestamp;
//! use understory_overlay::trigger::{InputEvent, Interaction, InteractionConfig};
//!
//! let mut i = Interaction::new(InteractionConfig::default(), None);
//! let t0 = Timestamp::ZERO;
//! assert!(i.handle(InputEvent::PointerEnter, t0).is_none());
//! assert_eq!(i.next_deadline(), Some(t0 + Duration::from_millis(500)));
//! let change = i.poll(t0 + Duration::from_millis(500)).unwrap();
//! assert!(change.open && i.is_open());
//! ```

use core::time::Duration;

use bitflags::bitflags;

use crate::time::Timestamp;
use crate::timer::{ExclusiveTimer, TimerKind};

bitflags! {
    /// Input modalities that may open or close an overlay.
    ///
    /// An empty set leaves the overlay dormant: only
    /// [`Interaction::request`] or the external controlled value change it.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Triggers: u8 {
        /// Pointer hover with enter/leave delays.
        const HOVER  = 0b0000_0001;
        /// Keyboard focus, without delay.
        const FOCUS  = 0b0000_0010;
        /// Click toggles.
        const CLICK  = 0b0000_0100;
        /// Opened and closed by the host only.
        const MANUAL = 0b0000_1000;
        /// Touch-and-hold.
        const TOUCH  = 0b0001_0000;
    }
}

impl Default for Triggers {
    fn default() -> Self {
        Self::HOVER | Self::FOCUS
    }
}

impl Triggers {
    /// The set actually honored: [`Triggers::TOUCH`] is added whenever hover or
    /// focus is present.
    #[must_use]
    pub fn effective(self) -> Self {
        if self.intersects(Self::HOVER | Self::FOCUS) {
            self | Self::TOUCH
        } else {
            self
        }
    }
}

bitflags! {
    /// Host event handlers the anchor needs.
    ///
    /// Returned by [`Interaction::bindings`]; handlers for inactive
    /// modalities are left out so the host does not attach them.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct EventBindings: u8 {
        /// Pointer enters the anchor.
        const POINTER_ENTER = 0b0000_0001;
        /// Pointer leaves the anchor.
        const POINTER_LEAVE = 0b0000_0010;
        /// Anchor gains focus.
        const FOCUS_IN      = 0b0000_0100;
        /// Anchor loses focus.
        const FOCUS_OUT     = 0b0000_1000;
        /// Anchor is clicked.
        const CLICK         = 0b0001_0000;
        /// Touch begins on the anchor.
        const TOUCH_START   = 0b0010_0000;
        /// Touch ends or is cancelled.
        const TOUCH_END     = 0b0100_0000;
        /// Key presses, for Escape.
        const KEY_DOWN      = 0b1000_0000;
    }
}

/// Input events delivered by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Pointer entered the anchor.
    PointerEnter,
    /// Pointer left the anchor.
    PointerLeave,
    /// Anchor gained focus.
    FocusIn,
    /// Anchor lost focus.
    FocusOut,
    /// Anchor was clicked.
    Click,
    /// Touch started on the anchor.
    TouchStart,
    /// Touch ended or was cancelled.
    TouchEnd,
    /// The Escape key was pressed.
    Escape,
}

/// What caused an [`OpenChange`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cause {
    /// Hover enter or leave delay elapsed (or was zero).
    Hover,
    /// Focus gained or lost.
    Focus,
    /// Click toggle.
    Click,
    /// Touch hold elapsed or touch ended.
    Touch,
    /// Escape key.
    Escape,
    /// [`Interaction::request`].
    Manual,
    /// The overlay was disabled while open.
    Disabled,
}

/// A requested change of open state.
///
/// In controlled mode this is only a notification; the host decides whether to
/// feed it back through [`Interaction::set_controlled`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct OpenChange {
    /// Requested open state.
    pub open: bool,
    /// What triggered the request.
    pub cause: Cause,
}

/// Configuration for [`Interaction`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InteractionConfig {
    /// Enabled input modalities.
    pub triggers: Triggers,
    /// Hover delay before opening.
    pub enter_delay: Duration,
    /// Hover delay before closing.
    pub leave_delay: Duration,
    /// Touch-and-hold delay before opening.
    pub touch_hold_delay: Duration,
    /// Suppress every transition.
    pub disabled: bool,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            triggers: Triggers::default(),
            enter_delay: Duration::from_millis(500),
            leave_delay: Duration::from_millis(200),
            touch_hold_delay: Duration::from_millis(700),
            disabled: false,
        }
    }
}

impl InteractionConfig {
    /// Replace the trigger set.
    #[must_use]
    pub fn with_triggers(mut self, triggers: Triggers) -> Self {
        self.triggers = triggers;
        self
    }

    /// Replace both hover delays.
    #[must_use]
    pub fn with_hover_delays(mut self, enter: Duration, leave: Duration) -> Self {
        self.enter_delay = enter;
        self.leave_delay = leave;
        self
    }

    /// Replace the touch-and-hold delay.
    #[must_use]
    pub fn with_touch_hold_delay(mut self, delay: Duration) -> Self {
        self.touch_hold_delay = delay;
        self
    }
}

/// Snapshot of the interaction state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InteractionState {
    /// Open state as displayed.
    pub open: bool,
    /// Whether the open state comes from the host.
    pub is_controlled: bool,
}

/// Open/closed state machine for one overlay.
#[derive(Clone, Debug)]
pub struct Interaction {
    config: InteractionConfig,
    internal_open: bool,
    controlled: Option<bool>,
    timer: ExclusiveTimer,
}

impl Interaction {
    /// Create a state machine. Passing `Some(open)` makes it controlled for its
    /// whole life.
    #[must_use]
    pub fn new(config: InteractionConfig, controlled: Option<bool>) -> Self {
        Self {
            config,
            internal_open: false,
            controlled,
            timer: ExclusiveTimer::new(),
        }
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    /// Whether the open state is supplied by the host.
    #[must_use]
    pub fn is_controlled(&self) -> bool {
        self.controlled.is_some()
    }

    /// The displayed open state. Always false while disabled.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.config.disabled && self.controlled.unwrap_or(self.internal_open)
    }

    /// Snapshot of open and controlled flags.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        InteractionState {
            open: self.is_open(),
            is_controlled: self.is_controlled(),
        }
    }

    /// Kind of the pending delayed transition, if any.
    #[must_use]
    pub fn pending_timer(&self) -> Option<TimerKind> {
        self.timer.pending()
    }

    /// When the host should next call [`Interaction::poll`].
    #[must_use]
    pub fn next_deadline(&self) -> Option<Timestamp> {
        self.timer.deadline()
    }

    /// Event handlers the host should attach to the anchor.
    #[must_use]
    pub fn bindings(&self) -> EventBindings {
        if self.config.disabled {
            return EventBindings::empty();
        }
        let triggers = self.config.triggers.effective();
        let mut out = EventBindings::KEY_DOWN;
        if triggers.contains(Triggers::HOVER) {
            out |= EventBindings::POINTER_ENTER | EventBindings::POINTER_LEAVE;
        }
        if triggers.contains(Triggers::FOCUS) {
            out |= EventBindings::FOCUS_IN | EventBindings::FOCUS_OUT;
        }
        if triggers.contains(Triggers::CLICK) {
            out |= EventBindings::CLICK;
        }
        if triggers.contains(Triggers::TOUCH) {
            out |= EventBindings::TOUCH_START | EventBindings::TOUCH_END;
        }
        out
    }

    /// Feed an input event received at `now`.
    pub fn handle(&mut self, event: InputEvent, now: Timestamp) -> Option<OpenChange> {
        if self.config.disabled {
            return None;
        }
        let triggers = self.config.triggers.effective();
        match event {
            InputEvent::PointerEnter if triggers.contains(Triggers::HOVER) => {
                self.delayed(TimerKind::Enter, now)
            }
            InputEvent::PointerLeave if triggers.contains(Triggers::HOVER) => {
                self.delayed(TimerKind::Leave, now)
            }
            InputEvent::FocusIn if triggers.contains(Triggers::FOCUS) => {
                self.timer.cancel();
                self.transition(true, Cause::Focus)
            }
            InputEvent::FocusOut if triggers.contains(Triggers::FOCUS) => {
                self.timer.cancel();
                self.transition(false, Cause::Focus)
            }
            InputEvent::Click if triggers.contains(Triggers::CLICK) => {
                self.timer.cancel();
                self.transition(!self.is_open(), Cause::Click)
            }
            InputEvent::TouchStart if triggers.contains(Triggers::TOUCH) => {
                self.delayed(TimerKind::TouchHold, now)
            }
            InputEvent::TouchEnd if triggers.contains(Triggers::TOUCH) => {
                self.timer.cancel_kind(TimerKind::TouchHold);
                if self.is_open() {
                    self.transition(false, Cause::Touch)
                } else {
                    None
                }
            }
            InputEvent::Escape => {
                self.timer.cancel();
                self.transition(false, Cause::Escape)
            }
            _ => None,
        }
    }

    /// Fire the pending timer if its deadline is at or before `now`.
    pub fn poll(&mut self, now: Timestamp) -> Option<OpenChange> {
        if self.config.disabled {
            return None;
        }
        match self.timer.take_due(now)? {
            TimerKind::Enter => self.transition(true, Cause::Hover),
            TimerKind::Leave => self.transition(false, Cause::Hover),
            TimerKind::TouchHold => self.transition(true, Cause::Touch),
        }
    }

    /// Open or close on behalf of the host, cancelling pending timers.
    ///
    /// This is how a dormant or [`Triggers::MANUAL`] overlay is driven when it
    /// is not controlled.
    pub fn request(&mut self, open: bool) -> Option<OpenChange> {
        if self.config.disabled {
            return None;
        }
        self.timer.cancel();
        self.transition(open, Cause::Manual)
    }

    /// Update the external open value of a controlled machine.
    ///
    /// Ignored for uncontrolled machines, which stay uncontrolled for life.
    pub fn set_controlled(&mut self, open: bool) {
        match &mut self.controlled {
            Some(value) => *value = open,
            None => log::debug!("ignoring external open value on uncontrolled overlay"),
        }
    }

    /// Enable or disable the machine.
    ///
    /// Disabling cancels pending timers and, if the overlay was showing,
    /// reports it as closed.
    pub fn set_disabled(&mut self, disabled: bool) -> Option<OpenChange> {
        if disabled == self.config.disabled {
            return None;
        }
        let was_open = self.is_open();
        self.config.disabled = disabled;
        if !disabled {
            return None;
        }
        self.timer.cancel();
        self.internal_open = false;
        was_open.then_some(OpenChange {
            open: false,
            cause: Cause::Disabled,
        })
    }

    /// Cancel every pending timer.
    pub fn cancel_timers(&mut self) {
        self.timer.cancel();
    }

    fn delayed(&mut self, kind: TimerKind, now: Timestamp) -> Option<OpenChange> {
        let (delay, open, cause) = match kind {
            TimerKind::Enter => (self.config.enter_delay, true, Cause::Hover),
            TimerKind::Leave => (self.config.leave_delay, false, Cause::Hover),
            TimerKind::TouchHold => (self.config.touch_hold_delay, true, Cause::Touch),
        };
        if delay.is_zero() {
            self.timer.cancel();
            return self.transition(open, cause);
        }
        self.timer.schedule(kind, now, delay);
        None
    }

    fn transition(&mut self, open: bool, cause: Cause) -> Option<OpenChange> {
        if !open {
            self.timer.cancel();
        }
        if open == self.is_open() {
            return None;
        }
        log::debug!("overlay {} by {:?}", if open { "opens" } else { "closes" }, cause);
        if self.controlled.is_none() {
            self.internal_open = open;
        }
        Some(OpenChange { open, cause })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Timestamp {
        Timestamp::from_millis(v)
    }

    fn hover_only(enter: u64, leave: u64) -> InteractionConfig {
        InteractionConfig::default()
            .with_triggers(Triggers::HOVER)
            .with_hover_delays(Duration::from_millis(enter), Duration::from_millis(leave))
    }

    #[test]
    fn quick_hover_never_opens() {
        let mut i = Interaction::new(hover_only(100, 200), None);
        assert_eq!(i.handle(InputEvent::PointerEnter, ms(0)), None);
        assert_eq!(i.handle(InputEvent::PointerLeave, ms(40)), None);
        for t in (40..=400).step_by(10) {
            assert_eq!(i.poll(ms(t)), None);
            assert!(!i.is_open());
        }
    }

    #[test]
    fn leave_cancels_pending_enter() {
        let mut i = Interaction::new(hover_only(100, 200), None);
        i.handle(InputEvent::PointerEnter, ms(0));
        assert_eq!(i.pending_timer(), Some(TimerKind::Enter));
        assert_eq!(i.poll(ms(50)), None);
        i.handle(InputEvent::PointerLeave, ms(50));
        assert_eq!(i.pending_timer(), Some(TimerKind::Leave));
        assert_eq!(i.poll(ms(100)), None);
        assert_eq!(i.poll(ms(250)), None);
        assert!(!i.is_open());
        assert_eq!(i.pending_timer(), None);
    }

    #[test]
    fn hover_opens_then_closes_after_delays() {
        let mut i = Interaction::new(hover_only(100, 200), None);
        i.handle(InputEvent::PointerEnter, ms(0));
        assert_eq!(i.poll(ms(99)), None);
        assert_eq!(
            i.poll(ms(100)),
            Some(OpenChange {
                open: true,
                cause: Cause::Hover
            })
        );
        i.handle(InputEvent::PointerLeave, ms(300));
        assert!(i.is_open());
        assert_eq!(i.next_deadline(), Some(ms(500)));
        assert_eq!(i.poll(ms(500)).map(|c| c.open), Some(false));
        assert!(!i.is_open());
    }

    #[test]
    fn reentering_keeps_overlay_open() {
        let mut i = Interaction::new(hover_only(100, 200), None);
        i.handle(InputEvent::PointerEnter, ms(0));
        i.poll(ms(100));
        i.handle(InputEvent::PointerLeave, ms(150));
        i.handle(InputEvent::PointerEnter, ms(200));
        assert_eq!(i.pending_timer(), Some(TimerKind::Enter));
        // Leave timer was replaced; the enter timer finds it already open.
        assert_eq!(i.poll(ms(350)), None);
        assert!(i.is_open());
    }

    #[test]
    fn zero_delay_is_synchronous() {
        let mut i = Interaction::new(hover_only(0, 0), None);
        assert_eq!(
            i.handle(InputEvent::PointerEnter, ms(0)).map(|c| c.open),
            Some(true)
        );
        assert_eq!(i.pending_timer(), None);
        assert_eq!(
            i.handle(InputEvent::PointerLeave, ms(1)).map(|c| c.open),
            Some(false)
        );
    }

    #[test]
    fn focus_is_immediate_and_cancels_timers() {
        let mut i = Interaction::new(InteractionConfig::default(), None);
        i.handle(InputEvent::PointerEnter, ms(0));
        assert_eq!(
            i.handle(InputEvent::FocusIn, ms(10)),
            Some(OpenChange {
                open: true,
                cause: Cause::Focus
            })
        );
        assert_eq!(i.pending_timer(), None);
        assert_eq!(
            i.handle(InputEvent::FocusOut, ms(20)).map(|c| c.open),
            Some(false)
        );
    }

    #[test]
    fn click_toggles() {
        let mut i = Interaction::new(
            InteractionConfig::default().with_triggers(Triggers::CLICK),
            None,
        );
        assert_eq!(i.handle(InputEvent::Click, ms(0)).map(|c| c.open), Some(true));
        assert_eq!(i.handle(InputEvent::Click, ms(1)).map(|c| c.open), Some(false));
        // Hover and focus are not in the set.
        assert_eq!(i.handle(InputEvent::PointerEnter, ms(2)), None);
        assert_eq!(i.handle(InputEvent::FocusIn, ms(2)), None);
        assert_eq!(i.pending_timer(), None);
    }

    #[test]
    fn touch_hold_opens_and_release_closes() {
        let mut i = Interaction::new(
            InteractionConfig::default().with_triggers(Triggers::FOCUS),
            None,
        );
        i.handle(InputEvent::TouchStart, ms(0));
        assert_eq!(i.pending_timer(), Some(TimerKind::TouchHold));
        assert_eq!(i.poll(ms(699)), None);
        assert_eq!(
            i.poll(ms(700)),
            Some(OpenChange {
                open: true,
                cause: Cause::Touch
            })
        );
        assert_eq!(
            i.handle(InputEvent::TouchEnd, ms(900)).map(|c| c.open),
            Some(false)
        );
    }

    #[test]
    fn short_tap_does_not_open() {
        let mut i = Interaction::new(InteractionConfig::default(), None);
        i.handle(InputEvent::TouchStart, ms(0));
        assert_eq!(i.handle(InputEvent::TouchEnd, ms(100)), None);
        assert_eq!(i.poll(ms(1000)), None);
        assert!(!i.is_open());
    }

    #[test]
    fn touch_requires_hover_or_focus_unless_explicit() {
        let click = Interaction::new(
            InteractionConfig::default().with_triggers(Triggers::CLICK),
            None,
        );
        assert!(!click.bindings().contains(EventBindings::TOUCH_START));
        let touch = Interaction::new(
            InteractionConfig::default().with_triggers(Triggers::TOUCH),
            None,
        );
        assert!(touch.bindings().contains(EventBindings::TOUCH_START));
    }

    #[test]
    fn escape_closes_from_any_trigger_set() {
        for triggers in [
            Triggers::HOVER,
            Triggers::FOCUS,
            Triggers::CLICK,
            Triggers::MANUAL,
            Triggers::empty(),
        ] {
            let mut i = Interaction::new(
                InteractionConfig::default().with_triggers(triggers),
                None,
            );
            i.request(true);
            assert!(i.is_open());
            assert_eq!(
                i.handle(InputEvent::Escape, ms(0)),
                Some(OpenChange {
                    open: false,
                    cause: Cause::Escape
                })
            );
            assert!(!i.is_open());
        }
    }

    #[test]
    fn escape_cancels_pending_enter() {
        let mut i = Interaction::new(InteractionConfig::default(), None);
        i.handle(InputEvent::PointerEnter, ms(0));
        assert_eq!(i.handle(InputEvent::Escape, ms(10)), None);
        assert_eq!(i.pending_timer(), None);
        assert_eq!(i.poll(ms(1000)), None);
    }

    #[test]
    fn controlled_state_only_follows_external_value() {
        let triggers = Triggers::HOVER | Triggers::FOCUS | Triggers::CLICK;
        let mut i = Interaction::new(
            InteractionConfig::default().with_triggers(triggers),
            Some(false),
        );
        assert!(i.is_controlled());
        assert_eq!(i.handle(InputEvent::FocusIn, ms(0)).map(|c| c.open), Some(true));
        assert!(!i.is_open());
        assert_eq!(i.handle(InputEvent::Click, ms(1)).map(|c| c.open), Some(true));
        i.handle(InputEvent::PointerEnter, ms(2));
        assert_eq!(i.poll(ms(502)).map(|c| c.open), Some(true));
        assert!(!i.is_open());

        i.set_controlled(true);
        assert!(i.is_open());
        assert_eq!(
            i.handle(InputEvent::Escape, ms(600)).map(|c| c.open),
            Some(false)
        );
        assert!(i.is_open());
        assert_eq!(
            i.state(),
            InteractionState {
                open: true,
                is_controlled: true
            }
        );
    }

    #[test]
    fn uncontrolled_ignores_external_value() {
        let mut i = Interaction::new(InteractionConfig::default(), None);
        i.set_controlled(true);
        assert!(!i.is_controlled());
        assert!(!i.is_open());
    }

    #[test]
    fn dormant_set_only_opens_manually() {
        let mut i = Interaction::new(
            InteractionConfig::default().with_triggers(Triggers::empty()),
            None,
        );
        assert_eq!(i.bindings(), EventBindings::KEY_DOWN);
        for ev in [
            InputEvent::PointerEnter,
            InputEvent::FocusIn,
            InputEvent::Click,
            InputEvent::TouchStart,
        ] {
            assert_eq!(i.handle(ev, ms(0)), None);
        }
        assert_eq!(i.poll(ms(5000)), None);
        assert_eq!(
            i.request(true),
            Some(OpenChange {
                open: true,
                cause: Cause::Manual
            })
        );
    }

    #[test]
    fn disabled_suppresses_everything() {
        let cfg = InteractionConfig {
            disabled: true,
            ..InteractionConfig::default()
        };
        let mut i = Interaction::new(cfg, Some(true));
        assert!(!i.is_open());
        assert!(i.bindings().is_empty());
        assert_eq!(i.handle(InputEvent::FocusIn, ms(0)), None);
        assert_eq!(i.request(true), None);

        assert_eq!(i.set_disabled(false), None);
        assert!(i.is_open());
        assert_eq!(
            i.set_disabled(true),
            Some(OpenChange {
                open: false,
                cause: Cause::Disabled
            })
        );
        assert!(!i.is_open());
    }

    #[test]
    fn disabling_cancels_timers() {
        let mut i = Interaction::new(InteractionConfig::default(), None);
        i.handle(InputEvent::PointerEnter, ms(0));
        assert_eq!(i.set_disabled(true), None);
        assert_eq!(i.pending_timer(), None);
        i.set_disabled(false);
        assert_eq!(i.poll(ms(1000)), None);
        assert!(!i.is_open());
    }

    #[test]
    fn bindings_follow_trigger_set() {
        let i = Interaction::new(
            InteractionConfig::default().with_triggers(Triggers::FOCUS),
            None,
        );
        let b = i.bindings();
        assert!(!b.intersects(EventBindings::POINTER_ENTER | EventBindings::POINTER_LEAVE));
        assert!(b.contains(
            EventBindings::FOCUS_IN | EventBindings::FOCUS_OUT | EventBindings::KEY_DOWN
        ));
        assert!(b.contains(EventBindings::TOUCH_START | EventBindings::TOUCH_END));
        assert!(!b.contains(EventBindings::CLICK));

        let all = Interaction::new(
            InteractionConfig::default().with_triggers(Triggers::all()),
            None,
        );
        assert_eq!(all.bindings(), EventBindings::all());
    }
}
