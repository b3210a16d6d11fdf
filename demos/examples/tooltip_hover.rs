// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tooltip driven by a scripted timeline.
//!
//! A fake page replays pointer events with timestamps, polls the overlay at
//! its deadlines, and applies the returned effects.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example tooltip_hover`

use kurbo::{Rect, Size};
use understory_overlay::handle::NoSink;
use understory_overlay::measure::{LayoutHost, Presentation};
use understory_overlay::mount::AnyTarget;
use understory_overlay::overlay::{Effect, Overlay, OverlayConfig};
use understory_overlay::time::Timestamp;
use understory_overlay::trigger::InputEvent;

struct Page {
    button: Rect,
    tooltip: Size,
    listening: bool,
}

impl LayoutHost for Page {
    fn anchor_bounds(&self) -> Rect {
        self.button
    }

    fn measure_content(&mut self) -> Size {
        self.tooltip
    }

    fn viewport_size(&self) -> Size {
        Size::new(1280.0, 720.0)
    }
}

fn apply(page: &mut Page, tip: &mut Overlay<u32>, effects: Vec<Effect<u32>>) {
    for effect in effects {
        println!("  effect: {effect:?}");
        match effect {
            Effect::RequestLayout => {
                let pos = tip.layout(page);
                println!("  layout: {pos:?}");
            }
            Effect::AttachWindowListeners => page.listening = true,
            Effect::DetachWindowListeners => page.listening = false,
            _ => {}
        }
    }
}

fn main() {
    env_logger::init();

    let mut page = Page {
        button: Rect::from_origin_size((600.0, 20.0), (96.0, 36.0)),
        tooltip: Size::new(140.0, 28.0),
        listening: false,
    };
    let mut tip: Overlay<u32> = Overlay::new(OverlayConfig::default(), None, &AnyTarget);
    // The page keeps no handle of its own to the button.
    tip.attach_anchor(Some(1), &mut NoSink);
    println!("anchor: {:?} bindings: {:?}", tip.anchor(), tip.bindings());
    let mut opened_at = None;

    let script = [
        (0, InputEvent::PointerEnter),
        (120, InputEvent::PointerLeave),
        (300, InputEvent::PointerEnter),
        (1500, InputEvent::PointerLeave),
    ];

    for (at, event) in script {
        let now = Timestamp::from_millis(at);
        // Fire anything that came due before this event.
        while let Some(deadline) = tip.next_deadline().filter(|d| *d <= now) {
            println!("[{deadline:?}] timer");
            let effects = tip.poll(deadline);
            apply(&mut page, &mut tip, effects);
            if tip.is_open() && opened_at.is_none() {
                opened_at = Some(deadline);
            }
        }
        println!("[{now:?}] {event:?}");
        let was_open = tip.is_open();
        let effects = tip.handle_event(event, now);
        apply(&mut page, &mut tip, effects);
        if was_open
            && event == InputEvent::PointerLeave
            && let Some(since) = opened_at
        {
            println!("  shown for {:?}", now.saturating_duration_since(since));
        }
        if matches!(tip.presentation(), Presentation::Visible { .. }) {
            println!("  aria: {:?}", tip.anchor_aria());
        }
    }
    if let Some(deadline) = tip.next_deadline() {
        println!("[{deadline:?}] timer");
        let effects = tip.poll(deadline);
        apply(&mut page, &mut tip, effects);
    }

    assert!(!tip.is_open());
    assert!(!page.listening);
    assert_eq!(tip.presentation(), Presentation::Unmounted);
}
