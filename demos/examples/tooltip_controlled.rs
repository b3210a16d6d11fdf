// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controlled tooltip: the host owns the open state.
//!
//! The overlay reports what it would like to do; the host decides. Here the
//! host accepts every request except a click-driven close, then Escape wins.
//!
//! Run:
//! - `cargo run -p understory_demos --example tooltip_controlled`

use understory_overlay::mount::AnyTarget;
use understory_overlay::overlay::{Effect, Overlay, OverlayConfig};
use understory_overlay::time::Timestamp;
use understory_overlay::trigger::{Cause, InputEvent, InteractionConfig, Triggers};

fn main() {
    env_logger::init();

    let config = OverlayConfig {
        interaction: InteractionConfig::default().with_triggers(Triggers::CLICK),
        ..OverlayConfig::default()
    };
    let mut host_open = false;
    let mut tip: Overlay<u32> = Overlay::new(config, Some(host_open), &AnyTarget);

    for (at, event) in [
        (0, InputEvent::Click),
        (10, InputEvent::Click),
        (20, InputEvent::Escape),
    ] {
        let effects = tip.handle_event(event, Timestamp::from_millis(at));
        println!("{event:?} -> {effects:?}");
        for effect in effects {
            if let Effect::OpenChange(change) = effect {
                if change.cause == Cause::Click && !change.open {
                    println!("  host keeps it open");
                    continue;
                }
                host_open = change.open;
                let applied = tip.set_controlled(host_open);
                println!("  host applies open={host_open}: {applied:?}");
            }
        }
        println!("  is_open={} aria={:?}", tip.is_open(), tip.anchor_aria());
    }

    assert!(!tip.is_open());
    assert!(tip.teardown().is_empty());
}
