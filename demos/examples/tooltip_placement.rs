// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! All twelve placements around one anchor, with clamping near the edge.
//!
//! Run:
//! - `cargo run -p understory_demos --example tooltip_placement`

use kurbo::{Rect, Size};
use understory_overlay::arrow::resolve_arrow;
use understory_overlay::placement::{PlacementConfig, compute_position, overflows};
use understory_overlay::types::Placement;

fn main() {
    env_logger::init();

    let viewport = Size::new(800.0, 600.0);
    let content = Size::new(120.0, 32.0);
    let config = PlacementConfig::default();

    for (label, anchor) in [
        ("centered", Rect::from_origin_size((340.0, 280.0), (120.0, 40.0))),
        ("top-left corner", Rect::from_origin_size((0.0, 0.0), (24.0, 24.0))),
    ] {
        println!("== anchor {label}: {anchor:?} ==");
        for p in Placement::ALL {
            let pos = compute_position(anchor, content, p, &config, viewport);
            let clamped = if overflows(anchor, content, p, &config, viewport) {
                " (clamped)"
            } else {
                ""
            };
            let arrow = resolve_arrow(p);
            println!(
                "  {:<12} top={:>6.1} left={:>6.1} arrow={}-{}{clamped}",
                p.to_string(),
                pos.top(),
                pos.left(),
                arrow.side.as_str(),
                arrow.align.as_str(),
            );
            assert!(pos.rect(content).x0 >= config.viewport_padding);
            assert!(pos.rect(content).y1 <= viewport.height - config.viewport_padding);
        }
    }
}
