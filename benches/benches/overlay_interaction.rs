// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_overlay::measure::LayoutHost;
use understory_overlay::mount::AnyTarget;
use understory_overlay::overlay::{Effect, Overlay, OverlayConfig};
use understory_overlay::time::Timestamp;
use understory_overlay::trigger::InputEvent;

struct Page;

impl LayoutHost for Page {
    fn anchor_bounds(&self) -> Rect {
        Rect::from_origin_size((400.0, 300.0), (80.0, 24.0))
    }

    fn measure_content(&mut self) -> Size {
        Size::new(160.0, 32.0)
    }

    fn viewport_size(&self) -> Size {
        Size::new(1280.0, 720.0)
    }
}

fn hover_cycle(tip: &mut Overlay<u32>, start: Timestamp) -> usize {
    let mut effects = tip.handle_event(InputEvent::PointerEnter, start);
    effects.extend(tip.poll(start + Duration::from_millis(500)));
    if effects.contains(&Effect::RequestLayout) {
        black_box(tip.layout(&mut Page));
    }
    black_box(tip.window_scrolled(&Page));
    effects.extend(tip.handle_event(InputEvent::PointerLeave, start + Duration::from_millis(900)));
    effects.extend(tip.poll(start + Duration::from_millis(1100)));
    effects.len()
}

fn bench_interaction(c: &mut Criterion) {
    let mut group = c.benchmark_group("interaction");
    group.bench_function("hover_open_layout_close", |b| {
        b.iter_batched(
            || Overlay::<u32>::new(OverlayConfig::default(), None, &AnyTarget),
            |mut tip| black_box(hover_cycle(&mut tip, Timestamp::ZERO)),
            BatchSize::SmallInput,
        );
    });
    group.bench_function("hover_jitter_64", |b| {
        b.iter_batched(
            || Overlay::<u32>::new(OverlayConfig::default(), None, &AnyTarget),
            |mut tip| {
                // Pointer grazing the anchor: every enter is cancelled before it fires.
                let mut now = Timestamp::ZERO;
                for _ in 0..64 {
                    black_box(tip.handle_event(InputEvent::PointerEnter, now));
                    now = now + Duration::from_millis(50);
                    black_box(tip.handle_event(InputEvent::PointerLeave, now));
                    now = now + Duration::from_millis(50);
                }
                black_box(tip.next_deadline())
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_interaction);
criterion_main!(benches);
