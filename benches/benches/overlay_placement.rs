// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_overlay::arrow::resolve_arrow;
use understory_overlay::placement::{PlacementConfig, compute_position, overflows};
use understory_overlay::types::Placement;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // xorshift64*
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1_u64 << 53) as f64
    }
}

/// Anchors scattered over (and slightly past) the viewport so a share of them clamp.
fn gen_anchors(n: usize, viewport: Size, seed: u64) -> Vec<Rect> {
    let mut rng = Rng::new(seed);
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let w = 16.0 + rng.next_f64() * 120.0;
        let h = 16.0 + rng.next_f64() * 40.0;
        let x0 = rng.next_f64() * (viewport.width + 40.0) - 20.0;
        let y0 = rng.next_f64() * (viewport.height + 40.0) - 20.0;
        out.push(Rect::from_origin_size((x0, y0), (w, h)));
    }
    out
}

fn bench_compute_position(c: &mut Criterion) {
    let viewport = Size::new(1280.0, 720.0);
    let content = Size::new(180.0, 48.0);
    let config = PlacementConfig::default();
    let mut group = c.benchmark_group("placement");
    for &n in &[256usize, 4096] {
        let anchors = gen_anchors(n, viewport, 0x5eed);
        group.throughput(Throughput::Elements((n * Placement::ALL.len()) as u64));
        group.bench_function(format!("compute_position_all_n{n}"), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for anchor in &anchors {
                    for p in Placement::ALL {
                        let pos = compute_position(*anchor, content, p, &config, viewport);
                        acc += pos.top() + pos.left();
                    }
                }
                black_box(acc);
            });
        });
    }
    let anchors = gen_anchors(1024, viewport, 0xf11b);
    group.bench_function("overflow_then_flip_n1024", |b| {
        b.iter(|| {
            let mut flips = 0_usize;
            for anchor in &anchors {
                let mut p = Placement::TOP;
                if overflows(*anchor, content, p, &config, viewport) {
                    p = p.flipped();
                    flips += 1;
                }
                black_box(compute_position(*anchor, content, p, &config, viewport));
                black_box(resolve_arrow(p));
            }
            black_box(flips);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_compute_position);
criterion_main!(benches);
