// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::Cell;
use std::rc::Rc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Vec2};

use easel_pointer::subscription::EventSource;
use easel_pointer::tracker::PointerTracker;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn next_coord(&mut self, upper: u32) -> f64 {
        f64::from(self.next_u32() % upper)
    }
}

fn position_stream(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| Point::new(rng.next_coord(1200), rng.next_coord(900)))
        .collect()
}

fn bench_tracker(c: &mut Criterion) {
    let mut group = c.benchmark_group("tracker");
    let positions = position_stream(1000, 3);

    group.bench_function("unscoped_1000", |b| {
        b.iter(|| {
            let mut tracker = PointerTracker::new();
            for position in &positions {
                black_box(tracker.pointer_move(*position));
            }
            tracker
        });
    });

    // Roughly half the positions fall outside the scope, exercising the
    // suspend/re-enter path.
    group.bench_function("scoped_1000", |b| {
        b.iter(|| {
            let mut tracker = PointerTracker::scoped(Rect::new(0.0, 0.0, 600.0, 900.0));
            for position in &positions {
                black_box(tracker.pointer_move(*position));
            }
            tracker
        });
    });

    group.bench_function("scroll_folding_1000", |b| {
        b.iter(|| {
            let mut tracker = PointerTracker::new();
            tracker.pointer_move(Point::new(400.0, 400.0));
            for i in 0..1000_u32 {
                black_box(tracker.scroll_by(Vec2::new(0.0, f64::from(i % 7))));
            }
            tracker
        });
    });

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    for listeners in [1_usize, 8] {
        group.bench_function(format!("emit_1000_to_{listeners}"), |b| {
            let source = EventSource::<Vec2>::new();
            let sum = Rc::new(Cell::new(0.0_f64));
            let _guards: Vec<_> = (0..listeners)
                .map(|_| {
                    let sum = Rc::clone(&sum);
                    source.subscribe(move |delta: &Vec2| sum.set(sum.get() + delta.x))
                })
                .collect();

            b.iter(|| {
                for i in 0..1000_u32 {
                    source.emit(&Vec2::new(f64::from(i % 13), 0.0));
                }
                sum.get()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tracker, bench_dispatch);
criterion_main!(benches);
