// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};

use easel_transform::EngineConfig;
use easel_transform::drag::DragEngine;
use easel_transform::gesture::GestureEngine;
use easel_transform::resize::{ALL_DIRECTIONS, Direction, ResizeEngine};

const BOUNDS: Size = Size::new(794.0, 1123.0);

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

    /// A delta component in roughly [-16, 16), like real pointer samples.
    fn next_delta(&mut self) -> f64 {
        f64::from(self.next_u32() % 32) - 16.0
    }
}

fn delta_stream(n: usize, seed: u64) -> Vec<Vec2> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| Vec2::new(rng.next_delta(), rng.next_delta()))
        .collect()
}

/// A stream that spends most of its time shoving the element out of bounds,
/// so the correction-debt path dominates.
fn overshoot_stream(n: usize, seed: u64) -> Vec<Vec2> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|i| {
            let wander = Vec2::new(rng.next_delta(), rng.next_delta());
            if i % 16 < 12 {
                wander + Vec2::new(60.0, 40.0)
            } else {
                wander - Vec2::new(200.0, 140.0)
            }
        })
        .collect()
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag");

    for (name, deltas) in [
        ("wander_1000", delta_stream(1000, 7)),
        ("overshoot_1000", overshoot_stream(1000, 7)),
    ] {
        group.bench_function(name, |b| {
            b.iter_batched(
                || DragEngine::new(Point::new(300.0, 400.0), Size::new(120.0, 80.0)),
                |mut engine| {
                    for delta in &deltas {
                        black_box(engine.on_delta(*delta, BOUNDS));
                    }
                    engine
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize");
    let deltas = delta_stream(1000, 11);

    // One corner, one edge: the two- and one-axis paths.
    for direction in [Direction::SouthEast, Direction::North] {
        group.bench_function(format!("{direction:?}_wander_1000"), |b| {
            b.iter_batched(
                || {
                    ResizeEngine::new(
                        direction,
                        Point::new(300.0, 400.0),
                        Size::new(120.0, 80.0),
                        EngineConfig::default(),
                    )
                },
                |mut engine| {
                    for delta in &deltas {
                        black_box(engine.on_delta(*delta, BOUNDS));
                    }
                    engine
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_gesture_cycle(c: &mut Criterion) {
    // Full gesture lifecycles: press, 32 samples, release, for every handle.
    let deltas = delta_stream(32, 23);

    c.bench_function("gesture/press_stream_release_all_directions", |b| {
        b.iter(|| {
            let mut gesture = GestureEngine::new(EngineConfig::default());
            for direction in ALL_DIRECTIONS {
                gesture.begin_resize(direction, Point::new(300.0, 400.0), Size::new(120.0, 80.0));
                for delta in &deltas {
                    black_box(gesture.on_delta(*delta, BOUNDS));
                }
                gesture.release();
            }
            gesture
        });
    });
}

criterion_group!(benches, bench_drag, bench_resize, bench_gesture_cycle);
criterion_main!(benches);
