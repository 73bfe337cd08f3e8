// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize sub-engine: 8-direction bounded resizing.
//!
//! Each of the 8 handles around an element maps to a fixed
//! [`DirectionProfile`]: which size axes change, with what sign, and
//! whether the element shifts so the opposite edge stays anchored. The
//! convention, inherited from the handle sitting on the moving edge rather
//! than the centroid, is to shift the position by **half** the pointer
//! delta on a north/west axis.
//!
//! | Direction | Δheight | Δwidth | x shift | y shift |
//! |-----------|---------|--------|---------|---------|
//! | NW        | −dy     | −dx    | dx/2    | dy/2    |
//! | N         | −dy     | 0      | 0       | dy/2    |
//! | NE        | −dy     | +dx    | 0       | dy/2    |
//! | W         | 0       | −dx    | dx/2    | 0       |
//! | E         | 0       | +dx    | 0       | 0       |
//! | SW        | +dy     | −dx    | dx/2    | 0       |
//! | S         | +dy     | 0      | 0       | 0       |
//! | SE        | +dy     | +dx    | 0       | 0       |
//!
//! A minimum-size floor prevents collapse, and the same per-axis debt
//! mechanism as dragging (see [`crate::accumulator`]) keeps the handle
//! feeling attached to the pointer when a resize is pushed past the floor
//! or past a container edge: the debt is carried in *size* units,
//! sign-adjusted by the direction, so folding it back is a plain addition
//! for every direction.

use kurbo::{Point, Size, Vec2};

use crate::EngineConfig;
use crate::accumulator::AxisCorrection;

/// One of the 8 resize handles, named by compass direction.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    /// Top-left handle.
    NorthWest,
    /// Top-middle handle.
    North,
    /// Top-right handle.
    NorthEast,
    /// Left-middle handle.
    West,
    /// Right-middle handle.
    East,
    /// Bottom-left handle.
    SouthWest,
    /// Bottom-middle handle.
    South,
    /// Bottom-right handle.
    SouthEast,
}

/// All 8 directions, in table order.
pub const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::NorthWest,
    Direction::North,
    Direction::NorthEast,
    Direction::West,
    Direction::East,
    Direction::SouthWest,
    Direction::South,
    Direction::SouthEast,
];

/// How a direction couples pointer deltas to size and position changes.
///
/// `Δwidth = width_sign * dx`, `Δheight = height_sign * dy`; a sign of zero
/// means the axis does not participate. `shifts_x`/`shifts_y` mark the
/// west/north directions whose handle sits on the low edge, so the position
/// shifts by half the pointer delta to keep the opposite edge anchored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionProfile {
    /// Sign applied to `dx` to produce the width change.
    pub width_sign: f64,
    /// Sign applied to `dy` to produce the height change.
    pub height_sign: f64,
    /// Whether the x position shifts by `dx/2` (west-side handles).
    pub shifts_x: bool,
    /// Whether the y position shifts by `dy/2` (north-side handles).
    pub shifts_y: bool,
}

impl Direction {
    /// Returns the axis-coupling profile for this direction.
    #[must_use]
    pub const fn profile(self) -> DirectionProfile {
        match self {
            Self::NorthWest => DirectionProfile {
                width_sign: -1.0,
                height_sign: -1.0,
                shifts_x: true,
                shifts_y: true,
            },
            Self::North => DirectionProfile {
                width_sign: 0.0,
                height_sign: -1.0,
                shifts_x: false,
                shifts_y: true,
            },
            Self::NorthEast => DirectionProfile {
                width_sign: 1.0,
                height_sign: -1.0,
                shifts_x: false,
                shifts_y: true,
            },
            Self::West => DirectionProfile {
                width_sign: -1.0,
                height_sign: 0.0,
                shifts_x: true,
                shifts_y: false,
            },
            Self::East => DirectionProfile {
                width_sign: 1.0,
                height_sign: 0.0,
                shifts_x: false,
                shifts_y: false,
            },
            Self::SouthWest => DirectionProfile {
                width_sign: -1.0,
                height_sign: 1.0,
                shifts_x: true,
                shifts_y: false,
            },
            Self::South => DirectionProfile {
                width_sign: 0.0,
                height_sign: 1.0,
                shifts_x: false,
                shifts_y: false,
            },
            Self::SouthEast => DirectionProfile {
                width_sign: 1.0,
                height_sign: 1.0,
                shifts_x: false,
                shifts_y: false,
            },
        }
    }
}

/// State of a single resize gesture.
///
/// Owns the element's geometry exclusively for the duration of the gesture.
/// Position and size are coupled — a size change without its paired
/// position shift would visibly teleport the anchored edge — so
/// [`ResizeEngine::on_delta`] always returns (and callers always commit)
/// both together.
#[derive(Clone, Debug)]
pub struct ResizeEngine {
    direction: Direction,
    config: EngineConfig,
    position: Point,
    size: Size,
    width: AxisCorrection,
    height: AxisCorrection,
}

impl ResizeEngine {
    /// Starts a resize from the given handle and the element's current geometry.
    #[must_use]
    pub fn new(direction: Direction, position: Point, size: Size, config: EngineConfig) -> Self {
        Self {
            direction,
            config,
            position,
            size,
            width: AxisCorrection::new(),
            height: AxisCorrection::new(),
        }
    }

    /// Returns the handle that started this gesture.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the running (committed) position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the running (committed) size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the outstanding (width, height) debt in size units.
    #[must_use]
    pub fn debt(&self) -> Vec2 {
        Vec2::new(self.width.debt(), self.height.debt())
    }

    /// Applies one pointer delta against a fresh bounds snapshot and returns
    /// the new `(position, size)` pair.
    ///
    /// The two axes are processed independently per the direction profile,
    /// then the position is re-clamped into `[0, bound − size]` using the
    /// already-updated size, so the element never leaves the container even
    /// transiently.
    pub fn on_delta(&mut self, delta: Vec2, bounds: Size) -> (Point, Size) {
        let profile = self.direction.profile();
        let floor = self.config.min_size;

        if profile.width_sign != 0.0 {
            let (pos, size) = resize_axis(
                &mut self.width,
                self.position.x,
                self.size.width,
                delta.x,
                profile.width_sign,
                profile.shifts_x,
                bounds.width,
                floor,
            );
            self.position.x = pos;
            self.size.width = size;
        }
        if profile.height_sign != 0.0 {
            let (pos, size) = resize_axis(
                &mut self.height,
                self.position.y,
                self.size.height,
                delta.y,
                profile.height_sign,
                profile.shifts_y,
                bounds.height,
                floor,
            );
            self.position.y = pos;
            self.size.height = size;
        }

        // A north/west grow can still push the far edge out when the near
        // edge pins; cap the size against the container before re-clamping
        // the position with the updated size.
        self.size.width = self
            .size
            .width
            .min((bounds.width - self.position.x).max(floor));
        self.size.height = self
            .size
            .height
            .min((bounds.height - self.position.y).max(floor));

        self.position.x = self
            .position
            .x
            .clamp(0.0, (bounds.width - self.size.width).max(0.0));
        self.position.y = self
            .position
            .y
            .clamp(0.0, (bounds.height - self.size.height).max(0.0));

        (self.position, self.size)
    }
}

/// One axis of a resize step.
///
/// Converts the raw pointer delta into a size change via `sign`, bounds the
/// size into `[floor, cap]` through the debt accumulator, and derives the
/// anchor-preserving position shift from the size change that was actually
/// applied (half of it, per the handle-on-edge convention). `cap` encodes
/// the container constraint for the edge this direction moves: the low edge
/// pinning at zero for west/north handles, the high edge pinning at the
/// container extent otherwise.
fn resize_axis(
    corr: &mut AxisCorrection,
    pos: f64,
    size: f64,
    d: f64,
    sign: f64,
    shifts: bool,
    bound: f64,
    floor: f64,
) -> (f64, f64) {
    // With the half-delta shift, the low edge moves by half the applied
    // size change, so it reaches zero once the size has grown by 2*pos.
    let cap = if shifts {
        size + 2.0 * pos.max(0.0)
    } else {
        bound - pos
    };
    let cap = cap.max(floor);

    let new_size = corr.apply(size, sign * d, floor, cap);
    let applied = new_size - size;
    let new_pos = if shifts { pos - applied / 2.0 } else { pos };
    (new_pos, new_size)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{ALL_DIRECTIONS, Direction, ResizeEngine};
    use crate::EngineConfig;

    const BOUNDS: Size = Size::new(800.0, 600.0);

    fn engine(direction: Direction) -> ResizeEngine {
        ResizeEngine::new(
            direction,
            Point::new(100.0, 100.0),
            Size::new(200.0, 100.0),
            EngineConfig::default(),
        )
    }

    #[test]
    fn east_grows_with_west_edge_anchored() {
        let mut resize = engine(Direction::East);
        let (pos, size) = resize.on_delta(Vec2::new(30.0, 0.0), BOUNDS);
        assert_eq!(size, Size::new(230.0, 100.0));
        assert_eq!(pos, Point::new(100.0, 100.0));
    }

    #[test]
    fn north_west_grows_both_axes_with_half_shift() {
        let mut resize = engine(Direction::NorthWest);
        let (pos, size) = resize.on_delta(Vec2::new(-20.0, -10.0), BOUNDS);
        assert_eq!(size, Size::new(220.0, 110.0));
        assert_eq!(pos, Point::new(90.0, 95.0));
    }

    #[test]
    fn north_shrink_moves_top_edge_down() {
        let mut resize = engine(Direction::North);
        let (pos, size) = resize.on_delta(Vec2::new(0.0, 40.0), BOUNDS);
        assert_eq!(size, Size::new(200.0, 60.0));
        assert_eq!(pos, Point::new(100.0, 120.0));
    }

    #[test]
    fn single_axis_directions_ignore_the_other_axis() {
        let mut resize = engine(Direction::South);
        let (pos, size) = resize.on_delta(Vec2::new(50.0, 20.0), BOUNDS);
        assert_eq!(size, Size::new(200.0, 120.0));
        assert_eq!(pos, Point::new(100.0, 100.0));

        let mut resize = engine(Direction::West);
        let (pos, size) = resize.on_delta(Vec2::new(10.0, 50.0), BOUNDS);
        assert_eq!(size, Size::new(190.0, 100.0));
        assert_eq!(pos, Point::new(105.0, 100.0));
    }

    #[test]
    fn shrinking_pins_at_the_floor() {
        let mut resize = engine(Direction::SouthEast);
        let (_, size) = resize.on_delta(Vec2::new(-400.0, -300.0), BOUNDS);
        assert_eq!(size, Size::new(15.0, 15.0));
        // width: 200 - 400 = -200 → floor 15, debt -215
        // height: 100 - 300 = -200 → floor 15, debt -215
        assert_eq!(resize.debt(), Vec2::new(-215.0, -215.0));

        // Still below zero debt: size stays pinned.
        let (_, size) = resize.on_delta(Vec2::new(-10.0, -10.0), BOUNDS);
        assert_eq!(size, Size::new(15.0, 15.0));

        // Reversal past the debt grows again by the overshoot only.
        let (_, size) = resize.on_delta(Vec2::new(230.0, 230.0), BOUNDS);
        assert_eq!(size, Size::new(20.0, 20.0));
        assert_eq!(resize.debt(), Vec2::ZERO);
    }

    #[test]
    fn floor_pin_respects_direction_sign() {
        // North shrinks by moving the pointer down: debt accrues in size
        // units, so coming back up grows the element again.
        let mut resize = engine(Direction::North);
        let (_, size) = resize.on_delta(Vec2::new(0.0, 120.0), BOUNDS);
        assert_eq!(size.height, 15.0);
        assert_eq!(resize.debt().y, -35.0);

        let (pos, size) = resize.on_delta(Vec2::new(0.0, -50.0), BOUNDS);
        assert_eq!(size.height, 30.0);
        assert_eq!(resize.debt().y, 0.0);
        // Top edge moves back up by half the applied growth.
        assert!(pos.y < 150.0);
    }

    #[test]
    fn growing_east_pins_at_container_edge() {
        let mut resize = engine(Direction::East);
        // Room to the right: 800 - 100 - 200 = 500.
        let (pos, size) = resize.on_delta(Vec2::new(600.0, 0.0), BOUNDS);
        assert_eq!(size.width, 700.0);
        assert_eq!(pos.x, 100.0);
        assert_eq!(resize.debt().x, 100.0);

        // The pointer must come back before the element shrinks again.
        let (_, size) = resize.on_delta(Vec2::new(-40.0, 0.0), BOUNDS);
        assert_eq!(size.width, 700.0);
        let (_, size) = resize.on_delta(Vec2::new(-70.0, 0.0), BOUNDS);
        assert_eq!(size.width, 690.0);
        assert_eq!(resize.debt(), Vec2::ZERO);
    }

    #[test]
    fn growing_north_pins_when_top_edge_reaches_zero() {
        let mut resize = engine(Direction::North);
        // Top edge at 100 can absorb a size growth of 200 before pinning.
        let (pos, size) = resize.on_delta(Vec2::new(0.0, -250.0), BOUNDS);
        assert_eq!(size.height, 300.0);
        assert_eq!(pos.y, 0.0);
        assert_eq!(resize.debt().y, 50.0);
    }

    #[test]
    fn element_never_escapes_container_during_resize() {
        for direction in ALL_DIRECTIONS {
            let mut resize = engine(direction);
            let mut state = 0x9e37_79b9_7f4a_7c15_u64;
            for _ in 0..300 {
                state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
                let dx = ((state >> 33) % 301) as f64 - 150.0;
                let dy = ((state >> 13) % 301) as f64 - 150.0;
                let (pos, size) = resize.on_delta(Vec2::new(dx, dy), BOUNDS);

                assert!(size.width >= 15.0 && size.height >= 15.0, "{direction:?}: floor violated");
                assert!(pos.x >= 0.0 && pos.y >= 0.0, "{direction:?}: {pos:?}");
                assert!(
                    pos.x + size.width <= BOUNDS.width + 1e-9,
                    "{direction:?}: right edge escaped"
                );
                assert!(
                    pos.y + size.height <= BOUNDS.height + 1e-9,
                    "{direction:?}: bottom edge escaped"
                );
            }
        }
    }

    #[test]
    fn unmeasured_container_degrades_to_floor() {
        let mut resize = ResizeEngine::new(
            Direction::SouthEast,
            Point::ZERO,
            Size::new(100.0, 80.0),
            EngineConfig::default(),
        );
        let (pos, size) = resize.on_delta(Vec2::new(50.0, 50.0), Size::ZERO);
        assert_eq!(pos, Point::ZERO);
        assert_eq!(size, Size::new(15.0, 15.0));
        assert!(size.width.is_finite() && size.height.is_finite());
    }

    #[test]
    fn profile_table_signs_and_shifts() {
        use Direction::*;
        let expect = [
            (NorthWest, -1.0, -1.0, true, true),
            (North, 0.0, -1.0, false, true),
            (NorthEast, 1.0, -1.0, false, true),
            (West, -1.0, 0.0, true, false),
            (East, 1.0, 0.0, false, false),
            (SouthWest, -1.0, 1.0, true, false),
            (South, 0.0, 1.0, false, false),
            (SouthEast, 1.0, 1.0, false, false),
        ];
        for (direction, width_sign, height_sign, shifts_x, shifts_y) in expect {
            let p = direction.profile();
            assert_eq!(p.width_sign, width_sign, "{direction:?}");
            assert_eq!(p.height_sign, height_sign, "{direction:?}");
            assert_eq!(p.shifts_x, shifts_x, "{direction:?}");
            assert_eq!(p.shifts_y, shifts_y, "{direction:?}");
        }
    }
}
