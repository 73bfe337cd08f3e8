// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=easel_pointer --heading-base-level=0

//! Easel Pointer: an incremental pointer-movement source.
//!
//! This crate turns absolute pointer positions into the `(position, delta)`
//! samples that drive direct manipulation. It has no opinion about where
//! positions come from — a windowing toolkit, a test harness, a replay
//! file — and performs no hit testing of its own beyond an optional scope
//! rectangle.
//!
//! Two pieces:
//!
//! - [`tracker::PointerTracker`]: the sampling state machine. Feeds on
//!   absolute positions and scroll-offset changes and yields
//!   [`tracker::PointerSample`]s whose delta is the movement since the
//!   previous sample. Scrolling is folded into the same stream: content
//!   moving under a stationary pointer is movement too.
//! - [`subscription::EventSource`]: a small single-threaded dispatch hub
//!   whose subscriptions are RAII guards. Components that activate a
//!   gesture subscribe on entry and drop the guard on exit, so there is no
//!   way to leak a document-wide listener past the gesture that needed it.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use easel_pointer::tracker::PointerTracker;
//!
//! let mut tracker = PointerTracker::new();
//!
//! // The first sample after binding carries a zero delta.
//! let sample = tracker.pointer_move(Point::new(10.0, 20.0)).unwrap();
//! assert_eq!(sample.delta, Vec2::ZERO);
//!
//! let sample = tracker.pointer_move(Point::new(15.0, 22.0)).unwrap();
//! assert_eq!(sample.delta, Vec2::new(5.0, 2.0));
//!
//! // The page scrolls 12 px down under a stationary pointer: same stream.
//! let sample = tracker.scroll_by(Vec2::new(0.0, 12.0)).unwrap();
//! assert_eq!(sample.delta, Vec2::new(0.0, 12.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod subscription;
pub mod tracker;
