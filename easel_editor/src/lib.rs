// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=easel_editor --heading-base-level=0

//! Easel Editor: the session layer tying pointer, engines, and document
//! together.
//!
//! A [`Session`] owns a document and drives direct manipulation on it: a
//! press claims an item, every subsequent pointer sample runs the drag or
//! resize engine against the live page size and commits the resulting frame,
//! and release lets go wherever the pointer happens to be. While a gesture
//! is active the session reports itself suspended and refuses out-of-band
//! frame edits for the claimed item.
//!
//! [`wire`] connects a session to a [`PointerEvent`] stream with an RAII
//! guard, and [`trace::GestureTrace`] exposes the gesture moments to
//! embedders that want to watch them.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use easel_document::{Document, Item, ItemKind, PaperSize};
//! use easel_editor::Session;
//! use easel_transform::EngineConfig;
//!
//! let mut doc = Document::new(PaperSize::A4);
//! doc.add_item(
//!     "DefaultPage",
//!     Item::new(
//!         "title",
//!         Point::new(50.0, 50.0),
//!         Size::new(200.0, 100.0),
//!         ItemKind::text("Jane Doe", "Systems programmer"),
//!     ),
//! )
//! .unwrap();
//!
//! let mut session = Session::new(doc, EngineConfig::default());
//! session.press_body("title").unwrap();
//! session.pointer_move(Point::new(400.0, 300.0)).unwrap(); // first sample: zero delta
//! session.pointer_move(Point::new(410.0, 305.0)).unwrap();
//! session.release();
//!
//! let doc = session.into_document();
//! assert_eq!(doc.item("title").unwrap().position, Point::new(60.0, 55.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod session;
pub mod trace;
mod wire;

pub use error::EditorError;
pub use session::Session;
pub use wire::{PointerEvent, wire};
