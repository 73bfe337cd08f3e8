// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=easel_document --heading-base-level=0

//! Easel Document: the page-composition document model.
//!
//! A [`Document`] is a stack of fixed-size [`Page`]s, each holding a list of
//! absolutely positioned [`Item`]s. Items carry a `(position, size)` frame in
//! page-local pixels plus a typed content payload; the frame is what the
//! transform layer manipulates and commits back through
//! [`Document::update_item_frame`].
//!
//! The whole document round-trips through JSON ([`Document::to_json`] /
//! [`Document::from_json`]), so a composition can be saved and restored
//! verbatim. Page dimensions are fixed per [`PaperSize`] at 96 dpi.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use easel_document::{Document, Item, ItemKind, PaperSize};
//!
//! let mut doc = Document::new(PaperSize::A4);
//! let page_id = doc.pages()[0].id.clone();
//!
//! let item = Item::new(
//!     doc.fresh_item_id(),
//!     Point::new(50.0, 50.0),
//!     Size::new(200.0, 100.0),
//!     ItemKind::text("Experience", "Built things."),
//! );
//! let id = item.id.clone();
//! doc.add_item(&page_id, item).unwrap();
//!
//! doc.update_item_frame(&id, Point::new(60.0, 50.0), Size::new(200.0, 100.0))
//!     .unwrap();
//! assert_eq!(doc.item(&id).unwrap().position, Point::new(60.0, 50.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`; the default `std` feature adds
//! random item-id generation.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod error;
mod json;
mod model;

pub use error::DocumentError;
pub use model::{Document, Item, ItemKind, Page, PaperSize, ID_LENGTH};
