// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use thiserror::Error;

use easel_document::DocumentError;

/// Errors surfaced by session operations.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The underlying document operation failed.
    #[error(transparent)]
    Document(#[from] DocumentError),
    /// A press arrived while another manipulation was already active.
    #[error("a manipulation is already active")]
    GestureActive,
    /// An out-of-band geometry edit targeted the item a manipulation owns.
    #[error("item {0:?} is owned by the active manipulation")]
    ItemLocked(String),
}
