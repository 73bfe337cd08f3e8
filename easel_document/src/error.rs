// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use thiserror::Error;

/// Errors surfaced by document operations.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// JSON serialization or parsing failed.
    #[error("document JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// An id was already in use.
    #[error("id {0:?} is already in use")]
    DuplicateId(String),
    /// No page carries the given id.
    #[error("no page with id {0:?}")]
    UnknownPage(String),
    /// No item carries the given id.
    #[error("no item with id {0:?}")]
    UnknownItem(String),
}
