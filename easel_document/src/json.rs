// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON persistence for whole documents.
//!
//! The serialized form is the document as-is: paper size, pages, items with
//! their frames and payloads. Loading a saved document restores every frame
//! exactly, so a composition survives a round trip byte-for-byte in meaning
//! (field order and whitespace aside).

use alloc::string::String;

use crate::error::DocumentError;
use crate::model::Document;

impl Document {
    /// Serializes the document to a JSON string.
    ///
    /// # Errors
    ///
    /// [`DocumentError::Json`] if serialization fails; this model has no
    /// failing cases in practice, but the signature matches the read path.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a document from a JSON string.
    ///
    /// # Errors
    ///
    /// [`DocumentError::Json`] if the input is not valid JSON or does not
    /// match the document schema.
    pub fn from_json(input: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(input)?)
    }
}
