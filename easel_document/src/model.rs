// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pages, items, and the document that owns them.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

use crate::error::DocumentError;

/// Length of generated item and page ids.
pub const ID_LENGTH: usize = 8;

/// The paper format a document is composed for.
///
/// Page dimensions are fixed in CSS pixels at 96 dpi, so the same document
/// renders identically everywhere.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    /// ISO A4, 210 × 297 mm.
    A4,
    /// US Letter, 8.5 × 11 in.
    #[default]
    Letter,
}

impl PaperSize {
    /// The page dimensions in pixels at 96 dpi.
    #[must_use]
    pub const fn page_size(self) -> Size {
        match self {
            Self::A4 => Size::new(794.0, 1123.0),
            Self::Letter => Size::new(816.0, 1056.0),
        }
    }
}

/// The typed content payload of an [`Item`].
///
/// The payloads here are deliberately small; rich text formatting lives in
/// the rendering layer, not in the frame model the transform engines work
/// against.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ItemKind {
    /// An education entry.
    Education {
        /// Institution name.
        institution: String,
        /// Degree earned or pursued.
        degree: String,
        /// Free-form body lines.
        body: Vec<String>,
    },
    /// An employment entry.
    Employment {
        /// Employer name.
        company: String,
        /// Role title.
        position: String,
        /// Free-form body lines.
        body: Vec<String>,
    },
    /// A headed block of text.
    Text {
        /// Section header.
        header: String,
        /// Body text.
        body: String,
    },
}

impl ItemKind {
    /// Convenience constructor for a [`ItemKind::Text`] block.
    pub fn text(header: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Text {
            header: header.into(),
            body: body.into(),
        }
    }
}

/// One positioned block on a page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique id within the document.
    pub id: String,
    /// Top-left corner in page-local pixels.
    pub position: Point,
    /// Width and height in pixels.
    pub size: Size,
    /// Content payload.
    pub kind: ItemKind,
}

impl Item {
    /// Creates an item with the given frame and payload.
    pub fn new(id: impl Into<String>, position: Point, size: Size, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            position,
            size,
            kind,
        }
    }
}

/// One page: an id and its items in paint order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Unique id within the document.
    pub id: String,
    /// Items in paint order, back to front.
    pub items: Vec<Item>,
}

/// A composition: a paper size and a stack of pages.
///
/// The document owns id uniqueness — [`Document::add_item`] and
/// [`Document::add_page`] reject duplicates, so lookups by id are
/// unambiguous.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    size: PaperSize,
    pages: Vec<Page>,
}

impl Document {
    /// Creates a document with a single empty page.
    #[must_use]
    pub fn new(size: PaperSize) -> Self {
        Self {
            size,
            pages: vec![Page {
                id: String::from("DefaultPage"),
                items: Vec::new(),
            }],
        }
    }

    /// The paper format.
    #[must_use]
    pub fn paper_size(&self) -> PaperSize {
        self.size
    }

    /// The dimensions of every page, in pixels.
    #[must_use]
    pub fn page_size(&self) -> Size {
        self.size.page_size()
    }

    /// Switches the paper format.
    ///
    /// Item frames are left untouched; anything that clamps against the page
    /// picks the new dimensions up on its next query.
    pub fn set_paper_size(&mut self, size: PaperSize) {
        self.size = size;
    }

    /// The pages, in document order.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Iterates over every item on every page.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.pages.iter().flat_map(|page| page.items.iter())
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items().find(|item| item.id == id)
    }

    /// Appends an empty page.
    ///
    /// # Errors
    ///
    /// [`DocumentError::DuplicateId`] if a page with this id already exists.
    pub fn add_page(&mut self, id: impl Into<String>) -> Result<(), DocumentError> {
        let id = id.into();
        if self.pages.iter().any(|page| page.id == id) {
            return Err(DocumentError::DuplicateId(id));
        }
        self.pages.push(Page {
            id,
            items: Vec::new(),
        });
        Ok(())
    }

    /// Removes a page and everything on it.
    ///
    /// # Errors
    ///
    /// [`DocumentError::UnknownPage`] if no page has this id.
    pub fn remove_page(&mut self, id: &str) -> Result<Page, DocumentError> {
        match self.pages.iter().position(|page| page.id == id) {
            Some(idx) => Ok(self.pages.remove(idx)),
            None => Err(DocumentError::UnknownPage(id.into())),
        }
    }

    /// Adds an item to the page with id `page_id`, on top of its stack.
    ///
    /// # Errors
    ///
    /// [`DocumentError::UnknownPage`] if no page has that id, and
    /// [`DocumentError::DuplicateId`] if any item in the document already
    /// uses the item's id.
    pub fn add_item(&mut self, page_id: &str, item: Item) -> Result<(), DocumentError> {
        if self.item(&item.id).is_some() {
            return Err(DocumentError::DuplicateId(item.id));
        }
        let page = self
            .pages
            .iter_mut()
            .find(|page| page.id == page_id)
            .ok_or_else(|| DocumentError::UnknownPage(page_id.into()))?;
        page.items.push(item);
        Ok(())
    }

    /// Removes an item by id, returning it.
    ///
    /// # Errors
    ///
    /// [`DocumentError::UnknownItem`] if no item has this id.
    pub fn remove_item(&mut self, id: &str) -> Result<Item, DocumentError> {
        for page in &mut self.pages {
            if let Some(idx) = page.items.iter().position(|item| item.id == id) {
                return Ok(page.items.remove(idx));
            }
        }
        Err(DocumentError::UnknownItem(id.into()))
    }

    /// Commits a new frame for an item.
    ///
    /// This is the write path the manipulation layer uses on every pointer
    /// sample: position and size land together, never one without the other.
    ///
    /// # Errors
    ///
    /// [`DocumentError::UnknownItem`] if no item has this id.
    pub fn update_item_frame(
        &mut self,
        id: &str,
        position: Point,
        size: Size,
    ) -> Result<(), DocumentError> {
        let item = self
            .pages
            .iter_mut()
            .flat_map(|page| page.items.iter_mut())
            .find(|item| item.id == id)
            .ok_or_else(|| DocumentError::UnknownItem(id.into()))?;
        item.position = position;
        item.size = size;
        Ok(())
    }

    /// Generates a random [`ID_LENGTH`]-character alphanumeric id not used
    /// by any item in this document.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn fresh_item_id(&self) -> String {
        use rand::Rng;
        use rand::distributions::Alphanumeric;

        let existing: hashbrown::HashSet<&str> =
            self.items().map(|item| item.id.as_str()).collect();
        loop {
            let id: String = rand::thread_rng()
                .sample_iter(&Alphanumeric)
                .take(ID_LENGTH)
                .map(char::from)
                .collect();
            if !existing.contains(id.as_str()) {
                return id;
            }
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(PaperSize::default())
    }
}
