// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The manipulation session: one document, one pointer, one gesture.

use alloc::boxed::Box;
use alloc::string::String;

use kurbo::{Point, Size, Vec2};

use easel_document::{Document, DocumentError, Item, PaperSize};
use easel_pointer::tracker::{PointerSample, PointerTracker};
use easel_transform::EngineConfig;
use easel_transform::gesture::{Frame, GestureEngine, Manipulation};
use easel_transform::resize::Direction;

use crate::error::EditorError;
use crate::trace::GestureTrace;

/// Binds a [`Document`] to a pointer stream and drives manipulations on it.
///
/// The session owns the document for its lifetime and is the only writer of
/// item frames while a gesture is active: every pointer sample runs the
/// active engine against the live page size and commits the resulting frame
/// through [`Document::update_item_frame`]. Out-of-band frame edits for the
/// manipulated item are refused until release.
pub struct Session {
    document: Document,
    tracker: PointerTracker,
    gesture: GestureEngine,
    active_item: Option<String>,
    trace: Box<dyn GestureTrace>,
}

impl Session {
    /// Creates a session over `document` with no tracing.
    #[must_use]
    pub fn new(document: Document, config: EngineConfig) -> Self {
        Self::with_trace(document, config, ())
    }

    /// Creates a session whose gesture moments are reported to `trace`.
    #[must_use]
    pub fn with_trace(
        document: Document,
        config: EngineConfig,
        trace: impl GestureTrace + 'static,
    ) -> Self {
        Self {
            document,
            tracker: PointerTracker::new(),
            gesture: GestureEngine::new(config),
            active_item: None,
            trace: Box::new(trace),
        }
    }

    /// The document under edit.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Consumes the session, returning the document.
    ///
    /// An active gesture simply ends; the frames committed so far stand.
    #[must_use]
    pub fn into_document(self) -> Document {
        self.document
    }

    /// Returns the current manipulation state.
    #[must_use]
    pub fn manipulation(&self) -> Manipulation {
        self.gesture.manipulation()
    }

    /// Returns `true` exactly while a manipulation is active.
    ///
    /// Ancillary editor surfaces (property panels and the like) poll this to
    /// hide themselves mid-gesture.
    #[must_use]
    pub fn editor_suspended(&self) -> bool {
        self.gesture.is_active()
    }

    /// Starts dragging `id` from a press on the item body.
    ///
    /// # Errors
    ///
    /// [`EditorError::GestureActive`] if a manipulation is already running,
    /// [`DocumentError::UnknownItem`] if the id matches nothing.
    pub fn press_body(&mut self, id: &str) -> Result<(), EditorError> {
        let (position, size) = self.claim(id)?;
        self.gesture.begin_drag(position, size);
        self.active_item = Some(id.into());
        self.trace.started(id, Manipulation::Dragging);
        Ok(())
    }

    /// Starts resizing `id` from a press on one of its handles.
    ///
    /// A handle press claims the gesture before the body underneath it can,
    /// so a resize never doubles as a drag.
    ///
    /// # Errors
    ///
    /// [`EditorError::GestureActive`] if a manipulation is already running,
    /// [`DocumentError::UnknownItem`] if the id matches nothing.
    pub fn press_handle(&mut self, id: &str, direction: Direction) -> Result<(), EditorError> {
        let (position, size) = self.claim(id)?;
        self.gesture.begin_resize(direction, position, size);
        self.active_item = Some(id.into());
        self.trace.started(id, Manipulation::Resizing(direction));
        Ok(())
    }

    fn claim(&self, id: &str) -> Result<(Point, Size), EditorError> {
        if self.gesture.is_active() {
            return Err(EditorError::GestureActive);
        }
        let item = self
            .document
            .item(id)
            .ok_or_else(|| DocumentError::UnknownItem(id.into()))?;
        Ok((item.position, item.size))
    }

    /// Feeds an absolute pointer position.
    ///
    /// While a manipulation is active, the movement since the last sample is
    /// run through the engine against the live page size and the resulting
    /// frame is committed to the document. While idle this only keeps the
    /// tracker's notion of the pointer fresh.
    ///
    /// # Errors
    ///
    /// Propagates document commit failures; these cannot occur while the
    /// session holds the active item.
    pub fn pointer_move(&mut self, position: Point) -> Result<Option<Frame>, EditorError> {
        match self.tracker.pointer_move(position) {
            Some(sample) => self.apply(sample),
            None => Ok(None),
        }
    }

    /// Folds a scroll-offset change into the active manipulation.
    ///
    /// Content scrolling under a stationary pointer is movement too; a
    /// scroll before any pointer contact is ignored.
    ///
    /// # Errors
    ///
    /// Same as [`Session::pointer_move`].
    pub fn scroll(&mut self, delta: Vec2) -> Result<Option<Frame>, EditorError> {
        match self.tracker.scroll_by(delta) {
            Some(sample) => self.apply(sample),
            None => Ok(None),
        }
    }

    fn apply(&mut self, sample: PointerSample) -> Result<Option<Frame>, EditorError> {
        if !self.gesture.is_active() {
            return Ok(None);
        }
        let bounds = self.document.page_size();
        let Some(frame) = self.gesture.on_delta(sample.delta, bounds) else {
            return Ok(None);
        };
        if let Some(id) = self.active_item.clone() {
            self.document
                .update_item_frame(&id, frame.position, frame.size)?;
            self.trace.committed(&id, frame);
        }
        Ok(Some(frame))
    }

    /// Ends the active manipulation, wherever the pointer is.
    ///
    /// Returns `true` if a gesture was actually ended; duplicate releases
    /// are no-ops.
    pub fn release(&mut self) -> bool {
        if self.gesture.release() {
            if let Some(id) = self.active_item.take() {
                self.trace.released(&id);
            }
            true
        } else {
            false
        }
    }

    /// Edits an item's frame outside of any gesture.
    ///
    /// # Errors
    ///
    /// [`EditorError::ItemLocked`] if `id` is the item an active
    /// manipulation owns, [`DocumentError::UnknownItem`] if the id matches
    /// nothing.
    pub fn set_item_frame(
        &mut self,
        id: &str,
        position: Point,
        size: Size,
    ) -> Result<(), EditorError> {
        if self.active_item.as_deref() == Some(id) {
            return Err(EditorError::ItemLocked(id.into()));
        }
        self.document.update_item_frame(id, position, size)?;
        Ok(())
    }

    /// Adds an item to a page.
    ///
    /// # Errors
    ///
    /// Propagates [`Document::add_item`] failures.
    pub fn add_item(&mut self, page_id: &str, item: Item) -> Result<(), EditorError> {
        self.document.add_item(page_id, item)?;
        Ok(())
    }

    /// Removes an item.
    ///
    /// # Errors
    ///
    /// [`EditorError::ItemLocked`] if `id` is the item an active
    /// manipulation owns; otherwise propagates [`Document::remove_item`]
    /// failures.
    pub fn remove_item(&mut self, id: &str) -> Result<Item, EditorError> {
        if self.active_item.as_deref() == Some(id) {
            return Err(EditorError::ItemLocked(id.into()));
        }
        Ok(self.document.remove_item(id)?)
    }

    /// Switches the document's paper format.
    ///
    /// Allowed mid-gesture: the next pointer sample clamps against the new
    /// page size.
    pub fn set_paper_size(&mut self, size: PaperSize) {
        self.document.set_paper_size(size);
    }
}

impl core::fmt::Debug for Session {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session")
            .field("document", &self.document)
            .field("tracker", &self.tracker)
            .field("gesture", &self.gesture)
            .field("active_item", &self.active_item)
            .finish_non_exhaustive()
    }
}
