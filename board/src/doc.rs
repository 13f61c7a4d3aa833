//! The room document: every finalized element plus the one in progress.
//!
//! Finalized elements keep insertion order — arrival order is draw order in
//! a single-writer room, so painting is a straight front-to-back walk. At
//! most one element is in progress at a time; it lives outside the finalized
//! collection until a `draw_end` lands it there.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use crate::element::{DrawingElement, ElementId};

/// Receiver-side drawing state for one room.
#[derive(Debug, Clone, Default)]
pub struct RoomDoc {
    elements: Vec<DrawingElement>,
    current: Option<DrawingElement>,
}

impl RoomDoc {
    /// An empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The in-progress element, if a stroke is open.
    #[must_use]
    pub fn current(&self) -> Option<&DrawingElement> {
        self.current.as_ref()
    }

    /// Mutable access to the in-progress element.
    pub fn current_mut(&mut self) -> Option<&mut DrawingElement> {
        self.current.as_mut()
    }

    /// Open a new in-progress element, replacing any existing one.
    ///
    /// Returns the replaced element when a previous stroke never saw its
    /// `draw_end`; callers may discard or log it.
    pub fn begin(&mut self, element: DrawingElement) -> Option<DrawingElement> {
        self.current.replace(element)
    }

    /// Move the in-progress element into the finalized collection.
    ///
    /// Returns the finalized element's id, or `None` when no stroke was open.
    pub fn finalize(&mut self) -> Option<ElementId> {
        let element = self.current.take()?;
        let id = element.id.clone();
        self.push(element);
        Some(id)
    }

    /// Drop the in-progress element without finalizing it.
    pub fn cancel_current(&mut self) -> Option<DrawingElement> {
        self.current.take()
    }

    /// Append a finalized element.
    ///
    /// A duplicate id with a near-identical creation time is a retransmit and
    /// is ignored; a duplicate id with a distinct creation time replaces the
    /// original in place, keeping its draw order.
    pub fn push(&mut self, element: DrawingElement) {
        if let Some(existing) = self.elements.iter_mut().find(|e| e.id == element.id) {
            if !existing.is_retransmit_of(&element) {
                *existing = element;
            }
            return;
        }
        self.elements.push(element);
    }

    /// Remove the finalized element with this exact id, and cancel the
    /// in-progress element if its id matches. Returns whether anything was
    /// removed; erasing an unknown id is a no-op.
    pub fn erase(&mut self, id: &str) -> bool {
        let before = self.elements.len();
        self.elements.retain(|e| e.id != id);
        let mut removed = self.elements.len() != before;
        if self.current.as_ref().is_some_and(|c| c.id == id) {
            self.current = None;
            removed = true;
        }
        removed
    }

    /// Empty the document: finalized collection and in-progress slot.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.current = None;
    }

    /// Replace the finalized collection with a full snapshot. Any in-progress
    /// element is dropped; a snapshot is an authoritative restatement.
    pub fn load_snapshot(&mut self, elements: Vec<DrawingElement>) {
        self.elements = elements;
        self.current = None;
    }

    /// Finalized elements in draw order.
    #[must_use]
    pub fn elements(&self) -> &[DrawingElement] {
        &self.elements
    }

    /// Look up a finalized element by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&DrawingElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Number of finalized elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the document holds no finalized elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
