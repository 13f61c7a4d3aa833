//! Receive-side sync session: packets in, document changes out.
//!
//! One `SyncSession` per stream direction. It owns the `wire` decoder and the
//! room document, runs the fixed inflate → unpack → decode → apply order on
//! every packet, and degrades instead of failing: malformed packets are
//! logged and dropped, a move with no open stroke synthesizes one, and a
//! clear re-anchors everything.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;
use wire::{Action, DecodedEvent, DecoderState, Tool, palette};

use crate::control::ControlMessage;
use crate::doc::RoomDoc;
use crate::element::{Bounds, DrawingElement, ElementId, ElementKind, ElementStyle};

/// A change the apply pipeline made to the room document. The UI reacts to
/// these; it never inspects packets itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocChange {
    /// A new in-progress element opened.
    Started { id: ElementId },
    /// The in-progress element extended to a new position.
    Extended { id: ElementId },
    /// The in-progress element moved into the finalized collection.
    Finalized { id: ElementId },
    /// The in-progress element was cancelled without finalizing.
    Cancelled { id: ElementId },
    /// A finalized element was removed by id.
    Erased { id: ElementId },
    /// The whole document was emptied and codec state re-anchored.
    Cleared,
    /// The finalized collection was replaced by a snapshot.
    SnapshotLoaded { count: usize },
}

/// Decoder, document, and current style for one stream direction.
pub struct SyncSession {
    decoder: DecoderState,
    doc: RoomDoc,
    tool: Tool,
    color: &'static str,
    width: f32,
    /// Anchor corner of the open gesture; shapes re-span against it.
    anchor: Option<(f64, f64)>,
}

impl SyncSession {
    /// A fresh session with an empty document and baseline codec state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            decoder: DecoderState::new(),
            doc: RoomDoc::new(),
            tool: Tool::Pen,
            color: palette::color_hex(0),
            width: palette::DEFAULT_STROKE_WIDTH,
            anchor: None,
        }
    }

    /// The room document, for painting and snapshots.
    #[must_use]
    pub fn doc(&self) -> &RoomDoc {
        &self.doc
    }

    /// Apply one compressed draw packet.
    ///
    /// Returns `None` when the packet was dropped (malformed) or decoded to
    /// nothing the document cares about (e.g. a stroke opened with a
    /// non-drawing tool). The decoder state is untouched by dropped packets.
    pub fn apply_packet(&mut self, blob: &[u8]) -> Option<DocChange> {
        let event = match wire::decode_packet(&mut self.decoder, blob) {
            Ok(event) => event,
            Err(error) => {
                tracing::warn!(%error, len = blob.len(), "dropping undecodable draw packet");
                return None;
            }
        };
        self.absorb_style(&event);

        let x = f64::from(event.x);
        let y = f64::from(event.y);
        match event.action {
            Action::Start => self.begin_element(x, y).map(|id| DocChange::Started { id }),
            Action::Move => {
                if self.doc.current().is_some() {
                    self.extend_current(x, y).map(|id| DocChange::Extended { id })
                } else {
                    // The start packet was lost; synthesize a stroke anchored
                    // here so the rest of the gesture still renders.
                    self.begin_element(x, y).map(|id| DocChange::Started { id })
                }
            }
            Action::End => {
                if self.doc.current().is_none() {
                    self.begin_element(x, y);
                } else {
                    self.extend_current(x, y);
                }
                self.anchor = None;
                self.doc.finalize().map(|id| DocChange::Finalized { id })
            }
            Action::Erase => {
                self.anchor = None;
                self.doc.cancel_current().map(|element| DocChange::Cancelled { id: element.id })
            }
            Action::Clear => {
                // The wire decoder has already re-anchored itself.
                self.doc.clear();
                self.reset_style();
                self.anchor = None;
                Some(DocChange::Cleared)
            }
        }
    }

    /// Apply a structured control message that affects the document.
    ///
    /// `clear` and `bulk-update` bypass the delta codec entirely, so both
    /// also reset the decoder — they are the re-anchoring points of the
    /// protocol. Messages that do not touch the document return `None`.
    pub fn apply_control(&mut self, message: &ControlMessage) -> Option<DocChange> {
        match message {
            ControlMessage::Clear => {
                self.doc.clear();
                self.reset_codec();
                Some(DocChange::Cleared)
            }
            ControlMessage::BulkUpdate { elements } => {
                let count = elements.len();
                self.doc.load_snapshot(elements.clone());
                self.reset_codec();
                Some(DocChange::SnapshotLoaded { count })
            }
            ControlMessage::Erase { element_id } => self
                .doc
                .erase(element_id)
                .then(|| DocChange::Erased { id: element_id.clone() }),
            _ => None,
        }
    }

    /// Tear down all stateful codec memory: document, decoder, and style.
    pub fn reset(&mut self) {
        self.doc.clear();
        self.reset_codec();
    }

    fn absorb_style(&mut self, event: &DecodedEvent) {
        if let Some(tool) = event.tool {
            self.tool = tool;
        }
        if let Some(color) = event.color {
            self.color = color;
        }
        if let Some(width) = event.width {
            self.width = width;
        }
    }

    fn reset_style(&mut self) {
        self.tool = Tool::Pen;
        self.color = palette::color_hex(0);
        self.width = palette::DEFAULT_STROKE_WIDTH;
    }

    fn reset_codec(&mut self) {
        self.decoder.reset();
        self.reset_style();
        self.anchor = None;
    }

    fn begin_element(&mut self, x: f64, y: f64) -> Option<ElementId> {
        let kind = ElementKind::from_tool(self.tool)?;
        let id = Uuid::new_v4().to_string();
        let style = ElementStyle::stroke(self.color, self.width);
        let element = if kind.is_point_based() {
            DrawingElement::stroke(id.clone(), kind, x, y, style, now_ms())
        } else if kind.is_text() {
            DrawingElement::text(id.clone(), x, y, String::new(), style, now_ms())
        } else {
            DrawingElement::shape(id.clone(), kind, x, y, style, now_ms())
        };

        if let Some(orphan) = self.doc.begin(element) {
            tracing::debug!(id = %orphan.id, "replacing stroke that never ended");
        }
        self.anchor = Some((x, y));
        Some(id)
    }

    fn extend_current(&mut self, x: f64, y: f64) -> Option<ElementId> {
        let anchor = self.anchor;
        let current = self.doc.current_mut()?;
        if current.kind.is_bounds_based() {
            let (ax, ay) = anchor.unwrap_or((x, y));
            current.bounds = Some(Bounds::between(ax, ay, x, y));
        } else {
            current.extend_to(x, y);
        }
        Some(current.id.clone())
    }
}

impl Default for SyncSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Current time as milliseconds since the Unix epoch.
fn now_ms() -> i64 {
    let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(dur.as_millis()).unwrap_or(0)
}
