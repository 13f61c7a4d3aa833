//! Drawing element model and receive-side apply pipeline.
//!
//! This crate is transport-agnostic: the server and clients hand it decoded
//! control messages and raw packet blobs, and it maintains the room's drawing
//! state. The UI layer consumes [`doc::RoomDoc`] for painting and reacts to
//! the [`session::DocChange`] values returned by the apply calls.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`element`] | [`DrawingElement`] and its style/kind vocabulary |
//! | [`doc`] | Ordered room document: finalized elements + one in-progress |
//! | [`session`] | [`SyncSession`] — drives a `wire` decoder into the doc |
//! | [`control`] | Structured (non-binary) control message vocabulary |
//! | [`cursor`] | Ephemeral author-cursor overlay with expiry |
//! | [`outbox`] | Fixed-cadence buffer for low-priority control traffic |

pub mod control;
pub mod cursor;
pub mod doc;
pub mod element;
pub mod outbox;
pub mod session;

pub use control::{ControlMessage, Participant, Role};
pub use cursor::{CursorOverlay, CursorSample};
pub use doc::RoomDoc;
pub use element::{Bounds, DrawingElement, ElementId, ElementKind, ElementStyle};
pub use outbox::Outbox;
pub use session::{DocChange, SyncSession};
