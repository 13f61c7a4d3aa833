//! Structured control messages — the out-of-band half of the protocol.
//!
//! These travel as JSON text frames on the same transport as the binary draw
//! packets, and cover everything the delta codec cannot: room membership,
//! full-state resync, id-bearing erase, and cursor telemetry. The packed
//! draw format has no room for element ids, so any operation that must name
//! an element crosses on this channel.

#[cfg(test)]
#[path = "control_test.rs"]
mod control_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use wire::Tool;

use crate::element::{DrawingElement, ElementId};

/// A participant's role in a room. Exactly one teacher writes; everyone else
/// only decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Teacher,
    #[default]
    Student,
}

/// A connected room member as reported in the join snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub user_id: String,
    pub role: Role,
}

/// One message on the structured control channel, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ControlMessage {
    /// Client → server: request entry to a room's drawing channel.
    JoinRoom { room_id: Uuid, user_id: String, auth_token: String },
    /// Server → client: the full-resync reply to a join. Bypasses the delta
    /// codec entirely.
    RoomJoined { elements: Vec<DrawingElement>, participants: Vec<Participant> },
    /// Server → peers: someone entered the room.
    PeerJoined { user_id: String, role: Role },
    /// Server → peers: someone left the room.
    PeerLeft { user_id: String },
    /// Wipe the room. Receivers must also reset their codec state.
    Clear,
    /// Replace the finalized collection wholesale. Receivers must also reset
    /// their codec state.
    BulkUpdate { elements: Vec<DrawingElement> },
    /// Remove one finalized element by id.
    Erase { element_id: ElementId },
    /// Author cursor telemetry; ephemeral, rendered as an overlay that
    /// expires client-side when no refresh arrives.
    TeacherCursor { x: f64, y: f64, tool: Tool, is_drawing: bool },
    /// Server → client: a request was rejected. Carries a human-readable
    /// reason; the connection stays open.
    Error { message: String },
}

impl ControlMessage {
    /// Whether receiving this message requires re-anchoring codec state.
    #[must_use]
    pub fn resets_codec(&self) -> bool {
        matches!(self, Self::Clear | Self::BulkUpdate { .. })
    }
}
