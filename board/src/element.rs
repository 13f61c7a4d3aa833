//! Drawing elements: strokes, shapes, and text placed on the canvas.
//!
//! An element belongs to exactly one family — point-based (freehand, line,
//! arrow, highlight), bounds-based (rectangle, circle, triangle), or
//! text-based — and the constructors here are the only way one is built, so
//! a mixed element cannot exist.

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;

use serde::{Deserialize, Serialize};
use wire::Tool;

/// Unique identifier for a drawing element. Opaque; stable for the element's
/// lifetime and used as the join key for erase operations.
pub type ElementId = String;

/// Two element creation timestamps within this window, on the same id, mark
/// a retransmit rather than a new element.
pub const RETRANSMIT_WINDOW_MS: i64 = 50;

/// The kind of a drawing element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Freehand pen stroke.
    Freehand,
    /// Axis-aligned rectangle.
    Rectangle,
    /// Circle inscribed in the bounding box.
    Circle,
    /// Triangle inscribed in the bounding box.
    Triangle,
    /// Straight line segment.
    Line,
    /// Directed arrow.
    Arrow,
    /// Text block anchored at its bounds origin.
    Text,
    /// Translucent highlighter stroke.
    Highlight,
}

impl ElementKind {
    /// Whether this kind stores its geometry as a point sequence.
    #[must_use]
    pub fn is_point_based(self) -> bool {
        matches!(self, Self::Freehand | Self::Highlight | Self::Line | Self::Arrow)
    }

    /// Whether this kind stores its geometry as a bounding box.
    #[must_use]
    pub fn is_bounds_based(self) -> bool {
        matches!(self, Self::Rectangle | Self::Circle | Self::Triangle)
    }

    /// Whether this kind carries a text payload.
    #[must_use]
    pub fn is_text(self) -> bool {
        matches!(self, Self::Text)
    }

    /// The element kind a drawing tool produces, or `None` for tools that
    /// never create elements (eraser, select, hand).
    #[must_use]
    pub fn from_tool(tool: Tool) -> Option<Self> {
        match tool {
            Tool::Pen => Some(Self::Freehand),
            Tool::Highlighter => Some(Self::Highlight),
            Tool::Rectangle => Some(Self::Rectangle),
            Tool::Circle => Some(Self::Circle),
            Tool::Triangle => Some(Self::Triangle),
            Tool::Line => Some(Self::Line),
            Tool::Arrow => Some(Self::Arrow),
            Tool::Text => Some(Self::Text),
            Tool::Eraser | Tool::Select | Tool::Hand => None,
        }
    }
}

/// Visual style of an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementStyle {
    /// Stroke color as an RGB hex string.
    pub stroke: String,
    /// Stroke width in canvas units.
    pub stroke_width: f32,
    /// Fill color, for closed shapes that are filled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    /// Hand-drawn rendering roughness, when the renderer supports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roughness: Option<f32>,
}

impl ElementStyle {
    /// Plain stroke style with no fill and no roughness.
    #[must_use]
    pub fn stroke(color: impl Into<String>, width: f32) -> Self {
        Self { stroke: color.into(), stroke_width: width, fill: None, roughness: None }
    }
}

/// Axis-aligned bounding box for shape elements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Zero-size bounds anchored at a point.
    #[must_use]
    pub fn anchored(x: f64, y: f64) -> Self {
        Self { x, y, width: 0.0, height: 0.0 }
    }

    /// The box spanning an anchor corner and an opposite corner.
    #[must_use]
    pub fn between(ax: f64, ay: f64, bx: f64, by: f64) -> Self {
        Self { x: ax.min(bx), y: ay.min(by), width: (bx - ax).abs(), height: (by - ay).abs() }
    }
}

/// A completed or in-progress stroke/shape/text on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingElement {
    pub id: ElementId,
    pub kind: ElementKind,
    /// Flattened `[x0, y0, x1, y1, ..]` pairs; empty for non-point kinds.
    pub points: Vec<f64>,
    pub style: ElementStyle,
    /// Bounding box; present only for bounds-based kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
    /// Text payload; present only for text elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Sender-clock creation time in milliseconds. Used only for retransmit
    /// detection, never for cross-peer ordering.
    pub created_at: i64,
}

impl DrawingElement {
    /// A point-based stroke seeded with its first point.
    ///
    /// Non-point kinds are coerced to [`ElementKind::Freehand`] so the family
    /// invariant holds no matter what the caller passes.
    #[must_use]
    pub fn stroke(
        id: impl Into<ElementId>,
        kind: ElementKind,
        x: f64,
        y: f64,
        style: ElementStyle,
        created_at: i64,
    ) -> Self {
        let kind = if kind.is_point_based() { kind } else { ElementKind::Freehand };
        Self {
            id: id.into(),
            kind,
            points: vec![x, y],
            style,
            bounds: None,
            text: None,
            created_at,
        }
    }

    /// A bounds-based shape anchored at a point with zero size.
    ///
    /// Non-bounds kinds are coerced to [`ElementKind::Rectangle`].
    #[must_use]
    pub fn shape(
        id: impl Into<ElementId>,
        kind: ElementKind,
        x: f64,
        y: f64,
        style: ElementStyle,
        created_at: i64,
    ) -> Self {
        let kind = if kind.is_bounds_based() { kind } else { ElementKind::Rectangle };
        Self {
            id: id.into(),
            kind,
            points: Vec::new(),
            style,
            bounds: Some(Bounds::anchored(x, y)),
            text: None,
            created_at,
        }
    }

    /// A text element anchored at a point.
    #[must_use]
    pub fn text(
        id: impl Into<ElementId>,
        x: f64,
        y: f64,
        content: impl Into<String>,
        style: ElementStyle,
        created_at: i64,
    ) -> Self {
        Self {
            id: id.into(),
            kind: ElementKind::Text,
            points: Vec::new(),
            style,
            bounds: Some(Bounds::anchored(x, y)),
            text: Some(content.into()),
            created_at,
        }
    }

    /// Extend this element to a new absolute position: point kinds append a
    /// point, text kinds move their anchor. Bounds-based shapes are re-spanned
    /// by the caller via [`Bounds::between`] — only the gesture's owner knows
    /// the anchor corner, which the current box does not preserve.
    pub fn extend_to(&mut self, x: f64, y: f64) {
        if self.kind.is_point_based() {
            // Repeated positions carry no visual information; skip them.
            if let [.., lx, ly] = self.points[..] {
                if (lx - x).abs() < f64::EPSILON && (ly - y).abs() < f64::EPSILON {
                    return;
                }
            }
            self.points.push(x);
            self.points.push(y);
        } else if self.kind.is_text() {
            if let Some(bounds) = self.bounds {
                self.bounds = Some(Bounds { x, y, ..bounds });
            }
        }
    }

    /// Whether `other` is a retransmit of this element: same id, creation
    /// times within [`RETRANSMIT_WINDOW_MS`].
    #[must_use]
    pub fn is_retransmit_of(&self, other: &Self) -> bool {
        self.id == other.id && (self.created_at - other.created_at).abs() <= RETRANSMIT_WINDOW_MS
    }
}
