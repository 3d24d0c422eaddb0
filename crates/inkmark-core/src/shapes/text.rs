//! Text shape.

use super::{FontFamily, ShapeId, StyleDelta, TextStyle};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A text annotation on the canvas.
///
/// Shapes are immutable once created; edits produce a replacement record
/// inside a new snapshot rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextShape {
    pub(crate) id: ShapeId,
    /// Position of the text anchor (top-left of the bounding box).
    pub position: Point,
    /// The text content. Non-empty once committed.
    pub text: String,
    /// Style properties.
    pub style: TextStyle,
}

impl TextShape {
    /// Create a new text shape.
    pub fn new(id: ShapeId, position: Point, text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            id,
            position,
            text: text.into(),
            style,
        }
    }

    /// Get the unique identifier.
    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Record copy at a new position.
    pub(crate) fn moved_to(&self, position: Point) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }

    /// Record copy with a style delta merged on.
    pub(crate) fn restyled(&self, delta: &StyleDelta) -> Self {
        Self {
            style: self.style.merged(delta),
            ..self.clone()
        }
    }

    /// Approximate width based on character count and font size.
    /// This is a rough estimate; actual width depends on the font.
    fn approximate_width(&self) -> f64 {
        // For multi-line text, the widest line wins
        let max_line_len = self.text.lines().map(|line| line.len()).max().unwrap_or(0);

        // Average character width varies by font family and weight.
        // Empirically determined approximations.
        let char_width_factor = match (self.style.font_family, self.style.bold) {
            (FontFamily::Arial, false) => 0.52,
            (FontFamily::Arial, true) => 0.55,
            (FontFamily::TimesNewRoman, false) => 0.50,
            (FontFamily::TimesNewRoman, true) => 0.53,
            // Courier New is monospace
            (FontFamily::CourierNew, _) => 0.60,
            (FontFamily::Georgia, false) => 0.53,
            (FontFamily::Georgia, true) => 0.56,
        };

        max_line_len as f64 * self.style.font_size * char_width_factor
    }

    /// Approximate height based on font size and number of lines.
    fn approximate_height(&self) -> f64 {
        let line_count = self.text.lines().count().max(1);
        // Line height is typically 1.2 * font_size
        line_count as f64 * self.style.font_size * 1.2
    }

    /// Get the approximate bounding box in canvas coordinates.
    pub fn bounds(&self) -> Rect {
        let width = self.approximate_width().max(10.0);
        let height = self.approximate_height();
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + width,
            self.position.y + height,
        )
    }

    /// Check if a point (in canvas coordinates) hits this shape.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let bounds = self.bounds().inflate(tolerance, tolerance);
        bounds.contains(point)
    }
}
