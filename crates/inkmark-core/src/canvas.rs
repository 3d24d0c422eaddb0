//! Canvas snapshots and the pure transformations applied to them.

use crate::shapes::{ShapeId, ShapeIdGen, StyleDelta, TextShape, TextStyle};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// One immutable state of all shapes at a point in time.
///
/// Shape order is insertion order, which is also the z-order the renderer
/// draws in (back to front). Transformations never mutate `self`; each
/// returns the snapshot that results from the change, so history entries
/// share nothing mutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    shapes: Vec<TextShape>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl Snapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Shapes in z-order (back to front).
    pub fn shapes(&self) -> &[TextShape] {
        &self.shapes
    }

    /// Get a shape by id.
    pub fn get(&self, id: ShapeId) -> Option<&TextShape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// Check whether a shape with this id exists.
    pub fn contains(&self, id: ShapeId) -> bool {
        self.get(id).is_some()
    }

    /// Number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the snapshot has no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Find the front-most shape at a point (in canvas coordinates).
    pub fn shape_at_point(&self, point: Point, tolerance: f64) -> Option<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .find(|s| s.hit_test(point, tolerance))
            .map(TextShape::id)
    }

    /// Snapshot with a new shape appended at `position`.
    ///
    /// Whitespace-only text is rejected: the returned snapshot equals `self`
    /// and no id is consumed. The text is stored as given, untrimmed.
    pub fn add_shape(
        &self,
        position: Point,
        text: &str,
        style: TextStyle,
        ids: &mut ShapeIdGen,
    ) -> Snapshot {
        if text.trim().is_empty() {
            return self.clone();
        }
        let mut next = self.clone();
        next.shapes
            .push(TextShape::new(ids.next_id(), position, text, style));
        next
    }

    /// Snapshot with the matching shape moved to `position`.
    ///
    /// An unknown id leaves the snapshot unchanged.
    pub fn move_shape(&self, id: ShapeId, position: Point) -> Snapshot {
        let mut next = self.clone();
        if let Some(shape) = next.shapes.iter_mut().find(|s| s.id() == id) {
            *shape = shape.moved_to(position);
        }
        next
    }

    /// Snapshot with a style delta merged onto the matching shape.
    ///
    /// Fields the delta leaves `None` are untouched. An unknown id leaves
    /// the snapshot unchanged.
    pub fn restyle_shape(&self, id: ShapeId, delta: &StyleDelta) -> Snapshot {
        let mut next = self.clone();
        if let Some(shape) = next.shapes.iter_mut().find(|s| s.id() == id) {
            *shape = shape.restyled(delta);
        }
        next
    }

    /// Serialize the snapshot to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
