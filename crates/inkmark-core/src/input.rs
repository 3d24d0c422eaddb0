//! Gesture events reported by the render surface.

use crate::shapes::ShapeId;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A user gesture on the canvas.
///
/// The render surface owns pointer bookkeeping and hit testing; by the time
/// a gesture reaches the session it already names the shape it refers to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gesture {
    /// Click on empty canvas: opens pending text input at the position.
    StageClick { position: Point },
    /// Click on an existing shape: selects it.
    ShapeClick { id: ShapeId },
    /// A shape drag finished at a new position.
    DragEnd { id: ShapeId, position: Point },
}
