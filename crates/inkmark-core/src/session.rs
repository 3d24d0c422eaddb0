//! Edit session: gesture intent, shape transformations, history commits.

use crate::canvas::Snapshot;
use crate::history::History;
use crate::input::Gesture;
use crate::shapes::{ShapeId, ShapeIdGen, StyleDelta, TextShape, TextStyle};
use kurbo::Point;
use uuid::Uuid;

/// Transient text-entry state while a new label is typed.
///
/// Never part of history: the buffer becomes a shape only on submission.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingInput {
    /// Canvas position where the label will be placed.
    pub position: Point,
    /// Text typed so far.
    pub buffer: String,
}

/// Input-mode state machine.
///
/// Pending input and selection are mutually exclusive; the enum makes the
/// concurrent combination unrepresentable.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputMode {
    /// No pending input and no selection.
    #[default]
    Idle,
    /// A new label is being typed at a position.
    Pending(PendingInput),
    /// An existing shape is selected.
    Selected(ShapeId),
}

/// Coordinates pending input, selection, style defaults and history.
///
/// All operations run synchronously in gesture order; the session is the
/// only writer of its history.
#[derive(Debug)]
pub struct EditSession {
    /// Session identity, used in log lines and by the embedding app.
    id: Uuid,
    history: History,
    mode: InputMode,
    /// Style applied to newly created shapes; edited by the toolbar.
    defaults: TextStyle,
    ids: ShapeIdGen,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditSession {
    /// Create a session with default style settings.
    pub fn new() -> Self {
        Self::with_defaults(TextStyle::default())
    }

    /// Create a session with explicit style defaults.
    pub fn with_defaults(defaults: TextStyle) -> Self {
        Self {
            id: Uuid::new_v4(),
            history: History::new(),
            mode: InputMode::Idle,
            defaults,
            ids: ShapeIdGen::new(),
        }
    }

    /// Session identity.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The currently visible snapshot.
    pub fn current(&self) -> &Snapshot {
        self.history.current()
    }

    /// The underlying history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Current input mode.
    pub fn mode(&self) -> &InputMode {
        &self.mode
    }

    /// Current style defaults.
    pub fn defaults(&self) -> &TextStyle {
        &self.defaults
    }

    /// Id of the selected shape, if any.
    pub fn selected(&self) -> Option<ShapeId> {
        match self.mode {
            InputMode::Selected(id) => Some(id),
            _ => None,
        }
    }

    /// The open pending input, if any.
    pub fn pending(&self) -> Option<&PendingInput> {
        match &self.mode {
            InputMode::Pending(pending) => Some(pending),
            _ => None,
        }
    }

    /// Open pending input at `position`.
    ///
    /// Clears the selection. An already open pending input is discarded
    /// silently, unsubmitted buffer included (click elsewhere cancels).
    pub fn begin_pending_input(&mut self, position: Point) {
        self.mode = InputMode::Pending(PendingInput {
            position,
            buffer: String::new(),
        });
    }

    /// Replace the pending text buffer (live echo from the input widget).
    /// No-op outside pending mode.
    pub fn update_pending_text(&mut self, text: &str) {
        if let InputMode::Pending(pending) = &mut self.mode {
            pending.buffer = text.to_string();
        }
    }

    /// Submit the pending label and close the input.
    ///
    /// Whitespace-only text closes the input without committing anything;
    /// otherwise a shape is created with the current style defaults and the
    /// resulting snapshot is committed. Returns the id of the created shape.
    pub fn submit_pending_input(&mut self, text: &str) -> Option<ShapeId> {
        let position = match &self.mode {
            InputMode::Pending(pending) => pending.position,
            _ => return None,
        };
        self.mode = InputMode::Idle;

        if text.trim().is_empty() {
            log::trace!("session {}: empty submission discarded", self.id);
            return None;
        }

        let next = self.history.current().add_shape(
            position,
            text,
            self.defaults.clone(),
            &mut self.ids,
        );
        let id = next.shapes().last().map(TextShape::id);
        self.history.commit(next);
        log::debug!("session {}: added shape {:?}", self.id, id);
        id
    }

    /// Select a shape, cancelling any open pending input.
    pub fn select(&mut self, id: ShapeId) {
        self.mode = InputMode::Selected(id);
    }

    /// Clear the selection. Pending input is unaffected.
    pub fn deselect(&mut self) {
        if matches!(self.mode, InputMode::Selected(_)) {
            self.mode = InputMode::Idle;
        }
    }

    /// Commit the drag result for a shape.
    ///
    /// Every drag end produces a history entry, including a drag that ends
    /// where it started and a drag of an id missing from the snapshot.
    pub fn end_drag(&mut self, id: ShapeId, position: Point) {
        let next = self.history.current().move_shape(id, position);
        self.history.commit(next);
    }

    /// Merge a toolbar delta into the style defaults.
    ///
    /// With a shape selected the delta is also applied to that shape and the
    /// result committed. With no selection only the defaults change and
    /// history is untouched (not an undoable event).
    pub fn apply_style(&mut self, delta: &StyleDelta) {
        self.defaults.apply(delta);
        if let InputMode::Selected(id) = self.mode {
            let next = self.history.current().restyle_shape(id, delta);
            self.history.commit(next);
        }
    }

    /// Step history back one state and return the now-current snapshot.
    pub fn undo(&mut self) -> &Snapshot {
        self.history.undo()
    }

    /// Step history forward one state and return the now-current snapshot.
    pub fn redo(&mut self) -> &Snapshot {
        self.history.redo()
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Route a gesture reported by the render surface.
    pub fn handle_gesture(&mut self, gesture: Gesture) {
        match gesture {
            Gesture::StageClick { position } => self.begin_pending_input(position),
            Gesture::ShapeClick { id } => self.select(id),
            Gesture::DragEnd { id, position } => self.end_drag(id, position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::SerializableColor;

    #[test]
    fn test_place_undo_redo_roundtrip() {
        let mut session = EditSession::new();

        session.begin_pending_input(Point::new(10.0, 10.0));
        let id = session.submit_pending_input("Hello").unwrap();

        let shape = session.current().get(id).unwrap();
        assert_eq!(shape.text, "Hello");
        assert_eq!(shape.position, Point::new(10.0, 10.0));
        assert_eq!(shape.style, TextStyle::default());
        assert_eq!(session.history().depth(), 2);
        assert_eq!(session.history().cursor(), 1);

        let committed = session.current().clone();
        assert!(session.undo().is_empty());
        assert_eq!(session.redo(), &committed);
    }

    #[test]
    fn test_empty_submission_leaves_history_alone() {
        let mut session = EditSession::new();
        session.begin_pending_input(Point::new(5.0, 5.0));
        assert_eq!(session.submit_pending_input("   "), None);

        assert_eq!(session.mode(), &InputMode::Idle);
        assert_eq!(session.history().depth(), 1);
        assert!(session.current().is_empty());
    }

    #[test]
    fn test_submit_outside_pending_mode_is_noop() {
        let mut session = EditSession::new();
        session.begin_pending_input(Point::new(0.0, 0.0));
        let id = session.submit_pending_input("a").unwrap();

        session.select(id);
        assert_eq!(session.submit_pending_input("b"), None);
        // Selection survives the stray submission
        assert_eq!(session.selected(), Some(id));
        assert_eq!(session.history().depth(), 2);
    }

    #[test]
    fn test_pending_and_selection_are_exclusive() {
        let mut session = EditSession::new();
        session.begin_pending_input(Point::new(0.0, 0.0));
        let id = session.submit_pending_input("label").unwrap();

        session.begin_pending_input(Point::new(50.0, 50.0));
        session.update_pending_text("half-typ");
        assert!(session.pending().is_some());
        assert_eq!(session.selected(), None);

        // Selecting cancels the open input, buffer and all
        session.select(id);
        assert!(session.pending().is_none());
        assert_eq!(session.selected(), Some(id));

        // And opening an input drops the selection again
        session.begin_pending_input(Point::new(70.0, 70.0));
        assert_eq!(session.selected(), None);
        assert_eq!(session.pending().unwrap().buffer, "");
    }

    #[test]
    fn test_deselect_keeps_pending_input() {
        let mut session = EditSession::new();
        session.begin_pending_input(Point::new(0.0, 0.0));
        session.deselect();
        assert!(session.pending().is_some());
    }

    #[test]
    fn test_zero_distance_drag_still_commits() {
        let mut session = EditSession::new();
        session.begin_pending_input(Point::new(10.0, 10.0));
        let id = session.submit_pending_input("drag me").unwrap();
        assert_eq!(session.history().depth(), 2);

        session.end_drag(id, Point::new(10.0, 10.0));
        assert_eq!(session.history().depth(), 3);
        assert!(session.can_undo());
    }

    #[test]
    fn test_style_without_selection_only_changes_defaults() {
        let mut session = EditSession::new();
        session.apply_style(&StyleDelta::default().with_bold(true));

        assert!(session.defaults().bold);
        assert_eq!(session.history().depth(), 1);
    }

    #[test]
    fn test_style_with_selection_commits_and_patches_shape() {
        let mut session = EditSession::new();
        session.begin_pending_input(Point::new(0.0, 0.0));
        let id = session.submit_pending_input("styled").unwrap();
        session.select(id);

        session.apply_style(&StyleDelta::default().with_color(SerializableColor::red()));

        assert_eq!(session.defaults().fill, SerializableColor::red());
        let shape = session.current().get(id).unwrap();
        assert_eq!(shape.style.fill, SerializableColor::red());
        assert_eq!(session.history().depth(), 3);

        // Undo restores the previous fill but leaves the defaults alone
        session.undo();
        let shape = session.current().get(id).unwrap();
        assert_eq!(shape.style.fill, SerializableColor::black());
        assert_eq!(session.defaults().fill, SerializableColor::red());
    }

    #[test]
    fn test_new_shape_uses_current_defaults() {
        let mut session = EditSession::new();
        session.apply_style(&StyleDelta::default().with_italic(true).with_size(24.0));

        session.begin_pending_input(Point::new(1.0, 2.0));
        let id = session.submit_pending_input("styled").unwrap();

        let style = &session.current().get(id).unwrap().style;
        assert!(style.italic);
        assert!((style.font_size - 24.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_commit_after_undo_prunes_redo() {
        let mut session = EditSession::new();
        session.begin_pending_input(Point::new(0.0, 0.0));
        session.submit_pending_input("one");
        session.begin_pending_input(Point::new(10.0, 0.0));
        session.submit_pending_input("two");
        assert_eq!(session.history().depth(), 3);

        session.undo();
        session.undo();
        session.begin_pending_input(Point::new(20.0, 0.0));
        session.submit_pending_input("three");

        assert_eq!(session.history().depth(), 2);
        assert!(!session.can_redo());
        assert_eq!(session.current().len(), 1);
        assert_eq!(session.current().shapes()[0].text, "three");
    }

    #[test]
    fn test_gesture_routing() {
        let mut session = EditSession::new();

        session.handle_gesture(Gesture::StageClick {
            position: Point::new(3.0, 4.0),
        });
        assert_eq!(session.pending().map(|p| p.position), Some(Point::new(3.0, 4.0)));
        let id = session.submit_pending_input("routed").unwrap();

        session.handle_gesture(Gesture::ShapeClick { id });
        assert_eq!(session.selected(), Some(id));

        session.handle_gesture(Gesture::DragEnd {
            id,
            position: Point::new(30.0, 40.0),
        });
        assert_eq!(
            session.current().get(id).map(|s| s.position),
            Some(Point::new(30.0, 40.0))
        );
    }
}
