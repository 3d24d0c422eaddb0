//! Undo/redo entry points for UI outside the canvas component.
//!
//! Header buttons and keyboard shortcuts live outside the canvas but need
//! to drive its history. Instead of hanging functions on a process-wide
//! global, the embedding app owns a [`TriggerRegistry`]: hooks are
//! registered when a session starts, deregistered when it ends, and
//! external UI calls the zero-argument trigger methods in between.

use thiserror::Error;

/// Errors from registry lifecycle misuse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// `register` was called while hooks were already installed.
    #[error("undo/redo hooks already registered")]
    AlreadyRegistered,
    /// `deregister` was called with no hooks installed.
    #[error("no undo/redo hooks registered")]
    NotRegistered,
}

/// Callbacks wired to a live edit session.
///
/// Each callback performs the history step and re-renders the resulting
/// current snapshot.
pub struct TriggerHooks {
    pub undo: Box<dyn FnMut()>,
    pub redo: Box<dyn FnMut()>,
}

/// Holds the currently installed undo/redo hooks.
///
/// At most one set of hooks is installed at a time. Triggering with no
/// hooks installed is a silent no-op.
#[derive(Default)]
pub struct TriggerRegistry {
    hooks: Option<TriggerHooks>,
}

impl TriggerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { hooks: None }
    }

    /// Install hooks for a session that just started.
    pub fn register(&mut self, hooks: TriggerHooks) -> Result<(), RegistryError> {
        if self.hooks.is_some() {
            return Err(RegistryError::AlreadyRegistered);
        }
        self.hooks = Some(hooks);
        Ok(())
    }

    /// Remove the installed hooks when the session ends.
    pub fn deregister(&mut self) -> Result<(), RegistryError> {
        match self.hooks.take() {
            Some(_) => Ok(()),
            None => Err(RegistryError::NotRegistered),
        }
    }

    /// Check whether hooks are installed.
    pub fn is_registered(&self) -> bool {
        self.hooks.is_some()
    }

    /// Invoke the undo hook. Returns `false` when no hooks are installed.
    pub fn trigger_undo(&mut self) -> bool {
        match &mut self.hooks {
            Some(hooks) => {
                (hooks.undo)();
                true
            }
            None => {
                log::warn!("undo triggered with no hooks registered");
                false
            }
        }
    }

    /// Invoke the redo hook. Returns `false` when no hooks are installed.
    pub fn trigger_redo(&mut self) -> bool {
        match &mut self.hooks {
            Some(hooks) => {
                (hooks.redo)();
                true
            }
            None => {
                log::warn!("redo triggered with no hooks registered");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::EditSession;
    use kurbo::Point;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn hooks_for(session: &Rc<RefCell<EditSession>>) -> TriggerHooks {
        let undo_session = Rc::clone(session);
        let redo_session = Rc::clone(session);
        TriggerHooks {
            undo: Box::new(move || {
                undo_session.borrow_mut().undo();
            }),
            redo: Box::new(move || {
                redo_session.borrow_mut().redo();
            }),
        }
    }

    #[test]
    fn test_triggers_drive_session_history() {
        let session = Rc::new(RefCell::new(EditSession::new()));
        {
            let mut s = session.borrow_mut();
            s.begin_pending_input(Point::new(10.0, 10.0));
            s.submit_pending_input("Hello");
        }

        let mut registry = TriggerRegistry::new();
        registry.register(hooks_for(&session)).unwrap();

        assert!(registry.trigger_undo());
        assert!(session.borrow().current().is_empty());

        assert!(registry.trigger_redo());
        assert_eq!(session.borrow().current().len(), 1);
    }

    #[test]
    fn test_empty_registry_is_silent_noop() {
        let mut registry = TriggerRegistry::new();
        assert!(!registry.trigger_undo());
        assert!(!registry.trigger_redo());
    }

    #[test]
    fn test_lifecycle_errors() {
        let session = Rc::new(RefCell::new(EditSession::new()));
        let mut registry = TriggerRegistry::new();

        assert_eq!(registry.deregister(), Err(RegistryError::NotRegistered));

        registry.register(hooks_for(&session)).unwrap();
        assert!(registry.is_registered());

        let err = registry.register(hooks_for(&session));
        assert!(matches!(err, Err(RegistryError::AlreadyRegistered)));

        registry.deregister().unwrap();
        assert!(!registry.is_registered());
        assert!(!registry.trigger_undo());
    }
}
