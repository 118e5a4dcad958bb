use crate::core::Scene;
use std::sync::Arc;

/// Undo-Eintrag: vollständige Szene VOR einer Mutation.
///
/// Arc-Klon (Copy-on-Write): Das Erstellen eines Snapshots ist O(1),
/// der eigentliche Szenen-Klon passiert erst beim nächsten `Arc::make_mut()`.
/// Snapshots werden nie in-place verändert und bleiben einzeln inspizierbar.
pub type Snapshot = Arc<Scene>;

/// Undo/Redo-Manager mit Snapshotting.
///
/// `undo_stack` ist alt→neu, `redo_stack` hat den nächsten Redo-Schritt oben (am Ende).
#[derive(Debug, Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: Option<usize>,
}

impl EditHistory {
    /// Erstellt einen unbegrenzten History-Manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen History-Manager mit optionaler maximaler Tiefe.
    pub fn with_limit(max_depth: Option<usize>) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.filter(|&d| d > 0),
        }
    }

    /// Legt den Zustand vor einer Mutation ab und verwirft die Redo-Zukunft.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        Self::push_bounded(&mut self.undo_stack, snap, self.max_depth);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Pop undo stack and push `current` onto redo stack; returns the snapshot to apply.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        Self::push_bounded(&mut self.redo_stack, current, self.max_depth);
        Some(prev)
    }

    /// Pop redo stack and push `current` onto undo stack; returns the snapshot to apply.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        Self::push_bounded(&mut self.undo_stack, current, self.max_depth);
        Some(next)
    }

    /// Verwirft den gesamten Verlauf (z.B. nach dem Laden eines Designs).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Vergangene Snapshots (alt→neu).
    pub fn past(&self) -> &[Snapshot] {
        &self.undo_stack
    }

    /// Redo-Snapshots; der nächste Redo-Schritt liegt am Ende.
    pub fn future(&self) -> &[Snapshot] {
        &self.redo_stack
    }

    fn push_bounded(stack: &mut Vec<Snapshot>, snap: Snapshot, max_depth: Option<usize>) {
        if let Some(max) = max_depth {
            if stack.len() >= max {
                stack.remove(0);
            }
        }
        stack.push(snap);
    }
}
