use crate::core::FeatureStore;
use std::sync::Arc;

/// Snapshot des Feature-Repositories für Undo.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1),
/// der eigentliche Klon passiert erst beim nächsten `Arc::make_mut()` in einem
/// Use-Case.
#[derive(Clone, Debug)]
pub struct Snapshot {
    /// Feature-Repository zum Zeitpunkt des Snapshots
    pub features: Arc<FeatureStore>,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            features: Arc::clone(&state.features),
        }
    }

    /// Stellt den Snapshot wieder her (O(1) Arc-Zuweisung).
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.features = self.features;
    }
}

/// Linearer Undo-Stapel aus vollständigen Snapshots. Kein Redo.
///
/// Wächst unbegrenzt; nur strukturelle Änderungen (Anlegen, Löschen) legen
/// einen Snapshot ab.
#[derive(Default, Debug)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
}

impl EditHistory {
    /// Erstellt einen leeren History-Stapel.
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
        }
    }

    /// Legt einen vorab erstellten Snapshot ab. Accepting a Snapshot avoids
    /// simultaneous mutable/immutable borrows on the full `AppState`.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        self.undo_stack.push(snap);
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Anzahl abgelegter Snapshots.
    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Gibt `true` zurück, wenn kein Snapshot vorhanden ist.
    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }

    /// Entnimmt den jüngsten Snapshot (Caller wendet ihn an).
    pub fn pop_undo(&mut self) -> Option<Snapshot> {
        self.undo_stack.pop()
    }
}
