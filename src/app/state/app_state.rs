use crate::app::history::{EditHistory, Snapshot};
use crate::app::CommandLog;
use crate::core::{Feature, FeatureStore};
use crate::shared::EditorOptions;
use crate::storage::FeatureStorage;
use std::sync::Arc;

use super::{EditorState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Feature-Repository (Arc für O(1)-Undo-Snapshots)
    pub features: Arc<FeatureStore>,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Zeichen- und Bearbeitungs-Sitzungen
    pub editor: EditorState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo-History (Snapshot-basiert, kein Redo)
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Persistenz-Grenze; wird nach jeder Mutation vollständig überschrieben
    pub storage: FeatureStorage,
}

impl AppState {
    /// Erstellt einen leeren App-State mit flüchtiger Storage.
    pub fn new() -> Self {
        Self::with_storage(FeatureStorage::in_memory(), EditorOptions::default())
    }

    /// Erstellt den App-State und lädt die gespeicherten Features aus `storage`.
    pub fn with_storage(storage: FeatureStorage, options: EditorOptions) -> Self {
        let features = FeatureStore::from_stored(storage.load(), options.max_level);
        Self {
            features: Arc::new(features),
            view: ViewState::from_options(&options),
            ui: UiState::new(),
            editor: EditorState::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new(),
            options,
            storage,
        }
    }

    /// Gibt die Anzahl der Features zurück (für Standardnamen und UI-Anzeige)
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Features der aktuell angezeigten Etage.
    pub fn visible_features(&self) -> impl Iterator<Item = &Feature> {
        self.features.on_level(self.view.current_level)
    }

    /// Aktuell ausgewähltes Feature, sofern es noch existiert.
    pub fn selected_feature(&self) -> Option<&Feature> {
        self.view
            .selected_feature_id
            .as_deref()
            .and_then(|id| self.features.get(id))
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    /// Reduziert Boilerplate in mutierenden Use-Cases.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
