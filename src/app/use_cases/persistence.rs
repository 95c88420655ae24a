//! Use-Case: Feature-Repository in die Storage schreiben bzw. Storage leeren.

use crate::app::AppState;

/// Schreibt den vollständigen Repository-Inhalt in die Storage.
///
/// Fire-and-forget: Fehler werden geloggt, der Aufrufer läuft weiter.
pub fn persist(state: &mut AppState) {
    if let Err(e) = state.storage.save(state.features.features()) {
        log::warn!("Features konnten nicht gespeichert werden: {}", e);
    }
}

/// Entfernt alle gespeicherten Daten. Das Repository im Speicher bleibt unverändert.
pub fn clear_storage(state: &mut AppState) {
    match state.storage.clear() {
        Ok(()) => state.ui.set_status("Gespeicherte Daten entfernt"),
        Err(e) => log::warn!("Speicher konnte nicht geleert werden: {}", e),
    }
}
