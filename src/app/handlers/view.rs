//! Handler für Etage, Auswahl und Deep-Links.

use crate::app::use_cases;
use crate::app::AppState;
use url::Url;

/// Wechselt die angezeigte Etage.
pub fn set_level(state: &mut AppState, level: u32) {
    use_cases::view::set_level(state, level);
}

/// Wählt ein Feature per Kartenklick aus.
pub fn select_on_map(state: &mut AppState, id: &str) {
    use_cases::view::select_on_map(state, id);
}

/// Hebt die Auswahl auf.
pub fn clear_selection(state: &mut AppState) {
    use_cases::view::clear_selection(state);
}

/// Wählt ein Feature aus der Liste aus.
pub fn select_from_list(state: &mut AppState, id: &str) {
    use_cases::view::select_from_list(state, id);
}

/// Erzeugt den Deep-Link eines Features.
pub fn copy_link(state: &mut AppState, id: &str) {
    use_cases::deep_link::copy_link(state, id);
}

/// Übernimmt die Start-Adresse.
pub fn apply_deep_link(state: &mut AppState, url: Url) {
    use_cases::deep_link::apply_deep_link(state, url);
}
