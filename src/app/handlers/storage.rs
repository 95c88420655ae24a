//! Handler für die Persistenz-Grenze.

use crate::app::use_cases;
use crate::app::AppState;

/// Entfernt alle gespeicherten Daten.
pub fn clear(state: &mut AppState) {
    use_cases::persistence::clear_storage(state);
}
