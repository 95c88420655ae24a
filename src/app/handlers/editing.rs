//! Handler für Eigenschafts-Änderungen und Löschen.

use crate::app::use_cases;
use crate::app::AppState;

/// Ändert Name und Beschreibung eines Features.
pub fn edit_properties(state: &mut AppState, id: &str, name: &str, description: &str) {
    use_cases::editing::edit_properties(state, id, name, description);
}

/// Löscht ein Feature.
pub fn delete(state: &mut AppState, id: &str) {
    use_cases::editing::delete_feature(state, id);
}
