use crate::app::tools::{DrawingSession, GeometryEditSession};

/// Zustand der interaktiven Sitzungen.
///
/// Zeichnen und Geometrie-Bearbeitung sind getrennte Zustandsautomaten; beide
/// schreiben erst über `use_cases::editing` ins Repository.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Zeichnen neuer Features
    pub drawing: DrawingSession,
    /// Bearbeitung eines bestehenden Features
    pub geometry_edit: GeometryEditSession,
}

impl EditorState {
    /// Erstellt den Ruhezustand (nichts wird gezeichnet oder bearbeitet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, wenn eine der beiden Sitzungen aktiv ist.
    pub fn is_busy(&self) -> bool {
        self.drawing.is_drawing() || self.geometry_edit.is_editing()
    }
}
