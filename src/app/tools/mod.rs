//! Interaktive Sitzungen für das Erstellen und Bearbeiten von Features.
//!
//! Beide Sitzungen erzeugen nur Daten; die Mutation des Repositories erfolgt
//! zentral in `use_cases::editing`.

/// Punktweises Zeichnen neuer Features.
pub mod drawing;
/// Punkt-Bearbeitung bestehender Features.
pub mod geometry_edit;

pub use drawing::{build_feature, DrawingSession};
pub use geometry_edit::{EditDraft, GeometryEditSession};
