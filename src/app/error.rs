//! Fehler der Zeichen- und Bearbeitungs-Sitzungen.

/// Abgelehnte Editor-Operation. Der Zustand bleibt in jedem Fall unverändert.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// Operation im falschen Sitzungszustand aufgerufen
    #[error("Ungültiger Zustand: {0}")]
    InvalidState(&'static str),
    /// Zeichnung hat noch nicht genug Punkte für den Typ
    #[error("Zu wenige Punkte: {actual} von mindestens {required}")]
    InsufficientPoints {
        /// Mindestanzahl des Typs
        required: usize,
        /// Aktuelle Anzahl
        actual: usize,
    },
    /// Entfernen würde die Mindestanzahl unterschreiten
    #[error("Mindestens {minimum} Punkte erforderlich")]
    BelowMinimumPoints {
        /// Mindestanzahl des Typs
        minimum: usize,
    },
    /// Einfügen würde die Höchstanzahl überschreiten (Punkt-Marker)
    #[error("Höchstens {maximum} Punkte erlaubt")]
    TooManyPoints {
        /// Höchstanzahl des Typs
        maximum: usize,
    },
    /// Index liegt außerhalb der Arbeitskoordinaten
    #[error("Punkt-Index {index} außerhalb (Länge {len})")]
    VertexOutOfRange {
        /// Angefragter Index
        index: usize,
        /// Länge der Arbeitskoordinaten
        len: usize,
    },
    /// Feature-ID existiert nicht
    #[error("Feature '{id}' nicht gefunden")]
    NotFound {
        /// Gesuchte ID
        id: String,
    },
}
