use crate::core::{FeatureType, LatLng};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    // === Zeichnen ===
    /// Zeichenmodus für einen Feature-Typ wählen
    DrawingStartRequested { feature_type: FeatureType },
    /// Punkt zur laufenden Zeichnung hinzufügen
    DrawingPointAdded { position: LatLng },
    /// Klick auf eine freie Kartenstelle (Zeichnen: Punkt, sonst Auswahl aufheben)
    MapClicked { position: LatLng },
    /// Zuletzt gesetzten Punkt entfernen
    DrawingLastPointRemoved,
    /// Name des neuen Features geändert
    DrawingLabelChanged { text: String },
    /// Zeichnung verwerfen
    DrawingCancelRequested,
    /// Zeichnung abschließen
    DrawingCompleteRequested,

    // === Bearbeiten ===
    /// Name/Beschreibung eines Features ändern
    FeaturePropertiesEdited {
        id: String,
        name: String,
        description: String,
    },
    /// Feature löschen
    FeatureDeleteRequested { id: String },
    /// Letzte strukturelle Änderung rückgängig machen
    UndoRequested,

    // === Geometrie-Bearbeitung ===
    /// Punkt-Bearbeitung eines Features starten
    GeometryEditRequested { id: String },
    /// Punkt hinter `after_index` einfügen
    VertexInsertRequested { after_index: usize, position: LatLng },
    /// Mittelpunkt der Kante `edge_index → edge_index + 1` einfügen
    EdgeMidpointInsertRequested { edge_index: usize },
    /// Punkt an `index` verschoben (Drag-Ende)
    VertexMoved { index: usize, position: LatLng },
    /// Punkt an `index` entfernen
    VertexRemoveRequested { index: usize },
    /// Arbeits-Eigenschaften im Bearbeiten-Dialog geändert
    WorkingPropertiesChanged {
        name: String,
        description: String,
        fill_color: String,
        border_color: String,
    },
    /// Bearbeitung verwerfen
    GeometryEditCancelRequested,
    /// Bearbeitung speichern
    GeometryEditSaveRequested,

    // === Ansicht & Navigation ===
    /// Etage wechseln
    LevelChangeRequested { level: u32 },
    /// Feature auf der Karte angeklickt (`None` = Klick ins Leere)
    FeatureClicked { id: Option<String> },
    /// Feature in der Seitenleiste ausgewählt
    FeatureListSelected { id: String },
    /// Deep-Link für ein Feature erzeugen
    CopyLinkRequested { id: String },
    /// Anwendung mit Adresse geöffnet (Basis für Deep-Links, ggf. mit `entity`)
    DeepLinkOpened { url: String },

    // === Speicher ===
    /// Alle gespeicherten Daten entfernen
    ClearStorageRequested,
}

impl AppIntent {
    /// Gibt `true` zurück, wenn der Intent Features oder Sitzungen verändert.
    ///
    /// Bei deaktivierter Bearbeitung werden diese Intents verworfen.
    pub fn is_mutating(&self) -> bool {
        !matches!(
            self,
            AppIntent::MapClicked { .. }
                | AppIntent::LevelChangeRequested { .. }
                | AppIntent::FeatureClicked { .. }
                | AppIntent::FeatureListSelected { .. }
                | AppIntent::CopyLinkRequested { .. }
                | AppIntent::DeepLinkOpened { .. }
        )
    }
}
