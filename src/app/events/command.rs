use crate::core::{FeatureType, LatLng};
use url::Url;

/// Mutierende Commands, die vom Controller zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // === Zeichnen ===
    /// Zeichnen eines Features vom Typ starten
    StartDrawing { feature_type: FeatureType },
    /// Punkt anhängen (ignoriert, wenn nicht gezeichnet wird)
    AddDrawingPoint { position: LatLng },
    /// Letzten Punkt entfernen
    RemoveLastDrawingPoint,
    /// Arbeitsnamen setzen
    SetDrawingLabel { text: String },
    /// Zeichnung verwerfen
    CancelDrawing,
    /// Zeichnung abschließen und Feature anlegen
    CompleteDrawing,

    // === Bearbeiten ===
    /// Name/Beschreibung ersetzen (ohne Undo-Snapshot)
    EditFeatureProperties {
        id: String,
        name: String,
        description: String,
    },
    /// Feature löschen (mit Undo-Snapshot)
    DeleteFeature { id: String },
    /// Undo ausführen
    Undo,

    // === Geometrie-Bearbeitung ===
    /// Bearbeitung beginnen
    BeginGeometryEdit { id: String },
    /// Punkt einfügen
    InsertVertex { after_index: usize, position: LatLng },
    /// Punkt ersetzen
    MoveVertex { index: usize, position: LatLng },
    /// Punkt entfernen
    RemoveVertex { index: usize },
    /// Arbeits-Eigenschaften setzen
    SetWorkingProperties {
        name: String,
        description: String,
        fill_color: String,
        border_color: String,
    },
    /// Bearbeitung verwerfen
    CancelGeometryEdit,
    /// Bearbeitung zurückschreiben
    SaveGeometryEdit,

    // === Ansicht & Navigation ===
    /// Etage setzen
    SetLevel { level: u32 },
    /// Feature auf der Karte auswählen
    SelectFeatureOnMap { id: String },
    /// Auswahl aufheben
    ClearSelection,
    /// Feature aus der Liste auswählen
    SelectFeatureFromList { id: String },
    /// Deep-Link erzeugen und merken
    CopyFeatureLink { id: String },
    /// Basis-Adresse übernehmen und ggf. `entity` anspringen
    ApplyDeepLink { url: Url },

    // === Speicher ===
    /// Gespeicherte Daten entfernen
    ClearStorage,
}
