//! Feature-Modell: Typ, Geometrie und Eigenschaften eines Karten-Objekts.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Geografischer Punkt: `x` = Breitengrad (lat), `y` = Längengrad (lng).
///
/// Serialisiert als `[lat, lng]`.
pub type LatLng = DVec2;

/// Geschlossene Aufzählung aller Feature-Arten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureType {
    /// Raum
    Room,
    /// Gang / Flur
    Corridor,
    /// Treppe
    Stairs,
    /// Aufzug
    Elevator,
    /// Geschäft
    Shop,
    /// Restaurant
    Restaurant,
    /// Flugsteig
    Gate,
    /// Check-in-Schalter
    Checkin,
    /// Sicherheitskontrolle
    Security,
    /// Gepäckausgabe
    Baggage,
    /// Terminal
    Terminal,
    /// Lounge
    Lounge,
    /// Gebäudeumriss (wird auf alle Etagen kopiert)
    Building,
    /// Toilette
    Toilet,
    /// Einzelner Punkt-Marker
    Point,
}

impl FeatureType {
    /// Alle Typen in Anzeige-Reihenfolge.
    pub const ALL: [FeatureType; 15] = [
        FeatureType::Room,
        FeatureType::Corridor,
        FeatureType::Stairs,
        FeatureType::Elevator,
        FeatureType::Shop,
        FeatureType::Restaurant,
        FeatureType::Gate,
        FeatureType::Checkin,
        FeatureType::Security,
        FeatureType::Baggage,
        FeatureType::Terminal,
        FeatureType::Lounge,
        FeatureType::Building,
        FeatureType::Toilet,
        FeatureType::Point,
    ];

    /// Serialisierter Name (`"room"`, `"checkin"`, …).
    pub fn as_str(self) -> &'static str {
        match self {
            FeatureType::Room => "room",
            FeatureType::Corridor => "corridor",
            FeatureType::Stairs => "stairs",
            FeatureType::Elevator => "elevator",
            FeatureType::Shop => "shop",
            FeatureType::Restaurant => "restaurant",
            FeatureType::Gate => "gate",
            FeatureType::Checkin => "checkin",
            FeatureType::Security => "security",
            FeatureType::Baggage => "baggage",
            FeatureType::Terminal => "terminal",
            FeatureType::Lounge => "lounge",
            FeatureType::Building => "building",
            FeatureType::Toilet => "toilet",
            FeatureType::Point => "point",
        }
    }

    /// Parst den serialisierten Namen (case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|t| t.as_str() == lower)
    }

    /// Name mit großem Anfangsbuchstaben, Basis für Standardnamen (`"Room 3"`).
    pub fn display_name(self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Minimale Anzahl Koordinaten für diesen Typ.
    pub fn min_points(self) -> usize {
        match self {
            FeatureType::Point => 1,
            _ => 3,
        }
    }

    /// Maximale Anzahl Koordinaten (`None` = unbegrenzt).
    pub fn max_points(self) -> Option<usize> {
        match self {
            FeatureType::Point => Some(1),
            _ => None,
        }
    }

    /// Prüft ob der Typ ein Punkt-Marker ist.
    pub fn is_point(self) -> bool {
        self == FeatureType::Point
    }

    /// Listen-Kategorie für die Gruppierung in der Feature-Liste.
    pub fn category(self) -> FeatureCategory {
        match self {
            FeatureType::Room | FeatureType::Corridor | FeatureType::Toilet => {
                FeatureCategory::Basic
            }
            FeatureType::Shop | FeatureType::Restaurant | FeatureType::Lounge => {
                FeatureCategory::Services
            }
            FeatureType::Gate
            | FeatureType::Checkin
            | FeatureType::Security
            | FeatureType::Baggage
            | FeatureType::Terminal => FeatureCategory::Airport,
            FeatureType::Building => FeatureCategory::Building,
            FeatureType::Stairs | FeatureType::Elevator | FeatureType::Point => {
                FeatureCategory::Basic
            }
        }
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gruppierung der Feature-Typen in der Listenansicht.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureCategory {
    /// Räume, Gänge, Toiletten (und alles ohne eigene Gruppe)
    Basic,
    /// Geschäfte, Restaurants, Lounges
    Services,
    /// Flughafen-spezifische Bereiche
    Airport,
    /// Gebäudeumrisse
    Building,
}

impl FeatureCategory {
    /// Überschrift der Kategorie.
    pub fn title(self) -> &'static str {
        match self {
            FeatureCategory::Basic => "Basic Features",
            FeatureCategory::Services => "Services",
            FeatureCategory::Airport => "Airport Features",
            FeatureCategory::Building => "Buildings",
        }
    }
}

/// Eigenschaften eines Features.
///
/// `name` und `description` sind Pflicht, Farben optional. Unbekannte Schlüssel
/// landen in `extra` und überleben Laden/Speichern unverändert.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureProperties {
    /// Anzeigename
    pub name: String,
    /// Freitext-Beschreibung
    pub description: String,
    /// Füllfarbe als Hex-String (überschreibt die Typ-Standardfarbe)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    /// Randfarbe als Hex-String
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    /// Erweiterungs-Attribute
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl FeatureProperties {
    /// Erstellt Eigenschaften ohne Farben und Zusatzattribute.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }
}

/// Ein vom Benutzer erstelltes Karten-Objekt auf genau einer Etage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Eindeutige, unveränderliche ID
    pub id: String,
    /// Feature-Art
    #[serde(rename = "type")]
    pub feature_type: FeatureType,
    /// Etage (1-basiert)
    pub level: u32,
    /// Punkt (1 Eintrag) oder implizit geschlossener Polygonring (≥ 3 Einträge)
    pub coordinates: Vec<LatLng>,
    /// Name, Beschreibung, Farben
    pub properties: FeatureProperties,
}

impl Feature {
    /// Erstellt ein Feature mit den gegebenen Werten.
    pub fn new(
        id: impl Into<String>,
        feature_type: FeatureType,
        level: u32,
        coordinates: Vec<LatLng>,
        properties: FeatureProperties,
    ) -> Self {
        Self {
            id: id.into(),
            feature_type,
            level,
            coordinates,
            properties,
        }
    }

    /// Erzeugt eine neue, global eindeutige Feature-ID.
    pub fn generate_id() -> String {
        format!("feature-{}", uuid::Uuid::new_v4())
    }

    /// Prüft die Punktanzahl-Invariante des Typs.
    pub fn has_valid_point_count(&self) -> bool {
        let len = self.coordinates.len();
        len >= self.feature_type.min_points()
            && self.feature_type.max_points().map_or(true, |max| len <= max)
    }

    /// Anzeigename (fällt bei leerem Namen auf den Typ zurück).
    pub fn label(&self) -> &str {
        if self.properties.name.is_empty() {
            self.feature_type.as_str()
        } else {
            &self.properties.name
        }
    }
}
