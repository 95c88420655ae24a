//! Darstellungs-Vorgaben pro Feature-Typ (Vertrag zur Kartenanzeige).

use crate::core::{Feature, FeatureType};

/// Stil-Direktive für die Kartenanzeige.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureStyle {
    /// Füllfarbe (Hex)
    pub fill_color: String,
    /// Randfarbe (Hex)
    pub border_color: String,
    /// Linienstärke in Pixeln
    pub weight: f32,
    /// Deckkraft der Füllung
    pub fill_opacity: f32,
}

/// Randfarbe ohne eigene Angabe.
pub const DEFAULT_BORDER_COLOR: &str = "#000000";
/// Standard-Linienstärke.
pub const DEFAULT_WEIGHT: f32 = 2.0;
/// Linienstärke für Gebäudeumrisse.
pub const BUILDING_WEIGHT: f32 = 3.0;
/// Deckkraft der Füllung.
pub const DEFAULT_FILL_OPACITY: f32 = 0.2;
/// Neutrale Füllfarbe.
pub const NEUTRAL_FILL_COLOR: &str = "#3388FF";

impl Default for FeatureStyle {
    /// Neutraler Stil für alles ohne Typ-Eintrag.
    fn default() -> Self {
        Self {
            fill_color: NEUTRAL_FILL_COLOR.to_string(),
            border_color: DEFAULT_BORDER_COLOR.to_string(),
            weight: DEFAULT_WEIGHT,
            fill_opacity: DEFAULT_FILL_OPACITY,
        }
    }
}

/// Standard-Füllfarbe eines Typs.
pub fn default_fill_color(feature_type: FeatureType) -> &'static str {
    match feature_type {
        FeatureType::Room => "#4CAF50",
        FeatureType::Corridor => "#9E9E9E",
        FeatureType::Stairs => "#FF9800",
        FeatureType::Elevator => "#2196F3",
        FeatureType::Shop => "#E91E63",
        FeatureType::Restaurant => "#F44336",
        FeatureType::Lounge => "#9C27B0",
        FeatureType::Terminal => "#3F51B5",
        FeatureType::Gate => "#009688",
        FeatureType::Checkin => "#795548",
        FeatureType::Security => "#607D8B",
        FeatureType::Baggage => "#FFC107",
        FeatureType::Building => "#000000",
        FeatureType::Toilet => "#00BCD4",
        FeatureType::Point => "#FF0000",
    }
}

/// Stil eines Typs ohne feature-eigene Farben.
pub fn style_for_type(feature_type: FeatureType) -> FeatureStyle {
    FeatureStyle {
        fill_color: default_fill_color(feature_type).to_string(),
        weight: if feature_type == FeatureType::Building {
            BUILDING_WEIGHT
        } else {
            DEFAULT_WEIGHT
        },
        ..FeatureStyle::default()
    }
}

/// Stil eines Features: Typ-Vorgaben, überschrieben von `fillColor`/`borderColor`.
pub fn style_for(feature: &Feature) -> FeatureStyle {
    let mut style = style_for_type(feature.feature_type);
    if let Some(fill) = &feature.properties.fill_color {
        style.fill_color = fill.clone();
    }
    if let Some(border) = &feature.properties.border_color {
        style.border_color = border.clone();
    }
    style
}
