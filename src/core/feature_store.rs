//! Feature-Repository: geordnete Liste aller Features mit eindeutigen IDs.

use super::Feature;
use std::collections::HashSet;

/// In-Memory-Sammlung aller Features.
///
/// Reihenfolge = Einfügereihenfolge. IDs sind jederzeit eindeutig.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureStore {
    features: Vec<Feature>,
}

impl FeatureStore {
    /// Erstellt ein leeres Repository.
    pub fn new() -> Self {
        Self {
            features: Vec::new(),
        }
    }

    /// Baut ein Repository aus einer geladenen Liste.
    ///
    /// Features mit bereits vergebener ID werden verworfen (erstes gewinnt).
    pub fn from_features(features: Vec<Feature>) -> Self {
        let mut seen = HashSet::with_capacity(features.len());
        let mut kept = Vec::with_capacity(features.len());
        for feature in features {
            if seen.insert(feature.id.clone()) {
                kept.push(feature);
            } else {
                log::warn!("Doppelte Feature-ID '{}' verworfen", feature.id);
            }
        }
        Self { features: kept }
    }

    /// Baut ein Repository aus gespeicherten Daten.
    ///
    /// Verwirft zusätzlich Features mit Etage außerhalb `1..=max_level` oder
    /// unpassender Punktzahl, danach wie [`from_features`](Self::from_features).
    pub fn from_stored(features: Vec<Feature>, max_level: u32) -> Self {
        let valid = features
            .into_iter()
            .filter(|feature| {
                if !(1..=max_level).contains(&feature.level) {
                    log::warn!(
                        "Feature '{}' mit ungültiger Etage {} verworfen",
                        feature.id,
                        feature.level
                    );
                    return false;
                }
                if !feature.has_valid_point_count() {
                    log::warn!(
                        "Feature '{}' ({}) mit {} Punkten verworfen",
                        feature.id,
                        feature.feature_type.as_str(),
                        feature.coordinates.len()
                    );
                    return false;
                }
                true
            })
            .collect();
        Self::from_features(valid)
    }

    /// Anzahl aller Features (alle Etagen).
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Gibt `true` zurück, wenn keine Features vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Read-only Sicht auf alle Features.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Iteriert über alle Features.
    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }

    /// Prüft ob eine ID vergeben ist.
    pub fn contains(&self, id: &str) -> bool {
        self.features.iter().any(|f| f.id == id)
    }

    /// Sucht ein Feature per ID.
    pub fn get(&self, id: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.id == id)
    }

    /// Sucht ein Feature per ID (mutable).
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Feature> {
        self.features.iter_mut().find(|f| f.id == id)
    }

    /// Hängt ein Feature an. Gibt `false` zurück (und fügt nichts ein), wenn die ID
    /// bereits vergeben ist.
    pub fn insert(&mut self, feature: Feature) -> bool {
        if self.contains(&feature.id) {
            log::warn!("Feature-ID '{}' existiert bereits", feature.id);
            return false;
        }
        self.features.push(feature);
        true
    }

    /// Entfernt das Feature mit der ID.
    pub fn remove(&mut self, id: &str) -> Option<Feature> {
        let index = self.features.iter().position(|f| f.id == id)?;
        Some(self.features.remove(index))
    }

    /// Alle Features einer Etage.
    pub fn on_level(&self, level: u32) -> impl Iterator<Item = &Feature> {
        self.features.iter().filter(move |f| f.level == level)
    }

    /// Features einer Etage, deren Name oder Typ `query` enthält (case-insensitive).
    ///
    /// Leere Suche liefert alle Features der Etage.
    pub fn search(&self, level: u32, query: &str) -> Vec<&Feature> {
        let needle = query.trim().to_lowercase();
        self.on_level(level)
            .filter(|f| {
                needle.is_empty()
                    || f.properties.name.to_lowercase().contains(&needle)
                    || f.feature_type.as_str().contains(&needle)
            })
            .collect()
    }
}
