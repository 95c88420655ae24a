//! Laden/Speichern der Feature-Liste als versionierter JSON-Snapshot.

use super::{BlobStore, MemoryBlobStore, StorageError};
use crate::core::Feature;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Standard-Schlüssel im Blob-Speicher.
pub const DEFAULT_STORAGE_KEY: &str = "indoor_map_features";

/// Schema-Version der gespeicherten Daten.
pub const SCHEMA_VERSION: &str = "1.0";

/// Gespeicherter Datensatz: `{ features, lastModified, version }`.
///
/// Nur `features` ist Pflicht. Fehlende oder unlesbare Metadaten dürfen die
/// Features nicht blockieren.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFeatures {
    /// Vollständiger Snapshot aller Features
    pub features: Vec<Feature>,
    /// Zeitpunkt des Speicherns (ISO 8601); `None` wenn fehlend oder unlesbar
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub last_modified: Option<DateTime<Utc>>,
    /// Schema-Version
    #[serde(default)]
    pub version: Option<String>,
}

/// Akzeptiert jeden JSON-Wert; nur RFC-3339-Strings ergeben einen Zeitstempel.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = value
        .as_str()
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|ts| ts.with_timezone(&Utc));
    if parsed.is_none() && !value.is_null() {
        log::warn!("Ungültiger Zeitstempel im Speicher ignoriert: {}", value);
    }
    Ok(parsed)
}

/// Serialisiert Features in das Speicherformat (aktueller Zeitstempel).
pub fn encode_features(features: &[Feature]) -> Result<String, StorageError> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct StoredRef<'a> {
        features: &'a [Feature],
        last_modified: DateTime<Utc>,
        version: &'a str,
    }

    let record = StoredRef {
        features,
        last_modified: Utc::now(),
        version: SCHEMA_VERSION,
    };
    Ok(serde_json::to_string(&record)?)
}

/// Parst einen gespeicherten Datensatz.
pub fn decode_features(raw: &str) -> Result<StoredFeatures, StorageError> {
    Ok(serde_json::from_str(raw)?)
}

/// Persistenz-Vertrag für die Feature-Liste über einem [`BlobStore`].
pub struct FeatureStorage {
    store: Box<dyn BlobStore>,
    key: String,
}

impl FeatureStorage {
    /// Erstellt eine Storage über `store` mit dem Standard-Schlüssel.
    pub fn new(store: impl BlobStore + 'static) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    /// Erstellt eine Storage mit eigenem Schlüssel.
    pub fn with_key(store: impl BlobStore + 'static, key: impl Into<String>) -> Self {
        Self {
            store: Box::new(store),
            key: key.into(),
        }
    }

    /// Flüchtige Storage (Standard für Tests und Headless-Betrieb).
    pub fn in_memory() -> Self {
        Self::new(MemoryBlobStore::new())
    }

    /// Verwendeter Schlüssel.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Strikte Variante von [`load`](Self::load): `Ok(None)` wenn nichts gespeichert ist.
    pub fn try_load(&self) -> Result<Option<StoredFeatures>, StorageError> {
        match self.store.get(&self.key)? {
            Some(raw) => decode_features(&raw).map(Some),
            None => Ok(None),
        }
    }

    /// Lädt die gespeicherten Features.
    ///
    /// Nichts gespeichert oder unlesbarer Inhalt → leere Liste (Fehler wird geloggt).
    pub fn load(&self) -> Vec<Feature> {
        match self.try_load() {
            Ok(Some(stored)) => {
                match stored.version.as_deref() {
                    Some(SCHEMA_VERSION) => {}
                    Some(other) => log::warn!(
                        "Gespeicherte Schema-Version '{}' weicht von '{}' ab",
                        other,
                        SCHEMA_VERSION
                    ),
                    None => log::warn!("Gespeicherte Daten ohne Schema-Version"),
                }
                match stored.last_modified {
                    Some(ts) => log::info!(
                        "{} Features geladen (Stand {})",
                        stored.features.len(),
                        ts.to_rfc3339()
                    ),
                    None => log::info!("{} Features geladen", stored.features.len()),
                }
                stored.features
            }
            Ok(None) => {
                log::info!("Keine gespeicherten Features gefunden");
                Vec::new()
            }
            Err(e) => {
                log::error!("Fehler beim Laden der Features: {}", e);
                Vec::new()
            }
        }
    }

    /// Überschreibt den gespeicherten Snapshot mit `features`.
    pub fn save(&mut self, features: &[Feature]) -> Result<(), StorageError> {
        let raw = encode_features(features)?;
        self.store.set(&self.key, &raw)?;
        log::debug!("{} Features gespeichert", features.len());
        Ok(())
    }

    /// Entfernt alle gespeicherten Daten.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.store.remove(&self.key)?;
        log::info!("Gespeicherte Features entfernt");
        Ok(())
    }
}

impl Default for FeatureStorage {
    fn default() -> Self {
        Self::in_memory()
    }
}
