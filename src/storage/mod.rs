//! Persistenz-Grenze: Feature-Snapshots über einen Key-Value-Blob-Speicher.
//!
//! Das Speichermedium (Datei, Browser-Storage, Remote) steckt hinter `BlobStore`,
//! das Format (`{ features, lastModified, version }`) in `feature_storage`.

pub mod blob_store;
pub mod feature_storage;

pub use blob_store::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use feature_storage::{
    decode_features, encode_features, FeatureStorage, StoredFeatures, DEFAULT_STORAGE_KEY,
    SCHEMA_VERSION,
};

/// Fehler an der Persistenz-Grenze.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Lesen/Schreiben des Mediums fehlgeschlagen
    #[error("Speicherzugriff fehlgeschlagen: {0}")]
    Io(#[from] std::io::Error),
    /// Gespeicherter Inhalt ist kein gültiger Feature-Snapshot
    #[error("Gespeicherte Daten nicht lesbar: {0}")]
    Json(#[from] serde_json::Error),
}
