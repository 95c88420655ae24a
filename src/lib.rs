//! Indoor Map Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod storage;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditError, EditorState, UiState, ViewState,
};
pub use core::{Feature, FeatureCategory, FeatureProperties, FeatureStore, FeatureType, LatLng};
pub use shared::{style_for, EditorOptions, FeatureStyle};
pub use storage::{BlobStore, FeatureStorage, FileBlobStore, MemoryBlobStore, StorageError};
