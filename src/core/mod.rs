//! Core-Domänentypen: Features, Feature-Repository und Geometrie-Hilfen.

/// Core-Datenmodelle für Indoor-Karten
///
/// - Feature: Raum, Gang, POI oder Gebäudeumriss auf einer Etage
/// - FeatureStore: Container für alle Features
pub mod feature;
pub mod feature_store;
pub mod geometry;

pub use feature::{Feature, FeatureCategory, FeatureProperties, FeatureType, LatLng};
pub use feature_store::FeatureStore;
