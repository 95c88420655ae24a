//! Use-Case-Funktionen für das Feature-Repository (Mutation Engine).
//!
//! Aufgeteilt nach Operation:
//! - `commit_feature`: Neues Feature anlegen (Gebäudeumrisse auf alle Etagen)
//! - `edit_properties`: Name/Beschreibung ändern
//! - `delete_feature`: Feature löschen
//! - `save_geometry`: Arbeitskopie der Geometrie-Bearbeitung zurückschreiben
//!
//! Nur Anlegen und Löschen legen einen Undo-Snapshot ab. Jede Mutation
//! schreibt anschließend das vollständige Repository in die Storage.

mod commit_feature;
mod delete_feature;
mod edit_properties;
mod save_geometry;

pub use commit_feature::{building_copies, commit_new_feature};
pub use delete_feature::delete_feature;
pub use edit_properties::edit_properties;
pub use save_geometry::save_geometry_edit;
