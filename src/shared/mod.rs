//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Optionen und die Stil-Tabelle, die zwischen `app` und der
//! (externen) Kartenanzeige geteilt werden.

pub mod options;
pub mod style;

pub use options::EditorOptions;
pub use options::{MAX_LEVEL, SELECT_ZOOM};
pub use style::{style_for, style_for_type, FeatureStyle};
