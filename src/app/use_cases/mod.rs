//! Use-Cases der Application-Layer-Orchestrierung.

pub mod deep_link;
pub mod editing;
pub mod history;
pub mod persistence;
pub mod view;
