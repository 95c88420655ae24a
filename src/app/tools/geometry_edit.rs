//! Geometrie-Bearbeitung: Punkte eines bestehenden Features einfügen, verschieben, löschen.
//!
//! Zustände: `NotEditing` → `Editing(feature_id)` → `NotEditing`.
//! Alle Änderungen laufen auf einer Arbeitskopie; erst `finish` gibt sie an
//! `use_cases::editing::save_geometry_edit` zum Zurückschreiben heraus.

use crate::app::EditError;
use crate::core::{Feature, FeatureType, LatLng};

/// Arbeitskopie eines Features während der Bearbeitung.
#[derive(Debug, Clone, PartialEq)]
pub struct EditDraft {
    /// ID des bearbeiteten Features
    pub feature_id: String,
    /// Typ (bestimmt Mindest-/Höchstanzahl Punkte)
    pub feature_type: FeatureType,
    /// Arbeitskoordinaten
    pub coords: Vec<LatLng>,
    /// Arbeitsname
    pub name: String,
    /// Arbeitsbeschreibung
    pub description: String,
    /// Arbeits-Füllfarbe
    pub fill_color: String,
    /// Arbeits-Randfarbe
    pub border_color: String,
}

/// Zustand der Geometrie-Bearbeitung.
#[derive(Debug, Clone, Default)]
pub struct GeometryEditSession {
    draft: Option<EditDraft>,
}

impl GeometryEditSession {
    /// Erstellt eine inaktive Sitzung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, solange ein Feature bearbeitet wird.
    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// ID des bearbeiteten Features.
    pub fn feature_id(&self) -> Option<&str> {
        self.draft.as_ref().map(|d| d.feature_id.as_str())
    }

    /// Aktuelle Arbeitskopie.
    pub fn draft(&self) -> Option<&EditDraft> {
        self.draft.as_ref()
    }

    /// Arbeitskoordinaten (leer wenn nicht bearbeitet wird).
    pub fn coords(&self) -> &[LatLng] {
        self.draft
            .as_ref()
            .map(|d| d.coords.as_slice())
            .unwrap_or_default()
    }

    /// Beginnt die Bearbeitung von `feature`.
    ///
    /// Fehlende Farben werden mit `fill_default`/`border_default` vorbelegt.
    /// Erneutes Beginnen mit demselben Feature lässt die Arbeitskopie unverändert.
    pub fn begin(
        &mut self,
        feature: &Feature,
        fill_default: &str,
        border_default: &str,
    ) -> Result<(), EditError> {
        if let Some(draft) = &self.draft {
            if draft.feature_id == feature.id {
                log::debug!("Feature '{}' wird bereits bearbeitet", feature.id);
                return Ok(());
            }
            log::warn!(
                "Bearbeitung von '{}' nicht möglich: '{}' ist noch offen",
                feature.id,
                draft.feature_id
            );
            return Err(EditError::InvalidState("Es wird bereits ein Feature bearbeitet"));
        }

        let props = &feature.properties;
        self.draft = Some(EditDraft {
            feature_id: feature.id.clone(),
            feature_type: feature.feature_type,
            coords: feature.coordinates.clone(),
            name: props.name.clone(),
            description: props.description.clone(),
            fill_color: props
                .fill_color
                .clone()
                .unwrap_or_else(|| fill_default.to_string()),
            border_color: props
                .border_color
                .clone()
                .unwrap_or_else(|| border_default.to_string()),
        });
        log::info!("Bearbeitung von '{}' gestartet", feature.id);
        Ok(())
    }

    /// Fügt `point` direkt hinter `after_index` ein (Kantenmittelpunkt).
    pub fn insert_vertex(&mut self, after_index: usize, point: LatLng) -> Result<(), EditError> {
        let draft = self.draft_mut()?;
        let len = draft.coords.len();
        if after_index >= len {
            return Err(EditError::VertexOutOfRange {
                index: after_index,
                len,
            });
        }
        if let Some(maximum) = draft.feature_type.max_points() {
            if len >= maximum {
                return Err(EditError::TooManyPoints { maximum });
            }
        }
        draft.coords.insert(after_index + 1, point);
        Ok(())
    }

    /// Ersetzt den Punkt an `index`.
    pub fn move_vertex(&mut self, index: usize, new_point: LatLng) -> Result<(), EditError> {
        let draft = self.draft_mut()?;
        let len = draft.coords.len();
        let slot = draft
            .coords
            .get_mut(index)
            .ok_or(EditError::VertexOutOfRange { index, len })?;
        *slot = new_point;
        Ok(())
    }

    /// Entfernt den Punkt an `index`, sofern die Mindestanzahl erhalten bleibt.
    pub fn remove_vertex(&mut self, index: usize) -> Result<LatLng, EditError> {
        let draft = self.draft_mut()?;
        let len = draft.coords.len();
        let minimum = draft.feature_type.min_points();
        if len <= minimum {
            return Err(EditError::BelowMinimumPoints { minimum });
        }
        if index >= len {
            return Err(EditError::VertexOutOfRange { index, len });
        }
        Ok(draft.coords.remove(index))
    }

    /// Aktualisiert die Arbeits-Eigenschaften.
    pub fn set_working_properties(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        fill_color: impl Into<String>,
        border_color: impl Into<String>,
    ) -> Result<(), EditError> {
        let draft = self.draft_mut()?;
        draft.name = name.into();
        draft.description = description.into();
        draft.fill_color = fill_color.into();
        draft.border_color = border_color.into();
        Ok(())
    }

    /// Verwirft die Arbeitskopie.
    pub fn cancel(&mut self) -> Result<(), EditError> {
        let draft = self
            .draft
            .take()
            .ok_or(EditError::InvalidState("Keine Bearbeitung aktiv"))?;
        log::info!("Bearbeitung von '{}' verworfen", draft.feature_id);
        Ok(())
    }

    /// Beendet die Bearbeitung und gibt die Arbeitskopie zum Speichern heraus.
    pub fn finish(&mut self) -> Result<EditDraft, EditError> {
        self.draft
            .take()
            .ok_or(EditError::InvalidState("Keine Bearbeitung aktiv"))
    }

    fn draft_mut(&mut self) -> Result<&mut EditDraft, EditError> {
        self.draft
            .as_mut()
            .ok_or(EditError::InvalidState("Keine Bearbeitung aktiv"))
    }
}
