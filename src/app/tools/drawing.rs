//! Zeichen-Sitzung: punktweiser Aufbau eines neuen Features.
//!
//! Zustände: `Idle` (kein Typ aktiv) → `Drawing(typ)` → `Idle`.
//! Die Sitzung erzeugt beim Abschließen nur Daten (`Feature`); das Einfügen ins
//! Repository übernimmt `use_cases::editing::commit_new_feature`.

use crate::app::EditError;
use crate::core::{Feature, FeatureProperties, FeatureType, LatLng};

/// Zustand der aktuellen Zeichnung.
#[derive(Debug, Clone, Default)]
pub struct DrawingSession {
    /// Aktiver Typ (`None` = Idle)
    mode: Option<FeatureType>,
    /// Bisher gesetzte Punkte
    points: Vec<LatLng>,
    /// Optionaler Name für das neue Feature
    label: String,
}

impl DrawingSession {
    /// Erstellt eine inaktive Sitzung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktiver Typ, falls gezeichnet wird.
    pub fn mode(&self) -> Option<FeatureType> {
        self.mode
    }

    /// Gibt `true` zurück, solange gezeichnet wird.
    pub fn is_drawing(&self) -> bool {
        self.mode.is_some()
    }

    /// Bisher gesetzte Punkte.
    pub fn points(&self) -> &[LatLng] {
        &self.points
    }

    /// Anzahl gesetzter Punkte.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Aktueller Arbeitsname.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Gibt `true` zurück, wenn `complete` erfolgreich wäre.
    pub fn can_complete(&self) -> bool {
        self.mode
            .is_some_and(|t| self.points.len() >= t.min_points())
    }

    /// Kurzer Hinweis für die Statuszeile.
    pub fn status_text(&self) -> String {
        match self.mode {
            None => "Typ wählen, um ein Feature zu zeichnen".to_string(),
            Some(t) if self.points.len() < t.min_points() => format!(
                "{}: noch {} Punkt(e) setzen",
                t.display_name(),
                t.min_points() - self.points.len()
            ),
            Some(t) => format!(
                "{}: bereit (Abschließen oder weitere Punkte setzen)",
                t.display_name()
            ),
        }
    }

    /// Startet eine neue Zeichnung vom Typ `feature_type`.
    pub fn start(&mut self, feature_type: FeatureType) -> Result<(), EditError> {
        if let Some(active) = self.mode {
            log::warn!(
                "Zeichnen von {} nicht möglich: {} ist noch aktiv",
                feature_type,
                active
            );
            return Err(EditError::InvalidState("Es wird bereits gezeichnet"));
        }
        self.reset_to(Some(feature_type));
        log::info!("Zeichnen gestartet: {}", feature_type);
        Ok(())
    }

    /// Hängt einen Punkt an.
    pub fn add_point(&mut self, point: LatLng) -> Result<(), EditError> {
        if self.mode.is_none() {
            return Err(EditError::InvalidState("Kein Zeichenmodus aktiv"));
        }
        self.points.push(point);
        log::debug!(
            "Punkt {} gesetzt ({:.6}, {:.6})",
            self.points.len(),
            point.x,
            point.y
        );
        Ok(())
    }

    /// Entfernt den zuletzt gesetzten Punkt.
    pub fn remove_last_point(&mut self) -> Result<LatLng, EditError> {
        if self.mode.is_none() {
            return Err(EditError::InvalidState("Kein Zeichenmodus aktiv"));
        }
        self.points
            .pop()
            .ok_or(EditError::InvalidState("Keine Punkte zum Entfernen"))
    }

    /// Setzt den Arbeitsnamen.
    pub fn set_label(&mut self, text: impl Into<String>) -> Result<(), EditError> {
        if self.mode.is_none() {
            return Err(EditError::InvalidState("Kein Zeichenmodus aktiv"));
        }
        self.label = text.into();
        Ok(())
    }

    /// Verwirft die Zeichnung.
    pub fn cancel(&mut self) -> Result<(), EditError> {
        let Some(active) = self.mode else {
            return Err(EditError::InvalidState("Kein Zeichenmodus aktiv"));
        };
        self.reset_to(None);
        log::info!("Zeichnen von {} abgebrochen", active);
        Ok(())
    }

    /// Schließt die Zeichnung ab und liefert das neue Feature.
    ///
    /// `feature_count` ist die aktuelle Anzahl Features im Repository (für den
    /// Standardnamen). Bei zu wenigen Punkten bleibt die Sitzung unverändert.
    pub fn complete(&mut self, level: u32, feature_count: usize) -> Result<Feature, EditError> {
        let Some(feature_type) = self.mode else {
            return Err(EditError::InvalidState("Kein Zeichenmodus aktiv"));
        };
        let required = feature_type.min_points();
        if self.points.len() < required {
            return Err(EditError::InsufficientPoints {
                required,
                actual: self.points.len(),
            });
        }

        let mut points = std::mem::take(&mut self.points);
        if feature_type.is_point() {
            // Punkt-Marker: letzter Klick zählt
            points.drain(..points.len() - 1);
        }
        let label = std::mem::take(&mut self.label);
        self.reset_to(None);

        Ok(build_feature(feature_type, points, &label, level, feature_count))
    }

    fn reset_to(&mut self, mode: Option<FeatureType>) {
        self.mode = mode;
        self.points.clear();
        self.label.clear();
    }
}

/// Baut ein neues Feature mit generierter ID und Standardtexten.
///
/// Name: `label` falls nicht leer, sonst `"{Typ} {feature_count + 1}"`.
pub fn build_feature(
    feature_type: FeatureType,
    coordinates: Vec<LatLng>,
    label: &str,
    level: u32,
    feature_count: usize,
) -> Feature {
    let name = if label.trim().is_empty() {
        format!("{} {}", feature_type.display_name(), feature_count + 1)
    } else {
        label.to_string()
    };
    let description = format!("A {} on level {}", feature_type, level);
    Feature::new(
        Feature::generate_id(),
        feature_type,
        level,
        coordinates,
        FeatureProperties::new(name, description),
    )
}
