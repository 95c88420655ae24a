use crate::core::LatLng;
use crate::shared::EditorOptions;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Angezeigte Etage (1..=max_level)
    pub current_level: u32,
    /// Kartenmittelpunkt
    pub center: LatLng,
    /// Zoomstufe der Karte
    pub zoom: f64,
    /// Aktuell ausgewähltes Feature
    pub selected_feature_id: Option<String>,
}

impl ViewState {
    /// Erstellt den Start-View aus den Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        let [lat, lng] = options.initial_center;
        Self {
            current_level: options.initial_level,
            center: LatLng::new(lat, lng),
            zoom: options.initial_zoom,
            selected_feature_id: None,
        }
    }

    /// Zentriert die Karte auf `center` mit Zoomstufe `zoom`.
    pub fn focus(&mut self, center: LatLng, zoom: f64) {
        self.center = center;
        self.zoom = zoom;
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default())
    }
}
