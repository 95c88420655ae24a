use url::Url;

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Letzte Statusmeldung für die Statuszeile
    pub status_message: Option<String>,
    /// Basis-Adresse der Anwendung für Deep-Links
    pub base_url: Option<Url>,
    /// Aktuelle Adresse (wird beim Auswählen aus der Liste gesetzt)
    pub current_url: Option<Url>,
    /// Zuletzt per "Link kopieren" erzeugter Link
    pub copied_link: Option<String>,
}

impl UiState {
    /// Erstellt einen leeren UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt die Statusmeldung.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}
