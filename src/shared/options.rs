//! Zentrale Konfiguration für den Indoor-Map-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Etagen ──────────────────────────────────────────────────────────

/// Höchste Etage (Etagen laufen von 1 bis `MAX_LEVEL`).
pub const MAX_LEVEL: u32 = 2;
/// Etage beim Start.
pub const INITIAL_LEVEL: u32 = 1;

// ── Kamera ──────────────────────────────────────────────────────────

/// Startmittelpunkt (King Abdulaziz International Airport, Jeddah).
pub const INITIAL_CENTER: [f64; 2] = [21.660706, 39.173765];
/// Start-Zoomstufe.
pub const INITIAL_ZOOM: f64 = 19.0;
/// Zoomstufe beim Auswählen aus der Feature-Liste.
pub const SELECT_ZOOM: f64 = 20.0;
/// Zoomstufe beim Anklicken eines Features auf der Karte.
pub const CLICK_ZOOM: f64 = 19.0;

// ── Bearbeitung ─────────────────────────────────────────────────────

/// Füllfarbe im Bearbeiten-Dialog, wenn das Feature keine eigene hat.
pub const EDIT_FILL_COLOR_DEFAULT: &str = "#4CAF50";
/// Randfarbe im Bearbeiten-Dialog, wenn das Feature keine eigene hat.
pub const EDIT_BORDER_COLOR_DEFAULT: &str = "#000000";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `indoor_map_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Etagen ──────────────────────────────────────────────────
    /// Höchste Etage; Gebäudeumrisse werden auf 1..=max_level kopiert
    pub max_level: u32,
    /// Etage beim Start
    pub initial_level: u32,

    // ── Kamera ──────────────────────────────────────────────────
    /// Startmittelpunkt `[lat, lng]`
    pub initial_center: [f64; 2],
    /// Start-Zoomstufe
    pub initial_zoom: f64,
    /// Zoomstufe beim Auswählen aus der Liste
    #[serde(default = "default_select_zoom")]
    pub select_zoom: f64,
    /// Zoomstufe beim Anklicken auf der Karte
    #[serde(default = "default_click_zoom")]
    pub click_zoom: f64,

    // ── Bearbeitung ─────────────────────────────────────────────
    /// Zeichnen, Bearbeiten, Löschen und Undo erlaubt.
    ///
    /// Standard `true`: der Editor ist das Werkzeug zum Pflegen der Daten. Für eine
    /// reine Anzeige `editing_enabled = false` in der TOML-Datei setzen.
    #[serde(default = "default_editing_enabled")]
    pub editing_enabled: bool,
    /// Vorbelegung der Füllfarbe im Bearbeiten-Dialog
    pub edit_fill_color_default: String,
    /// Vorbelegung der Randfarbe im Bearbeiten-Dialog
    pub edit_border_color_default: String,

    // ── Speicher ────────────────────────────────────────────────
    /// Schlüssel im Blob-Speicher
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            max_level: MAX_LEVEL,
            initial_level: INITIAL_LEVEL,
            initial_center: INITIAL_CENTER,
            initial_zoom: INITIAL_ZOOM,
            select_zoom: SELECT_ZOOM,
            click_zoom: CLICK_ZOOM,
            editing_enabled: true,
            edit_fill_color_default: EDIT_FILL_COLOR_DEFAULT.to_string(),
            edit_border_color_default: EDIT_BORDER_COLOR_DEFAULT.to_string(),
            storage_key: default_storage_key(),
        }
    }
}

/// Serde-Default für `select_zoom` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_select_zoom() -> f64 {
    SELECT_ZOOM
}

/// Serde-Default für `click_zoom`.
fn default_click_zoom() -> f64 {
    CLICK_ZOOM
}

fn default_editing_enabled() -> bool {
    true
}

fn default_storage_key() -> String {
    crate::storage::DEFAULT_STORAGE_KEY.to_string()
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("indoor_map_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("indoor_map_editor.toml")
    }

    /// Prüft ob `level` eine gültige Etage ist.
    pub fn is_valid_level(&self, level: u32) -> bool {
        (1..=self.max_level).contains(&level)
    }

    /// Korrigiert unmögliche Werte (mindestens eine Etage, Startetage im Bereich).
    fn sanitized(mut self) -> Self {
        if self.max_level == 0 {
            log::warn!("max_level = 0 ungültig, verwende 1");
            self.max_level = 1;
        }
        self.initial_level = self.initial_level.clamp(1, self.max_level);
        self
    }
}
