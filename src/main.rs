//! Indoor Map Editor (Headless).
//!
//! Kommandozeilen-Zugriff auf die gespeicherten Features: auflisten/suchen,
//! Deep-Links erzeugen und den Speicher leeren.

use anyhow::Context;
use clap::{Parser, Subcommand};
use indoor_map_editor::{
    style_for, AppController, AppIntent, AppState, EditorOptions, FeatureStorage, FileBlobStore,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "indoor-map-editor")]
#[command(about = "Indoor-Karten: gespeicherte Features verwalten", long_about = None)]
struct Cli {
    /// Verzeichnis des Feature-Speichers
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Optionen-Datei (Standard: neben der Binary)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Features einer Etage auflisten
    List {
        /// Etage (Standard: Start-Etage aus den Optionen)
        #[arg(long)]
        level: Option<u32>,

        /// Filter auf Name oder Typ (ohne Beachtung der Groß-/Kleinschreibung)
        #[arg(long)]
        search: Option<String>,
    },
    /// Deep-Link auf ein Feature ausgeben
    Link {
        /// Feature-ID
        id: String,

        /// Basis-Adresse der Karte
        #[arg(long)]
        base_url: String,
    },
    /// Gespeicherte Features entfernen
    Clear,
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(EditorOptions::config_path);
    let options = EditorOptions::load_from_file(&config_path);
    let storage = FeatureStorage::with_key(
        FileBlobStore::new(&cli.data_dir),
        options.storage_key.clone(),
    );

    log::info!(
        "Indoor Map Editor v{} (Speicher: {})",
        env!("CARGO_PKG_VERSION"),
        cli.data_dir.display()
    );

    let mut state = AppState::with_storage(storage, options);
    let mut controller = AppController::new();

    match cli.command {
        Command::List { level, search } => list(&state, level, search.as_deref()),
        Command::Link { id, base_url } => {
            if !state.features.contains(&id) {
                anyhow::bail!("Feature '{}' nicht gefunden", id);
            }
            controller.handle_intent(&mut state, AppIntent::DeepLinkOpened { url: base_url })?;
            controller.handle_intent(&mut state, AppIntent::CopyLinkRequested { id })?;
            let link = state
                .ui
                .copied_link
                .as_deref()
                .context("Ungültige Basis-Adresse")?;
            println!("{}", link);
        }
        Command::Clear => {
            controller.handle_intent(&mut state, AppIntent::ClearStorageRequested)?;
        }
    }

    Ok(())
}

fn list(state: &AppState, level: Option<u32>, search: Option<&str>) {
    let level = level.unwrap_or(state.view.current_level);
    let features = state.features.search(level, search.unwrap_or(""));
    if features.is_empty() {
        println!("Keine Features auf Etage {}", level);
        return;
    }

    println!("Etage {} ({} Features)", level, features.len());
    for feature in features {
        let style = style_for(feature);
        println!(
            "  [{:<9}] {:<32} {:<10} {} {}",
            feature.feature_type.category().title(),
            feature.label(),
            feature.feature_type.as_str(),
            style.fill_color,
            feature.id
        );
    }
}
