//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::AppState;
use crate::shared::CanvasImage;
use anyhow::{Context, Result};
use image::ImageEncoder;
use std::io::BufWriter;

/// Öffnet den Open-Datei-Dialog über UI-State.
pub fn request_open_file(state: &mut AppState) {
    state.ui.show_file_dialog = true;
}

/// Lädt die ausgewählte Datei in den AppState.
///
/// Alles-oder-nichts: das Modell wird erst nach erfolgreichem Parsen ersetzt.
pub fn load_selected_file(state: &mut AppState, path: String) -> Result<()> {
    let json_content = std::fs::read_to_string(&path)
        .with_context(|| format!("Datei konnte nicht gelesen werden: {}", path))?;
    let points = crate::json::load_points(&json_content)
        .with_context(|| format!("Fehler beim Laden von {}", path))?;

    let count = points.len();
    state.model.replace(points);
    state.ui.status_message = Some(format!("{} Punkte geladen: {}", count, path));
    state.ui.current_file_path = Some(path);
    state.request_repaint();

    log::info!("Kurve geladen: {} Kontrollpunkte", count);
    Ok(())
}

/// Öffnet den Save-Datei-Dialog über UI-State.
pub fn request_save_file(state: &mut AppState) {
    state.ui.show_save_file_dialog = true;
}

/// Speichert die aktuelle Datei (wenn Pfad bekannt) oder öffnet Dialog.
pub fn save_current_file(state: &mut AppState) -> Result<()> {
    if let Some(path) = state.ui.current_file_path.clone() {
        write_points_to_file(state, &path)?;
        log::info!("Datei gespeichert: {}", path);
        Ok(())
    } else {
        // Kein Pfad bekannt → Save As Dialog öffnen
        request_save_file(state);
        Ok(())
    }
}

/// Speichert die Datei unter dem angegebenen Pfad.
pub fn save_file_as(state: &mut AppState, path: String) -> Result<()> {
    write_points_to_file(state, &path)?;
    log::info!("Datei gespeichert unter: {}", path);
    state.ui.current_file_path = Some(path);
    Ok(())
}

/// Schreibt das Kontrollpolygon als JSON in eine Datei.
///
/// Kodiert vollständig, bevor die Datei angefasst wird.
fn write_points_to_file(state: &mut AppState, path: &str) -> Result<()> {
    let json_content = crate::json::save_points(state.model.points())
        .context("Kurve konnte nicht serialisiert werden")?;
    std::fs::write(path, json_content)
        .with_context(|| format!("Datei konnte nicht geschrieben werden: {}", path))?;

    state.ui.status_message = Some(format!(
        "{} Punkte gespeichert: {}",
        state.model.point_count(),
        path
    ));
    Ok(())
}

/// Öffnet den PNG-Export-Dialog über UI-State.
pub fn request_export_file(state: &mut AppState) {
    state.ui.show_export_dialog = true;
}

/// Merkt den Export-Pfad vor; der Host liefert den Screenshot nach.
pub fn queue_export(state: &mut AppState, path: String) {
    log::info!("PNG-Export angefordert: {}", path);
    state.ui.pending_export_path = Some(path);
    state.request_repaint();
}

/// Schreibt den Canvas-Screenshot als PNG an den vorgemerkten Pfad.
pub fn write_png_export(state: &mut AppState, image: &CanvasImage) -> Result<()> {
    let path = state
        .ui
        .pending_export_path
        .take()
        .ok_or_else(|| anyhow::anyhow!("Kein Export-Ziel vorgemerkt"))?;

    let file = std::fs::File::create(&path)
        .with_context(|| format!("Exportdatei konnte nicht angelegt werden: {}", path))?;
    let encoder = image::codecs::png::PngEncoder::new(BufWriter::new(file));
    encoder
        .write_image(
            image.rgba.as_slice(),
            image.width,
            image.height,
            image::ExtendedColorType::Rgba8,
        )
        .with_context(|| format!("PNG-Export fehlgeschlagen: {}", path))?;

    log::info!(
        "Canvas als PNG exportiert: {} ({}x{})",
        path,
        image.width,
        image.height
    );
    state.ui.status_message = Some(format!("Exportiert: {}", path));
    Ok(())
}
