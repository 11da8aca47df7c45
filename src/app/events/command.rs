use crate::app::state::ViewToggle;
use crate::core::Point2D;
use crate::shared::CanvasImage;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Punkt greifen oder neuen Punkt anhängen
    PressPrimary { pos: Point2D },
    /// Getroffenen Punkt entfernen
    RemovePointAt { pos: Point2D },
    /// Gegriffenen Punkt verschieben
    MoveDraggedPoint { pos: Point2D },
    /// Drag beenden
    EndDrag,
    /// Kurvenparameter setzen (wird geklemmt)
    SetParameter { value: f64 },
    /// Kontrollpolygon leeren
    ClearCurve,
    /// Öffnen-Dialog anfordern
    RequestOpenFileDialog,
    /// Speichern-Dialog anfordern
    RequestSaveFileDialog,
    /// Kurve aus Datei laden
    LoadFile { path: String },
    /// Kurve speichern (`None` = aktueller Pfad oder Dialog)
    SaveFile { path: Option<String> },
    /// Export-Dialog anfordern
    RequestExportDialog,
    /// Export-Ziel merken und Screenshot abwarten
    QueueExport { path: String },
    /// Screenshot als PNG schreiben
    WriteExport { image: CanvasImage },
    /// Sichtbarkeit einer Ansicht setzen
    SetViewVisibility { view: ViewToggle, visible: bool },
    /// Anwendung beenden
    RequestExit,
}
