use crate::app::state::ViewToggle;
use crate::core::Point2D;
use crate::shared::CanvasImage;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Positionen liegen bereits in normierten Zeichenkoordinaten vor.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primärer Klick (links) auf die Zeichenfläche
    PrimaryPressed { pos: Point2D },
    /// Sekundärer Klick (rechts) auf die Zeichenfläche
    SecondaryPressed { pos: Point2D },
    /// Zeiger hat sich über der Zeichenfläche bewegt
    PointerMoved { pos: Point2D },
    /// Primäre Taste losgelassen
    PointerReleased,
    /// Slider für `t` verändert
    ParameterChanged { value: f64 },
    /// Kontrollpolygon leeren ("Neue Kurve")
    NewCurveRequested,
    /// Datei öffnen (zeigt Dateidialog)
    OpenFileRequested,
    /// Pfad im Öffnen-Dialog gewählt
    FileSelected { path: String },
    /// Datei speichern (unter aktuellem Pfad oder mit Dialog)
    SaveRequested,
    /// Datei unter neuem Pfad speichern
    SaveAsRequested,
    /// Pfad im Speichern-Dialog gewählt
    SaveFilePathSelected { path: String },
    /// PNG-Export anfordern (zeigt Dateidialog)
    ExportPngRequested,
    /// Zielpfad im Export-Dialog gewählt
    ExportPathSelected { path: String },
    /// Screenshot der Zeichenfläche liegt vor
    CanvasCaptured { image: CanvasImage },
    /// Sichtbarkeit einer abgeleiteten Ansicht umschalten
    ToggleView { view: ViewToggle, visible: bool },
    /// Anwendung beenden
    ExitRequested,
}
