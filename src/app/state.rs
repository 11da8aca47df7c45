//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::core::CurveModel;
use crate::shared::EditorOptions;

/// Einzeln schaltbare abgeleitete Ansichten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewToggle {
    /// Abgetastete Bézier-Kurve
    Curve,
    /// Marker P(t)
    PointAtT,
    /// De-Casteljau-Konstruktionslinien
    Construction,
    /// Tangentenpfeil bei t
    Tangent,
    /// Segmentlängen des Kontrollpolygons
    Lengths,
}

impl ViewToggle {
    /// Alle Schalter in Anzeigereihenfolge (Control-Panel).
    pub const ALL: [ViewToggle; 5] = [
        ViewToggle::Curve,
        ViewToggle::PointAtT,
        ViewToggle::Construction,
        ViewToggle::Tangent,
        ViewToggle::Lengths,
    ];

    /// Beschriftung im Control-Panel.
    pub fn label(self) -> &'static str {
        match self {
            ViewToggle::Curve => "Kurve",
            ViewToggle::PointAtT => "Punkt P(t)",
            ViewToggle::Construction => "Konstruktionsschritte",
            ViewToggle::Tangent => "Tangente im Punkt",
            ViewToggle::Lengths => "Segmentlängen",
        }
    }
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    pub show_curve: bool,
    pub show_point_at_t: bool,
    pub show_construction: bool,
    pub show_tangent: bool,
    pub show_lengths: bool,
    /// Signalisiert dem Host, dass Modell oder `t` sich geändert haben
    pub repaint_requested: bool,
}

impl ViewState {
    /// Übernimmt die Start-Sichtbarkeit aus den Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            show_curve: options.show_curve,
            show_point_at_t: options.show_point_at_t,
            show_construction: options.show_construction,
            show_tangent: options.show_tangent,
            show_lengths: options.show_lengths,
            repaint_requested: true,
        }
    }

    pub fn is_visible(&self, view: ViewToggle) -> bool {
        match view {
            ViewToggle::Curve => self.show_curve,
            ViewToggle::PointAtT => self.show_point_at_t,
            ViewToggle::Construction => self.show_construction,
            ViewToggle::Tangent => self.show_tangent,
            ViewToggle::Lengths => self.show_lengths,
        }
    }

    pub fn set_visible(&mut self, view: ViewToggle, visible: bool) {
        let slot = match view {
            ViewToggle::Curve => &mut self.show_curve,
            ViewToggle::PointAtT => &mut self.show_point_at_t,
            ViewToggle::Construction => &mut self.show_construction,
            ViewToggle::Tangent => &mut self.show_tangent,
            ViewToggle::Lengths => &mut self.show_lengths,
        };
        *slot = visible;
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default())
    }
}

/// UI-bezogener Anwendungszustand (Dialoge, Status)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Ob der Open-Datei-Dialog geöffnet werden soll
    pub show_file_dialog: bool,
    /// Ob der Save-Datei-Dialog geöffnet werden soll
    pub show_save_file_dialog: bool,
    /// Ob der PNG-Export-Dialog geöffnet werden soll
    pub show_export_dialog: bool,
    /// Pfad der zuletzt geladenen/gespeicherten Datei (für Save ohne Dialog)
    pub current_file_path: Option<String>,
    /// Zielpfad eines angeforderten PNG-Exports (wartet auf Canvas-Screenshot)
    pub pending_export_path: Option<String>,
    /// Temporäre Statusnachricht (Laden, Speichern, Export, Fehler)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self::default()
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kontrollpolygon, Parameter und Drag-Zustand
    pub model: CurveModel,
    /// Sichtbarkeit der abgeleiteten Ansichten
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Radien, Farben, Abtastung)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den übergebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let mut model = CurveModel::with_hit_radius(options.hit_radius);
        model.set_parameter(options.initial_t);

        Self {
            model,
            view: ViewState::from_options(&options),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Kontrollpunkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.model.point_count()
    }

    /// Markiert den nächsten Frame als neu zu zeichnen.
    pub fn request_repaint(&mut self) {
        self.view.repaint_requested = true;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
