//! Bézier-Editor.
//!
//! Interaktiver Editor für Bézier-Kurven mit De-Casteljau-Konstruktion,
//! Tangente und Segmentlängen. egui/eframe als Oberfläche.

use bezier_editor::{ui, AppController, AppIntent, AppState, CanvasImage, EditorOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Bézier-Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1024.0, 720.0])
                .with_title("Bézier-Editor"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Bézier-Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    /// Screen-Rechteck der Zeichenfläche im letzten Frame (für PNG-Export)
    canvas_rect: Option<egui::Rect>,
    /// Screenshot angefordert, Ergebnis steht noch aus
    screenshot_pending: bool,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            canvas_rect: None,
            screenshot_pending: false,
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = self.collect_screenshot_events(ctx);
        events.extend(self.collect_ui_events(ctx));

        self.process_events(events);

        self.maybe_request_screenshot(ctx);
        self.maybe_request_repaint(ctx);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_control_panel(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            let (rect, response) =
                ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

            let transform = ui::CanvasTransform::new(rect);
            events.extend(ui::collect_keyboard_intents(ui));
            events.extend(ui::collect_canvas_events(ui, &response, &transform));

            let scene = self.controller.build_render_scene(&self.state);
            ui::paint_scene(&ui.painter_at(rect), &transform, &scene);

            self.canvas_rect = Some(
                transform
                    .unit_rect()
                    .expand(ui::CanvasTransform::MARGIN_PX * 0.5)
                    .intersect(rect),
            );
        });

        events
    }

    /// Übersetzt eingetroffene Viewport-Screenshots in Export-Intents.
    fn collect_screenshot_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let screenshots: Vec<std::sync::Arc<egui::ColorImage>> = ctx.input(|i| {
            i.raw
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Screenshot { image, .. } => Some(image.clone()),
                    _ => None,
                })
                .collect()
        });

        let mut events = Vec::new();
        for screenshot in screenshots {
            self.screenshot_pending = false;
            let Some(rect) = self.canvas_rect else {
                log::warn!("Screenshot ohne bekannte Zeichenfläche verworfen");
                continue;
            };
            let region = screenshot.region(&rect, Some(ctx.pixels_per_point()));
            let rgba: Vec<u8> = region
                .pixels
                .iter()
                .flat_map(|pixel| pixel.to_srgba_unmultiplied())
                .collect();
            match CanvasImage::new(region.size[0] as u32, region.size[1] as u32, rgba) {
                Some(image) => events.push(AppIntent::CanvasCaptured { image }),
                None => log::error!("Screenshot hat ungültige Abmessungen: {:?}", region.size),
            }
        }
        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.ui.status_message = Some(format!("Fehler: {:#}", e));
                self.state.request_repaint();
            }
        }
    }

    /// Fordert einen Screenshot an, sobald ein Export-Ziel vorgemerkt ist.
    fn maybe_request_screenshot(&mut self, ctx: &egui::Context) {
        if self.state.ui.pending_export_path.is_some() && !self.screenshot_pending {
            self.screenshot_pending = true;
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
            ctx.request_repaint();
        }
    }

    fn maybe_request_repaint(&mut self, ctx: &egui::Context) {
        if std::mem::take(&mut self.state.view.repaint_requested) {
            ctx.request_repaint();
        }
    }
}
