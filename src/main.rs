//! Mindmap Desktops.
//!
//! Radiale Mindmap-Ansicht für virtuelle Desktops: Desktops lassen sich
//! per Drag & Drop in Kategorien ordnen, der Baum wird periodisch mit der
//! Desktop-Quelle abgeglichen.

use std::sync::Arc;
use std::time::Duration;

use eframe::egui;
use mindmap_desktops::{
    ui, AppController, AppIntent, AppState, MindMapOptions, MockItemSource, RefreshFeed,
};

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

        log::info!("Mindmap Desktops v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Mindmap Desktops"),
            ..Default::default()
        };

        eframe::run_native(
            "Mindmap Desktops",
            options,
            Box::new(|_cc| Ok(Box::new(MindMapApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct MindMapApp {
    state: AppState,
    controller: AppController,
    feed: RefreshFeed,
    input: ui::InputState,
    canvas: ui::CanvasPainter,
}

impl MindMapApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = MindMapOptions::config_path();
        let options = MindMapOptions::load_from_file(&config_path);
        let interval = Duration::from_secs_f32(options.refresh_interval_secs.max(0.5));

        let controller = AppController::new(Arc::new(MockItemSource::default()));
        let feed = RefreshFeed::spawn(controller.source(), interval);

        let mut state = AppState::with_options(options);
        state.options_path = Some(config_path);

        Self {
            state,
            controller,
            feed,
            input: ui::InputState::new(),
            canvas: ui::CanvasPainter::new(),
        }
    }
}

impl eframe::App for MindMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = self.feed.drain();
        events.extend(self.collect_ui_events(ctx));

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.controller.notify_render(&self.state, &mut self.canvas);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl MindMapApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::show_rename_dialog(ctx, &mut self.state.ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                // Menü zuerst: ein Klick außerhalb schließt es, bevor der Canvas ihn sieht
                events.extend(ui::show_context_menu(ctx, &self.state.ui, rect));

                events.extend(self.input.collect_canvas_events(
                    ui,
                    &response,
                    rect,
                    self.state.options.double_click_secs,
                ));

                self.canvas.paint(ui.painter(), rect);

                if self.state.node_count() <= 1 {
                    ui.painter().text(
                        rect.center_bottom() - egui::vec2(0.0, 40.0),
                        egui::Align2::CENTER_CENTER,
                        "Waiting for desktops...",
                        egui::FontId::proportional(20.0),
                        egui::Color32::WHITE,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.interaction.is_dragging()
        {
            ctx.request_repaint();
        }
        // Feed-Ergebnisse kommen ohne Benutzereingabe an
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
