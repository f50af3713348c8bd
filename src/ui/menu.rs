//! Top-Menü (App, View).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("App", |ui| {
                if ui.button("Quit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Refresh Desktops").clicked() {
                    events.push(AppIntent::RefreshRequested);
                    ui.close();
                }

                // Reset braucht eine bekannte Viewport-Größe für die Root-Position
                let has_viewport = state.view.viewport_size.is_some();
                if ui
                    .add_enabled(has_viewport, egui::Button::new("Reset Layout"))
                    .clicked()
                {
                    events.push(AppIntent::ResetLayoutRequested);
                    ui.close();
                }

                ui.separator();
                let mut snap = state.options.snap_to_grid;
                if ui.checkbox(&mut snap, "Snap to Grid").changed() {
                    events.push(AppIntent::SnapToGridToggled { enabled: snap });
                }
            });
        });
    });

    events
}
