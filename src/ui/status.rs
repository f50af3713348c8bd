//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Nodes: {}", state.node_count()));

            ui.separator();

            match state.map.selected_id().and_then(|id| state.map.node(id)) {
                Some(node) => {
                    ui.label(format!("Selected: {} ({})", node.title, node.kind.label()));
                }
                None => {
                    ui.label("Selected: -");
                }
            }

            if let Some(node_id) = state.interaction.dragged_node() {
                ui.separator();
                ui.label(format!("Dragging: {}", node_id));
            }

            // Statusnachricht (z.B. fehlgeschlagener Refresh)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
