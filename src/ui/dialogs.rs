//! Modale Dialoge (Umbenennen).

use crate::app::{AppIntent, UiState};

/// Zeigt den Umbenennen-Dialog als modales Fenster.
///
/// Der Eingabepuffer lebt im UiState; bestätigt wird per OK oder Enter,
/// abgebrochen per Abbrechen oder Escape.
pub fn show_rename_dialog(ctx: &egui::Context, ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(dialog) = ui_state.rename_dialog.as_mut() else {
        return events;
    };

    let mut confirmed = false;
    let mut cancelled = false;

    egui::Window::new("Rename")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(260.0);

            ui.horizontal(|ui| {
                ui.label("Name:");
                let response = ui.text_edit_singleline(&mut dialog.buffer);
                if !response.has_focus() && !response.lost_focus() {
                    response.request_focus();
                }
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    confirmed = true;
                }
            });

            ui.add_space(10.0);

            ui.horizontal(|ui| {
                let name_valid = !dialog.buffer.trim().is_empty();
                ui.add_enabled_ui(name_valid, |ui| {
                    if ui.button("OK").clicked() {
                        confirmed = true;
                    }
                });
                if ui.button("Abbrechen").clicked() {
                    cancelled = true;
                }
            });
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        cancelled = true;
    }

    if confirmed && !cancelled {
        events.push(AppIntent::RenameConfirmed {
            node_id: dialog.node_id,
            title: dialog.buffer.clone(),
        });
    } else if cancelled {
        events.push(AppIntent::RenameCancelled);
    }

    events
}
