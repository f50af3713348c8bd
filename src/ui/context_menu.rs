//! Kontextmenü-Rendering: zeigt den beim Öffnen gebauten Katalog an.
//!
//! Welche Befehle erscheinen und ob sie aktiv sind, entscheidet
//! [`MenuCatalog`](crate::app::MenuCatalog); hier wird nur gezeichnet.

use super::input::to_screen;
use crate::app::{AppIntent, MenuEntry, UiState};

/// Rendert das offene Kontextmenü an seiner Öffnungsposition.
///
/// Ein Klick außerhalb des Menüs schließt es.
pub fn show_context_menu(
    ctx: &egui::Context,
    ui_state: &UiState,
    canvas_rect: egui::Rect,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(menu) = &ui_state.context_menu else {
        return events;
    };

    let area = egui::Area::new(egui::Id::new("mindmap_context_menu"))
        .order(egui::Order::Foreground)
        .fixed_pos(to_screen(menu.pos, canvas_rect))
        .show(ctx, |ui| {
            egui::Frame::menu(ui.style()).show(ui, |ui| {
                ui.set_min_width(160.0);
                for entry in &menu.catalog.entries {
                    match entry {
                        MenuEntry::Label(text) => {
                            ui.label(egui::RichText::new(text).strong());
                        }
                        MenuEntry::Separator => {
                            ui.separator();
                        }
                        MenuEntry::Command {
                            command,
                            label,
                            enabled,
                        } => {
                            if ui
                                .add_enabled(*enabled, egui::Button::new(label.as_str()))
                                .clicked()
                            {
                                events.push(AppIntent::ContextCommandChosen { command: *command });
                            }
                        }
                    }
                }
            });
        });

    let clicked_elsewhere = ctx.input(|i| i.pointer.any_pressed())
        && ctx
            .pointer_interact_pos()
            .is_some_and(|pos| !area.response.rect.contains(pos));
    if events.is_empty() && (clicked_elsewhere || ctx.input(|i| i.key_pressed(egui::Key::Escape)))
    {
        events.push(AppIntent::ContextMenuDismissed);
    }

    events
}
