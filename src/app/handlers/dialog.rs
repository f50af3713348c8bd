//! Handler für Kontextmenü, Umbenennen-Dialog und Optionen.

use crate::app::context_menu::MenuCatalog;
use crate::app::state::{ContextMenuState, RenameDialogState};
use crate::app::AppState;
use crate::shared::MindMapOptions;

/// Öffnet das Kontextmenü für einen Node oder die leere Fläche.
pub fn open_context_menu(state: &mut AppState, target: Option<u64>, pos: glam::Vec2) {
    let catalog = MenuCatalog::build(&state.map, target);
    state.ui.context_menu = Some(ContextMenuState {
        target,
        pos,
        catalog,
    });
}

/// Schließt das Kontextmenü.
pub fn close_context_menu(state: &mut AppState) {
    state.ui.context_menu = None;
}

/// Öffnet den Umbenennen-Dialog mit dem aktuellen Titel.
pub fn open_rename_dialog(state: &mut AppState, node_id: u64) -> anyhow::Result<()> {
    let title = state.map.get(node_id)?.title.clone();
    state.ui.rename_dialog = Some(RenameDialogState {
        node_id,
        buffer: title,
    });
    Ok(())
}

/// Schließt den Umbenennen-Dialog.
pub fn close_rename_dialog(state: &mut AppState) {
    state.ui.rename_dialog = None;
}

/// Übernimmt neue Optionen und persistiert sie, falls eine Konfigurationsdatei gesetzt ist.
pub fn apply_options(state: &mut AppState, options: MindMapOptions) -> anyhow::Result<()> {
    state.options = options;
    state.mark_dirty();
    match &state.options_path {
        Some(path) => state.options.save_to_file(path),
        None => Ok(()),
    }
}
