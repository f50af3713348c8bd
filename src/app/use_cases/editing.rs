//! Use-Cases: Nodes anlegen, umbenennen und löschen.

use crate::app::AppState;
use crate::core::{MindMapResult, NodeKind};

use super::layout::relayout_all;

/// Titel neuer Gruppen-Nodes
pub const NEW_GROUP_TITLE: &str = "New Task";
/// Titel neuer Kategorie-Nodes
pub const NEW_CATEGORY_TITLE: &str = "New Category";

/// Legt eine neue Gruppe als letztes Kind von `parent_id` an.
pub fn add_child_node(state: &mut AppState, parent_id: u64) -> MindMapResult<u64> {
    state.map.get(parent_id)?;
    let id = state
        .map
        .create_node_with_options(NodeKind::Group, NEW_GROUP_TITLE, &state.options)?;
    state.map.add_child(parent_id, id)?;
    relayout_all(state)?;
    log::info!("Gruppe {} unter Node {} angelegt", id, parent_id);
    Ok(id)
}

/// Legt eine neue Kategorie unter dem Root an.
pub fn add_category(state: &mut AppState) -> MindMapResult<u64> {
    let root_id = state.map.root_id();
    let id = state
        .map
        .create_node_with_options(NodeKind::Category, NEW_CATEGORY_TITLE, &state.options)?;
    state.map.add_child(root_id, id)?;
    relayout_all(state)?;
    log::info!("Kategorie {} angelegt", id);
    Ok(id)
}

/// Setzt den Titel eines Nodes. Leere Titel werden ignoriert.
///
/// Ein umbenannter Node behält seinen Titel auch über Refreshes hinweg.
pub fn rename_node(state: &mut AppState, node_id: u64, title: &str) -> MindMapResult<bool> {
    let title = title.trim();
    let node = state.map.get_mut(node_id)?;
    if title.is_empty() {
        log::warn!("Leerer Titel für Node {} ignoriert", node_id);
        return Ok(false);
    }
    if node.title == title {
        return Ok(false);
    }

    node.title = title.to_string();
    node.custom_title = true;
    state.mark_dirty();
    log::info!("Node {} umbenannt in '{}'", node_id, title);
    Ok(true)
}

/// Löscht einen Node samt Teilbaum. Der Root ist nicht löschbar.
pub fn delete_node(state: &mut AppState, node_id: u64) -> MindMapResult<Vec<u64>> {
    let removed = match state.map.remove_subtree(node_id) {
        Ok(removed) => removed,
        Err(e) => {
            log::warn!("Löschen abgelehnt: {}", e);
            return Err(e);
        }
    };

    if state
        .interaction
        .dragged_node()
        .is_some_and(|id| removed.contains(&id))
    {
        state.interaction.end_drag();
    }
    if state
        .ui
        .rename_dialog
        .as_ref()
        .is_some_and(|dialog| removed.contains(&dialog.node_id))
    {
        state.ui.rename_dialog = None;
    }

    relayout_all(state)?;
    log::info!("{} Node(s) gelöscht (Start: {})", removed.len(), node_id);
    Ok(removed)
}
