//! Handler für Anlegen, Umbenennen, Löschen und Aktivieren von Nodes.

use crate::app::use_cases;
use crate::app::AppState;
use crate::source::ItemSource;

/// Setzt den Titel eines Nodes.
pub fn rename(state: &mut AppState, node_id: u64, title: &str) -> anyhow::Result<()> {
    use_cases::editing::rename_node(state, node_id, title)?;
    Ok(())
}

/// Löscht einen Node samt Teilbaum.
pub fn delete(state: &mut AppState, node_id: u64) -> anyhow::Result<()> {
    use_cases::editing::delete_node(state, node_id)?;
    Ok(())
}

/// Legt eine neue Gruppe unter dem Node an und selektiert sie.
pub fn add_child(state: &mut AppState, parent_id: u64) -> anyhow::Result<()> {
    let id = use_cases::editing::add_child_node(state, parent_id)?;
    state.map.select_only(id)?;
    Ok(())
}

/// Legt eine neue Kategorie unter dem Root an und selektiert sie.
pub fn add_category(state: &mut AppState) -> anyhow::Result<()> {
    let id = use_cases::editing::add_category(state)?;
    state.map.select_only(id)?;
    Ok(())
}

/// Fordert den Wechsel zum externen Item des Nodes an.
pub fn activate(state: &mut AppState, source: &dyn ItemSource, node_id: u64) -> anyhow::Result<()> {
    use_cases::activate::activate_node(state, source, node_id)?;
    Ok(())
}

/// Fordert ein neues externes Item an.
pub fn create_item(state: &mut AppState, source: &dyn ItemSource) -> anyhow::Result<()> {
    if let Err(e) = source.request_create_item() {
        log::warn!("Neues Item konnte nicht angelegt werden: {:#}", e);
        state.ui.status_message = Some(format!("Create New Desktop fehlgeschlagen: {}", e));
        return Err(e);
    }
    Ok(())
}
