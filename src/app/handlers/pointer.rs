//! Handler für Selektion, Drag und Drop.

use crate::app::use_cases;
use crate::app::AppState;

/// Selektiert genau einen Node.
pub fn select_node(state: &mut AppState, node_id: u64) -> anyhow::Result<()> {
    state.map.select_only(node_id)?;
    state.mark_dirty();
    Ok(())
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    if state.map.selected_id().is_some() {
        state.map.clear_selection();
        state.mark_dirty();
    }
}

/// Startet einen Drag auf dem Node.
pub fn begin_drag(
    state: &mut AppState,
    node_id: u64,
    pointer_pos: glam::Vec2,
) -> anyhow::Result<()> {
    use_cases::drag::begin_drag(state, node_id, pointer_pos)?;
    Ok(())
}

/// Führt den gezogenen Node nach.
pub fn drag_to(state: &mut AppState, pointer_pos: glam::Vec2) -> anyhow::Result<()> {
    use_cases::drag::drag_to(state, pointer_pos)?;
    Ok(())
}

/// Beendet den Drag (Einrasten, zurück nach Idle).
pub fn end_drag(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::drag::end_drag(state)?;
    Ok(())
}

/// Hängt einen Node unter einen neuen Eltern-Node.
pub fn reparent(state: &mut AppState, node_id: u64, new_parent_id: u64) -> anyhow::Result<()> {
    use_cases::reparent::reparent_node(state, node_id, new_parent_id)?;
    Ok(())
}
