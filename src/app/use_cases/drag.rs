//! Use-Case: Drag-Lebenszyklus eines Nodes.

use std::collections::HashSet;

use crate::app::AppState;
use crate::core::MindMapResult;
use crate::layout::snap_to_grid;

/// Mindeststrecke in Pixeln, ab der ein Loslassen als Verschieben zählt
const MOVE_THRESHOLD: f32 = 0.5;

/// Idle → Dragging: merkt den Versatz zwischen Zeiger und Node-Ecke.
pub fn begin_drag(
    state: &mut AppState,
    node_id: u64,
    pointer_pos: glam::Vec2,
) -> MindMapResult<()> {
    let position = state.map.get(node_id)?.position;
    state.interaction.begin_drag(node_id, pointer_pos, position);
    log::debug!("Drag gestartet: Node {}", node_id);
    Ok(())
}

/// Dragging: Node folgt dem Zeiger, sein Teilbaum wird neu angeordnet.
///
/// Beim Root wird der gesamte Baum neu berechnet.
pub fn drag_to(state: &mut AppState, pointer_pos: glam::Vec2) -> MindMapResult<()> {
    let (Some(node_id), Some(target)) = (
        state.interaction.dragged_node(),
        state.interaction.target_position(pointer_pos),
    ) else {
        return Ok(());
    };

    let node = match state.map.get_mut(node_id) {
        Ok(node) => node,
        Err(e) => {
            state.interaction.end_drag();
            return Err(e);
        }
    };
    node.position = target;

    let layout = state.layout();
    if state.map.is_root(node_id) {
        layout.layout_all(&mut state.map, &HashSet::new())?;
    } else {
        layout.layout_subtree(&mut state.map, node_id, &HashSet::new())?;
    }
    state.mark_dirty();
    Ok(())
}

/// Dragging → Idle: rastet den Node ein und pinnt ihn relativ zu seinem Eltern-Node.
///
/// Ein Loslassen ohne Bewegung (reiner Klick) stellt die Startposition wieder
/// her und lässt Pin und Raster unberührt. Gibt den losgelassenen Node zurück
/// (None, wenn kein Drag aktiv war).
pub fn end_drag(state: &mut AppState) -> MindMapResult<Option<u64>> {
    let origin = state.interaction.drag_origin();
    let Some(node_id) = state.interaction.end_drag() else {
        return Ok(None);
    };

    let snap = state.options.snap_to_grid;
    let grid_size = state.options.grid_size;
    let is_root = state.map.is_root(node_id);

    let node = state.map.get_mut(node_id)?;
    let moved = match origin {
        Some(origin) if node.position.distance(origin) <= MOVE_THRESHOLD => {
            node.position = origin;
            false
        }
        _ => true,
    };
    if moved && snap {
        node.position = snap_to_grid(node.position, grid_size);
    }
    let position = node.position;
    if moved && !is_root {
        state.map.pin_at_current_position(node_id)?;
    }

    state
        .layout()
        .layout_subtree(&mut state.map, node_id, &HashSet::new())?;
    state.mark_dirty();
    log::debug!(
        "Drag beendet: Node {} bei ({:.0}, {:.0}), verschoben: {}",
        node_id,
        position.x,
        position.y,
        moved
    );
    Ok(Some(node_id))
}
