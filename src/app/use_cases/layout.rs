//! Use-Case: Voll-Layout und Zurücksetzen des Layouts.

use std::collections::HashSet;

use crate::app::AppState;
use crate::core::MindMapResult;

/// Berechnet das Layout des gesamten Baums neu.
///
/// Ein gerade gezogener Node dient als zusätzlicher Anker und wird nicht verschoben.
pub fn relayout_all(state: &mut AppState) -> MindMapResult<()> {
    let anchors: HashSet<u64> = state.interaction.dragged_node().into_iter().collect();
    let layout = state.layout();
    layout.layout_all(&mut state.map, &anchors)?;
    state.mark_dirty();
    Ok(())
}

/// Setzt das Layout zurück: Root in die Viewport-Mitte, alle Pins lösen, Voll-Layout.
pub fn reset_layout(state: &mut AppState) -> MindMapResult<()> {
    if let Some(center) = state.view.viewport_center() {
        let root_id = state.map.root_id();
        state.map.get_mut(root_id)?.set_center(center);
    }
    for node in state.map.nodes_mut() {
        node.pin_offset = None;
    }
    relayout_all(state)?;
    log::info!("Layout zurückgesetzt");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NodeKind;
    use glam::Vec2;

    #[test]
    fn test_reset_layout_centers_root_and_clears_pins() {
        let mut state = AppState::new();
        state.view.viewport_size = Some([800.0, 600.0]);
        let root = state.map.root_id();
        let child = state
            .map
            .create_node_with_options(NodeKind::Item, "Desktop 1", &state.options)
            .expect("Node anlegbar");
        state.map.add_child(root, child).expect("Kind anhängbar");
        state.map.get_mut(child).expect("Kind").pin_offset = Some(Vec2::new(-395.0, -295.0));
        state.map.get_mut(child).expect("Kind").position = Vec2::new(5.0, 5.0);

        reset_layout(&mut state).expect("Reset");

        let root_center = state.map.get(root).expect("Root").center();
        assert_eq!(root_center, Vec2::new(400.0, 300.0));
        let node = state.map.get(child).expect("Kind");
        assert!(!node.is_pinned());
        assert!((node.center() - Vec2::new(550.0, 300.0)).length() < 1e-3);
    }
}
