//! Use-Case: Node samt Teilbaum unter einen neuen Eltern-Node hängen.

use crate::app::AppState;
use crate::core::MindMapResult;

use super::layout::relayout_all;

/// Hängt `node_id` unter `new_parent_id` und berechnet das Voll-Layout neu.
///
/// Der Pin des Nodes wird gelöst, damit er seinen Platz im Ring des neuen
/// Eltern-Nodes einnimmt. Bei Fehler (Zyklus, Root, unbekannte ID) bleibt der
/// Baum unverändert.
pub fn reparent_node(
    state: &mut AppState,
    node_id: u64,
    new_parent_id: u64,
) -> MindMapResult<()> {
    if let Err(e) = state.map.reparent(node_id, new_parent_id) {
        log::warn!("Umhängen abgelehnt: {}", e);
        return Err(e);
    }

    state.map.get_mut(node_id)?.pin_offset = None;
    relayout_all(state)?;
    log::info!("Node {} unter {} gehängt", node_id, new_parent_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MindMapError, NodeKind};
    use glam::Vec2;

    #[test]
    fn test_reparent_onto_descendant_fails_without_change() {
        let mut state = AppState::new();
        let root = state.map.root_id();
        let a = state
            .map
            .create_node_with_options(NodeKind::Category, "A", &state.options)
            .expect("Node anlegbar");
        let b = state
            .map
            .create_node_with_options(NodeKind::Category, "B", &state.options)
            .expect("Node anlegbar");
        state.map.add_child(root, a).expect("Kind anhängbar");
        state.map.add_child(a, b).expect("Kind anhängbar");
        let revision = state.render_revision;

        let result = reparent_node(&mut state, a, b);

        assert_eq!(
            result,
            Err(MindMapError::Cycle {
                node_id: a,
                parent_id: b
            })
        );
        assert_eq!(state.map.parent(a), Ok(Some(root)));
        assert_eq!(state.render_revision, revision);
    }

    #[test]
    fn test_reparent_unpins_node() {
        let mut state = AppState::new();
        let root = state.map.root_id();
        let cat = state
            .map
            .create_node_with_options(NodeKind::Category, "Kategorie", &state.options)
            .expect("Node anlegbar");
        let item = state
            .map
            .create_node_with_options(NodeKind::Item, "Desktop 1", &state.options)
            .expect("Node anlegbar");
        state.map.add_child(root, cat).expect("Kind anhängbar");
        state.map.add_child(root, item).expect("Kind anhängbar");
        state.map.get_mut(item).expect("Item").pin_offset = Some(Vec2::new(10.0, 10.0));

        reparent_node(&mut state, item, cat).expect("Umhängen");

        assert!(!state.map.get(item).expect("Item").is_pinned());
        assert_eq!(state.map.children(cat).expect("Kategorie"), &[item]);
    }
}
