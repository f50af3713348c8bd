//! Use-Case: Snapshot der externen Quelle in den Baum einarbeiten.
//!
//! Items werden über ihre externe ID wiedererkannt; Position, Selektion,
//! Stil und manuell gesetzte Titel bleiben erhalten.

use crate::app::AppState;
use crate::core::{ItemRef, MindMapResult, NodeKind, Snapshot};

use super::layout::relayout_all;

/// Ergebnis eines Merge-Durchlaufs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeReport {
    /// Neu angelegte Item-Nodes
    pub added: usize,
    /// Aktualisierte Item-Nodes
    pub updated: usize,
    /// Entfernte Item-Nodes
    pub removed: usize,
    /// Hervorgehobener Node (aktives Item)
    pub highlighted: Option<u64>,
}

/// Arbeitet einen vollständigen Snapshot ein und berechnet das Voll-Layout neu.
///
/// Ein gerade gezogener Node wird weder verschoben noch umgehängt noch entfernt.
pub fn apply_snapshot(state: &mut AppState, snapshot: &Snapshot) -> MindMapResult<MergeReport> {
    let mut report = MergeReport::default();
    let root_id = state.map.root_id();
    let dragged = state.interaction.dragged_node();

    for item in &snapshot.items {
        let item_ref = ItemRef {
            external_id: item.external_id.clone(),
            item_count: item.item_count,
            metadata: item.metadata.clone(),
        };

        match state.map.find_by_external_id(&item.external_id) {
            Some(id) => {
                let node = state.map.get_mut(id)?;
                node.subtitle = Some(item.subtitle());
                node.item = Some(item_ref);
                if !node.custom_title {
                    node.title = item.display_name.clone();
                }
                report.updated += 1;
            }
            None => {
                let id = state.map.create_node_with_options(
                    NodeKind::Item,
                    item.display_name.clone(),
                    &state.options,
                )?;
                let node = state.map.get_mut(id)?;
                node.subtitle = Some(item.subtitle());
                node.item = Some(item_ref);
                state.map.add_child(root_id, id)?;
                report.added += 1;
            }
        }
    }

    let dragged_parent = dragged.and_then(|id| state.map.parent(id).ok().flatten());
    let vanished: Vec<u64> = state
        .map
        .nodes()
        .filter(|n| n.kind == NodeKind::Item)
        .filter(|n| n.external_id().is_some_and(|ext| !snapshot.contains(ext)))
        .map(|n| n.id)
        .filter(|&id| Some(id) != dragged && Some(id) != dragged_parent)
        .collect();

    for id in vanished {
        state.map.remove_node_promote_children(id)?;
        report.removed += 1;
    }

    relayout_all(state)?;

    report.highlighted = snapshot
        .active_id
        .as_deref()
        .and_then(|ext| state.map.find_by_external_id(ext));
    state.map.set_highlighted(report.highlighted);
    state.mark_dirty();

    log::info!(
        "Snapshot eingearbeitet: {} neu, {} aktualisiert, {} entfernt",
        report.added,
        report.updated,
        report.removed
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ExternalItem;
    use glam::Vec2;

    fn snapshot(ids: &[&str], active: Option<&str>) -> Snapshot {
        Snapshot::new(
            ids.iter()
                .map(|id| ExternalItem::new(*id, format!("Desktop {}", id), 2))
                .collect(),
            active.map(str::to_string),
        )
    }

    #[test]
    fn test_new_items_go_under_root() {
        let mut state = AppState::new();
        let report = apply_snapshot(&mut state, &snapshot(&["1", "2"], Some("2"))).expect("Merge");

        assert_eq!(report.added, 2);
        let root = state.map.root_id();
        assert_eq!(state.map.children(root).expect("Root").len(), 2);

        let active = state.map.find_by_external_id("2").expect("Item 2");
        assert_eq!(report.highlighted, Some(active));
        assert!(state.map.get(active).expect("Item").highlighted);
        let other = state.map.find_by_external_id("1").expect("Item 1");
        assert!(!state.map.get(other).expect("Item").highlighted);
        assert_eq!(
            state.map.get(other).expect("Item").subtitle.as_deref(),
            Some("2 windows")
        );
    }

    #[test]
    fn test_matched_item_keeps_identity_and_custom_title() {
        let mut state = AppState::new();
        apply_snapshot(&mut state, &snapshot(&["A"], None)).expect("Merge");
        let id = state.map.find_by_external_id("A").expect("Item A");
        {
            let node = state.map.get_mut(id).expect("Item");
            node.title = "Mein Desktop".into();
            node.custom_title = true;
            node.selected = true;
        }

        let mut next = snapshot(&["A"], None);
        next.items[0].item_count = 9;
        next.items[0].metadata = vec!["Terminal".into()];
        let report = apply_snapshot(&mut state, &next).expect("Merge");

        assert_eq!(report.updated, 1);
        assert_eq!(state.map.find_by_external_id("A"), Some(id));
        let node = state.map.get(id).expect("Item");
        assert_eq!(node.title, "Mein Desktop");
        assert!(node.selected);
        assert_eq!(node.item.as_ref().map(|i| i.item_count), Some(9));
        assert_eq!(node.subtitle.as_deref(), Some("9 windows"));
    }

    #[test]
    fn test_vanished_item_is_removed_children_promoted() {
        let mut state = AppState::new();
        apply_snapshot(&mut state, &snapshot(&["1", "2"], None)).expect("Merge");
        let gone = state.map.find_by_external_id("2").expect("Item 2");
        let task = crate::app::use_cases::editing::add_child_node(&mut state, gone)
            .expect("Anlegen");

        let report = apply_snapshot(&mut state, &snapshot(&["1"], None)).expect("Merge");

        assert_eq!(report.removed, 1);
        assert!(!state.map.contains_node(gone));
        assert_eq!(state.map.parent(task), Ok(Some(state.map.root_id())));
    }

    #[test]
    fn test_pinned_position_survives_refresh() {
        let mut state = AppState::new();
        apply_snapshot(&mut state, &snapshot(&["A", "B"], None)).expect("Merge");
        let id = state.map.find_by_external_id("A").expect("Item A");
        state.map.get_mut(id).expect("Item").position = Vec2::new(50.0, 50.0);
        state.map.pin_at_current_position(id).expect("Pin");

        apply_snapshot(&mut state, &snapshot(&["A", "B", "C"], None)).expect("Merge");

        let position = state.map.get(id).expect("Item").position;
        assert!((position - Vec2::new(50.0, 50.0)).length() < 1e-3);
    }

    #[test]
    fn test_dragged_item_is_kept_even_if_absent() {
        let mut state = AppState::new();
        apply_snapshot(&mut state, &snapshot(&["1", "2"], None)).expect("Merge");
        let dragged = state.map.find_by_external_id("2").expect("Item 2");
        let position = Vec2::new(333.0, 111.0);
        state.map.get_mut(dragged).expect("Item").position = position;
        state
            .interaction
            .begin_drag(dragged, position, position);

        let report = apply_snapshot(&mut state, &snapshot(&["1"], None)).expect("Merge");

        assert_eq!(report.removed, 0);
        assert_eq!(state.map.get(dragged).expect("Item").position, position);
        assert_eq!(state.map.parent(dragged), Ok(Some(state.map.root_id())));
    }
}
