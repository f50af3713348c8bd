//! Use-Case: Wechsel zum externen Item eines Nodes anfordern.

use crate::app::AppState;
use crate::core::MindMapResult;
use crate::source::ItemSource;

/// Fordert bei der Quelle den Wechsel zum Item des Nodes an.
///
/// Nodes ohne externes Item werden ignoriert (`Ok(false)`).
pub fn activate_node(
    state: &AppState,
    source: &dyn ItemSource,
    node_id: u64,
) -> MindMapResult<bool> {
    let node = state.map.get(node_id)?;
    let Some(external_id) = node.external_id() else {
        log::debug!("Node {} hat kein externes Item, keine Aktivierung", node_id);
        return Ok(false);
    };

    source.request_activate(external_id);
    log::info!("Wechsel zu '{}' angefordert (Node {})", external_id, node_id);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::refresh_merge::apply_snapshot;
    use crate::core::NodeKind;
    use crate::source::MockItemSource;

    #[test]
    fn test_activate_item_requests_switch() {
        let source = MockItemSource::default();
        let mut state = AppState::new();
        let snapshot = source.fetch_snapshot().expect("Snapshot");
        apply_snapshot(&mut state, &snapshot).expect("Merge");
        let desktop_3 = state.map.find_by_external_id("3").expect("Desktop 3");

        assert!(activate_node(&state, &source, desktop_3).expect("Aktivierung"));
        assert_eq!(source.active_id().as_deref(), Some("3"));
    }

    #[test]
    fn test_activate_without_item_is_ignored() {
        let source = MockItemSource::default();
        let mut state = AppState::new();
        let category = state
            .map
            .create_node_with_options(NodeKind::Category, "Arbeit", &state.options)
            .expect("Node anlegbar");

        assert!(!activate_node(&state, &source, category).expect("Aktivierung"));
        assert_eq!(source.active_id().as_deref(), Some("1"));
        assert!(activate_node(&state, &source, 999).is_err());
    }
}
