//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::MindMapNode;
use crate::shared::{MindMapOptions, RenderConnection, RenderNode, RenderScene};

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Enthält nur vom Root erreichbare Nodes, in Zeichenreihenfolge.
pub fn build(state: &AppState) -> RenderScene {
    let options = &state.options;

    let nodes = state
        .map
        .reachable_ids()
        .into_iter()
        .filter_map(|id| state.map.node(id))
        .map(|node| render_node(node, options))
        .collect();

    let connections = state
        .map
        .connections()
        .into_iter()
        .map(|c| RenderConnection {
            from_id: c.from_id,
            to_id: c.to_id,
            points: [c.from_center, c.control_1, c.control_2, c.to_center],
        })
        .collect();

    RenderScene {
        nodes,
        connections,
        viewport_size: state.view.viewport_size.unwrap_or([0.0, 0.0]),
        revision: state.render_revision,
        connection_color: options.connection_color,
        connection_width: options.connection_width,
        background_grid_spacing: options.background_grid_spacing,
        selected_scale: crate::shared::options::NODE_SELECTED_SCALE,
    }
}

fn render_node(node: &MindMapNode, options: &MindMapOptions) -> RenderNode {
    // Hervorhebung überschreibt nur den Rahmen, nie den eigenen Stil des Nodes
    let mut style = node.style;
    if node.highlighted {
        style.border_color = options.highlight_border_color;
        style.border_width = options.highlight_border_width;
    }

    RenderNode {
        id: node.id,
        kind: node.kind,
        title: node.title.clone(),
        subtitle: node.subtitle.clone(),
        position: node.position,
        size: node.size,
        style,
        selected: node.selected,
        highlighted: node.highlighted,
    }
}
