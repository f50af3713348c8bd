//! Zustandsautomat der Zeiger-Interaktion (Idle ↔ Dragging).

use glam::Vec2;

/// Zeiger-Interaktion auf dem Canvas
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    /// Kein Drag aktiv
    #[default]
    Idle,
    /// Ein Node wird gezogen
    Dragging {
        /// Gezogener Node
        node_id: u64,
        /// Zeigerposition minus Node-Position beim Drag-Start
        drag_offset: Vec2,
        /// Node-Position beim Drag-Start
        origin: Vec2,
    },
}

impl InteractionState {
    /// Idle → Dragging
    pub fn begin_drag(&mut self, node_id: u64, pointer_pos: Vec2, node_position: Vec2) {
        *self = InteractionState::Dragging {
            node_id,
            drag_offset: pointer_pos - node_position,
            origin: node_position,
        };
    }

    /// Dragging → Idle; gibt den bisher gezogenen Node zurück
    pub fn end_drag(&mut self) -> Option<u64> {
        let dragged = self.dragged_node();
        *self = InteractionState::Idle;
        dragged
    }

    /// ID des gezogenen Nodes
    pub fn dragged_node(&self) -> Option<u64> {
        match self {
            InteractionState::Dragging { node_id, .. } => Some(*node_id),
            InteractionState::Idle => None,
        }
    }

    /// Neue Node-Position für die Zeigerposition
    pub fn target_position(&self, pointer_pos: Vec2) -> Option<Vec2> {
        match self {
            InteractionState::Dragging { drag_offset, .. } => Some(pointer_pos - *drag_offset),
            InteractionState::Idle => None,
        }
    }

    /// Node-Position beim Drag-Start
    pub fn drag_origin(&self) -> Option<Vec2> {
        match self {
            InteractionState::Dragging { origin, .. } => Some(*origin),
            InteractionState::Idle => None,
        }
    }

    /// Ob gerade gezogen wird
    pub fn is_dragging(&self) -> bool {
        matches!(self, InteractionState::Dragging { .. })
    }
}
