//! Radiales Baum-Layout: Kinder gleichmäßig im Kreis um den Eltern-Mittelpunkt.

use std::collections::HashSet;
use std::f32::consts::TAU;

use glam::Vec2;

use crate::core::{MindMap, MindMapResult};
use crate::shared::MindMapOptions;

/// Parameter des radialen Layouts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialLayout {
    /// Abstand Eltern-Mitte → Kind-Mitte auf der ersten Ebene
    pub radius: f32,
    /// Faktor pro weiterer Ebene (1.0 = konstanter Radius)
    pub radius_decay: f32,
}

impl Default for RadialLayout {
    fn default() -> Self {
        Self {
            radius: crate::shared::options::LAYOUT_RADIUS,
            radius_decay: crate::shared::options::LAYOUT_RADIUS_DECAY,
        }
    }
}

impl RadialLayout {
    /// Layout mit konstantem Radius
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            radius_decay: 1.0,
        }
    }

    /// Layout-Parameter aus den Optionen
    pub fn from_options(options: &MindMapOptions) -> Self {
        Self {
            radius: options.layout_radius,
            radius_decay: options.layout_radius_decay,
        }
    }

    /// Radius für Kinder auf Ebene `child_level` (≥ 1)
    pub fn radius_for_level(&self, child_level: usize) -> f32 {
        let exponent = child_level.saturating_sub(1) as i32;
        self.radius * self.radius_decay.powi(exponent)
    }

    /// Mittelpunkt des `index`-ten von `count` Kindern um `parent_center`
    pub fn child_center(parent_center: Vec2, index: usize, count: usize, radius: f32) -> Vec2 {
        if count == 0 {
            return parent_center;
        }
        let angle = index as f32 * (TAU / count as f32);
        parent_center + Vec2::new(angle.cos(), angle.sin()) * radius
    }

    /// Platziert alle Nachfahren von `node_id` radial um dessen aktuelle Mitte.
    ///
    /// `node_id` selbst bleibt liegen. `anchors` behalten ihre absolute Position,
    /// gepinnte Nodes ihren Versatz zur Eltern-Mitte. Deren Kinder werden
    /// trotzdem um sie herum neu angeordnet.
    pub fn layout_subtree(
        &self,
        map: &mut MindMap,
        node_id: u64,
        anchors: &HashSet<u64>,
    ) -> MindMapResult<()> {
        let start_level = map.level(node_id)?;
        let mut stack = vec![(node_id, start_level)];

        while let Some((parent_id, parent_level)) = stack.pop() {
            let parent = map.get(parent_id)?;
            let center = parent.center();
            let children = parent.child_ids().to_vec();
            let count = children.len();
            let radius = self.radius_for_level(parent_level + 1);

            for (index, child_id) in children.into_iter().enumerate() {
                let child = map.get_mut(child_id)?;
                if !anchors.contains(&child_id) {
                    let target = match child.pin_offset {
                        Some(offset) => center + offset,
                        None => Self::child_center(center, index, count, radius),
                    };
                    child.set_center(target);
                }
                stack.push((child_id, parent_level + 1));
            }
        }
        Ok(())
    }

    /// Layout des gesamten Baums, verankert an der aktuellen Root-Position
    pub fn layout_all(&self, map: &mut MindMap, anchors: &HashSet<u64>) -> MindMapResult<()> {
        let root_id = map.root_id();
        self.layout_subtree(map, root_id, anchors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NodeKind;
    use approx::assert_relative_eq;

    fn star(children: usize) -> (MindMap, Vec<u64>) {
        let options = MindMapOptions::default();
        let mut map = MindMap::with_options("Root", &options);
        let root = map.root_id();
        map.get_mut(root).expect("Root").set_center(Vec2::new(400.0, 300.0));

        let mut ids = Vec::new();
        for i in 0..children {
            let id = map
                .create_node_with_options(NodeKind::Item, format!("Desktop {}", i + 1), &options)
                .expect("Node anlegbar");
            map.add_child(root, id).expect("Kind anhängbar");
            ids.push(id);
        }
        (map, ids)
    }

    #[test]
    fn test_children_on_circle_with_equal_gaps() {
        let (mut map, ids) = star(5);
        let layout = RadialLayout::new(150.0);
        layout.layout_all(&mut map, &HashSet::new()).expect("Layout");

        let root_center = map.get(map.root_id()).expect("Root").center();
        let mut angles = Vec::new();
        for id in &ids {
            let offset = map.get(*id).expect("Kind").center() - root_center;
            assert_relative_eq!(offset.length(), 150.0, epsilon = 1e-3);
            angles.push(offset.y.atan2(offset.x).rem_euclid(TAU));
        }
        for pair in angles.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], TAU / 5.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_first_child_is_right_of_parent() {
        let (mut map, ids) = star(1);
        RadialLayout::new(150.0)
            .layout_all(&mut map, &HashSet::new())
            .expect("Layout");

        let center = map.get(ids[0]).expect("Kind").center();
        assert_relative_eq!(center.x, 550.0, epsilon = 1e-3);
        assert_relative_eq!(center.y, 300.0, epsilon = 1e-3);
    }

    #[test]
    fn test_layout_is_idempotent() {
        let (mut map, ids) = star(3);
        let grandchild = map
            .create_node_with_options(NodeKind::Group, "New Task", &MindMapOptions::default())
            .expect("Node anlegbar");
        map.add_child(ids[1], grandchild).expect("Kind anhängbar");

        let layout = RadialLayout::default();
        layout.layout_all(&mut map, &HashSet::new()).expect("Layout");
        let first: Vec<Vec2> = map.nodes().map(|n| n.position).collect();
        layout.layout_all(&mut map, &HashSet::new()).expect("Layout");
        let second: Vec<Vec2> = map.nodes().map(|n| n.position).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_leaf_layout_is_noop() {
        let (mut map, _) = star(0);
        let before = map.get(map.root_id()).expect("Root").position;
        RadialLayout::default()
            .layout_all(&mut map, &HashSet::new())
            .expect("Layout");
        assert_eq!(map.get(map.root_id()).expect("Root").position, before);
    }

    #[test]
    fn test_pinned_and_anchored_nodes_stay_but_children_follow() {
        let (mut map, ids) = star(2);
        let options = MindMapOptions::default();
        let task = map
            .create_node_with_options(NodeKind::Group, "New Task", &options)
            .expect("Node anlegbar");
        map.add_child(ids[0], task).expect("Kind anhängbar");

        map.get_mut(ids[0]).expect("Kind").pin_offset = Some(Vec2::new(-200.0, -100.0));
        map.get_mut(ids[1]).expect("Kind").position = Vec2::new(-500.0, 0.0);

        let anchors: HashSet<u64> = [ids[1]].into_iter().collect();
        RadialLayout::new(150.0)
            .layout_all(&mut map, &anchors)
            .expect("Layout");

        let pinned_center = map.get(ids[0]).expect("Kind").center();
        assert_relative_eq!(pinned_center.x, 200.0, epsilon = 1e-3);
        assert_relative_eq!(pinned_center.y, 200.0, epsilon = 1e-3);
        assert_eq!(map.get(ids[1]).expect("Kind").position, Vec2::new(-500.0, 0.0));

        let task_center = map.get(task).expect("Task").center();
        assert_relative_eq!(task_center.x, pinned_center.x + 150.0, epsilon = 1e-3);
        assert_relative_eq!(task_center.y, pinned_center.y, epsilon = 1e-3);
    }

    #[test]
    fn test_pinned_node_follows_moved_parent() {
        let (mut map, ids) = star(1);
        let offset = Vec2::new(30.0, -80.0);
        map.get_mut(ids[0]).expect("Kind").pin_offset = Some(offset);

        let root = map.root_id();
        map.get_mut(root).expect("Root").set_center(Vec2::new(700.0, 500.0));
        RadialLayout::default()
            .layout_all(&mut map, &HashSet::new())
            .expect("Layout");

        let center = map.get(ids[0]).expect("Kind").center();
        assert_relative_eq!(center.x, 730.0, epsilon = 1e-3);
        assert_relative_eq!(center.y, 420.0, epsilon = 1e-3);
    }

    #[test]
    fn test_radius_decay_per_level() {
        let layout = RadialLayout {
            radius: 200.0,
            radius_decay: 0.5,
        };
        assert_relative_eq!(layout.radius_for_level(1), 200.0);
        assert_relative_eq!(layout.radius_for_level(2), 100.0);
        assert_relative_eq!(layout.radius_for_level(3), 50.0);
    }
}
