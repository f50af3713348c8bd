//! Eigenschaften des Node-Modells und der Layout-Engine über mehrere Baumformen.

use std::collections::HashSet;
use std::f32::consts::TAU;

use approx::assert_relative_eq;
use glam::Vec2;
use mindmap_desktops::{snap_to_grid, MindMap, MindMapError, MindMapOptions, NodeKind, RadialLayout};

/// Baut einen Baum mit `count` Nodes; Node i hängt an einem früheren Node.
fn build_tree(count: usize, fan: usize) -> MindMap {
    let options = MindMapOptions::default();
    let mut map = MindMap::with_options("Root", &options);
    let root = map.root_id();
    map.get_mut(root)
        .expect("Root")
        .set_center(Vec2::new(640.0, 360.0));

    let mut ids = vec![root];
    for i in 1..count {
        let kind = match i % 3 {
            0 => NodeKind::Category,
            1 => NodeKind::Item,
            _ => NodeKind::Group,
        };
        let id = map
            .create_node_with_options(kind, format!("Node {}", i), &options)
            .expect("Node anlegbar");
        let parent = ids[(i * 7 / fan.max(1)) % ids.len()];
        map.add_child(parent, id).expect("Kind anhängbar");
        ids.push(id);
    }
    map
}

fn tree_shapes() -> Vec<MindMap> {
    vec![
        build_tree(1, 1),
        build_tree(2, 1),
        build_tree(12, 2),
        build_tree(40, 3),
        build_tree(90, 5),
    ]
}

#[test]
fn test_levels_increase_by_one_along_every_edge() {
    for map in tree_shapes() {
        let root = map.root_id();
        assert_eq!(map.level(root).expect("Root"), 0);

        for id in map.reachable_ids() {
            for &child in map.children(id).expect("Node") {
                assert_eq!(
                    map.level(child).expect("Kind"),
                    map.level(id).expect("Eltern") + 1
                );
            }
        }
    }
}

#[test]
fn test_no_node_is_its_own_descendant_and_cycles_are_rejected() {
    for mut map in tree_shapes() {
        for id in map.reachable_ids() {
            let descendants = map.descendants(id).expect("Node");
            assert!(!descendants.contains(&id));

            // Der Root ist nie umhängbar (InvariantViolation statt Zyklus)
            if id == map.root_id() {
                continue;
            }
            for &descendant in &descendants {
                let parent_before = map.parent(id).expect("Node");
                let result = map.reparent(id, descendant);
                assert!(matches!(result, Err(MindMapError::Cycle { .. })));
                assert_eq!(map.parent(id).expect("Node"), parent_before);
            }
        }
    }
}

#[test]
fn test_layout_is_idempotent() {
    let layout = RadialLayout::default();
    for mut map in tree_shapes() {
        layout
            .layout_all(&mut map, &HashSet::new())
            .expect("Erstes Layout");
        let first: Vec<Vec2> = map.nodes().map(|n| n.position).collect();

        layout
            .layout_all(&mut map, &HashSet::new())
            .expect("Zweites Layout");
        let second: Vec<Vec2> = map.nodes().map(|n| n.position).collect();

        assert_eq!(first, second);
    }
}

#[test]
fn test_children_sit_on_equally_spaced_ring() {
    let layout = RadialLayout::new(150.0);
    let options = MindMapOptions::default();

    for n in 1..=9 {
        let mut map = MindMap::with_options("Root", &options);
        let root = map.root_id();
        map.get_mut(root)
            .expect("Root")
            .set_center(Vec2::new(400.0, 300.0));
        for i in 0..n {
            let id = map
                .create_node_with_options(NodeKind::Item, format!("Desktop {}", i), &options)
                .expect("Node anlegbar");
            map.add_child(root, id).expect("Kind anhängbar");
        }

        layout
            .layout_all(&mut map, &HashSet::new())
            .expect("Layout");

        let root_center = map.get(root).expect("Root").center();
        let angles: Vec<f32> = map
            .children(root)
            .expect("Root")
            .iter()
            .map(|&id| {
                let offset = map.get(id).expect("Kind").center() - root_center;
                assert_relative_eq!(offset.length(), 150.0, epsilon = 1e-3);
                offset.y.atan2(offset.x).rem_euclid(TAU)
            })
            .collect();

        let step = TAU / n as f32;
        for (i, angle) in angles.iter().enumerate() {
            let expected = (i as f32 * step).rem_euclid(TAU);
            let diff = (angle - expected).abs();
            assert!(
                diff < 1e-3 || (TAU - diff) < 1e-3,
                "Winkel {} von {}: {} statt {}",
                i,
                n,
                angle,
                expected
            );
        }
    }
}

#[test]
fn test_moving_root_translates_whole_layout() {
    let layout = RadialLayout::default();
    let mut map = build_tree(25, 3);
    layout
        .layout_all(&mut map, &HashSet::new())
        .expect("Layout");
    let before: Vec<Vec2> = map.nodes().map(|n| n.position).collect();

    let root = map.root_id();
    let shift = Vec2::new(-120.0, 80.0);
    let center = map.get(root).expect("Root").center();
    map.get_mut(root).expect("Root").set_center(center + shift);
    layout
        .layout_all(&mut map, &HashSet::new())
        .expect("Layout");

    for (old, node) in before.iter().zip(map.nodes()) {
        assert_relative_eq!(node.position.x, old.x + shift.x, epsilon = 1e-2);
        assert_relative_eq!(node.position.y, old.y + shift.y, epsilon = 1e-2);
    }
}

#[test]
fn test_subtree_layout_leaves_siblings_untouched() {
    let layout = RadialLayout::default();
    let mut map = build_tree(30, 2);
    layout
        .layout_all(&mut map, &HashSet::new())
        .expect("Layout");

    let root = map.root_id();
    let moved = map.children(root).expect("Root")[0];
    let subtree: HashSet<u64> = map
        .descendants(moved)
        .expect("Node")
        .into_iter()
        .chain(std::iter::once(moved))
        .collect();
    let outside_before: Vec<(u64, Vec2)> = map
        .nodes()
        .filter(|n| !subtree.contains(&n.id))
        .map(|n| (n.id, n.position))
        .collect();

    map.get_mut(moved).expect("Node").position += Vec2::new(33.0, -17.0);
    layout
        .layout_subtree(&mut map, moved, &HashSet::new())
        .expect("Teilbaum-Layout");

    let outside_after: Vec<(u64, Vec2)> = map
        .nodes()
        .filter(|n| !subtree.contains(&n.id))
        .map(|n| (n.id, n.position))
        .collect();
    assert_eq!(outside_before, outside_after);
}

#[test]
fn test_grid_snap_rounds_each_axis() {
    assert_eq!(snap_to_grid(Vec2::new(47.0, 33.0), 20.0), Vec2::new(40.0, 40.0));
    assert_eq!(snap_to_grid(Vec2::new(-9.0, 11.0), 20.0), Vec2::new(0.0, 20.0));
}
