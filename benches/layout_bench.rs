use std::collections::HashSet;

use criterion::{criterion_group, criterion_main, Criterion};
use glam::Vec2;
use mindmap_desktops::{MindMap, MindMapOptions, NodeKind, RadialLayout};
use std::hint::black_box;

/// Drei Ebenen: Kategorien unter dem Root, je `per_category` Items darunter.
fn build_map(categories: usize, per_category: usize) -> MindMap {
    let options = MindMapOptions::default();
    let mut map = MindMap::with_options("Virtual Desktops", &options);
    let root = map.root_id();
    map.get_mut(root)
        .expect("Root")
        .set_center(Vec2::new(960.0, 540.0));

    for c in 0..categories {
        let category = map
            .create_node_with_options(NodeKind::Category, format!("Kategorie {}", c), &options)
            .expect("Kategorie anlegbar");
        map.add_child(root, category).expect("Kategorie anhängbar");
        for i in 0..per_category {
            let item = map
                .create_node_with_options(NodeKind::Item, format!("Desktop {}-{}", c, i), &options)
                .expect("Item anlegbar");
            map.add_child(category, item).expect("Item anhängbar");
        }
    }

    RadialLayout::default()
        .layout_all(&mut map, &HashSet::new())
        .expect("Layout");
    map
}

fn bench_layout_all(c: &mut Criterion) {
    let mut map = build_map(12, 40);
    let layout = RadialLayout::default();
    let anchors = HashSet::new();

    c.bench_function("layout_all_12x40", |b| {
        b.iter(|| {
            layout
                .layout_all(black_box(&mut map), &anchors)
                .expect("Layout");
        })
    });
}

fn bench_hit_test(c: &mut Criterion) {
    let map = build_map(12, 40);
    let points: Vec<Vec2> = (0..64)
        .map(|i| Vec2::new((i * 29 % 1920) as f32, (i * 17 % 1080) as f32))
        .collect();

    c.bench_function("node_at_64_points", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for &p in &points {
                if map.node_at(black_box(p)).is_some() {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });
}

fn bench_connections(c: &mut Criterion) {
    let map = build_map(12, 40);

    c.bench_function("connections_12x40", |b| {
        b.iter(|| black_box(map.connections()))
    });
}

criterion_group!(benches, bench_layout_all, bench_hit_test, bench_connections);
criterion_main!(benches);
