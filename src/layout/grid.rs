use glam::Vec2;

/// Rastet eine Position achsenweise auf das nächste Rasterfeld ein.
///
/// Eine Rastergröße ≤ 0 lässt die Position unverändert.
pub fn snap_to_grid(position: Vec2, grid_size: f32) -> Vec2 {
    if grid_size <= 0.0 {
        return position;
    }
    (position / grid_size).round() * grid_size
}
