//! Layout-Engine: radiale Baumplatzierung und Raster-Einrasten.

mod grid;
mod radial;

pub use grid::snap_to_grid;
pub use radial::RadialLayout;
