//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::MindMapOptions;
pub use options::{GRID_SIZE, LAYOUT_RADIUS};
pub use render_scene::{RenderAdapter, RenderConnection, RenderNode, RenderScene};
