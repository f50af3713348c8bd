//! Mindmap Desktops Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod layout;
pub mod shared;
pub mod source;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState, ViewState};
pub use core::{
    Connection, ExternalItem, MindMap, MindMapError, MindMapNode, MindMapResult, NodeKind,
    NodeStyle, Snapshot,
};
pub use layout::{snap_to_grid, RadialLayout};
pub use shared::{MindMapOptions, RenderAdapter, RenderScene};
pub use source::{ItemSource, MockItemSource, RefreshFeed};
