//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod context_menu;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Mindmap, Interaktion, Dialoge).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use context_menu::{ContextCommand, MenuCatalog, MenuEntry};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use state::{
    AppState, ContextMenuState, InteractionState, RenameDialogState, UiState, ViewState,
};
pub use use_cases::refresh_merge::MergeReport;
