//! Application State: zentrale Datenhaltung.

mod app_state;
mod dialogs;
mod interaction;

pub use app_state::AppState;
pub use dialogs::{ContextMenuState, RenameDialogState};
pub use interaction::InteractionState;

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Offenes Kontextmenü (None = geschlossen)
    pub context_menu: Option<ContextMenuState>,
    /// Offener Umbenennen-Dialog (None = geschlossen)
    pub rename_dialog: Option<RenameDialogState>,
    /// Temporäre Statusnachricht (z.B. fehlgeschlagener Refresh)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self::default()
    }
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct ViewState {
    /// Aktuelle Viewport-Größe in Pixel (None bis zum ersten Frame)
    pub viewport_size: Option<[f32; 2]>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mittelpunkt des Viewports, falls bekannt
    pub fn viewport_center(&self) -> Option<glam::Vec2> {
        self.viewport_size
            .map(|[w, h]| glam::Vec2::new(w * 0.5, h * 0.5))
    }
}
