use crate::app::CommandLog;
use crate::core::MindMap;
use crate::layout::RadialLayout;
use crate::shared::MindMapOptions;

use super::{InteractionState, UiState, ViewState};

/// Titel des Root-Nodes
pub const ROOT_TITLE: &str = "Virtual Desktops";

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Die Mindmap (Node-Arena mit Root)
    pub map: MindMap,
    /// Zeiger-Interaktion (Idle/Dragging)
    pub interaction: InteractionState,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Radius)
    pub options: MindMapOptions,
    /// Ziel-Datei für geänderte Optionen (None: nicht persistieren)
    pub options_path: Option<std::path::PathBuf>,
    /// Wird bei jeder Modell-Änderung erhöht
    pub render_revision: u64,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(MindMapOptions::default())
    }

    /// Erstellt einen App-State mit gegebenen Optionen (nur Root vorhanden)
    pub fn with_options(options: MindMapOptions) -> Self {
        Self {
            map: MindMap::with_options(ROOT_TITLE, &options),
            interaction: InteractionState::Idle,
            view: ViewState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            options_path: None,
            render_revision: 0,
            should_exit: false,
        }
    }

    /// Layout-Parameter aus den aktuellen Optionen
    pub fn layout(&self) -> RadialLayout {
        RadialLayout::from_options(&self.options)
    }

    /// Markiert das Modell als geändert (Render-Adapter wird benachrichtigt)
    pub fn mark_dirty(&mut self) {
        self.render_revision = self.render_revision.wrapping_add(1);
    }

    /// Gibt die Anzahl der vom Root erreichbaren Nodes zurück (für UI-Anzeige)
    pub fn node_count(&self) -> usize {
        self.map.reachable_ids().len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
