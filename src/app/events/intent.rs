use crate::app::context_menu::ContextCommand;
use crate::core::Snapshot;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primäre Maustaste gedrückt (Canvas-Koordinaten)
    PointerPressed {
        pos: glam::Vec2,
        /// Zweiter Druck innerhalb des Doppelklick-Fensters
        double_click: bool,
    },
    /// Zeiger mit gedrückter Primärtaste bewegt
    PointerDragged { pos: glam::Vec2 },
    /// Primäre Maustaste losgelassen
    PointerReleased { pos: glam::Vec2 },
    /// Sekundäre Maustaste gedrückt (Kontextmenü)
    SecondaryPressed { pos: glam::Vec2 },
    /// Kontextmenü ohne Auswahl geschlossen
    ContextMenuDismissed,
    /// Eintrag im Kontextmenü gewählt
    ContextCommandChosen { command: ContextCommand },
    /// Umbenennen-Dialog bestätigt
    RenameConfirmed { node_id: u64, title: String },
    /// Umbenennen-Dialog abgebrochen
    RenameCancelled,
    /// Items synchron von der Quelle neu laden (Menü "Refresh Desktops")
    RefreshRequested,
    /// Hintergrund-Feed hat einen neuen Snapshot geliefert
    SnapshotReceived { snapshot: Snapshot },
    /// Hintergrund-Feed konnte die Quelle nicht erreichen
    RefreshFailed { reason: String },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Layout zurücksetzen (Menü)
    ResetLayoutRequested,
    /// Menü "Snap to Grid" umgeschaltet
    SnapToGridToggled { enabled: bool },
    /// Anwendung beenden
    ExitRequested,
}
