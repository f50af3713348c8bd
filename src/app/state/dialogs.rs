use crate::app::context_menu::MenuCatalog;

/// Zustand eines offenen Kontextmenüs
#[derive(Debug, Clone)]
pub struct ContextMenuState {
    /// Ziel-Node (None = leere Fläche)
    pub target: Option<u64>,
    /// Öffnungsposition in Canvas-Koordinaten
    pub pos: glam::Vec2,
    /// Beim Öffnen gebauter Katalog
    pub catalog: MenuCatalog,
}

/// Zustand des Umbenennen-Dialogs
#[derive(Debug, Clone)]
pub struct RenameDialogState {
    /// Node, der umbenannt wird
    pub node_id: u64,
    /// Eingabepuffer des Textfelds
    pub buffer: String,
}
