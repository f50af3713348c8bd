use crate::core::Snapshot;
use crate::shared::MindMapOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Genau diesen Node selektieren
    SelectNode { node_id: u64 },
    /// Selektion aufheben
    ClearSelection,
    /// Idle → Dragging: Drag auf Node beginnen
    BeginDrag { node_id: u64, pointer_pos: glam::Vec2 },
    /// Dragging: Node dem Zeiger nachführen
    DragTo { pointer_pos: glam::Vec2 },
    /// Dragging → Idle: Einrasten und Drag-Zustand löschen
    EndDrag,
    /// Node samt Teilbaum unter neuen Eltern-Node hängen
    ReparentNode { node_id: u64, new_parent_id: u64 },
    /// Wechsel zum externen Item anfordern
    ActivateNode { node_id: u64 },
    /// Kontextmenü öffnen (Node oder leere Fläche)
    OpenContextMenu {
        target: Option<u64>,
        pos: glam::Vec2,
    },
    /// Kontextmenü schließen
    CloseContextMenu,
    /// Umbenennen-Dialog öffnen
    OpenRenameDialog { node_id: u64 },
    /// Umbenennen-Dialog schließen
    CloseRenameDialog,
    /// Titel eines Nodes setzen
    RenameNode { node_id: u64, title: String },
    /// Node samt Teilbaum löschen
    DeleteNode { node_id: u64 },
    /// Neue Gruppe unter dem Node anlegen
    AddChildNode { parent_id: u64 },
    /// Neue Kategorie unter dem Root anlegen
    AddCategory,
    /// Neues externes Item anfordern
    CreateItem,
    /// Layout zurücksetzen (Root zentrieren, Pins lösen)
    ResetLayout,
    /// Snapshot synchron von der Quelle holen und einarbeiten
    RefreshFromSource,
    /// Gelieferten Snapshot einarbeiten
    ApplySnapshot { snapshot: Snapshot },
    /// Fehlgeschlagenen Refresh melden (Baum bleibt unverändert)
    ReportRefreshFailure { reason: String },
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Neue Optionen übernehmen und speichern
    ApplyOptions { options: Box<MindMapOptions> },
    /// Anwendung beenden
    RequestExit,
}
