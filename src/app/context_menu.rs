//! Kontextmenü-Kataloge: welche Befehle in welchem Kontext erscheinen.
//!
//! Der Katalog wird beim Öffnen des Menüs einmal gebaut und im UiState
//! gehalten; die UI rendert nur die Einträge und meldet den gewählten
//! [`ContextCommand`] als Intent zurück.

use crate::core::{MindMap, MindMapNode, NodeKind};

/// Befehl aus dem Kontextmenü (trägt die Ziel-ID bereits mit)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextCommand {
    /// Zum externen Item wechseln
    Activate { node_id: u64 },
    /// Umbenennen-Dialog öffnen
    Rename { node_id: u64 },
    /// Node samt Teilbaum löschen
    Delete { node_id: u64 },
    /// Neue Gruppe als Kind anlegen
    AddChild { node_id: u64 },
    /// Neues externes Item anfordern
    CreateItem,
    /// Neue Kategorie unter dem Root
    AddCategory,
    /// Layout zurücksetzen
    ResetLayout,
}

/// Ein Eintrag im Kontextmenü
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEntry {
    /// Nicht klickbare Überschrift
    Label(String),
    /// Trennlinie
    Separator,
    /// Klickbarer Befehl
    Command {
        command: ContextCommand,
        label: String,
        enabled: bool,
    },
}

impl MenuEntry {
    fn command(command: ContextCommand, label: &str) -> Self {
        MenuEntry::Command {
            command,
            label: label.into(),
            enabled: true,
        }
    }
}

/// Fertig gebautes Menü für einen Kontext
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuCatalog {
    /// Einträge in Anzeigereihenfolge
    pub entries: Vec<MenuEntry>,
}

impl MenuCatalog {
    /// Menü für einen Node (abhängig von seiner Art)
    pub fn for_node(node: &MindMapNode) -> Self {
        let node_id = node.id;
        let mut entries = vec![MenuEntry::Label(node.title.clone())];

        if node.kind == NodeKind::Item {
            entries.push(MenuEntry::command(
                ContextCommand::Activate { node_id },
                "Switch to Desktop",
            ));
        }
        entries.push(MenuEntry::command(
            ContextCommand::Rename { node_id },
            "Rename",
        ));
        entries.push(MenuEntry::Separator);
        // Root ist nicht löschbar
        entries.push(MenuEntry::Command {
            command: ContextCommand::Delete { node_id },
            label: "Delete Node".into(),
            enabled: node.kind != NodeKind::Root,
        });
        entries.push(MenuEntry::command(
            ContextCommand::AddChild { node_id },
            "Add Child",
        ));

        MenuCatalog { entries }
    }

    /// Menü für die leere Fläche
    pub fn for_empty_area() -> Self {
        MenuCatalog {
            entries: vec![
                MenuEntry::command(ContextCommand::CreateItem, "Create New Desktop"),
                MenuEntry::command(ContextCommand::AddCategory, "Add Category"),
                MenuEntry::Separator,
                MenuEntry::command(ContextCommand::ResetLayout, "Reset Layout"),
            ],
        }
    }

    /// Wählt den Katalog passend zum Ziel (None = leere Fläche)
    pub fn build(map: &MindMap, target: Option<u64>) -> Self {
        match target.and_then(|id| map.node(id)) {
            Some(node) => Self::for_node(node),
            None => Self::for_empty_area(),
        }
    }

    /// Alle aktivierten Befehle
    pub fn enabled_commands(&self) -> Vec<ContextCommand> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                MenuEntry::Command {
                    command,
                    enabled: true,
                    ..
                } => Some(*command),
                _ => None,
            })
            .collect()
    }

    /// Ob der Befehl im Katalog steht und aktiviert ist
    pub fn allows(&self, command: ContextCommand) -> bool {
        self.enabled_commands().contains(&command)
    }
}
