//! Vollständiger Snapshot der externen Items (ersetzt den vorherigen komplett).

/// Ein externes Item, wie es von der Quelle geliefert wird
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalItem {
    /// Stabile externe ID
    pub external_id: String,
    /// Anzeigename
    pub display_name: String,
    /// Anzahl enthaltener Elemente
    pub item_count: u32,
    /// Zusätzliche Metadaten
    pub metadata: Vec<String>,
}

impl ExternalItem {
    /// Erstellt ein Item ohne Metadaten
    pub fn new(
        external_id: impl Into<String>,
        display_name: impl Into<String>,
        item_count: u32,
    ) -> Self {
        Self {
            external_id: external_id.into(),
            display_name: display_name.into(),
            item_count,
            metadata: Vec::new(),
        }
    }

    /// Untertitel für den zugehörigen Node
    pub fn subtitle(&self) -> String {
        format!("{} windows", self.item_count)
    }
}

/// Snapshot aller Items plus der gerade aktiven ID
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    /// Alle Items in Lieferreihenfolge
    pub items: Vec<ExternalItem>,
    /// Externe ID des aktiven Items
    pub active_id: Option<String>,
}

impl Snapshot {
    /// Erstellt einen Snapshot
    pub fn new(items: Vec<ExternalItem>, active_id: Option<String>) -> Self {
        Self { items, active_id }
    }

    /// Ob der Snapshot ein Item mit dieser ID enthält
    pub fn contains(&self, external_id: &str) -> bool {
        self.items.iter().any(|item| item.external_id == external_id)
    }
}
