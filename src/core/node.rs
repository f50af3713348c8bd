//! Repräsentiert einen einzelnen Knoten der Mindmap.

use glam::Vec2;

use crate::shared::options::NODE_SELECTED_SCALE;

/// Art eines Nodes (geschlossene Menge, keine Klassenhierarchie)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Der eine Wurzel-Node der Mindmap
    Root,
    /// Gruppierende Kategorie (Drop-Ziel)
    Category,
    /// Externes Item (z.B. virtueller Desktop)
    Item,
    /// Benutzer-angelegte Gruppe/Aufgabe
    Group,
}

impl NodeKind {
    /// Anzeigename der Art (Statusleiste, Logs)
    pub fn label(self) -> &'static str {
        match self {
            NodeKind::Root => "Root",
            NodeKind::Category => "Kategorie",
            NodeKind::Item => "Desktop",
            NodeKind::Group => "Gruppe",
        }
    }

    /// Ob auf diesen Node andere Nodes gezogen werden dürfen
    pub fn accepts_children_on_drop(self) -> bool {
        matches!(self, NodeKind::Root | NodeKind::Category)
    }
}

/// Darstellungsstil eines Nodes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeStyle {
    /// Füllfarbe (RGBA)
    pub fill_color: [f32; 4],
    /// Rahmenfarbe (RGBA)
    pub border_color: [f32; 4],
    /// Rahmenbreite
    pub border_width: f32,
    /// Eckenradius
    pub corner_radius: f32,
}

impl NodeStyle {
    /// Stil mit gegebener Füllfarbe und Standard-Rahmen
    pub fn filled(fill_color: [f32; 4]) -> Self {
        Self {
            fill_color,
            border_color: fill_color,
            border_width: crate::shared::options::NODE_BORDER_WIDTH,
            corner_radius: crate::shared::options::NODE_CORNER_RADIUS,
        }
    }
}

/// Referenz auf das externe Item, das ein Node darstellt (per ID, nicht besitzend)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemRef {
    /// Externe ID aus dem Snapshot
    pub external_id: String,
    /// Anzahl enthaltener Elemente (z.B. Fenster)
    pub item_count: u32,
    /// Zusätzliche Metadaten (z.B. Fenstertitel)
    pub metadata: Vec<String>,
}

/// Achsenparalleles Begrenzungsrechteck
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeBounds {
    /// Obere linke Ecke
    pub min: Vec2,
    /// Untere rechte Ecke
    pub max: Vec2,
}

impl NodeBounds {
    /// Prüft ob ein Punkt innerhalb liegt (Ränder inklusive)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Vereinigung zweier Rechtecke
    pub fn union(self, other: NodeBounds) -> NodeBounds {
        NodeBounds {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Größe des Rechtecks
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Ein Knoten der Mindmap
///
/// `position` ist die obere linke Ecke (y wächst nach unten).
/// Eltern/Kind-Beziehungen werden nur als IDs gehalten und ausschließlich
/// über [`MindMap`](super::MindMap) verändert.
#[derive(Debug, Clone)]
pub struct MindMapNode {
    /// Eindeutige, unveränderliche ID
    pub id: u64,
    /// Art des Nodes
    pub kind: NodeKind,
    /// Titel
    pub title: String,
    /// Untertitel (z.B. "3 windows")
    pub subtitle: Option<String>,
    /// Obere linke Ecke
    pub position: Vec2,
    /// Ausdehnung
    pub size: Vec2,
    /// Darstellungsstil
    pub style: NodeStyle,
    /// Ob der Node selektiert ist
    pub selected: bool,
    /// Ob der Node als aktiv hervorgehoben ist
    pub highlighted: bool,
    /// Manuell platziert: Versatz der eigenen Mitte zur Eltern-Mitte.
    /// Das Layout hält diesen Versatz, statt den Node in den Ring zu setzen.
    pub pin_offset: Option<Vec2>,
    /// Titel wurde vom Benutzer geändert und überlebt Refreshes
    pub custom_title: bool,
    /// Externes Item (nur bei `NodeKind::Item`)
    pub item: Option<ItemRef>,
    pub(crate) parent: Option<u64>,
    pub(crate) children: Vec<u64>,
}

impl MindMapNode {
    /// Erstellt einen neuen, losgelösten Node
    pub fn new(
        id: u64,
        kind: NodeKind,
        title: impl Into<String>,
        size: Vec2,
        style: NodeStyle,
    ) -> Self {
        Self {
            id,
            kind,
            title: title.into(),
            subtitle: None,
            position: Vec2::ZERO,
            size,
            style,
            selected: false,
            highlighted: false,
            pin_offset: None,
            custom_title: false,
            item: None,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Ob der Node manuell platziert wurde
    pub fn is_pinned(&self) -> bool {
        self.pin_offset.is_some()
    }

    /// Mittelpunkt des Node-Rechtecks
    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    /// Setzt die Position so, dass der Mittelpunkt auf `center` liegt
    pub fn set_center(&mut self, center: Vec2) {
        self.position = center - self.size * 0.5;
    }

    /// Begrenzungsrechteck des Nodes
    pub fn frame(&self) -> NodeBounds {
        NodeBounds {
            min: self.position,
            max: self.position + self.size,
        }
    }

    /// Sichtbares Rechteck: selektierte Nodes werden um ihre Mitte vergrößert gezeichnet
    pub fn visible_frame(&self) -> NodeBounds {
        if !self.selected {
            return self.frame();
        }
        let half = self.size * (NODE_SELECTED_SCALE * 0.5);
        let center = self.center();
        NodeBounds {
            min: center - half,
            max: center + half,
        }
    }

    /// Hit-Test gegen das sichtbare Node-Rechteck
    pub fn contains(&self, point: Vec2) -> bool {
        self.visible_frame().contains(point)
    }

    /// ID des Eltern-Nodes (None beim Root oder losgelösten Nodes)
    pub fn parent_id(&self) -> Option<u64> {
        self.parent
    }

    /// Kind-IDs in Einfügereihenfolge
    pub fn child_ids(&self) -> &[u64] {
        &self.children
    }

    /// Ob der Node keine Kinder hat
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Externe ID, falls der Node ein Item darstellt
    pub fn external_id(&self) -> Option<&str> {
        self.item.as_ref().map(|item| item.external_id.as_str())
    }
}
