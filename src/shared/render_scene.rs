//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use glam::Vec2;

use crate::core::{NodeKind, NodeStyle};

/// Darstellungsdaten eines Nodes für einen Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderNode {
    /// Node-ID
    pub id: u64,
    /// Art des Nodes
    pub kind: NodeKind,
    /// Titel
    pub title: String,
    /// Untertitel
    pub subtitle: Option<String>,
    /// Obere linke Ecke
    pub position: Vec2,
    /// Ausdehnung
    pub size: Vec2,
    /// Effektiver Stil (Hervorhebung bereits eingerechnet)
    pub style: NodeStyle,
    /// Selektiert
    pub selected: bool,
    /// Als aktiv hervorgehoben
    pub highlighted: bool,
}

impl RenderNode {
    /// Mittelpunkt des Rechtecks
    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }
}

/// Darstellungsdaten einer Eltern→Kind-Kurve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConnection {
    /// Eltern-Node-ID
    pub from_id: u64,
    /// Kind-Node-ID
    pub to_id: u64,
    /// Kurvenpunkte [Start, Kontrolle 1, Kontrolle 2, Ende]
    pub points: [Vec2; 4],
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    /// Alle vom Root erreichbaren Nodes in Zeichenreihenfolge
    pub nodes: Vec<RenderNode>,
    /// Alle abgeleiteten Verbindungen
    pub connections: Vec<RenderConnection>,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Revision des Modells, aus dem die Szene gebaut wurde
    pub revision: u64,
    /// Linienfarbe der Verbindungen
    pub connection_color: [f32; 4],
    /// Linienstärke der Verbindungen
    pub connection_width: f32,
    /// Abstand der Hintergrund-Rasterlinien (0 = aus)
    pub background_grid_spacing: f32,
    /// Skalierung selektierter Nodes
    pub selected_scale: f32,
}

impl RenderScene {
    /// Node nach ID
    pub fn node(&self, id: u64) -> Option<&RenderNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Ob die Szene einen Node mit dieser ID enthält
    pub fn contains_node(&self, id: u64) -> bool {
        self.node(id).is_some()
    }

    /// Verbindungen als geordnete ID-Paare
    pub fn connection_pairs(&self) -> Vec<(u64, u64)> {
        self.connections
            .iter()
            .map(|c| (c.from_id, c.to_id))
            .collect()
    }
}

/// Empfänger der Render-Szene (z.B. der egui-Canvas).
///
/// Darf das Modell nicht verändern; erhält nach jeder Mutation die neue Szene.
pub trait RenderAdapter {
    /// Übernimmt die Szene für die nächsten Frames
    fn present(&mut self, scene: &RenderScene);
}
