//! Zentrale Konfiguration für die Mindmap-Ansicht.
//!
//! `MindMapOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Layout ──────────────────────────────────────────────────────────

/// Radius des Radial-Layouts (Abstand Eltern-Mitte → Kind-Mitte).
pub const LAYOUT_RADIUS: f32 = 150.0;
/// Radius-Faktor pro Ebene (1.0 = konstanter Radius auf allen Ebenen).
pub const LAYOUT_RADIUS_DECAY: f32 = 1.0;
/// Rastergröße für das Einrasten nach einem Drag.
pub const GRID_SIZE: f32 = 20.0;

// ── Nodes ───────────────────────────────────────────────────────────

/// Standardgröße für Item-, Kategorie- und Gruppen-Nodes [Breite, Höhe].
pub const NODE_SIZE: [f32; 2] = [120.0, 60.0];
/// Größe des Root-Nodes [Breite, Höhe].
pub const ROOT_NODE_SIZE: [f32; 2] = [160.0, 80.0];
/// Rahmenbreite im Normalzustand.
pub const NODE_BORDER_WIDTH: f32 = 2.0;
/// Eckenradius der Node-Rechtecke.
pub const NODE_CORNER_RADIUS: f32 = 8.0;
/// Darstellungs-Skalierung selektierter Nodes.
pub const NODE_SELECTED_SCALE: f32 = 1.1;

/// Füllfarbe Root (RGBA: Lila).
pub const NODE_COLOR_ROOT: [f32; 4] = [0.69, 0.32, 0.87, 1.0];
/// Füllfarbe Item/Desktop (RGBA: Blau).
pub const NODE_COLOR_ITEM: [f32; 4] = [0.0, 0.48, 1.0, 1.0];
/// Füllfarbe Kategorie (RGBA: Grün).
pub const NODE_COLOR_CATEGORY: [f32; 4] = [0.2, 0.78, 0.35, 1.0];
/// Füllfarbe Gruppe/Task (RGBA: Orange).
pub const NODE_COLOR_GROUP: [f32; 4] = [1.0, 0.58, 0.0, 1.0];

/// Rahmenfarbe für hervorgehobene (aktive) Nodes (RGBA: Gelb).
pub const HIGHLIGHT_BORDER_COLOR: [f32; 4] = [1.0, 0.8, 0.0, 1.0];
/// Rahmenbreite für hervorgehobene Nodes.
pub const HIGHLIGHT_BORDER_WIDTH: f32 = 4.0;

// ── Verbindungen ────────────────────────────────────────────────────

/// Linienfarbe der Eltern→Kind-Kurven (RGBA: Grau).
pub const CONNECTION_COLOR: [f32; 4] = [0.55, 0.55, 0.58, 1.0];
/// Linienstärke der Eltern→Kind-Kurven.
pub const CONNECTION_WIDTH: f32 = 2.0;

// ── Hintergrund & Eingabe ───────────────────────────────────────────

/// Abstand der Hintergrund-Rasterlinien.
pub const BACKGROUND_GRID_SPACING: f32 = 50.0;
/// Polling-Intervall der externen Item-Quelle in Sekunden.
pub const REFRESH_INTERVAL_SECS: f32 = 5.0;
/// Maximaler Abstand zweier Klicks für einen Doppelklick (Sekunden).
pub const DOUBLE_CLICK_SECS: f64 = 0.35;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `mindmap_desktops.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MindMapOptions {
    // ── Layout ──────────────────────────────────────────────────
    /// Radius des Radial-Layouts
    pub layout_radius: f32,
    /// Radius-Faktor pro Ebene (1.0 = konstant)
    #[serde(default = "default_layout_radius_decay")]
    pub layout_radius_decay: f32,
    /// Rastergröße beim Loslassen
    pub grid_size: f32,
    /// Ob Nodes nach einem Drag auf das Raster einrasten
    #[serde(default = "default_true")]
    pub snap_to_grid: bool,

    // ── Nodes ───────────────────────────────────────────────────
    /// Standardgröße neuer Nodes
    pub node_size: [f32; 2],
    /// Größe des Root-Nodes
    pub root_node_size: [f32; 2],
    /// Füllfarbe Root
    pub color_root: [f32; 4],
    /// Füllfarbe Items
    pub color_item: [f32; 4],
    /// Füllfarbe Kategorien
    pub color_category: [f32; 4],
    /// Füllfarbe Gruppen
    pub color_group: [f32; 4],
    /// Rahmenfarbe hervorgehobener Nodes
    pub highlight_border_color: [f32; 4],
    /// Rahmenbreite hervorgehobener Nodes
    pub highlight_border_width: f32,

    // ── Verbindungen ────────────────────────────────────────────
    /// Linienfarbe der Verbindungen
    pub connection_color: [f32; 4],
    /// Linienstärke der Verbindungen
    pub connection_width: f32,

    // ── Hintergrund & Eingabe ───────────────────────────────────
    /// Abstand der Hintergrund-Rasterlinien (0 = kein Raster)
    pub background_grid_spacing: f32,
    /// Polling-Intervall der Item-Quelle in Sekunden
    pub refresh_interval_secs: f32,
    /// Doppelklick-Fenster in Sekunden
    #[serde(default = "default_double_click_secs")]
    pub double_click_secs: f64,
}

impl Default for MindMapOptions {
    fn default() -> Self {
        Self {
            layout_radius: LAYOUT_RADIUS,
            layout_radius_decay: LAYOUT_RADIUS_DECAY,
            grid_size: GRID_SIZE,
            snap_to_grid: true,

            node_size: NODE_SIZE,
            root_node_size: ROOT_NODE_SIZE,
            color_root: NODE_COLOR_ROOT,
            color_item: NODE_COLOR_ITEM,
            color_category: NODE_COLOR_CATEGORY,
            color_group: NODE_COLOR_GROUP,
            highlight_border_color: HIGHLIGHT_BORDER_COLOR,
            highlight_border_width: HIGHLIGHT_BORDER_WIDTH,

            connection_color: CONNECTION_COLOR,
            connection_width: CONNECTION_WIDTH,

            background_grid_spacing: BACKGROUND_GRID_SPACING,
            refresh_interval_secs: REFRESH_INTERVAL_SECS,
            double_click_secs: DOUBLE_CLICK_SECS,
        }
    }
}

fn default_layout_radius_decay() -> f32 {
    LAYOUT_RADIUS_DECAY
}

fn default_true() -> bool {
    true
}

fn default_double_click_secs() -> f64 {
    DOUBLE_CLICK_SECS
}

impl MindMapOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("mindmap_desktops"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("mindmap_desktops.toml")
    }

    /// Größe eines neuen Nodes abhängig von seiner Art.
    pub fn node_size_for(&self, kind: crate::core::NodeKind) -> glam::Vec2 {
        match kind {
            crate::core::NodeKind::Root => glam::Vec2::from(self.root_node_size),
            _ => glam::Vec2::from(self.node_size),
        }
    }

    /// Standard-Stil eines neuen Nodes abhängig von seiner Art.
    pub fn node_style_for(&self, kind: crate::core::NodeKind) -> crate::core::NodeStyle {
        use crate::core::NodeKind;
        let fill = match kind {
            NodeKind::Root => self.color_root,
            NodeKind::Item => self.color_item,
            NodeKind::Category => self.color_category,
            NodeKind::Group => self.color_group,
        };
        crate::core::NodeStyle::filled(fill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_keeps_values() {
        let mut options = MindMapOptions::default();
        options.layout_radius = 220.0;
        options.snap_to_grid = false;

        let content = toml::to_string_pretty(&options).expect("serialisierbar");
        let parsed: MindMapOptions = toml::from_str(&content).expect("parsebar");
        assert_eq!(parsed, options);
    }

    #[test]
    fn missing_optional_keys_fall_back_to_defaults() {
        let defaults = MindMapOptions::default();
        let mut content = toml::to_string_pretty(&defaults).expect("serialisierbar");
        content = content
            .lines()
            .filter(|line| {
                !line.starts_with("layout_radius_decay")
                    && !line.starts_with("snap_to_grid")
                    && !line.starts_with("double_click_secs")
            })
            .collect::<Vec<_>>()
            .join("\n");

        let parsed: MindMapOptions = toml::from_str(&content).expect("ältere Datei parsebar");
        assert_eq!(parsed.layout_radius_decay, LAYOUT_RADIUS_DECAY);
        assert!(parsed.snap_to_grid);
        assert_eq!(parsed.double_click_secs, DOUBLE_CLICK_SECS);
    }

    #[test]
    fn saved_file_loads_back() {
        let path = std::env::temp_dir().join(format!(
            "mindmap_desktops_options_{}.toml",
            std::process::id()
        ));
        let mut options = MindMapOptions::default();
        options.grid_size = 25.0;
        options.snap_to_grid = false;

        options.save_to_file(&path).expect("speicherbar");
        let loaded = MindMapOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, options);
    }

    #[test]
    fn load_from_missing_file_returns_defaults() {
        let path = std::env::temp_dir().join("mindmap_desktops_does_not_exist.toml");
        let options = MindMapOptions::load_from_file(&path);
        assert_eq!(options, MindMapOptions::default());
    }

    #[test]
    fn root_gets_larger_size() {
        let options = MindMapOptions::default();
        assert_eq!(
            options.node_size_for(crate::core::NodeKind::Root),
            glam::Vec2::new(160.0, 80.0)
        );
        assert_eq!(
            options.node_size_for(crate::core::NodeKind::Item),
            glam::Vec2::new(120.0, 60.0)
        );
    }
}
