//! Canvas-Renderer: zeichnet die zuletzt übergebene RenderScene mit dem egui-Painter.
//!
//! Der Painter ist der einzige [`RenderAdapter`] der Desktop-Anwendung.
//! Er hält eine Kopie der Szene und zeichnet sie in jedem Frame neu,
//! das Modell selbst bekommt er nie zu sehen.

use super::input::to_screen;
use crate::shared::{RenderAdapter, RenderNode, RenderScene};

const TITLE_FONT_SIZE: f32 = 15.0;
const SUBTITLE_FONT_SIZE: f32 = 11.0;
const GRID_LINE_COLOR: egui::Color32 = egui::Color32::from_gray(40);
const BACKGROUND_COLOR: egui::Color32 = egui::Color32::from_gray(24);

/// Zeichnet Hintergrundraster, Verbindungen und Nodes.
#[derive(Debug, Default)]
pub struct CanvasPainter {
    scene: Option<RenderScene>,
}

impl RenderAdapter for CanvasPainter {
    fn present(&mut self, scene: &RenderScene) {
        log::debug!(
            "Neue Szene (Revision {}): {} Nodes, {} Verbindungen",
            scene.revision,
            scene.nodes.len(),
            scene.connections.len()
        );
        self.scene = Some(scene.clone());
    }
}

impl CanvasPainter {
    /// Erstellt einen Painter ohne Szene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Die zuletzt übergebene Szene
    pub fn scene(&self) -> Option<&RenderScene> {
        self.scene.as_ref()
    }

    /// Zeichnet die aktuelle Szene in `rect`.
    pub fn paint(&self, painter: &egui::Painter, rect: egui::Rect) {
        painter.rect_filled(rect, 0.0, BACKGROUND_COLOR);

        let Some(scene) = &self.scene else {
            return;
        };

        draw_grid(painter, rect, scene.background_grid_spacing);

        let connection_stroke =
            egui::Stroke::new(scene.connection_width, to_color32(scene.connection_color));
        for connection in &scene.connections {
            let points = connection.points.map(|p| to_screen(p, rect));
            painter.add(egui::epaint::CubicBezierShape::from_points_stroke(
                points,
                false,
                egui::Color32::TRANSPARENT,
                connection_stroke,
            ));
        }

        for node in &scene.nodes {
            draw_node(painter, rect, node, scene.selected_scale);
        }
    }
}

fn draw_grid(painter: &egui::Painter, rect: egui::Rect, spacing: f32) {
    if spacing <= 0.0 {
        return;
    }
    let stroke = egui::Stroke::new(1.0, GRID_LINE_COLOR);

    let mut x = rect.min.x + spacing;
    while x < rect.max.x {
        painter.line_segment([egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)], stroke);
        x += spacing;
    }
    let mut y = rect.min.y + spacing;
    while y < rect.max.y {
        painter.line_segment([egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)], stroke);
        y += spacing;
    }
}

fn draw_node(
    painter: &egui::Painter,
    canvas: egui::Rect,
    node: &RenderNode,
    selected_scale: f32,
) {
    // Muss zu `MindMapNode::visible_frame` passen, sonst verfehlt der Hit-Test den Rand
    let size = if node.selected {
        node.size * selected_scale
    } else {
        node.size
    };
    let center = to_screen(node.center(), canvas);
    let node_rect = egui::Rect::from_center_size(center, egui::vec2(size.x, size.y));

    let style = &node.style;
    painter.rect(
        node_rect,
        style.corner_radius,
        to_color32(style.fill_color),
        egui::Stroke::new(style.border_width, to_color32(style.border_color)),
        egui::StrokeKind::Inside,
    );

    match &node.subtitle {
        Some(subtitle) => {
            let offset = egui::vec2(0.0, size.y * 0.18);
            painter.text(
                center - offset,
                egui::Align2::CENTER_CENTER,
                &node.title,
                egui::FontId::proportional(TITLE_FONT_SIZE),
                egui::Color32::WHITE,
            );
            painter.text(
                center + offset,
                egui::Align2::CENTER_CENTER,
                subtitle,
                egui::FontId::proportional(SUBTITLE_FONT_SIZE),
                egui::Color32::from_white_alpha(200),
            );
        }
        None => {
            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                &node.title,
                egui::FontId::proportional(TITLE_FONT_SIZE),
                egui::Color32::WHITE,
            );
        }
    }
}

/// RGBA (0..1) → egui-Farbe
pub fn to_color32(rgba: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_keeps_latest_scene() {
        let mut painter = CanvasPainter::new();
        assert!(painter.scene().is_none());

        painter.present(&RenderScene {
            revision: 3,
            ..Default::default()
        });
        painter.present(&RenderScene {
            revision: 7,
            ..Default::default()
        });

        assert_eq!(painter.scene().map(|s| s.revision), Some(7));
    }

    #[test]
    fn color_conversion_clamps_channels() {
        assert_eq!(to_color32([1.0, 0.0, 0.0, 1.0]), egui::Color32::RED);
        assert_eq!(
            to_color32([2.0, -1.0, 1.0, 1.0]),
            egui::Color32::from_rgb(255, 0, 255)
        );
    }
}
