//! Canvas-Input-Handling: Maus-Events → AppIntent.
//!
//! Positionen werden relativ zur oberen linken Canvas-Ecke gemeldet
//! (y wächst nach unten), also im Koordinatensystem der Mindmap.

use glam::Vec2;

use crate::app::AppIntent;

/// Maximaler Abstand zwischen zwei Klicks eines Doppelklicks in Pixel
const DOUBLE_CLICK_MAX_DISTANCE: f32 = 6.0;

/// Erkennt Doppelklicks bereits beim zweiten Drücken (nicht erst beim Loslassen).
#[derive(Debug, Clone, Default)]
pub struct DoubleClickDetector {
    last_press: Option<(f64, Vec2)>,
}

impl DoubleClickDetector {
    /// Registriert einen Klick und gibt zurück, ob er einen Doppelklick abschließt.
    ///
    /// Nach einem erkannten Doppelklick beginnt die Zählung neu, ein dritter
    /// schneller Klick ist also wieder ein Einfachklick.
    pub fn register(&mut self, time: f64, pos: Vec2, max_interval: f64) -> bool {
        let is_double = self.last_press.is_some_and(|(last_time, last_pos)| {
            time - last_time <= max_interval
                && last_pos.distance(pos) <= DOUBLE_CLICK_MAX_DISTANCE
        });

        self.last_press = if is_double { None } else { Some((time, pos)) };
        is_double
    }
}

/// Verwaltet den Input-Zustand des Canvas (Drag, Doppelklick, Viewport-Größe)
#[derive(Debug, Default)]
pub struct InputState {
    last_viewport_size: Option<[f32; 2]>,
    primary_down: bool,
    last_pointer_pos: Option<Vec2>,
    double_click: DoubleClickDetector,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// `response` muss zur Canvas-Fläche `rect` gehören; Klicks auf darüber
    /// liegende Fenster (Kontextmenü, Dialoge) werden dadurch ignoriert.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        rect: egui::Rect,
        double_click_secs: f64,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        let viewport_size = [rect.width(), rect.height()];
        if self.last_viewport_size != Some(viewport_size) {
            self.last_viewport_size = Some(viewport_size);
            events.push(AppIntent::ViewportResized {
                size: viewport_size,
            });
        }

        let (primary_pressed, primary_released, secondary_pressed, latest_pos, time) =
            ui.input(|i| {
                (
                    i.pointer.primary_pressed(),
                    i.pointer.primary_released(),
                    i.pointer.secondary_pressed(),
                    i.pointer.latest_pos(),
                    i.time,
                )
            });
        let pointer_on_canvas = response.contains_pointer();
        let canvas_pos = latest_pos.map(|p| to_canvas(p, rect));

        if primary_pressed && pointer_on_canvas {
            if let Some(pos) = canvas_pos {
                let double_click = self.double_click.register(time, pos, double_click_secs);
                self.primary_down = true;
                self.last_pointer_pos = Some(pos);
                events.push(AppIntent::PointerPressed { pos, double_click });
            }
        }

        if self.primary_down {
            if let Some(pos) = canvas_pos {
                if self.last_pointer_pos != Some(pos) {
                    self.last_pointer_pos = Some(pos);
                    events.push(AppIntent::PointerDragged { pos });
                }
            }
        }

        if primary_released && self.primary_down {
            self.primary_down = false;
            // Fällt der Zeiger aus dem Fenster, gilt die letzte bekannte Position
            if let Some(pos) = canvas_pos.or(self.last_pointer_pos) {
                events.push(AppIntent::PointerReleased { pos });
            }
        }

        if secondary_pressed && pointer_on_canvas {
            if let Some(pos) = canvas_pos {
                events.push(AppIntent::SecondaryPressed { pos });
            }
        }

        events
    }
}

/// Bildschirmposition → Canvas-Koordinaten
pub fn to_canvas(pos: egui::Pos2, rect: egui::Rect) -> Vec2 {
    Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y)
}

/// Canvas-Koordinaten → Bildschirmposition
pub fn to_screen(pos: Vec2, rect: egui::Rect) -> egui::Pos2 {
    egui::pos2(rect.min.x + pos.x, rect.min.y + pos.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_press_within_interval_is_double_click() {
        let mut detector = DoubleClickDetector::default();

        assert!(!detector.register(1.0, Vec2::new(10.0, 10.0), 0.35));
        assert!(detector.register(1.2, Vec2::new(12.0, 11.0), 0.35));
    }

    #[test]
    fn slow_or_distant_press_is_single_click() {
        let mut detector = DoubleClickDetector::default();

        assert!(!detector.register(1.0, Vec2::new(10.0, 10.0), 0.35));
        assert!(!detector.register(1.5, Vec2::new(10.0, 10.0), 0.35));
        assert!(!detector.register(1.6, Vec2::new(40.0, 10.0), 0.35));
    }

    #[test]
    fn third_quick_press_starts_over() {
        let mut detector = DoubleClickDetector::default();

        assert!(!detector.register(1.0, Vec2::ZERO, 0.35));
        assert!(detector.register(1.1, Vec2::ZERO, 0.35));
        assert!(!detector.register(1.2, Vec2::ZERO, 0.35));
    }

    #[test]
    fn canvas_conversion_is_relative_to_rect() {
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 24.0), egui::vec2(800.0, 600.0));

        let canvas = to_canvas(egui::pos2(100.0, 124.0), rect);
        assert_eq!(canvas, Vec2::new(100.0, 100.0));
        assert_eq!(to_screen(canvas, rect), egui::pos2(100.0, 124.0));
    }
}
