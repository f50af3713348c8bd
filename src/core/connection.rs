//! Abgeleitete Eltern→Kind-Verbindung (wird bei jedem Durchlauf neu berechnet).

use glam::Vec2;

/// Eine Verbindung zwischen einem Node und seinem Kind
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    /// Eltern-Node-ID
    pub from_id: u64,
    /// Kind-Node-ID
    pub to_id: u64,
    /// Mittelpunkt des Eltern-Nodes
    pub from_center: Vec2,
    /// Mittelpunkt des Kind-Nodes
    pub to_center: Vec2,
    /// Erster Kontrollpunkt der kubischen Bezier-Kurve
    pub control_1: Vec2,
    /// Zweiter Kontrollpunkt der kubischen Bezier-Kurve
    pub control_2: Vec2,
}

impl Connection {
    /// Erstellt eine neue Verbindung inklusive Kurvengeometrie
    pub fn new(from_id: u64, to_id: u64, from_center: Vec2, to_center: Vec2) -> Self {
        let (control_1, control_2) = Self::calculate_controls(from_center, to_center);

        Self {
            from_id,
            to_id,
            from_center,
            to_center,
            control_1,
            control_2,
        }
    }

    /// Kontrollpunkte bei 30 % / 70 % der horizontalen Distanz
    fn calculate_controls(from: Vec2, to: Vec2) -> (Vec2, Vec2) {
        let dx = to.x - from.x;
        (
            Vec2::new(from.x + dx * 0.3, from.y),
            Vec2::new(from.x + dx * 0.7, to.y),
        )
    }
}
