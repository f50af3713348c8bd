//! Fehlertypen des Node-Modells.

use thiserror::Error;

/// Fehler bei Mutationen oder Abfragen auf der [`MindMap`](super::MindMap).
///
/// Alle Varianten sind lokal und behebbar: die Operation wurde abgelehnt,
/// der Baum ist unverändert.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MindMapError {
    /// Umhängen würde einen Zyklus erzeugen (Node wäre sein eigener Vorfahre)
    #[error("Zyklus: Node {node_id} kann nicht unter {parent_id} gehängt werden")]
    Cycle { node_id: u64, parent_id: u64 },

    /// Referenzierte Node-ID existiert nicht in der Sammlung
    #[error("Node {0} nicht gefunden")]
    NotFound(u64),

    /// Verstoß gegen eine Baum-Invariante (z.B. Root löschen oder umhängen)
    #[error("Invariante verletzt: {0}")]
    InvariantViolation(String),
}

/// Ergebnis-Alias für Operationen des Node-Modells.
pub type MindMapResult<T> = Result<T, MindMapError>;
