//! Core-Domänentypen: Nodes, MindMap-Baum, abgeleitete Verbindungen, Snapshots.

pub mod connection;
pub mod error;
pub mod mind_map;
/// Core-Datenmodelle der Mindmap
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - MindMap: Arena aller Nodes mit genau einem Root
/// - MindMapNode: Einzelner Knoten mit Position, Größe und Stil
/// - Connection: Abgeleitete Eltern→Kind-Kurve
pub mod node;
pub mod snapshot;

pub use connection::Connection;
pub use error::{MindMapError, MindMapResult};
pub use mind_map::MindMap;
pub use node::{ItemRef, MindMapNode, NodeBounds, NodeKind, NodeStyle};
pub use snapshot::{ExternalItem, Snapshot};
