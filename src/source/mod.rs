//! Anbindung der externen Item-Quelle (z.B. virtuelle Desktops des Betriebssystems).
//!
//! Die Quelle wird per Konstruktor injiziert; der Controller kennt nur
//! das schmale [`ItemSource`]-Interface.

mod feed;
mod mock;

pub use feed::RefreshFeed;
pub use mock::MockItemSource;

use crate::core::Snapshot;

/// Schmales Interface zur externen Item-Verwaltung
pub trait ItemSource: Send + Sync {
    /// Liefert einen vollständigen Snapshot aller Items
    fn fetch_snapshot(&self) -> anyhow::Result<Snapshot>;

    /// Fordert den Wechsel zum Item an (fire-and-forget)
    fn request_activate(&self, external_id: &str);

    /// Fordert ein neues Item an (z.B. neuen Desktop)
    fn request_create_item(&self) -> anyhow::Result<()>;
}
