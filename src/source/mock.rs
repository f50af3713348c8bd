//! Simulierte Desktop-Quelle für die Demo-Binary und Tests.

use std::sync::{Mutex, MutexGuard};

use anyhow::anyhow;

use super::ItemSource;
use crate::core::{ExternalItem, Snapshot};

#[derive(Debug)]
struct MockDesktop {
    id: u32,
    name: String,
    window_count: u32,
}

#[derive(Debug)]
struct MockState {
    desktops: Vec<MockDesktop>,
    active_id: u32,
    next_id: u32,
    unavailable: bool,
}

/// Quelle mit vier simulierten Desktops, Desktop 1 aktiv
#[derive(Debug)]
pub struct MockItemSource {
    state: Mutex<MockState>,
}

impl Default for MockItemSource {
    fn default() -> Self {
        Self::new(4)
    }
}

impl MockItemSource {
    /// Erstellt eine Quelle mit `count` Desktops
    pub fn new(count: u32) -> Self {
        let desktops = (1..=count).map(Self::desktop).collect();
        Self {
            state: Mutex::new(MockState {
                desktops,
                active_id: 1,
                next_id: count + 1,
                unavailable: false,
            }),
        }
    }

    fn desktop(id: u32) -> MockDesktop {
        MockDesktop {
            id,
            name: format!("Desktop {}", id),
            window_count: (id * 3 + 1) % 7,
        }
    }

    fn lock(&self) -> anyhow::Result<MutexGuard<'_, MockState>> {
        self.state
            .lock()
            .map_err(|_| anyhow!("Mock-Quelle: Mutex vergiftet"))
    }

    /// Simuliert eine nicht erreichbare Quelle
    pub fn set_unavailable(&self, unavailable: bool) {
        if let Ok(mut state) = self.lock() {
            state.unavailable = unavailable;
        }
    }

    /// Externe ID des aktiven Desktops
    pub fn active_id(&self) -> Option<String> {
        self.lock().ok().map(|state| state.active_id.to_string())
    }
}

impl ItemSource for MockItemSource {
    fn fetch_snapshot(&self) -> anyhow::Result<Snapshot> {
        let state = self.lock()?;
        if state.unavailable {
            return Err(anyhow!("Desktop-Quelle nicht erreichbar"));
        }

        let items = state
            .desktops
            .iter()
            .map(|d| ExternalItem {
                external_id: d.id.to_string(),
                display_name: d.name.clone(),
                item_count: d.window_count,
                metadata: (1..=d.window_count)
                    .map(|w| format!("Fenster {}", w))
                    .collect(),
            })
            .collect();

        Ok(Snapshot::new(items, Some(state.active_id.to_string())))
    }

    fn request_activate(&self, external_id: &str) {
        let Ok(mut state) = self.lock() else {
            return;
        };
        match external_id.parse::<u32>() {
            Ok(id) if state.desktops.iter().any(|d| d.id == id) => {
                state.active_id = id;
                log::info!("Mock-Quelle: Desktop {} aktiviert", id);
            }
            _ => log::warn!("Mock-Quelle: unbekannter Desktop '{}'", external_id),
        }
    }

    fn request_create_item(&self) -> anyhow::Result<()> {
        let mut state = self.lock()?;
        if state.unavailable {
            return Err(anyhow!("Desktop-Quelle nicht erreichbar"));
        }
        let id = state.next_id;
        state.next_id += 1;
        state.desktops.push(Self::desktop(id));
        log::info!("Mock-Quelle: Desktop {} angelegt", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_four_desktops_first_active() {
        let source = MockItemSource::default();
        let snapshot = source.fetch_snapshot().expect("Snapshot");

        assert_eq!(snapshot.items.len(), 4);
        assert_eq!(snapshot.items[0].display_name, "Desktop 1");
        assert_eq!(snapshot.active_id.as_deref(), Some("1"));
        for item in &snapshot.items {
            assert_eq!(item.metadata.len() as u32, item.item_count);
        }
    }

    #[test]
    fn test_activate_and_create() {
        let source = MockItemSource::new(2);
        source.request_activate("2");
        source.request_activate("99");
        source.request_create_item().expect("Anlegen");

        let snapshot = source.fetch_snapshot().expect("Snapshot");
        assert_eq!(snapshot.active_id.as_deref(), Some("2"));
        assert_eq!(snapshot.items.len(), 3);
        assert_eq!(snapshot.items[2].external_id, "3");
    }

    #[test]
    fn test_unavailable_source_fails() {
        let source = MockItemSource::default();
        source.set_unavailable(true);
        assert!(source.fetch_snapshot().is_err());
        assert!(source.request_create_item().is_err());
    }
}
