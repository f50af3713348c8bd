//! Handler für das Einarbeiten externer Snapshots.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Snapshot;
use crate::source::ItemSource;

/// Holt synchron einen Snapshot von der Quelle und arbeitet ihn ein.
///
/// Ist die Quelle nicht erreichbar, bleibt der Baum unverändert.
pub fn refresh_from_source(state: &mut AppState, source: &dyn ItemSource) -> anyhow::Result<()> {
    match source.fetch_snapshot() {
        Ok(snapshot) => apply(state, &snapshot),
        Err(e) => {
            report_failure(state, &format!("{:#}", e));
            Ok(())
        }
    }
}

/// Arbeitet einen gelieferten Snapshot ein.
pub fn apply(state: &mut AppState, snapshot: &Snapshot) -> anyhow::Result<()> {
    use_cases::refresh_merge::apply_snapshot(state, snapshot)?;
    state.ui.status_message = None;
    Ok(())
}

/// Meldet einen fehlgeschlagenen Refresh; der Baum bleibt unverändert.
pub fn report_failure(state: &mut AppState, reason: &str) {
    log::warn!("Refresh fehlgeschlagen, Baum bleibt unverändert: {}", reason);
    state.ui.status_message = Some(format!("Refresh fehlgeschlagen: {}", reason));
}
