//! Handler für Viewport und Layout.

use crate::app::use_cases;
use crate::app::AppState;

/// Setzt die Viewport-Größe. Die erste bekannte Größe zentriert den Root.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) -> anyhow::Result<()> {
    let first = state.view.viewport_size.is_none();
    if state.view.viewport_size == Some(size) {
        return Ok(());
    }
    state.view.viewport_size = Some(size);

    if first {
        log::info!("Viewport {}x{}, Root wird zentriert", size[0], size[1]);
        use_cases::layout::reset_layout(state)?;
    } else {
        state.mark_dirty();
    }
    Ok(())
}

/// Setzt das Layout zurück.
pub fn reset_layout(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::layout::reset_layout(state)?;
    Ok(())
}

/// Signalisiert dem Host das Beenden.
pub fn request_exit(state: &mut AppState) {
    log::info!("Beenden angefordert");
    state.should_exit = true;
}
