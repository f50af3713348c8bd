//! Application Controller für zentrale Event-Verarbeitung.

use std::sync::Arc;

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::{RenderAdapter, RenderScene};
use crate::source::{ItemSource, MockItemSource};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
///
/// Die externe Item-Quelle wird per Konstruktor injiziert.
pub struct AppController {
    source: Arc<dyn ItemSource>,
    presented_revision: Option<u64>,
}

impl Default for AppController {
    fn default() -> Self {
        Self::new(Arc::new(MockItemSource::default()))
    }
}

impl AppController {
    /// Erstellt einen neuen Controller mit der gegebenen Item-Quelle.
    pub fn new(source: Arc<dyn ItemSource>) -> Self {
        Self {
            source,
            presented_revision: None,
        }
    }

    /// Die injizierte Item-Quelle (z.B. für den Refresh-Feed).
    pub fn source(&self) -> Arc<dyn ItemSource> {
        Arc::clone(&self.source)
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Zeiger: Selektion, Drag & Drop ===
            AppCommand::SelectNode { node_id } => handlers::pointer::select_node(state, node_id)?,
            AppCommand::ClearSelection => handlers::pointer::clear_selection(state),
            AppCommand::BeginDrag {
                node_id,
                pointer_pos,
            } => handlers::pointer::begin_drag(state, node_id, pointer_pos)?,
            AppCommand::DragTo { pointer_pos } => handlers::pointer::drag_to(state, pointer_pos)?,
            AppCommand::EndDrag => handlers::pointer::end_drag(state)?,
            AppCommand::ReparentNode {
                node_id,
                new_parent_id,
            } => handlers::pointer::reparent(state, node_id, new_parent_id)?,

            // === Editing ===
            AppCommand::ActivateNode { node_id } => {
                handlers::editing::activate(state, self.source.as_ref(), node_id)?
            }
            AppCommand::RenameNode { node_id, title } => {
                handlers::editing::rename(state, node_id, &title)?
            }
            AppCommand::DeleteNode { node_id } => handlers::editing::delete(state, node_id)?,
            AppCommand::AddChildNode { parent_id } => {
                handlers::editing::add_child(state, parent_id)?
            }
            AppCommand::AddCategory => handlers::editing::add_category(state)?,
            AppCommand::CreateItem => {
                handlers::editing::create_item(state, self.source.as_ref())?
            }

            // === Dialoge ===
            AppCommand::OpenContextMenu { target, pos } => {
                handlers::dialog::open_context_menu(state, target, pos)
            }
            AppCommand::CloseContextMenu => handlers::dialog::close_context_menu(state),
            AppCommand::OpenRenameDialog { node_id } => {
                handlers::dialog::open_rename_dialog(state, node_id)?
            }
            AppCommand::CloseRenameDialog => handlers::dialog::close_rename_dialog(state),

            // === Refresh ===
            AppCommand::RefreshFromSource => {
                handlers::refresh::refresh_from_source(state, self.source.as_ref())?
            }
            AppCommand::ApplySnapshot { snapshot } => handlers::refresh::apply(state, &snapshot)?,
            AppCommand::ReportRefreshFailure { reason } => {
                handlers::refresh::report_failure(state, &reason)
            }

            // === View ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size)?,
            AppCommand::ResetLayout => handlers::view::reset_layout(state)?,
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, *options)?
            }
            AppCommand::RequestExit => handlers::view::request_exit(state),
        }

        Ok(())
    }

    /// Baut die RenderScene aus dem aktuellen State.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }

    /// Übergibt die Szene an den Render-Adapter, falls sich das Modell seit
    /// der letzten Übergabe geändert hat. Gibt `true` zurück, wenn übergeben wurde.
    pub fn notify_render(&mut self, state: &AppState, adapter: &mut dyn RenderAdapter) -> bool {
        if self.presented_revision == Some(state.render_revision) {
            return false;
        }
        let scene = self.build_render_scene(state);
        adapter.present(&scene);
        self.presented_revision = Some(state.render_revision);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingAdapter {
        presented: usize,
        last_node_count: usize,
    }

    impl RenderAdapter for CountingAdapter {
        fn present(&mut self, scene: &RenderScene) {
            self.presented += 1;
            self.last_node_count = scene.nodes.len();
        }
    }

    #[test]
    fn notify_render_only_on_new_revision() {
        let mut controller = AppController::default();
        let mut state = AppState::new();
        let mut adapter = CountingAdapter::default();

        assert!(controller.notify_render(&state, &mut adapter));
        assert!(!controller.notify_render(&state, &mut adapter));

        controller
            .handle_intent(&mut state, AppIntent::RefreshRequested)
            .expect("Refresh");
        assert!(controller.notify_render(&state, &mut adapter));

        assert_eq!(adapter.presented, 2);
        assert_eq!(adapter.last_node_count, 5);
    }
}
