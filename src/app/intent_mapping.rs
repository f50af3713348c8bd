//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hit-Tests laufen hier, damit die Commands bereits konkrete Node-IDs tragen.

use super::context_menu::ContextCommand;
use super::{AppCommand, AppIntent, AppState, InteractionState};
use crate::core::NodeKind;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { pos, double_click } => {
            let Some(node_id) = state.map.node_at(pos) else {
                return vec![AppCommand::ClearSelection];
            };
            let is_item = state
                .map
                .node(node_id)
                .is_some_and(|n| n.kind == NodeKind::Item);

            if double_click && is_item {
                vec![
                    AppCommand::SelectNode { node_id },
                    AppCommand::ActivateNode { node_id },
                    AppCommand::RefreshFromSource,
                ]
            } else {
                vec![
                    AppCommand::SelectNode { node_id },
                    AppCommand::BeginDrag {
                        node_id,
                        pointer_pos: pos,
                    },
                ]
            }
        }
        AppIntent::PointerDragged { pos } => {
            if state.interaction.is_dragging() {
                vec![AppCommand::DragTo { pointer_pos: pos }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased { pos } => {
            let InteractionState::Dragging { node_id, .. } = state.interaction else {
                return vec![];
            };
            let mut commands = vec![
                AppCommand::DragTo { pointer_pos: pos },
                AppCommand::EndDrag,
            ];

            // Der Root hat kein Drop-Ziel
            if state.map.is_root(node_id) {
                return commands;
            }

            // Drop auf anderen Node: nur Kategorien und Root nehmen Kinder an,
            // eigene Nachfahren scheiden aus
            let drop_target = state
                .map
                .node_at_excluding(pos, node_id)
                .and_then(|id| state.map.node(id))
                .filter(|target| target.kind.accepts_children_on_drop())
                .filter(|target| !state.map.is_ancestor(node_id, target.id));
            if let Some(target) = drop_target {
                commands.push(AppCommand::ReparentNode {
                    node_id,
                    new_parent_id: target.id,
                });
            }
            commands
        }
        AppIntent::SecondaryPressed { pos } => vec![AppCommand::OpenContextMenu {
            target: state.map.node_at(pos),
            pos,
        }],
        AppIntent::ContextMenuDismissed => vec![AppCommand::CloseContextMenu],
        AppIntent::ContextCommandChosen { command } => {
            let allowed = state
                .ui
                .context_menu
                .as_ref()
                .is_none_or(|menu| menu.catalog.allows(command));

            let mut commands = vec![AppCommand::CloseContextMenu];
            if !allowed {
                log::warn!("Deaktivierter Menübefehl ignoriert: {:?}", command);
                return commands;
            }
            commands.extend(map_context_command(command));
            commands
        }
        AppIntent::RenameConfirmed { node_id, title } => vec![
            AppCommand::CloseRenameDialog,
            AppCommand::RenameNode { node_id, title },
        ],
        AppIntent::RenameCancelled => vec![AppCommand::CloseRenameDialog],
        AppIntent::RefreshRequested => vec![AppCommand::RefreshFromSource],
        AppIntent::SnapshotReceived { snapshot } => vec![AppCommand::ApplySnapshot { snapshot }],
        AppIntent::RefreshFailed { reason } => vec![AppCommand::ReportRefreshFailure { reason }],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::ResetLayoutRequested => vec![AppCommand::ResetLayout],
        AppIntent::SnapToGridToggled { enabled } => {
            let mut options = state.options.clone();
            options.snap_to_grid = enabled;
            vec![AppCommand::ApplyOptions {
                options: Box::new(options),
            }]
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

fn map_context_command(command: ContextCommand) -> Vec<AppCommand> {
    match command {
        ContextCommand::Activate { node_id } => vec![
            AppCommand::ActivateNode { node_id },
            AppCommand::RefreshFromSource,
        ],
        ContextCommand::Rename { node_id } => vec![AppCommand::OpenRenameDialog { node_id }],
        ContextCommand::Delete { node_id } => vec![AppCommand::DeleteNode { node_id }],
        ContextCommand::AddChild { node_id } => {
            vec![AppCommand::AddChildNode { parent_id: node_id }]
        }
        ContextCommand::CreateItem => vec![AppCommand::CreateItem, AppCommand::RefreshFromSource],
        ContextCommand::AddCategory => vec![AppCommand::AddCategory],
        ContextCommand::ResetLayout => vec![AppCommand::ResetLayout],
    }
}
