//! UI-Komponenten: Menü, Status-Bar, Canvas, Kontextmenü, Dialoge.

pub mod canvas;
mod context_menu;
pub mod dialogs;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Menüs, Panels, Dialogs).
/// Zeiger-Eingaben werden in `input` gesammelt, das Zeichnen übernimmt
/// der `CanvasPainter` als Render-Adapter.
pub mod input;
pub mod menu;
pub mod status;

pub use canvas::CanvasPainter;
pub use context_menu::show_context_menu;
pub use dialogs::show_rename_dialog;
pub use input::InputState;
pub use menu::render_menu;
pub use status::render_status_bar;
