//! Use-Cases der Application-Layer-Orchestrierung.
//!
//! Aufgeteilt nach Operation:
//! - `drag`: Drag-Lebenszyklus (Start, Bewegen, Loslassen + Einrasten)
//! - `reparent`: Node samt Teilbaum umhängen
//! - `editing`: Anlegen, Umbenennen, Löschen
//! - `layout`: Voll-Layout und Layout-Reset
//! - `refresh_merge`: Snapshot der externen Quelle einarbeiten
//! - `activate`: Wechsel zum externen Item anfordern

pub mod activate;
pub mod drag;
pub mod editing;
pub mod layout;
pub mod refresh_merge;
pub mod reparent;
