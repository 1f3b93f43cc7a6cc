//! # UI Module
//!
//! View-state controller (`app_state`), its state machines (`state`), the
//! egui update loop (`app_coordinator`) and the renderers (`components`).

pub mod app_coordinator;
pub mod app_state;
pub mod components;
pub mod state;

pub use app_state::AgendaApp;
pub use components::*;
