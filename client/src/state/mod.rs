//! Shared client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides `AuthState`, `UiState`, and `ChatState` as `RwSignal`
//! contexts. The remaining modules are per-page models: plain data plus the
//! display arithmetic the pages render.

pub mod alerts;
pub mod auth;
pub mod chat;
pub mod dashboard;
pub mod market;
pub mod portfolio;
pub mod prediction;
pub mod ui;
