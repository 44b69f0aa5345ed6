//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, polling, modals) and
//! delegates shared widgets to `components` and arithmetic to `state`.

pub mod advisor;
pub mod alerts;
pub mod dashboard;
pub mod education;
pub mod login;
pub mod portfolio;
pub mod prediction;
pub mod register;
