//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the app chrome, gauges, and dialogs. Chrome reads shared
//! state from Leptos context; gauges and dialogs take plain props and
//! callbacks so pages own the data flow.

pub mod alert_banner;
pub mod alert_modal;
pub mod chat_widget;
pub mod confidence_meter;
pub mod layout;
pub mod navbar;
pub mod risk_meter;
pub mod score_breakdown;
pub mod sidebar;
pub mod sparkline;
pub mod toaster;
