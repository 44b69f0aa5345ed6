//! Local UI chrome state: sidebar, refresh sequence, and toasts.
//!
//! DESIGN
//! ======
//! Cross-page signals are plain counters. A page that changes holdings bumps
//! `portfolio_refresh_seq`; Portfolio watches it and refetches.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// UI state shared by the chrome layout and pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub sidebar_open: bool,
    pub profile_menu_open: bool,
    pub portfolio_refresh_seq: u64,
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            profile_menu_open: false,
            portfolio_refresh_seq: 0,
            toasts: Vec::new(),
            next_toast_id: 1,
        }
    }
}

impl UiState {
    /// Queue a toast and return its id for later dismissal.
    pub fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast { id, kind, message: message.into() });
        id
    }

    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn bump_portfolio_refresh(&mut self) {
        self.portfolio_refresh_seq = self.portfolio_refresh_seq.wrapping_add(1);
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }
}
