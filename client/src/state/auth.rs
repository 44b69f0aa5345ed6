//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` context by `App`. The navbar reads the
//! profile for its avatar and dropdown; Dashboard and Portfolio only poll
//! while a user is present.
//!
//! DESIGN
//! ======
//! Storage writes go through `util::storage` so the signal and the persisted
//! keys change together.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserProfile;
use crate::util::storage;

const DEFAULT_INITIAL: char = 'T';
const DEFAULT_NAME: &str = "Trader";
const DEFAULT_EMAIL: &str = "trader@example.com";

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// State rebuilt from the persisted `user` record.
    pub fn restored() -> Self {
        Self { user: storage::load_user(), loading: false }
    }

    /// Persist `user` and `token` and mark the user signed in.
    pub fn start_session(&mut self, user: UserProfile, token: &str) {
        storage::save_user(&user);
        if !token.is_empty() {
            storage::save_token(token);
        }
        self.user = Some(user);
        self.loading = false;
    }

    /// Clear both persisted keys and the in-memory user.
    pub fn end_session(&mut self) {
        storage::clear_session();
        self.user = None;
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Uppercased first letter of the user's name for the avatar.
pub fn profile_initial(user: Option<&UserProfile>) -> char {
    user.and_then(|u| u.name.chars().next())
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or(DEFAULT_INITIAL)
}

pub fn display_name(user: Option<&UserProfile>) -> String {
    user.map(|u| u.name.as_str())
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_NAME)
        .to_owned()
}

pub fn display_email(user: Option<&UserProfile>) -> String {
    user.map(|u| u.email.as_str())
        .filter(|e| !e.is_empty())
        .unwrap_or(DEFAULT_EMAIL)
        .to_owned()
}
