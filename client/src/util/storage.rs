//! Browser localStorage helpers for the persisted session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is exactly two keys: the bearer token and the JSON user
//! profile. Both are written at login and removed at logout. These helpers
//! centralize the hydrate-only `web-sys` glue so pages never touch storage
//! directly.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::types::UserProfile;

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Storage key of the JSON user profile.
pub const USER_KEY: &str = "user";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load a raw string from `localStorage` for `key`.
pub fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a raw string to `localStorage` for `key`.
pub fn save_string(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key` from `localStorage`.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = load_string(key)?;
    decode_json(&raw)
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    if let Some(raw) = encode_json(value) {
        save_string(key, &raw);
    }
}

fn decode_json<T: DeserializeOwned>(raw: &str) -> Option<T> {
    serde_json::from_str(raw).ok()
}

fn encode_json<T: Serialize>(value: &T) -> Option<String> {
    serde_json::to_string(value).ok()
}

/// Stored bearer token, ignoring empty values.
pub fn load_token() -> Option<String> {
    load_string(TOKEN_KEY).filter(|t| !t.is_empty())
}

pub fn save_token(token: &str) {
    save_string(TOKEN_KEY, token);
}

pub fn clear_token() {
    remove(TOKEN_KEY);
}

/// Stored user profile; a corrupt record reads as signed out.
pub fn load_user() -> Option<UserProfile> {
    load_json(USER_KEY)
}

pub fn save_user(user: &UserProfile) {
    save_json(USER_KEY, user);
}

pub fn clear_user() {
    remove(USER_KEY);
}

/// Remove both session keys.
pub fn clear_session() {
    clear_user();
    clear_token();
}
