//! Fixed-interval polling with auth-error suppression.
//!
//! SYSTEM CONTEXT
//! ==============
//! Dashboard and Portfolio refresh on a timer. Once the backend answers a
//! request with 401 there is no point in polling again until the user signs in
//! afresh, so each page owns a [`PollGate`] that the first unauthorized
//! response trips for the rest of that page instance.
//!
//! DESIGN
//! ======
//! The gate is an `Arc<AtomicBool>` so the poll task and event handlers can
//! share it without a signal. The loop itself is the same sleep/alive-flag
//! pattern the pages use for any background refresh: a second flag flips on
//! `on_cleanup` so an unmounted page stops after its next sleep.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::net::error::ApiError;

/// Shared open/closed flag that silences polling after a 401.
#[derive(Clone, Debug)]
pub struct PollGate {
    open: Arc<AtomicBool>,
}

impl Default for PollGate {
    fn default() -> Self {
        Self::new()
    }
}

impl PollGate {
    pub fn new() -> Self {
        Self { open: Arc::new(AtomicBool::new(true)) }
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Relaxed)
    }

    /// Close the gate. It never reopens.
    pub fn trip(&self) {
        self.open.store(false, Ordering::Relaxed);
    }

    /// Whether a fetch should go out right now.
    pub fn should_fetch(&self, user_present: bool) -> bool {
        user_present && self.is_open()
    }

    /// Inspect a request result and trip on `Unauthorized`.
    ///
    /// Returns `true` when this call tripped the gate.
    pub fn note<T>(&self, result: &Result<T, ApiError>) -> bool {
        match result {
            Err(err) if err.is_unauthorized() => {
                let was_open = self.open.swap(false, Ordering::Relaxed);
                if was_open {
                    log_suspended();
                }
                was_open
            }
            _ => false,
        }
    }
}

fn log_suspended() {
    #[cfg(feature = "hydrate")]
    log::warn!("unauthorized response; polling suspended");
}

/// Run `tick` now and then every `interval` until the gate trips or the
/// owning reactive scope is cleaned up.
#[cfg(feature = "hydrate")]
pub fn spawn_poll<F, Fut>(interval: std::time::Duration, gate: PollGate, tick: F)
where
    F: Fn() -> Fut + 'static,
    Fut: std::future::Future<Output = ()> + 'static,
{
    use leptos::prelude::on_cleanup;

    let alive = Arc::new(AtomicBool::new(true));
    let alive_task = alive.clone();
    leptos::task::spawn_local(async move {
        loop {
            if !alive_task.load(Ordering::Relaxed) || !gate.is_open() {
                break;
            }
            tick().await;
            gloo_timers::future::sleep(interval).await;
        }
    });
    on_cleanup(move || alive.store(false, Ordering::Relaxed));
}
