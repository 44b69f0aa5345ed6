//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, timers, clock) and the
//! pure display arithmetic from page and component logic so both stay
//! testable without a browser.

pub mod clock;
pub mod format;
pub mod markdown;
pub mod poll;
pub mod rings;
pub mod storage;
