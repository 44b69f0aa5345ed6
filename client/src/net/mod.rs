//! Networking modules for the TradeVision REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `error` classifies failures for the pages, and
//! `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
