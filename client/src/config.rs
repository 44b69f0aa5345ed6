//! Client-side constants for API routing and refresh cadence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle has no runtime configuration source, so the few knobs it
//! needs live here. The SSR host proxies `API_PREFIX` to the backend.

use std::time::Duration;

/// Path prefix every backend request is sent under.
pub const API_PREFIX: &str = "/api";

/// Dashboard live-data refresh interval.
pub const DASHBOARD_POLL: Duration = Duration::from_secs(10);

/// Portfolio holdings refresh interval.
pub const PORTFOLIO_POLL: Duration = Duration::from_secs(3);

/// Cadence of the dashboard sparkline re-jitter.
pub const DASHBOARD_TICK: Duration = Duration::from_secs(3);

/// How long a toast stays on screen.
pub const TOAST_LIFETIME: Duration = Duration::from_millis(3500);

/// Delay between a successful trade and the portfolio refresh signal.
pub const PORTFOLIO_REFRESH_DELAY: Duration = Duration::from_millis(500);

/// Number of market news items requested by the dashboard.
pub const DASHBOARD_NEWS_LIMIT: u32 = 5;

/// Number of holdings the dashboard requests signals for.
pub const DASHBOARD_SIGNAL_LIMIT: usize = 5;
