// src/constants.rs
//
// Application-wide defaults.

/// Store used when neither the config file nor `--base-url` names one.
///
/// Matches json-server's default port.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Per-request timeout for the store. A timed out request counts as a
/// store failure for that single action.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// chrono pattern for the creation stamp, e.g. `10/16/2026, 9:22:00 AM`.
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

pub const CONFIG_DIR_NAME: &str = "notepin";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Delay in milliseconds after opening the board in a browser before the
/// temporary file may be cleaned up.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;
