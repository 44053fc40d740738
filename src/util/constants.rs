// DeviceDiag - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "DeviceDiag";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "DeviceDiag";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Report
// =============================================================================

/// File name pre-filled in the Save As dialog.
pub const DEFAULT_REPORT_FILE_NAME: &str = "DeviceDiag.txt";

/// Extension of saved reports. Added to a chosen file name that has none.
pub const REPORT_FILE_EXTENSION: &str = "txt";

/// Maximum length of a configured default file name.
pub const MAX_REPORT_FILE_NAME_LEN: usize = 255;

/// Width of the rule drawn under each report section heading.
pub const REPORT_RULE_WIDTH: usize = 48;

/// Column at which report field values start (label + padding).
pub const REPORT_LABEL_WIDTH: usize = 16;

/// Placeholder for a device that reports an empty name.
pub const UNNAMED_DEVICE: &str = "[no name]";

/// Millimetres per inch, for the pixel density line.
pub const MM_PER_INCH: f64 = 25.4;

// =============================================================================
// Probe backends
// =============================================================================

/// Name reported for the monitor enumeration backend.
pub const MONITOR_BACKEND: &str = "display-info";

/// Name reported for the joystick enumeration backend.
pub const JOYSTICK_BACKEND: &str = "gilrs";

/// Upper bound on backend events drained per joystick refresh.
///
/// A device that floods axis events would otherwise keep the drain loop
/// spinning on the UI thread.
pub const MAX_GAMEPAD_EVENTS_PER_REFRESH: usize = 10_000;

// =============================================================================
// UI defaults
// =============================================================================

/// Initial window inner size in points.
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [720.0, 560.0];

/// Minimum window inner size in points.
pub const MIN_WINDOW_SIZE: [f32; 2] = [360.0, 240.0];

/// Default monospace font size for the report text area (points).
pub const DEFAULT_FONT_SIZE: f32 = 13.0;

/// Minimum user-configurable font size (points).
pub const MIN_FONT_SIZE: f32 = 9.0;

/// Maximum user-configurable font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Edge length of the generated window icon in pixels.
pub const ICON_SIZE: u32 = 64;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in config.toml.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Process exit status for any fatal error.
pub const EXIT_FAILURE: i32 = 1;
