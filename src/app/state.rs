// DeviceDiag - app/state.rs
//
// Application state management. Holds the displayed report, the status
// line, and one-shot UI requests raised by menu commands.
// Owned by the eframe::App implementation.

use chrono::{DateTime, Local};

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// The report currently shown in the text area. Replaced wholesale on
    /// every refresh, never edited in place.
    pub report: String,

    /// Status message for the status bar.
    pub status_message: String,

    /// Whether `status_message` describes a failure.
    pub status_is_error: bool,

    /// Non-fatal warnings (config problems) shown under the status bar.
    pub warnings: Vec<String>,

    /// When the displayed report was generated.
    pub last_refresh: Option<DateTime<Local>>,

    /// Device counts behind the displayed report.
    pub monitor_count: usize,
    pub joystick_count: usize,

    /// File name pre-filled in the Save As dialog.
    pub default_file_name: String,

    /// Monospace font size of the report text area.
    pub font_size: f32,

    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,

    /// Set by Edit → Select All; consumed by the report panel on the next
    /// frame, where the text area's id is known.
    pub request_select_all: bool,

    /// Whether to show the About window.
    pub show_about: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state around the first generated report.
    pub fn new(report: String, default_file_name: String, debug_mode: bool) -> Self {
        Self {
            report,
            status_message: "Ready.".to_string(),
            status_is_error: false,
            warnings: Vec::new(),
            last_refresh: None,
            monitor_count: 0,
            joystick_count: 0,
            default_file_name,
            font_size: crate::util::constants::DEFAULT_FONT_SIZE,
            dark_mode: true,
            request_select_all: false,
            show_about: false,
            debug_mode,
        }
    }

    /// Replace the displayed report with a freshly generated one.
    pub fn load_report(&mut self, report: String, monitors: usize, joysticks: usize) {
        let now = Local::now();
        self.report = report;
        self.monitor_count = monitors;
        self.joystick_count = joysticks;
        self.last_refresh = Some(now);
        self.set_status(format!(
            "Refreshed at {}: {monitors} monitor(s), {joysticks} joystick(s).",
            now.format("%H:%M:%S")
        ));
    }

    /// Show an informational status line.
    pub fn set_status(&mut self, message: String) {
        self.status_message = message;
        self.status_is_error = false;
    }

    /// Show a failure in the status line.
    pub fn set_error_status(&mut self, message: String) {
        self.status_message = message;
        self.status_is_error = true;
    }

    /// Text that Edit → Copy puts on the clipboard.
    ///
    /// `selection` is the text area's cursor range as character indices, in
    /// either order. An empty or absent selection copies the whole report.
    pub fn copy_text(&self, selection: Option<(usize, usize)>) -> &str {
        match selection {
            Some((a, b)) if a != b => char_range_slice(&self.report, a, b),
            _ => &self.report,
        }
    }
}

/// Slice `text` between two character indices given in either order.
///
/// Indices past the end clamp to the end of the text.
pub fn char_range_slice(text: &str, a: usize, b: usize) -> &str {
    let (start, end) = if a <= b { (a, b) } else { (b, a) };
    let byte_at = |char_index: usize| {
        text.char_indices()
            .nth(char_index)
            .map_or(text.len(), |(i, _)| i)
    };
    &text[byte_at(start)..byte_at(end)]
}
