// DeviceDiag - ui/theme.rs
//
// Colour scheme and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Apply the configured light/dark visuals.
pub fn apply(ctx: &egui::Context, dark_mode: bool) {
    let visuals = if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    ctx.set_visuals(visuals);
}

/// Config warnings in the status area.
pub const WARNING_TEXT: Color32 = Color32::from_rgb(217, 119, 6); // Amber 600

/// Status line after a failed save.
pub const ERROR_TEXT: Color32 = Color32::from_rgb(248, 113, 113); // Red 400

/// Window icon colours.
pub const ICON_FRAME: Color32 = Color32::from_rgb(31, 41, 55); // Gray 800
pub const ICON_SCREEN: Color32 = Color32::from_rgb(59, 130, 246); // Blue 500

/// Layout constants.
pub const ABOUT_MIN_WIDTH: f32 = 320.0;
pub const STATUS_SPACING: f32 = 8.0;
