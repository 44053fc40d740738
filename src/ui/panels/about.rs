// DeviceDiag - ui/panels/about.rs
//
// About dialog: shown from Help → About.
// Rendered as a centred, non-resizable, non-collapsible window.

use crate::app::state::AppState;
use crate::util::constants::{APP_NAME, APP_VERSION, JOYSTICK_BACKEND, MONITOR_BACKEND};

/// Render the About dialog (if `state.show_about` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_about {
        return;
    }

    let mut open = true;
    egui::Window::new(format!("About {APP_NAME}"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(crate::ui::theme::ABOUT_MIN_WIDTH)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(APP_NAME).size(24.0).strong());
                ui.add_space(4.0);
                ui.label(egui::RichText::new(format!("v{APP_VERSION}")).size(14.0).weak());
            });

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(6.0);

            ui.vertical_centered(|ui| {
                ui.label("Reports connected monitors and joysticks.");
            });

            ui.add_space(6.0);
            egui::Grid::new("about_backends")
                .num_columns(2)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Monitors:");
                    ui.monospace(MONITOR_BACKEND);
                    ui.end_row();

                    ui.label("Joysticks:");
                    ui.monospace(JOYSTICK_BACKEND);
                    ui.end_row();

                    ui.label("Last refresh:");
                    match state.last_refresh {
                        Some(t) => ui.label(t.format("%Y-%m-%d %H:%M:%S").to_string()),
                        None => ui.label("never"),
                    };
                    ui.end_row();

                    ui.label("Debug logging:");
                    ui.label(if state.debug_mode { "on" } else { "off" });
                    ui.end_row();
                });

            ui.add_space(8.0);
            ui.separator();
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("Built with Rust & egui").small().weak());
            });
            ui.add_space(4.0);
        });

    if !open {
        state.show_about = false;
    }
}
