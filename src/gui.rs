// DeviceDiag - gui.rs
//
// Top-level eframe::App implementation.
// Owns the report generator and the UI state, and turns menu commands into
// generator calls or file/clipboard output. Everything runs on the UI
// thread inside `update`.

use crate::app::generator::ReportGenerator;
use crate::app::state::AppState;
use crate::core::probe::DeviceProbe;
use crate::platform;
use crate::ui;
use crate::util::constants;
use crate::util::error::{exit_fatal, DiagError};

const SAVE_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
const REFRESH_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::NONE, egui::Key::F5);

/// User commands from the menu bar and keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuCommand {
    SaveAs,
    Copy,
    SelectAll,
    Refresh,
    About,
    Exit,
}

/// The DeviceDiag application.
pub struct DeviceDiagApp {
    /// `None` only after `on_exit` has shut it down.
    generator: Option<ReportGenerator<Box<dyn DeviceProbe>>>,
    pub state: AppState,
}

impl DeviceDiagApp {
    /// Create the application around an initialised generator whose first
    /// report is already in `state`.
    pub fn new(generator: ReportGenerator<Box<dyn DeviceProbe>>, state: AppState) -> Self {
        Self {
            generator: Some(generator),
            state,
        }
    }

    fn handle_command(&mut self, ctx: &egui::Context, command: MenuCommand) {
        tracing::debug!(?command, "Menu command");
        match command {
            MenuCommand::SaveAs => self.save_as(),
            MenuCommand::Copy => {
                let selection = ui::panels::report::selection(ctx);
                let text = self.state.copy_text(selection).to_owned();
                let chars = text.chars().count();
                ctx.copy_text(text);
                self.state
                    .set_status(format!("Copied {chars} characters to clipboard."));
            }
            MenuCommand::SelectAll => {
                self.state.request_select_all = true;
            }
            MenuCommand::Refresh => self.refresh(),
            MenuCommand::About => {
                self.state.show_about = true;
            }
            MenuCommand::Exit => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }

    /// Re-run the device queries and reload the report.
    ///
    /// The frame is not presented until `update` returns, so the window
    /// never shows a half-refreshed state. Any failure is fatal.
    fn refresh(&mut self) {
        let Some(generator) = self.generator.as_mut() else {
            return;
        };
        match generator.refresh_all() {
            Ok((monitors, joysticks)) => {
                let report = generator.generate_report();
                self.state.load_report(report, monitors, joysticks);
                tracing::info!(monitors, joysticks, "Diagnostics re-run");
            }
            Err(e) => exit_fatal("Failed to refresh device report", &DiagError::from(e)),
        }
    }

    /// Ask for a destination and write the displayed report there.
    ///
    /// Cancelling does nothing. A write failure leaves the report as it was
    /// and is reported in the status bar only.
    fn save_as(&mut self) {
        let dialog = rfd::FileDialog::new()
            .add_filter("Text Files (*.txt)", &[constants::REPORT_FILE_EXTENSION])
            .set_file_name(self.state.default_file_name.as_str());
        // Only the Win32 dialog reads "*" as match-everything; GTK turns it
        // into "*.*" and hides extensionless files.
        #[cfg(target_os = "windows")]
        let dialog = dialog.add_filter("All Files (*.*)", &["*"]);

        let Some(chosen) = dialog.save_file() else {
            tracing::debug!("Save dialog cancelled");
            return;
        };
        let dest = platform::fs::with_report_extension(chosen);

        match platform::fs::write_report(&dest, &self.state.report) {
            Ok(bytes) => {
                self.state
                    .set_status(format!("Saved {bytes} bytes to {}.", dest.display()));
            }
            Err(e) => {
                let err = DiagError::from(e);
                tracing::warn!(error = %err, "Report save failed");
                self.state.set_error_status(err.to_string());
            }
        }
    }

    fn menu_bar(&self, ctx: &egui::Context) -> Option<MenuCommand> {
        let mut command = None;
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    let save = egui::Button::new("Save As\u{2026}")
                        .shortcut_text(ctx.format_shortcut(&SAVE_SHORTCUT));
                    if ui.add(save).clicked() {
                        command = Some(MenuCommand::SaveAs);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        command = Some(MenuCommand::Exit);
                        ui.close_menu();
                    }
                });
                ui.menu_button("Edit", |ui| {
                    if ui.button("Copy").clicked() {
                        command = Some(MenuCommand::Copy);
                        ui.close_menu();
                    }
                    if ui.button("Select All").clicked() {
                        command = Some(MenuCommand::SelectAll);
                        ui.close_menu();
                    }
                });
                ui.menu_button("Diagnostics", |ui| {
                    let rerun = egui::Button::new("Re-run Diagnostics")
                        .shortcut_text(ctx.format_shortcut(&REFRESH_SHORTCUT));
                    if ui.add(rerun).clicked() {
                        command = Some(MenuCommand::Refresh);
                        ui.close_menu();
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        command = Some(MenuCommand::About);
                        ui.close_menu();
                    }
                });
            });
        });
        command
    }

    fn status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            for warning in &self.state.warnings {
                ui.colored_label(ui::theme::WARNING_TEXT, warning);
            }
            ui.horizontal(|ui| {
                if self.state.status_is_error {
                    ui.colored_label(ui::theme::ERROR_TEXT, &self.state.status_message);
                } else {
                    ui.label(&self.state.status_message);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "{} monitor(s) \u{00b7} {} joystick(s)",
                        self.state.monitor_count, self.state.joystick_count
                    ));
                    ui.add_space(ui::theme::STATUS_SPACING);
                });
            });
        });
    }
}

impl eframe::App for DeviceDiagApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut command = self.menu_bar(ctx);

        // Shortcuts are consumed so the text area does not also see them.
        if ctx.input_mut(|i| i.consume_shortcut(&SAVE_SHORTCUT)) {
            command = Some(MenuCommand::SaveAs);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&REFRESH_SHORTCUT)) {
            command = Some(MenuCommand::Refresh);
        }

        // Handled before the central panel so a refresh shows this frame.
        if let Some(command) = command {
            self.handle_command(ctx, command);
        }

        self.status_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::report::render(ui, &mut self.state);
        });

        ui::panels::about::render(ctx, &mut self.state);
    }

    /// Called by eframe when the application window is about to close.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Some(generator) = self.generator.take() {
            generator.shutdown();
        }
    }
}
