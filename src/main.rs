// DeviceDiag - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation (debug mode support)
// 3. Device backend start-up and the first report
// 4. Headless --print / --json output, or the eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use devicediag::app;
pub use devicediag::core;
pub use devicediag::platform;
pub use devicediag::ui;
pub use devicediag::util;

use clap::Parser;
use std::path::PathBuf;
use util::error::{exit_fatal, DiagError};

/// Draw the window icon: a monitor silhouette on a transparent background.
///
/// Generated rather than embedded so the binary carries no asset files.
fn build_icon() -> egui::IconData {
    let size = util::constants::ICON_SIZE;
    let frame = ui::theme::ICON_FRAME.to_array();
    let screen = ui::theme::ICON_SCREEN.to_array();

    // Proportions of the silhouette, in eighths of the icon edge.
    let eighth = size / 8;
    let (left, right) = (eighth / 2, size - eighth / 2);
    let (top, bottom) = (eighth, size - eighth * 3);
    let border = (eighth / 2).max(1);
    let stand_half = eighth;
    let centre = size / 2;

    let img = image::RgbaImage::from_fn(size, size, |x, y| {
        let in_body = (left..right).contains(&x) && (top..bottom).contains(&y);
        let in_screen = (left + border..right - border).contains(&x)
            && (top + border..bottom - border).contains(&y);
        let in_neck = (centre - stand_half / 2..centre + stand_half / 2).contains(&x)
            && (bottom..bottom + eighth).contains(&y);
        let in_foot = (centre - stand_half * 2..centre + stand_half * 2).contains(&x)
            && (bottom + eighth..bottom + eighth + border * 2).contains(&y);

        if in_screen {
            image::Rgba(screen)
        } else if in_body || in_neck || in_foot {
            image::Rgba(frame)
        } else {
            image::Rgba([0, 0, 0, 0])
        }
    });

    egui::IconData {
        rgba: img.into_raw(),
        width: size,
        height: size,
    }
}

/// Configure fonts for the egui context.
///
/// On Windows, loads Courier New from the system font directory and puts it
/// first in the monospace family so the report reads like a classic text
/// dump. The built-in egui fonts are kept as fallbacks so no glyph is ever
/// lost.
///
/// On non-Windows platforms the egui defaults are used unchanged.
fn configure_fonts(ctx: &egui::Context) {
    #[cfg(target_os = "windows")]
    {
        let mut fonts = egui::FontDefinitions::default();
        let (name, path) = ("Courier New", r"C:\Windows\Fonts\cour.ttf");

        match std::fs::read(path) {
            Ok(data) => {
                fonts
                    .font_data
                    .insert(name.to_owned(), egui::FontData::from_owned(data).into());
                if let Some(monospace) = fonts.families.get_mut(&egui::FontFamily::Monospace) {
                    monospace.insert(0, name.to_owned());
                }
                ctx.set_fonts(fonts);
                tracing::debug!(font = name, "Loaded Windows system font");
            }
            Err(e) => {
                tracing::warn!(
                    font = name,
                    error = %e,
                    "Failed to load Windows system font; using built-in monospace"
                );
            }
        }
    }

    #[cfg(not(target_os = "windows"))]
    let _ = ctx;
}

/// DeviceDiag - report connected monitors and joysticks.
///
/// Opens a window showing the report. Use --print or --json for headless
/// output.
#[derive(Parser, Debug)]
#[command(name = "DeviceDiag", version, about)]
struct Cli {
    /// Print the text report to stdout and exit.
    #[arg(long = "print", conflicts_with = "json")]
    print: bool,

    /// Print the device snapshot as JSON to stdout and exit.
    #[arg(long = "json")]
    json: bool,

    /// Config file to use instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config first: it supplies the log level.
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_file);
    let (config, config_warnings) = platform::config::load_config(&config_path);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config = %config_path.display(),
        "DeviceDiag starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    // The headless modes run where no display server may exist.
    let display_required = !(cli.print || cli.json);
    let open_backends = || {
        platform::probe::SystemProbe::new(display_required)
            .map(|p| Box::new(p) as Box<dyn crate::core::probe::DeviceProbe>)
    };
    let mut generator = match app::generator::ReportGenerator::initialize(open_backends) {
        Ok(g) => g,
        Err(e) => exit_fatal("Failed to initialise report generator", &e),
    };
    let (monitors, joysticks) = match generator.refresh_all() {
        Ok(counts) => counts,
        Err(e) => exit_fatal("Failed to query devices", &DiagError::from(e)),
    };

    if cli.print {
        print!("{}", generator.generate_report());
        generator.shutdown();
        return;
    }
    if cli.json {
        match serde_json::to_string_pretty(generator.snapshot()) {
            Ok(json) => println!("{json}"),
            Err(e) => exit_fatal("Failed to serialise device snapshot", &e),
        }
        generator.shutdown();
        return;
    }

    let mut state = app::state::AppState::new(
        String::new(),
        config.default_file_name.clone(),
        cli.debug,
    );
    state.font_size = config.font_size;
    state.dark_mode = config.dark_mode;
    state.warnings = config_warnings;
    state.load_report(generator.generate_report(), monitors, joysticks);

    tracing::info!(monitors, joysticks, "Ready to launch GUI");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size(util::constants::DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(util::constants::MIN_WINDOW_SIZE)
            .with_icon(build_icon()),
        ..Default::default()
    };

    let dark_mode = state.dark_mode;
    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            configure_fonts(&cc.egui_ctx);
            ui::theme::apply(&cc.egui_ctx, dark_mode);
            Ok(Box::new(gui::DeviceDiagApp::new(generator, state)))
        }),
    );

    if let Err(e) = result {
        exit_fatal("Failed to launch GUI", &e);
    }
}
