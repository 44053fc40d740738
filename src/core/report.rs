// DeviceDiag - core/report.rs
//
// Plain-text report formatting. Pure function of a DeviceSnapshot: the same
// snapshot always yields byte-identical text, so the report carries no
// timestamps.

use crate::core::model::{DeviceSnapshot, JoystickInfo, MonitorInfo};
use crate::util::constants::{
    APP_NAME, APP_VERSION, REPORT_LABEL_WIDTH, REPORT_RULE_WIDTH, UNNAMED_DEVICE,
};

/// Render the full report for a snapshot.
pub fn format_report(snapshot: &DeviceSnapshot) -> String {
    let mut out = String::new();

    out.push_str(&format!("{APP_NAME} {APP_VERSION} report\n"));
    field(&mut out, "", "Platform", &snapshot.platform);
    let backends = if snapshot.backends.is_empty() {
        "none".to_string()
    } else {
        snapshot.backends.join(", ")
    };
    field(&mut out, "", "Backends", &backends);

    out.push('\n');
    heading(&mut out, "Monitors", snapshot.monitors.len());
    if snapshot.monitors.is_empty() {
        out.push_str("(no monitors detected)\n");
    }
    let total = snapshot.monitors.len();
    for (n, monitor) in snapshot.monitors.iter().enumerate() {
        if n > 0 {
            out.push('\n');
        }
        write_monitor(&mut out, monitor, n + 1, total);
    }

    out.push('\n');
    heading(&mut out, "Joysticks", snapshot.joysticks.len());
    if snapshot.joysticks.is_empty() {
        out.push_str("(no joysticks detected)\n");
    }
    let total = snapshot.joysticks.len();
    for (n, joystick) in snapshot.joysticks.iter().enumerate() {
        if n > 0 {
            out.push('\n');
        }
        write_joystick(&mut out, joystick, n + 1, total);
    }

    out
}

fn heading(out: &mut String, title: &str, count: usize) {
    out.push_str(&format!("{title}: {count}\n"));
    out.push_str(&"-".repeat(REPORT_RULE_WIDTH));
    out.push('\n');
}

/// One aligned `label: value` line.
fn field(out: &mut String, indent: &str, label: &str, value: &str) {
    let label = format!("{label}:");
    out.push_str(&format!(
        "{indent}{label:<width$}{value}\n",
        width = REPORT_LABEL_WIDTH
    ));
}

fn display_name(name: &str) -> &str {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        UNNAMED_DEVICE
    } else {
        trimmed
    }
}

fn write_monitor(out: &mut String, monitor: &MonitorInfo, n: usize, total: usize) {
    let suffix = if monitor.primary { " (primary)" } else { "" };
    out.push_str(&format!("Monitor {n} of {total}{suffix}\n"));

    let indent = "  ";
    field(out, indent, "Name", display_name(&monitor.name));
    field(out, indent, "Id", &monitor.id.to_string());
    field(
        out,
        indent,
        "Position",
        &format!("{}, {}", monitor.position.0, monitor.position.1),
    );

    let rate = if monitor.mode.refresh_hz > 0.0 {
        format!("{:.2} Hz", monitor.mode.refresh_hz)
    } else {
        "unknown rate".to_string()
    };
    field(
        out,
        indent,
        "Current mode",
        &format!("{} x {} @ {rate}", monitor.mode.width, monitor.mode.height),
    );

    match monitor.physical_size_mm {
        Some((w, h)) if w > 0 && h > 0 => {
            field(out, indent, "Physical size", &format!("{w} x {h} mm"));
        }
        _ => field(out, indent, "Physical size", "unknown"),
    }
    if let Some(dpi) = monitor.dpi() {
        field(out, indent, "Pixel density", &format!("{dpi:.1} DPI"));
    }

    field(
        out,
        indent,
        "Scale factor",
        &format!("{:.2}", monitor.scale_factor),
    );
    field(
        out,
        indent,
        "Rotation",
        &format!("{:.0} degrees", monitor.rotation),
    );
}

fn write_joystick(out: &mut String, joystick: &JoystickInfo, n: usize, total: usize) {
    let suffix = if joystick.connected { "" } else { " (disconnected)" };
    out.push_str(&format!("Joystick {n} of {total}{suffix}\n"));

    let indent = "  ";
    let name = display_name(&joystick.name);
    field(out, indent, "Name", name);
    let os_name = display_name(&joystick.os_name);
    if os_name != name {
        field(out, indent, "OS name", os_name);
    }
    field(out, indent, "GUID", &joystick.uuid_hex());

    let ids = match (joystick.vendor_id, joystick.product_id) {
        (Some(v), Some(p)) => format!("{v:04x}:{p:04x}"),
        _ => "unknown".to_string(),
    };
    field(out, indent, "Vendor:product", &ids);
    field(out, indent, "Mapping", &joystick.mapping.label());
    field(out, indent, "Power", &joystick.power.label());
    let ff = if joystick.force_feedback {
        "supported"
    } else {
        "not supported"
    };
    field(out, indent, "Force feedback", ff);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{MappingSource, PowerState, VideoMode};

    fn monitor(index: usize, name: &str, primary: bool) -> MonitorInfo {
        MonitorInfo {
            index,
            id: 100 + index as u32,
            name: name.to_string(),
            primary,
            position: (1920 * index as i32, 0),
            mode: VideoMode {
                width: 1920,
                height: 1080,
                refresh_hz: 60.0,
            },
            physical_size_mm: Some((508, 286)),
            scale_factor: 1.0,
            rotation: 0.0,
        }
    }

    fn joystick(index: usize, name: &str) -> JoystickInfo {
        JoystickInfo {
            index,
            name: name.to_string(),
            os_name: name.to_string(),
            uuid: [0x03, 0, 0, 0, 0x5e, 0x04, 0, 0, 0xea, 0x02, 0, 0, 0, 0, 0, 0],
            vendor_id: Some(0x045e),
            product_id: Some(0x02ea),
            mapping: MappingSource::Driver,
            power: PowerState::Wired,
            force_feedback: true,
            connected: true,
        }
    }

    fn snapshot() -> DeviceSnapshot {
        DeviceSnapshot {
            platform: "linux (x86_64)".to_string(),
            backends: vec!["display-info".to_string(), "gilrs".to_string()],
            monitors: vec![monitor(0, "DELL U2720Q", true), monitor(1, "", false)],
            joysticks: vec![joystick(0, "Xbox Controller")],
        }
    }

    #[test]
    fn test_empty_snapshot_is_well_formed() {
        let report = format_report(&DeviceSnapshot::default());
        assert!(report.starts_with(APP_NAME));
        assert!(report.contains("Monitors: 0\n"));
        assert!(report.contains("(no monitors detected)\n"));
        assert!(report.contains("Joysticks: 0\n"));
        assert!(report.contains("(no joysticks detected)\n"));
        assert!(report.contains("Backends:       none\n"));
        assert!(report.ends_with('\n'));
    }

    #[test]
    fn test_monitor_block() {
        let report = format_report(&snapshot());
        assert!(report.contains("Monitor 1 of 2 (primary)\n"));
        assert!(report.contains("  Name:           DELL U2720Q\n"));
        assert!(report.contains("  Current mode:   1920 x 1080 @ 60.00 Hz\n"));
        assert!(report.contains("  Physical size:  508 x 286 mm\n"));
        assert!(report.contains("  Pixel density:  96.0 DPI\n"));
        assert!(report.contains("Monitor 2 of 2\n"));
        assert!(report.contains("  Position:       1920, 0\n"));
    }

    #[test]
    fn test_unnamed_monitor_placeholder() {
        let report = format_report(&snapshot());
        assert!(report.contains(&format!("  Name:           {UNNAMED_DEVICE}\n")));
    }

    #[test]
    fn test_unknown_rate_and_size() {
        let mut snap = snapshot();
        snap.monitors[0].mode.refresh_hz = 0.0;
        snap.monitors[0].physical_size_mm = None;
        let report = format_report(&snap);
        assert!(report.contains("1920 x 1080 @ unknown rate\n"));
        assert!(report.contains("  Physical size:  unknown\n"));
        // Only the second monitor still has a density line.
        assert_eq!(report.matches("Pixel density").count(), 1);
    }

    #[test]
    fn test_joystick_block() {
        let report = format_report(&snapshot());
        assert!(report.contains("Joysticks: 1\n"));
        assert!(report.contains("Joystick 1 of 1\n"));
        assert!(report.contains("  GUID:           030000005e040000ea02000000000000\n"));
        assert!(report.contains("  Vendor:product: 045e:02ea\n"));
        assert!(report.contains("  Mapping:        driver\n"));
        assert!(report.contains("  Force feedback: supported\n"));
        // Same OS name as mapped name is not repeated.
        assert!(!report.contains("OS name"));
    }

    #[test]
    fn test_os_name_shown_when_different() {
        let mut snap = snapshot();
        snap.joysticks[0].os_name = "Microsoft X-Box 360 pad".to_string();
        snap.joysticks[0].vendor_id = None;
        let report = format_report(&snap);
        assert!(report.contains("  OS name:        Microsoft X-Box 360 pad\n"));
        assert!(report.contains("  Vendor:product: unknown\n"));
    }

    #[test]
    fn test_same_snapshot_same_report() {
        let snap = snapshot();
        assert_eq!(format_report(&snap), format_report(&snap));
    }

    #[test]
    fn test_non_ascii_names_preserved() {
        let mut snap = snapshot();
        snap.monitors[0].name = "Écran Gauche \u{2013} 27\u{2033}".to_string();
        let report = format_report(&snap);
        assert!(report.contains("Écran Gauche \u{2013} 27\u{2033}"));
    }
}
