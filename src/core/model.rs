// DeviceDiag - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// Device descriptors are ephemeral: they are rebuilt on every refresh and
// never persisted.

use serde::Serialize;

// =============================================================================
// Monitors
// =============================================================================

/// One connected monitor as reported by the display backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitorInfo {
    /// Zero-based position in the enumeration order.
    pub index: usize,

    /// Backend-specific monitor identifier.
    pub id: u32,

    /// Human-readable name. May be empty.
    pub name: String,

    /// Whether the OS considers this the primary monitor.
    pub primary: bool,

    /// Top-left corner in virtual desktop coordinates.
    pub position: (i32, i32),

    /// Current video mode.
    pub mode: VideoMode,

    /// Physical size in millimetres. `None` when the display does not
    /// report a usable size (projectors, some virtual displays).
    pub physical_size_mm: Option<(u32, u32)>,

    /// DPI scale factor applied by the OS.
    pub scale_factor: f32,

    /// Rotation in degrees (0, 90, 180, 270).
    pub rotation: f32,
}

impl MonitorInfo {
    /// Horizontal pixel density derived from the physical width.
    pub fn dpi(&self) -> Option<f64> {
        let (width_mm, _) = self.physical_size_mm?;
        if width_mm == 0 {
            return None;
        }
        let inches = f64::from(width_mm) / crate::util::constants::MM_PER_INCH;
        Some(f64::from(self.mode.width) / inches)
    }
}

/// Resolution and refresh rate of a monitor's current mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VideoMode {
    pub width: u32,
    pub height: u32,
    /// Refresh rate in Hz. 0.0 when unknown.
    pub refresh_hz: f32,
}

// =============================================================================
// Joysticks
// =============================================================================

/// One joystick or gamepad as reported by the gamepad backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoystickInfo {
    /// Zero-based position in the enumeration order.
    pub index: usize,

    /// Name after mapping (SDL mapping name when one applies).
    pub name: String,

    /// Name reported by the operating system driver.
    pub os_name: String,

    /// SDL-compatible device GUID.
    pub uuid: [u8; 16],

    /// USB vendor id, when the backend exposes it.
    pub vendor_id: Option<u16>,

    /// USB product id, when the backend exposes it.
    pub product_id: Option<u16>,

    /// Where the button/axis layout came from.
    pub mapping: MappingSource,

    /// Battery / power state.
    pub power: PowerState,

    /// Whether force feedback (rumble) is supported.
    pub force_feedback: bool,

    /// Whether the device was still connected when queried.
    pub connected: bool,
}

impl JoystickInfo {
    /// GUID formatted as 32 lowercase hex digits, the form SDL mapping
    /// databases use.
    pub fn uuid_hex(&self) -> String {
        self.uuid.iter().map(|b| format!("{b:02x}")).collect()
    }
}

/// Source of a joystick's gamepad mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MappingSource {
    /// Mapped through an SDL game controller database entry.
    SdlMapping(Option<String>),
    /// Layout supplied by the OS driver.
    Driver,
    /// Raw joystick with no gamepad mapping.
    None,
}

impl MappingSource {
    /// Human-readable label for display.
    pub fn label(&self) -> String {
        match self {
            Self::SdlMapping(Some(name)) => format!("SDL mapping (\"{name}\")"),
            Self::SdlMapping(None) => "SDL mapping".to_string(),
            Self::Driver => "driver".to_string(),
            Self::None => "none (raw joystick)".to_string(),
        }
    }
}

/// Battery / power state of a joystick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PowerState {
    Unknown,
    Wired,
    /// Running on battery, charge percentage.
    Discharging(u8),
    /// Plugged in and charging, charge percentage.
    Charging(u8),
    Charged,
}

impl PowerState {
    /// Human-readable label for display.
    pub fn label(&self) -> String {
        match self {
            Self::Unknown => "unknown".to_string(),
            Self::Wired => "wired".to_string(),
            Self::Discharging(pct) => format!("on battery ({pct}%)"),
            Self::Charging(pct) => format!("charging ({pct}%)"),
            Self::Charged => "charged".to_string(),
        }
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// Everything one report is generated from.
///
/// Rebuilt in halves by the generator's monitor and joystick refreshes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeviceSnapshot {
    /// Host description, e.g. "linux (x86_64)".
    pub platform: String,

    /// Names of the probe backends that produced the device lists.
    pub backends: Vec<String>,

    pub monitors: Vec<MonitorInfo>,

    pub joysticks: Vec<JoystickInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitor(width: u32, physical: Option<(u32, u32)>) -> MonitorInfo {
        MonitorInfo {
            index: 0,
            id: 1,
            name: "Test".to_string(),
            primary: true,
            position: (0, 0),
            mode: VideoMode {
                width,
                height: 1080,
                refresh_hz: 60.0,
            },
            physical_size_mm: physical,
            scale_factor: 1.0,
            rotation: 0.0,
        }
    }

    #[test]
    fn test_dpi_from_physical_width() {
        // 1920 px across 508 mm (20 in) is 96 DPI.
        let dpi = monitor(1920, Some((508, 286))).dpi().unwrap();
        assert!((dpi - 96.0).abs() < 1e-9, "got {dpi}");
    }

    #[test]
    fn test_dpi_unknown_without_size() {
        assert!(monitor(1920, None).dpi().is_none());
        assert!(monitor(1920, Some((0, 0))).dpi().is_none());
    }

    #[test]
    fn test_uuid_hex_is_lowercase_and_padded() {
        let mut uuid = [0u8; 16];
        uuid[0] = 0x03;
        uuid[4] = 0x5e;
        uuid[15] = 0xAB;
        let js = JoystickInfo {
            index: 0,
            name: String::new(),
            os_name: String::new(),
            uuid,
            vendor_id: None,
            product_id: None,
            mapping: MappingSource::None,
            power: PowerState::Unknown,
            force_feedback: false,
            connected: true,
        };
        assert_eq!(js.uuid_hex(), "030000005e00000000000000000000ab");
    }

    #[test]
    fn test_power_labels() {
        assert_eq!(PowerState::Discharging(40).label(), "on battery (40%)");
        assert_eq!(PowerState::Charging(90).label(), "charging (90%)");
        assert_eq!(PowerState::Wired.label(), "wired");
    }

    #[test]
    fn test_mapping_labels() {
        assert_eq!(
            MappingSource::SdlMapping(Some("Xbox One".to_string())).label(),
            "SDL mapping (\"Xbox One\")"
        );
        assert_eq!(MappingSource::Driver.label(), "driver");
    }
}
