// DeviceDiag - platform/probe.rs
//
// System DeviceProbe: monitors via display-info, joysticks via gilrs.
// Converts backend types into core model descriptors at this boundary so
// nothing above the platform layer sees a backend type.

use crate::core::model::{
    JoystickInfo, MappingSource, MonitorInfo, PowerState, VideoMode,
};
use crate::core::probe::DeviceProbe;
use crate::util::constants::{JOYSTICK_BACKEND, MAX_GAMEPAD_EVENTS_PER_REFRESH, MONITOR_BACKEND};
use crate::util::error::{InitError, ProbeError};
use display_info::DisplayInfo;
use gilrs::Gilrs;

/// Probe backed by the real display and gamepad backends.
pub struct SystemProbe {
    gilrs: Gilrs,
    /// When false, a missing display server yields an empty monitor list
    /// instead of an error.
    display_required: bool,
}

impl SystemProbe {
    /// Open both backends.
    ///
    /// Fails when the gamepad backend cannot start. With `display_required`
    /// it also fails when no display can be enumerated at all (no display
    /// server, missing permissions); the headless modes pass `false` and
    /// get zero monitors instead. A platform without gamepad support gets
    /// gilrs's dummy backend and simply reports no joysticks.
    pub fn new(display_required: bool) -> Result<Self, InitError> {
        let gilrs = match Gilrs::new() {
            Ok(g) => g,
            Err(gilrs::Error::NotImplemented(dummy)) => {
                tracing::warn!(
                    backend = JOYSTICK_BACKEND,
                    "Gamepad support is not implemented on this platform; no joysticks will be listed"
                );
                dummy
            }
            Err(e) => {
                return Err(InitError::GamepadBackend {
                    backend: JOYSTICK_BACKEND,
                    reason: e.to_string(),
                })
            }
        };

        let displays = match DisplayInfo::all() {
            Ok(displays) => displays.len(),
            Err(e) if display_required => {
                return Err(InitError::DisplayBackend {
                    backend: MONITOR_BACKEND,
                    reason: e.to_string(),
                })
            }
            Err(e) => {
                tracing::warn!(
                    backend = MONITOR_BACKEND,
                    error = %e,
                    "No display server; monitors will be reported as none"
                );
                0
            }
        };

        tracing::info!(
            displays,
            gamepads = gilrs.gamepads().count(),
            display_required,
            "Device backends opened"
        );

        Ok(Self {
            gilrs,
            display_required,
        })
    }

    /// Let gilrs process queued hot-plug events so its gamepad list is
    /// current. Returns the number of events drained.
    fn pump_events(&mut self) -> usize {
        let mut drained = 0;
        while drained < MAX_GAMEPAD_EVENTS_PER_REFRESH {
            if self.gilrs.next_event().is_none() {
                break;
            }
            drained += 1;
        }
        if drained == MAX_GAMEPAD_EVENTS_PER_REFRESH {
            tracing::warn!(
                limit = MAX_GAMEPAD_EVENTS_PER_REFRESH,
                "Gamepad event queue still busy after drain limit"
            );
        }
        drained
    }
}

impl DeviceProbe for SystemProbe {
    fn backends(&self) -> Vec<String> {
        vec![MONITOR_BACKEND.to_string(), JOYSTICK_BACKEND.to_string()]
    }

    fn monitors(&mut self) -> Result<Vec<MonitorInfo>, ProbeError> {
        let displays = displays_or_empty(DisplayInfo::all(), self.display_required)?;

        Ok(displays
            .iter()
            .enumerate()
            .map(|(index, d)| monitor_from_display(index, d))
            .collect())
    }

    fn joysticks(&mut self) -> Result<Vec<JoystickInfo>, ProbeError> {
        let drained = self.pump_events();
        tracing::trace!(drained, "Gamepad events drained");

        Ok(self
            .gilrs
            .gamepads()
            .enumerate()
            .map(|(index, (_id, pad))| joystick_from_gamepad(index, &pad))
            .collect())
    }

    fn shutdown(&mut self) {
        let drained = self.pump_events();
        tracing::debug!(drained, "Gamepad backend closing");
    }
}

/// Turn a display enumeration result into the probe's result.
///
/// An enumeration error is a `ProbeError` unless the display is optional,
/// in which case it is logged and treated as no displays.
fn displays_or_empty<T, E: std::fmt::Display>(
    result: Result<Vec<T>, E>,
    display_required: bool,
) -> Result<Vec<T>, ProbeError> {
    match result {
        Ok(displays) => Ok(displays),
        Err(e) if display_required => Err(ProbeError::Monitors {
            backend: MONITOR_BACKEND,
            reason: e.to_string(),
        }),
        Err(e) => {
            tracing::debug!(error = %e, "Display enumeration unavailable; no monitors");
            Ok(Vec::new())
        }
    }
}

fn monitor_from_display(index: usize, d: &DisplayInfo) -> MonitorInfo {
    let (width_mm, height_mm) = (d.width_mm as i64, d.height_mm as i64);
    let physical_size_mm = if width_mm > 0 && height_mm > 0 {
        Some((width_mm as u32, height_mm as u32))
    } else {
        None
    };

    MonitorInfo {
        index,
        id: d.id as u32,
        name: d.name.clone(),
        primary: d.is_primary,
        position: (d.x as i32, d.y as i32),
        mode: VideoMode {
            width: d.width as u32,
            height: d.height as u32,
            refresh_hz: d.frequency as f32,
        },
        physical_size_mm,
        scale_factor: d.scale_factor as f32,
        rotation: d.rotation as f32,
    }
}

fn joystick_from_gamepad(index: usize, pad: &gilrs::Gamepad<'_>) -> JoystickInfo {
    #[allow(unreachable_patterns)]
    let mapping = match pad.mapping_source() {
        gilrs::MappingSource::SdlMappings => {
            MappingSource::SdlMapping(pad.map_name().map(str::to_owned))
        }
        gilrs::MappingSource::Driver => MappingSource::Driver,
        _ => MappingSource::None,
    };

    #[allow(unreachable_patterns)]
    let power = match pad.power_info() {
        gilrs::PowerInfo::Wired => PowerState::Wired,
        gilrs::PowerInfo::Discharging(pct) => PowerState::Discharging(pct),
        gilrs::PowerInfo::Charging(pct) => PowerState::Charging(pct),
        gilrs::PowerInfo::Charged => PowerState::Charged,
        _ => PowerState::Unknown,
    };

    JoystickInfo {
        index,
        name: pad.name().to_owned(),
        os_name: pad.os_name().to_owned(),
        uuid: pad.uuid(),
        vendor_id: pad.vendor_id(),
        product_id: pad.product_id(),
        mapping,
        power,
        force_feedback: pad.is_ff_supported(),
        connected: pad.is_connected(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_error_is_fatal_when_required() {
        let err = displays_or_empty::<u32, _>(Err("cannot open display"), true).unwrap_err();
        assert!(matches!(err, ProbeError::Monitors { backend: MONITOR_BACKEND, .. }));
        assert!(err.to_string().contains("cannot open display"));
    }

    #[test]
    fn test_display_error_means_no_monitors_when_optional() {
        let displays = displays_or_empty::<u32, _>(Err("cannot open display"), false).unwrap();
        assert!(displays.is_empty());
    }

    #[test]
    fn test_displays_pass_through() {
        assert_eq!(displays_or_empty::<u32, &str>(Ok(vec![1, 2]), false).unwrap(), vec![1, 2]);
        assert_eq!(displays_or_empty::<u32, &str>(Ok(vec![3]), true).unwrap(), vec![3]);
    }
}
