// DeviceDiag - core/probe.rs
//
// The seam between report generation and the platform. The system
// implementation lives in platform/probe.rs; tests supply fixture probes.

use crate::core::model::{JoystickInfo, MonitorInfo};
use crate::util::error::ProbeError;

/// Live source of device descriptors.
///
/// Every call queries the platform afresh; implementations must not cache
/// results between calls.
pub trait DeviceProbe {
    /// Backend names, in the order they appear in the report header.
    fn backends(&self) -> Vec<String>;

    /// Enumerate connected monitors.
    fn monitors(&mut self) -> Result<Vec<MonitorInfo>, ProbeError>;

    /// Enumerate connected joysticks and gamepads.
    fn joysticks(&mut self) -> Result<Vec<JoystickInfo>, ProbeError>;

    /// Release backend resources. Called once, before the probe is dropped.
    fn shutdown(&mut self) {}
}

impl<P: DeviceProbe + ?Sized> DeviceProbe for Box<P> {
    fn backends(&self) -> Vec<String> {
        (**self).backends()
    }

    fn monitors(&mut self) -> Result<Vec<MonitorInfo>, ProbeError> {
        (**self).monitors()
    }

    fn joysticks(&mut self) -> Result<Vec<JoystickInfo>, ProbeError> {
        (**self).joysticks()
    }

    fn shutdown(&mut self) {
        (**self).shutdown()
    }
}
