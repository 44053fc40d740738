// DeviceDiag - app/generator.rs
//
// Report generator: owns a DeviceProbe and the snapshot built from it.
// Refreshes replace one half of the snapshot each; generation formats
// whatever the last refreshes collected.

use crate::core::model::DeviceSnapshot;
use crate::core::probe::DeviceProbe;
use crate::core::report;
use crate::util::error::{DiagError, InitError, ProbeError};

/// Drives a probe and renders reports from its results.
pub struct ReportGenerator<P: DeviceProbe> {
    probe: P,
    snapshot: DeviceSnapshot,
}

/// Host description used in the report header.
pub fn host_platform() -> String {
    format!("{} ({})", std::env::consts::OS, std::env::consts::ARCH)
}

impl<P: DeviceProbe> ReportGenerator<P> {
    /// Bring the device backends up through `open` and take ownership of
    /// the resulting probe.
    ///
    /// A backend that refuses to start is returned as `DiagError::Init`;
    /// callers treat it as fatal. Nothing is queried yet; call the refresh
    /// methods before the first `generate_report`.
    pub fn initialize<F>(open: F) -> Result<Self, DiagError>
    where
        F: FnOnce() -> Result<P, InitError>,
    {
        let probe = open()?;
        let snapshot = DeviceSnapshot {
            platform: host_platform(),
            backends: probe.backends(),
            monitors: Vec::new(),
            joysticks: Vec::new(),
        };
        tracing::info!(
            platform = %snapshot.platform,
            backends = ?snapshot.backends,
            "Report generator initialised"
        );
        Ok(Self { probe, snapshot })
    }

    /// Re-query monitors. Returns the number found.
    pub fn refresh_monitor_info(&mut self) -> Result<usize, ProbeError> {
        self.snapshot.monitors = self.probe.monitors()?;
        let count = self.snapshot.monitors.len();
        tracing::debug!(count, "Monitor info refreshed");
        Ok(count)
    }

    /// Re-query joysticks. Returns the number found.
    pub fn refresh_joystick_info(&mut self) -> Result<usize, ProbeError> {
        self.snapshot.joysticks = self.probe.joysticks()?;
        let count = self.snapshot.joysticks.len();
        tracing::debug!(count, "Joystick info refreshed");
        Ok(count)
    }

    /// Refresh both halves of the snapshot.
    pub fn refresh_all(&mut self) -> Result<(usize, usize), ProbeError> {
        let monitors = self.refresh_monitor_info()?;
        let joysticks = self.refresh_joystick_info()?;
        Ok((monitors, joysticks))
    }

    /// Format the current snapshot.
    pub fn generate_report(&self) -> String {
        report::format_report(&self.snapshot)
    }

    /// The descriptors collected by the most recent refreshes.
    pub fn snapshot(&self) -> &DeviceSnapshot {
        &self.snapshot
    }

    /// Release the probe's backends.
    pub fn shutdown(mut self) {
        self.probe.shutdown();
        tracing::info!("Report generator shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{
        JoystickInfo, MappingSource, MonitorInfo, PowerState, VideoMode,
    };

    /// Probe returning canned devices and counting calls.
    #[derive(Default)]
    struct FakeProbe {
        monitors: Vec<MonitorInfo>,
        joysticks: Vec<JoystickInfo>,
        fail_joysticks: bool,
        monitor_calls: usize,
    }

    impl DeviceProbe for FakeProbe {
        fn backends(&self) -> Vec<String> {
            vec!["fake".to_string()]
        }

        fn monitors(&mut self) -> Result<Vec<MonitorInfo>, ProbeError> {
            self.monitor_calls += 1;
            Ok(self.monitors.clone())
        }

        fn joysticks(&mut self) -> Result<Vec<JoystickInfo>, ProbeError> {
            if self.fail_joysticks {
                return Err(ProbeError::Joysticks {
                    backend: "fake",
                    reason: "unplugged".to_string(),
                });
            }
            Ok(self.joysticks.clone())
        }
    }

    fn sample_monitor() -> MonitorInfo {
        MonitorInfo {
            index: 0,
            id: 7,
            name: "Panel".to_string(),
            primary: true,
            position: (0, 0),
            mode: VideoMode {
                width: 2560,
                height: 1440,
                refresh_hz: 144.0,
            },
            physical_size_mm: None,
            scale_factor: 1.25,
            rotation: 0.0,
        }
    }

    fn sample_joystick() -> JoystickInfo {
        JoystickInfo {
            index: 0,
            name: "Pad".to_string(),
            os_name: "Pad".to_string(),
            uuid: [0; 16],
            vendor_id: None,
            product_id: None,
            mapping: MappingSource::None,
            power: PowerState::Unknown,
            force_feedback: false,
            connected: true,
        }
    }

    #[test]
    fn test_initialize_does_not_query() {
        let gen = ReportGenerator::initialize(|| Ok(FakeProbe::default())).unwrap();
        assert_eq!(gen.probe.monitor_calls, 0);
        assert_eq!(gen.snapshot().backends, vec!["fake".to_string()]);
        assert_eq!(gen.snapshot().platform, host_platform());
    }

    #[test]
    fn test_backend_start_failure_is_init_error() {
        let result = ReportGenerator::<FakeProbe>::initialize(|| {
            Err(InitError::GamepadBackend {
                backend: "fake",
                reason: "no input subsystem".to_string(),
            })
        });

        let Err(err) = result else {
            panic!("a failing backend must not yield a generator");
        };
        assert!(matches!(err, DiagError::Init(InitError::GamepadBackend { .. })));
        assert!(err.to_string().contains("no input subsystem"));
    }

    #[test]
    fn test_report_before_refresh_lists_no_devices() {
        let probe = FakeProbe {
            monitors: vec![sample_monitor()],
            ..Default::default()
        };
        let gen = ReportGenerator::initialize(|| Ok(probe)).unwrap();
        assert!(gen.generate_report().contains("Monitors: 0"));
    }

    #[test]
    fn test_refresh_counts() {
        let probe = FakeProbe {
            monitors: vec![sample_monitor()],
            joysticks: vec![sample_joystick(), sample_joystick()],
            ..Default::default()
        };
        let mut gen = ReportGenerator::initialize(|| Ok(probe)).unwrap();
        assert_eq!(gen.refresh_all().unwrap(), (1, 2));

        let report = gen.generate_report();
        assert!(report.contains("Monitors: 1"));
        assert!(report.contains("Joysticks: 2"));
        assert!(report.contains("2560 x 1440 @ 144.00 Hz"));
    }

    #[test]
    fn test_repeated_refresh_is_idempotent() {
        let probe = FakeProbe {
            monitors: vec![sample_monitor()],
            joysticks: vec![sample_joystick()],
            ..Default::default()
        };
        let mut gen = ReportGenerator::initialize(|| Ok(probe)).unwrap();
        gen.refresh_all().unwrap();
        let first = gen.generate_report();
        gen.refresh_all().unwrap();
        let second = gen.generate_report();
        assert_eq!(first, second);
        assert_eq!(gen.probe.monitor_calls, 2);
    }

    #[test]
    fn test_joystick_failure_propagates_and_keeps_monitors() {
        let probe = FakeProbe {
            monitors: vec![sample_monitor()],
            fail_joysticks: true,
            ..Default::default()
        };
        let mut gen = ReportGenerator::initialize(|| Ok(probe)).unwrap();
        let err = gen.refresh_all().unwrap_err();
        assert!(matches!(err, ProbeError::Joysticks { .. }));
        assert_eq!(gen.snapshot().monitors.len(), 1);
    }

    #[test]
    fn test_boxed_probe_works() {
        let probe: Box<dyn DeviceProbe> = Box::new(FakeProbe {
            joysticks: vec![sample_joystick()],
            ..Default::default()
        });
        let mut gen = ReportGenerator::initialize(|| Ok(probe)).unwrap();
        assert_eq!(gen.refresh_joystick_info().unwrap(), 1);
        gen.shutdown();
    }
}
