// DeviceDiag - platform/mod.rs
//
// Platform abstraction layer: config directories, report file output, and
// the device backends.
// Must NOT depend on: app, ui.

pub mod config;
pub mod fs;
pub mod probe;
