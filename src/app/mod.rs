// DeviceDiag - app/mod.rs
//
// Application layer: report generation orchestration and UI state.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod generator;
pub mod state;
