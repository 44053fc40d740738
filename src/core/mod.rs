// DeviceDiag - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library and serde only.
// Must NOT depend on: ui, platform, app, or any device backend crate.

pub mod model;
pub mod probe;
pub mod report;
