// DeviceDiag - ui/panels/mod.rs

pub mod about;
pub mod report;
