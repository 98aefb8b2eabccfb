//! Offline fleet reports from Redfish snapshot dumps.
//!
//! A dump is a directory tree `<root>/<datacenter>/<hostname>/` holding the
//! JSON documents a Redfish service returned (`Chassis.json`,
//! `Chassis/<id>.json`, `Systems/<id>/Storage.json`, ...). Every report walks
//! those documents per host and reduces them to one record.

pub mod error;
pub mod output;
pub mod redfish;
pub mod reports;

pub use error::{ScanError, ScanResult};
