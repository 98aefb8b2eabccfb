// Per-host report builders, one per report kind
pub mod types;
pub mod collect_device_type;
pub mod collect_fans;
pub mod collect_power;
pub mod collect_temperature;
pub mod collect_raid;

use std::fmt::Display;

// Re-export main collection functions
pub use collect_device_type::collect_device_type;
pub use collect_fans::collect_fan_metrics;
pub use collect_power::collect_power_metrics;
pub use collect_temperature::collect_temperature_info;
pub use collect_raid::collect_raid_info;

pub const NO_CHASSIS_INFO: &str = "No chassis info exposed via Redfish";

/// Line-oriented rendering of one host's record.
pub trait TextReport {
    /// Summary line followed by indented item lines.
    fn text_lines(&self) -> Vec<String>;
}

/// Absent readings print as `NA`.
pub(crate) fn or_na<T: Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(|| "NA".to_string(), ToString::to_string)
}

pub(crate) fn or_dash(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

pub(crate) fn or_unknown(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("Unknown")
}

/// `on, off` or `NA` when no chassis reported a power state.
pub(crate) fn power_states_label(states: &[String]) -> String {
    if states.is_empty() {
        "NA".to_string()
    } else {
        states.join(", ")
    }
}
