use serde::Serialize;
use serde_json::Number;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceTypeReport {
    pub datacenter: String,
    pub hostname: String,
    pub message: String,
    pub chassis: Vec<ChassisInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChassisInfo {
    pub chassis_id: String,
    pub chassis_type: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FanReport {
    pub datacenter: String,
    pub hostname: String,
    pub power_states: Vec<String>, // one per loaded chassis
    pub message: String,
    pub fans: Vec<FanInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FanInfo {
    pub chassis_id: String,
    pub name: Option<String>,
    pub reading_rpm: Option<Number>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerReport {
    pub datacenter: String,
    pub hostname: String,
    pub redfish_version: Option<String>,
    pub power_states: Vec<String>, // sorted
    pub message: String,
    /// Chassis the metrics were read from (the first one with a usable Power resource).
    pub metrics_chassis_id: Option<String>,
    pub power_consumed_watts: Option<Number>,
    pub min_consumed_watts: Option<Number>,
    pub max_consumed_watts: Option<Number>,
    pub average_consumed_watts: Option<Number>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureReport {
    pub datacenter: String,
    pub hostname: String,
    pub power_states: Vec<String>,
    pub message: String,
    pub temperatures: Vec<TemperatureInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureInfo {
    pub chassis_id: String,
    pub name: Option<String>,
    pub reading_celsius: Option<Number>,
    pub physical_context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaidReport {
    pub datacenter: String,
    pub hostname: String,
    pub raid_detected: bool,
    pub raid_capable: bool,
    pub message: String,
    pub controllers: Vec<ControllerInfo>,
    pub volumes: Vec<VolumeInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControllerInfo {
    pub name: String,
    pub model: Option<String>,
    pub supported_raid_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeInfo {
    pub storage_id: String,
    pub name: Option<String>,
    pub raid_type: Option<String>, // None on pass-through (HBA mode) volumes
    pub capacity_bytes: Option<Number>,
    pub capacity_gib: Option<f64>,
    pub drives: Vec<String>,
}
