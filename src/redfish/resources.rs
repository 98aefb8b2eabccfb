//! Typed views of the Redfish resources the reports consume.
//!
//! Each view is built field by field through [`safe_get`](super::navigate::safe_get),
//! so a wrongly typed field only loses that field and never the whole document.

use serde_json::{Number, Value};

use crate::path;
use crate::redfish::navigate::{
    get_array, get_number, get_str, get_string_list, get_text, safe_get,
};
use crate::redfish::reference::{last_segment, member_ids};

/// A collection resource: the local identifiers of its `Members`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    /// Number of entries in `Members`, resolvable or not.
    pub listed: usize,
    pub member_ids: Vec<String>,
}

impl Collection {
    pub fn from_value(doc: &Value) -> Self {
        let members = get_array(doc, &path!["Members"]);
        Self {
            listed: members.len(),
            member_ids: member_ids(members),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.listed == 0
    }
}

/// `/redfish/v1/` service root.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceRoot {
    pub redfish_version: Option<String>,
}

impl ServiceRoot {
    pub fn from_value(doc: &Value) -> Self {
        Self {
            redfish_version: get_text(doc, &path!["RedfishVersion"]),
        }
    }
}

/// `/redfish/v1/Chassis/<id>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChassisDetail {
    pub chassis_type: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    /// Lower-cased `PowerState`.
    pub power_state: Option<String>,
    pub has_thermal: bool,
    pub has_power: bool,
}

impl ChassisDetail {
    pub fn from_value(doc: &Value) -> Self {
        Self {
            chassis_type: get_text(doc, &path!["ChassisType"]),
            manufacturer: get_text(doc, &path!["Manufacturer"]),
            model: get_text(doc, &path!["Model"]),
            serial_number: get_text(doc, &path!["SerialNumber"]),
            power_state: get_str(doc, &path!["PowerState"]).map(str::to_lowercase),
            has_thermal: is_reference(doc, "Thermal"),
            has_power: is_reference(doc, "Power"),
        }
    }
}

/// A sub-resource link is only followed when it is a non-empty object.
fn is_reference(doc: &Value, field: &str) -> bool {
    matches!(safe_get(doc, &path![field]), Some(Value::Object(map)) if !map.is_empty())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FanReading {
    pub name: Option<String>,
    pub reading: Option<Number>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemperatureReading {
    pub name: Option<String>,
    pub reading_celsius: Option<Number>,
    pub physical_context: Option<String>,
}

/// `/redfish/v1/Chassis/<id>/Thermal`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThermalResource {
    pub fans: Vec<FanReading>,
    pub temperatures: Vec<TemperatureReading>,
}

impl ThermalResource {
    pub fn from_value(doc: &Value) -> Self {
        let fans = get_array(doc, &path!["Fans"])
            .iter()
            .map(|fan| FanReading {
                name: get_text(fan, &path!["Name"]),
                reading: get_number(fan, &path!["Reading"]),
            })
            .collect();

        let temperatures = get_array(doc, &path!["Temperatures"])
            .iter()
            .map(|sensor| TemperatureReading {
                name: get_text(sensor, &path!["Name"]),
                reading_celsius: get_number(sensor, &path!["ReadingCelsius"]),
                physical_context: get_text(sensor, &path!["PhysicalContext"]),
            })
            .collect();

        Self { fans, temperatures }
    }
}

/// First `PowerControl` entry of `/redfish/v1/Chassis/<id>/Power`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PowerControl {
    pub power_consumed_watts: Option<Number>,
    pub min_consumed_watts: Option<Number>,
    pub max_consumed_watts: Option<Number>,
    pub average_consumed_watts: Option<Number>,
}

impl PowerControl {
    /// `None` when the document has no `PowerControl` entries.
    pub fn first_from(doc: &Value) -> Option<Self> {
        let pc = get_array(doc, &path!["PowerControl"]).first()?;
        Some(Self {
            power_consumed_watts: get_number(pc, &path!["PowerConsumedWatts"]),
            min_consumed_watts: get_number(pc, &path!["PowerMetrics", "MinConsumedWatts"]),
            max_consumed_watts: get_number(pc, &path!["PowerMetrics", "MaxConsumedWatts"]),
            average_consumed_watts: get_number(pc, &path!["PowerMetrics", "AverageConsumedWatts"]),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StorageController {
    pub name: Option<String>,
    pub model: Option<String>,
    pub description: Option<String>,
    pub supported_raid_types: Vec<String>,
}

impl StorageController {
    /// Display name: `Name`, else `Model`, else `Controller`.
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.model.clone())
            .unwrap_or_else(|| "Controller".to_string())
    }

    pub fn is_raid_capable(&self) -> bool {
        let mentions_raid = |text: &str| text.to_lowercase().contains("raid");
        !self.supported_raid_types.is_empty()
            || mentions_raid(&self.display_name())
            || self.description.as_deref().is_some_and(mentions_raid)
    }
}

/// `/redfish/v1/Systems/<sys>/Storage/<id>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StorageResource {
    pub controllers: Vec<StorageController>,
    pub has_volumes: bool,
}

impl StorageResource {
    pub fn from_value(doc: &Value) -> Self {
        let controllers = get_array(doc, &path!["StorageControllers"])
            .iter()
            .map(|ctrl| StorageController {
                name: get_text(ctrl, &path!["Name"]),
                model: get_text(ctrl, &path!["Model"]),
                description: get_text(ctrl, &path!["Description"]),
                supported_raid_types: get_string_list(ctrl, &path!["SupportedRAIDTypes"]),
            })
            .collect();

        Self {
            controllers,
            has_volumes: get_text(doc, &path!["Volumes", "@odata.id"]).is_some(),
        }
    }
}

/// `/redfish/v1/Systems/<sys>/Storage/<id>/Volumes/<vol>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VolumeResource {
    pub name: Option<String>,
    /// Any non-null `RAIDType`; non-string values keep their JSON text.
    pub raid_type: Option<String>,
    pub capacity_bytes: Option<Number>,
    pub drive_ids: Vec<String>,
}

impl VolumeResource {
    pub fn from_value(doc: &Value) -> Self {
        let drive_ids = get_array(doc, &path!["Links", "Drives"])
            .iter()
            .filter_map(|drive| last_segment(get_str(drive, &path!["@odata.id"])))
            .map(str::to_string)
            .collect();

        Self {
            name: get_text(doc, &path!["Name"]),
            raid_type: safe_get(doc, &path!["RAIDType"]).map(|raid| match raid {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            }),
            capacity_bytes: get_number(doc, &path!["CapacityBytes"]),
            drive_ids,
        }
    }
}

/// Bytes to GiB, rounded to two decimals.
pub fn bytes_to_gib(bytes: Option<&Number>) -> Option<f64> {
    const GIB: f64 = (1u64 << 30) as f64;
    bytes
        .and_then(Number::as_f64)
        .map(|b| (b / GIB * 100.0).round() / 100.0)
}
