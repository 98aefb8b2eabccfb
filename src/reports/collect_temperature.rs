use crate::redfish::loader::HostDir;
use crate::redfish::resources::ChassisDetail;
use crate::redfish::walk::{load_thermal, walk_chassis, WalkOutcome};
use crate::reports::types::{TemperatureInfo, TemperatureReport};
use crate::reports::{or_dash, or_na, power_states_label, TextReport, NO_CHASSIS_INFO};

/// Temperature sensor readings from the Thermal resource of every chassis.
pub fn collect_temperature_info(host: &HostDir) -> TemperatureReport {
    let mut temperatures = Vec::new();
    let walk = walk_chassis(host, &mut |host: &HostDir, chassis_id: &str, detail: &ChassisDetail| {
        let Some(thermal) = load_thermal(host, chassis_id, detail) else {
            return;
        };
        temperatures.extend(thermal.temperatures.into_iter().map(|sensor| TemperatureInfo {
            chassis_id: chassis_id.to_string(),
            name: sensor.name,
            reading_celsius: sensor.reading_celsius,
            physical_context: sensor.physical_context,
        }));
    });

    let message = match walk.outcome {
        WalkOutcome::NoCollection => NO_CHASSIS_INFO.to_string(),
        WalkOutcome::NoMembers => "No chassis members exposed via Redfish".to_string(),
        WalkOutcome::Walked if temperatures.is_empty() => "No temperature sensors found".to_string(),
        WalkOutcome::Walked => format!("Found {} temperature sensor(s)", temperatures.len()),
    };

    TemperatureReport {
        datacenter: host.datacenter.clone(),
        hostname: host.hostname.clone(),
        power_states: walk.power_states,
        message,
        temperatures,
    }
}

impl TextReport for TemperatureReport {
    fn text_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "[{}] {}/{}: {}",
            power_states_label(&self.power_states),
            self.datacenter,
            self.hostname,
            self.message
        )];
        for sensor in &self.temperatures {
            lines.push(format!(
                "  [{}] {}: {}°C (Context: {})",
                sensor.chassis_id,
                or_dash(&sensor.name),
                or_na(&sensor.reading_celsius),
                or_dash(&sensor.physical_context)
            ));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Number;

    #[test]
    fn test_text_lines() {
        let report = TemperatureReport {
            datacenter: "dc2".into(),
            hostname: "gpu-07".into(),
            power_states: vec![],
            message: "Found 2 temperature sensor(s)".into(),
            temperatures: vec![
                TemperatureInfo {
                    chassis_id: "1".into(),
                    name: Some("CPU1 Temp".into()),
                    reading_celsius: Number::from_f64(54.5),
                    physical_context: Some("CPU".into()),
                },
                TemperatureInfo {
                    chassis_id: "1".into(),
                    name: None,
                    reading_celsius: None,
                    physical_context: None,
                },
            ],
        };

        assert_eq!(
            report.text_lines(),
            vec![
                "[NA] dc2/gpu-07: Found 2 temperature sensor(s)",
                "  [1] CPU1 Temp: 54.5°C (Context: CPU)",
                "  [1] -: NA°C (Context: -)",
            ]
        );
    }
}
