use crate::redfish::loader::HostDir;
use crate::redfish::resources::ChassisDetail;
use crate::redfish::walk::{walk_chassis, WalkOutcome};
use crate::reports::types::{ChassisInfo, DeviceTypeReport};
use crate::reports::{or_unknown, TextReport, NO_CHASSIS_INFO};

/// Chassis identity (type, manufacturer, model, serial) for every chassis of a host.
pub fn collect_device_type(host: &HostDir) -> DeviceTypeReport {
    let mut chassis = Vec::new();
    let walk = walk_chassis(host, &mut |_: &HostDir, chassis_id: &str, detail: &ChassisDetail| {
        chassis.push(ChassisInfo {
            chassis_id: chassis_id.to_string(),
            chassis_type: detail.chassis_type.clone(),
            manufacturer: detail.manufacturer.clone(),
            model: detail.model.clone(),
            serial_number: detail.serial_number.clone(),
        });
    });

    let message = match walk.outcome {
        WalkOutcome::NoCollection => NO_CHASSIS_INFO.to_string(),
        WalkOutcome::NoMembers => "No chassis members found".to_string(),
        WalkOutcome::Walked if chassis.is_empty() => "No chassis details available".to_string(),
        WalkOutcome::Walked => {
            let types: Vec<&str> = chassis.iter().map(|c| or_unknown(&c.chassis_type)).collect();
            format!("found {} chassis: {}", chassis.len(), types.join(", "))
        }
    };

    DeviceTypeReport {
        datacenter: host.datacenter.clone(),
        hostname: host.hostname.clone(),
        message,
        chassis,
    }
}

impl TextReport for DeviceTypeReport {
    fn text_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("{}/{}: {}", self.datacenter, self.hostname, self.message)];
        lines.extend(self.chassis.iter().map(|c| {
            format!(
                "  [{}]: {} | {} (ChassisType: {}, S/N: {})",
                c.chassis_id,
                or_unknown(&c.manufacturer),
                or_unknown(&c.model),
                or_unknown(&c.chassis_type),
                or_unknown(&c.serial_number),
            )
        }));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_lines() {
        let report = DeviceTypeReport {
            datacenter: "dc1".into(),
            hostname: "node-01".into(),
            message: "found 2 chassis: RackMount, Unknown".into(),
            chassis: vec![
                ChassisInfo {
                    chassis_id: "System.Embedded.1".into(),
                    chassis_type: Some("RackMount".into()),
                    manufacturer: Some("Dell Inc.".into()),
                    model: Some("PowerEdge R750".into()),
                    serial_number: Some("ABC1234".into()),
                },
                ChassisInfo {
                    chassis_id: "Card.1".into(),
                    chassis_type: None,
                    manufacturer: None,
                    model: None,
                    serial_number: None,
                },
            ],
        };

        assert_eq!(
            report.text_lines(),
            vec![
                "dc1/node-01: found 2 chassis: RackMount, Unknown",
                "  [System.Embedded.1]: Dell Inc. | PowerEdge R750 (ChassisType: RackMount, S/N: ABC1234)",
                "  [Card.1]: Unknown | Unknown (ChassisType: Unknown, S/N: Unknown)",
            ]
        );
    }
}
