use crate::redfish::loader::HostDir;
use crate::redfish::resources::ChassisDetail;
use crate::redfish::walk::{load_thermal, walk_chassis, WalkOutcome};
use crate::reports::types::{FanInfo, FanReport};
use crate::reports::{or_na, power_states_label, TextReport, NO_CHASSIS_INFO};

/// Fan readings from the Thermal resource of every chassis.
pub fn collect_fan_metrics(host: &HostDir) -> FanReport {
    let mut fans = Vec::new();
    let walk = walk_chassis(host, &mut |host: &HostDir, chassis_id: &str, detail: &ChassisDetail| {
        let Some(thermal) = load_thermal(host, chassis_id, detail) else {
            return;
        };
        fans.extend(thermal.fans.into_iter().map(|fan| FanInfo {
            chassis_id: chassis_id.to_string(),
            name: fan.name,
            reading_rpm: fan.reading,
        }));
    });

    let message = match walk.outcome {
        WalkOutcome::NoCollection => NO_CHASSIS_INFO.to_string(),
        WalkOutcome::NoMembers => "No chassis members exposed via Redfish".to_string(),
        WalkOutcome::Walked if fans.is_empty() => "No fan information available".to_string(),
        WalkOutcome::Walked => format!("Found {} fan(s)", fans.len()),
    };

    FanReport {
        datacenter: host.datacenter.clone(),
        hostname: host.hostname.clone(),
        power_states: walk.power_states,
        message,
        fans,
    }
}

impl TextReport for FanReport {
    fn text_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "[{}] {}/{}: {}",
            power_states_label(&self.power_states),
            self.datacenter,
            self.hostname,
            self.message
        )];
        for fan in &self.fans {
            lines.push(format!(
                "  [{}] {}: {} RPM",
                fan.chassis_id,
                or_na(&fan.name),
                or_na(&fan.reading_rpm)
            ));
        }
        lines
    }
}
