use crate::redfish::loader::HostDir;
use crate::redfish::resources::{ChassisDetail, PowerControl, ServiceRoot};
use crate::redfish::walk::{load_power, walk_chassis, WalkOutcome};
use crate::reports::types::PowerReport;
use crate::reports::{or_na, power_states_label, TextReport, NO_CHASSIS_INFO};

/// Power draw of a host.
///
/// Only the first chassis (in member order) with a usable `Power` resource
/// contributes metrics; later chassis are ignored even if they expose power data.
pub fn collect_power_metrics(host: &HostDir) -> PowerReport {
    let redfish_version = host
        .load(&["index.json"])
        .and_then(|doc| ServiceRoot::from_value(&doc).redfish_version);

    let mut captured: Option<(String, PowerControl)> = None;
    let walk = walk_chassis(host, &mut |host: &HostDir, chassis_id: &str, detail: &ChassisDetail| {
        if captured.is_some() {
            return;
        }
        if let Some(control) = load_power(host, chassis_id, detail) {
            captured = Some((chassis_id.to_string(), control));
        }
    });

    let message = match (walk.outcome, &captured) {
        (WalkOutcome::NoCollection, _) => NO_CHASSIS_INFO.to_string(),
        (WalkOutcome::NoMembers, _) => "No chassis members exposed via Redfish".to_string(),
        (WalkOutcome::Walked, Some((chassis_id, _))) => format!("Power metrics from chassis {}", chassis_id),
        (WalkOutcome::Walked, None) => "No power metrics exposed via Redfish".to_string(),
    };

    let mut power_states = walk.power_states;
    power_states.sort();

    let (metrics_chassis_id, control) = match captured {
        Some((chassis_id, control)) => (Some(chassis_id), control),
        None => (None, PowerControl::default()),
    };

    PowerReport {
        datacenter: host.datacenter.clone(),
        hostname: host.hostname.clone(),
        redfish_version,
        power_states,
        message,
        metrics_chassis_id,
        power_consumed_watts: control.power_consumed_watts,
        min_consumed_watts: control.min_consumed_watts,
        max_consumed_watts: control.max_consumed_watts,
        average_consumed_watts: control.average_consumed_watts,
    }
}

impl TextReport for PowerReport {
    fn text_lines(&self) -> Vec<String> {
        vec![format!(
            "[{}] [{}] {}/{}: PowerConsumedWatts={}, MinConsumedWatts={}, MaxConsumedWatts={}, AverageConsumedWatts={}",
            or_na(&self.redfish_version),
            power_states_label(&self.power_states),
            self.datacenter,
            self.hostname,
            or_na(&self.power_consumed_watts),
            or_na(&self.min_consumed_watts),
            or_na(&self.max_consumed_watts),
            or_na(&self.average_consumed_watts),
        )]
    }
}
