use crate::redfish::loader::HostDir;
use crate::redfish::resources::bytes_to_gib;
use crate::redfish::walk::{walk_storage, StorageWalk, WalkOutcome};
use crate::reports::types::{ControllerInfo, RaidReport, VolumeInfo};
use crate::reports::{or_dash, TextReport};

pub const NO_SYSTEMS_INFO: &str = "No systems info exposed via Redfish";
pub const NO_STORAGE_INFO: &str = "No storage info exposed via Redfish";

/// Hardware RAID capability and configuration of the host's first system.
pub fn collect_raid_info(host: &HostDir) -> RaidReport {
    let walk = walk_storage(host);

    let mut report = RaidReport {
        datacenter: host.datacenter.clone(),
        hostname: host.hostname.clone(),
        raid_detected: false,
        raid_capable: false,
        message: String::new(),
        controllers: Vec::new(),
        volumes: Vec::new(),
    };

    if walk.system_outcome != WalkOutcome::Walked {
        report.message = NO_SYSTEMS_INFO.to_string();
        return report;
    }
    if walk.storage_outcome != WalkOutcome::Walked {
        report.message = NO_STORAGE_INFO.to_string();
        return report;
    }

    fill_from_walk(&mut report, walk);
    report.message = classify(report.raid_detected, report.raid_capable, !report.volumes.is_empty()).to_string();
    report
}

fn fill_from_walk(report: &mut RaidReport, walk: StorageWalk) {
    for controller in walk.controllers {
        report.raid_capable |= controller.is_raid_capable();
        report.controllers.push(ControllerInfo {
            name: controller.display_name(),
            model: controller.model,
            supported_raid_types: controller.supported_raid_types,
        });
    }

    for entry in walk.volumes {
        let volume = entry.volume;
        // the last volume decides, not any volume
        report.raid_detected = volume.raid_type.is_some();
        report.volumes.push(VolumeInfo {
            storage_id: entry.storage_id,
            name: volume.name,
            raid_type: volume.raid_type,
            capacity_gib: bytes_to_gib(volume.capacity_bytes.as_ref()),
            capacity_bytes: volume.capacity_bytes,
            drives: volume.drive_ids,
        });
    }
}

/// Summary message for a host, evaluated in order of precedence.
pub fn classify(raid_detected: bool, raid_capable: bool, has_volumes: bool) -> &'static str {
    match (raid_detected, raid_capable, has_volumes) {
        (true, _, _) => "Hardware RAID detected",
        (false, true, true) => "RAID-capable controller with volumes in HBA mode",
        (false, true, false) => "RAID supported but not configured",
        (false, false, _) => "No hardware RAID detected (possible HBA or software RAID)",
    }
}

/// `446.63` style capacity; whole numbers keep one decimal (`10.0`).
fn format_gib(gib: f64) -> String {
    format!("{:?}", gib)
}

impl TextReport for RaidReport {
    fn text_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "{}/{}: raid_detected={}, raid_capable={} --> {}",
            self.datacenter, self.hostname, self.raid_detected, self.raid_capable, self.message
        )];

        for controller in &self.controllers {
            let supported = if controller.supported_raid_types.is_empty() {
                "-".to_string()
            } else {
                controller.supported_raid_types.join(", ")
            };
            lines.push(format!("  controller: {} | supported: {}", controller.name, supported));
        }

        for volume in &self.volumes {
            let capacity = volume
                .capacity_gib
                .map_or_else(|| "NA".to_string(), |gib| format!("{} GiB", format_gib(gib)));
            let drives = if volume.drives.is_empty() {
                "-".to_string()
            } else {
                volume.drives.join(", ")
            };
            lines.push(format!(
                "  volume: {} | raid={} | capacity={} | drives=[{}]",
                or_dash(&volume.name),
                volume.raid_type.as_deref().unwrap_or("NA"),
                capacity,
                drives
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
    fn test_classify_precedence() {
        assert_eq!(classify(true, false, false), "Hardware RAID detected");
        assert_eq!(classify(true, true, true), "Hardware RAID detected");
        assert_eq!(classify(false, true, true), "RAID-capable controller with volumes in HBA mode");
        assert_eq!(classify(false, true, false), "RAID supported but not configured");
        assert_eq!(
            classify(false, false, true),
            "No hardware RAID detected (possible HBA or software RAID)"
        );
    }

    #[test]
    fn test_format_gib() {
        assert_eq!(format_gib(10.0), "10.0");
        assert_eq!(format_gib(0.0), "0.0");
        assert_eq!(format_gib(465.66), "465.66");
    }

    #[test]
    fn test_text_lines() {
        let report = RaidReport {
            datacenter: "dc1".into(),
            hostname: "node-01".into(),
            raid_detected: true,
            raid_capable: true,
            message: "Hardware RAID detected".into(),
            controllers: vec![
                ControllerInfo {
                    name: "PERC H755 Front".into(),
                    model: Some("PERC H755 Front".into()),
                    supported_raid_types: vec!["RAID0".into(), "RAID1".into()],
                },
                ControllerInfo {
                    name: "Controller".into(),
                    model: None,
                    supported_raid_types: vec![],
                },
            ],
            volumes: vec![
                VolumeInfo {
                    storage_id: "RAID.SL.3-1".into(),
                    name: Some("OS".into()),
                    raid_type: Some("RAID1".into()),
                    capacity_bytes: Some(Number::from(10_737_418_240u64)),
                    capacity_gib: Some(10.0),
                    drives: vec!["Disk.Bay.0".into(), "Disk.Bay.1".into()],
                },
                VolumeInfo {
                    storage_id: "RAID.SL.3-1".into(),
                    name: None,
                    raid_type: None,
                    capacity_bytes: None,
                    capacity_gib: None,
                    drives: vec![],
                },
            ],
        };

        assert_eq!(
            report.text_lines(),
            vec![
                "dc1/node-01: raid_detected=true, raid_capable=true --> Hardware RAID detected",
                "  controller: PERC H755 Front | supported: RAID0, RAID1",
                "  controller: Controller | supported: -",
                "  volume: OS | raid=RAID1 | capacity=10.0 GiB | drives=[Disk.Bay.0, Disk.Bay.1]",
                "  volume: - | raid=NA | capacity=NA | drives=[-]",
            ]
        );
    }
}
