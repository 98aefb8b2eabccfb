use std::path::Path;

use serde::Serialize;

use crate::cli::ReportCommands;
use redfish_report::output::{print_reports, OutputFormat};
use redfish_report::redfish::{collect_all, HostDir, Snapshot};
use redfish_report::reports::{
    collect_device_type,
    collect_fan_metrics,
    collect_power_metrics,
    collect_temperature_info,
    collect_raid_info,
    TextReport,
};

pub fn handle_report_command(
    cmd: &ReportCommands,
    root: &Path,
    jobs: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = Snapshot::open(root)?;
    let hosts = snapshot.hosts()?;

    match cmd {
        ReportCommands::DeviceType { format } => run(&hosts, jobs, collect_device_type, *format),
        ReportCommands::Fans { format } => run(&hosts, jobs, collect_fan_metrics, *format),
        ReportCommands::Power { format } => run(&hosts, jobs, collect_power_metrics, *format),
        ReportCommands::Temperature { format } => run(&hosts, jobs, collect_temperature_info, *format),
        ReportCommands::Raid { format } => run(&hosts, jobs, collect_raid_info, *format),
    }
}

fn run<R, F>(
    hosts: &[HostDir],
    jobs: usize,
    collect: F,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>>
where
    R: Serialize + TextReport + Send,
    F: Fn(&HostDir) -> R + Sync,
{
    let records = collect_all(hosts, jobs, collect);
    print_reports(&records, format)
}
