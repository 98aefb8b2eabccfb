use std::path::PathBuf;

use clap::{Parser, Subcommand};

use redfish_report::output::OutputFormat;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "redfish-report")]
#[command(about = "Fleet inventory reports from offline Redfish snapshot dumps")]
pub struct Cli {
    /// Snapshot root holding <datacenter>/<hostname>/ directories
    #[arg(
        short,
        long,
        env = "REDFISH_DUMP_ROOT",
        default_value = "data/redfish-dump-2025-12-17"
    )]
    pub root: PathBuf,

    /// Number of hosts processed in parallel (output order is unaffected)
    #[arg(short, long, default_value = "1")]
    pub jobs: usize,

    /// Log skipped resources and scan details to stderr
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: ReportCommands,
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Chassis type, manufacturer, model and serial number per chassis
    DeviceType {
        /// Output format (pretty, json or yaml)
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
    /// Fan RPM readings from each chassis Thermal resource
    Fans {
        /// Output format (pretty, json or yaml)
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
    /// Power consumption from the first chassis exposing a Power resource
    Power {
        /// Output format (pretty, json or yaml)
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
    /// Temperature sensor readings from each chassis Thermal resource
    Temperature {
        /// Output format (pretty, json or yaml)
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
    /// Hardware RAID capability and configured volumes
    Raid {
        /// Output format (pretty, json or yaml)
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
}
