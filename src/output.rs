use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use crate::reports::TextReport;

/// Output format for report commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One summary line per host plus indented detail lines
    #[default]
    Pretty,
    Json,
    Yaml,
}

pub fn output_reports<T, W>(records: &[T], format: OutputFormat, out: &mut W) -> Result<(), Box<dyn std::error::Error>>
where
    T: Serialize + TextReport,
    W: Write,
{
    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(records)?)?;
        }
        OutputFormat::Yaml => {
            write!(out, "{}", serde_yaml::to_string(records)?)?;
        }
        OutputFormat::Pretty => {
            for line in records.iter().flat_map(|record| record.text_lines()) {
                writeln!(out, "{}", line)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

/// Write records to stdout.
pub fn print_reports<T>(records: &[T], format: OutputFormat) -> Result<(), Box<dyn std::error::Error>>
where
    T: Serialize + TextReport,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    output_reports(records, format, &mut out)
}

pub fn print_error(message: &str) {
    eprintln!("\x1b[31m❌ Error: {}\x1b[0m", message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::types::FanReport;

    fn record() -> FanReport {
        FanReport {
            datacenter: "dc1".into(),
            hostname: "node-01".into(),
            power_states: vec![],
            message: "No fan information available".into(),
            fans: vec![],
        }
    }

    #[test]
    fn test_pretty_output() {
        let mut buf = Vec::new();
        output_reports(&[record(), record()], OutputFormat::Pretty, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "[NA] dc1/node-01: No fan information available\n\
             [NA] dc1/node-01: No fan information available\n"
        );
    }

    #[test]
    fn test_json_output_keeps_absent_values_null() {
        let mut buf = Vec::new();
        output_reports(&[record()], OutputFormat::Json, &mut buf).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed[0]["hostname"], "node-01");
        assert_eq!(parsed[0]["fans"], serde_json::json!([]));
    }

    #[test]
    fn test_yaml_output() {
        let mut buf = Vec::new();
        output_reports(&[record()], OutputFormat::Yaml, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("hostname: node-01"));
    }
}
