mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use commands::handle_report_command;
use redfish_report::output::print_error;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .init();

    let result = handle_report_command(&cli.command, &cli.root, cli.jobs);

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
