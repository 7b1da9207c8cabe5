use crate::report::{run_fleet_report, FleetReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use fleet_compliance::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Fleet Compliance",
    about = "Track vehicle paperwork and serve the fleet compliance API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Offline fleet tooling
    Fleet {
        #[command(subcommand)]
        command: FleetCommand,
    },
}

#[derive(Subcommand, Debug)]
enum FleetCommand {
    /// Print the compliance report for a JSON fleet export
    Report(FleetReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Fleet {
            command: FleetCommand::Report(args),
        } => run_fleet_report(args),
    }
}
