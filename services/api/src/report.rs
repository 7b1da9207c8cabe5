use crate::infra::load_fleet_file;
use chrono::{Local, NaiveDate};
use clap::Args;
use fleet_compliance::error::AppError;
use fleet_compliance::fleet::fleet_report;
use fleet_compliance::telemetry;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct FleetReportArgs {
    /// JSON file containing an array of vehicles
    #[arg(long)]
    fleet: PathBuf,
    /// Evaluation date for the report (defaults to today)
    #[arg(long, value_parser = parse_date_arg)]
    today: Option<NaiveDate>,
}

fn parse_date_arg(raw: &str) -> Result<NaiveDate, String> {
    fleet_compliance::fleet::domain::parse_date(raw)
}

pub(crate) fn run_fleet_report(args: FleetReportArgs) -> Result<(), AppError> {
    let config = fleet_compliance::config::AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let vehicles = load_fleet_file(&args.fleet)?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let report = fleet_report(&vehicles, today);
    info!(
        vehicles = report.vehicles_evaluated,
        alerts = report.alerts.len(),
        "fleet compliance report generated"
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_compliance::fleet::Vehicle;

    const FLEET: &str = r#"[
        {
            "id": "veh-1",
            "plate": "1234ABC",
            "brand": "Ford",
            "model": "Transit",
            "year": 2021,
            "status": "Disponible",
            "visibility": "Visible",
            "next_inspection": "2025-11-02",
            "documents": {
                "basic": [
                    {"name": "Permiso de Circulación", "file_reference": "pc.pdf", "upload_date": "2025-01-10"},
                    {"name": "Póliza", "file_reference": "poliza.pdf", "upload_date": "2025-01-10", "expiration_date": "2025-05-01"}
                ]
            }
        }
    ]"#;

    #[test]
    fn report_flags_expired_and_missing_mandatory_documents() {
        let vehicles: Vec<Vehicle> = serde_json::from_str(FLEET).expect("fleet parses");
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date");

        let report = fleet_report(&vehicles, today);
        assert_eq!(report.vehicles_evaluated, 1);
        let alert = &report.alerts[0];
        assert_eq!(alert.expired, 1);
        assert_eq!(alert.missing_mandatory, vec!["Ficha Técnica", "Recibo de Seguro"]);
    }

    #[test]
    fn date_arguments_use_iso_format() {
        assert!(parse_date_arg("2025-06-01").is_ok());
        assert!(parse_date_arg("01/06/2025").is_err());
    }
}
