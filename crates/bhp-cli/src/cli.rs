//! Command-line definition

use bhp_estimator::market::Timeframe;
use bhp_estimator::{MetricKind, PropertyType, DEFAULT_MODEL, MAX_HISTORY_MONTHS};
use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;
use std::str::FromStr;

/// Months shown by a bare `--history`
const DEFAULT_HISTORY: &str = "6";

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON")
}

fn history_arg() -> Arg {
    Arg::new("history")
        .long("history")
        .num_args(0..=1)
        .default_missing_value(DEFAULT_HISTORY)
        .value_parser(value_parser!(u8).range(1..=i64::from(MAX_HISTORY_MONTHS)))
        .help("Include an illustrative price history of N months (1-12)")
}

fn property_args() -> [Arg; 4] {
    [
        Arg::new("area")
            .long("area")
            .default_value("1200")
            .value_parser(value_parser!(f64))
            .help("Built-up area in sq.ft"),
        Arg::new("location")
            .long("location")
            .required(true)
            .help("Locality name"),
        Arg::new("bedrooms")
            .long("bedrooms")
            .default_value("2")
            .value_parser(value_parser!(u8))
            .help("Number of bedrooms (1-5)"),
        Arg::new("bathrooms")
            .long("bathrooms")
            .default_value("2")
            .value_parser(value_parser!(u8))
            .help("Number of bathrooms (1-4)"),
    ]
}

/// Build the `bhp` command
#[must_use]
pub fn build_cli() -> Command {
    Command::new("bhp")
        .version(bhp_estimator::VERSION)
        .about("Bangalore housing price estimation")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Settings file (defaults to ./bhp.toml when present)"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON"),
        )
        .subcommand(
            Command::new("estimate")
                .about("Estimate a price with the local heuristic")
                .args(property_args())
                .arg(
                    Arg::new("property-type")
                        .long("property-type")
                        .default_value(PropertyType::default().as_str())
                        .value_parser(PropertyType::from_str)
                        .help("Apartment, Villa, Independent House, Builder Floor or Plot"),
                )
                .arg(
                    Arg::new("model")
                        .long("model")
                        .default_value(DEFAULT_MODEL)
                        .help("Model name"),
                )
                .arg(
                    Arg::new("breakdown")
                        .long("breakdown")
                        .action(ArgAction::SetTrue)
                        .help("Show resolved factors and components"),
                )
                .arg(history_arg())
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("predict")
                .about("Ask the prediction service for a price")
                .args(property_args())
                .arg(history_arg())
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("locations")
                .about("List localities known to the prediction service")
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("metadata")
                .about("Show metadata of the served model")
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("metrics")
                .about("Show accuracy of the trained models")
                .arg(
                    Arg::new("rank-by")
                        .long("rank-by")
                        .default_value(MetricKind::CvR2Mean.as_str())
                        .value_parser(MetricKind::from_str)
                        .help("mae, rmse, r2, cv-r2-mean or cv-r2-std"),
                )
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("market")
                .about("Show market overview")
                .arg(
                    Arg::new("timeframe")
                        .long("timeframe")
                        .default_value(Timeframe::default().as_str())
                        .value_parser(Timeframe::from_str)
                        .help("Trend window: 3m, 6m or 1y"),
                )
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("compare")
                .about("Compare two localities or property types")
                .arg(Arg::new("first").required(true))
                .arg(Arg::new("second").required(true))
                .arg(
                    Arg::new("property-types")
                        .long("property-types")
                        .action(ArgAction::SetTrue)
                        .help("Compare property types instead of localities"),
                )
                .arg(json_flag()),
        )
}
