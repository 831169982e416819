use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tubenet_core::prelude::*;

use crate::output::GraphSummary;

/// command line tool building weighted transit networks from the network
/// data service
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TubenetCliArguments {
    /// TOML file with network settings, defaults are used when omitted
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
    /// select the operation to run
    #[command(subcommand)]
    pub op: TubenetOperation,
}

impl TubenetCliArguments {
    pub fn load_config(&self) -> Result<NetworkConfig, String> {
        match &self.config {
            Some(path) => NetworkConfig::from_toml_file(path)
                .map_err(|e| format!("failed to load {}: {e}", path.display())),
            None => Ok(NetworkConfig::default()),
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum TubenetOperation {
    /// builds the network of all lines with the disruptions of a date applied
    Network {
        /// date in YYYY-MM-DD format, today when omitted or outside
        /// of the service's date range
        #[arg(short, long)]
        date: Option<String>,
        /// fetch lines in parallel
        #[arg(short, long)]
        parallel: bool,
    },
    /// builds the nominal graph of a single line
    Line {
        /// line identifier, the configured default line when omitted
        #[arg(short, long)]
        line_id: Option<LineId>,
    },
    /// lists station names and locations
    Stations {
        /// station indices, station 0 when omitted
        ids: Vec<StationId>,
    },
    /// lists the disruptions active on a date
    Disruptions {
        /// date in YYYY-MM-DD format, today when omitted or outside
        /// of the service's date range
        #[arg(short, long)]
        date: Option<String>,
    },
}

impl TubenetOperation {
    /// Runs the operation and renders its result as pretty JSON.
    ///
    /// `today` is the fallback for missing or rejected dates.
    pub fn run<F>(
        &self,
        fetcher: &F,
        config: &NetworkConfig,
        today: NaiveDate,
    ) -> Result<String, String>
    where
        F: DataFetcher + Sync + ?Sized,
    {
        match self {
            TubenetOperation::Network { date, parallel } => {
                let date = resolve_query_date(date.as_deref(), today, config);
                let config = NetworkConfig {
                    parallel_fetch: config.parallel_fetch || *parallel,
                    ..config.clone()
                };
                let network = build_realtime_network(fetcher, date, &config)
                    .map_err(|e| format!("failed building network for {date}: {e}"))?;
                to_json(&GraphSummary::from(&network))
            }
            TubenetOperation::Line { line_id } => {
                let line_id = line_id.unwrap_or(config.default_line);
                let graph = build_line_network(fetcher, line_id, config)
                    .map_err(|e| format!("failed building line {line_id}: {e}"))?;
                to_json(&GraphSummary::from(&graph))
            }
            TubenetOperation::Stations { ids } => {
                let ids: &[StationId] = if ids.is_empty() { &[0] } else { ids.as_slice() };
                let stations = fetcher
                    .fetch_station_info(ids)
                    .map_err(|e| format!("failed fetching stations {ids:?}: {e}"))?;
                to_json(&stations)
            }
            TubenetOperation::Disruptions { date } => {
                let date = resolve_query_date(date.as_deref(), today, config);
                let disruptions = fetcher
                    .fetch_disruptions(date)
                    .map_err(|e| format!("failed fetching disruptions for {date}: {e}"))?;
                to_json(&disruptions)
            }
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("failed to serialize output: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 2, 1).unwrap()
    }

    fn config() -> NetworkConfig {
        NetworkConfig {
            station_count: 3,
            line_count: 2,
            ..NetworkConfig::default()
        }
    }

    fn fetcher() -> StaticFetcher {
        StaticFetcher::new()
            .with_line(0, vec![LineConnection::new(0, 1, 5.0)])
            .with_line(1, vec![LineConnection::new(1, 2, 2.0)])
            .with_station(StationInfo {
                name: "Acton Town".to_string(),
                index: 0,
                latitude: 51.5028,
                longitude: -0.2801,
            })
            .with_disruptions(today(), vec![DisruptionRecord::new(1, vec![2], 3.0)])
    }

    fn run(args: &[&str]) -> Result<serde_json::Value, String> {
        let cli = TubenetCliArguments::try_parse_from(args).map_err(|e| e.to_string())?;
        let text = cli.op.run(&fetcher(), &config(), today())?;
        serde_json::from_str(&text).map_err(|e| e.to_string())
    }

    #[test]
    fn network_uses_today_for_rejected_dates() {
        let json = run(&["tubenet", "network", "--date", "1999-01-01"]).unwrap();
        assert_eq!(json["size"], 3);
        assert_eq!(json["edge_count"], 2);
        assert_eq!(json["total_weight"], 11.0);
        assert_eq!(json["edges"][1]["weight"], 6.0);
    }

    #[test]
    fn network_for_quiet_date_is_nominal() {
        let json = run(&["tubenet", "network", "--date", "2023-02-02", "--parallel"]).unwrap();
        assert_eq!(json["total_weight"], 7.0);
    }

    #[test]
    fn line_defaults_to_configured_line() {
        let json = run(&["tubenet", "line"]).unwrap();
        assert_eq!(json["edges"][0]["a"], 0);
        assert_eq!(json["edges"][0]["b"], 1);
        assert_eq!(json["edges"][0]["weight"], 5.0);

        let err = run(&["tubenet", "line", "--line-id", "5"]).unwrap_err();
        assert!(err.contains("line 5"), "{err}");
    }

    #[test]
    fn stations_default_to_station_zero() {
        let json = run(&["tubenet", "stations"]).unwrap();
        assert_eq!(json[0]["station name"], "Acton Town");
        assert_eq!(json[0]["station index"], 0);
    }

    #[test]
    fn disruptions_are_listed_for_today() {
        let json = run(&["tubenet", "disruptions"]).unwrap();
        assert_eq!(json[0]["line"], 1);
        assert_eq!(json[0]["stations"][0], 2);
        assert_eq!(json[0]["delay"], 3.0);
    }

    #[test]
    fn missing_config_file_is_reported() {
        let cli = TubenetCliArguments::try_parse_from([
            "tubenet",
            "--config",
            "/nonexistent/tubenet.toml",
            "line",
        ])
        .unwrap();
        assert!(cli.load_config().is_err());
    }
}
