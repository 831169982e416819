//! This module is responsible for turning fetched line and disruption data
//! into weighted network graphs.

mod config;
mod date;
mod line_builder;
mod realtime;

pub use config::{DEFAULT_BASE_URL, DEFAULT_LINE_COUNT, DEFAULT_STATION_COUNT, NetworkConfig};
pub use date::{parse_query_date, resolve_query_date};
pub use line_builder::build_line_graph;
pub use realtime::{build_line_network, build_realtime_network};
