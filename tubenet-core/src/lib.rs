//! Real-time weighted transit network construction.
//!
//! Each line of the network is loaded as a symmetric weight matrix, the
//! disruptions active on a given date are applied to the line they belong
//! to, and the adjusted line graphs are summed into a single network graph.

mod error;
pub mod fetch;
pub mod loading;
pub mod model;
pub mod prelude;

pub use error::{Error, FetchError};
pub use fetch::{DataFetcher, HttpFetcher, StaticFetcher};
pub use loading::{
    NetworkConfig, build_line_graph, build_line_network, build_realtime_network,
    parse_query_date, resolve_query_date,
};
pub use model::{Disruption, DisruptionRecord, Graph, LineConnection, StationInfo};

/// 0-based index of a station within the network universe
pub type StationId = usize;
/// Identifier of a transit line
pub type LineId = usize;
/// Travel time between two directly connected stations
pub type Weight = f64;
