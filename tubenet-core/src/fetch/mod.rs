//! Access to the remote network data service.
//!
//! The graph assembly only depends on the [`DataFetcher`] trait; transport
//! and payload formats live behind it.

mod http;
mod memory;
pub mod parser;

pub use http::HttpFetcher;
pub use memory::StaticFetcher;

use chrono::NaiveDate;

use crate::{DisruptionRecord, FetchError, LineConnection, LineId, StationId, StationInfo};

pub trait DataFetcher {
    /// Direct connections of one line
    fn fetch_line_connections(&self, line_id: LineId) -> Result<Vec<LineConnection>, FetchError>;

    /// Station details, sorted by station index
    fn fetch_station_info(&self, ids: &[StationId]) -> Result<Vec<StationInfo>, FetchError>;

    /// Disruptions active on `date`
    fn fetch_disruptions(&self, date: NaiveDate) -> Result<Vec<DisruptionRecord>, FetchError>;
}
