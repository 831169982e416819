//! Data model for the weighted transit network
//!
//! Contains the weight matrix graph, the rows delivered by the data
//! fetcher and typed disruptions.

pub mod disruption;
pub mod graph;
pub mod records;

pub use disruption::Disruption;
pub use graph::Graph;
pub use records::{AffectedStations, DisruptionRecord, LineConnection, StationInfo};
