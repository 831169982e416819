// Re-export key components
pub use crate::fetch::{DataFetcher, HttpFetcher, StaticFetcher};
pub use crate::loading::{
    NetworkConfig, build_line_graph, build_line_network, build_realtime_network,
    resolve_query_date,
};
pub use crate::model::{Disruption, DisruptionRecord, Graph, LineConnection, StationInfo};
pub use crate::{Error, FetchError};

// Core index and weight types
pub use crate::LineId;
pub use crate::StationId;
pub use crate::Weight;
