use std::collections::HashMap;

use chrono::NaiveDate;

use super::DataFetcher;
use crate::{DisruptionRecord, FetchError, LineConnection, LineId, StationId, StationInfo};

/// Fetcher serving data that is already in memory.
///
/// Lines that were never added are reported as [`FetchError::UnknownLine`];
/// dates without disruptions yield an empty list.
#[derive(Debug, Clone, Default)]
pub struct StaticFetcher {
    lines: HashMap<LineId, Vec<LineConnection>>,
    stations: Vec<StationInfo>,
    disruptions: HashMap<NaiveDate, Vec<DisruptionRecord>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_line(mut self, line_id: LineId, connections: Vec<LineConnection>) -> Self {
        self.lines.insert(line_id, connections);
        self
    }

    pub fn with_station(mut self, station: StationInfo) -> Self {
        self.stations.push(station);
        self
    }

    pub fn with_disruptions(mut self, date: NaiveDate, records: Vec<DisruptionRecord>) -> Self {
        self.disruptions.entry(date).or_default().extend(records);
        self
    }
}

impl DataFetcher for StaticFetcher {
    fn fetch_line_connections(&self, line_id: LineId) -> Result<Vec<LineConnection>, FetchError> {
        self.lines
            .get(&line_id)
            .cloned()
            .ok_or(FetchError::UnknownLine(line_id))
    }

    fn fetch_station_info(&self, ids: &[StationId]) -> Result<Vec<StationInfo>, FetchError> {
        let mut stations: Vec<StationInfo> = self
            .stations
            .iter()
            .filter(|station| ids.is_empty() || ids.contains(&station.index))
            .cloned()
            .collect();
        stations.sort_by_key(|station| station.index);
        Ok(stations)
    }

    fn fetch_disruptions(&self, date: NaiveDate) -> Result<Vec<DisruptionRecord>, FetchError> {
        Ok(self.disruptions.get(&date).cloned().unwrap_or_default())
    }
}
