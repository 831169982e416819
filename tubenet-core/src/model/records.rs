//! Rows delivered by the data fetcher

use serde::{Deserialize, Serialize};

use crate::{LineId, StationId, Weight};

/// Direct connection between two stations on one line
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct LineConnection {
    pub station_a: StationId,
    pub station_b: StationId,
    /// Nominal travel time between the two stations
    pub travel_time: Weight,
}

impl LineConnection {
    pub fn new(station_a: StationId, station_b: StationId, travel_time: Weight) -> Self {
        LineConnection {
            station_a,
            station_b,
            travel_time,
        }
    }
}

impl From<(StationId, StationId, Weight)> for LineConnection {
    fn from((station_a, station_b, travel_time): (StationId, StationId, Weight)) -> Self {
        LineConnection::new(station_a, station_b, travel_time)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StationInfo {
    #[serde(rename = "station name")]
    pub name: String,
    #[serde(rename = "station index")]
    pub index: StationId,
    pub latitude: f64,
    pub longitude: f64,
}

/// Disruption as published by the disruption service, before validation
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DisruptionRecord {
    #[serde(rename = "line")]
    pub line_id: Option<LineId>,
    #[serde(rename = "stations", default)]
    pub affected: AffectedStations,
    #[serde(rename = "delay", default)]
    pub delay_factor: Weight,
}

impl DisruptionRecord {
    pub fn new(line_id: LineId, affected: Vec<StationId>, delay_factor: Weight) -> Self {
        DisruptionRecord {
            line_id: Some(line_id),
            affected: AffectedStations::Many(affected),
            delay_factor,
        }
    }
}

/// The service sends either a single station index or a list of them
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AffectedStations {
    One(StationId),
    Many(Vec<StationId>),
}

impl Default for AffectedStations {
    fn default() -> Self {
        AffectedStations::Many(Vec::new())
    }
}

impl AffectedStations {
    pub fn as_slice(&self) -> &[StationId] {
        match self {
            AffectedStations::One(station) => std::slice::from_ref(station),
            AffectedStations::Many(stations) => stations,
        }
    }
}
