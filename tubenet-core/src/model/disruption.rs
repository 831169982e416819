//! Typed disruptions and their effect on a line graph

use std::collections::BTreeSet;

use super::{DisruptionRecord, Graph};
use crate::{Error, LineId, StationId, Weight};

/// A validated disruption on one line.
///
/// A record naming exactly two distinct stations is an [`Disruption::Edge`]
/// and only scales the direct connection between them. This holds even when
/// the stations are not directly connected on the line, in which case the
/// disruption has no effect. Any other number of stations is a
/// [`Disruption::Station`] scaling every connection through each station.
#[derive(Debug, Clone, PartialEq)]
pub enum Disruption {
    Edge {
        line_id: LineId,
        station_a: StationId,
        station_b: StationId,
        delay_factor: Weight,
    },
    Station {
        line_id: LineId,
        stations: BTreeSet<StationId>,
        delay_factor: Weight,
    },
}

impl Disruption {
    /// Validates a raw record against a network of `size` stations.
    ///
    /// Returns `Ok(None)` for records without a line, which can never apply
    /// to any line graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedRecord`] if a station is out of range or the
    /// delay factor is negative or not finite.
    pub fn from_record(record: &DisruptionRecord, size: usize) -> Result<Option<Self>, Error> {
        let Some(line_id) = record.line_id else {
            log::warn!("Ignoring disruption without a line: {record:?}");
            return Ok(None);
        };

        let delay_factor = record.delay_factor;
        if !delay_factor.is_finite() || delay_factor < 0.0 {
            return Err(Error::MalformedRecord(format!(
                "disruption on line {line_id} has invalid delay factor {delay_factor}"
            )));
        }

        let stations: BTreeSet<StationId> = record.affected.as_slice().iter().copied().collect();
        if let Some(&station) = stations.iter().find(|&&s| s >= size) {
            return Err(Error::MalformedRecord(format!(
                "disruption on line {line_id} names station {station}, \
                 network has {size} stations"
            )));
        }

        let ordered: Vec<StationId> = stations.iter().copied().collect();
        let disruption = if let [station_a, station_b] = ordered[..] {
            Disruption::Edge {
                line_id,
                station_a,
                station_b,
                delay_factor,
            }
        } else {
            Disruption::Station {
                line_id,
                stations,
                delay_factor,
            }
        };
        Ok(Some(disruption))
    }

    pub fn line_id(&self) -> LineId {
        match self {
            Disruption::Edge { line_id, .. } | Disruption::Station { line_id, .. } => *line_id,
        }
    }

    pub fn delay_factor(&self) -> Weight {
        match self {
            Disruption::Edge { delay_factor, .. } | Disruption::Station { delay_factor, .. } => {
                *delay_factor
            }
        }
    }

    pub fn is_edge_disruption(&self) -> bool {
        matches!(self, Disruption::Edge { .. })
    }

    /// Scales the affected weights of `graph` in place.
    ///
    /// The caller is responsible for only applying disruptions to the graph
    /// of the line they belong to.
    pub fn apply_to(&self, graph: &mut Graph) -> Result<(), Error> {
        match self {
            Disruption::Edge {
                station_a,
                station_b,
                delay_factor,
                ..
            } => {
                if graph.weight(*station_a, *station_b) == Some(0.0) {
                    log::debug!(
                        "Disruption between unconnected stations {station_a} and {station_b} \
                         on line {} has no effect",
                        self.line_id()
                    );
                }
                graph.scale_edge(*station_a, *station_b, *delay_factor)
            }
            Disruption::Station {
                stations,
                delay_factor,
                ..
            } => stations
                .iter()
                .try_for_each(|&station| graph.scale_incident(station, *delay_factor)),
        }
    }
}
