use crate::{Error, Graph, LineConnection};

/// Builds the symmetric graph of a single line.
///
/// Records are applied in order, so when the same pair of stations appears
/// more than once the last record wins, whichever direction it is given in.
///
/// # Errors
///
/// Returns [`Error::MalformedRecord`] if a record names a station outside
/// `0..size`, connects a station to itself or has a negative or non-finite
/// travel time.
pub fn build_line_graph(connections: &[LineConnection], size: usize) -> Result<Graph, Error> {
    let mut graph = Graph::zeros(size);

    for (row, connection) in connections.iter().enumerate() {
        let LineConnection {
            station_a,
            station_b,
            travel_time,
        } = *connection;

        if station_a >= size || station_b >= size {
            return Err(Error::MalformedRecord(format!(
                "row {row}: connection {station_a} - {station_b} is outside of \
                 a network of {size} stations"
            )));
        }
        if station_a == station_b {
            return Err(Error::MalformedRecord(format!(
                "row {row}: station {station_a} is connected to itself"
            )));
        }
        if !travel_time.is_finite() || travel_time < 0.0 {
            return Err(Error::MalformedRecord(format!(
                "row {row}: invalid travel time {travel_time} between {station_a} and {station_b}"
            )));
        }

        graph.set_edge(station_a, station_b, travel_time)?;
    }

    Ok(graph)
}
