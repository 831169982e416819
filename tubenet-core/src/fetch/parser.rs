//! Parsers for the payloads served by the network data service

use crate::{DisruptionRecord, FetchError, LineConnection, StationId, StationInfo, Weight};

/// Parses headerless `station_a,station_b,travel_time` rows
pub fn parse_line_connections(text: &str) -> Result<Vec<LineConnection>, FetchError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    reader
        .deserialize::<(StationId, StationId, Weight)>()
        .map(|row| row.map(LineConnection::from).map_err(FetchError::from))
        .collect()
}

/// Parses station rows with a `station name,station index,latitude,longitude`
/// header, sorted by station index
pub fn parse_station_info(text: &str) -> Result<Vec<StationInfo>, FetchError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.trim().as_bytes());

    let mut stations = reader
        .deserialize::<StationInfo>()
        .collect::<Result<Vec<_>, _>>()?;
    stations.sort_by_key(|station| station.index);
    Ok(stations)
}

/// Parses the JSON list of disruption events
pub fn parse_disruptions(text: &str) -> Result<Vec<DisruptionRecord>, FetchError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AffectedStations;

    #[test]
    fn parses_line_rows() {
        let rows = parse_line_connections("0,1,5\n1, 2, 3\n2,7,1.5\n").unwrap();
        assert_eq!(
            rows,
            vec![
                LineConnection::new(0, 1, 5.0),
                LineConnection::new(1, 2, 3.0),
                LineConnection::new(2, 7, 1.5),
            ]
        );
        assert!(parse_line_connections("").unwrap().is_empty());
    }

    #[test]
    fn bad_line_rows_are_errors() {
        assert!(matches!(
            parse_line_connections("0,1,5\n1,x,3\n"),
            Err(FetchError::Csv(_))
        ));
        assert!(matches!(
            parse_line_connections("0,-1,5\n"),
            Err(FetchError::Csv(_))
        ));
        assert!(matches!(
            parse_line_connections("0,1\n"),
            Err(FetchError::Csv(_))
        ));
    }

    #[test]
    fn parses_and_sorts_stations() {
        let text = "\
station name,station index,latitude,longitude
Baker Street,11,51.5226,-0.1571
Acton Town,0,51.5028,-0.2801
";
        let stations = parse_station_info(text).unwrap();
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].name, "Acton Town");
        assert_eq!(stations[0].index, 0);
        assert_eq!(stations[1].index, 11);
        assert!((stations[1].longitude + 0.1571).abs() < 1e-9);
    }

    #[test]
    fn parses_disruption_events() {
        let text = r#"[
            {"line": 0, "stations": [0, 1], "delay": 2},
            {"line": 3, "stations": 7, "delay": 1.5},
            {"line": 4, "delay": 3},
            {"line": 5, "stations": [9]}
        ]"#;
        let records = parse_disruptions(text).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0], DisruptionRecord::new(0, vec![0, 1], 2.0));
        assert_eq!(records[1].affected, AffectedStations::One(7));
        assert!(records[2].affected.as_slice().is_empty());
        assert_eq!(records[3].delay_factor, 0.0);
    }

    #[test]
    fn bad_disruption_payload_is_an_error() {
        assert!(matches!(
            parse_disruptions("{\"line\": 0}"),
            Err(FetchError::Json(_))
        ));
    }
}
