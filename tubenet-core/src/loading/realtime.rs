use chrono::NaiveDate;
use log::{debug, info, warn};
use rayon::prelude::*;

use super::{NetworkConfig, build_line_graph};
use crate::{DataFetcher, Disruption, DisruptionRecord, Error, Graph, LineId};

/// Fetches one line's connections and builds its graph, without disruptions
///
/// # Errors
///
/// Returns an error if the connections cannot be fetched or are malformed
pub fn build_line_network<F>(
    fetcher: &F,
    line_id: LineId,
    config: &NetworkConfig,
) -> Result<Graph, Error>
where
    F: DataFetcher + ?Sized,
{
    let connections = fetcher.fetch_line_connections(line_id)?;
    debug!("Line {line_id}: {} connections", connections.len());
    build_line_graph(&connections, config.station_count)
}

/// Builds the network for `date` with that date's disruptions applied.
///
/// Every line in `0..config.line_count` is fetched and built, the
/// disruptions of that line are applied to its graph, and all line graphs
/// are summed. Line graphs are always summed in line order, so the result
/// does not depend on `config.parallel_fetch`.
///
/// # Errors
///
/// Fails if the disruptions or any single line cannot be fetched, or if any
/// record is malformed. A partially summed network is never returned.
pub fn build_realtime_network<F>(
    fetcher: &F,
    date: NaiveDate,
    config: &NetworkConfig,
) -> Result<Graph, Error>
where
    F: DataFetcher + Sync + ?Sized,
{
    config.validate()?;
    info!(
        "Building real-time network of {} lines and {} stations for {date}",
        config.line_count, config.station_count
    );

    let records = fetcher.fetch_disruptions(date)?;
    let disruptions = typed_disruptions(&records, config)?;
    info!("{} disruptions active on {date}", disruptions.len());

    let adjusted_line =
        |line_id: LineId| adjusted_line_graph(fetcher, line_id, &disruptions, config);

    let line_graphs: Vec<Graph> = if config.parallel_fetch {
        (0..config.line_count)
            .into_par_iter()
            .map(adjusted_line)
            .collect::<Result<_, _>>()?
    } else {
        (0..config.line_count)
            .map(adjusted_line)
            .collect::<Result<_, _>>()?
    };

    let network = line_graphs
        .iter()
        .try_fold(Graph::zeros(config.station_count), |network, line| {
            network.combine(line)
        })?;

    info!(
        "Real-time network built with {} direct connections",
        network.edge_count()
    );
    Ok(network)
}

fn typed_disruptions(
    records: &[DisruptionRecord],
    config: &NetworkConfig,
) -> Result<Vec<Disruption>, Error> {
    let mut disruptions = Vec::with_capacity(records.len());
    for record in records {
        let Some(disruption) = Disruption::from_record(record, config.station_count)? else {
            continue;
        };
        if disruption.line_id() >= config.line_count {
            warn!(
                "Disruption on unknown line {} will not be applied",
                disruption.line_id()
            );
        }
        disruptions.push(disruption);
    }
    Ok(disruptions)
}

fn adjusted_line_graph<F>(
    fetcher: &F,
    line_id: LineId,
    disruptions: &[Disruption],
    config: &NetworkConfig,
) -> Result<Graph, Error>
where
    F: DataFetcher + ?Sized,
{
    let mut graph = build_line_network(fetcher, line_id, config)
        .inspect_err(|e| warn!("Failed to build line {line_id}: {e}"))?;

    for disruption in disruptions.iter().filter(|d| d.line_id() == line_id) {
        debug!("Applying {disruption:?}");
        disruption.apply_to(&mut graph)?;
    }
    Ok(graph)
}
