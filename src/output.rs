use serde::Serialize;
use tubenet_core::prelude::*;

/// JSON view of a graph listing each direct connection once
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSummary {
    pub size: usize,
    pub edge_count: usize,
    pub total_weight: Weight,
    pub edges: Vec<EdgeRow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeRow {
    pub a: StationId,
    pub b: StationId,
    pub weight: Weight,
}

impl From<&Graph> for GraphSummary {
    fn from(graph: &Graph) -> Self {
        let edges: Vec<EdgeRow> = graph
            .edges()
            .map(|(a, b, weight)| EdgeRow { a, b, weight })
            .collect();
        GraphSummary {
            size: graph.size(),
            edge_count: edges.len(),
            total_weight: edges.iter().map(|e| e.weight).sum(),
            edges,
        }
    }
}
