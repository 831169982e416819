//! Fixed-size undirected weighted graph backed by a square weight matrix

use crate::{Error, StationId, Weight};

/// Undirected weighted graph over a fixed universe of stations.
///
/// The weight matrix is stored row-major in a single buffer. It is always
/// square and symmetric with a zero diagonal, and a zero entry means there
/// is no direct connection between the two stations.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    size: usize,
    weights: Vec<Weight>,
}

impl Graph {
    /// Graph of `size` stations without any connections
    pub fn zeros(size: usize) -> Self {
        Graph {
            size,
            weights: vec![0.0; size * size],
        }
    }

    /// Creates a graph from an explicit weight matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Shape`] if the matrix is not `size` x `size`, is not
    /// symmetric, has a non-zero diagonal entry or contains a negative or
    /// non-finite weight.
    pub fn new(size: usize, rows: Vec<Vec<Weight>>) -> Result<Self, Error> {
        if rows.len() != size {
            return Err(Error::Shape(format!(
                "expected {size} rows, got {}",
                rows.len()
            )));
        }

        let mut weights = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(Error::Shape(format!(
                    "row {i} has {} columns, expected {size}",
                    row.len()
                )));
            }
            weights.extend(row);
        }

        let graph = Graph { size, weights };
        graph.validate()?;
        Ok(graph)
    }

    fn validate(&self) -> Result<(), Error> {
        for a in 0..self.size {
            if self.at(a, a) != 0.0 {
                return Err(Error::Shape(format!(
                    "self-loop on station {a} with weight {}",
                    self.at(a, a)
                )));
            }
            for b in (a + 1)..self.size {
                let w = self.at(a, b);
                if !w.is_finite() || w < 0.0 {
                    return Err(Error::Shape(format!(
                        "invalid weight {w} between stations {a} and {b}"
                    )));
                }
                if w != self.at(b, a) {
                    return Err(Error::Shape(format!(
                        "asymmetric weights between stations {a} and {b}: {w} != {}",
                        self.at(b, a)
                    )));
                }
            }
        }
        Ok(())
    }

    /// Number of stations in the graph
    pub fn size(&self) -> usize {
        self.size
    }

    /// Weight of the direct connection between `a` and `b`, `None` if either
    /// station is out of range
    pub fn weight(&self, a: StationId, b: StationId) -> Option<Weight> {
        if a < self.size && b < self.size {
            Some(self.at(a, b))
        } else {
            None
        }
    }

    #[inline]
    fn at(&self, a: StationId, b: StationId) -> Weight {
        self.weights[a * self.size + b]
    }

    #[inline]
    fn at_mut(&mut self, a: StationId, b: StationId) -> &mut Weight {
        &mut self.weights[a * self.size + b]
    }

    fn check_station(&self, station: StationId) -> Result<(), Error> {
        if station < self.size {
            Ok(())
        } else {
            Err(Error::StationOutOfRange {
                station,
                size: self.size,
            })
        }
    }

    fn check_factor(factor: Weight) -> Result<(), Error> {
        if factor.is_finite() && factor >= 0.0 {
            Ok(())
        } else {
            Err(Error::InvalidFactor(factor))
        }
    }

    /// Sets the weight of the connection between `a` and `b` in both
    /// directions, overwriting any previous value
    pub(crate) fn set_edge(
        &mut self,
        a: StationId,
        b: StationId,
        weight: Weight,
    ) -> Result<(), Error> {
        self.check_station(a)?;
        self.check_station(b)?;
        *self.at_mut(a, b) = weight;
        *self.at_mut(b, a) = weight;
        Ok(())
    }

    /// Elementwise sum of two graphs over the same station universe.
    ///
    /// Neither operand is modified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleSize`] if the graphs differ in size.
    pub fn combine(&self, other: &Graph) -> Result<Graph, Error> {
        if self.size != other.size {
            return Err(Error::IncompatibleSize {
                left: self.size,
                right: other.size,
            });
        }

        let weights = self
            .weights
            .iter()
            .zip(&other.weights)
            .map(|(a, b)| a + b)
            .collect();

        Ok(Graph {
            size: self.size,
            weights,
        })
    }

    /// Multiplies the weight of the direct connection between `a` and `b`
    /// by `factor` in both directions.
    ///
    /// # Errors
    ///
    /// Fails if a station is out of range or the factor is negative or not
    /// finite. The graph is left untouched on error.
    pub fn scale_edge(&mut self, a: StationId, b: StationId, factor: Weight) -> Result<(), Error> {
        self.check_station(a)?;
        self.check_station(b)?;
        Self::check_factor(factor)?;

        *self.at_mut(a, b) *= factor;
        if a != b {
            *self.at_mut(b, a) *= factor;
        }
        Ok(())
    }

    /// Multiplies every connection through `station` by `factor`.
    ///
    /// Row and column `station` are both scaled; the diagonal entry stays 0.
    ///
    /// # Errors
    ///
    /// Fails if the station is out of range or the factor is negative or not
    /// finite. The graph is left untouched on error.
    pub fn scale_incident(&mut self, station: StationId, factor: Weight) -> Result<(), Error> {
        self.check_station(station)?;
        Self::check_factor(factor)?;

        let size = self.size;
        for w in &mut self.weights[station * size..(station + 1) * size] {
            *w *= factor;
        }
        for other in 0..size {
            if other != station {
                *self.at_mut(other, station) *= factor;
            }
        }
        Ok(())
    }

    /// Rows of the weight matrix
    pub fn rows(&self) -> impl Iterator<Item = &[Weight]> {
        // chunks_exact panics on a zero chunk size
        self.weights.chunks_exact(self.size.max(1))
    }

    /// Owned copy of the weight matrix
    pub fn to_rows(&self) -> Vec<Vec<Weight>> {
        self.rows().map(<[Weight]>::to_vec).collect()
    }

    /// Direct connections as `(a, b, weight)` with `a < b`
    pub fn edges(&self) -> impl Iterator<Item = (StationId, StationId, Weight)> + '_ {
        (0..self.size).flat_map(move |a| {
            ((a + 1)..self.size).filter_map(move |b| {
                let w = self.at(a, b);
                (w != 0.0).then_some((a, b, w))
            })
        })
    }

    /// Number of direct connections
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Sum of all connection weights, each undirected connection counted once
    pub fn total_weight(&self) -> Weight {
        self.edges().map(|(_, _, w)| w).sum()
    }
}
