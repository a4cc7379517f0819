//! Undirected multigraph with unit edge weights.

use brg_core::Edge;

use crate::{Result, error::AnalysisError};

/// Adjacency view of an edge list.
///
/// Parallel edges are kept; a self-loop contributes two to its vertex's
/// degree and does not affect distances.
///
/// # Examples
/// ```
/// use brg_analysis::Graph;
/// use brg_core::Edge;
///
/// let graph = Graph::from_edges(3, &[Edge::new(0, 1), Edge::new(1, 1)])?;
/// assert_eq!(graph.degrees(), &[1, 3, 0]);
/// # Ok::<(), brg_analysis::AnalysisError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    neighbours: Vec<Vec<usize>>,
    degrees: Vec<usize>,
    edge_count: usize,
}

impl Graph {
    /// Builds a graph on `vertex_count` vertices.
    ///
    /// # Errors
    /// Returns [`AnalysisError::VertexOutOfRange`] when an endpoint is not
    /// below `vertex_count`.
    pub fn from_edges(vertex_count: usize, edges: &[Edge]) -> Result<Self> {
        let mut neighbours = vec![Vec::new(); vertex_count];
        let mut degrees = vec![0_usize; vertex_count];
        for (edge_index, edge) in edges.iter().enumerate() {
            let (v0, v1) = (edge.v0(), edge.v1());
            if v1 >= vertex_count {
                return Err(AnalysisError::VertexOutOfRange {
                    edge_index,
                    vertex: v1,
                    vertex_count,
                });
            }
            // v0 <= v1 < vertex_count, so both slots exist.
            if let Some(degree) = degrees.get_mut(v0) {
                *degree += 1;
            }
            if let Some(degree) = degrees.get_mut(v1) {
                *degree += 1;
            }
            if v0 != v1 {
                if let Some(list) = neighbours.get_mut(v0) {
                    list.push(v1);
                }
                if let Some(list) = neighbours.get_mut(v1) {
                    list.push(v0);
                }
            }
        }
        Ok(Self {
            neighbours,
            degrees,
            edge_count: edges.len(),
        })
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.neighbours.len()
    }

    /// Number of edges, counting parallel edges and self-loops.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Distinct-endpoint neighbours of `vertex`, empty when out of range.
    #[must_use]
    pub fn neighbours(&self, vertex: usize) -> &[usize] {
        self.neighbours.get(vertex).map_or(&[], Vec::as_slice)
    }

    /// Degree of every vertex.
    #[must_use]
    pub fn degrees(&self) -> &[usize] {
        &self.degrees
    }
}
