//! All-pairs unit-weight shortest paths.

use std::collections::VecDeque;

use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::graph::Graph;

const UNREACHABLE: u32 = u32::MAX;

/// Row-major matrix of hop distances.
///
/// Rows are computed independently by breadth-first search, one source per
/// rayon task, so results do not depend on the thread count.
///
/// # Examples
/// ```
/// use brg_analysis::{DistanceMatrix, Graph};
/// use brg_core::Edge;
///
/// let graph = Graph::from_edges(3, &[Edge::new(0, 1), Edge::new(1, 2)])?;
/// let distances = DistanceMatrix::compute(&graph);
/// assert_eq!(distances.get(0, 2), Some(2));
/// # Ok::<(), brg_analysis::AnalysisError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceMatrix {
    vertex_count: usize,
    cells: Vec<u32>,
}

impl DistanceMatrix {
    /// Runs one breadth-first search per vertex.
    #[instrument(
        name = "analysis.distances",
        skip_all,
        fields(vertex_count = graph.vertex_count()),
    )]
    #[must_use]
    pub fn compute(graph: &Graph) -> Self {
        let vertex_count = graph.vertex_count();
        let rows: Vec<Vec<u32>> = (0..vertex_count)
            .into_par_iter()
            .map(|source| breadth_first(graph, source))
            .collect();
        let cells: Vec<u32> = rows.into_iter().flatten().collect();
        debug!(cells = cells.len(), "distance matrix computed");
        Self {
            vertex_count,
            cells,
        }
    }

    /// Number of vertices on each side.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Hop distance from `source` to `target`, or `None` when unreachable or
    /// out of range.
    #[must_use]
    pub fn get(&self, source: usize, target: usize) -> Option<u32> {
        if source >= self.vertex_count || target >= self.vertex_count {
            return None;
        }
        self.cells
            .get(source * self.vertex_count + target)
            .copied()
            .filter(|&cell| cell != UNREACHABLE)
    }

    /// Distances from `source` to every vertex; empty when out of range.
    #[must_use]
    pub fn row(&self, source: usize) -> Vec<Option<u32>> {
        let start = source.saturating_mul(self.vertex_count);
        self.cells
            .get(start..start.saturating_add(self.vertex_count))
            .unwrap_or(&[])
            .iter()
            .map(|&cell| (cell != UNREACHABLE).then_some(cell))
            .collect()
    }

    pub(crate) fn raw_row(&self, source: usize) -> impl Iterator<Item = u32> + '_ {
        let start = source.saturating_mul(self.vertex_count);
        self.cells
            .get(start..start.saturating_add(self.vertex_count))
            .unwrap_or(&[])
            .iter()
            .copied()
            .filter(|&cell| cell != UNREACHABLE)
    }
}

fn breadth_first(graph: &Graph, source: usize) -> Vec<u32> {
    let mut distances = vec![UNREACHABLE; graph.vertex_count()];
    let Some(slot) = distances.get_mut(source) else {
        return distances;
    };
    *slot = 0;
    let mut queue = VecDeque::from([(source, 0_u32)]);
    while let Some((vertex, depth)) = queue.pop_front() {
        let next = depth.saturating_add(1);
        for &neighbour in graph.neighbours(vertex) {
            if let Some(distance) = distances.get_mut(neighbour) {
                if *distance == UNREACHABLE {
                    *distance = next;
                    queue.push_back((neighbour, next));
                }
            }
        }
    }
    distances
}
