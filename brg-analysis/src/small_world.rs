//! Diameter and mean hop distance over reachable pairs.

use rayon::prelude::*;
use tracing::instrument;

use crate::distance::DistanceMatrix;

/// Small-world summary of one graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmallWorld {
    /// Largest finite distance between distinct reachable vertices.
    pub diameter: u32,
    /// Mean over all vertices of each vertex's mean distance to the vertices
    /// it reaches. Isolated vertices contribute zero.
    pub mean_distance: f64,
}

impl SmallWorld {
    /// Summarises `distances`.
    ///
    /// # Examples
    /// ```
    /// use brg_analysis::{DistanceMatrix, Graph, SmallWorld};
    /// use brg_core::Edge;
    ///
    /// let graph = Graph::from_edges(3, &[Edge::new(0, 1), Edge::new(1, 2)])?;
    /// let summary = SmallWorld::from_matrix(&DistanceMatrix::compute(&graph));
    /// assert_eq!(summary.diameter, 2);
    /// assert!((summary.mean_distance - 4.0 / 3.0).abs() < 1e-12);
    /// # Ok::<(), brg_analysis::AnalysisError>(())
    /// ```
    #[instrument(
        name = "analysis.small_world",
        skip_all,
        fields(vertex_count = distances.vertex_count()),
    )]
    #[must_use]
    pub fn from_matrix(distances: &DistanceMatrix) -> Self {
        let vertex_count = distances.vertex_count();
        if vertex_count == 0 {
            return Self {
                diameter: 0,
                mean_distance: 0.0,
            };
        }
        let rows: Vec<(u32, f64)> = (0..vertex_count)
            .into_par_iter()
            .map(|source| row_summary(distances, source))
            .collect();
        // Summed sequentially so the result is independent of scheduling.
        let diameter = rows.iter().map(|&(longest, _)| longest).max().unwrap_or(0);
        let total: f64 = rows.iter().map(|&(_, mean)| mean).sum();
        Self {
            diameter,
            mean_distance: total / vertex_count as f64,
        }
    }
}

fn row_summary(distances: &DistanceMatrix, source: usize) -> (u32, f64) {
    let (longest, sum, count) = distances
        .raw_row(source)
        .filter(|&distance| distance != 0)
        .fold((0_u32, 0_u64, 0_u64), |(longest, sum, count), distance| {
            (longest.max(distance), sum + u64::from(distance), count + 1)
        });
    let mean = if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    };
    (longest, mean)
}
