//! Degree distribution accumulated over trials.

use std::collections::BTreeMap;

use crate::graph::Graph;

/// One `degree -> fraction of vertices` entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DegreeFraction {
    /// Vertex degree.
    pub degree: usize,
    /// Fraction of vertices with that degree, averaged over trials.
    pub fraction: f64,
}

/// Running degree histogram.
///
/// Each recorded graph adds `1 / N` to the bucket of every vertex's degree;
/// [`DegreeHistogram::normalised`] averages over the recorded trials.
#[derive(Clone, Debug, Default)]
pub struct DegreeHistogram {
    buckets: BTreeMap<usize, f64>,
    trials: usize,
}

impl DegreeHistogram {
    /// Creates an empty histogram.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one trial's degrees.
    pub fn record(&mut self, graph: &Graph) {
        self.trials += 1;
        let degrees = graph.degrees();
        if degrees.is_empty() {
            return;
        }
        let share = 1.0 / degrees.len() as f64;
        for &degree in degrees {
            *self.buckets.entry(degree).or_insert(0.0) += share;
        }
    }

    /// Number of recorded trials.
    #[must_use]
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Buckets in ascending degree order, divided by the trial count.
    ///
    /// # Examples
    /// ```
    /// use brg_analysis::{DegreeHistogram, Graph};
    /// use brg_core::Edge;
    ///
    /// let mut histogram = DegreeHistogram::new();
    /// histogram.record(&Graph::from_edges(2, &[Edge::new(0, 1)])?);
    /// histogram.record(&Graph::from_edges(2, &[Edge::new(0, 0)])?);
    /// let buckets = histogram.normalised();
    /// let degrees: Vec<usize> = buckets.iter().map(|bucket| bucket.degree).collect();
    /// assert_eq!(degrees, vec![0, 1, 2]);
    /// assert!((buckets[1].fraction - 0.5).abs() < 1e-12);
    /// # Ok::<(), brg_analysis::AnalysisError>(())
    /// ```
    #[must_use]
    pub fn normalised(&self) -> Vec<DegreeFraction> {
        if self.trials == 0 {
            return Vec::new();
        }
        let trials = self.trials as f64;
        self.buckets
            .iter()
            .map(|(&degree, &total)| DegreeFraction {
                degree,
                fraction: total / trials,
            })
            .collect()
    }
}
