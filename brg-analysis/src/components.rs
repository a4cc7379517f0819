//! Connected components via union-find.

use tracing::instrument;

use crate::graph::Graph;

/// Disjoint-set forest with path compression and union by rank.
#[derive(Clone, Debug)]
pub(crate) struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn parent_of(&self, node: usize) -> usize {
        self.parent.get(node).copied().unwrap_or(node)
    }

    pub(crate) fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent_of(root) != root {
            root = self.parent_of(root);
        }
        while self.parent_of(node) != node {
            let next = self.parent_of(node);
            if let Some(slot) = self.parent.get_mut(node) {
                *slot = root;
            }
            node = next;
        }
        root
    }

    /// Merges the sets containing `left` and `right`; returns `true` when
    /// they were distinct.
    pub(crate) fn union(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }
        let rank_of = |set: &Self, node: usize| set.rank.get(node).copied().unwrap_or(0);
        let (left_rank, right_rank) = (rank_of(self, left), rank_of(self, right));
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        if let Some(slot) = self.parent.get_mut(right) {
            *slot = left;
        }
        if left_rank == right_rank {
            if let Some(slot) = self.rank.get_mut(left) {
                *slot = left_rank.saturating_add(1);
            }
        }
        true
    }
}

/// Component membership of every vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Components {
    /// Number of connected components; isolated vertices count as one each.
    pub count: usize,
    /// Component label per vertex, numbered densely in order of each
    /// component's lowest vertex.
    pub labels: Vec<usize>,
}

/// Labels connected components of `graph`.
///
/// # Examples
/// ```
/// use brg_analysis::{Graph, connected_components};
/// use brg_core::Edge;
///
/// let graph = Graph::from_edges(5, &[Edge::new(0, 3), Edge::new(1, 2)])?;
/// let components = connected_components(&graph);
/// assert_eq!(components.count, 3);
/// assert_eq!(components.labels, vec![0, 1, 1, 0, 2]);
/// # Ok::<(), brg_analysis::AnalysisError>(())
/// ```
#[instrument(
    name = "analysis.components",
    skip_all,
    fields(vertex_count = graph.vertex_count()),
)]
#[must_use]
pub fn connected_components(graph: &Graph) -> Components {
    let vertex_count = graph.vertex_count();
    let mut sets = DisjointSet::new(vertex_count);
    let mut count = vertex_count;
    for vertex in 0..vertex_count {
        for &neighbour in graph.neighbours(vertex) {
            if neighbour > vertex && sets.union(vertex, neighbour) {
                count -= 1;
            }
        }
    }

    let mut root_labels = vec![usize::MAX; vertex_count];
    let mut next_label = 0;
    let labels = (0..vertex_count)
        .map(|vertex| {
            let root = sets.find(vertex);
            match root_labels.get_mut(root) {
                Some(label) if *label == usize::MAX => {
                    *label = next_label;
                    next_label += 1;
                    *label
                }
                Some(label) => *label,
                None => root,
            }
        })
        .collect();
    Components { count, labels }
}
