//! Weighted preferential attachment over the intermediate node set.
//!
//! Nodes are introduced one at a time in index order. Each new node first
//! takes one unit of rank as self-bias, then draws a single uniform value and
//! walks the roulette wheel of current ranks to pick its attachment target.
//! After `i` nodes the rank sum is exactly `2 * i`, so the wheel total is
//! known analytically and never summed.
//!
//! The wheel is accumulated in `f64`. When rounding leaves a sliver of mass
//! past the final node the draw can fall outside every slot; the node then
//! attaches to itself. That fallback keeps the rank-sum invariant and is
//! reported through [`AttachmentStats::fallback_events`].

use std::num::NonZeroUsize;

use tracing::{debug, instrument, trace};

use crate::stream::UniformStream;

/// Neighbour lists of the intermediate multigraph, indexed by node.
///
/// Lists keep insertion order and may contain duplicates and a node's own
/// index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntermediateAdjacency {
    neighbours: Vec<Vec<usize>>,
}

impl IntermediateAdjacency {
    fn with_nodes(node_count: usize) -> Self {
        Self {
            neighbours: vec![Vec::new(); node_count],
        }
    }

    /// Number of nodes in the intermediate graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.neighbours.len()
    }

    /// Returns `true` when the graph holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.neighbours.is_empty()
    }

    /// Neighbours of `node` in insertion order, or an empty slice when `node`
    /// is out of range.
    #[must_use]
    pub fn neighbours(&self, node: usize) -> &[usize] {
        self.neighbours.get(node).map_or(&[], Vec::as_slice)
    }

    /// Total number of stored neighbour references.
    #[must_use]
    pub fn reference_count(&self) -> usize {
        self.neighbours.iter().map(Vec::len).sum()
    }

    /// Yields one `(source, target)` pair per attachment event, with
    /// `source <= target`, in adjacency order.
    ///
    /// Every event is stored on the lower endpoint with the higher endpoint
    /// as neighbour, so filtering on `target >= source` visits it once.
    pub fn attachment_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.neighbours
            .iter()
            .enumerate()
            .flat_map(|(source, list)| {
                list.iter()
                    .copied()
                    .filter(move |&target| target >= source)
                    .map(move |target| (source, target))
            })
    }

    fn link(&mut self, node: usize, target: usize) {
        if let Some(list) = self.neighbours.get_mut(target) {
            list.push(node);
        }
        if node != target {
            if let Some(list) = self.neighbours.get_mut(node) {
                list.push(target);
            }
        }
    }
}

/// Counters gathered while running the attachment phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttachmentStats {
    /// One per processed node.
    pub attachment_events: usize,
    /// Sum of all ranks once the phase completes.
    pub rank_sum: usize,
    /// Nodes whose draw fell outside the wheel and attached to themselves.
    pub fallback_events: usize,
    /// Nodes whose draw selected their own slot on the wheel.
    pub self_selections: usize,
}

/// Result of the attachment phase: the multigraph plus final ranks.
#[derive(Debug, Clone)]
pub struct AttachmentGraph {
    adjacency: IntermediateAdjacency,
    ranks: Vec<usize>,
    stats: AttachmentStats,
}

impl AttachmentGraph {
    /// Intermediate adjacency structure.
    #[must_use]
    pub fn adjacency(&self) -> &IntermediateAdjacency {
        &self.adjacency
    }

    /// Final rank of every node.
    #[must_use]
    pub fn ranks(&self) -> &[usize] {
        &self.ranks
    }

    /// Phase counters.
    #[must_use]
    pub const fn stats(&self) -> AttachmentStats {
        self.stats
    }

    /// Consumes the graph, returning the adjacency for contraction.
    #[must_use]
    pub fn into_adjacency(self) -> IntermediateAdjacency {
        self.adjacency
    }
}

/// Grows the intermediate multigraph on `node_count` nodes.
///
/// Consumes exactly `node_count` draws from `stream`.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use brg_core::{UniformStream, build_attachment};
///
/// let nodes = NonZeroUsize::new(8).expect("non-zero");
/// let graph = build_attachment(nodes, &mut UniformStream::new(3));
/// assert_eq!(graph.stats().attachment_events, 8);
/// assert_eq!(graph.ranks().iter().sum::<usize>(), 16);
/// ```
#[instrument(
    name = "core.attachment",
    skip_all,
    fields(node_count = node_count.get()),
)]
pub fn build_attachment(node_count: NonZeroUsize, stream: &mut UniformStream) -> AttachmentGraph {
    let node_count = node_count.get();
    let mut adjacency = IntermediateAdjacency::with_nodes(node_count);
    let mut ranks = vec![0_usize; node_count];
    let mut stats = AttachmentStats::default();

    for node in 0..node_count {
        let Some(wheel) = ranks.get_mut(..=node) else {
            break;
        };
        if let Some(own) = wheel.last_mut() {
            *own += 1;
        }

        // Rank sum after the self-bias: two units per earlier node plus one.
        let total = wheel_total(node);
        let draw = stream.next_unit();

        let target = match select_slot(wheel, total, draw) {
            Some(slot) => {
                if slot == node {
                    stats.self_selections += 1;
                }
                slot
            }
            None => {
                trace!(node, draw, "draw fell past the wheel; attaching to self");
                stats.fallback_events += 1;
                node
            }
        };
        if let Some(rank) = wheel.get_mut(target) {
            *rank += 1;
        }
        adjacency.link(node, target);
        stats.attachment_events += 1;
    }

    stats.rank_sum = ranks.iter().sum();
    debug!(
        attachment_events = stats.attachment_events,
        fallback_events = stats.fallback_events,
        rank_sum = stats.rank_sum,
        "attachment phase completed"
    );
    AttachmentGraph {
        adjacency,
        ranks,
        stats,
    }
}

fn wheel_total(node: usize) -> f64 {
    (2 * node + 1) as f64
}

/// Returns the first slot whose half-open interval `[acc, acc + share)`
/// contains `draw`, accumulating shares in slot order.
fn select_slot(ranks: &[usize], total: f64, draw: f64) -> Option<usize> {
    let mut acc = 0.0_f64;
    for (slot, &rank) in ranks.iter().enumerate() {
        let share = rank as f64 / total;
        if acc <= draw && draw < acc + share {
            return Some(slot);
        }
        acc += share;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn nodes(count: usize) -> NonZeroUsize {
        NonZeroUsize::new(count).unwrap_or(NonZeroUsize::MIN)
    }

    #[rstest]
    #[case(&[1], 1.0, 0.0, Some(0))]
    #[case(&[1], 1.0, 0.999, Some(0))]
    #[case(&[2, 1], 3.0, 0.5, Some(0))]
    #[case(&[2, 1], 3.0, 0.7, Some(1))]
    #[case(&[1, 1, 1], 3.0, 0.5, Some(1))]
    fn select_slot_uses_half_open_intervals(
        #[case] ranks: &[usize],
        #[case] total: f64,
        #[case] draw: f64,
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(select_slot(ranks, total, draw), expected);
    }

    #[test]
    fn select_slot_assigns_shared_boundary_to_later_slot() {
        // 0.5 closes slot 0 and opens slot 1; the half-open rule picks slot 1.
        assert_eq!(select_slot(&[1, 1], 2.0, 0.5), Some(1));
    }

    #[test]
    fn select_slot_reports_unassigned_mass() {
        // Shares sum to 2/3, leaving the top third of the wheel unassigned.
        assert_eq!(select_slot(&[1, 1], 3.0, 0.9), None);
    }

    #[test]
    fn single_node_attaches_to_itself() {
        let graph = build_attachment(nodes(1), &mut UniformStream::new(0));
        assert_eq!(graph.adjacency().neighbours(0), &[0]);
        assert_eq!(graph.ranks(), &[2]);
        assert_eq!(graph.stats().attachment_events, 1);
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(17)]
    #[case(256)]
    fn rank_sum_is_twice_the_node_count(#[case] count: usize) {
        for seed in 0..8 {
            let graph = build_attachment(nodes(count), &mut UniformStream::new(seed));
            let stats = graph.stats();
            assert_eq!(stats.attachment_events, count);
            assert_eq!(stats.rank_sum, 2 * count);
            assert_eq!(graph.ranks().iter().sum::<usize>(), 2 * count);
        }
    }

    #[test]
    fn each_node_contributes_one_attachment_edge() {
        let graph = build_attachment(nodes(64), &mut UniformStream::new(11));
        let edges: Vec<_> = graph.adjacency().attachment_edges().collect();
        assert_eq!(edges.len(), 64);
        assert!(edges.iter().all(|&(source, target)| source <= target));
    }

    #[test]
    fn references_stay_within_two_per_node() {
        let graph = build_attachment(nodes(128), &mut UniformStream::new(5));
        assert!(graph.adjacency().reference_count() <= 256);
    }

    #[test]
    fn targets_never_exceed_the_new_node() {
        let graph = build_attachment(nodes(96), &mut UniformStream::new(23));
        for (source, target) in graph.adjacency().attachment_edges() {
            assert!(target < 96);
            assert!(source <= target);
        }
    }

    #[test]
    fn ranks_match_adjacency_degree() {
        // A stored self-loop is one list entry but two units of rank.
        let graph = build_attachment(nodes(50), &mut UniformStream::new(9));
        let adjacency = graph.adjacency();
        for (node, &rank) in graph.ranks().iter().enumerate() {
            let list = adjacency.neighbours(node);
            let loops = list.iter().filter(|&&other| other == node).count();
            assert!(loops <= 1);
            assert_eq!(rank, list.len() + loops);
        }
    }

    #[test]
    fn consumes_one_draw_per_node() {
        let mut stream = UniformStream::new(4);
        let _graph = build_attachment(nodes(33), &mut stream);
        assert_eq!(stream.draws(), 33);
    }
}
