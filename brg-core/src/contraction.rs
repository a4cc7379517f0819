//! Block contraction of the intermediate multigraph.
//!
//! Super-node `i` owns the contiguous block `[i * M, (i + 1) * M)` of
//! intermediate nodes. Each stored neighbour reference `a -> b` with `b >= a`
//! becomes a super-edge `i -> b / M`; references into a later block are also
//! mirrored onto that block's list so every cross-block connection is visible
//! from both endpoints. Links inside one block fold into a self-loop on the
//! super-node.

use std::num::NonZeroUsize;

use tracing::{debug, instrument};

use crate::attachment::IntermediateAdjacency;

/// Neighbour lists of the contracted graph, indexed by super-node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperAdjacency {
    neighbours: Vec<Vec<usize>>,
}

impl SuperAdjacency {
    /// Number of super-nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.neighbours.len()
    }

    /// Returns `true` when there are no super-nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.neighbours.is_empty()
    }

    /// Neighbours of `super_node` in append order, or an empty slice when out
    /// of range.
    #[must_use]
    pub fn neighbours(&self, super_node: usize) -> &[usize] {
        self.neighbours.get(super_node).map_or(&[], Vec::as_slice)
    }

    /// Iterates `(super_node, neighbours)` in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        self.neighbours
            .iter()
            .enumerate()
            .map(|(index, list)| (index, list.as_slice()))
    }

    /// Counts super-node self-loops.
    #[must_use]
    pub fn self_loop_count(&self) -> usize {
        self.iter()
            .map(|(index, list)| list.iter().filter(|&&other| other == index).count())
            .sum()
    }
}

/// Contracts `adjacency` into `vertex_count` super-nodes of `block_size`
/// intermediate nodes each.
///
/// `adjacency` is expected to hold `vertex_count * block_size` nodes, as
/// produced by [`crate::build_attachment`]. References outside that range are
/// ignored.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use brg_core::{UniformStream, build_attachment, contract};
///
/// let vertices = NonZeroUsize::new(3).expect("non-zero");
/// let block = NonZeroUsize::new(4).expect("non-zero");
/// let nodes = vertices.checked_mul(block).expect("fits");
/// let graph = build_attachment(nodes, &mut UniformStream::new(1));
/// let contracted = contract(graph.adjacency(), vertices, block);
/// assert_eq!(contracted.len(), 3);
/// ```
#[instrument(
    name = "core.contract",
    skip_all,
    fields(vertex_count = vertex_count.get(), block_size = block_size.get()),
)]
pub fn contract(
    adjacency: &IntermediateAdjacency,
    vertex_count: NonZeroUsize,
    block_size: NonZeroUsize,
) -> SuperAdjacency {
    let vertex_count = vertex_count.get();
    let block_size = block_size.get();
    let mut neighbours = vec![Vec::new(); vertex_count];

    for super_node in 0..vertex_count {
        let block_start = super_node * block_size;
        let block_end = block_start + block_size;
        for node in block_start..block_end {
            for &other in adjacency.neighbours(node) {
                let other_block = other / block_size;
                if other_block >= vertex_count {
                    continue;
                }
                if other >= node {
                    if let Some(list) = neighbours.get_mut(super_node) {
                        list.push(other_block);
                    }
                }
                if other >= block_end {
                    if let Some(list) = neighbours.get_mut(other_block) {
                        list.push(super_node);
                    }
                }
            }
        }
    }

    let contracted = SuperAdjacency { neighbours };
    debug!(
        self_loops = contracted.self_loop_count(),
        "contraction completed"
    );
    contracted
}
