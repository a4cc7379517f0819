//! Flattening of the contracted adjacency into an edge list.

use tracing::{debug, instrument};

use crate::{contraction::SuperAdjacency, edge::Edge};

/// Emits each undirected super-edge once, from its lower endpoint.
///
/// Edges are grouped by ascending source super-node and keep the
/// contractor's append order within each group.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use brg_core::{UniformStream, build_attachment, contract, materialize};
///
/// let one = NonZeroUsize::MIN;
/// let graph = build_attachment(one, &mut UniformStream::new(0));
/// let edges = materialize(&contract(graph.adjacency(), one, one));
/// assert_eq!(edges.len(), 1);
/// assert!(edges[0].is_self_loop());
/// ```
#[instrument(
    name = "core.materialize",
    skip_all,
    fields(vertex_count = adjacency.len()),
)]
#[must_use]
pub fn materialize(adjacency: &SuperAdjacency) -> Vec<Edge> {
    let capacity = adjacency.iter().map(|(_, list)| list.len()).sum();
    let mut edges = Vec::with_capacity(capacity);
    for (super_node, list) in adjacency.iter() {
        edges.extend(
            list.iter()
                .copied()
                .filter(|&other| other >= super_node)
                .map(|other| Edge::new(super_node, other)),
        );
    }
    debug!(edges = edges.len(), "materialization completed");
    edges
}
