//! Generation entry point tying the three phases together.
//!
//! Provides the [`Brg`] runtime type, the [`generate`] convenience function,
//! and the [`GenerationReport`] diagnostic view used to check the rank-sum
//! invariant from outside the crate.

use std::num::NonZeroUsize;

use tracing::{info, instrument};

use crate::{
    Result,
    attachment::{AttachmentStats, build_attachment},
    builder::BrgBuilder,
    contraction::contract,
    edge::Edge,
    materialize::materialize,
    stream::UniformStream,
};

/// Validated generator configuration.
///
/// # Examples
/// ```
/// use brg_core::BrgBuilder;
///
/// let brg = BrgBuilder::new()
///     .with_vertex_count(8)
///     .with_block_size(2)
///     .with_seed(1)
///     .build()
///     .expect("builder must succeed");
/// let edges = brg.generate();
/// assert_eq!(edges.len(), 16);
/// assert!(edges.iter().all(|edge| edge.v1() < 8));
/// ```
#[derive(Debug, Clone)]
pub struct Brg {
    vertex_count: NonZeroUsize,
    block_size: NonZeroUsize,
    node_count: NonZeroUsize,
    seed: u64,
}

/// Edges of one generation run together with phase diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Materialized edges, in output order.
    pub edges: Vec<Edge>,
    /// Counters from the attachment phase.
    pub attachment: AttachmentStats,
    /// Number of super-node self-loops produced by contraction.
    pub self_loops: usize,
}

impl Brg {
    pub(crate) fn new(
        vertex_count: NonZeroUsize,
        block_size: NonZeroUsize,
        node_count: NonZeroUsize,
        seed: u64,
    ) -> Self {
        Self {
            vertex_count,
            block_size,
            node_count,
            seed,
        }
    }

    /// Number of vertices `N` in the generated graph.
    #[must_use]
    pub const fn vertex_count(&self) -> NonZeroUsize {
        self.vertex_count
    }

    /// Number of attachment nodes folded into each vertex.
    #[must_use]
    pub const fn block_size(&self) -> NonZeroUsize {
        self.block_size
    }

    /// Number of nodes grown by the attachment phase, `N * M`.
    #[must_use]
    pub const fn node_count(&self) -> NonZeroUsize {
        self.node_count
    }

    /// Seed of the uniform stream.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates the edge list.
    #[must_use]
    pub fn generate(&self) -> Vec<Edge> {
        self.generate_with_report().edges
    }

    /// Generates the edge list and returns the phase counters alongside it.
    ///
    /// # Examples
    /// ```
    /// use brg_core::BrgBuilder;
    ///
    /// let brg = BrgBuilder::new().with_vertex_count(4).with_block_size(3).build()?;
    /// let report = brg.generate_with_report();
    /// assert_eq!(report.attachment.attachment_events, 12);
    /// assert_eq!(report.attachment.rank_sum, 24);
    /// # Ok::<(), brg_core::BrgError>(())
    /// ```
    #[instrument(
        name = "core.generate",
        skip(self),
        fields(
            vertex_count = self.vertex_count.get(),
            block_size = self.block_size.get(),
            seed = self.seed,
        ),
    )]
    #[must_use]
    pub fn generate_with_report(&self) -> GenerationReport {
        let mut stream = UniformStream::new(self.seed);
        let attachment = build_attachment(self.node_count, &mut stream);
        let stats = attachment.stats();
        let contracted = contract(attachment.adjacency(), self.vertex_count, self.block_size);
        let self_loops = contracted.self_loop_count();
        let edges = materialize(&contracted);
        info!(
            edges = edges.len(),
            self_loops,
            fallback_events = stats.fallback_events,
            "generation completed"
        );
        GenerationReport {
            edges,
            attachment: stats,
            self_loops,
        }
    }
}

/// Generates a graph on `vertex_count` vertices from `vertex_count *
/// block_size` attachment nodes.
///
/// # Errors
/// Returns [`crate::BrgError::InvalidArgument`] when either size is zero and
/// [`crate::BrgError::NodeCountOverflow`] when their product overflows.
///
/// # Examples
/// ```
/// use brg_core::{Edge, generate};
///
/// let edges = generate(1, 1, 0)?;
/// assert_eq!(edges, vec![Edge::new(0, 0)]);
/// # Ok::<(), brg_core::BrgError>(())
/// ```
pub fn generate(vertex_count: usize, block_size: usize, seed: u64) -> Result<Vec<Edge>> {
    let brg = BrgBuilder::new()
        .with_vertex_count(vertex_count)
        .with_block_size(block_size)
        .with_seed(seed)
        .build()?;
    Ok(brg.generate())
}
