//! Builder utilities for configuring the generator.
//!
//! Validation happens once, in [`BrgBuilder::build`], so a constructed [`Brg`]
//! can always generate without failing.

use std::num::NonZeroUsize;

use crate::{Result, error::BrgError, generator::Brg};

const DEFAULT_VERTEX_COUNT: usize = 4096;
const DEFAULT_BLOCK_SIZE: usize = 16;

/// Configures and constructs [`Brg`] instances.
///
/// # Examples
/// ```
/// use brg_core::BrgBuilder;
///
/// let brg = BrgBuilder::new()
///     .with_vertex_count(32)
///     .with_block_size(4)
///     .with_seed(9)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(brg.vertex_count().get(), 32);
/// assert_eq!(brg.node_count().get(), 128);
/// ```
#[derive(Debug, Clone)]
pub struct BrgBuilder {
    vertex_count: usize,
    block_size: usize,
    seed: u64,
}

impl Default for BrgBuilder {
    fn default() -> Self {
        Self {
            vertex_count: DEFAULT_VERTEX_COUNT,
            block_size: DEFAULT_BLOCK_SIZE,
            seed: 0,
        }
    }
}

impl BrgBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use brg_core::BrgBuilder;
    ///
    /// let builder = BrgBuilder::new();
    /// assert_eq!(builder.vertex_count(), 4096);
    /// assert_eq!(builder.block_size(), 16);
    /// assert_eq!(builder.seed(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of vertices `N` in the final graph.
    #[must_use]
    pub fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        self.vertex_count = vertex_count;
        self
    }

    /// Returns the configured vertex count.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Overrides the block size `M`, the number of attachment nodes folded
    /// into each vertex.
    #[must_use]
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    /// Returns the configured block size.
    #[must_use]
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Sets the seed of the uniform stream.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the configured seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Validates the configuration and constructs a [`Brg`] instance.
    ///
    /// # Errors
    /// Returns [`BrgError::InvalidArgument`] when the vertex count or block
    /// size is zero, and [`BrgError::NodeCountOverflow`] when their product
    /// does not fit in `usize`.
    ///
    /// # Examples
    /// ```
    /// use brg_core::{BrgBuilder, BrgError};
    ///
    /// let err = BrgBuilder::new().with_block_size(0).build().unwrap_err();
    /// assert_eq!(err, BrgError::InvalidArgument { parameter: "block_size", got: 0 });
    /// ```
    pub fn build(self) -> Result<Brg> {
        let vertex_count =
            NonZeroUsize::new(self.vertex_count).ok_or(BrgError::InvalidArgument {
                parameter: "vertex_count",
                got: self.vertex_count,
            })?;
        let block_size = NonZeroUsize::new(self.block_size).ok_or(BrgError::InvalidArgument {
            parameter: "block_size",
            got: self.block_size,
        })?;
        let node_count =
            vertex_count
                .checked_mul(block_size)
                .ok_or(BrgError::NodeCountOverflow {
                    vertex_count: self.vertex_count,
                    block_size: self.block_size,
                })?;

        Ok(Brg::new(vertex_count, block_size, node_count, self.seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 4, "vertex_count")]
    #[case(4, 0, "block_size")]
    #[case(0, 0, "vertex_count")]
    fn build_rejects_zero_sizes(
        #[case] vertex_count: usize,
        #[case] block_size: usize,
        #[case] parameter: &str,
    ) {
        let err = BrgBuilder::new()
            .with_vertex_count(vertex_count)
            .with_block_size(block_size)
            .build()
            .expect_err("zero sizes must be rejected");
        assert!(matches!(
            err,
            BrgError::InvalidArgument { parameter: got_parameter, got: 0 }
                if got_parameter == parameter
        ));
    }

    #[test]
    fn build_rejects_overflowing_node_count() {
        let err = BrgBuilder::new()
            .with_vertex_count(usize::MAX)
            .with_block_size(2)
            .build()
            .expect_err("overflow must be rejected");
        assert_eq!(
            err,
            BrgError::NodeCountOverflow {
                vertex_count: usize::MAX,
                block_size: 2,
            }
        );
    }

    #[test]
    fn build_keeps_configuration() {
        let brg = BrgBuilder::new()
            .with_vertex_count(5)
            .with_block_size(3)
            .with_seed(77)
            .build()
            .expect("configuration is valid");
        assert_eq!(brg.vertex_count().get(), 5);
        assert_eq!(brg.block_size().get(), 3);
        assert_eq!(brg.node_count().get(), 15);
        assert_eq!(brg.seed(), 77);
    }
}
