//! Fixture types shared by the generation property suites.

use crate::{Brg, BrgBuilder};

/// Small generator configuration sampled by the property strategies.
#[derive(Clone, Copy, Debug)]
pub(super) struct GeneratorFixture {
    pub(super) vertex_count: usize,
    pub(super) block_size: usize,
    pub(super) seed: u64,
}

impl GeneratorFixture {
    pub(super) const fn new(vertex_count: usize, block_size: usize, seed: u64) -> Self {
        Self {
            vertex_count,
            block_size,
            seed,
        }
    }

    /// Builds the generator; the strategies only sample non-zero sizes.
    pub(super) fn brg(self) -> Brg {
        match BrgBuilder::new()
            .with_vertex_count(self.vertex_count)
            .with_block_size(self.block_size)
            .with_seed(self.seed)
            .build()
        {
            Ok(brg) => brg,
            Err(err) => panic!("fixture {self:?} must be valid: {err}"),
        }
    }
}
