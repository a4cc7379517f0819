//! Strategy builders for generation property tests.

use proptest::prelude::*;

use super::types::GeneratorFixture;

pub(super) const MAX_VERTICES: usize = 48;
pub(super) const MAX_BLOCK_SIZE: usize = 12;

/// Samples small generator configurations, biased towards tiny blocks where
/// boundary effects dominate.
pub(super) fn generator_fixture_strategy() -> impl Strategy<Value = GeneratorFixture> {
    (
        1_usize..=MAX_VERTICES,
        prop_oneof![3 => 1_usize..=3, 1 => 1_usize..=MAX_BLOCK_SIZE],
        any::<u64>(),
    )
        .prop_map(|(vertex_count, block_size, seed)| {
            GeneratorFixture::new(vertex_count, block_size, seed)
        })
}
