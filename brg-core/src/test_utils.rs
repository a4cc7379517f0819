//! Shared test utilities for `brg-core`.

use std::collections::BTreeMap;

use brg_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{attachment::IntermediateAdjacency, edge::Edge};

/// Builds a standard proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Counts how often each `(v0, v1)` pair occurs.
#[must_use]
pub(crate) fn edge_multiset(edges: &[Edge]) -> BTreeMap<(usize, usize), usize> {
    let mut counts = BTreeMap::new();
    for edge in edges {
        *counts.entry((edge.v0(), edge.v1())).or_insert(0) += 1;
    }
    counts
}

/// Maps every attachment event onto its pair of blocks and counts the pairs.
#[must_use]
pub(crate) fn block_pair_multiset(
    adjacency: &IntermediateAdjacency,
    block_size: usize,
) -> BTreeMap<(usize, usize), usize> {
    let mut counts = BTreeMap::new();
    for (source, target) in adjacency.attachment_edges() {
        let edge = Edge::new(source / block_size, target / block_size);
        *counts.entry((edge.v0(), edge.v1())).or_insert(0) += 1;
    }
    counts
}
