//! R-MAT edge sampling followed by vertex relabelling and edge shuffling.

use brg_core::Edge;
use rand::{Rng, SeedableRng, distributions::Standard, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

use crate::{
    Result,
    error::KroneckerError,
    initiator::{GRAPH500_INITIATOR, Initiator},
};

const MAX_SCALE: u32 = usize::BITS - 1;

/// Generates `edge_count` edges on `2^scale` vertices.
///
/// `seeds.0` drives quadrant selection; `seeds.1` drives the vertex
/// relabelling and the final edge shuffle. Self-loops and duplicates are
/// kept.
///
/// # Errors
/// Returns [`KroneckerError::InvalidScale`] when `scale` is zero or the
/// vertex range does not fit in `usize`.
///
/// # Examples
/// ```
/// let edges = brg_kronecker::generate(4, 32, (1, 2))?;
/// assert_eq!(edges.len(), 32);
/// assert!(edges.iter().all(|edge| edge.v1() < 16));
/// # Ok::<(), brg_kronecker::KroneckerError>(())
/// ```
#[instrument(
    name = "kronecker.generate",
    skip(seeds),
    fields(seed_a = seeds.0, seed_b = seeds.1),
)]
pub fn generate(scale: u32, edge_count: usize, seeds: (u64, u64)) -> Result<Vec<Edge>> {
    check_scale(scale)?;
    let vertex_count = 1_usize << scale;
    let mut edge_rng = ChaCha8Rng::seed_from_u64(seeds.0);
    let mut label_rng = ChaCha8Rng::seed_from_u64(seeds.1);

    let mut labels: Vec<usize> = (0..vertex_count).collect();
    labels.shuffle(&mut label_rng);
    let relabel = |vertex: usize| labels.get(vertex).copied().unwrap_or(vertex);

    let mut edges: Vec<Edge> = (0..edge_count)
        .map(|_| {
            let (row, column) = sample_cell(&GRAPH500_INITIATOR, scale, &mut edge_rng);
            Edge::new(relabel(row), relabel(column))
        })
        .collect();
    edges.shuffle(&mut label_rng);

    debug!(vertex_count, edges = edges.len(), "kronecker generation completed");
    Ok(edges)
}

/// Generates `vertex_count * edge_factor` edges on `vertex_count` vertices.
///
/// # Errors
/// Fails under the same conditions as [`validate_for_vertices`].
pub fn generate_for_vertices(
    vertex_count: usize,
    edge_factor: usize,
    seeds: (u64, u64),
) -> Result<Vec<Edge>> {
    let (scale, edge_count) = validate_for_vertices(vertex_count, edge_factor)?;
    generate(scale, edge_count, seeds)
}

/// Checks a vertex-driven configuration without generating anything and
/// returns the `(scale, edge_count)` pair it resolves to.
///
/// # Errors
/// Returns [`KroneckerError::NotPowerOfTwo`] when `vertex_count` is not a
/// power of two, [`KroneckerError::InvalidScale`] when it is `1`, and
/// [`KroneckerError::EdgeCountOverflow`] when the edge count overflows.
///
/// # Examples
/// ```
/// use brg_kronecker::{KroneckerError, validate_for_vertices};
///
/// assert_eq!(validate_for_vertices(64, 16), Ok((6, 1024)));
/// assert!(matches!(
///     validate_for_vertices(1, 16),
///     Err(KroneckerError::InvalidScale { scale: 0, .. })
/// ));
/// ```
pub fn validate_for_vertices(vertex_count: usize, edge_factor: usize) -> Result<(u32, usize)> {
    let scale = scale_for_vertices(vertex_count)?;
    check_scale(scale)?;
    let edge_count = vertex_count
        .checked_mul(edge_factor)
        .ok_or(KroneckerError::EdgeCountOverflow {
            vertex_count,
            edge_factor,
        })?;
    Ok((scale, edge_count))
}

/// Returns `log2(vertex_count)` for power-of-two vertex counts.
///
/// # Errors
/// Returns [`KroneckerError::NotPowerOfTwo`] otherwise, including for zero.
///
/// # Examples
/// ```
/// assert_eq!(brg_kronecker::scale_for_vertices(4096), Ok(12));
/// assert!(brg_kronecker::scale_for_vertices(100).is_err());
/// ```
pub fn scale_for_vertices(vertex_count: usize) -> Result<u32> {
    if !vertex_count.is_power_of_two() {
        return Err(KroneckerError::NotPowerOfTwo { vertex_count });
    }
    Ok(vertex_count.trailing_zeros())
}

fn check_scale(scale: u32) -> Result<()> {
    if scale == 0 || scale > MAX_SCALE {
        return Err(KroneckerError::InvalidScale {
            scale,
            max: MAX_SCALE,
        });
    }
    Ok(())
}

fn sample_cell(initiator: &Initiator, scale: u32, rng: &mut ChaCha8Rng) -> (usize, usize) {
    (0..scale).fold((0, 0), |(row, column), _| {
        let (row_bit, column_bit) = initiator.quadrant(rng.sample(Standard));
        ((row << 1) | row_bit, (column << 1) | column_bit)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampled_cells_stay_inside_the_matrix() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..256 {
            let (row, column) = sample_cell(&GRAPH500_INITIATOR, 5, &mut rng);
            assert!(row < 32 && column < 32);
        }
    }

    #[test]
    fn sampling_favours_the_top_left_quadrant() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let low = (0..2000)
            .map(|_| sample_cell(&GRAPH500_INITIATOR, 1, &mut rng))
            .filter(|&cell| cell == (0, 0))
            .count();
        assert!((1000..1300).contains(&low), "top-left count {low}");
    }
}
