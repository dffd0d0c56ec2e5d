//! Independent chaos-game chains run in parallel
//!
//! The chaos game itself is sequential. Parallelism comes from splitting the
//! requested point count over several chains, each starting at the origin
//! with its own random source and its own cache, and concatenating results.

use crate::{
    algorithm::cache::TransformCache,
    algorithm::generator::generate_seeded,
    algorithm::selection::GenerationConfig,
    io::error::{Result, invalid_parameter},
    math::Point,
};
use rayon::prelude::*;

/// Number of points assigned to each chain
///
/// The remainder of an uneven split goes to the leading chains.
pub fn chain_lengths(point_count: usize, chains: usize) -> Vec<usize> {
    if chains == 0 {
        return Vec::new();
    }
    let base = point_count / chains;
    let extra = point_count % chains;
    (0..chains)
        .map(|index| base + usize::from(index < extra))
        .collect()
}

/// Generate `point_count` points over `chains` independent chains
///
/// Chain `i` is seeded with `seed + i`; output is concatenated in chain
/// order, so a fixed seed and chain count always produce the same points.
///
/// # Errors
///
/// Returns an error if:
/// - `chains` is zero
/// - The configuration fails validation
pub fn generate_chains(
    point_count: usize,
    config: &GenerationConfig,
    chains: usize,
    seed: u64,
    use_cache: bool,
) -> Result<Vec<Point>> {
    if chains == 0 {
        return Err(invalid_parameter(
            "chains",
            &chains,
            &"at least one chain is required",
        ));
    }
    config.validate()?;

    let lengths = chain_lengths(point_count, chains);
    let parts = lengths
        .into_par_iter()
        .enumerate()
        .map(|(index, length)| -> Result<Vec<Point>> {
            let chain_seed = seed.wrapping_add(index as u64);
            let game = generate_seeded(length, config, chain_seed)?;
            let points: Vec<Point> = if use_cache {
                game.with_cache(TransformCache::new()).collect()
            } else {
                game.collect()
            };
            Ok(points)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(parts.into_iter().flatten().collect())
}
