use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::debug;

use crate::error::{GeneratorError, Result};
use crate::nucleotide::Nucleotide;
use crate::weights::Weights;

/// Number of symbols drawn from one random stream in parallel generation.
pub const DEFAULT_CHUNK_SIZE: usize = 1 << 20;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SamplingMode {
    Uniform,
    Weighted(Weights),
}

pub fn draw_uniform<R: Rng + ?Sized>(rng: &mut R) -> Nucleotide {
    Nucleotide::ALL[rng.random_range(0..4)]
}

/// Cumulative weight walk over A, C, G, T.
pub fn draw_weighted<R: Rng + ?Sized>(weights: &Weights, rng: &mut R) -> Nucleotide {
    let threshold = rng.random_range(0.0..weights.total());
    let mut upto = 0.0;
    for symbol in Nucleotide::ALL {
        upto += weights.weight(symbol);
        // Strict comparison so a zero weight is never chosen when the threshold is exactly 0
        if upto > threshold {
            return symbol;
        }
    }
    // Rounding in the running sum can leave it just short of the total
    weights.last_positive()
}

pub fn draw<R: Rng + ?Sized>(mode: &SamplingMode, rng: &mut R) -> Nucleotide {
    match mode {
        SamplingMode::Uniform => draw_uniform(rng),
        SamplingMode::Weighted(weights) => draw_weighted(weights, rng),
    }
}

/// Reserves room for `length` symbols up front so an impossible length is an
/// error rather than an allocation failure.
fn sequence_buffer(length: usize) -> Result<Vec<Nucleotide>> {
    let mut sequence = Vec::new();
    sequence
        .try_reserve_exact(length)
        .map_err(|_| GeneratorError::LengthTooLarge { length })?;
    Ok(sequence)
}

/// Draws `length` independent symbols, in draw order.
pub fn generate<R: Rng + ?Sized>(
    length: usize,
    mode: &SamplingMode,
    rng: &mut R,
) -> Result<Vec<Nucleotide>> {
    let mut sequence = sequence_buffer(length)?;
    sequence.extend((0..length).map(|_| draw(mode, rng)));
    Ok(sequence)
}

fn chunk_seed(seed: u64, chunk_index: u64) -> u64 {
    // Golden-ratio stride keeps neighbouring chunk seeds far apart
    seed.wrapping_add(chunk_index.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Generates the sequence in fixed-size chunks on the current rayon pool.
///
/// Each chunk has its own `StdRng` derived from `seed` and the chunk index and
/// fills its own slice of the output, so the result depends on `seed` and
/// `chunk_size` but not on how many threads the pool has.
pub fn generate_parallel(
    length: usize,
    mode: &SamplingMode,
    seed: u64,
    chunk_size: usize,
) -> Result<Vec<Nucleotide>> {
    let mut sequence = sequence_buffer(length)?;
    let chunk_size = chunk_size.max(1);
    let num_chunks = length.div_ceil(chunk_size);
    debug!(
        "generating {} symbols in {} chunks of up to {}",
        length, num_chunks, chunk_size
    );

    sequence.resize(length, Nucleotide::A);
    sequence
        .par_chunks_mut(chunk_size)
        .enumerate()
        .for_each(|(chunk_index, chunk)| {
            let mut rng = StdRng::seed_from_u64(chunk_seed(seed, chunk_index as u64));
            for slot in chunk.iter_mut() {
                *slot = draw(mode, &mut rng);
            }
        });
    Ok(sequence)
}

/// Per-symbol counts in A, C, G, T order.
pub fn composition(sequence: &[Nucleotide]) -> [usize; 4] {
    let mut counts = [0_usize; 4];
    for symbol in sequence {
        counts[symbol.index()] += 1;
    }
    counts
}
