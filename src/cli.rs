//! Turns the positional command line into a validated [`GenerationRequest`]
//! and runs it. Everything is validated before a single symbol is written.

use rand::Rng;
use rayon::ThreadPoolBuilder;
use std::io::Write;
use tracing::{debug, info};

use crate::error::{GeneratorError, Result};
use crate::generator::{composition, generate_parallel, SamplingMode, DEFAULT_CHUNK_SIZE};
use crate::io::write_sequence;
use crate::weights::Weights;

pub const ARGUMENT_COUNT_MESSAGE: &str = "ERROR: Incorrect number of arguments";
pub const USAGE_MESSAGE: &str = "USAGE: random-dna <length> [P(A) P(C) P(G) P(T)]";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationRequest {
    pub length: usize,
    pub mode: SamplingMode,
}

impl GenerationRequest {
    /// Accepts `<length>` or `<length> <wA> <wC> <wG> <wT>`.
    pub fn from_positionals<S: AsRef<str>>(positionals: &[S]) -> Result<Self> {
        if positionals.len() != 1 && positionals.len() != 5 {
            return Err(GeneratorError::ArgumentCount {
                found: positionals.len(),
            });
        }

        let raw_length: &str = positionals[0].as_ref();
        let length = raw_length
            .trim()
            .parse::<usize>()
            .map_err(|_| GeneratorError::LengthParse {
                value: raw_length.to_string(),
            })?;

        let mode = if positionals.len() == 5 {
            SamplingMode::Weighted(Weights::parse(&positionals[1..])?)
        } else {
            SamplingMode::Uniform
        };

        Ok(GenerationRequest { length, mode })
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RunOptions {
    /// Seed for the random source, drawn from the thread RNG when absent
    pub seed: Option<u64>,
    pub threads: usize,
    pub chunk_size: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            seed: None,
            threads: 1,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Generates the requested sequence and writes it to `writer`.
pub fn run<W: Write>(request: &GenerationRequest, options: &RunOptions, writer: W) -> Result<()> {
    let seed = options.seed.unwrap_or_else(|| rand::rng().random());
    debug!("seed: {}", seed);
    match &request.mode {
        SamplingMode::Uniform => debug!("sampling {} symbols uniformly", request.length),
        SamplingMode::Weighted(weights) => {
            debug!("sampling {} symbols with weights {}", request.length, weights)
        }
    }

    // A single-threaded pool draws the same chunks, so the thread count never changes the output
    let threads = options.threads.max(1);
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|error| GeneratorError::ThreadPool(error.to_string()))?;
    info!("generating on {} threads", threads);
    let sequence =
        pool.install(|| generate_parallel(request.length, &request.mode, seed, options.chunk_size))?;

    let [a, c, g, t] = composition(&sequence);
    debug!("composition: A={} C={} G={} T={}", a, c, g, t);

    write_sequence(&sequence, writer)
}
