//! Error type shared by the library and the `random-dna` binary.

use thiserror::Error;

use crate::nucleotide::Nucleotide;

#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Neither `<length>` alone nor `<length>` plus four weights was given
    #[error("incorrect number of arguments: expected 1 or 5 positional arguments, found {found}")]
    ArgumentCount { found: usize },

    #[error("could not parse length '{value}' as a non-negative integer")]
    LengthParse { value: String },

    #[error("could not parse weight for {symbol} '{value}' as a number")]
    WeightParse { symbol: Nucleotide, value: String },

    /// Weights must be finite and non-negative
    #[error("invalid weight for {symbol}: {value} (weights must be finite and non-negative)")]
    InvalidWeight { symbol: Nucleotide, value: f64 },

    #[error("invalid weights: at least one weight must be positive")]
    DegenerateWeights,

    #[error("invalid weights: the weights sum to a non-finite total")]
    WeightOverflow,

    /// The sequence could not be held in memory
    #[error("length {length} is too large to generate")]
    LengthTooLarge { length: usize },

    #[error("could not build thread pool: {0}")]
    ThreadPool(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
