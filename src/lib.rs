pub mod cli;
pub mod error;
pub mod generator;
pub mod io;
pub mod nucleotide;
pub mod tracing;
pub mod weights;

#[cfg(test)]
mod tests;
