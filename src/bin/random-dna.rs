use clap::Parser;
use random_dna::cli::{run, GenerationRequest, RunOptions, ARGUMENT_COUNT_MESSAGE, USAGE_MESSAGE};
use random_dna::error::GeneratorError;
use random_dna::generator::DEFAULT_CHUNK_SIZE;
use random_dna::tracing::start_random_dna_tracing_subscriber;
use std::io;
use std::process::ExitCode;
use tracing::error;

/// Generates a random DNA sequence of the given length and writes it to stdout.
/// Symbols are drawn uniformly unless four weights for A, C, G and T are given,
/// in which case each symbol is drawn with probability weight / sum(weights).
#[derive(Parser)]
#[clap(version, about)]
struct Args {
    #[arg(short, long)]
    /// Seed for the random source (a random seed is used if omitted)
    seed: Option<u64>,

    #[arg(short, long, default_value_t = 1)]
    /// Number of threads to generate with. The output for a given seed
    /// is the same for any thread count
    threads: usize,

    #[arg(allow_hyphen_values = true, value_name = "LENGTH [P(A) P(C) P(G) P(T)]")]
    /// Sequence length, optionally followed by the four symbol weights.
    /// Options must come before the length
    positionals: Vec<String>,
}

fn main() -> ExitCode {
    // Initialize the tracing subscriber to handle debug, info, warn, and error macro calls
    start_random_dna_tracing_subscriber();

    // Parse arguments from the command line
    let args = Args::parse();

    // Validate everything before any output is produced
    let request = match GenerationRequest::from_positionals(&args.positionals) {
        Ok(request) => request,
        Err(GeneratorError::ArgumentCount { .. }) => {
            eprintln!("{}", ARGUMENT_COUNT_MESSAGE);
            eprintln!("{}", USAGE_MESSAGE);
            return ExitCode::FAILURE;
        }
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let options = RunOptions {
        seed: args.seed,
        threads: args.threads,
        chunk_size: DEFAULT_CHUNK_SIZE,
    };

    let stdout = io::stdout();
    match run(&request, &options, stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
