use std::io::{self, IsTerminal};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the global subscriber. Standard output carries the generated
/// sequence, so logs only ever go to stderr.
pub fn start_random_dna_tracing_subscriber() {
    // Get the logging filter level from the RUST_LOG environment variable
    //   - WARN and ERROR messages are always logged
    //   - If RUST_LOG=debug, the seed, sampling mode and composition are included
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Create a layer that logs to stderr, coloured only when stderr is a terminal
    let stderr_log = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false);

    // Combine the layer into a registry (a subscriber)
    let tracer_registry = tracing_subscriber::registry().with(stderr_log.with_filter(env_filter));

    // Initialize the subscriber
    tracer_registry.init()
}
