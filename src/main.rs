use std::env;

mod cli;
mod config;
mod exits;
mod pass;
mod rng;

fn main() {
    exits::install_handlers();

    // Diagnostics are opt-in via RUST_LOG; silent otherwise.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    cli::run(args);
}
