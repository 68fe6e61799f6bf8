//! Dynstack demo - the article page driven from the command line.
//!
//! Usage: `dynstack-demo [config.json] [open-first|close-first|open-second|close-second]...`
//!
//! Set `RUST_LOG=debug` to see every layout pass.

mod page;

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Set up logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting dynstack demo");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = page::Options::parse(&args)?;
    page::run(options)
}
