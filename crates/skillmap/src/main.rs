//! Creates the `skill_name_mapping.json` and `students_mapping.json` files.

mod cli;

use clap::Parser;
use cli::Cli;
use skillmap::{source::Source, Config};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> eyre::Result<()> {
    // stdout is reserved for the result line
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let kind = cli.kind.into();
    let mut config = Config::new(kind);
    if let Some(kr) = &cli.kr {
        config.kr = Source::parse(kr);
    }
    if let Some(tw) = &cli.tw {
        config.tw = Source::parse(tw);
    }
    if let Some(output) = cli.output {
        config.output = output;
    }
    config.timeout = Duration::from_secs(cli.timeout);

    let path = skillmap::run(&config)?;
    println!("{} saved to {}", kind.description(), path.display());
    Ok(())
}
