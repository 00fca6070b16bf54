//! Builds Korean to Taiwanese name dictionaries from the localized student datasets.

pub mod input;
pub mod mapping;
pub mod output;
pub mod source;

use mapping::{MappingKind, NameMapping};
use source::Source;
use std::{path::PathBuf, time::Duration};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct Config {
    pub kind: MappingKind,
    pub kr: Source,
    pub tw: Source,
    pub output: PathBuf,
    pub timeout: Duration,
}

impl Config {
    /// Fetches both datasets from upstream and writes to the kind's default file in the working directory.
    pub fn new(kind: MappingKind) -> Self {
        Self {
            kind,
            kr: Source::Url(source::KR_STUDENTS_URL.to_string()),
            tw: Source::Url(source::TW_STUDENTS_URL.to_string()),
            output: PathBuf::from(kind.default_file_name()),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Loads both datasets, builds the mapping and writes it out.
/// Nothing is written if either dataset fails to load.
/// Returns the path of the written file.
pub fn run(config: &Config) -> eyre::Result<PathBuf> {
    let (kr, tw) = source::load_pair(&config.kr, &config.tw, config.timeout)?;

    tracing::info!("producing mapping");
    let mapping = NameMapping::derive(config.kind, &kr, &tw);
    tracing::info!("mapped {} names", mapping.len());

    tracing::info!("writing output");
    output::write_mapping(&mapping, &config.output)?;
    Ok(config.output.clone())
}
