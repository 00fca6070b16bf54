use clap::{Parser, ValueEnum};
use skillmap::mapping::MappingKind;
use std::path::PathBuf;

/// Creates a Korean to Taiwanese name mapping from the localized student datasets.
/// Without arguments, fetches both datasets from upstream and writes `skill_name_mapping.json`.
#[derive(Parser)]
#[command(author, version, about, long_about)]
pub struct Cli {
    /// Which names to map.
    #[arg(short, long, value_enum, default_value_t = Kind::Skills)]
    pub kind: Kind,
    /// URL or path of the Korean students.json.
    #[arg(long)]
    pub kr: Option<String>,
    /// URL or path of the Taiwanese students.json.
    #[arg(long)]
    pub tw: Option<String>,
    /// The path to the output file. Defaults to `skill_name_mapping.json` or `students_mapping.json`.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// HTTP request timeout in seconds.
    #[arg(short, long, default_value_t = 30)]
    pub timeout: u64,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Kind {
    Skills,
    Students,
}

impl From<Kind> for MappingKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Skills => MappingKind::Skills,
            Kind::Students => MappingKind::Students,
        }
    }
}
