//! Loads the student datasets, either over HTTP or from disk.

use crate::input::Student;
use eyre::WrapErr;
use reqwest::blocking::{Client, Response};
use std::{fmt, fs::File, io::BufReader, path::PathBuf, time::Duration};

pub const KR_STUDENTS_URL: &str =
    "https://raw.githubusercontent.com/SchaleDB/SchaleDB/main/data/kr/students.json";
pub const TW_STUDENTS_URL: &str =
    "https://raw.githubusercontent.com/SchaleDB/SchaleDB/main/data/tw/students.json";

/// Where a dataset is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl Source {
    /// Anything starting with `http://` or `https://` is treated as a URL, everything else as a path.
    pub fn parse(s: &str) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            Self::Url(s.to_string())
        } else {
            Self::File(PathBuf::from(s))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Loads the Korean and Taiwanese datasets.
///
/// Both requests are sent before either response is checked.
/// A failure status on either response fails the whole load.
pub fn load_pair(
    kr: &Source,
    tw: &Source,
    timeout: Duration,
) -> eyre::Result<(Vec<Student>, Vec<Student>)> {
    let client = Client::builder()
        .timeout(timeout)
        .build()
        .wrap_err("Failed to create HTTP client")?;

    let kr = open(&client, kr)?;
    let tw = open(&client, tw)?;
    let kr = kr.validate("korean")?;
    let tw = tw.validate("taiwanese")?;

    tracing::info!("deserializing datasets");
    Ok((kr.deserialize()?, tw.deserialize()?))
}

enum Opened<'a> {
    Response(&'a str, Response),
    File(&'a PathBuf, File),
}

fn open<'a>(client: &Client, source: &'a Source) -> eyre::Result<Opened<'a>> {
    match source {
        Source::Url(url) => {
            tracing::info!("fetching {url}");
            let response = client
                .get(url)
                .send()
                .wrap_err_with(|| format!("Failed to fetch '{url}'"))?;
            Ok(Opened::Response(url, response))
        }
        Source::File(path) => {
            tracing::info!("opening {}", path.display());
            let file = File::open(path)
                .wrap_err_with(|| format!("Failed to open file at '{}'", path.display()))?;
            Ok(Opened::File(path, file))
        }
    }
}

impl<'a> Opened<'a> {
    fn validate(self, dataset: &str) -> eyre::Result<Self> {
        if let Self::Response(url, response) = &self {
            let status = response.status();
            if !status.is_success() {
                eyre::bail!(
                    "Fetching the {dataset} dataset from '{url}' failed with status {status}"
                );
            }
        }
        Ok(self)
    }

    fn deserialize(self) -> eyre::Result<Vec<Student>> {
        match self {
            Self::Response(url, response) => {
                let body = response
                    .bytes()
                    .wrap_err_with(|| format!("Failed to read response from '{url}'"))?;
                serde_json::from_slice(&body)
                    .wrap_err_with(|| format!("Failed to deserialize response from '{url}'"))
            }
            Self::File(path, file) => serde_json::from_reader(BufReader::new(file))
                .wrap_err_with(|| format!("Failed to deserialize '{}'", path.display())),
        }
    }
}
