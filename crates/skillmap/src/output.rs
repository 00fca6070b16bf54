//! Writes mappings to disk.

use crate::mapping::NameMapping;
use eyre::WrapErr;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Writes the mapping as a JSON object indented with four spaces, replacing any existing file.
/// Non-ASCII text is written as is.
pub fn write_mapping(mapping: &NameMapping, path: &Path) -> eyre::Result<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("Failed to create file at '{}'", path.display()))?;
    let mut writer = BufWriter::new(file);
    to_writer(mapping, &mut writer)
        .wrap_err_with(|| format!("Failed to write mapping to '{}'", path.display()))?;
    writer.flush()?;
    Ok(())
}

fn to_writer<W: Write>(mapping: &NameMapping, writer: W) -> serde_json::Result<()> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(writer, formatter);
    mapping.serialize(&mut serializer)
}
