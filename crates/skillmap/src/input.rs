//! Types modeling the localized student datasets.
//!
//! Only the fields used for building mappings are modeled, everything else in the records is ignored.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Student {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Skills", default, deserialize_with = "null_as_empty")]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Skill {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
}

// a `"Skills": null` is treated the same as a missing field
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Skill>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let skills = Option::<Vec<Skill>>::deserialize(deserializer)?;
    Ok(skills.unwrap_or_default())
}
