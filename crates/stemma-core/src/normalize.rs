use crate::model::Genealogy;
use crate::{Error, Result};

/// Normalizes an untyped genealogy value into the typed model.
///
/// Every absent collection (`people`, `families`, `houses`, parent/child
/// groups) lands as an empty container, so downstream rendering never
/// special-cases missing fields. The only failure mode is a top-level shape
/// the model cannot absorb (a scalar, an array, a mistyped field).
pub fn normalize(value: serde_json::Value) -> Result<Genealogy> {
    let doc: Genealogy =
        serde_json::from_value(value).map_err(|err| Error::InvalidShape {
            message: err.to_string(),
        })?;

    tracing::debug!(
        people = doc.root.people.len(),
        families = doc.root.families.len(),
        houses = doc.root.houses.len(),
        styles = doc.styles.len(),
        "normalized genealogy document"
    );

    Ok(doc)
}

impl Genealogy {
    /// Parses and normalizes a JSON document.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|err| Error::InvalidJson {
                message: err.to_string(),
            })?;
        normalize(value)
    }

    /// Parses and normalizes a YAML document.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_yaml::from_str(text).map_err(|err| Error::InvalidYaml {
                message: err.to_string(),
            })?;
        normalize(value)
    }
}
