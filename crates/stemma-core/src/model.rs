use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// A named style rule: attribute name to attribute value, in declaration order.
///
/// Values stay untyped at this boundary; the renderer decides how each value is
/// quoted when it lands in a DOT attribute list.
pub type StyleRule = IndexMap<String, serde_json::Value>;

/// Top-level genealogy document: the root house plus optional named style rules
/// that the renderer merges over its built-in stylesheet.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Genealogy {
    #[serde(default)]
    pub styles: IndexMap<String, StyleRule>,

    #[serde(flatten)]
    pub root: House,
}

/// A named grouping of people and families, possibly nested.
///
/// The root house has no meaningful `name`; nested houses are keyed by their
/// id in the parent's `houses` map. Iteration order of `people` and `houses`
/// is insertion order, and it is significant: the renderer emits statements in
/// that order, which is what keeps layout stable across runs.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct House {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "map_or_empty")]
    pub people: IndexMap<String, Person>,

    #[serde(default, deserialize_with = "seq_or_empty")]
    pub families: Vec<Family>,

    #[serde(default, deserialize_with = "map_or_empty")]
    pub houses: IndexMap<String, House>,
}

/// One parent/child relationship unit.
///
/// `parents2`/`children2` are a second, parallel group (a second marriage, a
/// step-relationship) that the renderer tags with distinguishing style
/// classes. Nested sub-families are expected to be declared deepest-last; see
/// the renderer for why that order matters.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Family {
    #[serde(default)]
    pub parents: Vec<String>,

    #[serde(default)]
    pub parents2: Vec<String>,

    #[serde(default)]
    pub children: Vec<String>,

    #[serde(default)]
    pub children2: Vec<String>,

    #[serde(default, deserialize_with = "seq_or_empty")]
    pub families: Vec<Family>,

    /// Name of an associated house, rendered as a label prelude inside the
    /// family cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house: Option<String>,

    /// Accepted for input compatibility; carries no rendering semantics.
    #[serde(default)]
    pub affinity: Vec<String>,

    #[serde(default)]
    pub links: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Person {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,

    #[serde(default, deserialize_with = "opt_stringish")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub born: Option<String>,

    #[serde(default, deserialize_with = "opt_stringish")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub died: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthplace: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deathplace: Option<String>,

    /// Document kind key to filename, e.g. `acte_naissance: jean-1900.jpg`.
    #[serde(default)]
    pub files: IndexMap<String, String>,

    #[serde(default)]
    pub links: Vec<String>,

    /// Style class names applied to this person's node.
    #[serde(default)]
    pub class: Vec<String>,
}

impl Family {
    /// True when either parent group has at least one entry.
    pub fn has_parents(&self) -> bool {
        !self.parents.is_empty() || !self.parents2.is_empty()
    }

    /// True when either child group has at least one entry.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty() || !self.children2.is_empty()
    }

    /// Total number of children across both groups.
    pub fn child_count(&self) -> usize {
        self.children.len() + self.children2.len()
    }
}

// Null list entries and null map values are tolerated on input and coerced to
// empty records, matching the permissive source format.

fn seq_or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let items: Vec<Option<T>> = Vec::deserialize(deserializer)?;
    Ok(items.into_iter().map(Option::unwrap_or_default).collect())
}

fn map_or_empty<'de, D, T>(deserializer: D) -> Result<IndexMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let entries: IndexMap<String, Option<T>> = IndexMap::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .map(|(k, v)| (k, v.unwrap_or_default()))
        .collect())
}

fn opt_stringish<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Stringish {
        Text(String),
        Int(i64),
        Float(f64),
    }

    let value: Option<Stringish> = Option::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        Stringish::Text(s) => s,
        Stringish::Int(n) => n.to_string(),
        Stringish::Float(n) => n.to_string(),
    }))
}
