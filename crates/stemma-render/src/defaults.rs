//! Built-in palette and stylesheet.

use crate::style::{AttrValue, Attrs};
use indexmap::IndexMap;

/// Fill colors cycled over families in render order.
pub const FAMILY_COLORS: &[&str] = &[
    "#cc5555", "#5577cc", "#55aa55", "#aa55aa", "#bb8844", "#44aaaa", "#8855cc", "#cc5588",
    "#779933", "#5555cc",
];

pub const BIRTH_COLOR: &str = "#264d18";
pub const DEATH_COLOR: &str = "#6f1d1d";
pub const DOCUMENT_LINK_COLOR: &str = "#0069c2";
pub const DIM_COLOR: &str = "#666666";

fn rule(entries: &[(&str, AttrValue)]) -> Attrs {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

pub(crate) fn default_rules() -> IndexMap<String, Attrs> {
    use AttrValue::{Raw, Text};

    IndexMap::from_iter([
        (
            ":digraph".to_string(),
            rule(&[
                ("ranksep", Raw("0.4".into())),
                ("splines", Raw("true".into())),
            ]),
        ),
        (
            ":edge".to_string(),
            rule(&[
                ("dir", Raw("none".into())),
                ("color", Text("#bbbbbb".into())),
            ]),
        ),
        (
            ":node".to_string(),
            rule(&[
                ("shape", Raw("box".into())),
                ("style", Raw("filled".into())),
                ("color", Text("#cccccc".into())),
                ("fillcolor", Text("#ffffff".into())),
                ("fontname", Text("Helvetica".into())),
                ("fontsize", Raw("11".into())),
            ]),
        ),
        (
            ":house".to_string(),
            rule(&[
                ("style", Raw("filled".into())),
                ("color", Text("#dddddd".into())),
                ("fillcolor", Text("#fafafa".into())),
                ("fontsize", Raw("12".into())),
            ]),
        ),
        (
            ":house-2".to_string(),
            rule(&[("fillcolor", Text("#f2f2f2".into()))]),
        ),
        (
            ":house-3".to_string(),
            rule(&[("fillcolor", Text("#eaeaea".into()))]),
        ),
        (
            ":family".to_string(),
            rule(&[("peripheries", Raw("0".into()))]),
        ),
        (
            ":union".to_string(),
            rule(&[
                ("shape", Raw("circle".into())),
                ("style", Raw("filled".into())),
                ("label", Text(String::new())),
                ("width", Raw("0.12".into())),
                ("height", Raw("0.12".into())),
            ]),
        ),
        (
            ":children".to_string(),
            rule(&[
                ("shape", Raw("point".into())),
                ("style", Raw("filled".into())),
                ("label", Text(String::new())),
                ("width", Raw("0.06".into())),
            ]),
        ),
        (
            ":parent-link".to_string(),
            rule(&[("weight", Raw("2".into()))]),
        ),
        (
            ":parent2-link".to_string(),
            rule(&[("style", Raw("dashed".into()))]),
        ),
        (
            ":parent-child-link".to_string(),
            rule(&[("weight", Raw("3".into()))]),
        ),
        (":child-link".to_string(), rule(&[("weight", Raw("2".into()))])),
        (
            ":child2-link".to_string(),
            rule(&[("style", Raw("dashed".into()))]),
        ),
        (
            ":child-links".to_string(),
            rule(&[("weight", Raw("10".into()))]),
        ),
    ])
}
