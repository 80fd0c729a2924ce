//! Style-class resolution.
//!
//! A stylesheet is the built-in default rules with the document's `styles`
//! map merged over them (a document rule replaces a same-name default
//! wholesale). Resolution merges the requested classes in order, later
//! classes winning per attribute, then applies per-node overrides with the
//! highest precedence.

use crate::block::Block;
use crate::defaults;
use crate::escape::quote;
use indexmap::IndexMap;
use stemma_core::StyleRule;

/// How an attribute value lands in a DOT attribute list.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// HTML-like label content, emitted between `<` and `>` verbatim.
    Html(String),
    /// Quoted string literal.
    Text(String),
    /// Bare token: keywords (`invis`, `none`) and numbers.
    Raw(String),
}

impl AttrValue {
    pub fn html(content: impl Into<String>) -> Self {
        AttrValue::Html(content.into())
    }

    pub fn text(content: impl Into<String>) -> Self {
        AttrValue::Text(content.into())
    }

    pub fn raw(content: impl Into<String>) -> Self {
        AttrValue::Raw(content.into())
    }

    pub fn to_dot(&self) -> String {
        match self {
            AttrValue::Html(content) => format!("<{content}>"),
            AttrValue::Text(content) => quote(content),
            AttrValue::Raw(content) => content.clone(),
        }
    }
}

/// Attribute name to value, in declaration order.
pub type Attrs = IndexMap<String, AttrValue>;

#[derive(Debug, Clone)]
pub struct Stylesheet {
    rules: IndexMap<String, Attrs>,
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self {
            rules: defaults::default_rules(),
        }
    }
}

impl Stylesheet {
    /// The built-in rules with the document's named rules merged over them.
    pub fn with_document_styles(styles: &IndexMap<String, StyleRule>) -> Self {
        let mut sheet = Self::default();
        for (class, rule) in styles {
            sheet.rules.insert(class.clone(), convert_rule(rule));
        }
        sheet
    }

    /// Resolves class names and overrides into `key=value` attribute lines.
    ///
    /// Overrides are emitted first, then the remaining class-derived
    /// attributes in definition order. Unknown class names contribute
    /// nothing.
    pub fn resolve(&self, classes: &[&str], overrides: &Attrs) -> Vec<Block> {
        let mut merged: Attrs = Attrs::new();
        for class in classes {
            if let Some(rule) = self.rules.get(*class) {
                for (key, value) in rule {
                    merged.insert(key.clone(), value.clone());
                }
            }
        }

        let mut lines = Vec::new();
        for (key, value) in overrides {
            lines.push(Block::line(format!("{key}={}", value.to_dot())));
        }
        for (key, value) in &merged {
            if overrides.contains_key(key) {
                continue;
            }
            lines.push(Block::line(format!("{key}={}", value.to_dot())));
        }
        lines
    }
}

// Document-supplied rule values are untyped JSON; numbers and booleans emit
// bare, strings wrapped in angle brackets emit as HTML labels, everything
// else is quoted.
fn convert_rule(rule: &StyleRule) -> Attrs {
    let mut attrs = Attrs::new();
    for (key, value) in rule {
        let converted = match value {
            serde_json::Value::String(text) => {
                if text.len() >= 2 && text.starts_with('<') && text.ends_with('>') {
                    AttrValue::html(&text[1..text.len() - 1])
                } else {
                    AttrValue::text(text.as_str())
                }
            }
            serde_json::Value::Number(n) => AttrValue::raw(n.to_string()),
            serde_json::Value::Bool(b) => AttrValue::raw(b.to_string()),
            _ => continue,
        };
        attrs.insert(key.clone(), converted);
    }
    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::serialize;
    use serde_json::json;

    fn lines(blocks: Vec<Block>) -> String {
        serialize(&Block::seq(blocks), "  ")
    }

    #[test]
    fn overrides_take_precedence_over_class_attributes() {
        let sheet = Stylesheet::default();
        let overrides = Attrs::from_iter([(
            "fillcolor".to_string(),
            AttrValue::text("#123456"),
        )]);

        let out = lines(sheet.resolve(&[":union"], &overrides));
        assert!(out.contains("fillcolor=\"#123456\""));
        assert_eq!(out.matches("fillcolor=").count(), 1);
    }

    #[test]
    fn later_classes_win_per_attribute() {
        let styles = IndexMap::from_iter([
            (
                ":a".to_string(),
                StyleRule::from_iter([
                    ("color".to_string(), json!("#111111")),
                    ("shape".to_string(), json!("box")),
                ]),
            ),
            (
                ":b".to_string(),
                StyleRule::from_iter([("color".to_string(), json!("#222222"))]),
            ),
        ]);
        let sheet = Stylesheet::with_document_styles(&styles);

        let out = lines(sheet.resolve(&[":a", ":b"], &Attrs::new()));
        assert!(out.contains("color=\"#222222\""));
        assert!(out.contains("shape=\"box\""));
        assert!(!out.contains("#111111"));
    }

    #[test]
    fn unknown_classes_contribute_nothing() {
        let sheet = Stylesheet::default();
        assert!(sheet.resolve(&[":no-such-class"], &Attrs::new()).is_empty());
    }

    #[test]
    fn document_rules_replace_defaults_wholesale() {
        let styles = IndexMap::from_iter([(
            ":union".to_string(),
            StyleRule::from_iter([("shape".to_string(), json!("square"))]),
        )]);
        let sheet = Stylesheet::with_document_styles(&styles);

        let out = lines(sheet.resolve(&[":union"], &Attrs::new()));
        assert!(out.contains("shape=\"square\""));
        // The default :union rule carried a label; the document rule dropped it.
        assert!(!out.contains("label="));
    }

    #[test]
    fn value_kinds_render_with_expected_quoting() {
        let styles = IndexMap::from_iter([(
            ":mixed".to_string(),
            StyleRule::from_iter([
                ("label".to_string(), json!("<<b>Bold</b>>")),
                ("weight".to_string(), json!(3)),
                ("color".to_string(), json!("#aabbcc")),
            ]),
        )]);
        let sheet = Stylesheet::with_document_styles(&styles);

        let out = lines(sheet.resolve(&[":mixed"], &Attrs::new()));
        assert!(out.contains("label=<<b>Bold</b>>"));
        assert!(out.contains("weight=3"));
        assert!(out.contains("color=\"#aabbcc\""));
    }
}
