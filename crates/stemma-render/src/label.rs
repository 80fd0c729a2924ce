//! Person label composition.
//!
//! A person with a resolvable display name gets an HTML-like table label:
//! primary name, dimmed full name, birth/death rows with the year bolded,
//! italic place rows, and one hyperlinked row per attached document. A person
//! with no resolvable name is labeled by the bare identifier.

use crate::defaults::{BIRTH_COLOR, DEATH_COLOR, DIM_COLOR, DOCUMENT_LINK_COLOR};
use crate::style::AttrValue;
use regex::Regex;
use std::sync::OnceLock;
use stemma_core::Person;

fn pascal_word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Z][^A-Z]+").expect("valid regex"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName {
    pub name: Option<String>,
    pub fullname: Option<String>,
}

/// Resolves a person's display name from explicit fields or the identifier.
///
/// Explicit `name`/`fullname` win. Otherwise the identifier is split on
/// PascalCase boundaries (`JeanDupont` -> `Jean` + `Jean Dupont`); an
/// identifier with no such boundary yields whatever was explicit, which may
/// be nothing at all.
pub fn devise_name(person: &Person, id: &str) -> DisplayName {
    let words: Vec<&str> = pascal_word_regex()
        .find_iter(id)
        .map(|m| m.as_str())
        .collect();

    if words.is_empty() {
        return DisplayName {
            name: person.name.clone(),
            fullname: person.fullname.clone(),
        };
    }

    DisplayName {
        name: person
            .name
            .clone()
            .or_else(|| Some(words[0].to_string())),
        fullname: person.fullname.clone().or_else(|| Some(words.join(" "))),
    }
}

/// Label text for a document kind. Total: unknown kinds fall back to the raw
/// key rather than an undefined placeholder.
pub fn document_label(kind: &str) -> &str {
    match kind {
        "acte_naissance" => "acte de naissance",
        "acte_mariage" => "acte de mariage",
        "acte_deces" => "acte de décès",
        "table_naissance" => "publication de naissance",
        "table_mariage" => "publication de mariage",
        "table_deces" => "publication de décès",
        other => other,
    }
}

fn table_row(content: &str, color: &str, point_size: u8) -> String {
    format!(
        r#"<tr><td align="center"><font point-size="{point_size}" color="{color}">{content}</font></td></tr>"#
    )
}

/// A date row with the trailing token (the year) bolded: `12 May <b>1900</b>`.
fn date_row(date: Option<&str>, color: &str) -> Option<String> {
    let mut tokens: Vec<&str> = date?.split(' ').filter(|t| !t.is_empty()).collect();
    let year = tokens.pop()?;
    let content = if tokens.is_empty() {
        format!("<b>{year}</b>")
    } else {
        format!("{} <b>{year}</b>", tokens.join(" "))
    };
    Some(table_row(&content, color, 10))
}

fn place_row(place: Option<&str>, color: &str) -> Option<String> {
    let place = place?.trim();
    if place.is_empty() {
        return None;
    }
    Some(table_row(&format!("<i>{place}</i>"), color, 9))
}

fn document_row(kind: &str, filename: &str) -> String {
    format!(
        r#"<tr><td align="center" cellpadding="1" href="files/{filename}"><font point-size="8" color="{DOCUMENT_LINK_COLOR}"><u>{label}</u></font></td></tr>"#,
        label = document_label(kind),
    )
}

/// Builds the label attribute for a person node.
pub fn person_label(person: &Person, id: &str) -> AttrValue {
    let DisplayName { name, fullname } = devise_name(person, id);

    if name.is_none() && fullname.is_none() {
        return AttrValue::text(id);
    }

    let primary = name.as_deref().unwrap_or(id);
    let full = fullname.as_deref().or(name.as_deref()).unwrap_or(id);

    let mut html = String::from(
        r#"<table align="center" border="0" cellpadding="0" cellspacing="2" width="4">"#,
    );
    html.push_str(&format!(
        r#"<tr><td align="center">{primary}</td></tr>"#
    ));
    html.push_str(&format!(
        r#"<tr><td align="center"><font point-size="10" color="{DIM_COLOR}">{full}</font></td></tr>"#
    ));

    if let Some(row) = date_row(person.born.as_deref(), BIRTH_COLOR) {
        html.push_str(&row);
    }
    if let Some(row) = place_row(person.birthplace.as_deref(), BIRTH_COLOR) {
        html.push_str(&row);
    }
    if let Some(row) = date_row(person.died.as_deref(), DEATH_COLOR) {
        html.push_str(&row);
    }
    if let Some(row) = place_row(person.deathplace.as_deref(), DEATH_COLOR) {
        html.push_str(&row);
    }
    for (kind, filename) in &person.files {
        html.push_str(&document_row(kind, filename));
    }

    html.push_str("</table>");
    AttrValue::Html(html)
}
