use crate::*;
use serde_json::json;

#[test]
fn normalize_fills_structural_defaults() {
    let doc = normalize(json!({})).unwrap();

    assert!(doc.root.name.is_none());
    assert!(doc.root.people.is_empty());
    assert!(doc.root.families.is_empty());
    assert!(doc.root.houses.is_empty());
    assert!(doc.styles.is_empty());
}

#[test]
fn normalize_rejects_non_structural_input() {
    let err = normalize(json!("not a genealogy")).unwrap_err();
    assert!(matches!(err, Error::InvalidShape { .. }));
}

#[test]
fn normalize_rejects_mistyped_fields() {
    let err = normalize(json!({ "families": 42 })).unwrap_err();
    assert!(matches!(err, Error::InvalidShape { .. }));
}

#[test]
fn from_yaml_str_reads_nested_houses() {
    let doc = Genealogy::from_yaml_str(
        r#"
houses:
  montclair:
    name: Maison de Montclair
    people:
      JeanDupont: {}
    families:
      - parents: [JeanDupont]
        children: [MarieDupont]
"#,
    )
    .unwrap();

    let montclair = &doc.root.houses["montclair"];
    assert_eq!(montclair.name.as_deref(), Some("Maison de Montclair"));
    assert_eq!(montclair.families[0].children, ["MarieDupont"]);
}

#[test]
fn from_json_str_reports_syntax_errors() {
    let err = Genealogy::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, Error::InvalidJson { .. }));
}

#[test]
fn styles_survive_normalization_in_order() {
    let doc = Genealogy::from_yaml_str(
        r##"
styles:
  ":union":
    shape: circle
    width: 0.1
  ":edge":
    color: "#cccccc"
people:
  Jean: {}
"##,
    )
    .unwrap();

    let classes: Vec<&String> = doc.styles.keys().collect();
    assert_eq!(classes, [":union", ":edge"]);
    assert_eq!(doc.styles[":union"]["shape"], json!("circle"));
}
