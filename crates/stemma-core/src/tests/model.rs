use crate::*;
use serde_json::json;

#[test]
fn people_and_houses_preserve_insertion_order() {
    let doc = normalize(json!({
        "people": { "Zoe": {}, "Adam": {}, "Mia": {} },
        "houses": { "second": {}, "first": {} }
    }))
    .unwrap();

    let people: Vec<&String> = doc.root.people.keys().collect();
    assert_eq!(people, ["Zoe", "Adam", "Mia"]);

    let houses: Vec<&String> = doc.root.houses.keys().collect();
    assert_eq!(houses, ["second", "first"]);
}

#[test]
fn null_family_entries_become_empty_families() {
    let doc = normalize(json!({
        "families": [null, { "parents": ["A"] }]
    }))
    .unwrap();

    assert_eq!(doc.root.families.len(), 2);
    assert!(doc.root.families[0].parents.is_empty());
    assert_eq!(doc.root.families[1].parents, ["A"]);
}

#[test]
fn null_people_entries_become_empty_people() {
    let doc = normalize(json!({
        "people": { "Jean": null }
    }))
    .unwrap();

    let jean = &doc.root.people["Jean"];
    assert!(jean.name.is_none());
    assert!(jean.files.is_empty());
}

#[test]
fn numeric_born_coerces_to_text() {
    let doc = normalize(json!({
        "people": { "Jean": { "born": 1900 } }
    }))
    .unwrap();

    assert_eq!(doc.root.people["Jean"].born.as_deref(), Some("1900"));
}

#[test]
fn family_group_helpers_count_both_groups() {
    let family = Family {
        parents2: vec!["A".to_string()],
        children: vec!["B".to_string()],
        children2: vec!["C".to_string()],
        ..Default::default()
    };

    assert!(family.has_parents());
    assert!(family.has_children());
    assert_eq!(family.child_count(), 2);
}
