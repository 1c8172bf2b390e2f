use super::*;

fn card(left: &str, right: &str) -> ConceptCard {
    ConceptCard { left: left.into(), right: right.into() }
}

#[test]
fn parses_bare_array() {
    let cards = parse_batch(r#"[{"left":"Frio","right":"Quente"},{"left":"Ruim","right":"Bom"}]"#).unwrap();
    assert_eq!(cards, vec![card("Frio", "Quente"), card("Ruim", "Bom")]);
}

#[test]
fn parses_wrapped_object() {
    let cards = parse_batch(r#"{"cards":[{"left":"Seco","right":"Molhado"}]}"#).unwrap();
    assert_eq!(cards, vec![card("Seco", "Molhado")]);
}

#[test]
fn trims_sides_and_surrounding_whitespace() {
    let cards = parse_batch("  [{\"left\":\"  Feio \",\"right\":\"Bonito\\n\"}]\n").unwrap();
    assert_eq!(cards, vec![card("Feio", "Bonito")]);
}

#[test]
fn extra_fields_are_ignored() {
    let cards = parse_batch(r#"[{"left":"Herói","right":"Vilão","id":7}]"#).unwrap();
    assert_eq!(cards, vec![card("Herói", "Vilão")]);
}

#[test]
fn empty_array_is_valid_and_empty() {
    assert_eq!(parse_batch("[]").unwrap(), Vec::new());
}

#[test]
fn invalid_json_is_rejected() {
    assert!(matches!(parse_batch("not json"), Err(CardError::Json(_))));
}

#[test]
fn non_array_shapes_are_rejected() {
    assert_eq!(parse_batch(r#"{"pairs":[]}"#), Err(CardError::NotAnArray));
    assert_eq!(parse_batch(r#"{"cards":"nope"}"#), Err(CardError::NotAnArray));
    assert_eq!(parse_batch("42"), Err(CardError::NotAnArray));
}

#[test]
fn one_bad_entry_rejects_the_whole_batch() {
    let body = r#"[{"left":"Frio","right":"Quente"},{"left":"Ruim"}]"#;
    assert_eq!(parse_batch(body), Err(CardError::MissingField { index: 1, field: "right" }));
}

#[test]
fn non_string_side_is_missing_field() {
    let body = r#"[{"left":1,"right":"Quente"}]"#;
    assert_eq!(parse_batch(body), Err(CardError::MissingField { index: 0, field: "left" }));
}

#[test]
fn non_object_entry_is_rejected() {
    assert_eq!(parse_batch(r#"["Frio"]"#), Err(CardError::EntryNotObject { index: 0 }));
}

#[test]
fn blank_side_is_rejected_with_index() {
    let err = parse_batch(r#"[{"left":"Frio","right":"Quente"},{"left":"  ","right":"Bom"}]"#).unwrap_err();
    assert_eq!(err, CardError::Entry { index: 1, source: Box::new(CardError::BlankSide { side: "left" }) });
    assert_eq!(err.to_string(), "entry 1: card left side is blank");
}

#[test]
fn new_rejects_blank_right() {
    assert_eq!(ConceptCard::new("Frio", ""), Err(CardError::BlankSide { side: "right" }));
}

#[test]
fn card_serializes_as_left_right_object() {
    let json = serde_json::to_value(card("Normal", "Estranho")).unwrap();
    assert_eq!(json, serde_json::json!({"left": "Normal", "right": "Estranho"}));
}
