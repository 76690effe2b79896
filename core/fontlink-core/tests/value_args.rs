use serde_json::json;

use fontlink_core::args::{FontArg, FontName, Weight};
use fontlink_core::link::build_from_values;

#[test]
fn string_value_classifies_as_ident_or_display() {
    let arg = FontArg::from_value(&json!("droid_sans")).expect("parse");
    assert_eq!(arg, FontArg::Name(FontName::Ident("droid_sans".to_string())));

    let arg = FontArg::from_value(&json!("Droid Sans")).expect("parse");
    assert_eq!(
        arg,
        FontArg::Name(FontName::Display("Droid Sans".to_string()))
    );
}

#[test]
fn object_value_keeps_entry_order_and_scalar_weights() {
    let arg = FontArg::from_value(&json!({
        "droid_sans": [400, 700],
        "yanone_kaffeesatz": 400,
    }))
    .expect("parse");

    let FontArg::Map(map) = arg else {
        panic!("expected a mapping argument");
    };
    assert_eq!(map.subset, None);
    assert_eq!(
        map.entries,
        vec![
            (
                FontName::Ident("droid_sans".to_string()),
                vec![Weight::Value(400), Weight::Value(700)],
            ),
            (
                FontName::Ident("yanone_kaffeesatz".to_string()),
                vec![Weight::Value(400)],
            ),
        ]
    );
}

#[test]
fn null_weight_spec_means_no_weights() {
    let arg = FontArg::from_value(&json!({ "roboto": null })).expect("parse");

    let FontArg::Map(map) = arg else {
        panic!("expected a mapping argument");
    };
    assert_eq!(
        map.entries,
        vec![(FontName::Ident("roboto".to_string()), Vec::new())]
    );
}

#[test]
fn documented_roboto_subset_example() {
    let values = [json!({
        "roboto": ["400", "700", "400italic", "700italic"],
        "subset": ["latin", "cyrillic"],
    })];

    let tag = build_from_values(&values, false).expect("build");
    assert_eq!(
        tag.href,
        "http://fonts.googleapis.com/css?family=\
         Roboto:400,700,400italic,700italic&subset=latin,cyrillic"
    );
}

#[test]
fn subset_accepts_single_string() {
    let values = [json!({ "roboto": 400, "subset": "latin" })];

    let tag = build_from_values(&values, false).expect("build");
    assert!(tag.href.ends_with("Roboto:400&subset=latin"));
}

#[test]
fn rejects_unrecognized_argument_shapes() {
    for (value, type_name) in [
        (json!(true), "a boolean"),
        (json!(42), "an integer"),
        (json!(null), "null"),
        (json!(["droid_sans"]), "an array"),
    ] {
        let err = FontArg::from_value(&value).expect_err("invalid shape");
        assert_eq!(
            err.to_string(),
            format!("expected a String, Symbol, or a mapping, got {type_name}")
        );
    }
}

#[test]
fn rejects_non_integer_non_string_weights() {
    for (value, type_name) in [
        (json!({ "roboto": 1.5 }), "a float"),
        (json!({ "roboto": -400 }), "a negative integer"),
        (json!({ "roboto": [400, true] }), "a boolean"),
        (json!({ "roboto": { "weight": 400 } }), "a mapping"),
    ] {
        let err = FontArg::from_value(&value).expect_err("invalid weight");
        assert_eq!(
            err.to_string(),
            format!("expected an integer or String, got {type_name}")
        );
    }
}

#[test]
fn build_from_values_fails_fast_on_first_bad_argument() {
    let values = [json!("roboto"), json!(3.5), json!("lato")];

    let err = build_from_values(&values, false).expect_err("bad argument");
    assert_eq!(
        err.to_string(),
        "expected a String, Symbol, or a mapping, got a float"
    );
}

#[test]
fn build_from_values_rejects_empty_input() {
    let err = build_from_values(&[], false).expect_err("empty");
    assert_eq!(err.to_string(), "expected at least one font");
}
