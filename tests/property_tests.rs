//! Property-based tests covering the formatting pipeline end to end.
//!
//! Arbitrary value trees are serialized to text, then pushed through each
//! operation to verify the invariants that hold for every valid document:
//! round-trip equality, idempotence, and agreement across operations.

use json_tidy::{
    beautify, minify, parse, sort_and_beautify, validate, FormatOptions, JsonValue, Number,
    Serializer,
};
use proptest::prelude::*;

fn arb_json() -> impl Strategy<Value = JsonValue> {
    let leaf = prop_oneof![
        Just(JsonValue::Null),
        any::<bool>().prop_map(JsonValue::Bool),
        any::<i64>().prop_map(|n| JsonValue::Number(Number::Integer(n))),
        (-1e9f64..1e9f64).prop_map(|f| JsonValue::Number(Number::Float(f))),
        "[a-zA-Z0-9 _.:-]{0,12}".prop_map(JsonValue::String),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(JsonValue::Array),
            prop::collection::vec(("[a-z]{1,8}", inner), 0..6)
                .prop_map(|pairs| { JsonValue::Object(pairs.into_iter().collect()) }),
        ]
    })
}

fn render(value: &JsonValue) -> String {
    let mut serializer = Serializer::new(FormatOptions::compact());
    serializer.write_value(value);
    serializer.into_inner()
}

proptest! {
    #[test]
    fn prop_parse_inverts_serialize(value in arb_json()) {
        let text = render(&value);
        let reparsed = parse(&text).unwrap();
        prop_assert_eq!(reparsed, value);
    }

    #[test]
    fn prop_beautify_preserves_content(value in arb_json()) {
        let text = render(&value);
        let pretty = beautify(&text).unwrap();
        let compact = minify(&pretty.output).unwrap();
        prop_assert_eq!(compact.output, text);
    }

    #[test]
    fn prop_minify_is_idempotent(value in arb_json()) {
        let text = render(&value);
        let once = minify(&text).unwrap();
        let twice = minify(&once.output).unwrap();
        prop_assert_eq!(once.output, twice.output);
    }

    #[test]
    fn prop_sort_is_idempotent(value in arb_json()) {
        let text = render(&value);
        let once = sort_and_beautify(&text).unwrap();
        let twice = sort_and_beautify(&once.output).unwrap();
        prop_assert_eq!(once.output, twice.output);
    }

    #[test]
    fn prop_all_operations_accept_valid_documents(value in arb_json()) {
        let text = render(&value);
        prop_assert!(validate(&text).is_ok());
        prop_assert!(beautify(&text).is_ok());
        prop_assert!(minify(&text).is_ok());
        prop_assert!(sort_and_beautify(&text).is_ok());
    }

    #[test]
    fn prop_minified_output_parses_with_serde_json(value in arb_json()) {
        let text = render(&value);
        let result = minify(&text).unwrap();
        prop_assert!(serde_json::from_str::<serde_json::Value>(&result.output).is_ok());
    }

    #[test]
    fn prop_structure_metrics_survive_reformatting(value in arb_json()) {
        let text = render(&value);
        let pretty = beautify(&text).unwrap();
        let compact = minify(&text).unwrap();
        prop_assert_eq!(pretty.metrics.kind, compact.metrics.kind);
        prop_assert_eq!(pretty.metrics.depth, compact.metrics.depth);
        prop_assert_eq!(pretty.metrics.key_count, compact.metrics.key_count);
    }

    #[test]
    fn prop_sorted_keys_are_nondecreasing(value in arb_json()) {
        let text = render(&value);
        let result = sort_and_beautify(&text).unwrap();
        if let JsonValue::Object(map) = parse(&result.output).unwrap() {
            let keys: Vec<&String> = map.keys().collect();
            let mut expected = keys.clone();
            expected.sort();
            prop_assert_eq!(keys, expected);
        }
    }
}

proptest! {
    #[test]
    fn prop_integer_roots_round_trip_exactly(n in any::<i64>()) {
        let text = n.to_string();
        let result = minify(&text).unwrap();
        prop_assert_eq!(result.output, text);
    }

    #[test]
    fn prop_string_roots_round_trip(s in "[ -~]{0,40}") {
        let value = JsonValue::String(s.clone());
        let text = render(&value);
        let reparsed = parse(&text).unwrap();
        prop_assert_eq!(reparsed.as_str(), Some(s.as_str()));
    }

    #[test]
    fn prop_whitespace_padding_never_changes_minified_output(
        value in arb_json(),
        lead in "[ \t\r\n]{0,5}",
        trail in "[ \t\r\n]{0,5}",
    ) {
        let text = render(&value);
        let padded = format!("{lead}{text}{trail}");
        prop_assert_eq!(minify(&padded).unwrap().output, minify(&text).unwrap().output);
    }
}
