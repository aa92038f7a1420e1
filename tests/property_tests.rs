//! Property-based tests - pragmatic checks of the literal policy across
//! generated inputs.
//!
//! These complement the integration tests by verifying the invariants that
//! must hold for any input: numeric tokens parse back to the same value,
//! traversal preserves order, plain data never produces diagnostics, and the
//! output is always one complete declaration.

use litdump::{dump, dump_value, Value};
use proptest::prelude::*;
use serde::Serialize;

#[derive(Serialize, Debug)]
struct Plain {
    name: String,
    age: u8,
    score: i32,
}

fn declaration_body(text: &str) -> &str {
    let start = text.find(" = ").expect("missing binding") + 3;
    let end = text.len() - 1;
    assert!(text.ends_with(';'));
    &text[start..end]
}

proptest! {
    #[test]
    fn prop_i32_token_round_trips(n in any::<i32>()) {
        let out = dump_value(&Value::from(n));
        prop_assert_eq!(declaration_body(&out.text).parse::<i32>().unwrap(), n);
    }

    #[test]
    fn prop_i64_token_round_trips(n in any::<i64>()) {
        let out = dump_value(&Value::from(n));
        let body = declaration_body(&out.text);
        let token = body.strip_suffix("i64").expect("missing i64 suffix");
        prop_assert_eq!(token.parse::<i64>().unwrap(), n);
    }

    #[test]
    fn prop_u64_token_round_trips(n in any::<u64>()) {
        let out = dump_value(&Value::from(n));
        let body = declaration_body(&out.text);
        let token = body.strip_suffix("u64").expect("missing u64 suffix");
        prop_assert_eq!(token.parse::<u64>().unwrap(), n);
    }

    #[test]
    fn prop_finite_f64_token_round_trips(n in proptest::num::f64::NORMAL) {
        let out = dump_value(&Value::from(n));
        prop_assert_eq!(declaration_body(&out.text).parse::<f64>().unwrap(), n);
    }

    #[test]
    fn prop_sequence_preserves_order(items in proptest::collection::vec(any::<i32>(), 1..20)) {
        let out = dump_value(&Value::seq(items.clone()));
        let body = declaration_body(&out.text);
        let inner = body
            .strip_prefix("Vec::<i32>::from([")
            .and_then(|s| s.strip_suffix("])"))
            .expect("unexpected sequence shape");
        let parsed: Vec<i32> = inner
            .split(", ")
            .map(|tok| tok.parse::<i32>().unwrap())
            .collect();
        prop_assert_eq!(parsed, items);
    }

    #[test]
    fn prop_plain_structs_are_never_lossy(name in "[a-zA-Z0-9 ]{0,20}", age in any::<u8>(), score in any::<i32>()) {
        let out = dump(&Plain { name, age, score }).unwrap();
        prop_assert!(!out.is_lossy());
        let bound_as_plain = out.text.starts_with("let plain = Plain");
        prop_assert!(bound_as_plain, "unexpected declaration: {}", out.text);
    }

    #[test]
    fn prop_guid_is_canonical(g in any::<u128>()) {
        let out = dump_value(&Value::Guid(g));
        let body = declaration_body(&out.text);
        let hex = body
            .strip_prefix("Guid::parse(\"")
            .and_then(|s| s.strip_suffix("\")"))
            .expect("unexpected guid shape");
        prop_assert_eq!(hex.len(), 36);
        for (i, ch) in hex.chars().enumerate() {
            if matches!(i, 8 | 13 | 18 | 23) {
                prop_assert_eq!(ch, '-');
            } else {
                prop_assert!(ch.is_ascii_hexdigit() && !ch.is_ascii_uppercase());
            }
        }
    }

    #[test]
    fn prop_output_is_one_terminated_statement(n in any::<i16>()) {
        let out = dump_value(&Value::from(n));
        prop_assert!(out.text.starts_with("let "));
        prop_assert!(out.text.ends_with(';'));
        prop_assert!(!out.text.contains('\n'));
    }

    #[test]
    fn prop_string_dump_is_quoted(s in "[a-zA-Z0-9 \"\\\\]{0,30}") {
        let out = dump_value(&Value::from(s.as_str()));
        let body = declaration_body(&out.text);
        prop_assert!(body.starts_with('"') && body.ends_with('"'));
        prop_assert!(!out.is_lossy());
    }
}
