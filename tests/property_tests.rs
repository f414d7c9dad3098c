//! Property-based tests - pragmatic approach testing the coercion and
//! recording guarantees across a wide range of generated inputs.

use ini2json::{to_json, RawValues, Recorder, TypedValues, Value};
use proptest::prelude::*;

proptest! {
    // Classification is total: any string lands in exactly one shape and
    // the result always serializes.
    #[test]
    fn prop_infer_is_total(s in ".*") {
        let value = Value::infer(&s);
        let tags = [
            value.is_int(),
            value.is_decimal(),
            value.is_bool(),
            value.is_json(),
            value.is_string(),
        ];
        prop_assert_eq!(tags.iter().filter(|&&t| t).count(), 1);
        prop_assert!(to_json(&value).is_ok());
    }

    // Integer text round-trips through classification and JSON encoding.
    #[test]
    fn prop_integers_roundtrip(n in any::<i128>()) {
        let text = n.to_string();
        let value = Value::infer(&text);
        prop_assert!(value.is_int());
        prop_assert_eq!(to_json(&value).unwrap(), text);
    }

    // Whatever goes into raw mode comes back out verbatim.
    #[test]
    fn prop_raw_mode_preserves_text(key in "[a-z]{1,8}", v in ".*") {
        let mut values = RawValues::new();
        values.add(&key, &v);
        prop_assert_eq!(values.get(&key).unwrap(), &[v]);
    }

    // Repeated recording appends, in order, without touching other keys.
    #[test]
    fn prop_add_appends_in_order(occurrences in prop::collection::vec("[a-z0-9.]{0,12}", 1..16)) {
        let mut values = TypedValues::new();
        for occurrence in &occurrences {
            values.add("k", occurrence);
        }
        let recorded = values.get("k").unwrap();
        prop_assert_eq!(recorded.len(), occurrences.len());
        for (stored, raw) in recorded.iter().zip(&occurrences) {
            prop_assert_eq!(stored, &Value::infer(raw));
        }
    }
}
