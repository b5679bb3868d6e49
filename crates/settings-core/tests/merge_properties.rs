use proptest::prelude::*;
use serde_json::{Map, Value, json};
use settings_core::{ArrayMerge, MergeOptions, deep_merge};

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
        prop::collection::vec(any::<u8>().prop_map(Value::from), 0..4).prop_map(Value::Array),
    ]
}

fn tree() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(3, 24, 4, |inner| {
        prop::collection::btree_map("[a-d]", inner, 0..4)
            .prop_map(|map| Value::Object(map.into_iter().collect::<Map<_, _>>()))
    })
}

fn object() -> impl Strategy<Value = Value> {
    prop::collection::btree_map("[a-d]", tree(), 0..4)
        .prop_map(|map| Value::Object(map.into_iter().collect::<Map<_, _>>()))
}

proptest! {
    #[test]
    fn overlay_leaves_always_win(base in object(), overlay in object()) {
        let mut merged = base.clone();
        deep_merge(&mut merged, &overlay, MergeOptions::default());

        for (key, value) in overlay.as_object().unwrap() {
            let merged_value = &merged[key];
            if value.is_object() && base.get(key).is_some_and(Value::is_object) {
                prop_assert!(merged_value.is_object());
            } else {
                prop_assert_eq!(merged_value, value);
            }
        }
    }

    #[test]
    fn base_only_keys_survive(base in object(), overlay in object()) {
        let mut merged = base.clone();
        deep_merge(&mut merged, &overlay, MergeOptions::default());

        for (key, value) in base.as_object().unwrap() {
            if overlay.get(key).is_none() {
                prop_assert_eq!(&merged[key], value);
            }
        }
    }

    #[test]
    fn replace_merge_is_idempotent(base in object(), overlay in object()) {
        let mut once = base.clone();
        deep_merge(&mut once, &overlay, MergeOptions::default());
        let mut twice = once.clone();
        deep_merge(&mut twice, &overlay, MergeOptions::default());

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn append_merge_concatenates(
        base in prop::collection::vec(any::<i32>(), 0..6),
        extra in prop::collection::vec(any::<i32>(), 0..6),
    ) {
        let mut merged = json!({"items": base.clone()});
        deep_merge(
            &mut merged,
            &json!({"items": extra.clone()}),
            MergeOptions::with_arrays(ArrayMerge::Append),
        );

        let expected: Vec<i32> = base.into_iter().chain(extra).collect();
        prop_assert_eq!(merged, json!({"items": expected}));
    }
}
