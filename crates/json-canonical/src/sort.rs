//! Recursive key ordering — the canonical sorter.

use crate::JsonValue;

/// Returns a new tree with every object's members sorted by ascending
/// byte-wise comparison of their UTF-8 key bytes, at every depth.
///
/// Array element order is preserved. Leaf values pass through unchanged.
/// The sort is stable, so pairs with equal keys keep their relative order.
///
/// # Example
///
/// ```
/// use json_canonical::{canonicalize, JsonValue};
///
/// let value = JsonValue::Object(vec![
///     ("b".into(), JsonValue::Integer(1)),
///     ("a".into(), JsonValue::Integer(2)),
/// ]);
/// let sorted = canonicalize(value);
/// assert_eq!(
///     sorted,
///     JsonValue::Object(vec![
///         ("a".into(), JsonValue::Integer(2)),
///         ("b".into(), JsonValue::Integer(1)),
///     ])
/// );
/// ```
pub fn canonicalize(value: JsonValue) -> JsonValue {
    match value {
        JsonValue::Object(obj) => {
            let mut pairs: Vec<(String, JsonValue)> = obj
                .into_iter()
                .map(|(k, v)| (k, canonicalize(v)))
                .collect();
            pairs.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
            JsonValue::Object(pairs)
        }
        JsonValue::Array(arr) => {
            JsonValue::Array(arr.into_iter().map(canonicalize).collect())
        }
        leaf => leaf,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obj(fields: &[(&str, JsonValue)]) -> JsonValue {
        JsonValue::Object(
            fields
                .iter()
                .map(|(k, v)| ((*k).to_owned(), v.clone()))
                .collect(),
        )
    }

    #[test]
    fn sorts_top_level_keys() {
        let value = obj(&[
            ("b", JsonValue::Integer(1)),
            ("a", JsonValue::Integer(2)),
        ]);
        let sorted = canonicalize(value);
        assert_eq!(
            sorted,
            obj(&[("a", JsonValue::Integer(2)), ("b", JsonValue::Integer(1))])
        );
    }

    #[test]
    fn sorts_nested_objects() {
        let value = obj(&[
            (
                "z",
                obj(&[("y", JsonValue::Integer(1)), ("x", JsonValue::Integer(2))]),
            ),
            ("a", JsonValue::Integer(0)),
        ]);
        let sorted = canonicalize(value);
        assert_eq!(
            sorted,
            obj(&[
                ("a", JsonValue::Integer(0)),
                (
                    "z",
                    obj(&[("x", JsonValue::Integer(2)), ("y", JsonValue::Integer(1))]),
                ),
            ])
        );
    }

    #[test]
    fn sorts_objects_inside_arrays() {
        let value = JsonValue::Array(vec![
            obj(&[("b", JsonValue::Null), ("a", JsonValue::Null)]),
            JsonValue::Integer(1),
        ]);
        let sorted = canonicalize(value);
        assert_eq!(
            sorted,
            JsonValue::Array(vec![
                obj(&[("a", JsonValue::Null), ("b", JsonValue::Null)]),
                JsonValue::Integer(1),
            ])
        );
    }

    #[test]
    fn preserves_array_order() {
        let value = JsonValue::Array(vec![
            JsonValue::Integer(3),
            JsonValue::Integer(1),
            JsonValue::Integer(2),
        ]);
        assert_eq!(canonicalize(value.clone()), value);
    }

    #[test]
    fn key_comparison_is_byte_wise_not_length_first() {
        // "aa" < "b" byte-wise, even though "b" is shorter.
        let value = obj(&[("b", JsonValue::Null), ("aa", JsonValue::Null)]);
        let sorted = canonicalize(value);
        assert_eq!(
            sorted,
            obj(&[("aa", JsonValue::Null), ("b", JsonValue::Null)])
        );
    }

    #[test]
    fn key_comparison_is_byte_wise_for_non_ascii() {
        // "é" encodes as 0xC3 0xA9, which sorts after every ASCII key.
        let value = obj(&[("é", JsonValue::Null), ("z", JsonValue::Null)]);
        let sorted = canonicalize(value);
        assert_eq!(
            sorted,
            obj(&[("z", JsonValue::Null), ("é", JsonValue::Null)])
        );
    }

    #[test]
    fn duplicate_keys_keep_relative_order() {
        let value = obj(&[
            ("a", JsonValue::Integer(1)),
            ("a", JsonValue::Integer(2)),
        ]);
        let sorted = canonicalize(value);
        assert_eq!(
            sorted,
            obj(&[("a", JsonValue::Integer(1)), ("a", JsonValue::Integer(2))])
        );
    }

    #[test]
    fn empty_containers_pass_through() {
        assert_eq!(
            canonicalize(JsonValue::Object(vec![])),
            JsonValue::Object(vec![])
        );
        assert_eq!(
            canonicalize(JsonValue::Array(vec![])),
            JsonValue::Array(vec![])
        );
    }

    #[test]
    fn leaves_pass_through_unchanged() {
        for leaf in [
            JsonValue::Null,
            JsonValue::Bool(false),
            JsonValue::Integer(-1),
            JsonValue::UInteger(u64::MAX),
            JsonValue::Float(1.5),
            JsonValue::Str(String::new()),
        ] {
            assert_eq!(canonicalize(leaf.clone()), leaf);
        }
    }

    #[test]
    fn deeply_nested_structure() {
        let mut value = JsonValue::Integer(0);
        for _ in 0..64 {
            value = obj(&[("b", value.clone()), ("a", JsonValue::Null)]);
        }
        // Must not panic; outermost object must come out sorted.
        if let JsonValue::Object(pairs) = canonicalize(value) {
            assert_eq!(pairs[0].0, "a");
            assert_eq!(pairs[1].0, "b");
        } else {
            panic!("expected object");
        }
    }
}
