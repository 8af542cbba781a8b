//! Property coverage for the pure transform stages.

use proptest::prelude::*;

use tlf_model::{AttributeRow, TlfError};
use tlf_transform::{natural_sort_key, normalize_quotes, segment, toc_sort_key};

proptest! {
    #[test]
    fn quote_swap_rewrites_only_the_outer_pair(value in ".*") {
        let normalized = normalize_quotes(&value);
        prop_assert_eq!(normalized.len(), value.len());
        match (value.find('\''), value.rfind('\'')) {
            (Some(first), Some(last)) if first != last => {
                let original = value.as_bytes();
                let swapped = normalized.as_bytes();
                prop_assert_eq!(swapped[first], b'"');
                prop_assert_eq!(swapped[last], b'"');
                for (index, (before, after)) in original.iter().zip(swapped.iter()).enumerate() {
                    if index != first && index != last {
                        prop_assert_eq!(before, after);
                    }
                }
            }
            (Some(only), _) => {
                let original = value.as_bytes();
                let swapped = normalized.as_bytes();
                prop_assert_eq!(swapped[only], b'"');
                for (index, (before, after)) in original.iter().zip(swapped.iter()).enumerate() {
                    if index != only {
                        prop_assert_eq!(before, after);
                    }
                }
            }
            (None, _) => prop_assert_eq!(&normalized, &value),
        }
    }

    #[test]
    fn toc_keys_order_like_numeric_component_lists(
        a in prop::collection::vec(0u64..10_000, 1..5),
        b in prop::collection::vec(0u64..10_000, 1..5),
    ) {
        let render = |parts: &[u64]| {
            parts
                .iter()
                .map(|part| part.to_string())
                .collect::<Vec<_>>()
                .join(".")
        };
        let key_a = toc_sort_key(Some(&render(&a)));
        let key_b = toc_sort_key(Some(&render(&b)));
        prop_assert_eq!(key_a.cmp(&key_b), a.cmp(&b));
    }

    #[test]
    fn missing_toc_never_sorts_before_a_numeric_one(
        parts in prop::collection::vec(0u64..10_000, 1..4),
    ) {
        let rendered = parts
            .iter()
            .map(|part| part.to_string())
            .collect::<Vec<_>>()
            .join(".");
        prop_assert!(toc_sort_key(Some(&rendered)) < toc_sort_key(None));
    }

    #[test]
    fn natural_key_orders_digit_strings_numerically(a in 0u64..1_000_000, b in 0u64..1_000_000) {
        prop_assert_eq!(
            natural_sort_key(&a.to_string()).cmp(&natural_sort_key(&b.to_string())),
            a.cmp(&b)
        );
    }

    #[test]
    fn segmentation_partitions_rows_after_the_first_marker(
        names in prop::collection::vec(
            prop_oneof![Just("outfile".to_string()), "[a-z]{1,8}"],
            0..40,
        ),
    ) {
        let rows: Vec<AttributeRow> = names
            .iter()
            .map(|name| AttributeRow {
                name: name.clone(),
                ..AttributeRow::default()
            })
            .collect();
        let marker_count = names
            .iter()
            .filter(|name| name.eq_ignore_ascii_case("outfile"))
            .count();
        match segment(rows) {
            Ok(groups) => {
                prop_assert_eq!(groups.len(), marker_count);
                let first_marker = names
                    .iter()
                    .position(|name| name.eq_ignore_ascii_case("outfile"))
                    .unwrap();
                let kept: usize = groups.iter().map(|group| group.rows.len()).sum();
                prop_assert_eq!(kept, names.len() - first_marker);
                for (index, group) in groups.iter().enumerate() {
                    prop_assert_eq!(group.sequence as usize, index + 1);
                }
            }
            Err(err) => {
                prop_assert_eq!(marker_count, 0);
                prop_assert!(matches!(err, TlfError::MissingSequenceMarker));
            }
        }
    }
}
