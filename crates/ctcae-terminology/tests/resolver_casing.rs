#![allow(missing_docs)]

//! Property test: resolution is insensitive to any per-character casing of a
//! known name, and the resolved record is always the canonical one.

use ctcae_terminology as ctcae;
use proptest::prelude::*;

/// Recase `name` per the bitmask: bit N set means uppercase the Nth
/// alphabetic character, clear means lowercase it.
fn recase(name: &str, mask: u64) -> String {
    let mut bit = 0;
    name.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let upper = mask >> (bit % 64) & 1 == 1;
                bit += 1;
                if upper {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            } else {
                c
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn adverse_events_resolve_under_any_casing(mask in any::<u64>(), index in 0usize..1000) {
        let events = ctcae::adverse_event_options();
        let event = &events[index % events.len()];
        let query = recase(&event.name, mask);

        let found = ctcae::find_adverse_event(&query);
        prop_assert!(found.is_some());
        prop_assert_eq!(&found.unwrap().name, &event.name);

        let concept = ctcae::adverse_event_codeable_concept(&query);
        prop_assert_eq!(&concept.display_text, &event.name);
    }

    #[test]
    fn grades_resolve_under_any_casing(mask in any::<u64>(), index in 0usize..5) {
        let option = &ctcae::grade_options()[index];
        let query = recase(&option.name, mask);
        prop_assert!(ctcae::is_valid_grade(&query));
        prop_assert_eq!(&ctcae::grade_codeable_concept(&query).value, &option.code);
    }
}
