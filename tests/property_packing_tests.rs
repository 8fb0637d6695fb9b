// SPDX-License-Identifier: GPL-3.0-only

//! Property tests for row packing, key deduplication and panel disclosure.

use extra_keys::app_settings::MAX_KEYS_PER_ROW;
use extra_keys::keys::{KeyAction, KeyCode, KeyDefinition, KeyRegistry};
use extra_keys::layout::{pack_rows, row_count, Row};
use extra_keys::panel::PanelState;
use proptest::prelude::*;

fn keys_strategy() -> impl Strategy<Value = Vec<KeyDefinition>> {
    prop::collection::vec(("[a-z]{1,3}", "[a-z ]{1,8}", any::<bool>()), 0..60).prop_map(
        |entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (label, text, with_enter))| {
                    KeyDefinition::shortcut(format!("{}{}", label, i), text, with_enter)
                        .with_label(label.to_uppercase())
                })
                .collect()
        },
    )
}

/// Every field of a key; `KeyDefinition` equality only looks at the code.
fn key_contents(key: &KeyDefinition) -> (KeyCode, String, KeyAction, bool) {
    (
        key.code().clone(),
        key.label().to_string(),
        key.action().clone(),
        key.is_repeatable(),
    )
}

fn row_contents(rows: &[Row]) -> Vec<(usize, Vec<(KeyCode, String, KeyAction, bool)>)> {
    rows.iter()
        .map(|row| (row.index, row.keys.iter().map(key_contents).collect()))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Test the packing law.
    ///
    /// # Invariants Tested
    /// - ceil(n / C) rows, none for an empty sequence
    /// - every row but the last is full, the last is never empty
    /// - concatenating the rows reproduces the sequence
    #[test]
    fn test_packing_law(keys in keys_strategy()) {
        let rows = pack_rows(&keys, MAX_KEYS_PER_ROW);

        prop_assert_eq!(rows.len(), keys.len().div_ceil(MAX_KEYS_PER_ROW));
        prop_assert_eq!(rows.len(), row_count(keys.len(), MAX_KEYS_PER_ROW));

        for (i, row) in rows.iter().enumerate() {
            prop_assert_eq!(row.index, i);
            prop_assert!(!row.is_empty());
            if i + 1 < rows.len() {
                prop_assert_eq!(row.len(), MAX_KEYS_PER_ROW);
            } else {
                prop_assert!(row.len() <= MAX_KEYS_PER_ROW);
            }
        }

        let flattened: Vec<_> = rows.iter().flat_map(|row| row.keys.iter().map(key_contents)).collect();
        let expected: Vec<_> = keys.iter().map(key_contents).collect();
        prop_assert_eq!(flattened, expected);
    }

    /// Test that repacking is deterministic.
    #[test]
    fn test_packing_idempotent(keys in keys_strategy(), capacity in 1usize..10) {
        let first = pack_rows(&keys, capacity);
        let second = pack_rows(&keys, capacity);
        prop_assert_eq!(row_contents(&first), row_contents(&second));
    }

    /// Test that re-adding a present key never changes the sequence.
    #[test]
    fn test_duplicate_add_noop(keys in keys_strategy(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!keys.is_empty());
        let mut registry = KeyRegistry::with_builtin_keys();
        registry.replace_user(keys.clone());
        let before: Vec<_> = registry.user().iter().map(key_contents).collect();

        let duplicate = keys[pick.index(keys.len())].clone().with_label("dup");
        prop_assert!(!registry.add_user(duplicate));

        let after: Vec<_> = registry.user().iter().map(key_contents).collect();
        prop_assert_eq!(after, before);
    }

    /// Test panel disclosure under arbitrary toggle sequences.
    ///
    /// # Invariants Tested
    /// - two toggles restore state, visibility and opacity when rows > 2
    /// - with two rows or fewer nothing ever changes
    /// - compact rows are always visible
    #[test]
    fn test_toggle_properties(rows in 0usize..8, toggles in prop::collection::vec(any::<bool>(), 0..20)) {
        let mut state = PanelState::new(rows);
        for expand in toggles {
            if expand {
                state.toggle();
            } else {
                state.set_expanded(false);
            }
        }

        let snapshot = (state.clone(), state.opacity());
        let visibility: Vec<bool> = (0..rows).map(|i| state.is_row_visible(i)).collect();

        state.toggle();
        state.toggle();

        prop_assert_eq!((state.clone(), state.opacity()), snapshot);
        let after: Vec<bool> = (0..rows).map(|i| state.is_row_visible(i)).collect();
        prop_assert_eq!(after, visibility.clone());

        prop_assert!(visibility.iter().take(2).all(|v| *v));
        if rows <= 2 {
            prop_assert!(!state.is_expanded());
            prop_assert!(!state.toggle());
        }
    }
}
