// SPDX-License-Identifier: GPL-3.0-only

//! Packing of the effective key sequence into fixed-capacity rows.
//!
//! Row `i` holds the keys at positions `[i * capacity, (i + 1) * capacity)`.
//! Only the last row may be short, and it is never padded. Packing is a pure
//! function of its input, so repacking an unchanged sequence yields identical
//! rows.

use crate::app_settings;
use crate::keys::KeyDefinition;

/// One horizontal group of panel buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Position of the row, 0 being the bottom row closest to the keyboard
    pub index: usize,
    /// Keys of the row in display order
    pub keys: Vec<KeyDefinition>,
}

impl Row {
    /// Creates an empty row.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            keys: Vec::new(),
        }
    }

    /// Number of keys in the row.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the row holds no key.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns `true` for the rows that stay visible while the panel is collapsed.
    pub fn is_compact(&self) -> bool {
        self.index < app_settings::COMPACT_ROW_COUNT
    }
}

/// Packs `keys` into rows of at most `capacity` keys.
///
/// Rows are created on demand while walking the sequence, so the row count
/// follows the input length. A capacity of 0 is treated as 1.
///
/// # Example
///
/// ```rust,ignore
/// use extra_keys::keys::KeyRegistry;
/// use extra_keys::layout::pack_rows;
///
/// let registry = KeyRegistry::with_builtin_keys();
/// let rows = pack_rows(registry.effective(), 7);
/// assert_eq!(rows.len(), 2);
/// ```
pub fn pack_rows<'a, I>(keys: I, capacity: usize) -> Vec<Row>
where
    I: IntoIterator<Item = &'a KeyDefinition>,
{
    let capacity = capacity.max(1);
    let mut rows: Vec<Row> = Vec::new();

    for (position, key) in keys.into_iter().enumerate() {
        let row_index = position / capacity;
        if row_index >= rows.len() {
            rows.push(Row::new(row_index));
        }
        rows[row_index].keys.push(key.clone());
    }

    rows
}

/// Number of rows `key_count` keys occupy.
pub fn row_count(key_count: usize, capacity: usize) -> usize {
    key_count.div_ceil(capacity.max(1))
}

// ============================================================================
// Tests
// ============================================================================
