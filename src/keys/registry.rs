// SPDX-License-Identifier: GPL-3.0-only

//! Ordered, duplicate-free key sequences feeding the panel.
//!
//! The registry keeps builtin keys and user keys apart so the user keys can be
//! reloaded without touching the builtin ones. The display order is always
//! builtin keys first, then user keys, each in insertion order.

use crate::keys::types::{KeyCode, KeyDefinition, Modifier};

/// Appends `key` to `sequence` unless a key with the same code is present.
///
/// Returns `true` if the key was appended.
pub fn add_key(sequence: &mut Vec<KeyDefinition>, key: KeyDefinition) -> bool {
    if sequence.contains(&key) {
        return false;
    }
    sequence.push(key);
    true
}

/// Returns the builtin keys in display order.
///
/// Fourteen keys, filling exactly the two compact rows. The first row holds
/// the keys used most while typing commands; the expand key closes the
/// second row.
pub fn builtin_keys() -> Vec<KeyDefinition> {
    vec![
        KeyDefinition::control(KeyCode::Esc),
        KeyDefinition::control(KeyCode::Tab),
        KeyDefinition::control(KeyCode::PageDown),
        KeyDefinition::arrow(KeyCode::ArrowLeft),
        KeyDefinition::arrow(KeyCode::ArrowDown),
        KeyDefinition::arrow(KeyCode::ArrowRight),
        KeyDefinition::toggle_ime(),
        KeyDefinition::stated(Modifier::Ctrl),
        KeyDefinition::stated(Modifier::Alt),
        KeyDefinition::control(KeyCode::PageUp),
        KeyDefinition::control(KeyCode::Home),
        KeyDefinition::arrow(KeyCode::ArrowUp),
        KeyDefinition::control(KeyCode::End),
        KeyDefinition::expand_panel(),
    ]
}

/// Builtin and user key sequences.
#[derive(Debug, Clone, Default)]
pub struct KeyRegistry {
    builtin: Vec<KeyDefinition>,
    user: Vec<KeyDefinition>,
}

impl KeyRegistry {
    /// Creates a registry with no keys at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the builtin keys and no user keys.
    pub fn with_builtin_keys() -> Self {
        let mut registry = Self::new();
        for key in builtin_keys() {
            registry.add_builtin(key);
        }
        registry
    }

    /// Adds a builtin key. Returns `false` if the key was already present.
    pub fn add_builtin(&mut self, key: KeyDefinition) -> bool {
        add_key(&mut self.builtin, key)
    }

    /// Adds a user key. Returns `false` if the key was already present.
    pub fn add_user(&mut self, key: KeyDefinition) -> bool {
        add_key(&mut self.user, key)
    }

    /// Removes every user key.
    pub fn clear_user(&mut self) {
        self.user.clear();
    }

    /// Replaces the user keys with `keys`, dropping duplicates.
    pub fn replace_user(&mut self, keys: impl IntoIterator<Item = KeyDefinition>) {
        self.clear_user();
        for key in keys {
            self.add_user(key);
        }
    }

    /// Builtin keys in display order.
    pub fn builtin(&self) -> &[KeyDefinition] {
        &self.builtin
    }

    /// User keys in display order.
    pub fn user(&self) -> &[KeyDefinition] {
        &self.user
    }

    /// Iterates the effective display sequence: builtin keys, then user keys.
    pub fn effective(&self) -> impl Iterator<Item = &KeyDefinition> + '_ {
        self.builtin.iter().chain(self.user.iter())
    }

    /// Number of keys in the effective sequence.
    pub fn len(&self) -> usize {
        self.builtin.len() + self.user.len()
    }

    /// Returns `true` when neither sequence holds a key.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks a key up by code in the effective sequence.
    pub fn find(&self, code: &KeyCode) -> Option<&KeyDefinition> {
        self.effective().find(|key| key.code() == code)
    }
}

// ============================================================================
// Tests
// ============================================================================
