// SPDX-License-Identifier: GPL-3.0-only

//! Pressed state of the toggle keys (Ctrl and Alt).
//!
//! The key definitions themselves are stateless; the panel owns one
//! [`ModifierState`] and the toggle keys refer to their cell through
//! [`Modifier`].
//!
//! # Example
//!
//! ```rust,ignore
//! use extra_keys::keys::{Modifier, ModifierState};
//!
//! let mut state = ModifierState::new();
//!
//! // User taps Ctrl on the panel
//! state.toggle(Modifier::Ctrl);
//!
//! // Terminal consumes the modifier for the next typed key
//! assert!(state.read(Modifier::Ctrl));
//! assert!(!state.is_active(Modifier::Ctrl));
//! ```

use crate::keys::types::Modifier;
use std::collections::HashSet;

/// Tracks which toggle keys are currently pressed.
#[derive(Debug, Clone, Default)]
pub struct ModifierState {
    /// Set of currently pressed modifiers
    active: HashSet<Modifier>,
}

impl ModifierState {
    /// Creates a new `ModifierState` with nothing pressed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: HashSet::new(),
        }
    }

    /// Flips a modifier's pressed state.
    ///
    /// # Returns
    ///
    /// `true` if the modifier is now pressed, `false` if it is now released
    pub fn toggle(&mut self, modifier: Modifier) -> bool {
        if self.active.remove(&modifier) {
            false
        } else {
            self.active.insert(modifier);
            true
        }
    }

    /// Checks whether a modifier is pressed without changing it.
    #[must_use]
    pub fn is_active(&self, modifier: Modifier) -> bool {
        self.active.contains(&modifier)
    }

    /// Reads a modifier and releases it.
    ///
    /// The terminal calls this when it applies the modifier to the next typed
    /// key, so a tap on Ctrl affects exactly one key press.
    pub fn read(&mut self, modifier: Modifier) -> bool {
        self.active.remove(&modifier)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test toggle functionality
    #[test]
    fn test_toggle() {
        let mut state = ModifierState::new();

        assert!(state.toggle(Modifier::Alt));
        assert!(state.is_active(Modifier::Alt));

        assert!(!state.toggle(Modifier::Alt));
        assert!(!state.is_active(Modifier::Alt));
    }

    /// Test that reading releases the modifier
    #[test]
    fn test_read_consumes() {
        let mut state = ModifierState::new();
        state.toggle(Modifier::Ctrl);

        assert!(state.read(Modifier::Ctrl), "First read sees the press");
        assert!(!state.read(Modifier::Ctrl), "Second read sees nothing");
        assert!(!state.read(Modifier::Alt));
    }

    /// Test that modifiers are independent cells
    #[test]
    fn test_independent_cells() {
        let mut state = ModifierState::new();
        state.toggle(Modifier::Ctrl);

        assert!(state.is_active(Modifier::Ctrl));
        assert!(!state.is_active(Modifier::Alt));

        state.toggle(Modifier::Alt);
        assert!(state.read(Modifier::Alt));
        assert!(state.is_active(Modifier::Ctrl), "Reading Alt leaves Ctrl pressed");
    }

    /// Test Default trait implementation
    #[test]
    fn test_default() {
        let state = ModifierState::default();
        assert!(!state.is_active(Modifier::Ctrl));
        assert!(!state.is_active(Modifier::Alt));
    }
}
