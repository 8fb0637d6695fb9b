// SPDX-License-Identifier: GPL-3.0-only

//! Key definitions for the extra keys panel.
//!
//! A [`KeyDefinition`] describes a single soft button: its identity
//! ([`KeyCode`]), the label drawn on it and the [`KeyAction`] performed when
//! it is clicked. Definitions are immutable once built; the only mutable state
//! attached to a key (the pressed state of Ctrl and Alt) lives in
//! [`ModifierState`](crate::keys::ModifierState) and is addressed through
//! [`Modifier`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

// ============================================================================
// Key Identity
// ============================================================================

/// Stable identity of a key.
///
/// Two definitions with the same code are the same key for deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// Escape
    Esc,
    /// Tab
    Tab,
    /// Page Up
    PageUp,
    /// Page Down
    PageDown,
    /// Home
    Home,
    /// End
    End,
    /// Cursor up
    ArrowUp,
    /// Cursor down
    ArrowDown,
    /// Cursor left
    ArrowLeft,
    /// Cursor right
    ArrowRight,
    /// Control modifier (toggle key)
    Ctrl,
    /// Alt modifier (toggle key)
    Alt,
    /// Show or hide the soft keyboard
    ToggleIme,
    /// Expand or collapse the extra rows of the panel
    ShowAllButtons,
    /// Shortcut key defined in the user configuration, identified by its label
    User(String),
}

impl KeyCode {
    /// Returns the label drawn on the key when no explicit label is given.
    pub fn default_label(&self) -> &str {
        match self {
            KeyCode::Esc => "Esc",
            KeyCode::Tab => "Tab",
            KeyCode::PageUp => "PgUp",
            KeyCode::PageDown => "PgDn",
            KeyCode::Home => "Home",
            KeyCode::End => "End",
            KeyCode::ArrowUp => "↑",
            KeyCode::ArrowDown => "↓",
            KeyCode::ArrowLeft => "←",
            KeyCode::ArrowRight => "→",
            KeyCode::Ctrl => "Ctrl",
            KeyCode::Alt => "Alt",
            KeyCode::ToggleIme => "Ime",
            KeyCode::ShowAllButtons => "···",
            KeyCode::User(label) => label,
        }
    }

    /// Returns `true` for codes that are not backed by user configuration.
    pub fn is_builtin(&self) -> bool {
        !matches!(self, KeyCode::User(_))
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::User(label) => write!(f, "User({})", label),
            other => write!(f, "{}", other.default_label()),
        }
    }
}

/// Toggle-style modifier keys owning a pressed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Modifier {
    /// Control modifier
    Ctrl,
    /// Alt modifier
    Alt,
}

impl Modifier {
    /// Returns the key code of the button bound to this modifier.
    pub fn key_code(self) -> KeyCode {
        match self {
            Modifier::Ctrl => KeyCode::Ctrl,
            Modifier::Alt => KeyCode::Alt,
        }
    }
}

// ============================================================================
// Click Behavior
// ============================================================================

/// Behavior invoked when a key is clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward a control key to the terminal.
    Control(KeyCode),
    /// Flip the pressed state of a modifier.
    Stated(Modifier),
    /// Ask the application to show or hide the soft keyboard.
    ToggleIme,
    /// Expand or collapse the panel.
    ExpandPanel,
    /// Type literal text, optionally followed by Enter.
    Text {
        /// Text sent to the terminal
        text: String,
        /// Whether Enter is sent after the text
        with_enter: bool,
    },
}

// ============================================================================
// Key Definition
// ============================================================================

/// A single soft button of the panel.
///
/// Equality and hashing only consider [`KeyDefinition::code`].
#[derive(Debug, Clone)]
pub struct KeyDefinition {
    code: KeyCode,
    label: String,
    action: KeyAction,
    repeatable: bool,
}

impl KeyDefinition {
    /// Creates a key that forwards `code` to the terminal.
    pub fn control(code: KeyCode) -> Self {
        Self {
            label: code.default_label().to_string(),
            action: KeyAction::Control(code.clone()),
            code,
            repeatable: false,
        }
    }

    /// Creates a cursor key. Cursor keys auto-repeat while held.
    pub fn arrow(code: KeyCode) -> Self {
        Self {
            repeatable: true,
            ..Self::control(code)
        }
    }

    /// Creates a toggle key bound to `modifier`.
    pub fn stated(modifier: Modifier) -> Self {
        let code = modifier.key_code();
        Self {
            label: code.default_label().to_string(),
            code,
            action: KeyAction::Stated(modifier),
            repeatable: false,
        }
    }

    /// Creates the key that toggles the soft keyboard.
    pub fn toggle_ime() -> Self {
        Self {
            action: KeyAction::ToggleIme,
            ..Self::control(KeyCode::ToggleIme)
        }
    }

    /// Creates the key that expands or collapses the panel.
    pub fn expand_panel() -> Self {
        Self {
            action: KeyAction::ExpandPanel,
            ..Self::control(KeyCode::ShowAllButtons)
        }
    }

    /// Creates a user shortcut key that types `text`.
    pub fn shortcut(label: impl Into<String>, text: impl Into<String>, with_enter: bool) -> Self {
        let label = label.into();
        Self {
            code: KeyCode::User(label.clone()),
            label,
            action: KeyAction::Text {
                text: text.into(),
                with_enter,
            },
            repeatable: false,
        }
    }

    /// Replaces the display label. Identity is unchanged.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Identity of the key.
    pub fn code(&self) -> &KeyCode {
        &self.code
    }

    /// Text drawn on the button, exactly as given.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Behavior invoked on click.
    pub fn action(&self) -> &KeyAction {
        &self.action
    }

    /// Whether the button repeats its action while held.
    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    /// Returns the modifier when this is a toggle key.
    pub fn modifier(&self) -> Option<Modifier> {
        match self.action {
            KeyAction::Stated(modifier) => Some(modifier),
            _ => None,
        }
    }
}

impl PartialEq for KeyDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for KeyDefinition {}

impl Hash for KeyDefinition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test 1: Equality only looks at the key code
    #[test]
    fn test_equality_by_code() {
        let esc = KeyDefinition::control(KeyCode::Esc);
        let relabeled = KeyDefinition::control(KeyCode::Esc).with_label("ESCAPE");

        assert_eq!(esc, relabeled, "Same code means same key");
        assert_ne!(esc, KeyDefinition::control(KeyCode::Tab));
    }

    /// Test 2: Shortcut keys are identified by their label
    #[test]
    fn test_shortcut_identity() {
        let a = KeyDefinition::shortcut("|", "|", false);
        let b = KeyDefinition::shortcut("|", " | grep ", true);

        assert_eq!(a, b);
        assert_eq!(a.code(), &KeyCode::User("|".to_string()));
        assert!(!a.code().is_builtin());
    }

    /// Test 3: Special builtin behaviors are tagged variants
    #[test]
    fn test_builtin_actions() {
        assert_eq!(KeyDefinition::toggle_ime().action(), &KeyAction::ToggleIme);
        assert_eq!(KeyDefinition::expand_panel().action(), &KeyAction::ExpandPanel);
        assert_eq!(
            KeyDefinition::control(KeyCode::Home).action(),
            &KeyAction::Control(KeyCode::Home)
        );

        let ctrl = KeyDefinition::stated(Modifier::Ctrl);
        assert_eq!(ctrl.code(), &KeyCode::Ctrl);
        assert_eq!(ctrl.modifier(), Some(Modifier::Ctrl));
        assert_eq!(KeyDefinition::toggle_ime().modifier(), None);
    }

    /// Test 4: Only cursor keys repeat
    #[test]
    fn test_arrow_keys_repeat() {
        assert!(KeyDefinition::arrow(KeyCode::ArrowUp).is_repeatable());
        assert!(!KeyDefinition::control(KeyCode::Esc).is_repeatable());
    }

    /// Test 5: Labels keep their case
    #[test]
    fn test_label_case_preserved() {
        let key = KeyDefinition::shortcut("sUdo", "sudo ", false);
        assert_eq!(key.label(), "sUdo");
        assert_eq!(KeyDefinition::control(KeyCode::PageDown).label(), "PgDn");
    }
}
