// SPDX-License-Identifier: GPL-3.0-only

//! Key definitions, toggle-key state and the key registry.
//!
//! # Overview
//!
//! - [`KeyDefinition`]: immutable description of one soft button
//! - [`ModifierState`]: pressed state of the Ctrl and Alt toggle keys
//! - [`KeyRegistry`]: builtin and user key sequences with set semantics
//!
//! # Example
//!
//! ```rust,ignore
//! use extra_keys::keys::{KeyDefinition, KeyRegistry};
//!
//! let mut registry = KeyRegistry::with_builtin_keys();
//! registry.add_user(KeyDefinition::shortcut("|", "|", false));
//!
//! // Builtin keys always come first
//! let labels: Vec<&str> = registry.effective().map(|k| k.label()).collect();
//! assert_eq!(labels.first(), Some(&"Esc"));
//! assert_eq!(labels.last(), Some(&"|"));
//! ```

// Sub-modules
pub mod modifier;
pub mod registry;
pub mod types;

pub use modifier::ModifierState;
pub use registry::{add_key, builtin_keys, KeyRegistry};
pub use types::{KeyAction, KeyCode, KeyDefinition, Modifier};
