// SPDX-License-Identifier: GPL-3.0-only

//! User key configuration.
//!
//! User keys are shortcut buttons that type a piece of text. They are read
//! from a JSON file, by default `eks/default.json` in the platform
//! configuration directory:
//!
//! ```json
//! {
//!     "version": 1,
//!     "programs": ["bash"],
//!     "keys": [
//!         { "label": "|" },
//!         { "label": "~", "text": "cd ~", "with_enter": true }
//!     ]
//! }
//! ```
//!
//! Parsing is all-or-nothing: a file with any bad entry yields a
//! [`ConfigError`] and no keys.

// Sub-modules
pub mod locator;
pub mod parser;
pub mod types;

pub use locator::{ConfigLocator, DefaultLocator, FixedLocator, NoLocator};
pub use parser::{parse_config_file, parse_config_from_string, ConfigParser};
pub use types::{Config, ConfigError, ConfigFile, ShortcutKeyEntry};
