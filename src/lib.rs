// SPDX-License-Identifier: GPL-3.0-only

//! Extra keys - auxiliary key panel engine for touch terminal emulators
//!
//! This crate provides the layout and state engine behind the strip of soft
//! buttons (Esc, Tab, arrows, Ctrl/Alt, paging keys, an IME toggle and user
//! shortcut keys) that sits above a virtual keyboard.
//!
//! # Architecture
//!
//! 1. **Key registry** (`keys`): builtin and user key sequences without
//!    duplicates. Builtin keys always come first.
//!
//! 2. **Row packer** (`layout`): splits the effective key sequence into rows
//!    of at most seven keys.
//!
//! 3. **Panel state** (`panel`): collapsed/expanded disclosure of the rows
//!    beyond the two compact ones, with the derived visibility and opacity.
//!
//! 4. **Render sink** (`renderer`): the platform toolkit receives a frame
//!    describing every row and button after each change.
//!
//! # Modules
//!
//! - `app_settings`: Centralized constants
//! - `config`: User key configuration loading
//! - `keys`: Key definitions, toggle-key state and the key registry
//! - `layout`: Row packing
//! - `panel`: The panel component and its disclosure state
//! - `renderer`: Frame description and the render sink contract

pub mod app_settings;
pub mod config;
pub mod keys;
pub mod layout;
pub mod panel;
pub mod renderer;

pub use keys::{KeyAction, KeyCode, KeyDefinition, Modifier};
pub use panel::{ExtraKeysPanel, PanelEvent, PanelOptions, TerminalHost};
pub use renderer::{Frame, RenderSink};

// ============================================================================
// Integration Tests
// ============================================================================
