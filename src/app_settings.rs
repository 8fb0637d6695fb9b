// SPDX-License-Identifier: GPL-3.0-only

//! Centralized panel settings and constants.

/// Application name used to locate the user configuration directory.
pub const APP_NAME: &str = "extra-keys";

/// Directory (below the configuration root) holding user key files.
pub const CONFIG_SUBDIR: &str = "eks";

/// File name of the default user key file.
pub const DEFAULT_CONFIG_FILE: &str = "default.json";

/// Highest user key file format version this crate understands.
pub const CONFIG_VERSION: u32 = 1;

/// Maximum number of buttons in one panel row.
pub const MAX_KEYS_PER_ROW: usize = 7;

/// Number of rows that stay visible while the panel is collapsed.
pub const COMPACT_ROW_COUNT: usize = 2;

/// Panel opacity while collapsed.
pub const DEFAULT_ALPHA: f32 = 0.8;

/// Panel opacity while expanded, so the overlay stays out of the way of terminal output.
pub const EXPANDED_ALPHA: f32 = 0.5;

/// Default button height in pixels.
pub const DEFAULT_KEY_HEIGHT: u32 = 36;

/// Default panel width in pixels when the host has not reported one.
pub const DEFAULT_DISPLAY_WIDTH: u32 = 1080;

/// Default button text color (opaque white, ARGB).
pub const DEFAULT_TEXT_COLOR: u32 = 0xFFFF_FFFF;
