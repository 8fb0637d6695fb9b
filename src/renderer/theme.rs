// SPDX-License-Identifier: GPL-3.0-only

//! Appearance inputs for the panel buttons.
//!
//! The style is an explicit value owned by the panel and handed to every
//! render call. Changing it triggers a full re-render.

use crate::app_settings;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A color in ARGB order (`0xAARRGGBB`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    /// Opaque white.
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    /// Opaque black.
    pub const BLACK: Color = Color(0xFF00_0000);

    /// Builds a color from its components.
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Parses `#RRGGBB` (opaque) or `#AARRGGBB`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let value = u32::from_str_radix(digits, 16).ok()?;
        match digits.len() {
            6 => Some(Color(0xFF00_0000 | value)),
            8 => Some(Color(value)),
            _ => None,
        }
    }

    /// Alpha component.
    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }
}

impl Default for Color {
    fn default() -> Self {
        Color(app_settings::DEFAULT_TEXT_COLOR)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// Text color and typeface applied to every button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelStyle {
    /// Button label color
    #[serde(default)]
    pub text_color: Color,
    /// Typeface name; `None` keeps the platform default
    #[serde(default)]
    pub typeface: Option<String>,
}

// ============================================================================
// Tests
// ============================================================================
