// SPDX-License-Identifier: GPL-3.0-only

//! Sizing calculations for panel buttons.
//!
//! Every button gets the same width: the display width divided by the row
//! capacity, so a full row spans the display. Short rows are left-aligned
//! and keep the same button width.

use crate::app_settings;

/// Display dimensions reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMetrics {
    /// Width available to the panel in pixels
    pub width_px: u32,
    /// Fixed button height in pixels
    pub key_height_px: u32,
}

impl DisplayMetrics {
    /// Creates metrics for a display `width_px` wide.
    pub fn new(width_px: u32, key_height_px: u32) -> Self {
        Self {
            width_px,
            key_height_px,
        }
    }

    /// Width of one button for rows holding `per_row` buttons.
    pub fn button_width(&self, per_row: usize) -> u32 {
        calculate_button_width(self.width_px, per_row)
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self {
            width_px: app_settings::DEFAULT_DISPLAY_WIDTH,
            key_height_px: app_settings::DEFAULT_KEY_HEIGHT,
        }
    }
}

/// Divides the display width evenly between `per_row` buttons.
///
/// Returns the full width when `per_row` is 0.
pub fn calculate_button_width(display_width: u32, per_row: usize) -> u32 {
    let per_row = u32::try_from(per_row.max(1)).unwrap_or(u32::MAX);
    display_width / per_row
}
