// SPDX-License-Identifier: GPL-3.0-only

//! Render contract between the panel and the platform widget toolkit.
//!
//! The panel does not draw anything itself. After every change it builds a
//! [`Frame`] describing all rows and hands it to a [`RenderSink`], which
//! turns it into widgets.
//!
//! # Frame layout
//!
//! Rows are listed in reverse order: the highest row comes first (topmost)
//! and row 0 comes last, so the compact rows sit at the bottom next to the
//! keyboard. Rows beyond the compact ones carry `visible: false` while the
//! panel is collapsed.
//!
//! # Activation
//!
//! When a control is pressed the sink calls
//! [`ExtraKeysPanel::click`](crate::panel::ExtraKeysPanel::click) with the
//! button's code and the application's top-level view. The panel pulses
//! [`RenderSink::haptic_tap`] before running the key's action.

// Sub-modules
pub mod key;
pub mod row;
pub mod sizing;
pub mod text;
pub mod theme;

pub use key::{render_key, ButtonSpec};
pub use row::{render_row, FrameRow};
pub use sizing::{calculate_button_width, DisplayMetrics};
pub use text::TextSink;
pub use theme::{Color, PanelStyle};

use crate::keys::ModifierState;
use crate::layout::Row;
use crate::panel::PanelState;

/// Consumer of rendered frames.
pub trait RenderSink {
    /// Replaces the displayed panel with `frame`.
    fn present(&mut self, frame: &Frame);

    /// Plays a short tactile pulse for a key press.
    fn haptic_tap(&mut self);
}

/// Complete description of the panel at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Opacity of the whole panel
    pub opacity: f32,
    /// Rows, topmost first
    pub rows: Vec<FrameRow>,
}

impl Frame {
    /// Iterates the rows that are shown, topmost first.
    pub fn visible_rows(&self) -> impl Iterator<Item = &FrameRow> + '_ {
        self.rows.iter().filter(|row| row.visible)
    }

    /// Looks a row up by its index.
    pub fn row(&self, index: usize) -> Option<&FrameRow> {
        self.rows.iter().find(|row| row.index == index)
    }
}

/// Builds the frame for `rows` under the given state and style.
pub fn build_frame(
    rows: &[Row],
    state: &PanelState,
    modifiers: &ModifierState,
    style: &PanelStyle,
    metrics: &DisplayMetrics,
) -> Frame {
    Frame {
        opacity: state.opacity(),
        rows: rows
            .iter()
            .rev()
            .map(|row| {
                render_row(
                    row,
                    state.is_row_visible(row.index),
                    modifiers,
                    style,
                    metrics,
                )
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::KeyDefinition;
    use crate::layout::pack_rows;

    fn rows(count: usize) -> Vec<Row> {
        let keys: Vec<KeyDefinition> = (0..count)
            .map(|i| KeyDefinition::shortcut(format!("k{}", i), "x", false))
            .collect();
        pack_rows(&keys, 7)
    }

    /// Test 1: Rows are emitted topmost first
    #[test]
    fn test_reverse_row_order() {
        let rows = rows(17);
        let state = PanelState::new(rows.len());
        let frame = build_frame(
            &rows,
            &state,
            &ModifierState::new(),
            &PanelStyle::default(),
            &DisplayMetrics::default(),
        );

        let indices: Vec<usize> = frame.rows.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![2, 1, 0]);
        assert_eq!(frame.rows[0].buttons.len(), 3);
    }

    /// Test 2: Collapsed frames hide extra rows and use default opacity
    #[test]
    fn test_collapsed_frame() {
        let rows = rows(17);
        let state = PanelState::new(rows.len());
        let frame = build_frame(
            &rows,
            &state,
            &ModifierState::new(),
            &PanelStyle::default(),
            &DisplayMetrics::default(),
        );

        assert_eq!(frame.opacity, 0.8);
        assert!(!frame.row(2).unwrap().visible);
        let visible: Vec<usize> = frame.visible_rows().map(|r| r.index).collect();
        assert_eq!(visible, vec![1, 0]);
    }

    /// Test 3: Expanded frames show every row
    #[test]
    fn test_expanded_frame() {
        let rows = rows(17);
        let mut state = PanelState::new(rows.len());
        state.toggle();
        let frame = build_frame(
            &rows,
            &state,
            &ModifierState::new(),
            &PanelStyle::default(),
            &DisplayMetrics::default(),
        );

        assert_eq!(frame.opacity, 0.5);
        assert_eq!(frame.visible_rows().count(), 3);
    }

    /// Test 4: No rows, empty frame
    #[test]
    fn test_empty_frame() {
        let frame = build_frame(
            &[],
            &PanelState::new(0),
            &ModifierState::new(),
            &PanelStyle::default(),
            &DisplayMetrics::default(),
        );
        assert!(frame.rows.is_empty());
        assert!(frame.row(0).is_none());
    }
}
