// SPDX-License-Identifier: GPL-3.0-only

//! Row descriptions for the render sink.

use crate::keys::ModifierState;
use crate::layout::Row;
use crate::renderer::key::{render_key, ButtonSpec};
use crate::renderer::sizing::DisplayMetrics;
use crate::renderer::theme::PanelStyle;

/// One row of controls as handed to the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRow {
    /// Row index, 0 being the bottom row
    pub index: usize,
    /// Whether the row is shown
    pub visible: bool,
    /// Controls in left-to-right order
    pub buttons: Vec<ButtonSpec>,
}

/// Describes every control of `row`.
pub fn render_row(
    row: &Row,
    visible: bool,
    modifiers: &ModifierState,
    style: &PanelStyle,
    metrics: &DisplayMetrics,
) -> FrameRow {
    FrameRow {
        index: row.index,
        visible,
        buttons: row
            .keys
            .iter()
            .map(|key| render_key(key, modifiers, style, metrics))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::KeyDefinition;

    #[test]
    fn test_render_row_keeps_order() {
        let row = Row {
            index: 2,
            keys: vec![
                KeyDefinition::shortcut("a", "a", false),
                KeyDefinition::shortcut("b", "b", false),
            ],
        };

        let frame_row = render_row(
            &row,
            false,
            &ModifierState::new(),
            &PanelStyle::default(),
            &DisplayMetrics::default(),
        );

        assert_eq!(frame_row.index, 2);
        assert!(!frame_row.visible);
        let labels: Vec<&str> = frame_row.buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "b"]);
    }
}
