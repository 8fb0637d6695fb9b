// SPDX-License-Identifier: GPL-3.0-only

//! Expanded/collapsed state of the extra keys panel.
//!
//! The panel always shows its two compact rows. Rows beyond them are only
//! visible while the panel is expanded. With two rows or fewer there is
//! nothing to disclose, so the state is frozen in [`PanelMode::Collapsed`]
//! and every transition is a no-op.

use crate::app_settings;

/// Disclosure mode of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelMode {
    /// Only the compact rows are visible
    #[default]
    Collapsed,
    /// Every row is visible
    Expanded,
}

/// Panel disclosure state and the visibility/opacity derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    mode: PanelMode,
    row_count: usize,
}

impl PanelState {
    /// Creates a collapsed state for a panel with `row_count` rows.
    pub fn new(row_count: usize) -> Self {
        Self {
            mode: PanelMode::Collapsed,
            row_count,
        }
    }

    /// Current mode.
    pub fn mode(&self) -> PanelMode {
        self.mode
    }

    /// Returns `true` while expanded.
    pub fn is_expanded(&self) -> bool {
        self.mode == PanelMode::Expanded
    }

    /// Returns `true` when there are no rows beyond the compact ones.
    pub fn is_frozen(&self) -> bool {
        self.row_count <= app_settings::COMPACT_ROW_COUNT
    }

    /// Number of rows the state was computed for.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Updates the row count after the keys were repacked.
    ///
    /// A panel that no longer has rows to hide falls back to collapsed.
    pub fn set_row_count(&mut self, row_count: usize) {
        self.row_count = row_count;
        if self.is_frozen() && self.mode != PanelMode::Collapsed {
            tracing::debug!("Panel shrank to {} rows, collapsing", row_count);
            self.mode = PanelMode::Collapsed;
        }
    }

    /// Flips between collapsed and expanded.
    ///
    /// Returns `true` if the mode changed.
    pub fn toggle(&mut self) -> bool {
        let target = match self.mode {
            PanelMode::Collapsed => PanelMode::Expanded,
            PanelMode::Expanded => PanelMode::Collapsed,
        };
        self.transition(target)
    }

    /// Sets the mode directly.
    ///
    /// Returns `true` if the mode changed.
    pub fn set_expanded(&mut self, expanded: bool) -> bool {
        let target = if expanded {
            PanelMode::Expanded
        } else {
            PanelMode::Collapsed
        };
        self.transition(target)
    }

    fn transition(&mut self, target: PanelMode) -> bool {
        if self.is_frozen() || self.mode == target {
            return false;
        }
        tracing::debug!("Panel {:?} -> {:?}", self.mode, target);
        self.mode = target;
        true
    }

    /// Handles the platform back signal.
    ///
    /// While expanded the signal collapses the panel and is consumed
    /// (returns `true`). While collapsed it is left to propagate.
    pub fn handle_back(&mut self) -> bool {
        if self.is_expanded() {
            self.set_expanded(false);
            true
        } else {
            false
        }
    }

    /// Whether the row at `index` is shown.
    pub fn is_row_visible(&self, index: usize) -> bool {
        index < app_settings::COMPACT_ROW_COUNT || self.is_expanded()
    }

    /// Number of rows currently hidden.
    pub fn hidden_row_count(&self) -> usize {
        if self.is_expanded() {
            0
        } else {
            self.row_count
                .saturating_sub(app_settings::COMPACT_ROW_COUNT)
        }
    }

    /// Opacity of the whole panel.
    pub fn opacity(&self) -> f32 {
        match self.mode {
            PanelMode::Collapsed => app_settings::DEFAULT_ALPHA,
            PanelMode::Expanded => app_settings::EXPANDED_ALPHA,
        }
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new(0)
    }
}

// ============================================================================
// Tests
// ============================================================================
