// SPDX-License-Identifier: GPL-3.0-only

//! Row layout of the extra keys panel.
//!
//! The panel shows its keys in rows of [`MAX_KEYS_PER_ROW`] buttons. Rows are
//! derived data: they are recomputed from the registry's effective sequence
//! whenever it changes and never stored beyond one render cycle.
//!
//! [`MAX_KEYS_PER_ROW`]: crate::app_settings::MAX_KEYS_PER_ROW

// Sub-modules
pub mod packer;

pub use packer::{pack_rows, row_count, Row};
