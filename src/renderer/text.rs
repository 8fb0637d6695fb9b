// SPDX-License-Identifier: GPL-3.0-only

//! Plain-text render sink.
//!
//! Prints the visible rows topmost first, one line per row:
//!
//! ```text
//! [ Ctrl ][ Alt  ][ PgUp ][ Home ][  ↑   ][ End  ][ ···  ]
//! [ Esc  ][ Tab  ][ PgDn ][  ←   ][  ↓   ][  →   ][ Ime  ]
//! ```
//!
//! Pressed toggle keys are marked with `*`.

use crate::renderer::{Frame, FrameRow, RenderSink};
use std::io::Write;

/// Width of a button cell in characters, brackets excluded.
const CELL_WIDTH: usize = 6;

/// Writes frames as text to any writer.
#[derive(Debug)]
pub struct TextSink<W: Write> {
    out: W,
    frames_presented: usize,
}

impl<W: Write> TextSink<W> {
    /// Creates a sink writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            frames_presented: 0,
        }
    }

    /// Number of frames written so far.
    pub fn frames_presented(&self) -> usize {
        self.frames_presented
    }

    /// Borrows the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, frame: &Frame) -> std::io::Result<()> {
        let hidden = frame.rows.iter().filter(|row| !row.visible).count();
        writeln!(
            self.out,
            "-- opacity {:.1}, {} row(s) hidden --",
            frame.opacity, hidden
        )?;
        for row in frame.visible_rows() {
            writeln!(self.out, "{}", format_row(row))?;
        }
        self.out.flush()
    }
}

/// Formats one row of buttons.
pub fn format_row(row: &FrameRow) -> String {
    row.buttons
        .iter()
        .map(|button| {
            let label = match button.checked {
                Some(true) => format!("{}*", button.label),
                _ => button.label.clone(),
            };
            format!("[{:^width$}]", label, width = CELL_WIDTH)
        })
        .collect()
}

impl<W: Write> RenderSink for TextSink<W> {
    fn present(&mut self, frame: &Frame) {
        if let Err(e) = self.write_frame(frame) {
            tracing::warn!("Failed to write panel frame: {}", e);
        }
        self.frames_presented += 1;
    }

    fn haptic_tap(&mut self) {
        tracing::trace!("Haptic tap");
    }
}
