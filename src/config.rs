use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::Cell;

/// Options for the text grid renderer.
///
/// Missing fields fall back to [`RenderConfig::default`], so a host can pass
/// a partial object such as `{ "black": "X", "white": "O" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub black: char,
    pub white: char,
    pub empty: char,
    /// Drawn on empty squares where the side to move may play.
    pub hint: char,
    /// Column letters above and row numbers beside the grid.
    pub show_labels: bool,
    pub show_hints: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            black: 'B',
            white: 'W',
            empty: '.',
            hint: '*',
            show_labels: true,
            show_hints: false,
        }
    }
}

impl RenderConfig {
    /// Every glyph must be distinct, otherwise the grid is ambiguous.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let glyphs = [
            ("black", self.black),
            ("white", self.white),
            ("empty", self.empty),
            ("hint", self.hint),
        ];
        for (i, &(first, glyph)) in glyphs.iter().enumerate() {
            if let Some(&(second, _)) = glyphs[i + 1..].iter().find(|(_, g)| *g == glyph) {
                return Err(ConfigError::DuplicateGlyph {
                    glyph,
                    first,
                    second,
                });
            }
        }
        Ok(())
    }

    pub fn glyph(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => self.empty,
            Cell::Black => self.black,
            Cell::White => self.white,
        }
    }
}
