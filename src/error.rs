use crate::types::Position;

/// Reasons a placement is rejected. None of them change the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("position ({row}, {col}) is outside the 8x8 board")]
    OutOfBounds { row: u8, col: u8 },

    #[error("cell {0} is already occupied")]
    CellOccupied(Position),

    #[error("placing at {0} flips no discs")]
    NoFlips(Position),

    #[error("game is already over")]
    GameOver,
}

/// Errors raised while building a board from a text diagram.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    #[error("row {row} has {len} cells, expected 8")]
    RowLength { row: usize, len: usize },

    #[error("unknown glyph {glyph:?} at ({row}, {col})")]
    UnknownGlyph { row: usize, col: usize, glyph: char },
}

/// Errors that can occur when loading render configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("glyph {glyph:?} is used for both {first} and {second}")]
    DuplicateGlyph {
        glyph: char,
        first: &'static str,
        second: &'static str,
    },

    #[error("failed to decode render config: {0}")]
    Decode(String),
}
