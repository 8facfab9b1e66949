use crate::error::{MoveError, ParseBoardError};
use crate::types::{BOARD_SIZE, Cell, NUM_SQUARES, Player, Position, Score};

/// 8x8 occupancy grid represented by two disjoint bitboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    black: u64,
    white: u64,
}

impl Board {
    /// Creates the initial board:
    /// d4=white, e4=black, d5=black, e5=white.
    pub fn new() -> Self {
        Self {
            black: bit(28) | bit(35),
            white: bit(27) | bit(36),
        }
    }

    pub fn empty() -> Self {
        Self { black: 0, white: 0 }
    }

    /// Builds a board from raw masks. Squares set in both masks are black.
    pub fn from_bitboards(black: u64, white: u64) -> Self {
        Self {
            black,
            white: white & !black,
        }
    }

    /// Builds a board from 8 text rows, top row first.
    ///
    /// `B` is black, `W` is white, `.` is empty; whitespace is ignored.
    pub fn from_rows(rows: [&str; BOARD_SIZE]) -> Result<Self, ParseBoardError> {
        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let glyphs: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if glyphs.len() != BOARD_SIZE {
                return Err(ParseBoardError::RowLength {
                    row,
                    len: glyphs.len(),
                });
            }
            for (col, glyph) in glyphs.into_iter().enumerate() {
                let square = bit(row * BOARD_SIZE + col);
                match glyph {
                    'B' => board.black |= square,
                    'W' => board.white |= square,
                    '.' => {}
                    _ => return Err(ParseBoardError::UnknownGlyph { row, col, glyph }),
                }
            }
        }
        Ok(board)
    }

    /// Occupancy at `pos`.
    pub fn get(&self, pos: Position) -> Result<Cell, MoveError> {
        pos.checked_index().map(|idx| self.cell_at(idx))
    }

    /// Overwrites a single square.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) -> Result<(), MoveError> {
        let square = bit(pos.checked_index()?);
        self.black &= !square;
        self.white &= !square;
        match cell {
            Cell::Black => self.black |= square,
            Cell::White => self.white |= square,
            Cell::Empty => {}
        }
        Ok(())
    }

    /// Hands every square in `mask` to `player` in one write.
    pub(crate) fn claim(&mut self, mask: u64, player: Player) {
        match player {
            Player::Black => {
                self.black |= mask;
                self.white &= !mask;
            }
            Player::White => {
                self.white |= mask;
                self.black &= !mask;
            }
        }
    }

    pub(crate) fn cell_at(&self, idx: usize) -> Cell {
        let square = bit(idx);
        if (self.black & square) != 0 {
            Cell::Black
        } else if (self.white & square) != 0 {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Returns `(own, opponent)` masks from `player`'s point of view.
    pub(crate) fn masks(&self, player: Player) -> (u64, u64) {
        match player {
            Player::Black => (self.black, self.white),
            Player::White => (self.white, self.black),
        }
    }

    pub(crate) fn occupied(&self) -> u64 {
        self.black | self.white
    }

    /// Disc counts for both sides.
    pub fn count(&self) -> Score {
        Score {
            black: self.black.count_ones() as u8,
            white: self.white.count_ones() as u8,
        }
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        NUM_SQUARES as u8 - self.count().total()
    }

    /// Row-major walk over every square.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        (0..NUM_SQUARES).map(|idx| (Position::from_index(idx), self.cell_at(idx)))
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [0u8; NUM_SQUARES];
        for (idx, cell) in board.iter_mut().enumerate() {
            *cell = self.cell_at(idx).code();
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn bit(pos: usize) -> u64 {
    if pos < NUM_SQUARES { 1u64 << pos } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_board_has_central_cross() {
        let board = Board::new();

        assert_eq!(board.get(Position::new(3, 3)), Ok(Cell::White));
        assert_eq!(board.get(Position::new(4, 4)), Ok(Cell::White));
        assert_eq!(board.get(Position::new(3, 4)), Ok(Cell::Black));
        assert_eq!(board.get(Position::new(4, 3)), Ok(Cell::Black));
        assert_eq!(board.count(), Score { black: 2, white: 2 });
        assert_eq!(board.empty_count(), 60);
    }

    #[test]
    fn get_rejects_out_of_bounds() {
        let board = Board::new();

        assert_eq!(
            board.get(Position::new(8, 0)),
            Err(MoveError::OutOfBounds { row: 8, col: 0 })
        );
    }

    #[test]
    fn set_replaces_previous_owner() {
        let mut board = Board::new();
        let pos = Position::new(3, 3);

        board.set(pos, Cell::Black).unwrap();
        assert_eq!(board.get(pos), Ok(Cell::Black));
        assert_eq!(board.count(), Score { black: 3, white: 1 });

        board.set(pos, Cell::Empty).unwrap();
        assert_eq!(board.get(pos), Ok(Cell::Empty));
        assert_eq!(
            board.set(Position::new(0, 8), Cell::White),
            Err(MoveError::OutOfBounds { row: 0, col: 8 })
        );
    }

    #[test]
    fn from_rows_matches_new() {
        let board = Board::from_rows([
            "........",
            "........",
            "........",
            "...WB...",
            "...BW...",
            "........",
            "........",
            "........",
        ])
        .unwrap();

        assert_eq!(board, Board::new());
    }

    #[test]
    fn from_rows_reports_bad_input() {
        let short = Board::from_rows(["...", "", "", "", "", "", "", ""]);
        assert_eq!(short, Err(ParseBoardError::RowLength { row: 0, len: 3 }));

        let glyph = Board::from_rows([
            "........", "........", "..x.....", "........", "........", "........",
            "........", "........",
        ]);
        assert_eq!(
            glyph,
            Err(ParseBoardError::UnknownGlyph {
                row: 2,
                col: 2,
                glyph: 'x'
            })
        );
    }

    #[test]
    fn to_array_uses_cell_codes() {
        let cells = Board::new().to_array();

        assert_eq!(cells[27], 2);
        assert_eq!(cells[28], 1);
        assert_eq!(cells[0], 0);
        assert_eq!(cells.iter().filter(|&&c| c != 0).count(), 4);
    }
}
