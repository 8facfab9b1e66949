use std::fmt;

use serde::Serialize;

use crate::error::MoveError;

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// One of the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    /// Wire code used in [`GameState`]: 1=black, 2=white.
    pub fn code(self) -> u8 {
        match self {
            Self::Black => 1,
            Self::White => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::White => "White",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Occupancy of a single square.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn owner(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::Black => Some(Player::Black),
            Self::White => Some(Player::White),
        }
    }

    /// 0=empty, 1=black, 2=white.
    pub fn code(self) -> u8 {
        self.owner().map_or(0, Player::code)
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Self::Black,
            Player::White => Self::White,
        }
    }
}

/// A board coordinate.
///
/// Construction is unchecked; board accessors reject coordinates outside
/// the 8x8 grid with [`MoveError::OutOfBounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn is_valid(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// Row-major square index, `None` when off the board.
    pub fn index(self) -> Option<usize> {
        self.is_valid()
            .then(|| self.row as usize * BOARD_SIZE + self.col as usize)
    }

    pub(crate) fn checked_index(self) -> Result<usize, MoveError> {
        self.index().ok_or(MoveError::OutOfBounds {
            row: self.row,
            col: self.col,
        })
    }

    pub(crate) fn from_index(idx: usize) -> Self {
        debug_assert!(idx < NUM_SQUARES);
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    /// The neighbouring square one step along `dir`, if it is on the board.
    pub fn step(self, dir: Direction) -> Option<Self> {
        let row = self.row as i16 + dir.dr as i16;
        let col = self.col as i16 + dir.dc as i16;
        let range = 0..BOARD_SIZE as i16;
        (range.contains(&row) && range.contains(&col)).then(|| Self::new(row as u8, col as u8))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Unit step used by the line scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub dr: i8,
    pub dc: i8,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction { dr: -1, dc: -1 },
        Direction { dr: -1, dc: 0 },
        Direction { dr: -1, dc: 1 },
        Direction { dr: 0, dc: -1 },
        Direction { dr: 0, dc: 1 },
        Direction { dr: 1, dc: -1 },
        Direction { dr: 1, dc: 0 },
        Direction { dr: 1, dc: 1 },
    ];
}

/// Discs flipped by a single placement, one bit per square (`row * 8 + col`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Flips(u64);

impl Flips {
    pub const NONE: Flips = Flips(0);

    pub(crate) fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub fn bits(self) -> u64 {
        self.0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, pos: Position) -> bool {
        pos.index().is_some_and(|idx| self.0 & (1u64 << idx) != 0)
    }

    /// Square indices in ascending order.
    pub fn to_indices(self) -> Vec<u8> {
        self.into_iter()
            .filter_map(|pos| pos.index())
            .map(|idx| idx as u8)
            .collect()
    }
}

impl IntoIterator for Flips {
    type Item = Position;
    type IntoIter = FlipsIter;

    fn into_iter(self) -> FlipsIter {
        FlipsIter(self.0)
    }
}

/// Row-major iterator over a [`Flips`] set.
#[derive(Debug, Clone)]
pub struct FlipsIter(u64);

impl Iterator for FlipsIter {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(Position::from_index(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

/// Disc counts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    pub black: u8,
    pub white: u8,
}

impl Score {
    pub fn of(self, player: Player) -> u8 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    pub fn total(self) -> u8 {
        self.black + self.white
    }

    /// Higher count wins, equal counts draw.
    pub fn outcome(self) -> Outcome {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Outcome::Win(Player::Black),
            std::cmp::Ordering::Less => Outcome::Win(Player::White),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win(Player),
    Draw,
}

impl Outcome {
    pub fn winner(self) -> Option<Player> {
        match self {
            Self::Win(player) => Some(player),
            Self::Draw => None,
        }
    }
}

/// Result of advancing the turn after an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    /// `player` had no legal placement; the previous mover plays again.
    Passed { player: Player },
    Finished { outcome: Outcome, score: Score },
}

impl GameStatus {
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Finished { .. })
    }
}

/// Public game state handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Row-major cell codes: 0=empty, 1=black, 2=white.
    pub board: Vec<u8>,
    pub current_player: u8,
    pub black_count: u8,
    pub white_count: u8,
    pub empty_count: u8,
    pub status: GameStatus,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the opponent of `current_player` was forced to pass.
    /// - `false` otherwise.
    pub is_pass: bool,
    /// Contract:
    /// - After an accepted move: flipped square indices (0..=63), ascending.
    /// - Before the first move: empty.
    pub flipped: Vec<u8>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// 0 for a draw, otherwise the winner's player code.
    pub winner: u8,
    pub black_count: u8,
    pub white_count: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_stops_at_edges() {
        let corner = Position::new(0, 0);

        assert_eq!(corner.step(Direction { dr: -1, dc: 0 }), None);
        assert_eq!(corner.step(Direction { dr: 0, dc: -1 }), None);
        assert_eq!(
            corner.step(Direction { dr: 1, dc: 1 }),
            Some(Position::new(1, 1))
        );
        assert_eq!(Position::new(7, 7).step(Direction { dr: 1, dc: 0 }), None);
    }

    #[test]
    fn far_off_board_positions_are_handled_without_overflow() {
        let far = Position::new(255, 200);

        assert!(!far.is_valid());
        assert_eq!(far.index(), None);
        assert_eq!(far.step(Direction { dr: 1, dc: 1 }), None);
        assert_eq!(far.to_string(), "(255, 200)");
    }

    #[test]
    fn index_rejects_off_board_coordinates() {
        assert_eq!(Position::new(2, 3).index(), Some(19));
        assert_eq!(Position::new(8, 0).index(), None);
        assert_eq!(
            Position::new(0, 9).checked_index(),
            Err(MoveError::OutOfBounds { row: 0, col: 9 })
        );
    }

    #[test]
    fn flips_iterate_in_row_major_order() {
        let flips = Flips::from_bits((1 << 35) | (1 << 3) | (1 << 27));

        let positions: Vec<_> = flips.into_iter().collect();

        assert_eq!(
            positions,
            vec![Position::new(0, 3), Position::new(3, 3), Position::new(4, 3)]
        );
        assert_eq!(flips.len(), 3);
        assert_eq!(flips.to_indices(), vec![3, 27, 35]);
        assert!(flips.contains(Position::new(3, 3)));
        assert!(!flips.contains(Position::new(9, 9)));
    }

    #[test]
    fn score_outcome_follows_disc_majority() {
        let black_wins = Score { black: 33, white: 31 };
        let draw = Score { black: 32, white: 32 };
        let white_wins = Score { black: 10, white: 20 };

        assert_eq!(black_wins.outcome(), Outcome::Win(Player::Black));
        assert_eq!(draw.outcome(), Outcome::Draw);
        assert_eq!(white_wins.outcome().winner(), Some(Player::White));
        assert_eq!(black_wins.total(), 64);
    }
}
