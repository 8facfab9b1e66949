use crate::board::Board;
use crate::error::MoveError;
use crate::types::{Cell, Player, Position, Score};

/// The grid plus the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardState {
    board: Board,
    current_player: Player,
}

impl BoardState {
    /// Starting position with Black to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::Black,
        }
    }

    /// Arbitrary position, mostly for tests and puzzle setups.
    pub fn from_position(board: Board, current_player: Player) -> Self {
        Self {
            board,
            current_player,
        }
    }

    /// Resets to the starting configuration and hands the move to Black.
    pub fn initialize(&mut self) {
        *self = Self::new();
    }

    pub fn get(&self, pos: Position) -> Result<Cell, MoveError> {
        self.board.get(pos)
    }

    pub(crate) fn set(&mut self, pos: Position, cell: Cell) -> Result<(), MoveError> {
        self.board.set(pos, cell)
    }

    pub(crate) fn claim(&mut self, mask: u64, player: Player) {
        self.board.claim(mask, player);
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub(crate) fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn count_discs(&self) -> Score {
        self.board.count()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_restores_starting_position() {
        let mut state = BoardState::from_position(Board::empty(), Player::White);

        state.initialize();

        assert_eq!(state.current_player(), Player::Black);
        assert_eq!(state.count_discs(), Score { black: 2, white: 2 });

        let occupied: Vec<_> = state
            .board()
            .cells()
            .filter(|(_, cell)| *cell != Cell::Empty)
            .collect();
        assert_eq!(
            occupied,
            vec![
                (Position::new(3, 3), Cell::White),
                (Position::new(3, 4), Cell::Black),
                (Position::new(4, 3), Cell::Black),
                (Position::new(4, 4), Cell::White),
            ]
        );
    }

    #[test]
    fn get_propagates_out_of_bounds() {
        let state = BoardState::new();

        assert_eq!(
            state.get(Position::new(12, 1)),
            Err(MoveError::OutOfBounds { row: 12, col: 1 })
        );
    }
}
