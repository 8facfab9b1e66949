use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info};

use crate::board::Board;
use crate::error::MoveError;
use crate::rules;
use crate::state::BoardState;
use crate::types::{Flips, GameResult, GameState, GameStatus, Player, Position, Score};

/// Receives the session after it is created or reset and after every
/// accepted move. Observers only read; they never drive the game.
pub trait SessionObserver {
    fn on_change(&mut self, session: &GameSession);
}

impl<T: SessionObserver + ?Sized> SessionObserver for Rc<RefCell<T>> {
    fn on_change(&mut self, session: &GameSession) {
        self.borrow_mut().on_change(session);
    }
}

/// What an accepted move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub player: Player,
    pub position: Position,
    pub flips: Flips,
    pub status: GameStatus,
}

/// One game from the opening to the final count.
///
/// Applying a move and advancing the turn happen inside a single
/// `&mut self` call, so observers never see a half-finished turn.
pub struct GameSession {
    state: BoardState,
    status: GameStatus,
    last_move: Option<Position>,
    last_flips: Flips,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::from_state(BoardState::new())
    }

    /// Starts from an arbitrary position.
    ///
    /// If the side to move in `state` has no placement the status is settled
    /// right away: a pass hands the move over, a dead position is finished.
    pub fn from_state(mut state: BoardState) -> Self {
        // Settle as if the opponent had just moved.
        state.set_current_player(state.current_player().opponent());
        let status = rules::advance_turn(&mut state);

        Self {
            state,
            status,
            last_move: None,
            last_flips: Flips::NONE,
            observers: Vec::new(),
        }
    }

    /// Registers `observer` and immediately shows it the current position.
    pub fn subscribe(&mut self, mut observer: Box<dyn SessionObserver>) {
        observer.on_change(self);
        self.observers.push(observer);
    }

    /// Starts a new game on the same session.
    pub fn reset(&mut self) {
        info!("starting new game");
        self.state.initialize();
        self.status = GameStatus::InProgress;
        self.last_move = None;
        self.last_flips = Flips::NONE;
        self.notify();
    }

    /// Plays a disc at `pos` for the side to move.
    ///
    /// The acting player is always [`current_player`](Self::current_player);
    /// there is no way to play out of turn, so hosts do not pass a player.
    /// On error nothing changes and observers are not notified.
    pub fn on_cell_chosen(&mut self, pos: Position) -> Result<TurnReport, MoveError> {
        if self.status.is_finished() {
            debug!(%pos, "ignoring move after game end");
            return Err(MoveError::GameOver);
        }

        let player = self.state.current_player();
        let flips = rules::attempt_move(&mut self.state, pos, player)?;
        let status = rules::advance_turn(&mut self.state);

        self.status = status;
        self.last_move = Some(pos);
        self.last_flips = flips;
        self.notify();

        Ok(TurnReport {
            player,
            position: pos,
            flips,
            status,
        })
    }

    pub fn board(&self) -> &Board {
        self.state.board()
    }

    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Status computed after the last accepted move.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn count_discs(&self) -> Score {
        self.state.count_discs()
    }

    /// Legal placements for the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.status.is_finished() {
            return Vec::new();
        }
        rules::legal_moves(self.state.board(), self.state.current_player())
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn last_flips(&self) -> Flips {
        self.last_flips
    }

    pub fn to_game_state(&self) -> GameState {
        let score = self.count_discs();
        GameState {
            board: self.board().to_array().to_vec(),
            current_player: self.current_player().code(),
            black_count: score.black,
            white_count: score.white,
            empty_count: self.board().empty_count(),
            status: self.status,
            is_game_over: self.status.is_finished(),
            is_pass: matches!(self.status, GameStatus::Passed { .. }),
            flipped: self.last_flips.to_indices(),
        }
    }

    /// Final result, available once the game is finished.
    pub fn to_game_result(&self) -> Option<GameResult> {
        match self.status {
            GameStatus::Finished { outcome, score } => Some(GameResult {
                winner: outcome.winner().map_or(0, Player::code),
                black_count: score.black,
                white_count: score.white,
            }),
            _ => None,
        }
    }

    fn notify(&mut self) {
        let mut observers = std::mem::take(&mut self.observers);
        for observer in &mut observers {
            observer.on_change(self);
        }
        self.observers = observers;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
