//! Reversi rules engine: move legality, disc flipping, and the
//! turn/pass/end-of-game state machine on an 8x8 board.

pub mod board;
pub mod config;
pub mod error;
pub mod render;
pub mod rules;
pub mod session;
pub mod state;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use config::RenderConfig;
pub use error::{ConfigError, MoveError, ParseBoardError};
pub use rules::{advance_turn, attempt_move, compute_flips, has_legal_move, legal_moves};
pub use session::{GameSession, SessionObserver, TurnReport};
pub use state::BoardState;
pub use types::{Cell, Flips, GameStatus, Outcome, Player, Position, Score};
