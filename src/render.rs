use std::fmt;

use crate::board::Board;
use crate::config::RenderConfig;
use crate::session::{GameSession, SessionObserver};
use crate::types::{BOARD_SIZE, Cell, GameStatus, Outcome, Player, Position, Score};

/// Displayable 8x8 grid, one text line per row.
pub struct Grid<'a> {
    board: &'a Board,
    config: &'a RenderConfig,
    hints: &'a [Position],
}

impl<'a> Grid<'a> {
    pub fn new(board: &'a Board, config: &'a RenderConfig, hints: &'a [Position]) -> Self {
        Self {
            board,
            config,
            hints,
        }
    }
}

impl fmt::Display for Grid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.config.show_labels {
            f.write_str(" ")?;
            for col in 0..BOARD_SIZE as u8 {
                write!(f, " {}", (b'a' + col) as char)?;
            }
            writeln!(f)?;
        }

        for (pos, cell) in self.board.cells() {
            if pos.col == 0 && self.config.show_labels {
                write!(f, "{}", pos.row + 1)?;
            }
            if pos.col != 0 || self.config.show_labels {
                f.write_str(" ")?;
            }

            let glyph = if cell == Cell::Empty && self.hints.contains(&pos) {
                self.config.hint
            } else {
                self.config.glyph(cell)
            };
            write!(f, "{glyph}")?;

            if pos.col as usize == BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Renders `board`; `hints` are only drawn when `config.show_hints` is set.
pub fn render_grid(board: &Board, config: &RenderConfig, hints: &[Position]) -> String {
    let hints: &[Position] = if config.show_hints { hints } else { &[] };
    Grid::new(board, config, hints).to_string()
}

/// One-line status: whose turn, who passed, or the final result.
pub fn status_message(status: &GameStatus, current: Player, score: Score) -> String {
    match status {
        GameStatus::InProgress => format!(
            "{current} to move. Black {}, White {}",
            score.black, score.white
        ),
        GameStatus::Passed { player } => format!(
            "{player} has no legal move and passes. {current} to move. Black {}, White {}",
            score.black, score.white
        ),
        GameStatus::Finished {
            outcome: Outcome::Win(winner),
            score,
        } => format!(
            "Game over. {winner} wins {}-{}",
            score.of(*winner),
            score.of(winner.opponent())
        ),
        GameStatus::Finished {
            outcome: Outcome::Draw,
            score,
        } => format!("Game over. Draw {}-{}", score.black, score.white),
    }
}

/// Observer that re-renders the grid and status line on every change.
#[derive(Debug, Default, Clone)]
pub struct TextRenderer {
    config: RenderConfig,
    frame: String,
    message: String,
}

impl TextRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            frame: String::new(),
            message: String::new(),
        }
    }

    pub fn frame(&self) -> &str {
        &self.frame
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl SessionObserver for TextRenderer {
    fn on_change(&mut self, session: &GameSession) {
        let hints = session.legal_moves();
        self.frame = render_grid(session.board(), &self.config, &hints);
        self.message = status_message(
            &session.status(),
            session.current_player(),
            session.count_discs(),
        );
    }
}
