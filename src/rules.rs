use once_cell::sync::Lazy;
use tracing::{debug, info};

use crate::board::{Board, bit};
use crate::error::MoveError;
use crate::state::BoardState;
use crate::types::{Cell, Direction, Flips, GameStatus, NUM_SQUARES, Player, Position};

/// Square indices visited when walking outward from each square, one list
/// per direction, nearest first.
static RAYS: Lazy<Vec<[Vec<usize>; 8]>> = Lazy::new(|| {
    (0..NUM_SQUARES)
        .map(|idx| {
            let origin = Position::from_index(idx);
            Direction::ALL.map(|dir| ray(origin, dir))
        })
        .collect()
});

fn ray(origin: Position, dir: Direction) -> Vec<usize> {
    let mut squares = Vec::new();
    let mut cursor = origin;
    while let Some(next) = cursor.step(dir) {
        squares.extend(next.index());
        cursor = next;
    }
    squares
}

/// Discs that `player` would flip by placing at `pos`.
///
/// An empty result means the placement is illegal. Occupied or off-board
/// targets always yield no flips.
pub fn compute_flips(board: &Board, pos: Position, player: Player) -> Flips {
    match pos.index() {
        Some(idx) if board.cell_at(idx) == Cell::Empty => {
            let (me, opp) = board.masks(player);
            Flips::from_bits(collect_flips(idx, me, opp))
        }
        _ => Flips::NONE,
    }
}

fn collect_flips(idx: usize, me: u64, opp: u64) -> u64 {
    let mut flips = 0u64;

    for line in &RAYS[idx] {
        let mut run = 0u64;
        for &square in line {
            let square = bit(square);
            if (opp & square) != 0 {
                run |= square;
            } else {
                // An own disc brackets the run; an empty square discards it.
                if (me & square) != 0 {
                    flips |= run;
                }
                break;
            }
        }
    }

    flips
}

/// Places a disc for `player` at `pos` and flips every bracketed run.
///
/// Rejected placements leave `state` untouched.
pub fn attempt_move(
    state: &mut BoardState,
    pos: Position,
    player: Player,
) -> Result<Flips, MoveError> {
    if state.get(pos)? != Cell::Empty {
        debug!(%pos, %player, "rejected move on occupied cell");
        return Err(MoveError::CellOccupied(pos));
    }

    let flips = compute_flips(state.board(), pos, player);
    if flips.is_empty() {
        debug!(%pos, %player, "rejected move without flips");
        return Err(MoveError::NoFlips(pos));
    }

    state.set(pos, player.into())?;
    state.claim(flips.bits(), player);

    debug!(%pos, %player, flipped = flips.len(), "applied move");
    Ok(flips)
}

/// Whether `player` has at least one legal placement.
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    let (me, opp) = board.masks(player);
    let occupied = board.occupied();
    (0..NUM_SQUARES).any(|idx| (occupied & bit(idx)) == 0 && collect_flips(idx, me, opp) != 0)
}

/// Every legal placement for `player`, row-major.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Position> {
    let (me, opp) = board.masks(player);
    let occupied = board.occupied();
    (0..NUM_SQUARES)
        .filter(|&idx| (occupied & bit(idx)) == 0 && collect_flips(idx, me, opp) != 0)
        .map(Position::from_index)
        .collect()
}

/// Hands the turn over after an accepted move.
///
/// - The opponent can move: [`GameStatus::InProgress`], opponent to move.
/// - Only the mover can move: [`GameStatus::Passed`] naming the opponent,
///   the mover plays again.
/// - Nobody can move: [`GameStatus::Finished`] by disc count. The current
///   player is left as the opponent and the board must not be played on.
pub fn advance_turn(state: &mut BoardState) -> GameStatus {
    let mover = state.current_player();
    let next = mover.opponent();
    state.set_current_player(next);

    if has_legal_move(state.board(), next) {
        return GameStatus::InProgress;
    }

    if has_legal_move(state.board(), mover) {
        info!(passed = %next, to_move = %mover, "forced pass");
        state.set_current_player(mover);
        return GameStatus::Passed { player: next };
    }

    let score = state.count_discs();
    let outcome = score.outcome();
    info!(black = score.black, white = score.white, ?outcome, "game finished");
    GameStatus::Finished { outcome, score }
}
