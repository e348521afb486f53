//! Move lookup by origin and destination.

use crate::{Board, Move};
use chess_core::{Position, Side};

/// Finds the candidate move of either side going from `origin` to
/// `destination`.
///
/// Returns `None` when no piece on `board` has such a move. The result is a
/// candidate, not necessarily legal: playing it through
/// [`Player::make_move`](crate::Player::make_move) may still report
/// [`MoveStatus::LeavePlayerInCheck`](crate::MoveStatus::LeavePlayerInCheck).
pub fn create_move(board: &Board, origin: Position, destination: Position) -> Option<Move> {
    Side::ALL
        .iter()
        .flat_map(|side| board.moves(*side))
        .find(|mv| mv.origin() == origin && mv.destination() == destination)
        .copied()
}
