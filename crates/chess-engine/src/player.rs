//! One side's view of a board.

use crate::{Board, Move, MoveStatus, MoveTransition, Piece};
use chess_core::Side;

/// A borrowed view of one side of a [`Board`].
///
/// Players are cheap to create and hold nothing but the board reference
/// and the side. Everything they report is derived from the board.
#[derive(Debug, Clone, Copy)]
pub struct Player<'a> {
    board: &'a Board,
    side: Side,
}

impl<'a> Player<'a> {
    pub(crate) fn new(board: &'a Board, side: Side) -> Self {
        Player { board, side }
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn board(&self) -> &'a Board {
        self.board
    }

    #[inline]
    pub fn king(&self) -> Piece {
        self.board.king(self.side)
    }

    #[inline]
    pub fn active_pieces(&self) -> &'a [Piece] {
        self.board.pieces(self.side)
    }

    #[inline]
    pub fn opponent(&self) -> Player<'a> {
        Player::new(self.board, self.side.opposite())
    }

    /// Pseudo-legal moves plus eligible castles.
    #[inline]
    pub fn candidate_moves(&self) -> &'a [Move] {
        self.board.moves(self.side)
    }

    /// Returns true if `mv` is one of this side's candidate moves.
    pub fn is_move_legal(&self, mv: &Move) -> bool {
        self.candidate_moves().contains(mv)
    }

    /// Returns true if the opponent attacks this side's king.
    pub fn is_in_check(&self) -> bool {
        self.board
            .attacks(self.side.opposite())
            .contains(self.king().position())
    }

    /// Candidate moves that do not leave the king attacked.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.candidate_moves()
            .iter()
            .filter(|mv| self.try_move(mv).is_ok())
            .copied()
            .collect()
    }

    /// Returns true if at least one candidate move is legal.
    pub fn has_escape_moves(&self) -> bool {
        self.candidate_moves()
            .iter()
            .any(|mv| self.try_move(mv).is_ok())
    }

    pub fn is_in_checkmate(&self) -> bool {
        self.is_in_check() && !self.has_escape_moves()
    }

    pub fn is_in_stalemate(&self) -> bool {
        !self.is_in_check() && !self.has_escape_moves()
    }

    /// Plays `mv` for this side.
    ///
    /// The move must be this side's turn and one of its candidate moves, and
    /// must not leave its king attacked. On success the transition holds the
    /// new board; otherwise it holds a copy of this board and the reason.
    pub fn make_move(&self, mv: Move) -> MoveTransition {
        let result = if self.side != self.board.next_mover() {
            Err(MoveStatus::IllegalMove)
        } else {
            self.try_move(&mv)
        };

        match result {
            Ok(board) => MoveTransition::new(board, mv, MoveStatus::Done),
            Err(status) => {
                tracing::debug!(side = %self.side, mv = %mv, %status, "move rejected");
                MoveTransition::new(self.board.clone(), mv, status)
            }
        }
    }

    /// Every legal move paired with the board it leads to.
    pub(crate) fn successors(&self) -> Vec<(Move, Board)> {
        self.candidate_moves()
            .iter()
            .filter_map(|mv| self.try_move(mv).ok().map(|board| (*mv, board)))
            .collect()
    }

    /// Executes `mv` without checking whose turn it is.
    fn try_move(&self, mv: &Move) -> Result<Board, MoveStatus> {
        let candidate = self
            .candidate_moves()
            .iter()
            .find(|candidate| *candidate == mv)
            .ok_or(MoveStatus::IllegalMove)?;

        let board = candidate.execute(self.board).map_err(|err| {
            tracing::warn!(mv = %candidate, %err, "candidate move failed to execute");
            MoveStatus::IllegalMove
        })?;

        if board.player(self.side).is_in_check() {
            return Err(MoveStatus::LeavePlayerInCheck);
        }
        Ok(board)
    }
}
