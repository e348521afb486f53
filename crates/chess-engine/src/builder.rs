//! Staged board construction.

use crate::board::{Board, BoardError, Square, EMPTY_SQUARES};
use crate::Piece;
use chess_core::{PieceType, Position, Side};
use std::collections::HashMap;

/// Collects pieces, the side to move and the en passant marker, then
/// builds a [`Board`].
///
/// Pieces are keyed by their own position, so placing a second piece on an
/// occupied position replaces the first.
#[derive(Debug, Clone)]
pub struct BoardBuilder {
    pieces: HashMap<Position, Piece>,
    next_mover: Side,
    en_passant: Option<Piece>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    pub fn new() -> Self {
        BoardBuilder {
            pieces: HashMap::new(),
            next_mover: Side::White,
            en_passant: None,
        }
    }

    pub fn set_piece(&mut self, piece: Piece) -> &mut Self {
        self.pieces.insert(piece.position(), piece);
        self
    }

    pub fn set_next_mover(&mut self, side: Side) -> &mut Self {
        self.next_mover = side;
        self
    }

    /// Marks `pawn` as having just double-stepped.
    pub fn set_en_passant(&mut self, pawn: Piece) -> &mut Self {
        self.en_passant = Some(pawn);
        self
    }

    /// Builds the board, computing attack maps and candidate moves.
    ///
    /// # Errors
    ///
    /// - [`BoardError::MissingKing`] / [`BoardError::MultipleKings`] unless
    ///   each side has exactly one king.
    /// - [`BoardError::InvalidEnPassant`] if the en passant marker is not a
    ///   pawn standing on the board.
    pub fn build(self) -> Result<Board, BoardError> {
        let mut squares = EMPTY_SQUARES;
        let mut white_pieces = Vec::new();
        let mut black_pieces = Vec::new();

        for position in Position::all() {
            if let Some(piece) = self.pieces.get(&position) {
                squares[position.as_usize()] = Square::Occupied(*piece);
                match piece.side() {
                    Side::White => white_pieces.push(*piece),
                    Side::Black => black_pieces.push(*piece),
                }
            }
        }

        let kings = [
            find_king(&white_pieces, Side::White)?,
            find_king(&black_pieces, Side::Black)?,
        ];

        if let Some(pawn) = self.en_passant {
            let on_board = squares[pawn.position().as_usize()] == Square::Occupied(pawn);
            if pawn.kind() != PieceType::Pawn || !on_board {
                return Err(BoardError::InvalidEnPassant(pawn.position()));
            }
        }

        Ok(Board::assemble(
            squares,
            white_pieces,
            black_pieces,
            kings,
            self.next_mover,
            self.en_passant,
        ))
    }
}

fn find_king(pieces: &[Piece], side: Side) -> Result<Piece, BoardError> {
    let mut kings = pieces.iter().filter(|p| p.kind() == PieceType::King);
    match (kings.next(), kings.next()) {
        (Some(king), None) => Ok(*king),
        (None, _) => Err(BoardError::MissingKing(side)),
        (Some(_), Some(_)) => Err(BoardError::MultipleKings(side)),
    }
}
