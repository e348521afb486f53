//! FEN conversion for boards.
//!
//! A board keeps no castling rights or clocks. Castling availability maps
//! onto the moved flags of kings and rooks, the en passant target onto the
//! pawn that skipped it, and the clocks are dropped.

use crate::{Board, BoardError, Piece};
use chess_core::{CastlingAvailability, Fen, PieceType, Position, Side, BOARD_SIZE, NUM_SQUARES};

/// Corner rook squares per side: king side, queen side.
const fn rook_homes(side: Side) -> (Position, Position) {
    match side {
        Side::White => (Position::H1, Position::A1),
        Side::Black => (Position::H8, Position::A8),
    }
}

const fn king_home(side: Side) -> Position {
    match side {
        Side::White => Position::E1,
        Side::Black => Position::E8,
    }
}

/// Whether a piece read from FEN counts as moved.
fn has_moved(
    kind: PieceType,
    side: Side,
    position: Position,
    castling: CastlingAvailability,
) -> bool {
    let (king_side_rook, queen_side_rook) = rook_homes(side);
    match kind {
        PieceType::Pawn => position.row() != side.pawn_row(),
        PieceType::King => !(position == king_home(side) && castling.any(side)),
        PieceType::Rook => {
            let king_side = position == king_side_rook && castling.king_side(side);
            let queen_side = position == queen_side_rook && castling.queen_side(side);
            !(king_side || queen_side)
        }
        _ => false,
    }
}

impl Board {
    /// Builds a board from a FEN string.
    ///
    /// # Errors
    ///
    /// [`BoardError::Fen`] for malformed input, and the usual build errors
    /// for a placement without exactly one king per side or an en passant
    /// target with no pawn in front of it.
    pub fn from_fen(fen: &str) -> Result<Board, BoardError> {
        let record = Fen::parse(fen)?;

        let mut builder = Board::builder();
        for position in Position::all() {
            if let Some((kind, side)) = record.placement[position.as_usize()] {
                let moved = has_moved(kind, side, position, record.castling);
                builder.set_piece(Piece::with_moved(position, side, kind, moved));
            }
        }
        builder.set_next_mover(record.side_to_move);

        if let Some(target) = record.en_passant {
            let jumper = record.side_to_move.opposite();
            let pawn = target
                .offset(jumper.pawn_direction() * BOARD_SIZE as i32)
                .and_then(|position| record.placement[position.as_usize()].map(|p| (position, p)))
                .filter(|(_, occupant)| *occupant == (PieceType::Pawn, jumper))
                .map(|(position, _)| Piece::with_moved(position, jumper, PieceType::Pawn, true))
                .ok_or(BoardError::InvalidEnPassant(target))?;
            builder.set_en_passant(pawn);
        }

        builder.build()
    }

    /// Writes the board as FEN.
    ///
    /// Castling rights are read back from the moved flags, so they list
    /// every castle whose king and rook are still unmoved, even if it is
    /// blocked right now. The clocks are always `0 1`.
    pub fn to_fen(&self) -> String {
        let mut placement = [None; NUM_SQUARES];
        for square in self.squares() {
            if let Some(piece) = square.piece() {
                placement[piece.position().as_usize()] = Some((piece.kind(), piece.side()));
            }
        }

        let unmoved = |position: Position, kind: PieceType, side: Side| {
            self.piece_at(position)
                .is_some_and(|p| p.kind() == kind && p.side() == side && !p.has_moved())
        };
        let castling_for = |side: Side| {
            let (king_side_rook, queen_side_rook) = rook_homes(side);
            let king = unmoved(king_home(side), PieceType::King, side);
            (
                king && unmoved(king_side_rook, PieceType::Rook, side),
                king && unmoved(queen_side_rook, PieceType::Rook, side),
            )
        };
        let (white_king_side, white_queen_side) = castling_for(Side::White);
        let (black_king_side, black_queen_side) = castling_for(Side::Black);

        Fen {
            placement,
            side_to_move: self.next_mover(),
            castling: CastlingAvailability {
                white_king_side,
                white_queen_side,
                black_king_side,
                black_queen_side,
            },
            en_passant: self.en_passant_target(),
            halfmove_clock: 0,
            fullmove_number: 1,
        }
        .to_fen()
    }
}
