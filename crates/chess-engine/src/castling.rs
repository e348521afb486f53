//! Castling eligibility.

use crate::{Board, CastleMove, Move};
use chess_core::{PieceType, Position, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Wing {
    KingSide,
    QueenSide,
}

/// Fixed squares of one castle.
struct CastleRule {
    wing: Wing,
    king_home: Position,
    rook_home: Position,
    /// Must be empty.
    between: &'static [Position],
    /// Must not be attacked: the square the king crosses and the one it
    /// lands on.
    king_path: [Position; 2],
    king_destination: Position,
    rook_destination: Position,
}

const WHITE_RULES: [CastleRule; 2] = [
    CastleRule {
        wing: Wing::KingSide,
        king_home: Position::E1,
        rook_home: Position::H1,
        between: &[Position::F1, Position::G1],
        king_path: [Position::F1, Position::G1],
        king_destination: Position::G1,
        rook_destination: Position::F1,
    },
    CastleRule {
        wing: Wing::QueenSide,
        king_home: Position::E1,
        rook_home: Position::A1,
        between: &[Position::D1, Position::C1, Position::B1],
        king_path: [Position::D1, Position::C1],
        king_destination: Position::C1,
        rook_destination: Position::D1,
    },
];

const BLACK_RULES: [CastleRule; 2] = [
    CastleRule {
        wing: Wing::KingSide,
        king_home: Position::E8,
        rook_home: Position::H8,
        between: &[Position::F8, Position::G8],
        king_path: [Position::F8, Position::G8],
        king_destination: Position::G8,
        rook_destination: Position::F8,
    },
    CastleRule {
        wing: Wing::QueenSide,
        king_home: Position::E8,
        rook_home: Position::A8,
        between: &[Position::D8, Position::C8, Position::B8],
        king_path: [Position::D8, Position::C8],
        king_destination: Position::C8,
        rook_destination: Position::D8,
    },
];

/// Returns the castles `side` may play on `board`.
///
/// Requires the board's attack maps to be populated.
pub(crate) fn castle_moves(board: &Board, side: Side) -> Vec<Move> {
    let king = board.king(side);
    let enemy_attacks = board.attacks(side.opposite());
    if king.has_moved() || enemy_attacks.contains(king.position()) {
        return Vec::new();
    }

    let rules = match side {
        Side::White => &WHITE_RULES,
        Side::Black => &BLACK_RULES,
    };

    let mut moves = Vec::new();
    for rule in rules {
        if king.position() != rule.king_home {
            continue;
        }
        let Some(rook) = board.piece_at(rule.rook_home) else {
            continue;
        };
        if rook.kind() != PieceType::Rook || rook.side() != side || rook.has_moved() {
            continue;
        }
        if rule.between.iter().any(|p| board.square_at(*p).is_occupied()) {
            continue;
        }
        if rule.king_path.iter().any(|p| enemy_attacks.contains(*p)) {
            tracing::trace!(%side, wing = ?rule.wing, "castle path attacked");
            continue;
        }

        let castle = CastleMove {
            king,
            destination: rule.king_destination,
            rook,
            rook_destination: rule.rook_destination,
        };
        moves.push(match rule.wing {
            Wing::KingSide => Move::KingSideCastle(castle),
            Wing::QueenSide => Move::QueenSideCastle(castle),
        });
    }
    moves
}
