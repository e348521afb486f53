//! Move representation and execution.

use crate::{Board, BoardError, Piece};
use chess_core::{Position, Side};
use std::fmt;
use std::hash::{Hash, Hasher};

/// The rook half of a castle, plus where the king lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleMove {
    pub king: Piece,
    pub destination: Position,
    pub rook: Piece,
    pub rook_destination: Position,
}

impl CastleMove {
    #[inline]
    pub const fn rook_origin(&self) -> Position {
        self.rook.position()
    }
}

/// A move: a description of how to get from one board to the next.
///
/// Moves are generated against a specific [`Board`] and carry copies of the
/// pieces involved. Equality and hashing consider only the moving piece,
/// the destination and the captured piece; the origin is the moving
/// piece's own position.
#[derive(Debug, Clone, Copy)]
pub enum Move {
    /// A quiet move by any piece but a pawn.
    Major { piece: Piece, destination: Position },
    /// A capture by any piece but a pawn.
    Capture { piece: Piece, captured: Piece },
    /// A single pawn step.
    PawnMove { piece: Piece, destination: Position },
    /// A double pawn step from an unmoved pawn; enables en passant next ply.
    PawnJump { piece: Piece, destination: Position },
    /// A diagonal pawn capture.
    PawnCapture { piece: Piece, captured: Piece },
    /// A pawn capturing a pawn that just jumped past it.
    PawnEnPassantCapture {
        piece: Piece,
        destination: Position,
        captured: Piece,
    },
    KingSideCastle(CastleMove),
    QueenSideCastle(CastleMove),
}

impl Move {
    /// The piece making the move, as it stands before the move.
    pub const fn moving_piece(&self) -> Piece {
        match self {
            Move::Major { piece, .. }
            | Move::Capture { piece, .. }
            | Move::PawnMove { piece, .. }
            | Move::PawnJump { piece, .. }
            | Move::PawnCapture { piece, .. }
            | Move::PawnEnPassantCapture { piece, .. } => *piece,
            Move::KingSideCastle(castle) | Move::QueenSideCastle(castle) => castle.king,
        }
    }

    #[inline]
    pub const fn origin(&self) -> Position {
        self.moving_piece().position()
    }

    #[inline]
    pub const fn side(&self) -> Side {
        self.moving_piece().side()
    }

    /// Where the moving piece ends up.
    pub const fn destination(&self) -> Position {
        match self {
            Move::Major { destination, .. }
            | Move::PawnMove { destination, .. }
            | Move::PawnJump { destination, .. }
            | Move::PawnEnPassantCapture { destination, .. } => *destination,
            Move::Capture { captured, .. } | Move::PawnCapture { captured, .. } => {
                captured.position()
            }
            Move::KingSideCastle(castle) | Move::QueenSideCastle(castle) => castle.destination,
        }
    }

    /// The piece removed from the board by this move, if any.
    pub const fn captured_piece(&self) -> Option<Piece> {
        match self {
            Move::Capture { captured, .. }
            | Move::PawnCapture { captured, .. }
            | Move::PawnEnPassantCapture { captured, .. } => Some(*captured),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured_piece().is_some()
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        matches!(self, Move::KingSideCastle(_) | Move::QueenSideCastle(_))
    }

    /// Builds the board that results from playing this move on `board`.
    ///
    /// `board` is left untouched. Every piece that takes no part in the move
    /// is copied across as-is, the moving piece (and the rook, when
    /// castling) is placed on its destination marked as moved, the captured
    /// piece is dropped and the turn passes to the other side.
    ///
    /// No legality check happens here; see
    /// [`Player::make_move`](crate::Player::make_move).
    ///
    /// # Errors
    ///
    /// Fails with [`BoardError::MissingKing`] if the move captures a king,
    /// which only happens on boards where the side to move could already
    /// take the enemy king.
    pub fn execute(&self, board: &Board) -> Result<Board, BoardError> {
        let mover = self.moving_piece();
        let side = mover.side();
        let captured = self.captured_piece();
        let castle = match self {
            Move::KingSideCastle(castle) | Move::QueenSideCastle(castle) => Some(castle),
            _ => None,
        };

        let mut builder = Board::builder();
        for piece in board.pieces(side) {
            let is_castling_rook = castle.is_some_and(|c| c.rook == *piece);
            if *piece != mover && !is_castling_rook {
                builder.set_piece(*piece);
            }
        }
        for piece in board.pieces(side.opposite()) {
            if captured != Some(*piece) {
                builder.set_piece(*piece);
            }
        }

        let moved = mover.moved_to(self.destination());
        builder.set_piece(moved);
        if let Some(castle) = castle {
            builder.set_piece(castle.rook.moved_to(castle.rook_destination));
        }
        if let Move::PawnJump { .. } = self {
            builder.set_en_passant(moved);
        }
        builder.set_next_mover(side.opposite());
        builder.build()
    }

    fn key(&self) -> (Piece, Position, Option<Piece>) {
        (
            self.moving_piece(),
            self.destination(),
            self.captured_piece(),
        )
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// Minimal textual tag: `e2e4`, or `O-O` / `O-O-O` for castles.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::KingSideCastle(_) => write!(f, "O-O"),
            Move::QueenSideCastle(_) => write!(f, "O-O-O"),
            _ => write!(f, "{}{}", self.origin(), self.destination()),
        }
    }
}

/// Outcome of attempting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveStatus {
    /// The move was played.
    Done,
    /// The move is not available to this player right now.
    IllegalMove,
    /// The move is available, but it would leave the mover's own king
    /// attacked.
    LeavePlayerInCheck,
}

impl MoveStatus {
    #[inline]
    pub const fn is_done(self) -> bool {
        matches!(self, MoveStatus::Done)
    }
}

impl fmt::Display for MoveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveStatus::Done => write!(f, "done"),
            MoveStatus::IllegalMove => write!(f, "illegal move"),
            MoveStatus::LeavePlayerInCheck => write!(f, "leaves player in check"),
        }
    }
}

/// The result of [`Player::make_move`](crate::Player::make_move).
///
/// `board` is the new board only when `status` is [`MoveStatus::Done`];
/// otherwise it is the unchanged board the move was tried on.
#[derive(Debug, Clone)]
pub struct MoveTransition {
    board: Board,
    mv: Move,
    status: MoveStatus,
}

impl MoveTransition {
    pub(crate) fn new(board: Board, mv: Move, status: MoveStatus) -> Self {
        MoveTransition { board, mv, status }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consumes the transition, returning its board.
    #[inline]
    pub fn into_board(self) -> Board {
        self.board
    }

    #[inline]
    pub fn mv(&self) -> Move {
        self.mv
    }

    #[inline]
    pub fn status(&self) -> MoveStatus {
        self.status
    }
}
