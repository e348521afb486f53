//! Immutable board representation.

use crate::builder::BoardBuilder;
use crate::castling::castle_moves;
use crate::{Bitboard, Move, Piece, Player};
use chess_core::{FenError, PieceType, Position, Side, BOARD_SIZE, NUM_SQUARES};
use std::fmt;
use thiserror::Error;

/// Errors that can occur while building a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("no {0} king on the board")]
    MissingKing(Side),
    #[error("more than one {0} king on the board")]
    MultipleKings(Side),
    #[error("en passant marker on {0} is not a pawn on the board")]
    InvalidEnPassant(Position),
    #[error("invalid FEN: {0}")]
    Fen(#[from] FenError),
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    Empty(Position),
    /// The square's position is the piece's own position.
    Occupied(Piece),
}

impl Square {
    #[inline]
    pub const fn position(&self) -> Position {
        match self {
            Square::Empty(position) => *position,
            Square::Occupied(piece) => piece.position(),
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Square::Empty(_))
    }

    #[inline]
    pub const fn is_occupied(&self) -> bool {
        matches!(self, Square::Occupied(_))
    }

    #[inline]
    pub const fn piece(&self) -> Option<Piece> {
        match self {
            Square::Empty(_) => None,
            Square::Occupied(piece) => Some(*piece),
        }
    }
}

/// `EMPTY` or the occupant, e.g. `W_KING`. Honours width and alignment.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Square::Empty(_) => f.pad("EMPTY"),
            Square::Occupied(piece) => f.pad(&piece.to_string()),
        }
    }
}

/// One empty square per index, shared by every board.
pub(crate) const EMPTY_SQUARES: [Square; NUM_SQUARES] = {
    let mut squares = [Square::Empty(Position::A8); NUM_SQUARES];
    let mut index = 0;
    while index < NUM_SQUARES {
        if let Some(position) = Position::new(index as i32) {
            squares[index] = Square::Empty(position);
        }
        index += 1;
    }
    squares
};

/// An immutable chess board.
///
/// Besides the 64 squares a board carries everything derived from them: the
/// active pieces of each side in scan order, each side's king, each side's
/// candidate moves (pseudo-legal moves plus eligible castles) and each
/// side's attack map. All of it is computed once in
/// [`BoardBuilder::build`]; a board never changes afterwards. Playing a move
/// produces a new board (see [`Move::execute`]).
///
/// Legality questions go through a [`Player`] view, obtained with
/// [`Board::player`] or [`Board::current_player`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Square; NUM_SQUARES],
    white_pieces: Vec<Piece>,
    black_pieces: Vec<Piece>,
    kings: [Piece; 2],
    moves: [Vec<Move>; 2],
    attacks: [Bitboard; 2],
    next_mover: Side,
    en_passant: Option<Piece>,
}

impl Board {
    /// Starts a new, empty [`BoardBuilder`].
    #[inline]
    pub fn builder() -> BoardBuilder {
        BoardBuilder::new()
    }

    /// Returns the standard starting position with White to move.
    pub fn standard() -> Self {
        const BACK_ROW: [PieceType; 8] = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];

        let mut builder = Board::builder();
        for side in Side::ALL {
            for (column, kind) in (0..BOARD_SIZE).zip(BACK_ROW) {
                if let Some(position) = Position::from_row_column(side.back_row(), column) {
                    builder.set_piece(Piece::new(position, side, kind));
                }
                if let Some(position) = Position::from_row_column(side.pawn_row(), column) {
                    builder.set_piece(Piece::new(position, side, PieceType::Pawn));
                }
            }
        }
        builder.set_next_mover(Side::White);
        builder.build().expect("standard position is valid")
    }

    /// Finishes construction from laid-out squares.
    ///
    /// Attack maps come first since castling eligibility reads them.
    pub(crate) fn assemble(
        squares: [Square; NUM_SQUARES],
        white_pieces: Vec<Piece>,
        black_pieces: Vec<Piece>,
        kings: [Piece; 2],
        next_mover: Side,
        en_passant: Option<Piece>,
    ) -> Self {
        let mut board = Board {
            squares,
            white_pieces,
            black_pieces,
            kings,
            moves: [Vec::new(), Vec::new()],
            attacks: [Bitboard::EMPTY; 2],
            next_mover,
            en_passant,
        };

        for side in Side::ALL {
            let attacks = board
                .pieces(side)
                .iter()
                .fold(Bitboard::EMPTY, |acc, piece| acc | piece.attacks(&board));
            board.attacks[side.index()] = attacks;
        }
        for side in Side::ALL {
            let mut moves: Vec<Move> = board
                .pieces(side)
                .iter()
                .flat_map(|piece| piece.generate_moves(&board))
                .collect();
            moves.extend(castle_moves(&board, side));
            board.moves[side.index()] = moves;
        }

        tracing::trace!(
            white_moves = board.moves[0].len(),
            black_moves = board.moves[1].len(),
            next_mover = %board.next_mover,
            "board built"
        );
        board
    }

    /// Returns the square at `index`, or `None` if the index is off the board.
    #[inline]
    pub fn square(&self, index: i32) -> Option<&Square> {
        Position::new(index).map(|position| self.square_at(position))
    }

    #[inline]
    pub fn square_at(&self, position: Position) -> &Square {
        &self.squares[position.as_usize()]
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.square_at(position).piece()
    }

    /// All 64 squares in index order.
    #[inline]
    pub fn squares(&self) -> &[Square; NUM_SQUARES] {
        &self.squares
    }

    /// The active pieces of `side`, in scan order.
    #[inline]
    pub fn pieces(&self, side: Side) -> &[Piece] {
        match side {
            Side::White => &self.white_pieces,
            Side::Black => &self.black_pieces,
        }
    }

    #[inline]
    pub fn king(&self, side: Side) -> Piece {
        self.kings[side.index()]
    }

    /// Candidate moves of `side`: pseudo-legal moves plus eligible castles.
    ///
    /// These may still leave the king attacked; see [`Player::legal_moves`].
    #[inline]
    pub fn moves(&self, side: Side) -> &[Move] {
        &self.moves[side.index()]
    }

    /// Every square `side` threatens.
    #[inline]
    pub fn attacks(&self, side: Side) -> Bitboard {
        self.attacks[side.index()]
    }

    #[inline]
    pub fn next_mover(&self) -> Side {
        self.next_mover
    }

    /// The pawn that double-stepped on the previous ply, if any.
    #[inline]
    pub fn en_passant_pawn(&self) -> Option<Piece> {
        self.en_passant
    }

    /// The square the en passant pawn skipped over.
    pub fn en_passant_target(&self) -> Option<Position> {
        self.en_passant.and_then(|pawn| {
            pawn.position()
                .offset(-pawn.side().pawn_direction() * BOARD_SIZE as i32)
        })
    }

    #[inline]
    pub fn player(&self, side: Side) -> Player<'_> {
        Player::new(self, side)
    }

    #[inline]
    pub fn white_player(&self) -> Player<'_> {
        self.player(Side::White)
    }

    #[inline]
    pub fn black_player(&self) -> Player<'_> {
        self.player(Side::Black)
    }

    /// The player whose turn it is.
    #[inline]
    pub fn current_player(&self) -> Player<'_> {
        self.player(self.next_mover)
    }

    /// Legal moves of both sides, White's first.
    pub fn all_legal_moves(&self) -> Vec<Move> {
        let mut moves = self.white_player().legal_moves();
        moves.extend(self.black_player().legal_moves());
        moves
    }

    /// Checkmate or stalemate of the side to move, if either applies.
    pub fn game_status(&self) -> GameStatus {
        let player = self.current_player();
        if player.is_in_checkmate() {
            GameStatus::Checkmate {
                winner: self.next_mover.opposite(),
            }
        } else if player.is_in_stalemate() {
            GameStatus::Stalemate
        } else {
            GameStatus::InProgress
        }
    }
}

/// State of the game from the side to move's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Side },
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {} wins", winner),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// Eight right-aligned, 10-wide cells per line.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, square) in self.squares.iter().enumerate() {
            write!(f, "{:>10}", square)?;
            if (index + 1) % BOARD_SIZE as usize == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
