//! FEN (Forsyth-Edwards Notation) field parsing.
//!
//! [`Fen`] validates and decodes the six FEN fields into core types. Turning
//! the result into a playable board is left to the engine, which maps castling
//! availability and the en passant target onto its own piece state.

use crate::{PieceType, Position, Side, NUM_SQUARES};
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 6 fields, got {0}")]
    InvalidFieldCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid side to move: expected 'w' or 'b', got '{0}'")]
    InvalidSideToMove(String),

    #[error("invalid castling availability: {0}")]
    InvalidCastling(String),

    #[error("invalid en passant target: {0}")]
    InvalidEnPassant(String),

    #[error("invalid halfmove clock: {0}")]
    InvalidHalfmoveClock(String),

    #[error("invalid fullmove number: {0}")]
    InvalidFullmoveNumber(String),
}

/// Castling availability as written in the third FEN field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastlingAvailability {
    pub white_king_side: bool,
    pub white_queen_side: bool,
    pub black_king_side: bool,
    pub black_queen_side: bool,
}

impl CastlingAvailability {
    /// Every right available, as in the starting position.
    pub const ALL: CastlingAvailability = CastlingAvailability {
        white_king_side: true,
        white_queen_side: true,
        black_king_side: true,
        black_queen_side: true,
    };

    #[inline]
    pub const fn king_side(self, side: Side) -> bool {
        match side {
            Side::White => self.white_king_side,
            Side::Black => self.black_king_side,
        }
    }

    #[inline]
    pub const fn queen_side(self, side: Side) -> bool {
        match side {
            Side::White => self.white_queen_side,
            Side::Black => self.black_queen_side,
        }
    }

    /// Returns true if the side may castle on either wing.
    #[inline]
    pub const fn any(self, side: Side) -> bool {
        self.king_side(side) || self.queen_side(side)
    }

    /// Formats the field (`KQkq`, `-`, ...).
    pub fn to_field(self) -> String {
        let field: String = [
            (self.white_king_side, 'K'),
            (self.white_queen_side, 'Q'),
            (self.black_king_side, 'k'),
            (self.black_queen_side, 'q'),
        ]
        .iter()
        .filter(|(allowed, _)| *allowed)
        .map(|(_, c)| *c)
        .collect();
        if field.is_empty() {
            "-".to_string()
        } else {
            field
        }
    }
}

/// A decoded FEN record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fen {
    /// Occupant of every position, in index order (a8 first).
    pub placement: [Option<(PieceType, Side)>; NUM_SQUARES],
    pub side_to_move: Side,
    pub castling: CastlingAvailability,
    /// The square a double-stepping pawn skipped over, if any.
    pub en_passant: Option<Position>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl Fen {
    /// The standard starting position.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parses a FEN string.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(FenError::InvalidFieldCount(fields.len()));
        }

        let placement = Self::parse_placement(fields[0])?;

        let side_to_move = match fields[1] {
            "w" => Side::White,
            "b" => Side::Black,
            other => return Err(FenError::InvalidSideToMove(other.to_string())),
        };

        let castling = Self::parse_castling(fields[2])?;
        let en_passant = Self::parse_en_passant(fields[3])?;

        let halfmove_clock = fields[4]
            .parse::<u32>()
            .map_err(|_| FenError::InvalidHalfmoveClock(fields[4].to_string()))?;
        let fullmove_number = fields[5]
            .parse::<u32>()
            .map_err(|_| FenError::InvalidFullmoveNumber(fields[5].to_string()))?;

        Ok(Fen {
            placement,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }

    fn parse_placement(field: &str) -> Result<[Option<(PieceType, Side)>; NUM_SQUARES], FenError> {
        let rows: Vec<&str> = field.split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                rows.len()
            )));
        }

        let mut placement = [None; NUM_SQUARES];
        // FEN lists rank 8 first, which is row 0 here, so rows map directly.
        for (row, text) in rows.iter().enumerate() {
            let mut column = 0usize;
            for c in text.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    column += skip as usize;
                } else if let Some(occupant) = PieceType::from_fen_char(c) {
                    if column < 8 {
                        placement[row * 8 + column] = Some(occupant);
                    }
                    column += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        8 - row
                    )));
                }
            }
            if column != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    8 - row,
                    column
                )));
            }
        }
        Ok(placement)
    }

    fn parse_castling(field: &str) -> Result<CastlingAvailability, FenError> {
        let mut castling = CastlingAvailability::default();
        if field == "-" {
            return Ok(castling);
        }
        for c in field.chars() {
            let flag = match c {
                'K' => &mut castling.white_king_side,
                'Q' => &mut castling.white_queen_side,
                'k' => &mut castling.black_king_side,
                'q' => &mut castling.black_queen_side,
                _ => {
                    return Err(FenError::InvalidCastling(format!(
                        "invalid character '{}'",
                        c
                    )))
                }
            };
            if *flag {
                return Err(FenError::InvalidCastling(format!("duplicate '{}'", c)));
            }
            *flag = true;
        }
        Ok(castling)
    }

    fn parse_en_passant(field: &str) -> Result<Option<Position>, FenError> {
        if field == "-" {
            return Ok(None);
        }
        match Position::from_algebraic(field) {
            // Only ranks 3 and 6 can be skipped by a double step.
            Some(target) if target.row() == 5 || target.row() == 2 => Ok(Some(target)),
            _ => Err(FenError::InvalidEnPassant(field.to_string())),
        }
    }

    /// Writes the piece placement field.
    pub fn placement_field(placement: &[Option<(PieceType, Side)>; NUM_SQUARES]) -> String {
        let mut field = String::new();
        for (row, squares) in placement.chunks(8).enumerate() {
            let mut empty = 0;
            for occupant in squares {
                match occupant {
                    Some((kind, side)) => {
                        if empty > 0 {
                            field.push_str(&empty.to_string());
                            empty = 0;
                        }
                        field.push(kind.to_fen_char(*side));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                field.push_str(&empty.to_string());
            }
            if row < 7 {
                field.push('/');
            }
        }
        field
    }

    /// Converts the record back to a FEN string.
    pub fn to_fen(&self) -> String {
        let side = match self.side_to_move {
            Side::White => 'w',
            Side::Black => 'b',
        };
        let en_passant = self
            .en_passant
            .map_or_else(|| "-".to_string(), Position::to_algebraic);
        format!(
            "{} {} {} {} {} {}",
            Self::placement_field(&self.placement),
            side,
            self.castling.to_field(),
            en_passant,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

impl Default for Fen {
    fn default() -> Self {
        Self::parse(Self::STARTPOS).expect("STARTPOS is valid")
    }
}
