//! Board position representation.

use std::fmt;

/// Number of rows and of columns on the board.
pub const BOARD_SIZE: u8 = 8;

/// Number of squares on the board.
pub const NUM_SQUARES: usize = 64;

/// A square index on the board, 0-63.
///
/// Positions are laid out row-major starting from Black's back row:
/// - a8 = 0, b8 = 1, ..., h8 = 7
/// - a7 = 8, ..., h1 = 63
///
/// `row = index / 8` and `column = index % 8`, so White's pieces start on
/// rows 6 and 7 and Black's on rows 0 and 1.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(u8);

impl Position {
    /// Creates a position from a raw index.
    ///
    /// Returns `None` when the row or column derived from `index` falls
    /// outside the 8x8 range, which also covers negative and oversized
    /// results of offset arithmetic.
    #[inline]
    pub const fn new(index: i32) -> Option<Self> {
        let row = index / BOARD_SIZE as i32;
        let column = index % BOARD_SIZE as i32;
        if row >= 0 && row < BOARD_SIZE as i32 && column >= 0 && column < BOARD_SIZE as i32 {
            Some(Position(index as u8))
        } else {
            None
        }
    }

    /// Creates a position from row and column (both 0-7).
    #[inline]
    pub const fn from_row_column(row: u8, column: u8) -> Option<Self> {
        if row < BOARD_SIZE && column < BOARD_SIZE {
            Some(Position(row * BOARD_SIZE + column))
        } else {
            None
        }
    }

    /// Parses a position from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        // Rank 8 is row 0.
        Self::from_row_column(b'8' - rank, file - b'a')
    }

    /// Iterates over all 64 positions in index order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..NUM_SQUARES as u8).map(Position)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the index as a `usize`, for indexing square arrays.
    #[inline]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Returns the row (0-7, 0 is Black's back row).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    /// Returns the column (0-7, 0 is the a-file).
    #[inline]
    pub const fn column(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    /// Adds a raw index offset.
    ///
    /// Only the 0-63 range is checked. Callers stepping sideways must guard
    /// against wrapping onto the neighbouring row themselves.
    #[inline]
    pub const fn offset(self, delta: i32) -> Option<Self> {
        Self::new(self.0 as i32 + delta)
    }

    /// Returns the algebraic notation for this position.
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.column()) as char;
        let rank = (b'8' - self.row()) as char;
        format!("{}{}", file, rank)
    }

    // Back-row squares used by the starting arrangement and castling.
    pub const A8: Position = Position(0);
    pub const B8: Position = Position(1);
    pub const C8: Position = Position(2);
    pub const D8: Position = Position(3);
    pub const E8: Position = Position(4);
    pub const F8: Position = Position(5);
    pub const G8: Position = Position(6);
    pub const H8: Position = Position(7);
    pub const A1: Position = Position(56);
    pub const B1: Position = Position(57);
    pub const C1: Position = Position(58);
    pub const D1: Position = Position(59);
    pub const E1: Position = Position(60);
    pub const F1: Position = Position(61);
    pub const G1: Position = Position(62);
    pub const H1: Position = Position(63);
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}={})", self.0, self.to_algebraic())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_out_of_range() {
        assert_eq!(Position::new(0).map(Position::index), Some(0));
        assert_eq!(Position::new(63).map(Position::index), Some(63));
        assert_eq!(Position::new(-1), None);
        assert_eq!(Position::new(-8), None);
        assert_eq!(Position::new(-17), None);
        assert_eq!(Position::new(64), None);
        assert_eq!(Position::new(100), None);
    }

    #[test]
    fn row_and_column() {
        let e4 = Position::from_algebraic("e4").unwrap();
        assert_eq!(e4.index(), 36);
        assert_eq!(e4.row(), 4);
        assert_eq!(e4.column(), 4);
        assert_eq!(Position::H1.row(), 7);
        assert_eq!(Position::H1.column(), 7);
    }

    #[test]
    fn algebraic_round_trip() {
        assert_eq!(Position::from_algebraic("a8"), Some(Position::A8));
        assert_eq!(Position::from_algebraic("h1"), Some(Position::H1));
        assert_eq!(Position::from_algebraic("E1"), Some(Position::E1));
        assert_eq!(Position::from_algebraic("i1"), None);
        assert_eq!(Position::from_algebraic("a9"), None);
        assert_eq!(Position::from_algebraic("a0"), None);
        assert_eq!(Position::from_algebraic(""), None);
        for position in Position::all() {
            let name = position.to_algebraic();
            assert_eq!(Position::from_algebraic(&name), Some(position));
        }
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(Position::A8.offset(-1), None);
        assert_eq!(Position::A8.offset(-8), None);
        assert_eq!(Position::H1.offset(1), None);
        assert_eq!(Position::H1.offset(8), None);
        assert_eq!(Position::E1.offset(-8), Position::from_algebraic("e2"));
        // Row wrap is not an offset concern: h8 + 1 lands on a7.
        assert_eq!(Position::H8.offset(1), Position::from_algebraic("a7"));
    }

    #[test]
    fn all_positions_in_index_order() {
        let all: Vec<_> = Position::all().collect();
        assert_eq!(all.len(), NUM_SQUARES);
        assert!(all.iter().enumerate().all(|(i, p)| p.as_usize() == i));
    }

    #[test]
    fn from_row_column() {
        assert_eq!(Position::from_row_column(7, 4), Some(Position::E1));
        assert_eq!(Position::from_row_column(8, 0), None);
        assert_eq!(Position::from_row_column(0, 8), None);
    }
}
