//! Bitboard square sets.
//!
//! A bitboard is a 64-bit integer where each bit represents a square on the
//! chess board. The engine uses them for per-side attack maps.

use chess_core::Position;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A set of board positions.
///
/// Bit `i` is the position with index `i` (bit 0 = a8, bit 63 = h1).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(pub u64);

impl Bitboard {
    /// Empty bitboard (no squares set).
    pub const EMPTY: Bitboard = Bitboard(0);

    /// Creates a bitboard with a single position set.
    #[inline]
    pub const fn from_position(position: Position) -> Self {
        Bitboard(1u64 << position.index())
    }

    /// Returns true if no position is set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set positions.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if the given position is set.
    #[inline]
    pub const fn contains(self, position: Position) -> bool {
        (self.0 & (1u64 << position.index())) != 0
    }

    /// Sets the given position.
    #[inline]
    pub fn set(&mut self, position: Position) {
        self.0 |= 1u64 << position.index();
    }

    /// Iterates over the set positions in index order.
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self.0)
    }
}

impl BitOr for Bitboard {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<Position> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut bitboard = Bitboard::EMPTY;
        for position in iter {
            bitboard.set(position);
        }
        bitboard
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bitboard({:#018x})", self.0)?;
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for column in 0..8u8 {
                if (self.0 >> (row * 8 + column)) & 1 == 1 {
                    write!(f, "X ")?;
                } else {
                    write!(f, ". ")?;
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}

/// Iterator over set positions in a bitboard.
pub struct BitboardIter(u64);

impl Iterator for BitboardIter {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros();
        self.0 &= self.0 - 1;
        Position::new(index as i32)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count_ones() as usize;
        (count, Some(count))
    }
}

impl IntoIterator for Bitboard {
    type Item = Position;
    type IntoIter = BitboardIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(name: &str) -> Position {
        Position::from_algebraic(name).unwrap()
    }

    #[test]
    fn set_and_contains() {
        let mut bb = Bitboard::EMPTY;
        assert!(bb.is_empty());
        bb.set(pos("e4"));
        bb.set(Position::A8);
        assert!(bb.contains(pos("e4")));
        assert!(bb.contains(Position::A8));
        assert!(!bb.contains(Position::H1));
        assert_eq!(bb.count(), 2);
    }

    #[test]
    fn iterates_in_index_order() {
        let bb: Bitboard = [Position::H1, pos("e4"), Position::A8].into_iter().collect();
        let positions: Vec<_> = bb.iter().collect();
        assert_eq!(positions, vec![Position::A8, pos("e4"), Position::H1]);
        assert_eq!(bb.iter().size_hint(), (3, Some(3)));
    }

    #[test]
    fn union() {
        let a = Bitboard::from_position(Position::A1);
        let b = Bitboard::from_position(Position::H8);
        let mut both = a | b;
        assert_eq!(both.count(), 2);
        both |= a;
        assert_eq!(both.count(), 2);
        assert_eq!(Bitboard::from_position(Position::H1).0, 1 << 63);
    }

    #[test]
    fn debug_draws_rank_eight_first() {
        let bb = Bitboard::from_position(Position::A8);
        let rendered = format!("{:?}", bb);
        let first_rank = rendered.lines().nth(1).unwrap();
        assert_eq!(first_rank, "8 X . . . . . . . ");
    }
}
