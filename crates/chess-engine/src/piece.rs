//! Pieces and their move generators.
//!
//! Every piece kind shares one [`Piece`] struct; what differs is the table
//! of [`Step`]s it walks from its position. Sliders repeat a step until
//! something blocks them, knights and kings take it once, and pawns have
//! their own push/capture rules.

use crate::{Bitboard, Board, Move, Square};
use chess_core::{PieceType, Position, Side, BOARD_SIZE};
use std::fmt;

/// A single step on the board: the index offset and the column change it
/// implies.
///
/// The column change is what catches wrap-around. Adding -1 to a square on
/// the a-file lands on the h-file of the row above, which is a legal index
/// but not a legal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub offset: i32,
    pub columns: i32,
}

impl Step {
    const fn new(offset: i32, columns: i32) -> Self {
        Step { offset, columns }
    }

    /// Mirrors the step for a side moving the other way up the board.
    const fn scaled(self, direction: i32) -> Self {
        Step::new(self.offset * direction, self.columns * direction)
    }
}

const KNIGHT_STEPS: [Step; 8] = [
    Step::new(-17, -1),
    Step::new(-15, 1),
    Step::new(-10, -2),
    Step::new(-6, 2),
    Step::new(6, -2),
    Step::new(10, 2),
    Step::new(15, -1),
    Step::new(17, 1),
];

const BISHOP_STEPS: [Step; 4] = [
    Step::new(-9, -1),
    Step::new(-7, 1),
    Step::new(7, -1),
    Step::new(9, 1),
];

const ROOK_STEPS: [Step; 4] = [
    Step::new(-8, 0),
    Step::new(-1, -1),
    Step::new(1, 1),
    Step::new(8, 0),
];

/// Shared by the king (one step) and the queen (sliding).
const ROYAL_STEPS: [Step; 8] = [
    Step::new(-9, -1),
    Step::new(-8, 0),
    Step::new(-7, 1),
    Step::new(-1, -1),
    Step::new(1, 1),
    Step::new(7, -1),
    Step::new(8, 0),
    Step::new(9, 1),
];

/// Pawn steps for a side moving toward higher indices; scaled by
/// [`Side::pawn_direction`] before use.
const PAWN_PUSH: Step = Step::new(8, 0);
const PAWN_CAPTURES: [Step; 2] = [Step::new(7, -1), Step::new(9, 1)];

/// Returns true if `step` taken from `current` stays within the board's
/// columns.
///
/// Sliders must call this from the square they are currently on, not from
/// where they started: a ray that is fine at the origin can still reach the
/// edge a few squares later.
#[inline]
pub fn can_jump_from(current: Position, step: Step) -> bool {
    let column = current.column() as i32 + step.columns;
    (0..BOARD_SIZE as i32).contains(&column)
}

/// Applies `step` to `current`, or `None` if it leaves the board.
#[inline]
fn jump(current: Position, step: Step) -> Option<Position> {
    if can_jump_from(current, step) {
        current.offset(step.offset)
    } else {
        None
    }
}

/// A chess piece.
///
/// Pieces are plain values. Moving one produces a new piece with the new
/// position and `moved` set; equal pieces are interchangeable.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    position: Position,
    side: Side,
    kind: PieceType,
    moved: bool,
}

impl Piece {
    /// Creates a piece that has not moved yet.
    #[inline]
    pub const fn new(position: Position, side: Side, kind: PieceType) -> Self {
        Piece {
            position,
            side,
            kind,
            moved: false,
        }
    }

    /// Creates a piece with an explicit moved flag.
    #[inline]
    pub const fn with_moved(position: Position, side: Side, kind: PieceType, moved: bool) -> Self {
        Piece {
            position,
            side,
            kind,
            moved,
        }
    }

    #[inline]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub const fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub const fn kind(&self) -> PieceType {
        self.kind
    }

    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.moved
    }

    /// Returns this piece relocated to `destination`, marked as moved.
    #[inline]
    pub const fn moved_to(self, destination: Position) -> Self {
        Piece {
            position: destination,
            moved: true,
            ..self
        }
    }

    /// The step table this piece walks.
    pub fn steps(&self) -> &'static [Step] {
        match self.kind {
            PieceType::Knight => &KNIGHT_STEPS,
            PieceType::Bishop => &BISHOP_STEPS,
            PieceType::Rook => &ROOK_STEPS,
            PieceType::Queen | PieceType::King => &ROYAL_STEPS,
            PieceType::Pawn => &[],
        }
    }

    /// Generates the pseudo-legal moves of this piece on `board`.
    ///
    /// Castling is not included; it depends on the whole side, not one piece.
    pub fn generate_moves(&self, board: &Board) -> Vec<Move> {
        match self.kind {
            PieceType::Pawn => self.pawn_moves(board),
            PieceType::Knight | PieceType::King => self.stepping_moves(board),
            PieceType::Bishop | PieceType::Rook | PieceType::Queen => self.sliding_moves(board),
        }
    }

    /// Returns every square this piece threatens on `board`.
    ///
    /// Unlike [`generate_moves`](Self::generate_moves) this includes squares
    /// held by its own side and empty squares on a pawn's diagonals, and
    /// excludes pawn pushes.
    pub fn attacks(&self, board: &Board) -> Bitboard {
        let mut attacked = Bitboard::EMPTY;
        match self.kind {
            PieceType::Pawn => {
                let direction = self.side.pawn_direction();
                for capture in PAWN_CAPTURES {
                    if let Some(target) = jump(self.position, capture.scaled(direction)) {
                        attacked.set(target);
                    }
                }
            }
            PieceType::Knight | PieceType::King => {
                for &step in self.steps() {
                    if let Some(target) = jump(self.position, step) {
                        attacked.set(target);
                    }
                }
            }
            PieceType::Bishop | PieceType::Rook | PieceType::Queen => {
                for &step in self.steps() {
                    let mut current = self.position;
                    while let Some(target) = jump(current, step) {
                        attacked.set(target);
                        if board.square_at(target).is_occupied() {
                            break;
                        }
                        current = target;
                    }
                }
            }
        }
        attacked
    }

    fn sliding_moves(&self, board: &Board) -> Vec<Move> {
        let mut moves = Vec::new();
        for &step in self.steps() {
            let mut current = self.position;
            while let Some(target) = jump(current, step) {
                match board.square_at(target) {
                    Square::Empty(_) => moves.push(Move::Major {
                        piece: *self,
                        destination: target,
                    }),
                    Square::Occupied(occupant) => {
                        if occupant.side != self.side {
                            moves.push(Move::Capture {
                                piece: *self,
                                captured: *occupant,
                            });
                        }
                        break;
                    }
                }
                current = target;
            }
        }
        moves
    }

    fn stepping_moves(&self, board: &Board) -> Vec<Move> {
        let mut moves = Vec::new();
        for &step in self.steps() {
            let Some(target) = jump(self.position, step) else {
                continue;
            };
            match board.square_at(target) {
                Square::Empty(_) => moves.push(Move::Major {
                    piece: *self,
                    destination: target,
                }),
                Square::Occupied(occupant) if occupant.side != self.side => {
                    moves.push(Move::Capture {
                        piece: *self,
                        captured: *occupant,
                    })
                }
                Square::Occupied(_) => {}
            }
        }
        moves
    }

    fn pawn_moves(&self, board: &Board) -> Vec<Move> {
        let mut moves = Vec::new();
        let direction = self.side.pawn_direction();
        let push = PAWN_PUSH.scaled(direction);

        if let Some(single) = jump(self.position, push) {
            if board.square_at(single).is_empty() {
                moves.push(Move::PawnMove {
                    piece: *self,
                    destination: single,
                });
                if !self.moved {
                    if let Some(double) = jump(single, push) {
                        if board.square_at(double).is_empty() {
                            moves.push(Move::PawnJump {
                                piece: *self,
                                destination: double,
                            });
                        }
                    }
                }
            }
        }

        for capture in PAWN_CAPTURES {
            let Some(target) = jump(self.position, capture.scaled(direction)) else {
                continue;
            };
            match board.square_at(target) {
                Square::Occupied(occupant) => {
                    if occupant.side != self.side {
                        moves.push(Move::PawnCapture {
                            piece: *self,
                            captured: *occupant,
                        });
                    }
                }
                Square::Empty(_) => {
                    if let Some(jumped) = board.en_passant_pawn() {
                        if jumped.side != self.side && board.en_passant_target() == Some(target) {
                            moves.push(Move::PawnEnPassantCapture {
                                piece: *self,
                                destination: target,
                                captured: jumped,
                            });
                        }
                    }
                }
            }
        }
        moves
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}{})",
            self,
            self.position,
            if self.moved { ", moved" } else { "" }
        )
    }
}

/// Renders as `<side letter>_<TYPE>`, e.g. `W_KING`.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.side.code(), self.kind.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(name: &str) -> Position {
        Position::from_algebraic(name).unwrap()
    }

    fn destinations(moves: &[Move]) -> Vec<String> {
        let mut names: Vec<_> = moves.iter().map(|m| m.destination().to_string()).collect();
        names.sort();
        names
    }

    #[test]
    fn step_tables_agree_with_offsets() {
        // Each offset must move exactly `columns` columns when it does not wrap.
        let center = pos("d5");
        for table in [&KNIGHT_STEPS[..], &BISHOP_STEPS, &ROOK_STEPS, &ROYAL_STEPS] {
            for step in table {
                let target = jump(center, *step).unwrap();
                assert_eq!(
                    target.column() as i32 - center.column() as i32,
                    step.columns,
                    "{:?}",
                    step
                );
            }
        }
    }

    #[test]
    fn wrap_guard_blocks_edge_steps() {
        let a4 = pos("a4");
        let h4 = pos("h4");
        assert!(!can_jump_from(a4, Step::new(-1, -1)));
        assert!(can_jump_from(a4, Step::new(1, 1)));
        assert!(!can_jump_from(h4, Step::new(1, 1)));
        assert!(!can_jump_from(pos("b4"), Step::new(-10, -2)));
        assert!(!can_jump_from(pos("g4"), Step::new(10, 2)));
        assert!(can_jump_from(pos("g4"), Step::new(15, -1)));
    }

    #[test]
    fn moved_to_marks_piece_moved() {
        let pawn = Piece::new(pos("e2"), Side::White, PieceType::Pawn);
        let moved = pawn.moved_to(pos("e4"));
        assert!(!pawn.has_moved());
        assert!(moved.has_moved());
        assert_eq!(moved.position(), pos("e4"));
        assert_eq!(moved.side(), Side::White);
        assert_eq!(moved.kind(), PieceType::Pawn);
        assert_ne!(pawn, moved);
    }

    #[test]
    fn display() {
        let king = Piece::new(Position::E1, Side::White, PieceType::King);
        let knight = Piece::new(Position::B8, Side::Black, PieceType::Knight);
        assert_eq!(king.to_string(), "W_KING");
        assert_eq!(knight.to_string(), "B_KNIGHT");
    }

    #[test]
    fn knight_in_corner() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1").unwrap();
        let knight = board.piece_at(Position::A1).unwrap();
        let moves = knight.generate_moves(&board);
        assert_eq!(destinations(&moves), vec!["b3", "c2"]);
    }

    #[test]
    fn knight_near_right_edge_does_not_wrap() {
        let board = Board::from_fen("4k3/8/8/8/6N1/8/8/4K3 w - - 0 1").unwrap();
        let knight = board.piece_at(pos("g4")).unwrap();
        let moves = knight.generate_moves(&board);
        assert_eq!(
            destinations(&moves),
            vec!["e3", "e5", "f2", "f6", "h2", "h6"]
        );
    }

    #[test]
    fn rook_on_a_file_does_not_wrap() {
        let board = Board::from_fen("4k3/8/8/8/R7/8/8/4K3 w - - 0 1").unwrap();
        let rook = board.piece_at(pos("a4")).unwrap();
        let moves = rook.generate_moves(&board);
        assert_eq!(moves.len(), 14);
        assert!(moves
            .iter()
            .all(|m| m.destination().row() == 4 || m.destination().column() == 0));
        assert!(moves.iter().all(|m| m.destination() != pos("h5")));
    }

    #[test]
    fn bishop_ray_stops_at_edge() {
        // From c1 the up-left ray reaches a3 and must not continue onto h4.
        let board = Board::from_fen("4k3/8/8/8/8/8/8/2B1K3 w - - 0 1").unwrap();
        let bishop = board.piece_at(Position::C1).unwrap();
        let moves = bishop.generate_moves(&board);
        assert_eq!(
            destinations(&moves),
            vec!["a3", "b2", "d2", "e3", "f4", "g5", "h6"]
        );
    }

    #[test]
    fn slider_stops_at_first_occupant() {
        let board = Board::from_fen("4k3/8/8/8/1p1Q2P1/8/8/4K3 w - - 0 1").unwrap();
        let queen = board.piece_at(pos("d4")).unwrap();
        let moves = queen.generate_moves(&board);
        let captures: Vec<_> = moves.iter().filter(|m| m.is_capture()).collect();
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].destination(), pos("b4"));
        assert!(moves.iter().all(|m| m.destination() != pos("a4")));
        assert!(moves.iter().all(|m| m.destination() != pos("g4")));
        assert!(moves.iter().any(|m| m.destination() == pos("f4")));
    }

    #[test]
    fn pawn_pushes() {
        let board = Board::standard();
        let pawn = board.piece_at(pos("e2")).unwrap();
        let moves = pawn.generate_moves(&board);
        assert_eq!(moves.len(), 2);
        assert!(matches!(moves[0], Move::PawnMove { .. }));
        assert!(matches!(moves[1], Move::PawnJump { .. }));
        assert_eq!(moves[1].destination(), pos("e4"));

        let black = board.piece_at(pos("d7")).unwrap();
        assert_eq!(
            destinations(&black.generate_moves(&board)),
            vec!["d5", "d6"]
        );
    }

    #[test]
    fn pawn_jump_needs_both_squares_empty() {
        let board = Board::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").unwrap();
        let blocked = board.piece_at(pos("e2")).unwrap();
        assert!(blocked.generate_moves(&board).is_empty());

        let board = Board::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1").unwrap();
        let half_blocked = board.piece_at(pos("e2")).unwrap();
        assert_eq!(destinations(&half_blocked.generate_moves(&board)), vec!["e3"]);
    }

    #[test]
    fn moved_pawn_cannot_jump() {
        let mut builder = Board::builder();
        builder
            .set_piece(Piece::new(Position::E1, Side::White, PieceType::King))
            .set_piece(Piece::new(Position::E8, Side::Black, PieceType::King))
            .set_piece(Piece::with_moved(pos("a2"), Side::White, PieceType::Pawn, true));
        let board = builder.build().unwrap();
        let pawn = board.piece_at(pos("a2")).unwrap();
        assert_eq!(destinations(&pawn.generate_moves(&board)), vec!["a3"]);
    }

    #[test]
    fn pawn_captures_only_diagonally_and_only_enemies() {
        let board = Board::from_fen("4k3/8/8/8/8/3p1N2/4P3/4K3 w - - 0 1").unwrap();
        let pawn = board.piece_at(pos("e2")).unwrap();
        let moves = pawn.generate_moves(&board);
        let captures: Vec<_> = moves.iter().filter(|m| m.is_capture()).collect();
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].destination(), pos("d3"));
        assert!(matches!(captures[0], Move::PawnCapture { .. }));
    }

    #[test]
    fn edge_pawn_does_not_capture_across_the_board() {
        // h2 - 7 is a2: same index arithmetic as a capture, but a wrap.
        let board = Board::from_fen("4k3/8/8/8/8/8/p6P/4K3 w - - 0 1").unwrap();
        let pawn = board.piece_at(pos("h2")).unwrap();
        assert!(pawn.generate_moves(&board).iter().all(|m| !m.is_capture()));
        let attacks = pawn.attacks(&board);
        assert_eq!(attacks.count(), 1);
        assert!(attacks.contains(pos("g3")));
    }

    #[test]
    fn king_attacks_cover_neighbours() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/K7 w - - 0 1").unwrap();
        let king = board.piece_at(Position::A1).unwrap();
        let attacks: Vec<_> = king.attacks(&board).iter().map(|p| p.to_string()).collect();
        assert_eq!(attacks, vec!["a2", "b2", "b1"]);
    }

    #[test]
    fn slider_attacks_include_first_blocker() {
        let board = Board::from_fen("4k3/8/8/8/8/8/R1N5/4K3 w - - 0 1").unwrap();
        let rook = board.piece_at(pos("a2")).unwrap();
        let attacks = rook.attacks(&board);
        assert!(attacks.contains(pos("b2")));
        assert!(attacks.contains(pos("c2")));
        assert!(!attacks.contains(pos("d2")));
        assert!(attacks.contains(Position::A1));
        assert!(attacks.contains(Position::A8));
    }
}
