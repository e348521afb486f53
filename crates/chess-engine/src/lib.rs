//! Chess rules engine built on immutable boards.
//!
//! This crate provides:
//! - [`Board`] - an immutable position with its candidate moves and attack maps
//! - [`BoardBuilder`] - the only way to construct a board
//! - [`Piece`] - piece values and their move generators
//! - [`Move`] - move descriptors that execute into a new board
//! - [`Player`] - one side's view: legal moves, check, checkmate, stalemate
//! - [`create_move`] - move lookup by origin and destination
//! - [`perft`] - move generator validation
//!
//! # Architecture
//!
//! A board is never modified. Building one lays out the squares, partitions
//! the pieces by side, computes each side's attack map and asks every piece
//! for its pseudo-legal moves. Playing a move builds the next board from
//! scratch, and a move is legal when that next board does not leave the
//! mover's king attacked.
//!
//! # Example
//!
//! ```
//! use chess_engine::{create_move, Board, MoveStatus};
//! use chess_core::Position;
//!
//! let board = Board::standard();
//! let e2 = Position::from_algebraic("e2").unwrap();
//! let e4 = Position::from_algebraic("e4").unwrap();
//!
//! let mv = create_move(&board, e2, e4).unwrap();
//! let transition = board.current_player().make_move(mv);
//! assert_eq!(transition.status(), MoveStatus::Done);
//! println!("{}", transition.board());
//! ```

mod bitboard;
mod board;
mod builder;
mod castling;
mod fen;
mod lookup;
mod mov;
pub mod perft;
mod piece;
mod player;

pub use bitboard::{Bitboard, BitboardIter};
pub use board::{Board, BoardError, GameStatus, Square};
pub use builder::BoardBuilder;
pub use lookup::create_move;
pub use mov::{CastleMove, Move, MoveStatus, MoveTransition};
pub use perft::{perft, perft_divide};
pub use piece::{can_jump_from, Piece, Step};
pub use player::Player;
