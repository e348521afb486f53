//! Core value types for the chess rules engine.
//!
//! This crate provides the primitive types the engine is built from:
//! - [`Position`] for board indices (0-63, a8 first)
//! - [`Side`] for the two players
//! - [`PieceType`] for piece categories and their material values
//! - FEN field parsing ([`Fen`])

mod fen;
mod piece_type;
mod position;
mod side;

pub use fen::{CastlingAvailability, Fen, FenError};
pub use piece_type::PieceType;
pub use position::{Position, BOARD_SIZE, NUM_SQUARES};
pub use side::Side;
