//! Random legal playouts from the standard position.

use chess_core::{PieceType, Side};
use chess_engine::{Board, MoveStatus, Square};
use proptest::prelude::*;

fn check_invariants(board: &Board) {
    for (index, square) in board.squares().iter().enumerate() {
        assert_eq!(square.position().as_usize(), index);
    }

    for side in Side::ALL {
        let pieces = board.pieces(side);
        for piece in pieces {
            assert_eq!(*board.square_at(piece.position()), Square::Occupied(*piece));
            assert_eq!(piece.side(), side);
        }
        let occupied = board
            .squares()
            .iter()
            .filter_map(Square::piece)
            .filter(|p| p.side() == side)
            .count();
        assert_eq!(occupied, pieces.len());

        let kings = pieces.iter().filter(|p| p.kind() == PieceType::King).count();
        assert_eq!(kings, 1);
        assert_eq!(board.king(side).kind(), PieceType::King);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn random_playouts_keep_invariants(choices in prop::collection::vec(any::<usize>(), 1..40)) {
        let mut board = Board::standard();
        for choice in choices {
            let player = board.current_player();
            let legal = player.legal_moves();
            if legal.is_empty() {
                prop_assert!(board.game_status().is_over());
                break;
            }

            let mv = legal[choice % legal.len()];
            let mover = player.side();
            let transition = player.make_move(mv);
            prop_assert_eq!(transition.status(), MoveStatus::Done);

            let next = transition.into_board();
            check_invariants(&next);
            prop_assert!(!next.player(mover).is_in_check());
            prop_assert_eq!(next.next_mover(), mover.opposite());

            let landed = next.piece_at(mv.destination()).unwrap();
            prop_assert!(landed.has_moved());
            prop_assert_eq!(landed.side(), mover);
            if let Some(captured) = mv.captured_piece() {
                prop_assert!(!next.pieces(mover.opposite()).contains(&captured));
            }
            board = next;
        }
    }

    #[test]
    fn legal_moves_are_candidates_minus_self_check(choices in prop::collection::vec(any::<usize>(), 0..20)) {
        let mut board = Board::standard();
        for choice in choices {
            let legal = board.current_player().legal_moves();
            if legal.is_empty() {
                break;
            }
            let mv = legal[choice % legal.len()];
            board = board.current_player().make_move(mv).into_board();
        }

        for side in Side::ALL {
            let player = board.player(side);
            let legal = player.legal_moves();
            for mv in player.candidate_moves() {
                let next = mv.execute(&board);
                let keeps_king_safe = next
                    .map(|next| !next.player(side).is_in_check())
                    .unwrap_or(false);
                prop_assert_eq!(legal.contains(mv), keeps_king_safe, "{}", mv);
            }
        }
    }
}
