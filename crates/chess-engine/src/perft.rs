//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.

use crate::Board;

/// Counts the leaf nodes reachable from `board` in `depth` plies, following
/// the legal moves of whichever side is to move.
pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let player = board.current_player();
    if depth == 1 {
        return player.legal_moves().len() as u64;
    }

    player
        .successors()
        .iter()
        .map(|(_, next)| perft(next, depth - 1))
        .sum()
}

/// Perft with divide: the node count below each legal move, sorted by move.
/// Useful for narrowing down which move disagrees with a reference count.
pub fn perft_divide(board: &Board, depth: u32) -> Vec<(String, u64)> {
    let mut results: Vec<_> = board
        .current_player()
        .successors()
        .iter()
        .map(|(mv, next)| {
            let nodes = if depth > 1 { perft(next, depth - 1) } else { 1 };
            (mv.to_string(), nodes)
        })
        .collect();

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perft_standard_depth_1() {
        assert_eq!(perft(&Board::standard(), 1), 20);
    }

    #[test]
    fn perft_standard_depth_2() {
        assert_eq!(perft(&Board::standard(), 2), 400);
    }

    #[test]
    fn perft_standard_depth_3() {
        assert_eq!(perft(&Board::standard(), 3), 8902);
    }

    #[test]
    #[ignore = "slow without optimizations"]
    fn perft_standard_depth_4() {
        assert_eq!(perft(&Board::standard(), 4), 197_281);
    }

    // Kiwipete: castling on both wings, en passant, pins.
    // r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -
    #[test]
    fn perft_kiwipete_depth_1() {
        let board =
            Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
                .unwrap();
        assert_eq!(perft(&board, 1), 48);
    }

    #[test]
    fn perft_kiwipete_depth_2() {
        let board =
            Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
                .unwrap();
        assert_eq!(perft(&board, 2), 2039);
    }

    // Check evasion and en passant along a pinned rank.
    // 8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -
    #[test]
    fn perft_position3_depth_1() {
        let board = Board::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").unwrap();
        assert_eq!(perft(&board, 1), 14);
    }

    #[test]
    fn perft_position3_depth_2() {
        let board = Board::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").unwrap();
        assert_eq!(perft(&board, 2), 191);
    }

    #[test]
    fn perft_divide_works() {
        let results = perft_divide(&Board::standard(), 1);
        assert_eq!(results.len(), 20);
        let total: u64 = results.iter().map(|(_, n)| n).sum();
        assert_eq!(total, 20);
        assert!(results.iter().any(|(mv, _)| mv == "e2e4"));
    }
}
