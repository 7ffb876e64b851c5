//! "Perft" performance test: count the number of leaves at a given depth.
//! Under bracket legality the counts match the standard Othello tables.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Board, Color, Legality};

pub fn run_perft(depth: u64, legality: Legality) -> u64 {
    leaves_below(Board::new(), Color::Black, depth, false, legality)
}

fn leaves_below(board: Board, active: Color, depth: u64, passed: bool, legality: Legality) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = board.legal_moves(active, legality);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !active, depth - 1, true, legality);
    }

    all_moves
        .map(|mv| {
            let mut next = board;
            next.apply_move(active, mv);
            leaves_below(next, !active, depth - 1, false, legality)
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1, Legality::Bracket), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2, Legality::Bracket), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3, Legality::Bracket), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4, Legality::Bracket), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5, Legality::Bracket), 1396);
}

#[test]
fn perft_06() {
    assert_eq!(run_perft(6, Legality::Bracket), 8200);
}

#[test]
fn perft_adjacent_01() {
    assert_eq!(run_perft(1, Legality::Adjacent), 10);
}
