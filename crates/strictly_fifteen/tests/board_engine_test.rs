//! Tests for the board engine's public surface.

#[cfg(feature = "shuffle")]
use strictly_fifteen::{DEFAULT_MAX_ATTEMPTS, RngSource};
use strictly_fifteen::{
    Board, CELLS, Position, ScriptedSource, Tile, is_solvable, is_solved, make_solvable_board,
    try_move,
};

/// Walks the blank around from the solved board, returning the scrambled
/// board and the clicks that undo the walk.
fn scramble(clicks: &[usize]) -> (Board, Vec<usize>) {
    let mut board = Board::solved();
    let mut undo = Vec::new();
    for &index in clicks {
        let blank = board.blank().index();
        let next = try_move(&board, index);
        assert_ne!(next, board, "scramble click {index} was illegal");
        board = next;
        undo.push(blank);
    }
    undo.reverse();
    (board, undo)
}

#[test]
fn test_unsolvable_fixture_from_swapped_tiles() {
    let mut tiles = *Board::solved().tiles();
    tiles.swap(13, 14);
    let board = Board::from_tiles(tiles).expect("valid board");
    assert_eq!(board.get(Position::from_index(13).unwrap()), Tile::Numbered(15));
    assert!(!is_solvable(&board));
}

#[test]
fn test_scrambled_boards_stay_solvable() {
    let (board, _) = scramble(&[14, 13, 9, 10, 6, 7, 11, 15]);
    assert!(is_solvable(&board));
    assert!(!is_solved(&board));
}

#[test]
fn test_undo_sequence_solves_scramble() {
    let (mut board, undo) = scramble(&[11, 7, 6, 10, 14, 13, 9, 5, 4]);
    for (step, index) in undo.iter().enumerate() {
        assert!(!is_solved(&board), "solved early at step {step}");
        board = try_move(&board, *index);
    }
    assert!(is_solved(&board));
}

#[test]
fn test_try_move_only_changes_two_cells() {
    let (board, _) = scramble(&[14, 10, 6]);
    let blank = board.blank();
    for clicked in Position::all() {
        let next = try_move(&board, clicked.index());
        let changed: Vec<usize> = (0..CELLS)
            .filter(|&i| next.tiles()[i] != board.tiles()[i])
            .collect();
        if clicked.is_adjacent(blank) {
            let mut expected = vec![clicked.index(), blank.index()];
            expected.sort();
            assert_eq!(changed, expected);
            assert_eq!(next.blank(), clicked);
        } else {
            assert!(changed.is_empty(), "click {clicked} changed {changed:?}");
        }
    }
}

#[test]
fn test_scripted_source_is_deterministic() {
    let script = [3, 9, 1, 0, 7, 2, 5, 5, 1, 4, 0, 2, 1, 0, 1];
    let first = make_solvable_board(&mut ScriptedSource::new(script), 10);
    let second = make_solvable_board(&mut ScriptedSource::new(script), 10);
    assert_eq!(first, second);
}

#[cfg(feature = "shuffle")]
#[test]
fn test_seeded_sources_repeat() {
    let a = make_solvable_board(&mut RngSource::seeded(11), DEFAULT_MAX_ATTEMPTS).unwrap();
    let b = make_solvable_board(&mut RngSource::seeded(11), DEFAULT_MAX_ATTEMPTS).unwrap();
    assert_eq!(a, b);
    assert!(is_solvable(&a));
}

#[test]
fn test_board_serializes_as_cells() {
    let board = try_move(&Board::solved(), 14);
    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
    assert_eq!(back.blank(), board.blank());
}

#[test]
fn test_invalid_board_json_is_rejected() {
    let mut cells: Vec<Tile> = Board::solved().tiles().to_vec();
    cells[0] = Tile::Empty;
    let json = serde_json::to_string(&cells).unwrap();
    assert!(serde_json::from_str::<Board>(&json).is_err());
}
