use super::*;
use crate::error::GameError;

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::X.opponent(), Mark::O);
    assert_eq!(Mark::O.opponent(), Mark::X);
    assert_eq!(Mark::Empty.opponent(), Mark::Empty);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(1, 1); // Center
    assert_eq!(pos.to_index(), 4);

    let pos2 = Pos::from_index(7);
    assert_eq!(pos2.row, 2);
    assert_eq!(pos2.col, 1);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(2, 2));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, 3));
    assert!(!Pos::is_valid(3, 0));
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 2) < Pos::new(1, 0));
    assert!(Pos::new(1, 0) < Pos::new(1, 1));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 3);
    assert_eq!(TOTAL_CELLS, 9);
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.mark_count(), 0);
    assert!(!board.is_full());
    assert_eq!(board.actions().count(), 9);
    for idx in 0..TOTAL_CELLS {
        assert_eq!(board.get(Pos::from_index(idx)), Mark::Empty);
    }
}

#[test]
fn test_x_moves_first_then_alternates() {
    let board = Board::new();
    assert_eq!(board.to_move(), Mark::X);

    let board = board.result(Pos::new(0, 0)).unwrap();
    assert_eq!(board.get(Pos::new(0, 0)), Mark::X);
    assert_eq!(board.to_move(), Mark::O);

    let board = board.result(Pos::new(1, 1)).unwrap();
    assert_eq!(board.get(Pos::new(1, 1)), Mark::O);
    assert_eq!(board.to_move(), Mark::X);
}

#[test]
fn test_result_leaves_receiver_untouched() {
    let board = Board::from_layout("X.. .O. ...");
    let next = board.result(Pos::new(2, 2)).unwrap();

    assert_eq!(board.get(Pos::new(2, 2)), Mark::Empty);
    assert_eq!(board.mark_count(), 2);
    assert_eq!(next.get(Pos::new(2, 2)), Mark::X);
    assert_eq!(next.mark_count(), 3);
}

#[test]
fn test_result_rejects_occupied_cell() {
    let board = Board::from_layout("X.. ... ...");
    assert_eq!(
        board.result(Pos::new(0, 0)),
        Err(GameError::CellOccupied { pos: Pos::new(0, 0) })
    );
}

#[test]
fn test_result_rejects_finished_game() {
    let board = Board::from_layout("XXX OO. ...");
    assert_eq!(board.result(Pos::new(2, 2)), Err(GameError::GameOver));
}

#[test]
fn test_actions_are_empty_cells_in_row_major_order() {
    let board = Board::from_layout("X.O .X. O..");
    let actions: Vec<Pos> = board.actions().collect();
    assert_eq!(
        actions,
        vec![
            Pos::new(0, 1),
            Pos::new(1, 0),
            Pos::new(1, 2),
            Pos::new(2, 1),
            Pos::new(2, 2),
        ]
    );
}

#[test]
fn test_full_board() {
    let board = Board::from_layout("XOX XOO OXX");
    assert!(board.is_full());
    assert_eq!(board.actions().count(), 0);
}

#[test]
fn test_marks_per_side() {
    let board = Board::from_layout("XO. X.. ...");
    assert_eq!(board.marks(Mark::X).map(|b| b.count()), Some(2));
    assert_eq!(board.marks(Mark::O).map(|b| b.count()), Some(1));
    assert!(board.marks(Mark::Empty).is_none());
}

#[test]
fn test_display() {
    let board = Board::from_layout("X.O .X. ..O");
    assert_eq!(board.to_string(), "X-O\n-X-\n--O");
}

#[test]
fn test_bitboard_iter_ones() {
    let bb = Bitboard::from_bits(0b1_0000_0101);
    let cells: Vec<Pos> = bb.iter_ones().collect();
    assert_eq!(cells, vec![Pos::new(0, 0), Pos::new(0, 2), Pos::new(2, 2)]);
    assert_eq!(bb.count(), 3);
}

#[test]
fn test_bitboard_not_stays_within_board() {
    let full = !Bitboard::new();
    assert_eq!(full.count(), 9);
    assert!((!full).is_empty());
}
