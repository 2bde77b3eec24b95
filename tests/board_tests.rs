use gunner::{Board, Cell, Coord, ShooterError};

#[test]
fn dimensions_must_be_positive() {
    assert!(matches!(
        Board::new(0, 4),
        Err(ShooterError::InvalidDimensions { .. })
    ));
    assert!(matches!(
        Board::new(5, -1),
        Err(ShooterError::InvalidDimensions { .. })
    ));
}

#[test]
fn marks_overwrite_and_off_board_reads_are_empty() {
    let mut board = Board::new(4, 3).unwrap();
    assert_eq!(board.at(Coord::new(1, 2)), Cell::Empty);

    board.mark(Coord::new(1, 2), Cell::Ship).unwrap();
    assert_eq!(board.at(Coord::new(1, 2)), Cell::Ship);
    board.mark(Coord::new(1, 2), Cell::Miss).unwrap();
    assert_eq!(board.at(Coord::new(1, 2)), Cell::Miss);

    assert_eq!(board.at(Coord::new(-1, 0)), Cell::Empty);
    assert_eq!(board.at(Coord::new(4, 0)), Cell::Empty);
    assert_eq!(board.at(Coord::new(0, 3)), Cell::Empty);
    assert_eq!(
        board.mark(Coord::new(4, 0), Cell::Miss).unwrap_err(),
        ShooterError::OutOfBounds {
            at: Coord::new(4, 0)
        }
    );
}

#[test]
fn neighbour_block_keeps_its_centre_and_clips_at_the_rim() {
    let board = Board::new(10, 10).unwrap();

    let centre: Vec<Coord> = board.neighbours(Coord::new(5, 5)).collect();
    assert_eq!(centre.len(), 9);
    assert!(centre.contains(&Coord::new(5, 5)));
    assert!(centre.contains(&Coord::new(4, 4)));
    assert!(centre.contains(&Coord::new(6, 6)));

    let corner: Vec<Coord> = board.neighbours(Coord::new(0, 0)).collect();
    assert_eq!(corner.len(), 4);
    assert!(corner.contains(&Coord::new(0, 0)));

    let edge: Vec<Coord> = board.neighbours(Coord::new(0, 5)).collect();
    assert_eq!(edge.len(), 6);
}

#[test]
fn empty_runs_stop_at_marks_and_edges() {
    let mut board = Board::new(10, 10).unwrap();
    assert_eq!(board.empty_run(Coord::new(0, 0), Coord::new(1, 0)), 9);
    assert_eq!(board.empty_run(Coord::new(0, 0), Coord::new(-1, 0)), 0);
    assert_eq!(board.empty_run(Coord::new(3, 3), Coord::new(0, -1)), 3);

    board.mark(Coord::new(4, 0), Cell::Miss).unwrap();
    assert_eq!(board.empty_run(Coord::new(0, 0), Coord::new(1, 0)), 3);

    // the starting cell itself is never counted
    board.mark(Coord::new(0, 0), Cell::Ship).unwrap();
    assert_eq!(board.empty_run(Coord::new(0, 0), Coord::new(1, 0)), 3);
}
