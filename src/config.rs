pub const BOARD_WIDTH: i32 = 10;
pub const BOARD_HEIGHT: i32 = 10;

/// The classic fleet: one four-decker, two cruisers, three destroyers and
/// four single-cell boats.
pub const FLEET: [i32; 10] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];
