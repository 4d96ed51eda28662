/// Semantic player inputs, already decoded from raw key codes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Input {
    /// Step the player (or move the selection highlight).
    Move(Direction),
    /// Confirm the highlighted character on the selection screen.
    Confirm,
}

/// The player moves one grid step at a time in any of the four directions.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    /// One row towards the water.
    Up,
    /// One row towards the start.
    Down,
    /// One column to the left.
    Left,
    /// One column to the right.
    Right,
}
