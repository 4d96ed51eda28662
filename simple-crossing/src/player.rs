use crate::controls::Direction;
use crate::geo::Point;
use crate::sprites::SpriteId;
use crate::{random_index, COLS, COL_WIDTH, ROWS, ROW_HEIGHT};
use randomize::PCG32;

// Vertical offset that centers the character sprite on a row
const Y_DISPLACEMENT: f32 = 32.0;

// Movement bounds
pub(crate) const X_MIN: f32 = 0.0;
pub(crate) const X_MAX: f32 = (COLS - 1) as f32 * COL_WIDTH;
pub(crate) const Y_MIN: f32 = -Y_DISPLACEMENT;
pub(crate) const Y_MAX: f32 = (ROWS - 1) as f32 * ROW_HEIGHT - Y_DISPLACEMENT;

/// The two playable character skins.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Character {
    Boy,
    HornGirl,
}

/// What a single step did to the crossing attempt.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[must_use]
pub enum Crossing {
    /// The player is still on the way (or could not move at all).
    InProgress,
    /// This step reached the water. Reported once per crossing.
    Won,
}

/// The player entity.
#[derive(Debug)]
pub(crate) struct Player {
    pub character: Character,
    pub pos: Point,
    pub halted: bool,
}

impl Character {
    pub(crate) fn sprite(self) -> SpriteId {
        match self {
            Character::Boy => SpriteId::CharBoy,
            Character::HornGirl => SpriteId::CharHornGirl,
        }
    }
}

impl Player {
    /// Create a player on the bottom row, in a random column.
    pub fn new(character: Character, prng: &mut PCG32) -> Self {
        let col = random_index(prng, COLS);
        let pos = Point::new(col as f32 * COL_WIDTH, Y_MAX);

        Player {
            character,
            pos,
            halted: false,
        }
    }

    /// Step one grid cell in `direction`, clamped to the board.
    ///
    /// Reaching the top row halts the player and reports [`Crossing::Won`].
    pub fn handle_input(&mut self, direction: Direction) -> Crossing {
        if self.halted {
            return Crossing::InProgress;
        }

        match direction {
            Direction::Up => {
                self.pos.y -= ROW_HEIGHT;
                if self.pos.y <= Y_MIN {
                    self.pos.y = Y_MIN;
                    self.halted = true;

                    return Crossing::Won;
                }
            }
            Direction::Down => self.pos.y = (self.pos.y + ROW_HEIGHT).min(Y_MAX),
            Direction::Left => self.pos.x = (self.pos.x - COL_WIDTH).max(X_MIN),
            Direction::Right => self.pos.x = (self.pos.x + COL_WIDTH).min(X_MAX),
        }

        Crossing::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prng() -> PCG32 {
        PCG32::seed(6_364_136_223_846_793_005, 1)
    }

    fn player_at(col: usize) -> Player {
        let mut player = Player::new(Character::Boy, &mut prng());
        player.pos.x = col as f32 * COL_WIDTH;

        player
    }

    #[test]
    fn bounds() {
        assert_eq!(X_MAX, 404.0);
        assert_eq!(Y_MIN, -32.0);
        assert_eq!(Y_MAX, 383.0);
    }

    #[test]
    fn starts_on_the_bottom_row_in_a_column() {
        let mut prng = prng();
        for _ in 0..50 {
            let player = Player::new(Character::HornGirl, &mut prng);

            assert_eq!(player.pos.y, Y_MAX);
            assert_eq!(player.pos.x % COL_WIDTH, 0.0);
            assert!(player.pos.x >= X_MIN && player.pos.x <= X_MAX);
            assert_eq!(player.character, Character::HornGirl);
        }
    }

    #[test]
    fn five_steps_up_win_once() {
        let mut player = player_at(2);

        for _ in 0..4 {
            assert_eq!(player.handle_input(Direction::Up), Crossing::InProgress);
        }
        assert_eq!(player.handle_input(Direction::Up), Crossing::Won);
        assert_eq!(player.pos.y, Y_MIN);
        assert!(player.halted);

        // Halted players ignore further input
        assert_eq!(player.handle_input(Direction::Up), Crossing::InProgress);
        assert_eq!(player.handle_input(Direction::Down), Crossing::InProgress);
        assert_eq!(player.pos, Point::new(2.0 * COL_WIDTH, Y_MIN));
    }

    #[test]
    fn right_at_the_edge_is_a_no_op() {
        let mut player = player_at(COLS - 1);

        assert_eq!(player.handle_input(Direction::Right), Crossing::InProgress);
        assert_eq!(player.pos.x, X_MAX);
    }

    #[test]
    fn left_and_down_clamp() {
        let mut player = player_at(0);

        let _ = player.handle_input(Direction::Left);
        let _ = player.handle_input(Direction::Down);

        assert_eq!(player.pos, Point::new(X_MIN, Y_MAX));
    }

    #[test]
    fn stays_in_bounds_for_any_input_sequence() {
        let directions = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];
        let mut prng = prng();

        for _ in 0..20 {
            let mut player = Player::new(Character::Boy, &mut prng);
            for _ in 0..100 {
                let direction = directions[random_index(&mut prng, directions.len())];
                let _ = player.handle_input(direction);

                assert!(player.pos.x >= X_MIN && player.pos.x <= X_MAX);
                assert!(player.pos.y >= Y_MIN && player.pos.y <= Y_MAX);
            }
        }
    }

    #[test]
    fn character_sprites() {
        assert_eq!(Character::Boy.sprite(), SpriteId::CharBoy);
        assert_eq!(Character::HornGirl.sprite(), SpriteId::CharHornGirl);
    }
}
