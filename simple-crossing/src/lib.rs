//! A simple Frogger-style crossing game rendered into a pixel buffer.
//!
//! The player picks a character, then hops across five stone and grass rows towards the water
//! while bugs crawl along the stone rows. Touching a bug sends the player back to the start;
//! reaching the water wins the round, and a new crossing begins shortly after.
//!
//! The crate has no windowing dependencies. Drive it with one [`World::update`] and one
//! [`World::draw`] per displayed frame, and forward decoded key presses to
//! [`World::handle_input`].

#![deny(clippy::all)]
#![forbid(unsafe_code)]

use crate::collision::Collision;
use crate::enemy::Enemy;
use crate::geo::Point;
use crate::player::Player;
use crate::sprites::{blit, clear, SpriteRef};
use core::time::Duration;
use log::{debug, info};
use randomize::PCG32;

pub use crate::clock::Clock;
pub use crate::controls::{Direction, Input};
pub use crate::loader::{Assets, LoadError};
pub use crate::player::{Character, Crossing};
pub use crate::sprites::SpriteId;

mod art;
mod clock;
mod collision;
mod controls;
mod debug;
mod enemy;
mod font;
mod geo;
mod loader;
mod player;
mod sprites;

/// The screen width is constant (units are in pixels)
pub const WIDTH: usize = 505;
/// The screen height is constant (units are in pixels)
pub const HEIGHT: usize = 606;

/// How long the winning player stays on the water before a new crossing starts.
pub const RESPAWN_DELAY: Duration = Duration::from_millis(750);

// Board layout
const COL_WIDTH: f32 = 101.0;
const ROW_HEIGHT: f32 = 83.0;
const COLS: usize = 5;
const ROWS: usize = 6;
const ENEMIES: usize = 5;

/// Background tile for each row, top to bottom.
const ROW_SPRITES: [SpriteId; ROWS] = [
    SpriteId::WaterBlock,
    SpriteId::StoneBlock,
    SpriteId::StoneBlock,
    SpriteId::StoneBlock,
    SpriteId::GrassBlock,
    SpriteId::GrassBlock,
];

// Selection screen layout
const BOY_POS: Point = Point::new(COL_WIDTH, 3.0 * ROW_HEIGHT);
const GIRL_POS: Point = Point::new(3.0 * COL_WIDTH, 3.0 * ROW_HEIGHT);

// Colors
const WHITE: [u8; 4] = [255, 255, 255, 255];
const BLUE: [u8; 4] = [30, 60, 220, 255];
const BLACK: [u8; 4] = [0, 0, 0, 255];

#[derive(Debug)]
pub struct World {
    screen: Screen,
    collision: Collision,
    assets: Assets,
    prng: PCG32,
    debug: bool,
}

/// The two screens of the game. Selection always comes first.
#[derive(Debug)]
enum Screen {
    Selection(Selection),
    Playing(Round),
}

/// Which character is highlighted on the selection screen.
#[derive(Debug)]
struct Selection {
    boy_selected: bool,
}

/// Everything that lives for the duration of one game.
#[derive(Debug)]
struct Round {
    character: Character,
    player: Player,
    enemies: Vec<Enemy>,
    /// Time left until the winning player is replaced.
    respawn: Option<Duration>,
}

impl World {
    /// Create a new simple-crossing `World`, starting on the selection screen.
    ///
    /// # Arguments
    ///
    /// * `assets` - The sprite cache; see [`Assets::load`].
    /// * `seed` - Inputs for the pseudorandom number generator.
    /// * `debug` - Enable debug visualizations.
    ///
    /// # Example
    ///
    /// ```
    /// use byteorder::{ByteOrder, NativeEndian};
    /// use getrandom::getrandom;
    /// use simple_crossing::{Assets, World};
    ///
    /// // Create a seed for the PRNG
    /// let mut seed = [0_u8; 16];
    /// getrandom(&mut seed).expect("failed to getrandom");
    /// let seed = (
    ///     NativeEndian::read_u64(&seed[0..8]),
    ///     NativeEndian::read_u64(&seed[8..16]),
    /// );
    ///
    /// let world = World::new(Assets::builtin(), seed, false);
    /// assert!(!world.is_playing());
    /// ```
    pub fn new(assets: Assets, seed: (u64, u64), debug: bool) -> World {
        World {
            screen: Screen::Selection(Selection::default()),
            collision: Collision::default(),
            assets,
            prng: PCG32::seed(seed.0, seed.1),
            debug,
        }
    }

    /// `true` once a character has been chosen and the crossing is underway.
    pub fn is_playing(&self) -> bool {
        matches!(self.screen, Screen::Playing(_))
    }

    /// Update the internal state.
    ///
    /// # Arguments
    ///
    /// * `dt`: The time delta since last update.
    pub fn update(&mut self, dt: Duration) {
        // Clear the collision details
        self.collision.clear();

        let round = match &mut self.screen {
            Screen::Playing(round) => round,
            Screen::Selection(_) => return,
        };

        for enemy in round.enemies.iter_mut() {
            enemy.update(dt, &mut self.prng);
        }

        // Count down to the next crossing after a win
        if let Some(remaining) = round.respawn {
            match remaining.checked_sub(dt) {
                Some(remaining) if !remaining.is_zero() => round.respawn = Some(remaining),
                _ => {
                    info!("Starting a new crossing");
                    round.respawn = None;
                    round.player = Player::new(round.character, &mut self.prng);
                }
            }
        }

        // Handle collisions
        if self
            .collision
            .enemy_to_player(&round.enemies, &round.player)
        {
            debug!(
                "Player hit at ({}, {}) by enemies {:?}",
                round.player.pos.x, round.player.pos.y, self.collision.enemy_details
            );
            round.respawn = None;
            round.player = Player::new(round.character, &mut self.prng);
        }
    }

    /// Route a single input to the selection screen or to the player.
    ///
    /// Returns [`Crossing::Won`] when this input carried the player onto the water.
    pub fn handle_input(&mut self, input: Input) -> Crossing {
        let chosen = match &mut self.screen {
            Screen::Selection(selection) => match input {
                Input::Move(Direction::Left) => {
                    selection.boy_selected = true;
                    debug!("Highlighted {:?}", selection.character());
                    None
                }
                Input::Move(Direction::Right) => {
                    selection.boy_selected = false;
                    debug!("Highlighted {:?}", selection.character());
                    None
                }
                Input::Confirm => Some(selection.character()),
                Input::Move(_) => None,
            },
            Screen::Playing(round) => {
                if let Input::Move(direction) = input {
                    let crossing = round.player.handle_input(direction);
                    if crossing == Crossing::Won {
                        info!("{:?} crossed safely", round.character);
                        round.respawn = Some(RESPAWN_DELAY);
                    }

                    return crossing;
                }
                None
            }
        };

        if let Some(character) = chosen {
            self.start_game(character);
        }

        Crossing::InProgress
    }

    /// Abandon the current game and return to the selection screen.
    pub fn reset_game(&mut self) {
        info!("Returning to character selection");
        self.screen = Screen::Selection(Selection::default());
        self.collision.clear();
    }

    /// Draw the internal state to the screen.
    ///
    /// Calling this method more than once without an `update` call between is a no-op.
    pub fn draw(&self, screen: &mut [u8]) {
        // Clear the screen
        clear(screen, WHITE);

        match &self.screen {
            Screen::Selection(selection) => self.draw_selection(screen, selection),
            Screen::Playing(round) => self.draw_round(screen, round),
        }
    }

    fn start_game(&mut self, character: Character) {
        info!("Starting a new game as {:?}", character);

        let enemies = (0..ENEMIES).map(|_| Enemy::new(&mut self.prng)).collect();
        let player = Player::new(character, &mut self.prng);

        self.screen = Screen::Playing(Round {
            character,
            player,
            enemies,
            respawn: None,
        });
    }

    fn draw_selection(&self, screen: &mut [u8], selection: &Selection) {
        let center = WIDTH / 2;
        font::draw_text(screen, "Select a Player", center, 70, 4, BLUE);
        font::draw_text(screen, "Use Left and Right arrows, and then", center, 140, 2, BLACK);
        font::draw_text(screen, "press Space to start the game", center, 162, 2, BLACK);

        let selector = SpriteRef::new(&self.assets, SpriteId::Selector);
        let highlighted = if selection.boy_selected {
            BOY_POS
        } else {
            GIRL_POS
        };
        blit(screen, &highlighted, &selector);

        let boy = SpriteRef::new(&self.assets, SpriteId::CharBoy);
        let girl = SpriteRef::new(&self.assets, SpriteId::CharHornGirl);
        blit(screen, &BOY_POS, &boy);
        blit(screen, &GIRL_POS, &girl);
    }

    fn draw_round(&self, screen: &mut [u8], round: &Round) {
        // Draw the board
        for (row, &id) in ROW_SPRITES.iter().enumerate() {
            let tile = SpriteRef::new(&self.assets, id);
            for col in 0..COLS {
                let pos = Point::new(col as f32 * COL_WIDTH, row as f32 * ROW_HEIGHT);
                blit(screen, &pos, &tile);
            }
        }

        // Draw the enemies
        let bug = SpriteRef::new(&self.assets, SpriteId::EnemyBug);
        for enemy in round.enemies.iter() {
            blit(screen, &enemy.pos, &bug);
        }

        // Draw the player
        let player = SpriteRef::new(&self.assets, round.player.character.sprite());
        blit(screen, &round.player.pos, &player);

        // Draw debug information
        if self.debug {
            debug::draw_enemies(screen, &round.enemies, &self.collision);
            debug::draw_player(screen, &round.player, &self.collision);
        }
    }
}

/// Create a default `World` with a static PRNG seed and the built-in artwork.
impl Default for World {
    fn default() -> Self {
        let seed = (6_364_136_223_846_793_005, 1);

        World::new(Assets::builtin(), seed, false)
    }
}

impl Selection {
    fn character(&self) -> Character {
        if self.boy_selected {
            Character::Boy
        } else {
            Character::HornGirl
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Selection { boy_selected: true }
    }
}

/// Pick a uniformly distributed index in `0..len`.
pub(crate) fn random_index(prng: &mut PCG32, len: usize) -> usize {
    prng.next_u32() as usize % len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{Y_MAX, Y_MIN};

    fn round(world: &mut World) -> &mut Round {
        match &mut world.screen {
            Screen::Playing(round) => round,
            Screen::Selection(_) => panic!("Not playing"),
        }
    }

    fn pixel(screen: &[u8], x: usize, y: usize) -> [u8; 4] {
        let i = (x + y * WIDTH) * 4;
        [screen[i], screen[i + 1], screen[i + 2], screen[i + 3]]
    }

    /// Start a game and park every enemy off-screen so nothing can collide.
    fn quiet_world(character: Character) -> World {
        let mut world = World::default();
        if character == Character::HornGirl {
            let _ = world.handle_input(Input::Move(Direction::Right));
        }
        let _ = world.handle_input(Input::Confirm);

        for enemy in round(&mut world).enemies.iter_mut() {
            enemy.pos.x = -101.0;
            enemy.halted = true;
        }

        world
    }

    #[test]
    fn selection_defaults_to_boy() {
        let mut world = World::default();
        assert!(!world.is_playing());

        let _ = world.handle_input(Input::Confirm);

        assert!(world.is_playing());
        assert_eq!(round(&mut world).character, Character::Boy);
    }

    #[test]
    fn selection_toggles_with_left_and_right() {
        let mut world = World::default();

        let _ = world.handle_input(Input::Move(Direction::Right));
        let _ = world.handle_input(Input::Move(Direction::Up));
        let _ = world.handle_input(Input::Move(Direction::Down));
        assert!(!world.is_playing());

        let _ = world.handle_input(Input::Confirm);
        assert_eq!(round(&mut world).character, Character::HornGirl);
    }

    #[test]
    fn selection_can_switch_back() {
        let mut world = World::default();

        let _ = world.handle_input(Input::Move(Direction::Right));
        let _ = world.handle_input(Input::Move(Direction::Left));
        let _ = world.handle_input(Input::Confirm);

        assert_eq!(round(&mut world).character, Character::Boy);
    }

    #[test]
    fn new_game_has_five_enemies_and_a_player_at_the_start() {
        let mut world = World::default();
        let _ = world.handle_input(Input::Confirm);
        let round = round(&mut world);

        assert_eq!(round.enemies.len(), ENEMIES);
        assert_eq!(round.player.pos.y, Y_MAX);
        assert!(round.respawn.is_none());
    }

    #[test]
    fn update_is_a_no_op_while_selecting() {
        let mut world = World::default();
        world.update(Duration::from_secs(1));

        assert!(!world.is_playing());
    }

    #[test]
    fn enemies_move_on_update() {
        let mut world = World::default();
        let _ = world.handle_input(Input::Confirm);

        world.update(Duration::from_millis(100));

        for enemy in round(&mut world).enemies.iter() {
            assert!(enemy.pos.x > -101.0);
        }
    }

    #[test]
    fn confirm_is_ignored_while_playing() {
        let mut world = quiet_world(Character::HornGirl);
        let before = round(&mut world).player.pos;

        assert_eq!(world.handle_input(Input::Confirm), Crossing::InProgress);

        let round = round(&mut world);
        assert_eq!(round.player.pos, before);
        assert_eq!(round.character, Character::HornGirl);
    }

    #[test]
    fn win_then_respawn_after_delay() {
        let mut world = quiet_world(Character::Boy);

        let mut wins = 0;
        for _ in 0..ROWS {
            if world.handle_input(Input::Move(Direction::Up)) == Crossing::Won {
                wins += 1;
            }
        }
        assert_eq!(wins, 1);

        {
            let round = round(&mut world);
            assert_eq!(round.player.pos.y, Y_MIN);
            assert!(round.player.halted);
            assert_eq!(round.respawn, Some(RESPAWN_DELAY));
        }

        // Still waiting
        world.update(Duration::from_millis(700));
        assert_eq!(round(&mut world).player.pos.y, Y_MIN);

        // A new crossing begins
        world.update(Duration::from_millis(50));
        let round = round(&mut world);
        assert_eq!(round.player.pos.y, Y_MAX);
        assert!(!round.player.halted);
        assert!(round.respawn.is_none());
        assert_eq!(round.character, Character::Boy);
    }

    #[test]
    fn collision_sends_the_player_back() {
        let mut world = quiet_world(Character::Boy);

        {
            let round = round(&mut world);
            round.player.pos = Point::new(202.0, 134.0);
            round.enemies[3].pos = Point::new(180.0, 141.0);
        }

        world.update(Duration::ZERO);

        assert_eq!(world.collision.enemy_details, vec![3]);
        let round = round(&mut world);
        assert_eq!(round.player.pos.y, Y_MAX);
        assert_eq!(round.character, Character::Boy);
    }

    #[test]
    fn near_miss_keeps_the_player() {
        let mut world = quiet_world(Character::Boy);

        {
            let round = round(&mut world);
            round.player.pos = Point::new(202.0, 134.0);
            round.enemies[0].pos = Point::new(202.0, 224.0);
        }

        world.update(Duration::ZERO);

        assert!(world.collision.enemy_details.is_empty());
        assert_eq!(round(&mut world).player.pos, Point::new(202.0, 134.0));
    }

    #[test]
    fn reset_returns_to_selection() {
        let mut world = quiet_world(Character::HornGirl);
        world.reset_game();

        assert!(!world.is_playing());

        // The highlight is back on the boy
        let _ = world.handle_input(Input::Confirm);
        assert_eq!(round(&mut world).character, Character::Boy);
    }

    #[test]
    fn draw_selection_screen() {
        let world = World::default();
        let mut screen = vec![0; WIDTH * HEIGHT * 4];
        world.draw(&mut screen);

        assert_eq!(pixel(&screen, 0, 0), WHITE);
    }

    #[test]
    fn draw_board() {
        let world = quiet_world(Character::Boy);
        let mut screen = vec![0; WIDTH * HEIGHT * 4];
        world.draw(&mut screen);

        let (width, _, water) = art::generate(SpriteId::WaterBlock);
        let i = (60 * width) * 4;
        let expected = [water[i], water[i + 1], water[i + 2], water[i + 3]];

        assert_eq!(pixel(&screen, 0, 60), expected);
    }

    #[test]
    fn draw_debug_overlay() {
        let mut world = quiet_world(Character::Boy);
        world.debug = true;
        round(&mut world).player.pos = Point::new(0.0, Y_MAX);

        let mut screen = vec![0; WIDTH * HEIGHT * 4];
        world.draw(&mut screen);

        // The top-left corner of the player's hit box
        assert_eq!(pixel(&screen, 0, Y_MAX as usize), [0, 255, 0, 255]);
    }
}
