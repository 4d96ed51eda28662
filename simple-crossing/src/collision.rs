//! Collision detection primitives.

use crate::enemy::Enemy;
use crate::geo::{Point, Rect};
use crate::player::Player;
use crate::{COL_WIDTH, ROW_HEIGHT};

/// Hit boxes are shrunk by `1 / COLLISION_FACTOR` of the sprite size, so sprites may overlap a
/// little before a hit registers.
const COLLISION_FACTOR: f32 = 3.0;

/// Store information about collisions (for debug mode).
#[derive(Debug, Default)]
pub(crate) struct Collision {
    /// Indices of the enemies that touched the player this frame.
    pub(crate) enemy_details: Vec<usize>,
}

/// The shrunk hit box for an entity at `pos`.
///
/// All entities share the grid cell size, regardless of the image drawn for them.
pub(crate) fn hit_box(pos: Point) -> Rect {
    Rect::from_size(
        pos,
        COL_WIDTH - COL_WIDTH / COLLISION_FACTOR,
        ROW_HEIGHT - ROW_HEIGHT / COLLISION_FACTOR,
    )
}

impl Collision {
    /// Clear the collision details.
    pub(crate) fn clear(&mut self) {
        self.enemy_details.clear();
    }

    /// Handle collisions between the enemies and the player.
    ///
    /// Returns `true` when any enemy touches the player.
    pub(crate) fn enemy_to_player(&mut self, enemies: &[Enemy], player: &Player) -> bool {
        let player_rect = hit_box(player.pos);

        for (i, enemy) in enemies.iter().enumerate() {
            if hit_box(enemy.pos).intersects(player_rect) {
                self.enemy_details.push(i);
            }
        }

        !self.enemy_details.is_empty()
    }
}
