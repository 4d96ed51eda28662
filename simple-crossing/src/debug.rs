use crate::collision::{hit_box, Collision};
use crate::enemy::Enemy;
use crate::player::Player;
use crate::sprites::rect;

// Colors
const RED: [u8; 4] = [255, 0, 0, 255];
const GREEN: [u8; 4] = [0, 255, 0, 255];

/// Draw hit boxes for each enemy.
pub(crate) fn draw_enemies(screen: &mut [u8], enemies: &[Enemy], collision: &Collision) {
    for (i, enemy) in enemies.iter().enumerate() {
        let hit = hit_box(enemy.pos);

        // Select color based on collisions
        let color = if collision.enemy_details.contains(&i) {
            RED
        } else {
            GREEN
        };

        rect(screen, &hit.p1, &hit.p2, color);
    }
}

/// Draw hit box for player.
pub(crate) fn draw_player(screen: &mut [u8], player: &Player, collision: &Collision) {
    let hit = hit_box(player.pos);

    let color = if collision.enemy_details.is_empty() {
        GREEN
    } else {
        RED
    };

    rect(screen, &hit.p1, &hit.p2, color);
}
