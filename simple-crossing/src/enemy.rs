use crate::geo::Point;
use crate::{random_index, COL_WIDTH, ROW_HEIGHT, WIDTH};
use core::time::Duration;
use randomize::PCG32;

/// Pixels per second at a speed factor of 1 (two columns per second).
pub(crate) const BASE_SPEED: f32 = 202.0;
/// Each enemy moves at one of these multiples of `BASE_SPEED`.
pub(crate) const SPEED_FACTORS: [f32; 5] = [0.5, 1.0, 1.5, 1.75, 2.0];

// Vertical offset that centers the bug sprite on a stone row
const Y_DISPLACEMENT: f32 = 25.0;
// Enemies only ever travel on the stone rows
const FIRST_LANE: usize = 1;
const LANES: usize = 3;

/// The enemy entity. Bugs crawl left-to-right across the stone rows.
#[derive(Debug)]
pub(crate) struct Enemy {
    pub pos: Point,
    pub speed_factor: f32,
    pub halted: bool,
}

impl Enemy {
    /// Create an enemy just off the left edge of the screen, on a random lane at a random speed.
    pub fn new(prng: &mut PCG32) -> Self {
        let pos = Point::new(-COL_WIDTH, random_lane(prng));
        let speed_factor = random_speed(prng);

        Enemy {
            pos,
            speed_factor,
            halted: false,
        }
    }

    /// Advance by the time delta, wrapping around to the left once past the right edge.
    pub fn update(&mut self, dt: Duration, prng: &mut PCG32) {
        if self.halted {
            return;
        }

        self.pos.x += BASE_SPEED * self.speed_factor * dt.as_secs_f32();

        if self.pos.x > WIDTH as f32 {
            self.speed_factor = random_speed(prng);
            self.pos = Point::new(-COL_WIDTH, random_lane(prng));
        }
    }
}

/// The y coordinate of each lane an enemy may travel on.
pub(crate) fn lanes() -> [f32; LANES] {
    let mut lanes = [0.0; LANES];
    for (i, lane) in lanes.iter_mut().enumerate() {
        *lane = (FIRST_LANE + i) as f32 * ROW_HEIGHT - Y_DISPLACEMENT;
    }

    lanes
}

fn random_lane(prng: &mut PCG32) -> f32 {
    lanes()[random_index(prng, LANES)]
}

fn random_speed(prng: &mut PCG32) -> f32 {
    SPEED_FACTORS[random_index(prng, SPEED_FACTORS.len())]
}
