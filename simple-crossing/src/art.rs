//! Built-in procedural sprites.
//!
//! Used whenever no image file is available for a sprite. Every sprite is 101x171 pixels, the
//! same size as the classic block and character artwork, so positions line up either way.

use crate::sprites::{CachedSprite, SpriteId};
use std::rc::Rc;

const SPRITE_WIDTH: usize = 101;
const SPRITE_HEIGHT: usize = 171;

// The visible top face of a block starts this far down the image
const FACE_TOP: usize = 50;
const FACE_BOTTOM: usize = FACE_TOP + 83;

/// Scratch buffer for drawing a single sprite.
struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Canvas {
    fn new() -> Canvas {
        Canvas {
            width: SPRITE_WIDTH,
            height: SPRITE_HEIGHT,
            pixels: vec![0; SPRITE_WIDTH * SPRITE_HEIGHT * 4],
        }
    }

    fn put(&mut self, x: usize, y: usize, color: [u8; 4]) {
        if x < self.width && y < self.height {
            let i = (x + y * self.width) * 4;
            self.pixels[i..i + 4].copy_from_slice(&color);
        }
    }

    /// Fill the half-open rectangle `[x0, x1) x [y0, y1)`.
    fn fill_rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, color: [u8; 4]) {
        for y in y0..y1 {
            for x in x0..x1 {
                self.put(x, y, color);
            }
        }
    }

    fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, color: [u8; 4]) {
        let x0 = (cx - rx).floor().max(0.0) as usize;
        let y0 = (cy - ry).floor().max(0.0) as usize;
        let x1 = (cx + rx).ceil() as usize;
        let y1 = (cy + ry).ceil() as usize;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = (x as f32 + 0.5 - cx) / rx;
                let dy = (y as f32 + 0.5 - cy) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Fill an upward-pointing triangle with its apex at `(cx, top)`.
    fn fill_spike(&mut self, cx: usize, top: usize, half_width: usize, height: usize, color: [u8; 4]) {
        for row in 0..height {
            let spread = half_width * row / height.max(1);
            self.fill_rect(cx - spread, top + row, cx + spread + 1, top + row + 1, color);
        }
    }

    fn finish(self) -> CachedSprite {
        (self.width, self.height, Rc::from(self.pixels))
    }
}

/// Generate the built-in artwork for `id`.
pub(crate) fn generate(id: SpriteId) -> CachedSprite {
    match id {
        SpriteId::StoneBlock => block([150, 150, 150, 255], [105, 105, 110, 255], stone_detail),
        SpriteId::WaterBlock => block([70, 130, 230, 255], [45, 90, 170, 255], water_detail),
        SpriteId::GrassBlock => block([100, 190, 80, 255], [120, 85, 50, 255], grass_detail),
        SpriteId::EnemyBug => bug(),
        SpriteId::CharBoy => character(false),
        SpriteId::CharHornGirl => character(true),
        SpriteId::Selector => selector(),
    }
}

fn block(face: [u8; 4], side: [u8; 4], detail: fn(&mut Canvas)) -> CachedSprite {
    let mut canvas = Canvas::new();
    canvas.fill_rect(0, FACE_TOP, SPRITE_WIDTH, FACE_BOTTOM, face);
    canvas.fill_rect(0, FACE_BOTTOM, SPRITE_WIDTH, SPRITE_HEIGHT, side);
    detail(&mut canvas);

    canvas.finish()
}

fn stone_detail(canvas: &mut Canvas) {
    let mortar = [125, 125, 130, 255];
    for y in [FACE_TOP + 27, FACE_TOP + 55] {
        canvas.fill_rect(0, y, SPRITE_WIDTH, y + 2, mortar);
    }
    for (i, x) in [25, 75].iter().enumerate() {
        let y = FACE_TOP + i * 28;
        canvas.fill_rect(*x, y, x + 2, y + 27, mortar);
    }
}

fn water_detail(canvas: &mut Canvas) {
    let crest = [140, 190, 250, 255];
    for (i, y) in [FACE_TOP + 15, FACE_TOP + 40, FACE_TOP + 65].iter().enumerate() {
        let offset = i * 17;
        for x in (offset..SPRITE_WIDTH).step_by(34) {
            canvas.fill_rect(x, *y, x + 14, y + 3, crest);
        }
    }
}

fn grass_detail(canvas: &mut Canvas) {
    let blade = [70, 150, 55, 255];
    for i in 0..12 {
        let x = (i * 37) % SPRITE_WIDTH;
        let y = FACE_TOP + 6 + (i * 23) % 72;
        canvas.fill_rect(x, y, x + 2, y + 5, blade);
    }
}

fn bug() -> CachedSprite {
    let mut canvas = Canvas::new();
    let legs = [40, 20, 20, 255];
    for x in [30, 50, 70] {
        canvas.fill_rect(x, 90, x + 3, 135, legs);
    }
    canvas.fill_ellipse(45.0, 112.0, 40.0, 22.0, [210, 35, 35, 255]);
    canvas.fill_rect(44, 92, 46, 132, [120, 15, 15, 255]);
    canvas.fill_ellipse(86.0, 112.0, 14.0, 14.0, [45, 20, 20, 255]);
    canvas.fill_ellipse(91.0, 106.0, 4.0, 4.0, [240, 240, 240, 255]);
    canvas.fill_ellipse(91.0, 118.0, 4.0, 4.0, [240, 240, 240, 255]);

    canvas.finish()
}

fn character(horn: bool) -> CachedSprite {
    let mut canvas = Canvas::new();
    let skin = [250, 205, 165, 255];
    let (outfit, hair) = if horn {
        ([220, 80, 160, 255], [250, 200, 60, 255])
    } else {
        ([60, 110, 200, 255], [110, 70, 35, 255])
    };

    // Body and legs
    canvas.fill_rect(38, 118, 63, 148, outfit);
    canvas.fill_rect(40, 148, 48, 160, [60, 60, 60, 255]);
    canvas.fill_rect(53, 148, 61, 160, [60, 60, 60, 255]);

    // Head and hair
    canvas.fill_ellipse(50.5, 98.0, 22.0, 21.0, skin);
    canvas.fill_ellipse(50.5, 84.0, 22.0, 9.0, hair);
    if horn {
        canvas.fill_spike(50, 58, 5, 20, [245, 245, 245, 255]);
    }

    // Eyes
    canvas.fill_rect(41, 97, 45, 102, [30, 30, 30, 255]);
    canvas.fill_rect(56, 97, 60, 102, [30, 30, 30, 255]);

    canvas.finish()
}

fn selector() -> CachedSprite {
    let mut canvas = Canvas::new();
    canvas.fill_rect(0, FACE_TOP, SPRITE_WIDTH, FACE_BOTTOM, [250, 215, 70, 255]);
    canvas.fill_rect(0, FACE_BOTTOM, SPRITE_WIDTH, SPRITE_HEIGHT, [200, 160, 40, 255]);
    canvas.fill_rect(6, FACE_TOP + 6, SPRITE_WIDTH - 6, FACE_BOTTOM - 6, [255, 235, 130, 255]);

    canvas.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sprite_has_the_standard_size() {
        for id in SpriteId::ALL {
            let (width, height, pixels) = generate(id);

            assert_eq!(width, SPRITE_WIDTH, "{:?} width", id);
            assert_eq!(height, SPRITE_HEIGHT, "{:?} height", id);
            assert_eq!(pixels.len(), width * height * 4, "{:?} pixels", id);
        }
    }

    #[test]
    fn blocks_leave_the_top_transparent() {
        let (width, _, pixels) = generate(SpriteId::StoneBlock);

        // Above the top face
        assert_eq!(pixels[3], 0);
        // Inside the top face
        let i = (10 + (FACE_TOP + 10) * width) * 4;
        assert_eq!(pixels[i + 3], 255);
    }

    #[test]
    fn characters_differ() {
        let (_, _, boy) = generate(SpriteId::CharBoy);
        let (_, _, girl) = generate(SpriteId::CharHornGirl);

        assert_ne!(boy, girl);
    }
}
