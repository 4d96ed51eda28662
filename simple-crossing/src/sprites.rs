use crate::geo::Point;
use crate::loader::Assets;
use crate::{HEIGHT, WIDTH};
use line_drawing::Bresenham;
use std::rc::Rc;

// This is the type stored in the `Assets` map
pub(crate) type CachedSprite = (usize, usize, Rc<[u8]>);

/// Identifies every image the game can draw.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum SpriteId {
    StoneBlock,
    WaterBlock,
    GrassBlock,
    EnemyBug,
    CharBoy,
    CharHornGirl,
    Selector,
}

/// SpriteRefs can be drawn.
///
/// They reference their pixel data in the asset cache (instead of owning it).
#[derive(Clone, Debug)]
pub(crate) struct SpriteRef {
    width: usize,
    height: usize,
    pixels: Rc<[u8]>,
}

/// Drawables can be blitted to the pixel buffer.
pub(crate) trait Drawable {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn pixels(&self) -> &[u8];
}

impl SpriteId {
    /// Every sprite the asset cache must resolve before the game starts.
    pub const ALL: [SpriteId; 7] = [
        SpriteId::StoneBlock,
        SpriteId::WaterBlock,
        SpriteId::GrassBlock,
        SpriteId::EnemyBug,
        SpriteId::CharBoy,
        SpriteId::CharHornGirl,
        SpriteId::Selector,
    ];

    /// The file name (without extension) used when loading this sprite from disk.
    pub fn file_stem(self) -> &'static str {
        match self {
            SpriteId::StoneBlock => "stone-block",
            SpriteId::WaterBlock => "water-block",
            SpriteId::GrassBlock => "grass-block",
            SpriteId::EnemyBug => "enemy-bug",
            SpriteId::CharBoy => "char-boy",
            SpriteId::CharHornGirl => "char-horn-girl",
            SpriteId::Selector => "Selector",
        }
    }
}

impl SpriteRef {
    pub(crate) fn new(assets: &Assets, id: SpriteId) -> SpriteRef {
        let (width, height, pixels) = assets.get(id);

        SpriteRef {
            width: *width,
            height: *height,
            pixels: Rc::clone(pixels),
        }
    }
}

impl Drawable for SpriteRef {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Fill the whole screen with a single color.
pub(crate) fn clear(screen: &mut [u8], color: [u8; 4]) {
    for pixel in screen.chunks_exact_mut(4) {
        pixel.copy_from_slice(&color);
    }
}

/// Blit a drawable to the pixel buffer.
///
/// The sprite is clipped against the screen edges, so `dest` may be partly (or entirely)
/// off-screen. Fully transparent sprite pixels leave the screen untouched.
pub(crate) fn blit<S>(screen: &mut [u8], dest: &Point, sprite: &S)
where
    S: Drawable,
{
    let pixels = sprite.pixels();
    let left = dest.x.round() as isize;
    let top = dest.y.round() as isize;

    for y in 0..sprite.height() {
        let sy = top + y as isize;
        if sy < 0 || sy >= HEIGHT as isize {
            continue;
        }

        for x in 0..sprite.width() {
            let sx = left + x as isize;
            if sx < 0 || sx >= WIDTH as isize {
                continue;
            }

            let s = (y * sprite.width() + x) * 4;
            let src = &pixels[s..s + 4];
            if src[3] == 0 {
                continue;
            }

            let i = (sx as usize + sy as usize * WIDTH) * 4;
            screen[i..i + 4].copy_from_slice(src);
        }
    }
}

/// Draw a line to the pixel buffer using Bresenham's algorithm.
///
/// Points outside of the screen are skipped.
pub(crate) fn line(screen: &mut [u8], p1: &Point, p2: &Point, color: [u8; 4]) {
    let p1 = (p1.x.round() as i64, p1.y.round() as i64);
    let p2 = (p2.x.round() as i64, p2.y.round() as i64);

    for (x, y) in Bresenham::new(p1, p2) {
        if x < 0 || y < 0 || x >= WIDTH as i64 || y >= HEIGHT as i64 {
            continue;
        }
        let i = (x as usize + y as usize * WIDTH) * 4;

        screen[i..i + 4].copy_from_slice(&color);
    }
}

/// Draw a rectangle to the pixel buffer using two points in opposite corners.
pub(crate) fn rect(screen: &mut [u8], p1: &Point, p2: &Point, color: [u8; 4]) {
    let p3 = Point::new(p1.x, p2.y);
    let p4 = Point::new(p2.x, p1.y);

    line(screen, p1, &p3, color);
    line(screen, &p3, p2, color);
    line(screen, p2, &p4, color);
    line(screen, &p4, p1, color);
}
