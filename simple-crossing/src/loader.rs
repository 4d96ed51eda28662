use crate::art;
use crate::sprites::{CachedSprite, SpriteId};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use thiserror::Error;

/// PCX images have no alpha channel; this color is treated as transparent.
const COLOR_KEY: [u8; 3] = [255, 0, 255];

/// All the ways in which loading sprite files can fail.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The sprite file exists but could not be read.
    #[error("Unable to read sprite file `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The sprite file is not a valid PCX image.
    #[error("Invalid PCX image in `{}`", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A list of assets loaded into memory.
///
/// Every `SpriteId` is always present, so lookups cannot fail.
#[derive(Debug)]
pub struct Assets {
    sprites: BTreeMap<SpriteId, CachedSprite>,
}

impl Assets {
    /// Create the asset cache from the built-in artwork only.
    pub fn builtin() -> Assets {
        let sprites = SpriteId::ALL
            .iter()
            .map(|&id| (id, art::generate(id)))
            .collect();

        Assets { sprites }
    }

    /// Load all sprites, preferring `<dir>/<file stem>.pcx` files when a directory is given.
    ///
    /// Missing files fall back to the built-in artwork. Files that exist but cannot be read or
    /// decoded are reported as errors.
    pub fn load(dir: Option<&Path>) -> Result<Assets, LoadError> {
        let dir = match dir {
            Some(dir) => dir,
            None => return Ok(Assets::builtin()),
        };

        let mut sprites = BTreeMap::new();
        for id in SpriteId::ALL {
            let path = dir.join(format!("{}.pcx", id.file_stem()));
            let sprite = match std::fs::read(&path) {
                Ok(data) => {
                    debug!("Loading sprite {:?} from `{}`", id, path.display());
                    load_pcx(&data).map_err(|source| LoadError::Decode {
                        path: path.clone(),
                        source,
                    })?
                }
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    warn!("Sprite `{}` not found, using built-in art", path.display());
                    art::generate(id)
                }
                Err(source) => return Err(LoadError::Io { path, source }),
            };
            sprites.insert(id, sprite);
        }

        Ok(Assets { sprites })
    }

    pub(crate) fn get(&self, id: SpriteId) -> &CachedSprite {
        &self.sprites[&id]
    }
}

impl Default for Assets {
    fn default() -> Self {
        Assets::builtin()
    }
}

/// Convert PCX data to raw RGBA pixels
fn load_pcx(pcx: &[u8]) -> io::Result<CachedSprite> {
    let mut reader = pcx::Reader::new(pcx)?;
    let width = reader.width() as usize;
    let height = reader.height() as usize;
    let mut rgb = Vec::with_capacity(width * height * 3);

    if reader.is_paletted() {
        // Read the raw pixel data
        let mut buffer = vec![0; width * height];
        for y in 0..height {
            let a = y * width;
            let b = a + width;
            reader.next_row_paletted(&mut buffer[a..b])?;
        }

        // Read the palette
        let palette_length = reader.palette_length().unwrap_or(256) as usize;
        let mut palette = vec![0; palette_length * 3];
        reader.read_palette(&mut palette)?;

        for pal in buffer {
            let i = pal as usize * 3;
            let color = palette.get(i..i + 3).ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidData, "palette index out of range")
            })?;
            rgb.extend_from_slice(color);
        }
    } else {
        let mut buffer = vec![0; width * 3];
        for _ in 0..height {
            reader.next_row_rgb(&mut buffer[..])?;
            rgb.extend_from_slice(&buffer);
        }
    }

    // Copy to result with an alpha component
    let pixels = rgb
        .chunks(3)
        .flat_map(|rgb| {
            let alpha = if rgb == COLOR_KEY { 0 } else { 255 };
            [rgb[0], rgb[1], rgb[2], alpha]
        })
        .collect::<Vec<u8>>();

    Ok((width, height, Rc::from(pixels)))
}
