// The scan line's look: an image stretched into the laser rect, or a plain
// fill of the laser color when no image is wanted.

use crate::error::Result;
use crate::types::Color;
use image::{Rgba, RgbaImage};
use log::{info, warn};
use std::path::Path;

/// Width of the generated gradient strip before it is stretched.
const GRADIENT_WIDTH: u32 = 64;

pub enum Laser {
    Image(RgbaImage),
    Solid,
}

impl Laser {
    /// Decode a laser image from disk (PNG, JPEG, ... whatever `image` reads).
    pub fn load(path: &Path) -> Result<Laser> {
        let img = image::open(path)?.to_rgba8();
        info!("laser asset {} ({}x{})", path.display(), img.width(), img.height());
        Ok(Laser::Image(img))
    }

    /// Resolve the configured asset. No path gives the built-in gradient.
    /// A path that fails to load gives `None`: the overlay then skips the laser
    /// instead of failing.
    pub fn resolve(path: Option<&Path>, color: Color) -> Option<Laser> {
        match path {
            None => Some(Laser::gradient(color)),
            Some(p) => match Laser::load(p) {
                Ok(laser) => Some(laser),
                Err(e) => {
                    warn!("laser asset unavailable, drawing without scan line: {e}");
                    None
                }
            },
        }
    }

    /// A horizontal strip of `color` that fades out towards both ends.
    /// Visual: a glowing line brightest in the middle of the frame.
    pub fn gradient(color: Color) -> Laser {
        let mid = (GRADIENT_WIDTH - 1) as f32 / 2.0;
        let img = RgbaImage::from_fn(GRADIENT_WIDTH, 1, |x, _| {
            let t = 1.0 - ((x as f32 - mid).abs() / mid);
            let a = (color.alpha() as f32 * t).round().clamp(0.0, 255.0) as u8;
            Rgba([color.red(), color.green(), color.blue(), a])
        });
        Laser::Image(img)
    }
}
