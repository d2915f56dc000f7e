// Core value types shared by the overlay, the rasterizer and the camera host.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0xAARRGGBB; minifb ignores the alpha byte
}

impl FrameBuffer {
    /// A fully transparent layer. Visual: compositing it changes nothing.
    pub fn transparent(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// Full-buffer rectangle in surface coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }
}

/// Integer rectangle `{left, top, right, bottom}`.
///
/// Edges are pixel lines: the viewfinder treats `right`/`bottom` of a framing
/// rect as the last covered line, while fills are half-open (`left..right`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Horizontal midpoint, rounded toward zero like integer division.
    pub fn center_x(&self) -> i32 {
        (self.left + self.right) / 2
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Overlap of two rectangles, `None` when they do not intersect.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let r = Rect::new(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        );
        if r.is_empty() { None } else { Some(r) }
    }

    /// Shrink by `dx` on the left and right and `dy` on the top and bottom.
    pub fn inset(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.left + dx, self.top + dy, self.right - dx, self.bottom - dy)
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.left + dx, self.top + dy, self.right + dx, self.bottom + dy)
    }
}

/// A point on a stroked path (sub-pixel precision, like a vector path).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 0xAARRGGBB color. Written in config files as `#RRGGBB` or `#AARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0x0000_0000);

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn alpha(self) -> u8 { (self.0 >> 24) as u8 }
    pub const fn red(self) -> u8 { (self.0 >> 16) as u8 }
    pub const fn green(self) -> u8 { (self.0 >> 8) as u8 }
    pub const fn blue(self) -> u8 { self.0 as u8 }
}

impl FromStr for Color {
    type Err = Error;

    /// Parse `#RRGGBB` (opaque) or `#AARRGGBB`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| Error::InvalidColor(s.to_string()))?;
        // from_str_radix alone would take a leading '+'
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(s.to_string()));
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| Error::InvalidColor(s.to_string()))?;
        match hex.len() {
            6 => Ok(Color(0xFF00_0000 | value)),
            8 => Ok(Color(value)),
            _ => Err(Error::InvalidColor(s.to_string())),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}
