// Drawing parameters for the viewfinder, resolved once at construction.
// Every field defaults to the classic scanner look. Values are taken as given:
// a negative width is drawn as a negative width, not rejected.

use crate::error::Result;
use crate::types::Color;
use serde::{Deserialize, Serialize};

// === Visual Defaults ===

pub const DEFAULT_MASK_COLOR: Color = Color(0x8C00_0000);
pub const DEFAULT_LASER_COLOR: Color = Color(0xFFD9_0000);
pub const DEFAULT_CORNER_COLOR: Color = Color(0xFFD9_0000);
pub const DEFAULT_BORDER_COLOR: Color = Color(0xFFDF_DFDF);
pub const DEFAULT_STATUS_TEXT_COLOR: Color = Color(0xFFB6_B0B0);

pub const DEFAULT_BORDER_WIDTH: f32 = 1.0;
pub const DEFAULT_CORNER_WIDTH: f32 = 3.0;
pub const DEFAULT_CORNER_LENGTH: f32 = 12.0;

pub const DEFAULT_STATUS_TEXT: &str = "Position the code inside the frame to scan automatically";
pub const DEFAULT_STATUS_TEXT_PADDING: f32 = 32.0;
pub const DEFAULT_STATUS_TEXT_SIZE: f32 = 24.0;

// === Animation Defaults ===

/// Pixels the scan line moves per tick.
pub const DEFAULT_SPEED: f32 = 5.0;
pub const DEFAULT_LASER_THICKNESS: i32 = 3;
pub const DEFAULT_LASER_PADDING: i32 = 10;

/// Delay between animation ticks, in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 5;

/// The overlay's look. Config keys are the field names (snake_case).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub mask_color: Color,
    pub laser_color: Color,
    pub corner_color: Color,
    pub border_color: Color,
    pub border_width: f32,
    pub corner_width: f32,
    pub corner_length: f32,
    pub status_text: String,
    pub status_text_color: Color,
    pub status_text_padding: f32,
    pub status_text_size: f32,
    pub speed: f32,
    pub laser_thickness: i32,
    pub laser_padding: i32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            mask_color: DEFAULT_MASK_COLOR,
            laser_color: DEFAULT_LASER_COLOR,
            corner_color: DEFAULT_CORNER_COLOR,
            border_color: DEFAULT_BORDER_COLOR,
            border_width: DEFAULT_BORDER_WIDTH,
            corner_width: DEFAULT_CORNER_WIDTH,
            corner_length: DEFAULT_CORNER_LENGTH,
            status_text: DEFAULT_STATUS_TEXT.to_string(),
            status_text_color: DEFAULT_STATUS_TEXT_COLOR,
            status_text_padding: DEFAULT_STATUS_TEXT_PADDING,
            status_text_size: DEFAULT_STATUS_TEXT_SIZE,
            speed: DEFAULT_SPEED,
            laser_thickness: DEFAULT_LASER_THICKNESS,
            laser_padding: DEFAULT_LASER_PADDING,
        }
    }
}

impl StyleConfig {
    /// Parse a style from a JSON object; absent keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Half the corner stroke, truncated to whole pixels.
    pub fn corner_half_width(&self) -> i32 {
        (self.corner_width / 2.0) as i32
    }
}
