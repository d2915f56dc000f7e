// Scan-line animation state: a single offset that walks down the frame and
// jumps back to the top (a sawtooth, never a bounce).

use crate::style::StyleConfig;

#[derive(Debug, Clone)]
pub struct AnimationClock {
    offset: f32,          // distance of the scan line below the frame's top edge
    speed: f32,           // pixels per tick
    laser_thickness: i32,
    laser_padding: i32,
}

impl AnimationClock {
    pub fn new(speed: f32, laser_thickness: i32, laser_padding: i32) -> Self {
        Self { offset: 0.0, speed, laser_thickness, laser_padding }
    }

    pub fn from_style(style: &StyleConfig) -> Self {
        Self::new(style.speed, style.laser_thickness, style.laser_padding)
    }

    /// Advance one step. Reaching the frame height (`>=`) wraps to 0.
    /// Visual: the laser moves `speed` pixels down, or restarts at the top.
    pub fn tick(&mut self, frame_height: f32) -> f32 {
        self.offset += self.speed;
        if self.offset >= frame_height {
            self.offset = 0.0;
        }
        self.offset
    }

    pub fn offset(&self) -> f32 { self.offset }
    pub fn speed(&self) -> f32 { self.speed }
    pub fn laser_thickness(&self) -> i32 { self.laser_thickness }
    pub fn laser_padding(&self) -> i32 { self.laser_padding }
}
