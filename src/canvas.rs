// The drawing surface the overlay paints onto.
// The renderer only knows this trait. RasterCanvas (draw.rs) implements it
// over a pixel layer; tests implement it with a recorder.

use crate::types::{Color, PointF, Rect};
use image::RgbaImage;

/// Pen for outlines. Strokes are centred on the geometry they follow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

pub trait Canvas {
    fn width(&self) -> i32;
    fn height(&self) -> i32;

    /// Fill `left..right × top..bottom` with `color` (alpha blended).
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Outline `rect` with the stroke centred on its edges.
    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke);

    /// Stroke an open path through `points`.
    fn stroke_polyline(&mut self, points: &[PointF], stroke: Stroke);

    /// Stretch `image` to cover `dst`.
    fn draw_image(&mut self, image: &RgbaImage, dst: Rect);

    /// Draw one line of text centred on `center_x`, sitting on `baseline`.
    fn draw_text_centered(&mut self, text: &str, center_x: f32, baseline: f32, size: f32, color: Color);
}
