//! Shared test doubles: a canvas that records calls and a preview provider
//! with settable rects.
#![allow(dead_code)]

use image::RgbaImage;
use scan_viewfinder::{Canvas, Color, PointF, PreviewProvider, Rect, Stroke};
use std::cell::Cell;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    FillRect(Rect, Color),
    StrokeRect(Rect, Stroke),
    Polyline(Vec<PointF>, Stroke),
    Image(Rect),
    Text { text: String, center_x: f32, baseline: f32, size: f32, color: Color },
}

pub struct RecordingCanvas {
    pub width: i32,
    pub height: i32,
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, calls: Vec::new() }
    }

    pub fn fills(&self) -> Vec<(Rect, Color)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::FillRect(r, col) => Some((*r, *col)),
                _ => None,
            })
            .collect()
    }

    pub fn polylines(&self) -> Vec<Vec<PointF>> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Polyline(p, _) => Some(p.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn images(&self) -> Vec<Rect> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Image(r) => Some(*r),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::FillRect(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        self.calls.push(DrawCall::StrokeRect(rect, stroke));
    }

    fn stroke_polyline(&mut self, points: &[PointF], stroke: Stroke) {
        self.calls.push(DrawCall::Polyline(points.to_vec(), stroke));
    }

    fn draw_image(&mut self, _image: &RgbaImage, dst: Rect) {
        self.calls.push(DrawCall::Image(dst));
    }

    fn draw_text_centered(&mut self, text: &str, center_x: f32, baseline: f32, size: f32, color: Color) {
        self.calls.push(DrawCall::Text { text: text.to_string(), center_x, baseline, size, color });
    }
}

/// Preview provider whose rects the test controls.
#[derive(Default)]
pub struct FakePreview {
    pub framing: Cell<Option<Rect>>,
    pub preview: Cell<Option<Rect>>,
}

impl FakePreview {
    pub fn with(framing: Option<Rect>, preview: Option<Rect>) -> Self {
        Self { framing: Cell::new(framing), preview: Cell::new(preview) }
    }

    pub fn set(&self, framing: Option<Rect>, preview: Option<Rect>) {
        self.framing.set(framing);
        self.preview.set(preview);
    }
}

impl PreviewProvider for FakePreview {
    fn framing_rect(&self) -> Option<Rect> {
        self.framing.get()
    }

    fn preview_framing_rect(&self) -> Option<Rect> {
        self.preview.get()
    }
}

/// The frame used throughout the scenarios: 200 wide, 200 tall.
pub const FRAME: Rect = Rect::new(100, 200, 300, 400);
pub const PREVIEW_FRAME: Rect = Rect::new(50, 100, 150, 200);
