// Paints one viewfinder frame: mask, border, corner accents, scan line and
// status caption.
// Framing rects use inclusive edges: the frame covers pixel lines
// left..=right and top..=bottom, so the mask and the right/bottom corner
// anchors sit at right + 1 / bottom + 1.

use crate::canvas::{Canvas, Stroke};
use crate::clock::AnimationClock;
use crate::laser::Laser;
use crate::style::StyleConfig;
use crate::types::{PointF, Rect};
use log::debug;

/// One of the four frame corners that carry an L-shaped accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [Corner::TopLeft, Corner::TopRight, Corner::BottomLeft, Corner::BottomRight];

    /// Direction the accent's arms point in: +1 towards right/bottom.
    pub fn signs(self) -> (i32, i32) {
        match self {
            Corner::TopLeft => (1, 1),
            Corner::TopRight => (-1, 1),
            Corner::BottomLeft => (1, -1),
            Corner::BottomRight => (-1, -1),
        }
    }

    /// Outer corner point of the frame this accent hugs.
    pub fn anchor(self, frame: Rect) -> (i32, i32) {
        match self {
            Corner::TopLeft => (frame.left, frame.top),
            Corner::TopRight => (frame.right + 1, frame.top),
            Corner::BottomLeft => (frame.left, frame.bottom + 1),
            Corner::BottomRight => (frame.right + 1, frame.bottom + 1),
        }
    }
}

/// The darkened backdrop: above, left of, right of and below the frame.
pub fn mask_rects(frame: Rect, width: i32, height: i32) -> [Rect; 4] {
    [
        Rect::new(0, 0, width, frame.top),
        Rect::new(0, frame.top, frame.left, frame.bottom + 1),
        Rect::new(frame.right + 1, frame.top, width, frame.bottom + 1),
        Rect::new(0, frame.bottom + 1, width, height),
    ]
}

/// Pixels inside the frame (the hole in the mask), as a half-open rect.
pub fn frame_interior(frame: Rect) -> Rect {
    Rect::new(frame.left, frame.top, frame.right + 1, frame.bottom + 1)
}

/// Border outline, pulled in one pixel on the top/left so it does not
/// overdraw the mask edge.
pub fn border_rect(frame: Rect) -> Rect {
    Rect::new(frame.left + 1, frame.top + 1, frame.right, frame.bottom)
}

/// The accent at `corner`: vertical arm, corner point, horizontal arm.
/// The whole shape is moved `half_width` inwards on both axes so the stroke is
/// centred on the frame edge instead of sticking out of it.
pub fn corner_path(frame: Rect, corner: Corner, length: f32, half_width: i32) -> [PointF; 3] {
    let (ax, ay) = corner.anchor(frame);
    let (sx, sy) = corner.signs();
    let (sx, sy) = (sx as f32, sy as f32);
    let x = ax as f32 + sx * half_width as f32;
    let y = ay as f32 + sy * half_width as f32;
    [
        PointF::new(x, y + sy * length),
        PointF::new(x, y),
        PointF::new(x + sx * length, y),
    ]
}

/// Where the scan line is drawn for a given animation offset.
pub fn laser_rect(frame: Rect, offset: f32, padding: i32, thickness: i32) -> Rect {
    let top = frame.top + offset as i32;
    Rect::new(frame.left + padding, top, frame.right - padding, top + thickness)
}

/// Centre x and baseline y of the status caption.
pub fn status_text_anchor(frame: Rect, style: &StyleConfig) -> (f32, f32) {
    (
        frame.center_x() as f32,
        frame.bottom as f32 + style.status_text_padding + style.status_text_size,
    )
}

pub struct OverlayRenderer {
    style: StyleConfig,
    clock: AnimationClock,
    laser: Option<Laser>,
}

impl OverlayRenderer {
    /// `laser: None` means the scan line is skipped (e.g. its asset failed to load).
    pub fn new(style: StyleConfig, laser: Option<Laser>) -> Self {
        let clock = AnimationClock::from_style(&style);
        Self { style, clock, laser }
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn set_status_text(&mut self, text: impl Into<String>) {
        self.style.status_text = text.into();
    }

    /// Paint the overlay for `frame`. Returns the frame whenever one is known,
    /// even on an empty surface where nothing is drawn, so the caller keeps
    /// scheduling ticks. `None` means there is no frame yet.
    pub fn paint(&mut self, canvas: &mut dyn Canvas, frame: Option<Rect>) -> Option<Rect> {
        let frame = frame?;
        let (width, height) = (canvas.width(), canvas.height());
        if width <= 0 || height <= 0 {
            debug!("overlay surface is {width}x{height}, nothing to draw");
            return Some(frame);
        }
        let style = &self.style;

        // 1) Mask everything outside the frame.
        for rect in mask_rects(frame, width, height) {
            canvas.fill_rect(rect, style.mask_color);
        }

        // 2) Thin border around the frame.
        canvas.stroke_rect(border_rect(frame), Stroke::new(style.border_color, style.border_width));

        // 3) Four L-shaped corner accents.
        let corner_stroke = Stroke::new(style.corner_color, style.corner_width);
        let half = style.corner_half_width();
        for corner in Corner::ALL {
            canvas.stroke_polyline(&corner_path(frame, corner, style.corner_length, half), corner_stroke);
        }

        // 4) Advance and draw the scan line.
        let offset = self.clock.tick(frame.height() as f32);
        let rect = laser_rect(frame, offset, self.clock.laser_padding(), self.clock.laser_thickness());
        match &self.laser {
            Some(Laser::Image(img)) => canvas.draw_image(img, rect),
            Some(Laser::Solid) => canvas.fill_rect(rect, style.laser_color),
            None => {}
        }

        // 5) Caption under the frame.
        let (cx, baseline) = status_text_anchor(frame, style);
        canvas.draw_text_centered(&style.status_text, cx, baseline, style.status_text_size, style.status_text_color);

        Some(frame)
    }
}
