// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows your live camera image.
// 2) A transparent overlay layer the viewfinder paints into (mask, frame, laser, caption).
// 3) Compositing that layer over each camera frame in linear light.

use crate::canvas::{Canvas, Stroke};
use crate::error::{Error, Result};
use crate::gamma::GammaLut;
use crate::scheduler::RedrawRegion;
use crate::types::{Color, FrameBuffer, PointF, Rect};
use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::imageops::{self, FilterType};
use image::RgbaImage;
use std::borrow::Cow;

#[cfg(feature = "app")]
pub use window::Drawer;

#[cfg(feature = "app")]
mod window {
    use crate::error::Error;
    use crate::types::FrameBuffer;
    use minifb::{Key, Window, WindowOptions};

    pub struct Drawer {
        window: Window, // the on-screen window you see
    }

    impl Drawer {
        /// Create a window sized to the camera feed.
        /// Visual: a new empty window appears with your chosen title.
        pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
            let window = Window::new(title, width, height, WindowOptions::default())
                .map_err(|e| Error::WindowInit(e.to_string()))?;
            Ok(Self { window })
        }

        /// Push the pixels for this frame to the screen.
        /// Visual: the window immediately displays the new image (live video + overlay).
        pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
            self.window
                .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
                .map_err(|e| Error::WindowUpdate(e.to_string()))?;
            Ok(())
        }

        /// Returns false when the user closes the window (so we can stop the loop).
        pub fn is_open(&self) -> bool {
            self.window.is_open()
        }

        /// True while ESC is held down (we'll exit when this is pressed).
        pub fn esc_pressed(&self) -> bool {
            self.window.is_key_down(Key::Escape)
        }
    }
}

/* ---------- Software canvas over an ARGB layer ---------- */

/// Paints into a straight-alpha 0xAARRGGBB layer. Everything is clipped to the
/// redraw region, and that region is cleared to transparent up front.
pub struct RasterCanvas<'a> {
    layer: &'a mut FrameBuffer,
    clip: Rect,
}

impl<'a> RasterCanvas<'a> {
    pub fn new(layer: &'a mut FrameBuffer, region: RedrawRegion) -> Self {
        let bounds = layer.bounds();
        let clip = match region {
            RedrawRegion::Full => bounds,
            RedrawRegion::Region(r) => r.intersect(&bounds).unwrap_or_default(),
        };
        let mut canvas = Self { layer, clip };
        canvas.clear_clip();
        canvas
    }

    pub fn clip(&self) -> Rect {
        self.clip
    }

    fn clear_clip(&mut self) {
        let w = self.layer.width;
        for y in self.clip.top..self.clip.bottom {
            let row = y as usize * w;
            self.layer.pixels[row + self.clip.left as usize..row + self.clip.right as usize].fill(0);
        }
    }

    /// Blend `color` over the layer pixel at (x,y) if it is inside the clip.
    /// Visual: the exact pixel at (x,y) takes on the color, respecting alpha.
    #[inline]
    fn blend_pixel(&mut self, x: i32, y: i32, color: Color) {
        if !self.clip.contains(x, y) {
            return;
        }
        let idx = y as usize * self.layer.width + x as usize;
        self.layer.pixels[idx] = blend_over(self.layer.pixels[idx], color);
    }

    fn fill_clipped(&mut self, rect: Rect, color: Color) {
        let Some(r) = rect.intersect(&self.clip) else { return };
        for y in r.top..r.bottom {
            for x in r.left..r.right {
                self.blend_pixel(x, y, color);
            }
        }
    }
}

impl Canvas for RasterCanvas<'_> {
    fn width(&self) -> i32 {
        self.layer.width as i32
    }

    fn height(&self) -> i32 {
        self.layer.height as i32
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fill_clipped(rect, color);
    }

    /// Outline centred on the edges. Widths up to 1 draw a hairline on the
    /// edge pixels themselves.
    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        let c = stroke.color;
        if stroke.width <= 1.0 {
            let Rect { left: l, top: t, right: r, bottom: b } = rect;
            self.fill_clipped(Rect::new(l, t, r + 1, t + 1), c);
            self.fill_clipped(Rect::new(l, b, r + 1, b + 1), c);
            self.fill_clipped(Rect::new(l, t + 1, l + 1, b), c);
            self.fill_clipped(Rect::new(r, t + 1, r + 1, b), c);
            return;
        }

        let half = stroke.width / 2.0;
        let edge = |v: i32, d: f32| (v as f32 + d).round() as i32;
        let outer = Rect::new(edge(rect.left, -half), edge(rect.top, -half), edge(rect.right, half), edge(rect.bottom, half));
        let inner = Rect::new(edge(rect.left, half), edge(rect.top, half), edge(rect.right, -half), edge(rect.bottom, -half));
        if inner.is_empty() {
            self.fill_clipped(outer, c);
            return;
        }
        self.fill_clipped(Rect::new(outer.left, outer.top, outer.right, inner.top), c);
        self.fill_clipped(Rect::new(outer.left, inner.bottom, outer.right, outer.bottom), c);
        self.fill_clipped(Rect::new(outer.left, inner.top, inner.left, inner.bottom), c);
        self.fill_clipped(Rect::new(inner.right, inner.top, outer.right, inner.bottom), c);
    }

    /// A square pen of the stroke width walks each segment. Coverage is kept
    /// as one column span per clip row, so the work is bounded by the clip and
    /// overlapping stamps do not double up translucent colors.
    fn stroke_polyline(&mut self, points: &[PointF], stroke: Stroke) {
        let clip = self.clip;
        if clip.is_empty() || points.len() < 2 {
            return;
        }
        let size = (stroke.width.round() as i64).clamp(1, i32::MAX as i64);
        let lo = (size - 1) / 2;
        let (cl, ct, cr, cb) = (clip.left as i64, clip.top as i64, clip.right as i64, clip.bottom as i64);
        let rows = (cb - ct) as usize;

        let mut covered: Vec<Vec<(i64, i64)>> = vec![Vec::new(); rows];
        let mut centres: Vec<Option<(i64, i64)>> = vec![None; rows];
        for seg in points.windows(2) {
            centres.fill(None);
            let (x0, y0) = (seg[0].x.round() as i32 as i64, seg[0].y.round() as i32 as i64);
            let (x1, y1) = (seg[1].x.round() as i32 as i64, seg[1].y.round() as i32 as i64);
            for_each_line_pixel(x0, y0, x1, y1, |x, y| {
                for row in (y - lo).max(ct)..(y - lo + size).min(cb) {
                    let span = &mut centres[(row - ct) as usize];
                    *span = Some(match *span {
                        Some((a, b)) => (a.min(x), b.max(x)),
                        None => (x, x),
                    });
                }
            });
            // one segment's stamps on a row are contiguous
            for (row, span) in covered.iter_mut().zip(&centres) {
                if let Some((a, b)) = *span {
                    let (l, r) = ((a - lo).max(cl), (b - lo + size).min(cr));
                    if l < r {
                        row.push((l, r));
                    }
                }
            }
        }

        for (i, spans) in covered.iter_mut().enumerate() {
            spans.sort_unstable();
            let y = (ct + i as i64) as i32;
            let mut done = cl;
            for &(l, r) in spans.iter() {
                for x in l.max(done)..r {
                    self.blend_pixel(x as i32, y, stroke.color);
                }
                done = done.max(r);
            }
        }
    }

    fn draw_image(&mut self, image: &RgbaImage, dst: Rect) {
        if dst.is_empty() || image.width() == 0 || image.height() == 0 {
            return;
        }
        let Some(visible) = dst.intersect(&self.clip) else { return };
        let (dw, dh) = (dst.width() as u32, dst.height() as u32);
        let scaled: Cow<'_, RgbaImage> = if image.dimensions() == (dw, dh) {
            Cow::Borrowed(image)
        } else {
            Cow::Owned(imageops::resize(image, dw, dh, FilterType::Triangle))
        };
        for y in visible.top..visible.bottom {
            for x in visible.left..visible.right {
                let p = scaled.get_pixel((x - dst.left) as u32, (y - dst.top) as u32);
                self.blend_pixel(x, y, Color::argb(p[3], p[0], p[1], p[2]));
            }
        }
    }

    /// 8x8 bitmap glyphs scaled up to roughly `size` pixels tall. Characters
    /// the font does not know are drawn as '?'. Layout runs in i64 and glyph
    /// cells are cut to the clip.
    fn draw_text_centered(&mut self, text: &str, center_x: f32, baseline: f32, size: f32, color: Color) {
        let clip = self.clip;
        let (cl, ct, cr, cb) = (clip.left as i64, clip.top as i64, clip.right as i64, clip.bottom as i64);
        let scale = ((size / 8.0).round().max(1.0) as i64).min(i32::MAX as i64);
        let advance = scale * 8;
        let total = (text.chars().count() as i64).saturating_mul(advance);
        let mut x = (center_x as f64 - total as f64 / 2.0).round() as i64;
        let top = baseline.round() as i32 as i64 - advance;
        if clip.is_empty() || top >= cb || top + advance <= ct {
            return;
        }

        for ch in text.chars() {
            if x >= cr {
                break;
            }
            if x + advance > cl {
                let glyph = BASIC_FONTS
                    .get(ch)
                    .or_else(|| LATIN_FONTS.get(ch))
                    .or_else(|| BASIC_FONTS.get('?'));
                if let Some(rows) = glyph {
                    for (ry, row) in rows.iter().enumerate() {
                        let py = top + ry as i64 * scale;
                        for rx in 0..8 {
                            if (row >> rx) & 1 == 0 {
                                continue;
                            }
                            let px = x + rx * scale;
                            let cell = Rect::new(
                                px.clamp(cl, cr) as i32,
                                py.clamp(ct, cb) as i32,
                                (px + scale).clamp(cl, cr) as i32,
                                (py + scale).clamp(ct, cb) as i32,
                            );
                            self.fill_clipped(cell, color);
                        }
                    }
                }
            }
            x = x.saturating_add(advance);
        }
    }
}

/// Walk the pixels of the line (x0,y0)→(x1,y1) using Bresenham.
fn for_each_line_pixel(x0: i64, y0: i64, x1: i64, y1: i64, mut visit: impl FnMut(i64, i64)) {
    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        visit(x0, y0);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Source-over for straight (non-premultiplied) alpha, all in 0..255 units.
#[inline]
fn blend_over(dst: u32, src: Color) -> u32 {
    let sa = src.alpha() as u32;
    if sa == 0 { return dst; }
    if sa == 255 { return src.0; }

    let da = dst >> 24;
    let inv = 255 - sa;
    let da_w = da * inv / 255;             // destination weight after the source covers it
    let out_a = sa + da_w;
    if out_a == 0 { return 0; }

    let mix = |s: u8, d: u32| ((s as u32 * sa + d * da_w + out_a / 2) / out_a).min(255);
    let r = mix(src.red(), (dst >> 16) & 0xFF);
    let g = mix(src.green(), (dst >> 8) & 0xFF);
    let b = mix(src.blue(), dst & 0xFF);
    (out_a << 24) | (r << 16) | (g << 8) | b
}

/* ---------- Layer compositing ---------- */

/// Put the overlay layer on top of the live frame, mixing in linear light.
/// Visual: the camera image darkens under the mask and shows the frame/laser/text.
pub fn composite_layer(screen: &mut FrameBuffer, layer: &FrameBuffer, lut: &GammaLut) -> Result<()> {
    if screen.width != layer.width || screen.height != layer.height {
        return Err(Error::SizeMismatch(format!(
            "overlay layer {}x{} vs screen {}x{}",
            layer.width, layer.height, screen.width, screen.height
        )));
    }

    for (out, &src) in screen.pixels.iter_mut().zip(layer.pixels.iter()) {
        let a8 = src >> 24;
        if a8 == 0 { continue; }             // visual: keep raw live
        if a8 == 255 {                       // visual: overlay fully covers this pixel
            *out = src & 0x00FF_FFFF;
            continue;
        }

        let a = a8 as f32 / 255.0;
        let inv = 1.0 - a;
        let mix = |shift: u32| {
            let s = lut.srgb_u8_to_linear(((src >> shift) & 0xFF) as u8);
            let d = lut.srgb_u8_to_linear(((*out >> shift) & 0xFF) as u8);
            lut.linear_to_srgb_u8(a * s + inv * d) as u32
        };
        let (r, g, b) = (mix(16), mix(8), mix(0));
        *out = (r << 16) | (g << 8) | b;
    }
    Ok(())
}
