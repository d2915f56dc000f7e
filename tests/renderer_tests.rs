//! Tests for the overlay renderer and its layout helpers.

mod common;

use common::{DrawCall, RecordingCanvas, FRAME};
use scan_viewfinder::renderer::{
    border_rect, corner_path, frame_interior, laser_rect, mask_rects, status_text_anchor,
};
use scan_viewfinder::{Corner, Laser, OverlayRenderer, PointF, Rect, StyleConfig};

fn solid_renderer() -> OverlayRenderer {
    OverlayRenderer::new(StyleConfig::default(), Some(Laser::Solid))
}

// === Mask layout ===

#[test]
fn mask_and_frame_interior_tile_the_surface() {
    let (w, h) = (40, 60);
    for frame in [Rect::new(10, 15, 29, 44), Rect::new(0, 0, 39, 59), Rect::new(5, 5, 5, 5)] {
        let mut pieces = mask_rects(frame, w, h).to_vec();
        pieces.push(frame_interior(frame));
        for y in 0..h {
            for x in 0..w {
                let hits = pieces.iter().filter(|r| r.contains(x, y)).count();
                assert_eq!(hits, 1, "pixel ({x},{y}) covered {hits} times for {frame:?}");
            }
        }
    }
}

#[test]
fn mask_rects_for_scenario_frame() {
    let masks = mask_rects(FRAME, 400, 800);
    assert_eq!(masks[0], Rect::new(0, 0, 400, 200));
    assert_eq!(masks[1], Rect::new(0, 200, 100, 401));
    assert_eq!(masks[2], Rect::new(301, 200, 400, 401));
    assert_eq!(masks[3], Rect::new(0, 401, 400, 800));
}

#[test]
fn border_is_pulled_in_on_top_left_only() {
    assert_eq!(border_rect(FRAME), Rect::new(101, 201, 300, 400));
}

// === Corners ===

#[test]
fn corner_paths_are_reflections_of_each_other() {
    let (len, half) = (12.0, 1);
    let expected = [
        PointF::new(1.0, 13.0),
        PointF::new(1.0, 1.0),
        PointF::new(13.0, 1.0),
    ];
    for corner in Corner::ALL {
        let (ax, ay) = corner.anchor(FRAME);
        let (sx, sy) = corner.signs();
        let normalized: Vec<PointF> = corner_path(FRAME, corner, len, half)
            .iter()
            .map(|p| PointF::new((p.x - ax as f32) * sx as f32, (p.y - ay as f32) * sy as f32))
            .collect();
        assert_eq!(normalized, expected, "{corner:?}");
    }
}

#[test]
fn top_right_corner_hugs_the_inclusive_right_edge() {
    let path = corner_path(FRAME, Corner::TopRight, 12.0, 1);
    assert_eq!(path[1], PointF::new(300.0, 201.0));
    assert_eq!(path[0], PointF::new(300.0, 213.0));
    assert_eq!(path[2], PointF::new(288.0, 201.0));
}

// === Laser ===

#[test]
fn laser_rect_is_padded_and_three_pixels_tall() {
    assert_eq!(laser_rect(FRAME, 0.0, 10, 3), Rect::new(110, 200, 290, 203));
    assert_eq!(laser_rect(FRAME, 45.0, 10, 3), Rect::new(110, 245, 290, 248));
}

#[test]
fn first_paint_draws_laser_one_step_down() {
    let mut renderer = solid_renderer();
    let mut canvas = RecordingCanvas::new(400, 800);
    renderer.paint(&mut canvas, Some(FRAME));

    let style = StyleConfig::default();
    let fills = canvas.fills();
    assert_eq!(fills.len(), 5);
    assert_eq!(fills[4], (Rect::new(110, 205, 290, 208), style.laser_color));
}

#[test]
fn image_laser_is_stretched_into_laser_rect() {
    let style = StyleConfig::default();
    let mut renderer = OverlayRenderer::new(style.clone(), Some(Laser::gradient(style.laser_color)));
    let mut canvas = RecordingCanvas::new(400, 800);
    renderer.paint(&mut canvas, Some(FRAME));
    assert_eq!(canvas.images(), vec![Rect::new(110, 205, 290, 208)]);
}

#[test]
fn missing_laser_asset_skips_only_the_scan_line() {
    let mut renderer = OverlayRenderer::new(StyleConfig::default(), None);
    let mut canvas = RecordingCanvas::new(400, 800);
    assert_eq!(renderer.paint(&mut canvas, Some(FRAME)), Some(FRAME));
    assert_eq!(canvas.fills().len(), 4);
    assert!(canvas.images().is_empty());
    assert_eq!(canvas.polylines().len(), 4);
    assert_eq!(canvas.texts().len(), 1);
    // the animation still advances
    assert_eq!(renderer.clock().offset(), 5.0);
}

// === Paint sequence ===

#[test]
fn paint_draws_mask_border_corners_laser_then_text() {
    let mut renderer = solid_renderer();
    let mut canvas = RecordingCanvas::new(400, 800);
    renderer.paint(&mut canvas, Some(FRAME));

    let kinds: Vec<&str> = canvas
        .calls
        .iter()
        .map(|c| match c {
            DrawCall::FillRect(..) => "fill",
            DrawCall::StrokeRect(..) => "stroke",
            DrawCall::Polyline(..) => "corner",
            DrawCall::Image(..) => "image",
            DrawCall::Text { .. } => "text",
        })
        .collect();
    assert_eq!(
        kinds,
        ["fill", "fill", "fill", "fill", "stroke", "corner", "corner", "corner", "corner", "fill", "text"]
    );
}

#[test]
fn status_text_is_centred_below_the_frame() {
    let style = StyleConfig::default();
    assert_eq!(status_text_anchor(FRAME, &style), (200.0, 456.0));

    let mut renderer = solid_renderer();
    let mut canvas = RecordingCanvas::new(400, 800);
    renderer.paint(&mut canvas, Some(FRAME));
    let text = canvas.calls.last().cloned();
    assert_eq!(
        text,
        Some(DrawCall::Text {
            text: style.status_text.clone(),
            center_x: 200.0,
            baseline: 456.0,
            size: 24.0,
            color: style.status_text_color,
        })
    );
}

#[test]
fn paint_without_frame_draws_nothing() {
    let mut renderer = solid_renderer();
    let mut canvas = RecordingCanvas::new(400, 800);
    assert_eq!(renderer.paint(&mut canvas, None), None);
    assert!(canvas.calls.is_empty());
    assert_eq!(renderer.clock().offset(), 0.0);
}

#[test]
fn paint_on_empty_surface_draws_nothing_but_keeps_the_frame() {
    let mut renderer = solid_renderer();
    for (w, h) in [(0, 800), (400, 0), (-5, 10)] {
        let mut canvas = RecordingCanvas::new(w, h);
        assert_eq!(renderer.paint(&mut canvas, Some(FRAME)), Some(FRAME));
        assert!(canvas.calls.is_empty());
    }
    assert_eq!(renderer.clock().offset(), 0.0);
}

#[test]
fn frame_outside_surface_is_drawn_as_given() {
    let mut renderer = solid_renderer();
    let mut canvas = RecordingCanvas::new(100, 100);
    let frame = Rect::new(150, 150, 250, 250);
    assert_eq!(renderer.paint(&mut canvas, Some(frame)), Some(frame));
    assert_eq!(canvas.fills()[0].0, Rect::new(0, 0, 100, 150));
}

#[test]
fn negative_widths_are_passed_through() {
    let style = StyleConfig { border_width: -2.0, ..StyleConfig::default() };
    let mut renderer = OverlayRenderer::new(style, Some(Laser::Solid));
    let mut canvas = RecordingCanvas::new(400, 800);
    renderer.paint(&mut canvas, Some(FRAME));
    let stroke = canvas.calls.iter().find_map(|c| match c {
        DrawCall::StrokeRect(_, s) => Some(s.width),
        _ => None,
    });
    assert_eq!(stroke, Some(-2.0));
}
