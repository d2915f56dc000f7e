// Where the viewfinder sits: the target frame on screen and the matching
// rectangle in raw camera coordinates.

use crate::types::Rect;
use log::debug;

/// Share of the smaller surface side left as margin around the framing rect.
pub const DEFAULT_MARGIN_FRACTION: f64 = 0.1;

/// The camera-preview side of the overlay. Either rect may be missing while
/// the preview is still sizing itself (or after it stopped).
pub trait PreviewProvider {
    /// Target frame in display coordinates.
    fn framing_rect(&self) -> Option<Rect>;
    /// The same frame in the camera's raw output coordinates.
    fn preview_framing_rect(&self) -> Option<Rect>;
}

/// State changes published by a camera preview.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewEvent {
    PreviewSized,
    PreviewStarted,
    PreviewStopped,
    CameraError(String),
}

/// Cached framing rects. Once populated, a provider reporting nothing leaves
/// the last good pair in place so the overlay keeps its position.
#[derive(Debug, Default, Clone)]
pub struct GeometryTracker {
    target_frame: Option<Rect>,
    preview_frame: Option<Rect>,
}

impl GeometryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pull both rects from the provider. Both must be present to replace
    /// the cache; otherwise it stays untouched.
    pub fn refresh(&mut self, provider: &dyn PreviewProvider) {
        if let (Some(frame), Some(preview)) =
            (provider.framing_rect(), provider.preview_framing_rect())
        {
            if self.target_frame != Some(frame) {
                debug!("viewfinder frame now {frame:?} (preview {preview:?})");
            }
            self.target_frame = Some(frame);
            self.preview_frame = Some(preview);
        }
    }

    /// Cached target frame, `None` until geometry was first available.
    pub fn current_frame(&self) -> Option<Rect> {
        self.target_frame
    }

    pub fn preview_frame(&self) -> Option<Rect> {
        self.preview_frame
    }
}

/* ---------- Framing rect layout (used by preview providers) ---------- */

/// Compute the on-screen framing rect inside `container ∩ surface`.
///
/// With a fixed `framing_size` the rect is that size, centred. Otherwise the
/// intersection is inset by `margin_fraction` of its smaller side and the
/// taller remainder is trimmed to a square.
pub fn calculate_framing_rect(
    container: Rect,
    surface: Rect,
    framing_size: Option<(i32, i32)>,
    margin_fraction: f64,
) -> Rect {
    // Non-intersecting inputs fall back to the container, like a failed Rect::intersect.
    let area = container.intersect(&surface).unwrap_or(container);

    if let Some((w, h)) = framing_size {
        let horizontal = ((area.width() - w) / 2).max(0);
        let vertical = ((area.height() - h) / 2).max(0);
        return area.inset(horizontal, vertical);
    }

    let margin = (area.width() as f64 * margin_fraction).min(area.height() as f64 * margin_fraction) as i32;
    let mut frame = area.inset(margin, margin);
    if frame.height() > frame.width() {
        frame = frame.inset(0, (frame.height() - frame.width()) / 2);
    }
    frame
}

/// Map a display-space framing rect into raw preview coordinates, given the
/// surface the preview is displayed in and the camera's output size.
pub fn preview_framing_rect(framing: Rect, surface: Rect, preview_size: (i32, i32)) -> Rect {
    let local = framing.offset(-surface.left, -surface.top);
    let sw = surface.width().max(1);
    let sh = surface.height().max(1);
    let (pw, ph) = preview_size;
    Rect::new(
        local.left * pw / sw,
        local.top * ph / sh,
        local.right * pw / sw,
        local.bottom * ph / sh,
    )
}
