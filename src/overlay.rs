// The viewfinder as the host sees it: geometry cache, renderer and redraw
// scheduling behind one handle.
// Host loop per tick:
//   if let Some(region) = overlay.poll_redraw(now) {
//       overlay.paint(&mut RasterCanvas::new(&mut layer, region), Some(&preview), now);
//   }

use crate::canvas::Canvas;
use crate::geometry::{GeometryTracker, PreviewEvent, PreviewProvider};
use crate::laser::Laser;
use crate::renderer::OverlayRenderer;
use crate::scheduler::{RedrawRegion, RedrawScheduler};
use crate::style::StyleConfig;
use crate::types::Rect;
use log::{debug, info, warn};
use std::time::{Duration, Instant};

pub struct ViewfinderOverlay {
    geometry: GeometryTracker,
    renderer: OverlayRenderer,
    scheduler: RedrawScheduler,
}

impl ViewfinderOverlay {
    /// Create an attached overlay. The first paint is requested right away.
    pub fn new(style: StyleConfig, laser: Option<Laser>, tick_interval: Duration) -> Self {
        let mut scheduler = RedrawScheduler::new(tick_interval);
        scheduler.invalidate_now(Instant::now());
        info!("viewfinder attached (tick every {tick_interval:?})");
        Self {
            geometry: GeometryTracker::new(),
            renderer: OverlayRenderer::new(style, laser),
            scheduler,
        }
    }

    /// React to the camera preview's state changes.
    pub fn on_preview_event(&mut self, event: &PreviewEvent, provider: &dyn PreviewProvider) {
        match event {
            PreviewEvent::PreviewSized => {
                self.geometry.refresh(provider);
                self.invalidate();
            }
            PreviewEvent::CameraError(msg) => warn!("camera preview error: {msg}"),
            other => debug!("preview event {other:?}"),
        }
    }

    /// Replace the caption and repaint immediately.
    pub fn set_status_text(&mut self, text: impl Into<String>) {
        self.renderer.set_status_text(text);
        self.invalidate();
    }

    pub fn status_text(&self) -> &str {
        &self.renderer.style().status_text
    }

    /// Request a full repaint on the next poll.
    pub fn invalidate(&mut self) {
        self.scheduler.invalidate_now(Instant::now());
    }

    /// The repaint the host should perform now, if any.
    pub fn poll_redraw(&mut self, now: Instant) -> Option<RedrawRegion> {
        self.scheduler.take_due(now)
    }

    /// One animation tick. Geometry is refreshed first when a provider is
    /// given; with no frame known yet this draws nothing and schedules nothing.
    pub fn paint(&mut self, canvas: &mut dyn Canvas, provider: Option<&dyn PreviewProvider>, now: Instant) {
        if let Some(provider) = provider {
            self.geometry.refresh(provider);
        }
        if let Some(frame) = self.renderer.paint(canvas, self.geometry.current_frame()) {
            self.scheduler.schedule(now, frame_bounds(frame));
        }
    }

    /// Stop animating: drop the pending repaint and refuse new ones.
    pub fn detach(&mut self) {
        self.scheduler.cancel();
        info!("viewfinder detached");
    }

    pub fn is_attached(&self) -> bool {
        !self.scheduler.is_cancelled()
    }

    pub fn has_pending_redraw(&self) -> bool {
        self.scheduler.is_pending()
    }

    pub fn next_redraw_due(&self) -> Option<Instant> {
        self.scheduler.next_due()
    }

    pub fn geometry(&self) -> &GeometryTracker {
        &self.geometry
    }

    pub fn renderer(&self) -> &OverlayRenderer {
        &self.renderer
    }
}

/// Area a tick repaints: the frame including its inclusive right/bottom lines.
fn frame_bounds(frame: Rect) -> Rect {
    Rect::new(frame.left, frame.top, frame.right + 1, frame.bottom + 1)
}
