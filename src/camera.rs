// Opens the default camera and converts frames into a buffer suitable for the window.
// Also acts as the viewfinder's preview provider: once the first frame tells us
// the real resolution, it lays out the framing rect and announces `PreviewSized`.

use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::geometry::{self, PreviewEvent, PreviewProvider};
use crate::types::{FrameBuffer, Rect};
use log::{info, warn};

// Bring in nokhwa types for camera control.
use nokhwa::{
    Camera,
    pixel_format::RgbFormat,
    utils::{
        CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType, Resolution,
    },
};

// A small wrapper around nokhwa::Camera so our main loop stays clean.
pub struct CameraCapture {
    cam: Camera,
    width: u32,
    height: u32,
}

impl CameraCapture {
    /// Try to open camera `index` at a target resolution (falls back if not exact).
    /// On success, nothing is shown on screen yet; we just hold an open stream.
    pub fn new(index: u32, width: u32, height: u32) -> Result<Self> {
        let idx = CameraIndex::Index(index);

        let fmt = CameraFormat::new(
            Resolution::new(width, height),
            FrameFormat::YUYV, // uncompressed; cheap to convert to RGB
            30,                // target FPS
        );

        // Ask for RGB frames, as close to our request as the device allows.
        let req = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(fmt));

        let mut cam = Camera::new(idx, req)
            .map_err(|e| Error::CameraInit(format!("Create camera: {e}")))?;

        cam.open_stream()
            .map_err(|e| Error::CameraInit(format!("Open stream: {e}")))?;

        // The actual stream might choose a slightly different resolution.
        let actual = cam.resolution();
        info!("camera {index} streaming at {}x{}", actual.width(), actual.height());

        Ok(Self {
            cam,
            width: actual.width(),
            height: actual.height(),
        })
    }

    /// Grab one frame from the camera and convert it to 0x00RRGGBB pixels.
    /// What you'll see: after main.rs pushes this buffer to the window,
    /// the live camera image updates by one frame.
    pub fn next_frame(&mut self) -> Result<FrameBuffer> {
        // Blocks until a new frame is ready.
        let frame = self
            .cam
            .frame()
            .map_err(|e| Error::CameraFrame(format!("Fetch frame: {e}")))?;

        let rgb_img = frame
            .decode_image::<RgbFormat>()
            .map_err(|e| Error::CameraFrame(format!("Decode RGB: {e}")))?;

        let (w, h) = rgb_img.dimensions();
        let pixels = rgb_img
            .pixels()
            .map(|p| ((p[0] as u32) << 16) | ((p[1] as u32) << 8) | p[2] as u32)
            .collect();

        Ok(FrameBuffer {
            width: w as usize,
            height: h as usize,
            pixels,
        })
    }

    /// Report the actual resolution the camera is delivering.
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn stop(&mut self) -> Result<()> {
        self.cam
            .stop_stream()
            .map_err(|e| Error::CameraFrame(format!("Stop stream: {e}")))
    }
}

/// Live camera shown full-window, with a viewfinder framing rect laid out on it.
pub struct CameraPreview {
    capture: CameraCapture,
    surface: Rect, // where the preview is displayed (window pixels)
    framing_size: Option<(i32, i32)>,
    margin_fraction: f64,
    preview_size: Option<(i32, i32)>,
    framing: Option<Rect>,
    preview_framing: Option<Rect>,
    events: Vec<PreviewEvent>,
}

impl CameraPreview {
    pub fn open(config: &AppConfig) -> Result<Self> {
        let (w, h) = config.resolution;
        let capture = CameraCapture::new(config.camera_index, w, h)?;
        let (w, h) = capture.resolution();
        Ok(Self {
            capture,
            surface: Rect::new(0, 0, w as i32, h as i32),
            framing_size: config.framing_size,
            margin_fraction: config.margin_fraction,
            preview_size: None,
            framing: None,
            preview_framing: None,
            events: vec![PreviewEvent::PreviewStarted],
        })
    }

    /// Size of the display surface (the window is created with this size).
    pub fn surface_size(&self) -> (usize, usize) {
        (self.surface.width() as usize, self.surface.height() as usize)
    }

    /// Next camera frame. The first frame (and any resolution change) lays out
    /// the framing rects and queues `PreviewSized`.
    pub fn next_frame(&mut self) -> Result<FrameBuffer> {
        let frame = match self.capture.next_frame() {
            Ok(frame) => frame,
            Err(e) => {
                self.events.push(PreviewEvent::CameraError(e.to_string()));
                return Err(e);
            }
        };

        let size = (frame.width as i32, frame.height as i32);
        if self.preview_size != Some(size) {
            self.preview_size = Some(size);
            let framing = geometry::calculate_framing_rect(
                self.surface,
                self.surface,
                self.framing_size,
                self.margin_fraction,
            );
            self.framing = Some(framing);
            self.preview_framing = Some(geometry::preview_framing_rect(framing, self.surface, size));
            self.events.push(PreviewEvent::PreviewSized);
        }
        Ok(frame)
    }

    /// Drain queued state changes for the overlay.
    pub fn take_events(&mut self) -> Vec<PreviewEvent> {
        std::mem::take(&mut self.events)
    }

    /// Stop streaming. The framing rects go away; an overlay keeps its cache.
    pub fn stop(&mut self) {
        if let Err(e) = self.capture.stop() {
            warn!("{e}");
        }
        self.framing = None;
        self.preview_framing = None;
        self.events.push(PreviewEvent::PreviewStopped);
    }
}

impl PreviewProvider for CameraPreview {
    fn framing_rect(&self) -> Option<Rect> {
        self.framing
    }

    fn preview_framing_rect(&self) -> Option<Rect> {
        self.preview_framing
    }
}
