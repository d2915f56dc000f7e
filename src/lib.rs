// Scanning-viewfinder overlay for a live camera preview.
// The overlay masks everything outside a target frame, outlines the frame
// with corner accents, sweeps a scan line down it and shows a caption below.
// It animates itself by asking for the next repaint after every paint.
// The core has no camera or window dependency. The `app` feature adds the
// nokhwa camera provider and the minifb window used by the binary.

#[cfg(feature = "app")]
pub mod camera;
pub mod canvas;
pub mod clock;
pub mod config;
pub mod draw;
pub mod error;
pub mod gamma;
pub mod geometry;
pub mod laser;
pub mod overlay;
pub mod renderer;
pub mod scheduler;
pub mod style;
pub mod types;

pub use canvas::{Canvas, Stroke};
pub use clock::AnimationClock;
pub use config::AppConfig;
pub use error::{Error, Result};
pub use geometry::{GeometryTracker, PreviewEvent, PreviewProvider};
pub use laser::Laser;
pub use overlay::ViewfinderOverlay;
pub use renderer::{Corner, OverlayRenderer};
pub use scheduler::{RedrawRegion, RedrawScheduler};
pub use style::StyleConfig;
pub use types::{Color, FrameBuffer, PointF, Rect};
