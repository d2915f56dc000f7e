// What you SEE:
// • Live camera is always the base image.
// • Outside the viewfinder frame the picture is darkened.
// • The frame has a thin border, red corner accents and a scan line sweeping down it.
// • A caption sits under the frame. ESC quits.

use clap::Parser;
use log::{debug, info};
use scan_viewfinder::camera::CameraPreview;
use scan_viewfinder::draw::{composite_layer, Drawer, RasterCanvas};
use scan_viewfinder::gamma::GammaLut;
use scan_viewfinder::{AppConfig, FrameBuffer, Laser, PreviewProvider, Result, ViewfinderOverlay};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Camera preview with an animated scanning viewfinder.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// JSON config file (camera, framing and style settings).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Camera index; overrides the config file.
    #[arg(long)]
    camera: Option<u32>,

    /// Caption under the frame; overrides the config file.
    #[arg(long)]
    status: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(index) = cli.camera {
        config.camera_index = index;
    }
    if let Some(text) = cli.status {
        config.style.status_text = text;
    }

    /* --- Camera + window setup ---
       Visual: window opens with live camera feed. */
    let mut preview = CameraPreview::open(&config)?;
    let (w, h) = preview.surface_size();
    let mut drawer = Drawer::new("Scan Viewfinder", w, h)?;

    /* --- Buffers ---
       Visual: `screen` is what you see; `layer` holds the overlay between repaints. */
    let mut screen = FrameBuffer::transparent(w, h);
    let mut layer = FrameBuffer::transparent(w, h);
    let lut = GammaLut::new();

    /* --- Overlay ---
       Visual: nothing yet; it paints once the camera reports its size. */
    let laser = Laser::resolve(config.laser_asset.as_deref(), config.style.laser_color);
    let mut overlay = ViewfinderOverlay::new(config.style.clone(), laser, config.tick_interval());

    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Grab a fresh live frame. */
        let live = preview.next_frame()?;

        /* 2) Preview state changes (first frame => frame rect known). */
        for event in preview.take_events() {
            overlay.on_preview_event(&event, &preview);
        }

        /* 3) Repaint the overlay layer if a redraw is due.
           Visual: the scan line steps down; on a full redraw the mask/caption refresh too. */
        let now = Instant::now();
        if let Some(region) = overlay.poll_redraw(now) {
            let mut canvas = RasterCanvas::new(&mut layer, region);
            overlay.paint(&mut canvas, Some(&preview as &dyn PreviewProvider), now);
        }

        /* 4) Live frame + overlay on top. */
        if live.width == screen.width && live.height == screen.height {
            screen.pixels.copy_from_slice(&live.pixels);
        }
        composite_layer(&mut screen, &layer, &lut)?;
        drawer.present(&screen)?;

        /* 5) FPS counter (debug log once per second) */
        frames_this_second += 1;
        let elapsed = now.duration_since(last_fps_time);
        if elapsed >= Duration::from_secs(1) {
            debug!("FPS: {:.1}", frames_this_second as f32 / elapsed.as_secs_f32());
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    overlay.detach();
    preview.stop();
    info!("bye");
    Ok(())
}
