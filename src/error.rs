// Crate error type. Every variant states *where* things went wrong.
// Nothing in the paint path returns these: a missing frame or a broken laser
// asset degrades the overlay instead of failing it.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed

    #[error("Window update error: {0}")]
    WindowUpdate(String), // Updating the window buffer failed

    #[error("Camera init error: {0}")]
    CameraInit(String), // Opening/starting the camera failed

    #[error("Camera frame error: {0}")]
    CameraFrame(String), // Grabbing/decoding a frame failed

    #[error("Config read error: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Invalid color literal {0:?} (expected #RRGGBB or #AARRGGBB)")]
    InvalidColor(String),

    #[error("Laser asset error: {0}")]
    LaserAsset(#[from] image::ImageError),

    #[error("Buffer size mismatch: {0}")]
    SizeMismatch(String),
}

pub type Result<T> = std::result::Result<T, Error>;
