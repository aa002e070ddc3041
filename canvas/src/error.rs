#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("invalid color: {0}")]
    InvalidColor(String),
    #[error("png encode failed: {0}")]
    Encode(String),
    #[error("svg decode failed: {0}")]
    Decode(String),
}
