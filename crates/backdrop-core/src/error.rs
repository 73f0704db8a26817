use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BackdropError {
    #[error("viewport dimensions must be finite and non-negative (got {width}x{height})")]
    InvalidViewport { width: f32, height: f32 },
    #[error("device pixel ratio must be finite and positive (got {0})")]
    InvalidPixelRatio(f32),
}

pub type Result<T> = std::result::Result<T, BackdropError>;
