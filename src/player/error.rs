//! Player operation errors.

/// Errors raised by navigation operations.
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("Index {index} is out of range (sequence has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Frame not found: {identifier}")]
    FrameNotFound { identifier: String },

    #[error("Failed to render frame: {0}")]
    Render(#[from] std::io::Error),
}
