/// Error type for running the form through a frontend.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// User left the form (Ctrl+C, Esc, etc.)
    #[error("Form cancelled by user")]
    Cancelled,

    /// Frontend-specific failure (I/O, terminal setup, etc.)
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl FormError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
