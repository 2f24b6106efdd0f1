//! Error types for the backdrop renderer

/// Errors that can occur while bringing up a render target.
///
/// Initialization failures are terminal for the instance that hit them:
/// the caller logs the error and goes inert rather than retrying, since
/// every later resize or frame would operate on a surface that never
/// existed.
#[derive(Clone, Debug, thiserror::Error)]
pub enum BackdropError {
    /// The requested surface dimensions were zero.
    #[error("invalid surface dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// No compatible graphics adapter was found.
    #[error("no compatible graphics adapter")]
    NoAdapter,

    /// The adapter refused to provide a device.
    #[error("device request failed: {0}")]
    Device(String),

    /// Creating or configuring the render surface failed.
    #[error("surface error: {0}")]
    Surface(String),

    /// Shader compilation or pipeline creation was rejected.
    #[error("pipeline error: {0}")]
    Pipeline(String),
}
