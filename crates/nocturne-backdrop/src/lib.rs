//! Volumetric Smoke Backdrop
//!
//! Animated full-viewport atmospheric background: drifting smoke lit by a
//! single moving light source, with a raymarched occlusion estimate
//! producing visible light shafts and self-shadowing. Runs as a WGSL
//! fragment shader in the browser, with a pure-Rust twin of the pipeline
//! for tests and GPU-less hosts.
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: 2D vector and the GLSL-style scalar helpers
//! - [`field`]: the per-pixel pipeline (value noise -> fBm -> domain-warped
//!   density -> occlusion march -> compositor)
//! - [`frame`]: viewport/uv mapping and frame-loop lifecycle state
//! - [`raster`]: CPU reference rasterizer (scanline loop into RGBA8)
//! - `background` + `wasm` (behind the `wasm` feature): the wgpu renderer
//!   over a canvas and the browser lifecycle glue
//!
//! ## Example
//!
//! ```rust
//! use nocturne_backdrop::PixelSurface;
//!
//! let mut surface = PixelSurface::new(64, 36)?;
//! surface.render(0.0);
//! assert_eq!(surface.as_rgba().len(), 64 * 36 * 4);
//! # Ok::<(), nocturne_backdrop::BackdropError>(())
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure function of (pixel, time, size)**: no simulation state is
//!    carried frame to frame; drift is time-varying coordinates, not fluid
//!    dynamics
//! 2. **Pure Rust Core**: the whole pipeline runs and tests without a
//!    browser or GPU; the shader is a port of the core, not the other way
//!    around
//! 3. **Time Abstraction**: timestamps are injected, so lifecycle and
//!    continuity are deterministic under test
//! 4. **Silent degradation**: a host without working graphics gets no
//!    background and no crash

pub mod field;
pub mod frame;
pub mod math;
pub mod raster;

mod error;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// GPU renderer (only available with "wasm" feature)
#[cfg(feature = "wasm")]
pub mod background;

// Re-export core types for convenience
pub use error::BackdropError;
pub use frame::{FrameLoop, RenderStats, Viewport};
pub use math::Vec2;
pub use raster::PixelSurface;
