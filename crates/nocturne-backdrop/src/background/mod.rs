//! GPU Backdrop Renderer
//!
//! WebGPU-based fullscreen smoke rendered behind the host page's UI.
//!
//! ## Design
//!
//! - Full-screen triangle rendered via vertex shader (no geometry needed)
//! - All procedural - no textures required
//! - One pipeline, one small uniform buffer (time + resolution)
//! - The WGSL fragment stage is a port of the pure-Rust pipeline in
//!   [`crate::field`]; the Rust side is the reference, the shader is the
//!   fast path

mod renderer;
mod shaders;
mod uniforms;

pub use renderer::BackgroundRenderer;
pub use uniforms::Uniforms;
