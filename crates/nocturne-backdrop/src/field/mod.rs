//! The per-pixel smoke pipeline
//!
//! A stateless chain evaluated once per pixel per frame:
//!
//! value noise -> fBm -> domain-warped density -> occlusion march -> compositor
//!
//! Every stage is a pure function of its inputs; animation comes entirely
//! from time-varying coordinates, not from simulation state. The WGSL
//! shader in the `background` module is a line-for-line port of this code.

mod compose;
mod density;
mod fbm;
mod light;
mod noise;

pub use compose::shade;
pub use density::smoke_density;
pub use fbm::{fbm, OCTAVES};
pub use light::{light_intensity, light_position, march_occlusion, transmittance, MARCH_STEPS};
pub use noise::{hash12, value_noise};
