//! Domain-warped smoke density

use crate::math::Vec2;

use super::fbm::fbm;

/// Drift rate of the first warp layer.
const FLOW_RATE_Q: f32 = 0.1;
/// Drift rates of the second warp layer. Deliberately different from each
/// other and from the first layer so the layers do not scroll in lockstep.
const FLOW_RATE_RX: f32 = 0.15;
const FLOW_RATE_RY: f32 = 0.126;

/// Smoke density at an aspect-corrected uv position.
///
/// fBm warped by two stacked fBm fields: the first layer is animated by
/// time to create flow, the second rides on the first with its own constant
/// offsets so the two stages neither cancel nor alias. Plain octave
/// summation alone reads as static cloud banks; the warp-of-a-warp is what
/// gives the silhouette its swirl.
pub fn smoke_density(uv: Vec2, time: f32) -> f32 {
    let q = Vec2::new(
        fbm(uv + Vec2::splat(FLOW_RATE_Q * time)),
        fbm(uv + Vec2::splat(1.0)),
    );

    let r = Vec2::new(
        fbm(uv + q + Vec2::new(1.7, 9.2) + Vec2::splat(FLOW_RATE_RX * time)),
        fbm(uv + q + Vec2::new(8.3, 2.8) + Vec2::splat(FLOW_RATE_RY * time)),
    );

    fbm(uv + r)
}
