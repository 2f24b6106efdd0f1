//! Final color composition

use crate::math::{mix, smoothstep, Vec2};

use super::density::smoke_density;
use super::light::light_intensity;

/// Deep blue-grey base.
const BASE_COLOR: [f32; 3] = [0.05, 0.05, 0.08];
/// Grey-white the smoke tints toward.
const SMOKE_COLOR: [f32; 3] = [0.6, 0.65, 0.7];
/// Near-white light color.
const LIGHT_COLOR: [f32; 3] = [1.0, 0.98, 0.95];

/// Weight of the smoke tint against the base.
const SMOKE_WEIGHT: f32 = 0.4;
/// Weight of the additive light shafts.
const LIGHT_WEIGHT: f32 = 0.5;

/// Strength of the radial vignette.
const VIGNETTE_STRENGTH: f32 = 1.2;
/// Bias lifting the vignette floor before clamping.
const VIGNETTE_BIAS: f32 = 0.2;

/// Shade one pixel.
///
/// `uv` is the aspect-corrected, y-up field position; `screen_uv` is the
/// plain 0..1 viewport position the vignette is measured in. The light term
/// is additive, not blended, so shafts can exceed the base + smoke
/// brightness; output is linear RGB and may exceed 1 before the caller
/// clamps for display.
pub fn shade(uv: Vec2, screen_uv: Vec2, aspect: f32, time: f32) -> [f32; 3] {
    let density = smoke_density(uv, time);
    let light = light_intensity(uv, time, aspect);

    let smoke = smoothstep(0.0, 1.0, density) * SMOKE_WEIGHT;
    let shaft = light * LIGHT_WEIGHT * smoothstep(0.0, 1.0, density * 1.5);

    let center_dist = (screen_uv - Vec2::splat(0.5)).length();
    let vignette = (1.0 - center_dist * VIGNETTE_STRENGTH + VIGNETTE_BIAS).clamp(0.0, 1.0);

    let mut color = [0.0f32; 3];
    for ch in 0..3 {
        let tinted = mix(BASE_COLOR[ch], SMOKE_COLOR[ch], smoke);
        color[ch] = (tinted + LIGHT_COLOR[ch] * shaft) * vignette;
    }
    color
}

#[cfg(test)]
mod tests {
    use super::*;

    fn luminance(c: [f32; 3]) -> f32 {
        0.2126 * c[0] + 0.7152 * c[1] + 0.0722 * c[2]
    }

    #[test]
    fn test_shade_deterministic() {
        let uv = Vec2::new(0.9, 0.5);
        let screen = Vec2::new(0.5, 0.5);
        assert_eq!(shade(uv, screen, 1.8, 3.0), shade(uv, screen, 1.8, 3.0));
    }

    #[test]
    fn test_vignette_darkens_relative_to_center() {
        // Same field position, only the vignette coordinate moves: the
        // screen corner must come out strictly darker than the screen
        // center.
        let uv = Vec2::new(0.9, 0.5);
        let centered = shade(uv, Vec2::new(0.5, 0.5), 1.8, 0.0);
        let cornered = shade(uv, Vec2::new(0.0, 0.0), 1.8, 0.0);
        assert!(luminance(cornered) < luminance(centered));
    }

    #[test]
    fn test_shade_components_nonnegative() {
        for i in 0..40 {
            let uv = Vec2::new(i as f32 * 0.04, 1.0 - i as f32 * 0.02);
            let screen = Vec2::new(i as f32 * 0.025, i as f32 * 0.025);
            let c = shade(uv, screen, 16.0 / 9.0, i as f32 * 0.7);
            assert!(c.iter().all(|v| *v >= 0.0 && v.is_finite()), "bad color {c:?}");
        }
    }
}
