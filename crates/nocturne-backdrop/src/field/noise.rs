//! Hash and value-noise primitives

use crate::math::{fract, mix, Vec2};

/// Sine-dot hash: a deterministic pseudo-random scalar in [0, 1) for a 2D
/// point. Not cryptographic and not bit-stable across platforms; it only
/// has to be cheap and look uncorrelated between lattice points.
#[inline]
pub fn hash12(p: Vec2) -> f32 {
    fract(p.dot(Vec2::new(12.9898, 78.233)).sin() * 43758.5453123)
}

/// Smooth value noise over the integer lattice, output in [0, 1].
///
/// Hashes the four corners of the containing cell and blends them with a
/// `3t^2 - 2t^3` fade on each axis, which removes the visible creases a
/// linear blend leaves at cell boundaries. Cell indexing is floor-based so
/// negative coordinates hash consistently.
pub fn value_noise(p: Vec2) -> f32 {
    let i = p.floor();
    let f = p.fract();

    let a = hash12(i);
    let b = hash12(i + Vec2::new(1.0, 0.0));
    let c = hash12(i + Vec2::new(0.0, 1.0));
    let d = hash12(i + Vec2::new(1.0, 1.0));

    let u = f * f * (Vec2::splat(3.0) - f * 2.0);
    mix(mix(a, b, u.x), mix(c, d, u.x), u.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_output_in_unit_range() {
        for i in 0..500 {
            let p = Vec2::new((i as f32 * 0.73) - 180.0, (i as f32 * 1.31) - 320.0);
            let n = value_noise(p);
            assert!((0.0..=1.0).contains(&n), "noise({p:?}) = {n} out of range");
        }
    }

    #[test]
    fn test_noise_continuous_across_lattice_lines() {
        // Straddle integer x lines, including negative ones; a discontinuity
        // at the cell boundary would show up as a jump far above the local
        // slope of the field.
        let eps = 1e-3;
        for cell in -6..6 {
            for j in 0..20 {
                let y = j as f32 * 0.37 - 3.0;
                let lo = value_noise(Vec2::new(cell as f32 - eps, y));
                let hi = value_noise(Vec2::new(cell as f32 + eps, y));
                assert!(
                    (lo - hi).abs() < 0.02,
                    "jump at x={cell}, y={y}: {lo} vs {hi}"
                );
            }
        }
    }

    #[test]
    fn test_noise_continuous_in_small_steps() {
        let eps = 1e-3;
        for i in 0..200 {
            let p = Vec2::new(i as f32 * 0.113 - 11.0, i as f32 * 0.071 - 7.0);
            let n0 = value_noise(p);
            let n1 = value_noise(p + Vec2::new(eps, 0.0));
            assert!((n0 - n1).abs() < 0.02, "slope too steep near {p:?}");
        }
    }

    #[test]
    fn test_hash_differs_between_neighboring_cells() {
        let a = hash12(Vec2::new(4.0, 7.0));
        let b = hash12(Vec2::new(5.0, 7.0));
        assert!((a - b).abs() > 1e-4);
    }
}
