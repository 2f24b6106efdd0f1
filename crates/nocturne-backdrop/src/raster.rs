//! CPU rasterizer for the smoke pipeline
//!
//! Runs the exact per-pixel pipeline on the host, one scanline at a time,
//! into an RGBA8 buffer. This is the reference substrate for the shader
//! and what the end-to-end tests exercise; the buffer is laid out for a
//! direct `ImageData` upload where no GPU is available.

use crate::error::BackdropError;
use crate::field::shade;
use crate::frame::Viewport;

/// Opaque RGBA pixel surface filled by the smoke pipeline.
///
/// The buffer is reused across frames; rendering never reallocates.
#[derive(Clone, Debug)]
pub struct PixelSurface {
    viewport: Viewport,
    pixels: Vec<u8>,
}

impl PixelSurface {
    /// Create a surface. Both dimensions must be non-zero so a caller never
    /// ends up uploading an empty texture.
    pub fn new(width: u32, height: u32) -> Result<Self, BackdropError> {
        if width == 0 || height == 0 {
            return Err(BackdropError::InvalidDimensions { width, height });
        }
        Ok(Self {
            viewport: Viewport::new(width, height),
            pixels: vec![0; width as usize * height as usize * 4],
        })
    }

    /// Render one frame at the given elapsed time.
    ///
    /// Every pixel is a pure function of (position, time, size); scanline
    /// order is irrelevant to the result.
    pub fn render(&mut self, time: f32) {
        let vp = self.viewport;
        let aspect = vp.aspect();
        let width = vp.width as usize;

        for y in 0..vp.height as usize {
            let py = y as f32 + 0.5;
            for x in 0..width {
                let px = x as f32 + 0.5;
                let color = shade(vp.field_uv(px, py), vp.screen_uv(px, py), aspect, time);

                let offset = (y * width + x) * 4;
                self.pixels[offset] = to_byte(color[0]);
                self.pixels[offset + 1] = to_byte(color[1]);
                self.pixels[offset + 2] = to_byte(color[2]);
                self.pixels[offset + 3] = 255;
            }
        }
    }

    /// Raw RGBA bytes, row-major from the top-left
    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA value of a single pixel
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let offset = (y as usize * self.viewport.width as usize + x as usize) * 4;
        [
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
            self.pixels[offset + 3],
        ]
    }

    /// Surface dimensions
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

#[inline]
fn to_byte(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Viewport;

    fn luminance(c: [f32; 3]) -> f32 {
        0.2126 * c[0] + 0.7152 * c[1] + 0.0722 * c[2]
    }

    fn shade_at(vp: Viewport, px: f32, py: f32, time: f32) -> [f32; 3] {
        shade(vp.field_uv(px, py), vp.screen_uv(px, py), vp.aspect(), time)
    }

    #[test]
    fn test_surface_rejects_zero_dimensions() {
        assert!(matches!(
            PixelSurface::new(0, 4),
            Err(BackdropError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            PixelSurface::new(4, 0),
            Err(BackdropError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_render_fills_opaque_pixels() {
        let mut surface = PixelSurface::new(8, 6).unwrap();
        surface.render(1.0);
        assert_eq!(surface.as_rgba().len(), 8 * 6 * 4);
        assert!(surface.as_rgba().chunks(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut a = PixelSurface::new(8, 6).unwrap();
        let mut b = PixelSurface::new(8, 6).unwrap();
        a.render(4.2);
        b.render(4.2);
        assert_eq!(a.as_rgba(), b.as_rgba());
    }

    #[test]
    fn test_fullscreen_vignette_darkens_corners() {
        // 1920x1080 at t = 0: the exact center pixel must be clearly
        // brighter than the corner pixel.
        let vp = Viewport::new(1920, 1080);
        let center = shade_at(vp, 960.0, 540.0, 0.0);
        let corner = shade_at(vp, 0.5, 0.5, 0.0);
        assert!(
            luminance(center) > luminance(corner) + 0.05,
            "vignette too weak: center {center:?} vs corner {corner:?}"
        );
    }

    #[test]
    fn test_one_frame_step_moves_but_does_not_pop() {
        // 800x600, one 60Hz frame apart: the center pixel must change, but
        // only slightly.
        let vp = Viewport::new(800, 600);
        let before = shade_at(vp, 400.0, 300.0, 5.0);
        let after = shade_at(vp, 400.0, 300.0, 5.016);

        let max_diff = before
            .iter()
            .zip(after.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0f32, f32::max);
        assert!(max_diff > 0.0, "backdrop is not animating");
        assert!(max_diff < 0.05, "backdrop popped between frames: {max_diff}");
    }

    #[test]
    fn test_field_uv_matches_rasterized_pixels() {
        // The rasterizer must feed shade() the same coordinates the mapping
        // functions advertise.
        let vp = Viewport::new(32, 16);
        let mut surface = PixelSurface::new(32, 16).unwrap();
        surface.render(2.0);

        let expected = shade(
            vp.field_uv(10.5, 3.5),
            vp.screen_uv(10.5, 3.5),
            vp.aspect(),
            2.0,
        );
        let got = surface.pixel(10, 3);
        assert_eq!(got[0], (expected[0].clamp(0.0, 1.0) * 255.0) as u8);
        assert_eq!(got[1], (expected[1].clamp(0.0, 1.0) * 255.0) as u8);
        assert_eq!(got[2], (expected[2].clamp(0.0, 1.0) * 255.0) as u8);
    }

    #[test]
    fn test_distinct_viewports_share_center_mapping() {
        // Aspect correction: the center of any viewport samples the field
        // at (aspect/2, 1/2), so two viewports with equal aspect ratios see
        // the identical field there.
        let a = Viewport::new(1920, 1080);
        let b = Viewport::new(1280, 720);
        let uv_a = a.field_uv(960.0, 540.0);
        let uv_b = b.field_uv(640.0, 360.0);
        assert_eq!(uv_a, uv_b);
    }
}
