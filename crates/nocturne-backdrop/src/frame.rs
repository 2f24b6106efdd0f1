//! Viewport mapping and frame-loop lifecycle
//!
//! Timestamps are injected rather than read from a clock, so the loop can
//! be driven and tested deterministically without a display to sync to.
//! The browser glue feeds it `requestAnimationFrame` timestamps; tests feed
//! it whatever they like.

use serde::Serialize;

use crate::math::Vec2;

/// Viewport dimensions in device pixels, with the uv mapping shared by the
/// CPU rasterizer and the shader.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Create a viewport
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Map a pixel position (origin top-left, y down) to the
    /// aspect-corrected, y-up uv space the smoke field is evaluated in.
    /// x spans [0, aspect], y spans [0, 1]; the exact viewport center maps
    /// to (aspect / 2, 1/2) for any viewport size.
    #[inline]
    pub fn field_uv(&self, px: f32, py: f32) -> Vec2 {
        Vec2::new(
            px / self.width as f32 * self.aspect(),
            1.0 - py / self.height as f32,
        )
    }

    /// Map a pixel position to plain 0..1 screen uv (y down), which is the
    /// space the vignette is measured in.
    #[inline]
    pub fn screen_uv(&self, px: f32, py: f32) -> Vec2 {
        Vec2::new(px / self.width as f32, py / self.height as f32)
    }
}

/// Frame-loop lifecycle state, independent of the scheduler driving it.
///
/// Elapsed time is anchored to the first tick and never resets. Once
/// stopped, ticks return `None` and do not count - the guarantee the
/// teardown path relies on.
#[derive(Clone, Debug, Default)]
pub struct FrameLoop {
    started_at_ms: Option<f64>,
    elapsed: f32,
    frames: u64,
    stopped: bool,
}

impl FrameLoop {
    /// Create a loop that has not ticked yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame at the given timestamp (milliseconds, any
    /// monotonic origin). Returns the elapsed seconds since the first tick,
    /// or `None` once the loop has been stopped.
    pub fn tick(&mut self, now_ms: f64) -> Option<f32> {
        if self.stopped {
            return None;
        }
        let start = *self.started_at_ms.get_or_insert(now_ms);
        self.elapsed = ((now_ms - start) / 1000.0) as f32;
        self.frames += 1;
        Some(self.elapsed)
    }

    /// Stop the loop. Irreversible for this instance.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    /// Whether the loop is still accepting ticks
    #[inline]
    pub fn is_running(&self) -> bool {
        !self.stopped
    }

    /// Number of frames produced so far
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Snapshot for the diagnostics boundary
    pub fn stats(&self, viewport: Viewport) -> RenderStats {
        RenderStats {
            frames: self.frames,
            elapsed: self.elapsed,
            width: viewport.width,
            height: viewport.height,
            running: self.is_running(),
        }
    }
}

/// Point-in-time renderer statistics, serialized to JSON at the JS boundary
#[derive(Clone, Copy, Debug, Serialize)]
pub struct RenderStats {
    pub frames: u64,
    pub elapsed: f32,
    pub width: u32,
    pub height: u32,
    pub running: bool,
}
