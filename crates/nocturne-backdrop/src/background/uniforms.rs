/// Uniform data sent to the smoke shader
/// NOTE: This struct must match WGSL alignment requirements!
/// `resolution` is a vec2<f32> and must sit at an 8-byte offset; total
/// struct size is 16 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    pub time: f32,            // offset 0
    pub _pad: f32,            // offset 4 - aligns resolution to 8
    pub resolution: [f32; 2], // offset 8
}

impl Uniforms {
    /// Uniforms for a frame at `time` on a `width` x `height` surface
    pub fn new(time: f32, width: u32, height: u32) -> Self {
        Self {
            time,
            _pad: 0.0,
            resolution: [width as f32, height as f32],
        }
    }
}
