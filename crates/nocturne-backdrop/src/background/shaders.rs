/// Volumetric smoke shader: domain-warped fBm density, a 16-step occlusion
/// march toward the moving light, and a vignetted composite. Mirrors the
/// pure-Rust pipeline in `crate::field`.
pub const SHADER_SMOKE: &str = r#"
struct Uniforms {
    time: f32,
    _pad: f32,
    resolution: vec2<f32>,
};

struct VsOut {
    @builtin(position) position: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

@group(0) @binding(0) var<uniform> uniforms: Uniforms;

@vertex
fn vs_main(@builtin(vertex_index) vertex_index: u32) -> VsOut {
    var out: VsOut;
    let x = f32(i32(vertex_index & 1u) * 4 - 1);
    let y = f32(i32(vertex_index >> 1u) * 4 - 1);
    out.position = vec4<f32>(x, y, 0.0, 1.0);
    out.uv = vec2<f32>((x + 1.0) * 0.5, (1.0 - y) * 0.5);
    return out;
}

fn hash12(p: vec2<f32>) -> f32 {
    return fract(sin(dot(p, vec2<f32>(12.9898, 78.233))) * 43758.5453123);
}

// Value noise: four hashed cell corners, smoothstep-shaped blend
fn noise(p: vec2<f32>) -> f32 {
    let i = floor(p);
    let f = fract(p);
    let u = f * f * (3.0 - 2.0 * f);
    return mix(
        mix(hash12(i), hash12(i + vec2<f32>(1.0, 0.0)), u.x),
        mix(hash12(i + vec2<f32>(0.0, 1.0)), hash12(i + vec2<f32>(1.0, 1.0)), u.x),
        u.y
    );
}

// 5 octaves; rotate + double + shift between octaves to break grid alignment
fn fbm(p: vec2<f32>) -> f32 {
    var value = 0.0;
    var amplitude = 0.5;
    var st = p;
    let rot = mat2x2<f32>(
        vec2<f32>(cos(0.5), sin(0.5)),
        vec2<f32>(-sin(0.5), cos(0.5))
    );
    for (var i = 0; i < 5; i++) {
        value += amplitude * noise(st);
        st = rot * st * 2.0 + vec2<f32>(100.0, 100.0);
        amplitude *= 0.5;
    }
    return value;
}

@fragment
fn fs_main(in: VsOut) -> @location(0) vec4<f32> {
    let t = uniforms.time;
    let aspect = uniforms.resolution.x / uniforms.resolution.y;

    // y-up field coordinates, x stretched by aspect so features stay square
    let uv = vec2<f32>(in.uv.x * aspect, 1.0 - in.uv.y);

    var light_pos = vec2<f32>(0.5 * aspect, 0.9);
    light_pos.x += sin(t * 0.1) * 0.2;

    let to_light = light_pos - uv;
    let dist_to_light = length(to_light);

    // Smoke density: fbm warped by two stacked fbm fields, each layer
    // drifting at its own rate
    var q = vec2<f32>(0.0);
    q.x = fbm(uv + vec2<f32>(0.1 * t));
    q.y = fbm(uv + vec2<f32>(1.0, 1.0));

    var r = vec2<f32>(0.0);
    r.x = fbm(uv + q + vec2<f32>(1.7, 9.2) + vec2<f32>(0.15 * t));
    r.y = fbm(uv + q + vec2<f32>(8.3, 2.8) + vec2<f32>(0.126 * t));

    let smoke_density = fbm(uv + r);

    // Occlusion march toward the light. Cheap single-fbm samples; dithered
    // start offset so the fixed step grid does not band.
    let step_len = dist_to_light / 16.0;
    let ray_dir = normalize(to_light);
    let dither = hash12(uv + vec2<f32>(fract(t)));
    var pos = uv + ray_dir * step_len * dither;

    var accum = 0.0;
    for (var i = 0; i < 16; i++) {
        accum += fbm(pos * 0.5 + vec2<f32>(0.0, t * 0.2));
        pos += ray_dir * step_len;
    }

    var light_intensity = 1.0 / (1.0 + accum * 0.3);
    light_intensity *= 1.0 - smoothstep(0.0, 1.5, dist_to_light);

    // Composite: dark base, grey smoke tint, additive light shafts
    var col = vec3<f32>(0.05, 0.05, 0.08);
    col = mix(col, vec3<f32>(0.6, 0.65, 0.7), smoothstep(0.0, 1.0, smoke_density) * 0.4);
    col += vec3<f32>(1.0, 0.98, 0.95) * light_intensity * 0.5 * smoothstep(0.0, 1.0, smoke_density * 1.5);

    // Vignette in plain screen uv
    let vignette = 1.0 - length(in.uv - vec2<f32>(0.5, 0.5)) * 1.2;
    col = col * clamp(vignette + 0.2, 0.0, 1.0);

    return vec4<f32>(col, 1.0);
}
"#;
