//! WGSL for neon sprites.
//!
//! Both passes draw one instanced quad per sprite. The glow pass expands the
//! quad by the glow radius and fades with distance from the sprite's edge;
//! the sprite pass fills the square with a diagonal two-stop gradient.

pub const SPRITE_SHADER: &str = r#"
struct Uniforms {
    canvas_size: vec2<f32>,
    _padding: vec2<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct InstanceInput {
    @location(0) position: vec2<f32>,
    @location(1) size: vec2<f32>,
    @location(2) start_color: vec4<f32>,
    @location(3) end_color: vec4<f32>,
    @location(4) glow_color: vec4<f32>,
    @location(5) glow_radius: f32,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) local: vec2<f32>,
    @location(1) color_a: vec4<f32>,
    @location(2) color_b: vec4<f32>,
    @location(3) extent: vec2<f32>,
    @location(4) radius: f32,
};

fn quad_corner(index: u32) -> vec2<f32> {
    var corners = array<vec2<f32>, 6>(
        vec2<f32>(0.0, 0.0),
        vec2<f32>(1.0, 0.0),
        vec2<f32>(0.0, 1.0),
        vec2<f32>(0.0, 1.0),
        vec2<f32>(1.0, 0.0),
        vec2<f32>(1.0, 1.0),
    );
    return corners[index];
}

// Canvas space has its origin top-left with Y pointing down.
fn to_clip(p: vec2<f32>) -> vec4<f32> {
    let ndc = vec2<f32>(
        p.x / uniforms.canvas_size.x * 2.0 - 1.0,
        1.0 - p.y / uniforms.canvas_size.y * 2.0,
    );
    return vec4<f32>(ndc, 0.0, 1.0);
}

@vertex
fn vs_sprite(@builtin(vertex_index) vertex_index: u32, instance: InstanceInput) -> VertexOutput {
    let corner = quad_corner(vertex_index);

    var out: VertexOutput;
    out.clip_position = to_clip(instance.position + corner * instance.size);
    out.local = corner;
    out.color_a = instance.start_color;
    out.color_b = instance.end_color;
    out.extent = instance.size;
    out.radius = 0.0;
    return out;
}

@fragment
fn fs_sprite(in: VertexOutput) -> @location(0) vec4<f32> {
    let t = clamp((in.local.x + in.local.y) * 0.5, 0.0, 1.0);
    return mix(in.color_a, in.color_b, t);
}

@vertex
fn vs_glow(@builtin(vertex_index) vertex_index: u32, instance: InstanceInput) -> VertexOutput {
    let corner = quad_corner(vertex_index);
    let r = instance.glow_radius;
    let span = instance.size + vec2<f32>(2.0 * r);

    var out: VertexOutput;
    out.clip_position = to_clip(instance.position - vec2<f32>(r) + corner * span);
    // Pixel offset from the sprite's top-left corner.
    out.local = corner * span - vec2<f32>(r);
    out.color_a = instance.glow_color;
    out.color_b = instance.glow_color;
    out.extent = instance.size;
    out.radius = r;
    return out;
}

@fragment
fn fs_glow(in: VertexOutput) -> @location(0) vec4<f32> {
    let outside = max(max(-in.local, in.local - in.extent), vec2<f32>(0.0));
    let falloff = 1.0 - smoothstep(0.0, max(in.radius, 0.001), length(outside));
    let alpha = in.color_a.a * falloff * falloff;
    // Premultiplied, blended additively.
    return vec4<f32>(in.color_a.rgb * alpha, alpha);
}
"#;
