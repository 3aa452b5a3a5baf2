mod sprite_shader;

use std::sync::Arc;
use std::time::Duration;

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use log::info;
use winit::window::Window;

use crate::error::GpuError;
use crate::sprites::{Sprite, SpriteSurface};
use sprite_shader::SPRITE_SHADER;

const INITIAL_INSTANCE_CAPACITY: usize = 1024;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Uniforms {
    canvas_size: [f32; 2],
    _padding: [f32; 2],
}

/// Per-sprite GPU data, one instance per sprite.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SpriteInstance {
    position: [f32; 2],
    size: [f32; 2],
    start_color: [f32; 4],
    end_color: [f32; 4],
    /// RGB plus opacity.
    glow_color: [f32; 4],
    glow_radius: f32,
    _padding: [f32; 3],
}

impl SpriteInstance {
    const ATTRIBUTES: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        0 => Float32x2,
        1 => Float32x2,
        2 => Float32x4,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32,
    ];

    pub fn new(sprite: &Sprite, now: Duration) -> Self {
        let position = sprite.position(now);
        let mut glow_color = sprite.glow.color.to_linear();
        glow_color.w = sprite.glow.opacity;

        Self {
            position: [position.x, position.y],
            size: sprite.size.to_array(),
            start_color: sprite.brush.start.to_linear().to_array(),
            end_color: sprite.brush.end.to_linear().to_array(),
            glow_color: glow_color.to_array(),
            glow_radius: sprite.glow.blur_radius,
            _padding: [0.0; 3],
        }
    }

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    glow_pipeline: wgpu::RenderPipeline,
    sprite_pipeline: wgpu::RenderPipeline,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    instance_count: u32,
    instances: Vec<SpriteInstance>,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
}

impl GpuState {
    pub async fn new(window: Arc<Window>) -> Result<Self, GpuError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(GpuError::NoAdapter)?;

        let adapter_info = adapter.get_info();
        info!("Using GPU adapter {} ({:?})", adapter_info.name, adapter_info.backend);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or(GpuError::NoSurfaceFormat)?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Uniform Buffer"),
            size: std::mem::size_of::<Uniforms>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let uniform_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Uniform Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Uniform Bind Group"),
            layout: &uniform_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Sprite Shader"),
            source: wgpu::ShaderSource::Wgsl(SPRITE_SHADER.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Sprite Pipeline Layout"),
            bind_group_layouts: &[&uniform_bind_group_layout],
            push_constant_ranges: &[],
        });

        let additive = wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::One,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent::OVER,
        };

        let glow_pipeline = create_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            config.format,
            ("Glow Pipeline", "vs_glow", "fs_glow"),
            additive,
        );
        let sprite_pipeline = create_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            config.format,
            ("Sprite Pipeline", "vs_sprite", "fs_sprite"),
            wgpu::BlendState::ALPHA_BLENDING,
        );

        let instance_buffer = create_instance_buffer(&device, INITIAL_INSTANCE_CAPACITY);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            glow_pipeline,
            sprite_pipeline,
            instance_buffer,
            instance_capacity: INITIAL_INSTANCE_CAPACITY,
            instance_count: 0,
            instances: Vec::new(),
            uniform_buffer,
            uniform_bind_group,
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Size of the drawable area, in the units sprites are positioned in.
    pub fn canvas_size(&self) -> Vec2 {
        Vec2::new(self.config.width as f32, self.config.height as f32)
    }

    /// Sample every sprite at `now` and upload the result.
    pub fn upload(&mut self, sprites: &SpriteSurface, now: Duration) {
        self.instances.clear();
        self.instances
            .extend(sprites.sprites().iter().map(|s| SpriteInstance::new(s, now)));

        if self.instances.len() > self.instance_capacity {
            self.instance_capacity = self.instances.len().next_power_of_two();
            self.instance_buffer = create_instance_buffer(&self.device, self.instance_capacity);
        }
        if !self.instances.is_empty() {
            self.queue
                .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&self.instances));
        }
        self.instance_count = self.instances.len() as u32;
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let uniforms = Uniforms {
            canvas_size: self.canvas_size().to_array(),
            _padding: [0.0; 2],
        };
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.0,
                            g: 0.0,
                            b: 0.0,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if self.instance_count > 0 {
                render_pass.set_bind_group(0, &self.uniform_bind_group, &[]);
                render_pass.set_vertex_buffer(0, self.instance_buffer.slice(..));

                // Glows first so every sprite sits on top of every glow.
                render_pass.set_pipeline(&self.glow_pipeline);
                render_pass.draw(0..6, 0..self.instance_count);
                render_pass.set_pipeline(&self.sprite_pipeline);
                render_pass.draw(0..6, 0..self.instance_count);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Sprite Instance Buffer"),
        size: (capacity * std::mem::size_of::<SpriteInstance>()) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn create_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
    (label, vs_entry, fs_entry): (&str, &str, &str),
    blend: wgpu::BlendState,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some(vs_entry),
            buffers: &[SpriteInstance::layout()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(fs_entry),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(blend),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{NeonBrush, Rgba8};
    use crate::surface::{Glow, Surface, VisualSpec};
    use glam::Vec3;

    #[test]
    fn test_instance_layout_matches_struct() {
        assert_eq!(std::mem::size_of::<SpriteInstance>(), 80);
        assert_eq!(std::mem::size_of::<Uniforms>(), 16);
        let last = SpriteInstance::ATTRIBUTES[5];
        assert_eq!(last.offset, 64);
    }

    #[test]
    fn test_instance_from_sprite() {
        let mut surface = SpriteSurface::new(Vec2::new(100.0, 100.0));
        let visual = surface.create_visual(VisualSpec {
            size: Vec2::splat(7.0),
            offset: Vec3::new(10.0, 20.0, 0.0),
            brush: NeonBrush::from_hue(0.0),
            glow: Glow {
                color: Rgba8::BLUE,
                blur_radius: 15.0,
                opacity: 0.9,
            },
        });
        let sprite = surface.sprite(visual).unwrap();
        let instance = SpriteInstance::new(sprite, Duration::ZERO);

        assert_eq!(instance.position, [10.0, 20.0]);
        assert_eq!(instance.size, [7.0, 7.0]);
        assert!((instance.start_color[0] - 1.0).abs() < 1e-5);
        assert_eq!(&instance.start_color[1..], &[0.0, 0.0, 1.0]);
        assert!((instance.glow_color[2] - 1.0).abs() < 1e-5);
        assert_eq!(instance.glow_color[3], 0.9);
        assert_eq!(instance.glow_radius, 15.0);
    }
}
