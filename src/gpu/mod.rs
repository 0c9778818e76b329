//! GPU state: device acquisition, pipelines, buffers and the per-frame
//! draw submission.
//!
//! The foliage is drawn as camera-facing quads expanded in the vertex
//! shader from two vec4s per point; ornaments are two indexed meshes drawn
//! instanced with per-frame transforms. Both passes render into an
//! offscreen target that the finishing pass composites to the surface.

pub mod camera;
pub mod mesh;
pub mod post_process;

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::config::{CardConfig, BACKGROUND};
use crate::error::GpuError;
use crate::ornaments::OrnamentInstance;
use crate::particles::ParticleInstance;
pub use camera::OrbitCamera;
pub use post_process::{PostProcessState, POST_SHADER};

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Point shader for the foliage field.
///
/// The vertex stage is the morphing engine's hot path: it blends the two
/// stored endpoints by the shared progress and layers the breathing, wave
/// and scatter-drift terms on top. [`crate::particles::animated_position`]
/// and [`crate::particles::zone_color`] mirror this code on the CPU.
pub const PARTICLE_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    model: mat4x4<f32>,
    camera_pos: vec3<f32>,
    time: f32,
    delta_time: f32,
    progress: f32,
    _pad: vec2<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
    @location(1) seed: f32,
};

@vertex
fn vs_main(
    @builtin(vertex_index) vertex_index: u32,
    @location(0) scatter_seed: vec4<f32>,
    @location(1) target_size: vec4<f32>,
) -> VertexOutput {
    var quad_vertices = array<vec2<f32>, 6>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>( 1.0,  1.0),
    );
    let corner = quad_vertices[vertex_index];

    let seed = scatter_seed.w;
    let size = target_size.w;

    var pos = mix(scatter_seed.xyz, target_size.xyz, uniforms.progress);

    let breathe = sin(uniforms.time + seed * 15.0) * 0.2;
    let wave = cos(pos.x * 0.5 + uniforms.time) * 0.1;
    let drift = sin(uniforms.time * 0.3 + seed * 30.0) * (1.0 - uniforms.progress) * 2.0;

    pos.x += breathe * 0.3 + drift;
    pos.y += breathe + wave + drift;
    pos.z += breathe * 0.3 + drift;

    var clip_pos = uniforms.view_proj * uniforms.model * vec4<f32>(pos, 1.0);

    let twinkle = 1.0 + sin(uniforms.time * 3.0 + seed * 20.0) * 0.3;
    let point_size = size * twinkle;

    // Constant clip-space offset: after the perspective divide the quad
    // shrinks with 1/w, which is the distance attenuation.
    clip_pos.x += corner.x * point_size;
    clip_pos.y += corner.y * point_size;

    var out: VertexOutput;
    out.clip_position = clip_pos;
    out.uv = corner;
    out.seed = seed;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let dist = length(in.uv) * 0.5;
    if dist > 0.5 {
        discard;
    }
    // Sharp edge for a solid look.
    let gradient = smoothstep(0.5, 0.4, dist);

    let gold = vec3<f32>(1.0, 0.7, 0.0);
    let magenta = vec3<f32>(0.9, 0.0, 0.4);
    let cyan = vec3<f32>(0.0, 0.8, 1.0);
    let purple = vec3<f32>(0.5, 0.0, 0.8);
    let emerald = vec3<f32>(0.0, 0.8, 0.4);

    let blend = sin(uniforms.time + in.seed * 5.0) * 0.5 + 0.5;

    var color: vec3<f32>;
    if in.seed < 0.2 {
        color = mix(gold, magenta, blend);
    } else if in.seed < 0.4 {
        color = mix(purple, cyan, blend);
    } else if in.seed < 0.6 {
        color = emerald;
    } else if in.seed < 0.8 {
        color = gold;
    } else {
        color = magenta;
    }

    // Brightness boost plus a slight center highlight, kept below white.
    color *= 1.2;
    color += vec3<f32>(0.1, 0.1, 0.1) * (1.0 - dist * 2.0);

    return vec4<f32>(color, gradient);
}
"#;

/// Instanced mesh shader for the ornaments: per-instance model matrix and
/// tint, a purple ambient with warm/cool point lights and a gold top wash,
/// and depth fog toward the background color.
pub const ORNAMENT_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    model: mat4x4<f32>,
    camera_pos: vec3<f32>,
    time: f32,
    delta_time: f32,
    progress: f32,
    _pad: vec2<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

const AMBIENT_COLOR: vec3<f32> = vec3<f32>(0.43, 0.05, 0.82);
const KEY_POS: vec3<f32> = vec3<f32>(10.0, 10.0, 10.0);
const KEY_COLOR: vec3<f32> = vec3<f32>(0.85, 0.01, 0.41);
const FILL_POS: vec3<f32> = vec3<f32>(-10.0, 5.0, -10.0);
const FILL_COLOR: vec3<f32> = vec3<f32>(0.0, 0.9, 1.0);
const TOP_COLOR: vec3<f32> = vec3<f32>(1.0, 0.84, 0.0);
const BACKGROUND_COLOR: vec3<f32> = vec3<f32>(0.008, 0.0, 0.02);
const FOG_NEAR: f32 = 15.0;
const FOG_FAR: f32 = 50.0;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct InstanceInput {
    @location(2) model_0: vec4<f32>,
    @location(3) model_1: vec4<f32>,
    @location(4) model_2: vec4<f32>,
    @location(5) model_3: vec4<f32>,
    @location(6) color: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) color: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    let instance_model = mat4x4<f32>(
        instance.model_0,
        instance.model_1,
        instance.model_2,
        instance.model_3,
    );
    let model = uniforms.model * instance_model;

    let world = model * vec4<f32>(vertex.position, 1.0);
    // Per-instance scale is uniform, so the upper 3x3 rotates normals cleanly.
    let normal = normalize((model * vec4<f32>(vertex.normal, 0.0)).xyz);

    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * world;
    out.world_pos = world.xyz;
    out.normal = normal;
    out.color = instance.color.rgb;
    return out;
}

fn point_light(
    world_pos: vec3<f32>,
    normal: vec3<f32>,
    view_dir: vec3<f32>,
    base: vec3<f32>,
    light_pos: vec3<f32>,
    light_color: vec3<f32>,
) -> vec3<f32> {
    let to_light = light_pos - world_pos;
    let dist = length(to_light);
    let dir = to_light / dist;
    let attenuation = 1.0 / (1.0 + 0.004 * dist * dist);
    let diffuse = max(dot(normal, dir), 0.0);
    let half_dir = normalize(dir + view_dir);
    let specular = pow(max(dot(normal, half_dir), 0.0), 32.0) * 0.4;
    return (base * diffuse + vec3<f32>(specular, specular, specular)) * light_color * attenuation * 1.5;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let normal = normalize(in.normal);
    let view_dir = normalize(uniforms.camera_pos - in.world_pos);

    var lit = in.color * AMBIENT_COLOR * 0.8;
    lit += point_light(in.world_pos, normal, view_dir, in.color, KEY_POS, KEY_COLOR);
    lit += point_light(in.world_pos, normal, view_dir, in.color, FILL_POS, FILL_COLOR);

    // Gold wash from straight above.
    lit += in.color * TOP_COLOR * max(normal.y, 0.0) * 0.6;

    let fog = smoothstep(FOG_NEAR, FOG_FAR, distance(in.world_pos, uniforms.camera_pos));
    let color = mix(lit, BACKGROUND_COLOR, fog);
    return vec4<f32>(color, 1.0);
}
"#;

/// Shared uniforms, written once per frame. Layout matches the `Uniforms`
/// struct in all three shaders.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    camera_pos: [f32; 3],
    time: f32,
    delta_time: f32,
    progress: f32,
    _padding: [f32; 2],
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    particle_pipeline: wgpu::RenderPipeline,
    ornament_pipeline: wgpu::RenderPipeline,
    particle_instance_buffer: wgpu::Buffer,
    box_vertex_buffer: wgpu::Buffer,
    box_index_buffer: wgpu::Buffer,
    box_index_count: u32,
    sphere_vertex_buffer: wgpu::Buffer,
    sphere_index_buffer: wgpu::Buffer,
    sphere_index_count: u32,
    box_instance_buffer: wgpu::Buffer,
    sphere_instance_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    post: PostProcessState,
    pub camera: OrbitCamera,
    particle_count: u32,
}

impl GpuState {
    pub async fn new(
        window: Arc<Window>,
        card: &CardConfig,
        particle_instances: &[ParticleInstance],
    ) -> Result<Self, GpuError> {
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
            .map_err(|_| GpuError::NoAdapter)?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                trace: Default::default(),
            })
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        // The particle attribute arrays are built once on the CPU and
        // uploaded here; nothing rewrites them afterwards.
        let particle_count = particle_instances.len() as u32;
        let particle_instance_buffer = create_instance_buffer(
            &device,
            "Particle Instance Buffer",
            particle_instances.len(),
            std::mem::size_of::<ParticleInstance>(),
        );
        if !particle_instances.is_empty() {
            queue.write_buffer(
                &particle_instance_buffer,
                0,
                bytemuck::cast_slice(particle_instances),
            );
        }

        let box_mesh = mesh::unit_cube();
        let sphere_mesh = mesh::uv_sphere(16, 32);

        let box_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Box Vertex Buffer"),
            contents: bytemuck::cast_slice(&box_mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let box_index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Box Index Buffer"),
            contents: bytemuck::cast_slice(&box_mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let sphere_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sphere Vertex Buffer"),
            contents: bytemuck::cast_slice(&sphere_mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let sphere_index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sphere Index Buffer"),
            contents: bytemuck::cast_slice(&sphere_mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let box_capacity = (card.ornament_count / 2) as usize;
        let sphere_capacity = card.ornament_count as usize - box_capacity;
        let box_instance_buffer = create_instance_buffer(
            &device,
            "Box Instance Buffer",
            box_capacity,
            std::mem::size_of::<OrnamentInstance>(),
        );
        let sphere_instance_buffer = create_instance_buffer(
            &device,
            "Sphere Instance Buffer",
            sphere_capacity,
            std::mem::size_of::<OrnamentInstance>(),
        );

        let uniforms = Uniforms {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            model: Mat4::IDENTITY.to_cols_array_2d(),
            camera_pos: [0.0, 0.0, card.camera_distance],
            time: 0.0,
            delta_time: 0.0,
            progress: 0.0,
            _padding: [0.0; 2],
        };
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Uniform Buffer"),
            contents: bytemuck::cast_slice(&[uniforms]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let uniform_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Uniform Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
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

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[&uniform_bind_group_layout],
            push_constant_ranges: &[],
        });

        let particle_pipeline =
            create_particle_pipeline(&device, &pipeline_layout, surface_format);
        let ornament_pipeline =
            create_ornament_pipeline(&device, &pipeline_layout, surface_format);

        let post = PostProcessState::new(
            &device,
            &uniform_buffer,
            config.width,
            config.height,
            surface_format,
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            particle_pipeline,
            ornament_pipeline,
            particle_instance_buffer,
            box_vertex_buffer,
            box_index_buffer,
            box_index_count: box_mesh.index_count(),
            sphere_vertex_buffer,
            sphere_index_buffer,
            sphere_index_count: sphere_mesh.index_count(),
            box_instance_buffer,
            sphere_instance_buffer,
            uniform_buffer,
            uniform_bind_group,
            post,
            camera: OrbitCamera::new(card.camera_distance),
            particle_count,
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            self.post.resize(
                &self.device,
                &self.uniform_buffer,
                self.config.width,
                self.config.height,
                self.config.format,
            );
        }
    }

    /// Upload this frame's uniforms and ornament batches, then draw:
    /// ornaments and foliage into the offscreen target, finishing pass to
    /// the surface.
    pub fn render(
        &mut self,
        elapsed: f32,
        delta: f32,
        progress: f32,
        model: Mat4,
        box_instances: &[OrnamentInstance],
        sphere_instances: &[OrnamentInstance],
    ) -> Result<(), wgpu::SurfaceError> {
        let aspect = self.config.width as f32 / self.config.height as f32;
        let uniforms = Uniforms {
            view_proj: self.camera.view_proj(aspect).to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            camera_pos: self.camera.position().to_array(),
            time: elapsed,
            delta_time: delta,
            progress,
            _padding: [0.0; 2],
        };
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));

        if !box_instances.is_empty() {
            self.queue.write_buffer(
                &self.box_instance_buffer,
                0,
                bytemuck::cast_slice(box_instances),
            );
        }
        if !sphere_instances.is_empty() {
            self.queue.write_buffer(
                &self.sphere_instance_buffer,
                0,
                bytemuck::cast_slice(sphere_instances),
            );
        }

        let output = self.surface.get_current_texture()?;
        let surface_view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut scene_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.post.view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: BACKGROUND.x as f64,
                            g: BACKGROUND.y as f64,
                            b: BACKGROUND.z as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.post.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Opaque ornaments first, transparent foliage on top.
            scene_pass.set_pipeline(&self.ornament_pipeline);
            scene_pass.set_bind_group(0, &self.uniform_bind_group, &[]);

            if !box_instances.is_empty() {
                scene_pass.set_vertex_buffer(0, self.box_vertex_buffer.slice(..));
                scene_pass.set_vertex_buffer(1, self.box_instance_buffer.slice(..));
                scene_pass
                    .set_index_buffer(self.box_index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                scene_pass.draw_indexed(
                    0..self.box_index_count,
                    0,
                    0..box_instances.len() as u32,
                );
            }
            if !sphere_instances.is_empty() {
                scene_pass.set_vertex_buffer(0, self.sphere_vertex_buffer.slice(..));
                scene_pass.set_vertex_buffer(1, self.sphere_instance_buffer.slice(..));
                scene_pass.set_index_buffer(
                    self.sphere_index_buffer.slice(..),
                    wgpu::IndexFormat::Uint32,
                );
                scene_pass.draw_indexed(
                    0..self.sphere_index_count,
                    0,
                    0..sphere_instances.len() as u32,
                );
            }

            if self.particle_count > 0 {
                scene_pass.set_pipeline(&self.particle_pipeline);
                scene_pass.set_vertex_buffer(0, self.particle_instance_buffer.slice(..));
                scene_pass.draw(0..6, 0..self.particle_count);
            }
        }

        {
            let mut post_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Post-Process Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            post_pass.set_pipeline(&self.post.pipeline);
            post_pass.set_bind_group(0, &self.post.bind_group, &[]);
            post_pass.draw(0..3, 0..1);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

/// Per-frame-writable vertex buffer. Zero-length buffers are rejected by
/// the API, so an empty set keeps one zeroed slot that is never drawn.
fn create_instance_buffer(
    device: &wgpu::Device,
    label: &str,
    count: usize,
    stride: usize,
) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: (count.max(1) * stride) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn create_particle_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    surface_format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Particle Shader"),
        source: wgpu::ShaderSource::Wgsl(PARTICLE_SHADER.into()),
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Particle Pipeline"),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<ParticleInstance>() as wgpu::BufferAddress,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        offset: 0,
                        shader_location: 0,
                        format: wgpu::VertexFormat::Float32x4,
                    },
                    wgpu::VertexAttribute {
                        offset: 16,
                        shader_location: 1,
                        format: wgpu::VertexFormat::Float32x4,
                    },
                ],
            }],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            ..Default::default()
        },
        // Foliage tests against ornament depth but does not write its own,
        // so overlapping points blend instead of stippling.
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: false,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

fn create_ornament_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    surface_format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Ornament Shader"),
        source: wgpu::ShaderSource::Wgsl(ORNAMENT_SHADER.into()),
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Ornament Pipeline"),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<mesh::MeshVertex>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &[
                        wgpu::VertexAttribute {
                            offset: 0,
                            shader_location: 0,
                            format: wgpu::VertexFormat::Float32x3,
                        },
                        wgpu::VertexAttribute {
                            offset: 12,
                            shader_location: 1,
                            format: wgpu::VertexFormat::Float32x3,
                        },
                    ],
                },
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<OrnamentInstance>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &[
                        wgpu::VertexAttribute {
                            offset: 0,
                            shader_location: 2,
                            format: wgpu::VertexFormat::Float32x4,
                        },
                        wgpu::VertexAttribute {
                            offset: 16,
                            shader_location: 3,
                            format: wgpu::VertexFormat::Float32x4,
                        },
                        wgpu::VertexAttribute {
                            offset: 32,
                            shader_location: 4,
                            format: wgpu::VertexFormat::Float32x4,
                        },
                        wgpu::VertexAttribute {
                            offset: 48,
                            shader_location: 5,
                            format: wgpu::VertexFormat::Float32x4,
                        },
                        wgpu::VertexAttribute {
                            offset: 64,
                            shader_location: 6,
                            format: wgpu::VertexFormat::Float32x4,
                        },
                    ],
                },
            ],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}
