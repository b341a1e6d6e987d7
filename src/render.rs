//! WebGPU scene renderer.
//!
//! One shared triangle mesh per [`GeometryKind`]; every scene node becomes an
//! instance (model matrix + color) rebuilt each frame. Opaque meshes go
//! through a lambert-lit pipeline with depth writes, flames through an
//! additive pipeline that tests depth without writing it.

use glam::{Mat4, Quat, Vec3};
use web_sys as web;

use crate::core::camera::Camera;
use crate::core::geometry::Vertex;
use crate::core::scene::{GeometryKind, MaterialKind, Scene};

mod helpers;

const MAX_POINT_LIGHTS: usize = 8;
const INITIAL_INSTANCE_CAPACITY: u32 = 256;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct GpuLight {
    // xyz position, w range
    position: [f32; 4],
    // rgb color, w intensity
    color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    // rgb ambient color, w active light count
    ambient: [f32; 4],
    lights: [GpuLight; MAX_POINT_LIGHTS],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Instance {
    model: [[f32; 4]; 4],
    // rgb color, w opacity
    color: [f32; 4],
}

struct GeometrySlot {
    vertex_buf: wgpu::Buffer,
    index_buf: wgpu::Buffer,
    index_count: u32,
}

struct DrawBatch {
    material: MaterialKind,
    geometry: usize,
    first_instance: u32,
    instance_count: u32,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,

    globals_buf: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    lit_pipeline: wgpu::RenderPipeline,
    flame_pipeline: wgpu::RenderPipeline,

    geometries: Vec<GeometrySlot>,
    instance_buf: wgpu::Buffer,
    instance_capacity: u32,
    instances: Vec<Instance>,
    batches: Vec<DrawBatch>,

    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let (_depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);

        // Upload one mesh per geometry kind
        let mut geometries = Vec::with_capacity(GeometryKind::ALL.len());
        for kind in GeometryKind::ALL {
            let mesh = kind.mesh();
            let vertex_buf = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("scene_vertices"),
                size: (mesh.vertices.len() * std::mem::size_of::<Vertex>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            queue.write_buffer(&vertex_buf, 0, bytemuck::cast_slice(&mesh.vertices));
            let index_buf = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("scene_indices"),
                size: (mesh.indices.len() * std::mem::size_of::<u16>()) as u64,
                usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            queue.write_buffer(&index_buf, 0, bytemuck::cast_slice(&mesh.indices));
            geometries.push(GeometrySlot {
                vertex_buf,
                index_buf,
                index_count: mesh.indices.len() as u32,
            });
        }

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });

        let globals_buf = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buf.as_entire_binding(),
            }],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&globals_bgl],
            push_constant_ranges: &[],
        });

        let vertex_layouts = [
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<Vertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3],
            },
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<Instance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &wgpu::vertex_attr_array![
                    2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4, 6 => Float32x4
                ],
            },
        ];

        let lit_pipeline = helpers::make_scene_pipeline(
            &device,
            &layout,
            &shader,
            "fs_lit",
            format,
            &vertex_layouts,
            None,
            true,
        );
        // Additive over premultiplied flame color; depth test only
        let additive = wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::One,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::One,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
        };
        let flame_pipeline = helpers::make_scene_pipeline(
            &device,
            &layout,
            &shader,
            "fs_flame",
            format,
            &vertex_layouts,
            Some(additive),
            false,
        );

        let instance_buf = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instances"),
            size: (INITIAL_INSTANCE_CAPACITY as usize * std::mem::size_of::<Instance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_view,
            globals_buf,
            globals_bg,
            lit_pipeline,
            flame_pipeline,
            geometries,
            instance_buf,
            instance_capacity: INITIAL_INSTANCE_CAPACITY,
            instances: Vec::new(),
            batches: Vec::new(),
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            let (_tex, view) = helpers::create_depth_texture(&self.device, width, height);
            self.depth_view = view;
        }
    }

    /// Pack every scene node into instance data, grouped so each pipeline
    /// draws each geometry once.
    fn rebuild_instances(&mut self, scene: &Scene) {
        self.instances.clear();
        self.batches.clear();
        for material in [MaterialKind::Lit, MaterialKind::Flame] {
            for kind in GeometryKind::ALL {
                let first_instance = self.instances.len() as u32;
                for node in &scene.meshes {
                    if node.material != material || node.geometry != kind {
                        continue;
                    }
                    let model = Mat4::from_scale_rotation_translation(
                        node.scale,
                        Quat::from_rotation_y(node.yaw),
                        node.position,
                    );
                    self.instances.push(Instance {
                        model: model.to_cols_array_2d(),
                        color: [node.color.x, node.color.y, node.color.z, node.opacity],
                    });
                }
                let instance_count = self.instances.len() as u32 - first_instance;
                if instance_count > 0 {
                    self.batches.push(DrawBatch {
                        material,
                        geometry: kind.index(),
                        first_instance,
                        instance_count,
                    });
                }
            }
        }
    }

    fn upload_instances(&mut self) {
        let needed = self.instances.len() as u32;
        if needed > self.instance_capacity {
            self.instance_capacity = needed.next_power_of_two();
            self.instance_buf = self.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("instances"),
                size: (self.instance_capacity as usize * std::mem::size_of::<Instance>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
        }
        if !self.instances.is_empty() {
            self.queue
                .write_buffer(&self.instance_buf, 0, bytemuck::cast_slice(&self.instances));
        }
    }

    fn write_globals(&self, scene: &Scene, camera: &Camera) {
        let mut lights = [GpuLight {
            position: [0.0; 4],
            color: [0.0; 4],
        }; MAX_POINT_LIGHTS];
        let count = scene.lights.len().min(MAX_POINT_LIGHTS);
        for (slot, light) in lights.iter_mut().zip(&scene.lights) {
            *slot = GpuLight {
                position: [
                    light.position.x,
                    light.position.y,
                    light.position.z,
                    light.range,
                ],
                color: [light.color.x, light.color.y, light.color.z, light.intensity],
            };
        }
        let ambient = scene.ambient.unwrap_or(Vec3::ZERO);
        let globals = Globals {
            view_proj: camera.view_projection().to_cols_array_2d(),
            camera_pos: [camera.eye.x, camera.eye.y, camera.eye.z, 1.0],
            ambient: [ambient.x, ambient.y, ambient.z, count as f32],
            lights,
        };
        self.queue
            .write_buffer(&self.globals_buf, 0, bytemuck::bytes_of(&globals));
    }

    pub fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<(), wgpu::SurfaceError> {
        self.rebuild_instances(scene);
        self.upload_instances();
        self.write_globals(scene, camera);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let clear = wgpu::Color {
            r: scene.background.x as f64,
            g: scene.background.y as f64,
            b: scene.background.z as f64,
            a: 1.0,
        };
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bg, &[]);
            rpass.set_vertex_buffer(1, self.instance_buf.slice(..));
            for material in [MaterialKind::Lit, MaterialKind::Flame] {
                match material {
                    MaterialKind::Lit => rpass.set_pipeline(&self.lit_pipeline),
                    MaterialKind::Flame => rpass.set_pipeline(&self.flame_pipeline),
                }
                for batch in self.batches.iter().filter(|b| b.material == material) {
                    let geom = &self.geometries[batch.geometry];
                    rpass.set_vertex_buffer(0, geom.vertex_buf.slice(..));
                    rpass.set_index_buffer(geom.index_buf.slice(..), wgpu::IndexFormat::Uint16);
                    rpass.draw_indexed(
                        0..geom.index_count,
                        0,
                        batch.first_instance..batch.first_instance + batch.instance_count,
                    );
                }
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
