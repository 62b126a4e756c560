//! Desktop viewer for the duskfield backdrop.
//!
//! The mouse wheel stands in for page scroll and the cursor drives hover
//! reactivity, so the whole scroll-driven day cycle can be exercised without
//! a browser.

use std::time::Instant;

use wgpu::util::DeviceExt;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use app_core::{
    unpack_rgb, FieldAnimator, FieldConfig, ParticleField, ParticleInstance, PointerState,
    SceneController, CAMERA_FOV_DEG, CAMERA_Z, FAR_PLANE, NEAR_PLANE, POINTS_WGSL,
};
use glam::{Mat4, Vec3};

// Wheel travel that spans the synthetic page from sunrise to sunset.
const SCROLL_SPAN_PX: f64 = 4000.0;
const LINE_HEIGHT_PX: f64 = 40.0;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
    resolution: [f32; 2],
    time: f32,
    speed: f32,
    pointer: [f32; 2],
    base_size: f32,
    camera_z: f32,
    flags: u32,
    layer_opacity: f32,
    _pad: [f32; 2],
}

// Bit assignments shared with shaders/points.wgsl
const FLAG_HOVER: u32 = 1;
const FLAG_ALPHA: u32 = 2;
const FLAG_NO_DRIFT: u32 = 4;

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    particle_count: u32,
    speed: f32,
    base_size: f32,
    flags: u32,
    width: u32,
    height: u32,
    last_frame: Instant,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window, field: &ParticleField) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("points_shader"),
            source: wgpu::ShaderSource::Wgsl(POINTS_WGSL.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        // Unit quad, two triangles; corners double as disc coordinates.
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instances = field.instance_data();
        let instance_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("instance_vb"),
            contents: bytemuck::cast_slice(&instances),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
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
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let vertex_buffers = [
            // slot 0: quad corners
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: static per-particle attributes
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<ParticleInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 12,
                        shader_location: 2,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 16,
                        shader_location: 3,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 32,
                        shader_location: 4,
                    },
                ],
            },
        ];
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let cfg = field.config();
        let mut flags = 0u32;
        if cfg.hover_reactive {
            flags |= FLAG_HOVER;
        }
        if cfg.alpha_blending {
            flags |= FLAG_ALPHA;
        }
        if cfg.disable_rotational_drift {
            flags |= FLAG_NO_DRIFT;
        }

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            quad_vb,
            instance_vb,
            bind_group,
            particle_count: field.len() as u32,
            speed: cfg.speed,
            base_size: cfg.base_size,
            flags,
            width: size.width,
            height: size.height,
            last_frame: Instant::now(),
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn view_proj(&self) -> [[f32; 4]; 4] {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let proj = Mat4::perspective_rh(CAMERA_FOV_DEG.to_radians(), aspect, NEAR_PLANE, FAR_PLANE);
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, CAMERA_Z), Vec3::ZERO, Vec3::Y);
        (proj * view).to_cols_array_2d()
    }

    fn render(
        &mut self,
        animator: &mut FieldAnimator,
        controller: &mut SceneController,
    ) -> Result<(), wgpu::SurfaceError> {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;
        let dt_sec = dt.as_secs_f32();

        let params = match animator.frame(dt_sec) {
            Some(p) => p,
            None => return Ok(()),
        };
        let snapshot = controller.tick(dt_sec);

        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                view_proj: self.view_proj(),
                resolution: [self.width as f32, self.height as f32],
                time: params.elapsed_seconds,
                speed: self.speed,
                pointer: [params.pointer.x, params.pointer.y],
                base_size: self.base_size,
                camera_z: CAMERA_Z,
                flags: self.flags,
                layer_opacity: snapshot.star_layer_opacity,
                _pad: [0.0; 2],
            }),
        );

        // The window plays the role of the sky layer, so clear with the
        // blended sky color.
        let [r, g, b] = unpack_rgb(snapshot.palette.sky);
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
            rpass.draw(0..6, 0..self.particle_count);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let field = match ParticleField::generate(FieldConfig::default(), 42) {
        Ok(f) => f,
        Err(e) => {
            log::error!("invalid field config: {e}");
            return;
        }
    };

    let event_loop = EventLoop::new().expect("event loop");
    let window = WindowBuilder::new()
        .with_title("duskfield (native)")
        .build(&event_loop)
        .expect("window");

    let mut state = pollster::block_on(GpuState::new(&window, &field)).expect("gpu");
    let mut animator = FieldAnimator::new(field);
    let mut controller = SceneController::new();
    let mut scroll_px: f64 = 0.0;

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => state.resize(size),
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                animator.teardown();
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::MouseWheel { delta, .. },
                ..
            } => {
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y as f64 * LINE_HEIGHT_PX,
                    MouseScrollDelta::PixelDelta(p) => p.y,
                };
                scroll_px = (scroll_px - dy).clamp(0.0, SCROLL_SPAN_PX);
                controller.set_progress((scroll_px / SCROLL_SPAN_PX) as f32);
            }
            Event::WindowEvent {
                event: WindowEvent::CursorMoved { position, .. },
                ..
            } => {
                let size = state.window.inner_size();
                let ndc = PointerState::from_viewport_px(
                    position.x as f32,
                    position.y as f32,
                    size.width as f32,
                    size.height as f32,
                );
                animator.on_pointer_move(ndc.x, ndc.y);
            }
            Event::AboutToWait => match state.render(&mut animator, &mut controller) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("surface error: {:?}", e),
            },
            _ => {}
        })
        .expect("event loop");
}
