use std::time::{Duration, Instant};
use wgpu::util::DeviceExt;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use story_core::draw::{self, Instance, Uniforms, MAX_INSTANCES, QUAD_VERTICES};
use story_core::{Panel, Presenter, Scene, Sequencer, Trigger};

const INSTANCE_ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
    1 => Float32x3,
    2 => Float32,
    3 => Float32x4,
    4 => Float32
];

const WINDOW_TITLE: &str = "Sea Palace";
const MAX_FRAME_DT: Duration = Duration::from_millis(100);
const WHEEL_LINES_PER_DOUBLING: f32 = 10.0;

/// No DOM here: panels are logged and listed in the window title, and the
/// veil is drawn by the shader.
#[derive(Default)]
struct TitlePresenter {
    visible: Vec<Panel>,
    scene: String,
    dirty: bool,
}

impl TitlePresenter {
    fn take_title(&mut self) -> Option<String> {
        if !self.dirty {
            return None;
        }
        self.dirty = false;
        let mut title = format!("{WINDOW_TITLE} - {}", self.scene);
        for panel in &self.visible {
            title.push_str(&format!(" [{}]", panel_hint(*panel)));
        }
        Some(title)
    }
}

fn panel_hint(panel: Panel) -> &'static str {
    match panel {
        Panel::TitleCard => "title",
        Panel::NextButton => "Space: next",
        Panel::ChoiceButtons => "A / B: choose",
        Panel::EndingA => "ending A, R: restart",
        Panel::EndingB => "ending B, R: restart",
    }
}

impl Presenter for TitlePresenter {
    fn show_panel(&mut self, panel: Panel) {
        if !self.visible.contains(&panel) {
            log::info!("[ui] show {:?}", panel);
            self.visible.push(panel);
            self.dirty = true;
        }
    }

    fn hide_panel(&mut self, panel: Panel) {
        if let Some(pos) = self.visible.iter().position(|p| *p == panel) {
            log::info!("[ui] hide {:?}", panel);
            self.visible.remove(pos);
            self.dirty = true;
        }
    }

    fn cover(&mut self) {}
    fn uncover(&mut self) {}

    fn scene_activated(&mut self, scene: &Scene) {
        self.scene = scene.kind().to_string();
        self.dirty = true;
    }
}

/// winit key to the DOM-style key name `Trigger::from_key` understands.
fn key_name(key: &Key) -> Option<&str> {
    match key {
        Key::Named(NamedKey::Space) => Some(" "),
        Key::Named(NamedKey::Enter) => Some("Enter"),
        Key::Named(NamedKey::ArrowRight) => Some("ArrowRight"),
        Key::Character(c) => Some(c.as_str()),
        _ => None,
    }
}

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
    instances: Vec<Instance>,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window) -> anyhow::Result<Self> {
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
        let format = surface_caps
            .formats
            .first()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene"),
            source: wgpu::ShaderSource::Wgsl(story_core::SCENE_WGSL.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instance_vb"),
            size: (std::mem::size_of::<Instance>() * MAX_INSTANCES) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
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
            // slot 1: billboard instances
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<Instance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &INSTANCE_ATTRIBUTES,
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
            instances: Vec::with_capacity(MAX_INSTANCES),
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn render(&mut self, scene: &Scene, veil: f32) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms::for_scene(scene, veil)),
        );
        draw::build_instances(scene, &mut self.instances);
        self.instances.truncate(MAX_INSTANCES);
        self.queue
            .write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(&self.instances));

        let [r, g, b, a] = draw::clear_color(scene, veil);
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
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
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
            rpass.draw(0..6, 0..self.instances.len() as u32);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut sequencer = Sequencer::new(story_core::story::sea_palace(), TitlePresenter::default())?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window))?;
    let size = window.inner_size();
    sequencer.resize(size.width, size.height);
    sequencer.start();

    let mut last_frame = Instant::now();
    let mut cursor: Option<(f64, f64)> = None;
    let mut dragging = false;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => {
                state.resize(size);
                sequencer.resize(size.width, size.height);
            }
            WindowEvent::CloseRequested => {
                sequencer.stop();
                elwt.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                if logical_key == Key::Named(NamedKey::Escape) {
                    sequencer.stop();
                    elwt.exit();
                } else if let Some(trigger) = key_name(&logical_key).and_then(Trigger::from_key) {
                    let outcome = sequencer.trigger(trigger);
                    log::debug!("[keys] {:?} -> {:?}", trigger, outcome);
                }
            }
            WindowEvent::MouseInput {
                state: button_state,
                button: MouseButton::Left,
                ..
            } => dragging = button_state == ElementState::Pressed,
            WindowEvent::CursorMoved { position, .. } => {
                if let (true, Some((x, y))) = (dragging, cursor) {
                    sequencer.orbit((position.x - x) as f32, (position.y - y) as f32);
                }
                cursor = Some((position.x, position.y));
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 / 40.0,
                };
                // Wheel up brings the camera closer.
                sequencer.zoom((-lines / WHEEL_LINES_PER_DOUBLING).exp2());
            }
            _ => {}
        },
        Event::AboutToWait => {
            let now = Instant::now();
            let dt = (now - last_frame).min(MAX_FRAME_DT);
            last_frame = now;
            sequencer.tick(dt);
            if let Some(title) = sequencer.presenter_mut().take_title() {
                state.window.set_title(&title);
            }
            let veil = sequencer.fade().opacity();
            let Some(scene) = sequencer.active_scene() else {
                return;
            };
            match state.render(scene, veil) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("render error: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
