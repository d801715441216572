use crate::helpers::{self, GlobalsUniform, ObjectUniform};
use scene_core::{Camera, Rasterizer, Scene, SceneObject};
use wgpu::util::DeviceExt;

/// GPU resources for one scene object. Meshes never change after setup, so
/// only the uniform buffer is rewritten each frame.
struct GpuObject {
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

pub struct SceneRenderer<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    opaque_pipeline: wgpu::RenderPipeline,
    transparent_pipeline: wgpu::RenderPipeline,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    object_bgl: wgpu::BindGroupLayout,
    objects: Vec<GpuObject>,
    depth: (wgpu::Texture, wgpu::TextureView),
}

impl<'w> SceneRenderer<'w> {
    pub async fn new(
        instance: &wgpu::Instance,
        surface: wgpu::Surface<'w>,
        width: u32,
        height: u32,
    ) -> anyhow::Result<Self> {
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
                    // default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!("request_device error: {e:?}"))?;

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
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no texture formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} format={:?}", config.width, config.height, format);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::SCENE_WGSL.into()),
        });

        let uniform_entry = |visibility| wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        };
        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[uniform_entry(wgpu::ShaderStages::VERTEX_FRAGMENT)],
        });
        let object_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("object_bgl"),
            entries: &[uniform_entry(wgpu::ShaderStages::VERTEX_FRAGMENT)],
        });

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<GlobalsUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&globals_bgl, &object_bgl],
            push_constant_ranges: &[],
        });
        let opaque_pipeline =
            helpers::make_scene_pipeline(&device, &pipeline_layout, &shader, format, false);
        let transparent_pipeline =
            helpers::make_scene_pipeline(&device, &pipeline_layout, &shader, format, true);

        let depth = helpers::create_depth_texture(&device, config.width, config.height);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            opaque_pipeline,
            transparent_pipeline,
            globals_buffer,
            globals_bind_group,
            object_bgl,
            objects: Vec::new(),
            depth,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    fn upload_object(&self, object: &SceneObject) -> GpuObject {
        let vertices = helpers::flat_vertices(&object.mesh);
        let vertex_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: object.name.as_deref(),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let uniform_buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("object_uniform"),
            size: std::mem::size_of::<ObjectUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("object_bg"),
            layout: &self.object_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        GpuObject {
            vertex_buffer,
            vertex_count: vertices.len() as u32,
            uniform_buffer,
            bind_group,
        }
    }

    /// Upload meshes for objects added since the last frame and refresh every
    /// object's transform and material.
    fn sync_objects(&mut self, scene: &Scene) {
        while self.objects.len() < scene.len() {
            let id = scene_core::ObjectId(self.objects.len());
            let Some(object) = scene.get(id) else { break };
            let gpu = self.upload_object(object);
            self.objects.push(gpu);
        }
        for (id, object) in scene.iter() {
            let Some(gpu) = self.objects.get(id.0) else { continue };
            let m = &object.material;
            let uniform = ObjectUniform {
                model: object.model_matrix().to_cols_array_2d(),
                color: m.color.to_vec3().extend(m.opacity).to_array(),
                emissive: m.emissive.to_vec3().extend(1.0).to_array(),
            };
            self.queue
                .write_buffer(&gpu.uniform_buffer, 0, bytemuck::bytes_of(&uniform));
        }
    }

    fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
        self.depth =
            helpers::create_depth_texture(&self.device, self.config.width, self.config.height);
    }
}

impl Rasterizer for SceneRenderer<'_> {
    fn render(&mut self, scene: &Scene, camera: &Camera) -> anyhow::Result<()> {
        self.sync_objects(scene);
        self.queue.write_buffer(
            &self.globals_buffer,
            0,
            bytemuck::bytes_of(&GlobalsUniform::new(scene, camera)),
        );

        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost or outdated; reconfiguring");
                self.reconfigure();
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let order = helpers::draw_order(scene, camera.eye);
        let clear = scene.clear_color;
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
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: clear.r as f64,
                            g: clear.g as f64,
                            b: clear.b as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.1,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);
            let mut bound_transparent = None;
            for id in order {
                let (Some(object), Some(gpu)) = (scene.get(id), self.objects.get(id.0)) else {
                    continue;
                };
                let transparent = object.material.transparent;
                if bound_transparent != Some(transparent) {
                    let pipeline = if transparent {
                        &self.transparent_pipeline
                    } else {
                        &self.opaque_pipeline
                    };
                    rpass.set_pipeline(pipeline);
                    bound_transparent = Some(transparent);
                }
                rpass.set_bind_group(1, &gpu.bind_group, &[]);
                rpass.set_vertex_buffer(0, gpu.vertex_buffer.slice(..));
                rpass.draw(0..gpu.vertex_count, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if (width, height) == self.size() {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.reconfigure();
        log::info!("[gpu] resized to {width}x{height}");
    }
}
