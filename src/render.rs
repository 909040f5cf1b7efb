use crate::constants::{CLEAR_COLOR, GLOBE_TINT, MARKER_TINT};
use globe_core::{
    unit_quad, uv_sphere, DecodedImage, GlobeScene, GLOBE_FALLBACK_RGBA, GLOBE_SEGMENTS,
    ICON_FALLBACK_RGBA,
};
use web_sys as web;

mod helpers;
mod objects;
mod targets;

use helpers::MeshBuffers;
use objects::{ObjectResources, ObjectUniforms, SceneUniforms};
use targets::DepthTarget;

/// Everything WebGPU needed to draw the globe view: one lit sphere and one
/// alpha-blended quad per marker.
pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,

    globe_pipeline: wgpu::RenderPipeline,
    marker_pipeline: wgpu::RenderPipeline,
    scene_buffer: wgpu::Buffer,
    scene_bg: wgpu::BindGroup,
    object_bgl: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,

    sphere: MeshBuffers,
    quad: MeshBuffers,
    globe: ObjectResources,
    globe_texture: (wgpu::Texture, wgpu::TextureView),
    // one texture per distinct icon path
    icon_textures: Vec<(wgpu::Texture, wgpu::TextureView)>,
    // one per marker; `icon_slots[i]` picks its texture
    markers: Vec<ObjectResources>,
    icon_slots: Vec<usize>,

    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        icon_slots: &[usize],
        icon_count: usize,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

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
                    // default limits on web; older WebGPU impls reject unknown fields
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
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let depth = DepthTarget::new(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(globe_core::SCENE_WGSL.into()),
        });
        let scene_bgl = objects::create_scene_bgl(&device);
        let object_bgl = objects::create_object_bgl(&device);
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&scene_bgl, &object_bgl],
            push_constant_ranges: &[],
        });
        let globe_pipeline =
            helpers::make_scene_pipeline(&device, &layout, &shader, "fs_globe", format, None, true);
        // markers test depth against the globe but never occlude each other
        let marker_pipeline = helpers::make_scene_pipeline(
            &device,
            &layout,
            &shader,
            "fs_marker",
            format,
            Some(wgpu::BlendState::ALPHA_BLENDING),
            false,
        );

        let scene_buffer = objects::create_uniform_buffer::<SceneUniforms>(&device, "scene_uniforms");
        let scene_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &scene_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_buffer.as_entire_binding(),
            }],
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let sphere = helpers::upload_mesh(
            &device,
            "globe_mesh",
            &uv_sphere(1.0, GLOBE_SEGMENTS, GLOBE_SEGMENTS),
        );
        let quad = helpers::upload_mesh(&device, "marker_quad", &unit_quad());

        // Start on solid fallbacks; real images are swapped in once fetched.
        let globe_texture = helpers::create_image_texture(
            &device,
            &queue,
            "globe_fallback",
            &DecodedImage::solid(GLOBE_FALLBACK_RGBA),
        );
        let icon_fallback = DecodedImage::solid(ICON_FALLBACK_RGBA);
        let icon_textures: Vec<(wgpu::Texture, wgpu::TextureView)> = (0..icon_count)
            .map(|_| helpers::create_image_texture(&device, &queue, "icon_fallback", &icon_fallback))
            .collect();

        let globe_buffer = objects::create_uniform_buffer::<ObjectUniforms>(&device, "globe_uniforms");
        let globe = ObjectResources {
            bind_group: objects::object_bind_group(
                &device,
                &object_bgl,
                "globe_bg",
                &globe_buffer,
                &globe_texture.1,
                &sampler,
            ),
            uniform_buffer: globe_buffer,
        };

        let mut markers = Vec::with_capacity(icon_slots.len());
        for &slot in icon_slots {
            let (_, view) = icon_textures
                .get(slot)
                .ok_or_else(|| anyhow::anyhow!("icon slot {slot} out of range"))?;
            let buffer = objects::create_uniform_buffer::<ObjectUniforms>(&device, "marker_uniforms");
            markers.push(ObjectResources {
                bind_group: objects::object_bind_group(
                    &device,
                    &object_bgl,
                    "marker_bg",
                    &buffer,
                    view,
                    &sampler,
                ),
                uniform_buffer: buffer,
            });
        }

        log::info!(
            "[gpu] ready {}x{} format={:?} markers={}",
            width,
            height,
            format,
            markers.len()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            globe_pipeline,
            marker_pipeline,
            scene_buffer,
            scene_bg,
            object_bgl,
            sampler,
            sphere,
            quad,
            globe,
            globe_texture,
            icon_textures,
            markers,
            icon_slots: icon_slots.to_vec(),
            width,
            height,
        })
    }

    pub fn set_globe_texture(&mut self, img: &DecodedImage) {
        let texture = helpers::create_image_texture(&self.device, &self.queue, "globe_tex", img);
        self.globe.bind_group = objects::object_bind_group(
            &self.device,
            &self.object_bgl,
            "globe_bg",
            &self.globe.uniform_buffer,
            &texture.1,
            &self.sampler,
        );
        self.globe_texture = texture;
    }

    /// Replace the texture for one icon path and rebind every marker using it.
    pub fn set_icon_texture(&mut self, slot: usize, img: &DecodedImage) {
        if slot >= self.icon_textures.len() {
            log::warn!("[gpu] icon slot {} out of range", slot);
            return;
        }
        let texture = helpers::create_image_texture(&self.device, &self.queue, "icon_tex", img);
        for (marker, _) in self
            .markers
            .iter_mut()
            .zip(&self.icon_slots)
            .filter(|&(_, &s)| s == slot)
        {
            marker.bind_group = objects::object_bind_group(
                &self.device,
                &self.object_bgl,
                "marker_bg",
                &marker.uniform_buffer,
                &texture.1,
                &self.sampler,
            );
        }
        self.icon_textures[slot] = texture;
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
            self.depth.recreate(&self.device, width, height);
        }
    }

    pub fn render(&mut self, scene: &GlobeScene) -> Result<(), wgpu::SurfaceError> {
        let l = scene.light_direction();
        let su = SceneUniforms {
            view_proj: scene.camera.view_proj().to_cols_array_2d(),
            light_dir: [l.x, l.y, l.z, 0.0],
            light: [scene.params.ambient, scene.params.directional, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.scene_buffer, 0, bytemuck::bytes_of(&su));
        let gu = ObjectUniforms::new(scene.globe_model(), GLOBE_TINT);
        self.queue
            .write_buffer(&self.globe.uniform_buffer, 0, bytemuck::bytes_of(&gu));
        for (marker, model) in self.markers.iter().zip(scene.marker_models()) {
            let mu = ObjectUniforms::new(model, MARKER_TINT);
            self.queue
                .write_buffer(&marker.uniform_buffer, 0, bytemuck::bytes_of(&mu));
        }

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
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: CLEAR_COLOR[0],
                            g: CLEAR_COLOR[1],
                            b: CLEAR_COLOR[2],
                            a: CLEAR_COLOR[3],
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.scene_bg, &[]);

            rpass.set_pipeline(&self.globe_pipeline);
            rpass.set_bind_group(1, &self.globe.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.sphere.vertices.slice(..));
            rpass.set_index_buffer(self.sphere.indices.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.sphere.index_count, 0, 0..1);

            rpass.set_pipeline(&self.marker_pipeline);
            rpass.set_vertex_buffer(0, self.quad.vertices.slice(..));
            rpass.set_index_buffer(self.quad.indices.slice(..), wgpu::IndexFormat::Uint32);
            for marker in &self.markers {
                rpass.set_bind_group(1, &marker.bind_group, &[]);
                rpass.draw_indexed(0..self.quad.index_count, 0, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
