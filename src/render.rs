use glam::{Mat4, Vec3};
use web_sys as web;

mod helpers;
mod meshes;
mod particles;

use crate::constants::{LIGHT_DIR, LIGHT_INTENSITY, PARTICLE_SIZE};
use crate::core::mesh::MeshData;
use crate::core::MaterialParams;
use meshes::{MeshResources, ModelUniforms, SceneUniforms};
use particles::{ParticleResources, ParticleUniforms};

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    depth_view: wgpu::TextureView,
    meshes: MeshResources,
    particles: ParticleResources,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        mesh_data: &[MeshData],
        particle_positions: &[[f32; 3]],
    ) -> anyhow::Result<Self> {
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

        let depth_view = helpers::create_depth_texture(&device, width, height);
        let meshes = meshes::create_mesh_resources(&device, format, mesh_data);
        let particles = particles::create_particle_resources(&device, format, particle_positions);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_view,
            meshes,
            particles,
            width,
            height,
            clear_color: wgpu::Color {
                r: 0.02,
                g: 0.03,
                b: 0.05,
                a: 1.0,
            },
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
            self.depth_view = helpers::create_depth_texture(&self.device, width, height);
        }
    }

    pub fn render(
        &mut self,
        view: Mat4,
        proj: Mat4,
        eye: Vec3,
        models: &[Mat4],
        material: &MaterialParams,
        particle_count: u32,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let target = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let light = Vec3::from_array(LIGHT_DIR).normalize();
        let scene = SceneUniforms {
            view_proj: (proj * view).to_cols_array_2d(),
            eye: [eye.x, eye.y, eye.z, 1.0],
            light_dir: [light.x, light.y, light.z, LIGHT_INTENSITY],
            base_color: [
                material.color[0],
                material.color[1],
                material.color[2],
                material.metalness,
            ],
            params: [material.roughness, 0.0, 0.0, 0.0],
        };
        self.queue.write_buffer(
            &self.meshes.scene_uniform_buffer,
            0,
            bytemuck::bytes_of(&scene),
        );
        for (draw, model) in self.meshes.draws.iter().zip(models) {
            let u = ModelUniforms {
                model: model.to_cols_array_2d(),
            };
            self.queue
                .write_buffer(&draw.model_buffer, 0, bytemuck::bytes_of(&u));
        }
        let pu = ParticleUniforms {
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            size: [PARTICLE_SIZE, 0.0, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.particles.uniform_buffer, 0, bytemuck::bytes_of(&pu));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
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

            rpass.set_pipeline(&self.meshes.pipeline);
            rpass.set_bind_group(0, &self.meshes.scene_bind_group, &[]);
            for draw in &self.meshes.draws {
                rpass.set_bind_group(1, &draw.model_bind_group, &[]);
                rpass.set_vertex_buffer(0, draw.vertex_buffer.slice(..));
                rpass.set_index_buffer(draw.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..draw.index_count, 0, 0..1);
            }

            rpass.set_pipeline(&self.particles.pipeline);
            rpass.set_bind_group(0, &self.particles.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.particles.instance_buffer.slice(..));
            rpass.draw(0..6, 0..particle_count.min(self.particles.max_instances));
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
