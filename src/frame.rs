use crate::constants::{CAMERA_FOV_DEG, CAMERA_ZFAR, CAMERA_ZNEAR};
use crate::core::camera::Camera;
use crate::core::mesh::MeshData;
use crate::core::{FramePacer, MaterialParams, ViewportController};
use crate::render;
use glam::{EulerRot, Mat4, Quat, Vec3};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub controller: Rc<RefCell<ViewportController>>,
    pub material: Rc<RefCell<MaterialParams>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'static>>,

    pub pacer: FramePacer,
    pub started: Instant,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let now_ms = now.duration_since(self.started).as_secs_f64() * 1000.0;
        if !self.pacer.should_draw(now_ms) {
            // skipped frames leave last_instant alone so dt stays honest
            return;
        }
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let (view, proj, eye, models, particle_count) = {
            let mut c = self.controller.borrow_mut();
            c.tick(dt_sec);

            let scale = Vec3::splat(c.object_scale());
            let positions = c.orbit_positions();
            let spins = c.spin_angles();
            let mut models = [Mat4::IDENTITY; 4];
            for i in 0..models.len() {
                let rot = Quat::from_euler(EulerRot::XYZ, spins[i].x, spins[i].y, 0.0);
                models[i] = Mat4::from_scale_rotation_translation(scale, rot, positions[i]);
            }

            let camera = Camera {
                eye: c.camera_eye(),
                target: Vec3::ZERO,
                up: Vec3::Y,
                aspect: c.aspect(),
                fovy_radians: CAMERA_FOV_DEG.to_radians(),
                znear: CAMERA_ZNEAR,
                zfar: CAMERA_ZFAR,
            };
            (
                camera.view_matrix(),
                camera.projection_matrix(),
                camera.eye,
                models,
                c.particle_count() as u32,
            )
        };
        let material = *self.material.borrow();

        if let Some(g) = &mut self.gpu {
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(view, proj, eye, &models, &material, particle_count) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    mesh_data: &[MeshData],
    particle_positions: &[[f32; 3]],
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, mesh_data, particle_positions).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
