#![cfg(target_arch = "wasm32")]
use crate::core::{FramePacer, MaterialParams, SceneConfig, ViewportController};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod panel;
mod render;

use crate::constants::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orbit-scene starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // The render target is addressed by class; a page without it is a
    // misconfiguration we cannot recover from.
    let canvas_el = document
        .query_selector(".webgl")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing .webgl canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    dom::sync_canvas_backing_size(&canvas);

    let config = SceneConfig::default();
    let (width, height) = dom::viewport_size(&window);
    let controller = Rc::new(RefCell::new(ViewportController::new(
        config.clone(),
        width,
        height,
    )));
    let material = Rc::new(RefCell::new(MaterialParams::default()));

    // Orbit order fixes each object's phase: torus, octahedron,
    // torus-knot, icosahedron, a quarter turn apart.
    let mesh_data = vec![
        crate::core::mesh::torus(
            TORUS_RADIUS,
            TORUS_TUBE,
            TORUS_RADIAL_SEGMENTS,
            TORUS_TUBULAR_SEGMENTS,
        ),
        crate::core::mesh::octahedron(POLYHEDRON_RADIUS),
        crate::core::mesh::torus_knot(
            KNOT_RADIUS,
            KNOT_TUBE,
            KNOT_TUBULAR_SEGMENTS,
            KNOT_RADIAL_SEGMENTS,
            KNOT_P,
            KNOT_Q,
        ),
        crate::core::mesh::icosahedron(POLYHEDRON_RADIUS),
    ];

    // Generate the full desktop field once; the mobile profile draws a
    // prefix of it.
    let mut rng = rand::thread_rng();
    let particle_positions =
        crate::core::mesh::particles(config.particles_desktop, PARTICLE_SPREAD, &mut rng);

    let gpu = frame::init_gpu(&canvas, &mesh_data, &particle_positions).await;

    events::wire_resize(controller.clone(), canvas.clone(), document.clone());
    events::wire_input_handlers(&controller);
    panel::wire_controls(&document, &material);
    panel::sync_visibility(&document, controller.borrow().is_mobile());

    log::info!(
        "[scene] initialized: {} objects, {} particles, {}x{}",
        mesh_data.len(),
        particle_positions.len(),
        width,
        height
    );

    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        controller,
        material,
        canvas,
        gpu,
        pacer: FramePacer::new(config.frame_rate_cap),
        started: now,
        last_instant: now,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
