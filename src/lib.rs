#![cfg(target_arch = "wasm32")]
//! Interactive 3D birthday greeting: a candle-lit cake rendered with WebGPU,
//! a typed greeting, confetti, a song control, and a microphone monitor that
//! blows the candles out on a loud enough noise.

use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

use crate::core::blow::{BlowOut, VolumeTrigger};
use crate::core::camera::Camera;
use crate::core::confetti::ConfettiSystem;
use crate::core::greeting::Typewriter;
use crate::core::scene::{build_scene, SceneParams};
use constants::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("birthday-web starting");

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

    let canvas = dom::canvas_by_id(&document, CAKE_CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CAKE_CANVAS_ID))?;
    // Sized to the viewport once at startup; resizes are not tracked
    dom::sync_canvas_backing_size(&canvas);

    let mut rng = StdRng::from_entropy();
    let (scene, candles) = build_scene(&SceneParams::default(), &mut rng);
    log::info!(
        "[scene] {} nodes, {} candles",
        scene.node_count(),
        candles.len()
    );

    let gpu = frame::init_gpu(&canvas).await;

    // Microphone is the one fallible subsystem; without it the monitor never
    // starts and the rest of the page is unaffected
    let microphone = if audio::microphone_supported() {
        match audio::Microphone::capture().await {
            Ok(m) => {
                log::info!("[blow] microphone monitor running");
                Some(m)
            }
            Err(e) => {
                log::error!("[blow] microphone unavailable: {:?}", e);
                None
            }
        }
    } else {
        dom::alert("Your browser does not support audio input");
        None
    };

    events::wire_play_button(&document);

    let mut confetti = ConfettiSystem::new();
    confetti.volley(&mut rng);

    let camera = Camera {
        eye: CAMERA_EYE,
        target: glam::Vec3::ZERO,
        up: glam::Vec3::Y,
        aspect: canvas.width() as f32 / canvas.height().max(1) as f32,
        fovy_radians: CAMERA_FOVY_DEG.to_radians(),
        znear: CAMERA_NEAR,
        zfar: CAMERA_FAR,
    };

    let blow = BlowOut::new(candles.len());
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        candles,
        blow,
        volume: VolumeTrigger::default(),
        microphone,
        confetti,
        confetti_layer: overlay::ConfettiLayer::new(&document),
        greeting: Typewriter::new(GREETING_TEXT, GREETING_TYPE_SPEED_MS),
        greeting_el: document.get_element_by_id(GREETING_ID),
        canvas,
        camera,
        gpu,
        rng,
        last_instant: Instant::now(),
        time_ms: 0.0,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
