use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::audio::Microphone;
use crate::core::blow::{BlowOut, VolumeTrigger};
use crate::core::camera::Camera;
use crate::core::confetti::ConfettiSystem;
use crate::core::flame;
use crate::core::greeting::Typewriter;
use crate::core::scene::{CandleRig, Scene};
use crate::overlay::{self, ConfettiLayer};
use crate::render;

/// Everything mutable the per-tick update touches, owned in one place and
/// driven by a single requestAnimationFrame loop.
pub struct FrameContext<'a> {
    pub scene: Scene,
    pub candles: Vec<CandleRig>,
    pub blow: BlowOut,
    pub volume: VolumeTrigger,
    pub microphone: Option<Microphone>,

    pub confetti: ConfettiSystem,
    pub confetti_layer: Option<ConfettiLayer>,
    pub greeting: Typewriter,
    pub greeting_el: Option<web::Element>,

    pub canvas: web::HtmlCanvasElement,
    pub camera: Camera,
    pub gpu: Option<render::GpuState<'a>>,

    pub rng: StdRng,
    pub last_instant: Instant,
    pub time_ms: f64,
}

impl FrameContext<'_> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_ms = dt.as_secs_f64() * 1000.0;
        self.time_ms += dt_ms;

        flame::animate(
            &mut self.scene,
            &self.candles,
            &self.blow,
            self.time_ms,
            &mut self.rng,
        );

        if let Some(mic) = &mut self.microphone {
            let volume = mic.volume();
            if self.volume.sample(volume) && self.blow.trigger(&mut self.scene, &self.candles) {
                log::info!("[blow] volume spike at {volume:.1}, candles out");
            }
        }
        self.blow.tick(&mut self.scene, &self.candles, dt_ms);

        self.confetti.update(dt_ms, &mut self.rng);
        if let Some(layer) = &self.confetti_layer {
            layer.draw(&self.confetti);
        }

        if self.greeting.tick(dt_ms) {
            if let Some(el) = &self.greeting_el {
                overlay::render_greeting(el, &self.greeting);
            }
        }

        if let Some(g) = &mut self.gpu {
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            self.camera.aspect = w as f32 / h.max(1) as f32;
            if let Err(e) = g.render(&self.scene, &self.camera) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
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
