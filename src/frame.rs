use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::{Director, InteractionTracker};
use crate::render;

/// One canvas + GPU surface pair, bound to a director instance by id.
pub struct LayerSurface {
    pub id: &'static str,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState<'static>,
}

pub struct FrameContext {
    pub director: Rc<RefCell<Director>>,
    pub tracker: Rc<RefCell<InteractionTracker>>,
    pub layers: Vec<LayerSurface>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        // Velocity signals taper off while input is idle; transitions step
        // once per frame. Reactive deltas were already applied from the
        // event handlers between frames.
        self.tracker.borrow_mut().decay(dt);
        self.director.borrow_mut().tick(dt);

        let dt_sec = dt.as_secs_f32();
        for layer in &mut self.layers {
            let Some(config) = self.director.borrow().instance_config(layer.id) else {
                continue;
            };
            let w = layer.canvas.width();
            let h = layer.canvas.height();
            layer.gpu.resize_if_needed(w, h);
            if let Err(e) = layer.gpu.render(dt_sec, &config) {
                log::error!("render error on '{}': {:?}", layer.id, e);
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
