#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::constants::*;
use crate::core::{standard_layers, Director, InteractionTracker, SECTION_KEYS};
use crate::frame::{FrameContext, LayerSurface};

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("vib3-backdrop starting");

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

    let director = Rc::new(RefCell::new(Director::new()));
    let tracker = Rc::new(RefCell::new(InteractionTracker::new()));

    // One canvas per standard layer, registered under the layer's id.
    let mut pending: Vec<(&'static str, web::HtmlCanvasElement)> = Vec::new();
    for spec in standard_layers() {
        let id = spec.id;
        let canvas = match id {
            "header" => dom::create_layer_canvas(&document, HEADER_CANVAS_ID, HEADER_Z_INDEX)?,
            "content" => dom::create_layer_canvas(&document, CONTENT_CANVAS_ID, CONTENT_Z_INDEX)?,
            "ambient" => dom::create_layer_canvas(&document, AMBIENT_CANVAS_ID, AMBIENT_Z_INDEX)?,
            "accent" => dom::create_corner_canvas(
                &document,
                ACCENT_CANVAS_ID,
                ACCENT_Z_INDEX,
                ACCENT_WIDTH_PX,
                ACCENT_HEIGHT_PX,
            )?,
            other => {
                log::warn!("no canvas mapping for layer '{other}', skipping");
                continue;
            }
        };
        dom::sync_canvas_backing_size(&canvas);
        director.borrow_mut().add_instance(spec);
        pending.push((id, canvas));
    }

    // Land on the section named in the URL hash when it is a known one.
    let initial = events::current_hash_section()
        .filter(|s| SECTION_KEYS.contains(&s.as_str()))
        .unwrap_or_else(|| INITIAL_SECTION.to_owned());
    director.borrow_mut().apply_master_style(&initial);

    events::wire_pointer_tracking(tracker.clone(), director.clone());
    events::wire_scroll_tracking(tracker.clone(), director.clone());
    events::wire_navigation(&document, director.clone());
    events::wire_global_keydown(director.clone());
    wire_canvas_resize(pending.iter().map(|(_, c)| c.clone()).collect());

    let mut layers = Vec::new();
    for (id, canvas) in pending {
        if let Some(gpu) = frame::init_gpu(&canvas).await {
            layers.push(LayerSurface { id, canvas, gpu });
        }
    }
    if layers.is_empty() {
        log::error!("no layer acquired a WebGPU surface; backdrop stays blank");
    }

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        director,
        tracker,
        layers,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}

fn wire_canvas_resize(canvases: Vec<web::HtmlCanvasElement>) {
    let closure = Closure::wrap(Box::new(move || {
        for canvas in &canvases {
            dom::sync_canvas_backing_size(canvas);
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
