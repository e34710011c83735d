use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::{Director, EventKind, InteractionTracker, ScrollSample};

/// Feed scroll position samples into the tracker and apply the per-instance
/// scroll reactions on every event.
pub fn wire_scroll_tracking(
    tracker: Rc<RefCell<InteractionTracker>>,
    director: Rc<RefCell<Director>>,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
        let scroll_top = web::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0) as f32;
        let sample = ScrollSample {
            scroll_top,
            timestamp_ms: js_sys::Date::now(),
        };
        let frame = {
            let mut t = tracker.borrow_mut();
            t.on_scroll_sample(sample);
            t.signal_frame()
        };
        director
            .borrow_mut()
            .apply_reactive(EventKind::ScrollTick, &frame);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
