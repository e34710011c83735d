use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::{Director, EventKind, InteractionTracker, MouseSample};

/// Feed raw pointer movement into the tracker and apply the per-instance
/// mouse reactions on every sample.
pub fn wire_pointer_tracking(
    tracker: Rc<RefCell<InteractionTracker>>,
    director: Rc<RefCell<Director>>,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let sample = MouseSample {
            x: ev.client_x() as f32,
            y: ev.client_y() as f32,
            timestamp_ms: js_sys::Date::now(),
        };
        let frame = {
            let mut t = tracker.borrow_mut();
            t.on_mouse_sample(sample);
            t.signal_frame()
        };
        director
            .borrow_mut()
            .apply_reactive(EventKind::MouseMoveTick, &frame);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
