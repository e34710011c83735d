use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::{Director, GlobalEffect, SECTION_KEYS};

/// Global shortcuts: digits 1-5 jump between sections, `g` cycles geometry,
/// `i` inverts colors, `x` swaps the header and content layers.
pub fn wire_global_keydown(director: Rc<RefCell<Director>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                if ev.alt_key() || ev.ctrl_key() || ev.meta_key() {
                    return;
                }
                handle_global_keydown(&ev.key(), &director);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn handle_global_keydown(key: &str, director: &Rc<RefCell<Director>>) {
    match key {
        "1" | "2" | "3" | "4" | "5" => {
            let i = key.as_bytes()[0] as usize - b'1' as usize;
            director.borrow_mut().apply_master_style(SECTION_KEYS[i]);
        }
        "g" => director.borrow_mut().dispatch_effect(&GlobalEffect::CycleGeometry),
        "i" => director.borrow_mut().dispatch_effect(&GlobalEffect::InvertColors),
        "x" => director
            .borrow_mut()
            .dispatch_effect(&GlobalEffect::SwapInstanceConfigs {
                first: "header".to_owned(),
                second: "content".to_owned(),
            }),
        _ => {}
    }
}
