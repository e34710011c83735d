use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::Director;

/// Route navigation to the director: clicks on `[data-section]` elements and
/// hash changes both carry a section key.
pub fn wire_navigation(document: &web::Document, director: Rc<RefCell<Director>>) {
    wire_section_clicks(document, director.clone());
    wire_hashchange(director);
}

fn wire_section_clicks(document: &web::Document, director: Rc<RefCell<Director>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(target) = ev.target() else { return };
        let Some(el) = target.dyn_ref::<web::Element>() else {
            return;
        };
        let Ok(Some(nav)) = el.closest("[data-section]") else {
            return;
        };
        if let Some(section) = nav.get_attribute("data-section") {
            director.borrow_mut().apply_master_style(&section);
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_hashchange(director: Rc<RefCell<Director>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::HashChangeEvent| {
        if let Some(section) = current_hash_section() {
            director.borrow_mut().apply_master_style(&section);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Section key from the current location hash (`#articles` → `articles`).
pub fn current_hash_section() -> Option<String> {
    let hash = web::window()?.location().hash().ok()?;
    let section = hash.trim_start_matches('#').trim_start_matches('/');
    if section.is_empty() {
        None
    } else {
        Some(section.to_owned())
    }
}
