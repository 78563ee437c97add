use crate::core::ViewportController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_touchstart(controller: Rc<RefCell<ViewportController>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(t) = ev.touches().item(0) {
            controller.borrow_mut().on_touch_start(t.client_y() as f32);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

pub fn wire_touchmove(controller: Rc<RefCell<ViewportController>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(t) = ev.touches().item(0) {
            controller.borrow_mut().on_touch_move(t.client_y() as f32);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
