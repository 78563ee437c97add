mod pointer;
mod touch;

use crate::core::ViewportController;
use crate::dom;
use crate::panel;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Install the window-level impulse and cursor listeners. Wheel and touch
/// are both wired once; each event is gated inside the controller against
/// the configured input source and the current breakpoint, which keeps
/// behavior stable when a resize crosses the breakpoint.
pub fn wire_input_handlers(controller: &Rc<RefCell<ViewportController>>) {
    pointer::wire_wheel(controller.clone());
    pointer::wire_pointermove(controller.clone());
    touch::wire_touchstart(controller.clone());
    touch::wire_touchmove(controller.clone());
}

/// On resize: push new viewport sizes into the controller, re-sync the
/// canvas backing store, and re-evaluate panel visibility.
pub fn wire_resize(
    controller: Rc<RefCell<ViewportController>>,
    canvas: web::HtmlCanvasElement,
    document: web::Document,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        if let Some(window) = web::window() {
            let (w, h) = dom::viewport_size(&window);
            let is_mobile = {
                let mut c = controller.borrow_mut();
                c.on_resize(w, h);
                c.is_mobile()
            };
            dom::sync_canvas_backing_size(&canvas);
            panel::sync_visibility(&document, is_mobile);
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
