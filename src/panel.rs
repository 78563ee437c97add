//! Optional on-screen control panel for the shared material. The scene
//! never depends on these elements being present; every binding is a
//! no-op when its input is missing from the page.

use crate::core::{parse_hex_color, MaterialParams};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub const PANEL_ID: &str = "control-panel";
const COLOR_INPUT_ID: &str = "material-color";
const METALNESS_INPUT_ID: &str = "material-metalness";
const ROUGHNESS_INPUT_ID: &str = "material-roughness";

pub fn wire_controls(document: &web::Document, material: &Rc<RefCell<MaterialParams>>) {
    let m = material.clone();
    bind_color_control(document, COLOR_INPUT_ID, move |hex| {
        if let Some(rgb) = parse_hex_color(hex) {
            m.borrow_mut().color = rgb;
        } else {
            log::warn!("[panel] ignoring invalid color {:?}", hex);
        }
    });

    let m = material.clone();
    bind_range_control(document, METALNESS_INPUT_ID, 0.0, 1.0, 0.001, move |v| {
        m.borrow_mut().set_metalness(v);
    });

    let m = material.clone();
    bind_range_control(document, ROUGHNESS_INPUT_ID, 0.0, 1.0, 0.001, move |v| {
        m.borrow_mut().set_roughness(v);
    });
}

pub fn bind_color_control(
    document: &web::Document,
    element_id: &str,
    on_change: impl FnMut(&str) + 'static,
) {
    dom::add_input_listener(document, element_id, on_change);
}

pub fn bind_range_control(
    document: &web::Document,
    element_id: &str,
    min: f32,
    max: f32,
    step: f32,
    mut on_change: impl FnMut(f32) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.set_attribute("min", &min.to_string());
        _ = el.set_attribute("max", &max.to_string());
        _ = el.set_attribute("step", &step.to_string());
    }
    dom::add_input_listener(document, element_id, move |value| {
        if let Ok(v) = value.parse::<f32>() {
            on_change(v);
        }
    });
}

#[inline]
pub fn set_visible(document: &web::Document, visible: bool) {
    if let Some(el) = document.get_element_by_id(PANEL_ID) {
        let cl = el.class_list();
        if visible {
            _ = cl.remove_1("hidden");
            // fallback for environments without CSS class
            _ = el.set_attribute("style", "");
        } else {
            _ = cl.add_1("hidden");
            // fallback
            _ = el.set_attribute("style", "display:none");
        }
    }
}

/// The panel is a desktop affordance: shown at or above the breakpoint,
/// hidden below it.
#[inline]
pub fn sync_visibility(document: &web::Document, is_mobile: bool) {
    set_visible(document, !is_mobile);
}
