use crate::input;
use crate::overlay;
use globe_core::GlobeScene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<GlobeScene>>,
    pub mouse_state: Rc<RefCell<input::MouseState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_css_px(&ev, &w.canvas);
        {
            let mut ms = w.mouse_state.borrow_mut();
            ms.move_to(pos);
            ms.down = true;
        }
        w.scene.borrow_mut().orbit.begin_drag();
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_css_px(&ev, &w.canvas);
        let (down, delta) = {
            let mut ms = w.mouse_state.borrow_mut();
            let delta = ms.move_to(pos);
            (ms.down, delta)
        };
        if down {
            let height = input::canvas_css_size(&w.canvas).y;
            w.scene
                .borrow_mut()
                .orbit
                .rotate_by_pixels(delta.x, delta.y, height);
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    for event in ["pointerup", "pointercancel"] {
        let w = w.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            w.mouse_state.borrow_mut().down = false;
            w.scene.borrow_mut().orbit.end_drag();
            _ = w.canvas.release_pointer_capture(ev.pointer_id());
        }) as Box<dyn FnMut(_)>);
        _ = w
            .canvas
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        w.scene
            .borrow_mut()
            .orbit
            .zoom_by_wheel(input::wheel_direction(ev.delta_y()));
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Play/pause button: flips auto-rotate and relabels itself.
pub fn wire_playback_toggle(
    document: &web::Document,
    toggle: web::Element,
    scene: Rc<RefCell<GlobeScene>>,
) {
    crate::dom::add_click_listener(document, crate::constants::TOGGLE_ID, move || {
        let label = scene.borrow_mut().toggle_playback();
        overlay::set_button_label(&toggle, label);
    });
}
