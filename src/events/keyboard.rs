use super::Wiring;
use crate::overlay;
use brain_core::{app_command_for_key, AppCommand};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_keydown(ev: &web::KeyboardEvent, w: &Wiring) {
    let key = ev.key();
    let mut session = w.session.borrow_mut();
    if session.key_down(&key) {
        // Keep arrows and shift from scrolling the page
        ev.prevent_default();
        return;
    }
    if ev.repeat() {
        return;
    }
    let Some(cmd) = app_command_for_key(&key) else {
        return;
    };
    session.command(cmd);
    if cmd != AppCommand::ResetPosition {
        overlay::update_help(&w.document, &session.settings);
    }
}

pub fn handle_keyup(ev: &web::KeyboardEvent, w: &Wiring) {
    if w.session.borrow_mut().key_up(&ev.key()) {
        ev.prevent_default();
    }
}

pub fn wire_keyboard(w: &Wiring) {
    let Some(window) = web::window() else {
        return;
    };

    let wd = w.clone();
    let keydown = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_keydown(&ev, &wd);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
    keydown.forget();

    let wu = w.clone();
    let keyup = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_keyup(&ev, &wu);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref());
    keyup.forget();

    // A key released while the window is unfocused never reports keyup
    let session = w.session.clone();
    let blur = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        session.borrow_mut().release_keys();
        log::debug!("[keys] released on blur");
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("blur", blur.as_ref().unchecked_ref());
    blur.forget();
}
