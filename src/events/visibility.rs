use super::Wiring;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Stop the session clock while the tab is hidden; restart it when shown.
pub fn wire_visibility(w: &Wiring) {
    let wv = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let hidden = wv.document.visibility_state() == web::VisibilityState::Hidden;
        let mut session = wv.session.borrow_mut();
        if hidden {
            let cmds = session.pause();
            wv.sounds.apply(&cmds);
        } else {
            session.resume();
        }
    }) as Box<dyn FnMut()>);
    _ = w
        .document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}
