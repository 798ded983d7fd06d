use super::Wiring;
use crate::camera::screen_to_world_ray;
use crate::{dom, input, overlay};
use brain_core::{pick_bounds, update_hover, NodeId, PanelClick};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Hemisphere group under the pointer, if any.
fn hemisphere_at(ev: &web::MouseEvent, w: &Wiring) -> Option<NodeId> {
    let pos = input::pointer_canvas_px(ev, &w.canvas);
    let aspect = w.canvas.width().max(1) as f32 / w.canvas.height().max(1) as f32;
    let session = w.session.borrow();
    let camera = session.camera.camera(aspect);
    let (ro, rd) = screen_to_world_ray(&w.canvas, pos.x, pos.y, &camera);
    pick_bounds(&session.scene, ro, rd).map(|p| p.hemisphere)
}

fn hemisphere_name(w: &Wiring, id: NodeId) -> String {
    w.session.borrow().scene.node(id).name.clone()
}

fn on_pointermove(ev: &web::MouseEvent, w: &Wiring) {
    let hit = hemisphere_at(ev, w);
    let mut ui = w.ui.borrow_mut();
    if let Some(id) = update_hover(&mut ui.hover, hit) {
        let name = hemisphere_name(w, id);
        let text = ui.toaster.display(&name, None, dom::now_seconds());
        overlay::show_toast(&w.document, text);
        log::debug!("[pointer] hover {}", name);
    }
}

fn on_click(ev: &web::MouseEvent, w: &Wiring) {
    let Some(id) = hemisphere_at(ev, w) else {
        return;
    };
    let name = hemisphere_name(w, id);
    let mut ui = w.ui.borrow_mut();
    let text = ui
        .toaster
        .display(&name, Some("clicked"), dom::now_seconds())
        .to_owned();
    overlay::show_toast(&w.document, &text);
    log::info!("[pointer] {}", text);
    let part = w.session.borrow().nodes.part_for(id);
    if let Some(part) = part {
        let info = ui.info.show(part);
        overlay::show_info(&w.document, &info);
    }
}

pub fn wire_pointer(w: &Wiring) {
    let wm = w.clone();
    let move_closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            on_pointermove(&ev, &wm);
        }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointermove", move_closure.as_ref().unchecked_ref());
    move_closure.forget();

    let wc = w.clone();
    let click_closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        on_click(&ev, &wc);
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("click", click_closure.as_ref().unchecked_ref());
    click_closure.forget();
}

fn on_panel_click(w: &Wiring, at: PanelClick) {
    if w.ui.borrow_mut().info.click(at) {
        overlay::hide_info(&w.document);
    }
}

/// Close the info panel from its close button or a click on the backdrop.
pub fn wire_info_panel(w: &Wiring) {
    use crate::constants::{INFO_CLOSE_ID, INFO_OVERLAY_ID};

    let wc = w.clone();
    dom::add_click_listener(&w.document, INFO_CLOSE_ID, move |_| {
        on_panel_click(&wc, PanelClick::CloseButton);
    });

    let wo = w.clone();
    dom::add_click_listener(&w.document, INFO_OVERLAY_ID, move |ev| {
        // Clicks inside the panel bubble up here too
        let at = if ev.target() == ev.current_target() {
            PanelClick::Backdrop
        } else {
            PanelClick::Content
        };
        on_panel_click(&wo, at);
    });
}
