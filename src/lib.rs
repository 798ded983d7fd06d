#![cfg(target_arch = "wasm32")]
use brain_core::Session;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod ui;

use constants::CANVAS_ID;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("brain-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let session = Session::with_brain()?;
    for line in session.scene.dump(session.nodes.brain) {
        log::info!("{}", line);
    }
    let session = Rc::new(RefCell::new(session));
    let ui = Rc::new(RefCell::new(ui::UiState::default()));
    let sounds = Rc::new(audio::SoundLibrary::new()?);

    let wiring = events::Wiring {
        document: document.clone(),
        canvas: canvas.clone(),
        session: session.clone(),
        ui: ui.clone(),
        sounds: sounds.clone(),
    };
    events::wire_all(&wiring);
    overlay::update_help(&document, &session.borrow().settings);

    let gpu = frame::init_gpu(&canvas).await;
    overlay::remove_loader(&document);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        ui,
        sounds,
        document,
        canvas,
        gpu,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
