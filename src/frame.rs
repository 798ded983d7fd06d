use crate::audio::SoundLibrary;
use crate::ui::UiState;
use crate::{dom, overlay};
use brain_core::Session;
use brain_render::SceneRenderer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub session: Rc<RefCell<Session>>,
    pub ui: Rc<RefCell<UiState>>,
    pub sounds: Rc<SoundLibrary>,

    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<SceneRenderer<'a>>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        if self.session.borrow().is_paused() {
            return;
        }
        let outcome = self.session.borrow_mut().tick();
        self.sounds.apply(&outcome.audio);
        if let Some(change) = outcome.squash {
            log::debug!("[frame] {:?} phase={:?}", change, outcome.phase);
        }

        if self.ui.borrow_mut().toaster.expire(dom::now_seconds()) {
            overlay::hide_toast(&self.document);
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let (camera, instances) = {
                let session = self.session.borrow();
                (session.camera.camera(g.aspect()), session.scene.instances())
            };
            match g.render(&camera, &instances) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<SceneRenderer<'static>> {
    let instance = wgpu::Instance::default();
    let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
        Ok(s) => s,
        Err(e) => {
            log::error!("WebGPU surface error: {:?}", e);
            return None;
        }
    };
    match SceneRenderer::new(&instance, surface, canvas.width(), canvas.height()).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
