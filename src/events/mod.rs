use crate::audio::SoundLibrary;
use crate::ui::UiState;
use brain_core::Session;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub mod keyboard;
pub mod pointer;
pub mod visibility;

pub use keyboard::wire_keyboard;
pub use pointer::{wire_info_panel, wire_pointer};
pub use visibility::wire_visibility;

/// Handles every DOM listener needs.
#[derive(Clone)]
pub struct Wiring {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub session: Rc<RefCell<Session>>,
    pub ui: Rc<RefCell<UiState>>,
    pub sounds: Rc<SoundLibrary>,
}

pub fn wire_all(w: &Wiring) {
    wire_keyboard(w);
    wire_pointer(w);
    wire_info_panel(w);
    wire_visibility(w);
}
