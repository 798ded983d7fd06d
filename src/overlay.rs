use crate::constants::*;
use crate::dom;
use brain_core::{DebugSettings, PartInfo};
use web_sys as web;

#[inline]
pub fn remove_loader(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADER_ID) {
        el.remove();
    }
}

pub fn show_toast(document: &web::Document, text: &str) {
    dom::set_text(document, TOASTER_ID, text);
    dom::set_hidden(document, TOASTER_ID, false);
}

#[inline]
pub fn hide_toast(document: &web::Document) {
    dom::set_hidden(document, TOASTER_ID, true);
}

pub fn show_info(document: &web::Document, info: &PartInfo) {
    dom::set_text(document, INFO_TITLE_ID, info.title);
    dom::set_text(document, INFO_CONTENT_ID, info.content);
    if let Some(el) = document.get_element_by_id(INFO_IMAGE_ID) {
        _ = el.set_attribute("src", &format!("{}{}", IMAGE_DIR, info.image));
        _ = el.set_attribute("alt", info.title);
    }
    dom::set_hidden(document, INFO_OVERLAY_ID, false);
    dom::set_hidden(document, INFO_PANEL_ID, false);
}

pub fn hide_info(document: &web::Document) {
    dom::set_hidden(document, INFO_PANEL_ID, true);
    dom::set_hidden(document, INFO_OVERLAY_ID, true);
}

pub fn update_help(document: &web::Document, settings: &DebugSettings) {
    if settings.show_help {
        dom::set_text(document, HELP_OVERLAY_ID, &settings.summary());
    }
    dom::set_hidden(document, HELP_OVERLAY_ID, !settings.show_help);
}
