//! DOM event wiring for the song control.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::audio;
use crate::constants::{AUDIO_ID, PLAY_ICON_CLASS, PLAY_ICON_ID, STOP_ICON_CLASS};
use crate::dom;

/// Clicking the play icon starts the song and swaps the glyph to a stop
/// icon; clicking again stops, rewinds and restores the play glyph.
pub fn wire_play_button(document: &web::Document) {
    let Some(icon) = document.get_element_by_id(PLAY_ICON_ID) else {
        return;
    };
    let Some(track) = document
        .get_element_by_id(AUDIO_ID)
        .and_then(|el| el.dyn_into::<web::HtmlAudioElement>().ok())
    else {
        log::error!("[song] missing #{} element", AUDIO_ID);
        return;
    };

    let playing = Rc::new(RefCell::new(false));
    dom::add_click_listener(document, PLAY_ICON_ID, move || {
        let mut playing = playing.borrow_mut();
        let classes = icon.class_list();
        if *playing {
            audio::stop_track(&track);
            _ = classes.remove_1(STOP_ICON_CLASS);
            _ = classes.add_1(PLAY_ICON_CLASS);
            *playing = false;
        } else {
            audio::play_track(&track);
            _ = classes.remove_1(PLAY_ICON_CLASS);
            _ = classes.add_1(STOP_ICON_CLASS);
            *playing = true;
        }
    });
}
