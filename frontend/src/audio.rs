//! Best-effort audio cue player.
//!
//! Autoplay restrictions routinely reject `play()` before the first
//! user gesture; those failures are logged and swallowed so they can
//! never stall a funnel transition.

use std::cell::RefCell;

use shared::funnel::Cue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

use crate::config;

thread_local! {
    static LIVE_CUES: RefCell<Vec<HtmlAudioElement>> = RefCell::new(Vec::new());
}

pub fn play_cue(cue: Cue) {
    let src = match cue {
        Cue::FirstSpin => config::FIRST_SPIN_CUE_SRC,
        Cue::RetrySpin => config::RETRY_SPIN_CUE_SRC,
    };

    let audio = match HtmlAudioElement::new_with_src(src) {
        Ok(audio) => audio,
        Err(err) => {
            log::warn!("audio element for {src} unavailable: {err:?}");
            return;
        }
    };

    match audio.play() {
        Ok(promise) => {
            LIVE_CUES.with(|cues| cues.borrow_mut().push(audio));
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    log::warn!("audio cue {src} blocked: {err:?}");
                }
            });
        }
        Err(err) => log::warn!("audio cue {src} failed to start: {err:?}"),
    }
}

pub fn stop_all_cues() {
    LIVE_CUES.with(|cues| {
        for audio in cues.borrow_mut().drain(..) {
            let _ = audio.pause();
        }
    });
}
