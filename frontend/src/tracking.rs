//! Fire-and-forget bridge to the third-party ad pixels.
//!
//! Events are forwarded to `window.fbq` and `window.utmify.track` when
//! those globals exist. A missing or throwing pixel never affects the
//! funnel; every event is also mirrored to the console log.

use js_sys::{Function, Reflect, JSON};
use serde_json::{json, Value};
use shared::funnel::TrackEvent;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;

/// Records one analytics event with the given property payload.
pub fn record(event: &str, properties: &Value) {
    log::info!("tracking: {} {}", event, properties);

    let Some(window) = window() else { return };
    let props = JSON::parse(&properties.to_string()).unwrap_or(JsValue::UNDEFINED);

    // Facebook Pixel
    if let Ok(fbq) = Reflect::get(&window, &JsValue::from_str("fbq")) {
        if let Some(fbq) = fbq.dyn_ref::<Function>() {
            let _ = fbq.call3(
                &JsValue::NULL,
                &JsValue::from_str("trackCustom"),
                &JsValue::from_str(event),
                &props,
            );
        }
    }

    // UTMify (if loaded)
    if let Ok(utmify) = Reflect::get(&window, &JsValue::from_str("utmify")) {
        if let Ok(track) = Reflect::get(&utmify, &JsValue::from_str("track")) {
            if let Some(track) = track.dyn_ref::<Function>() {
                let _ = track.call2(&utmify, &JsValue::from_str(event), &props);
            }
        }
    }
}

/// Maps a funnel transition event onto the pixel event taxonomy.
pub fn record_event(event: &TrackEvent) {
    match event {
        TrackEvent::QuizStarted => record(
            "quiz_started",
            &json!({ "content_category": "quiz" }),
        ),
        TrackEvent::AnswerSelected {
            question,
            prompt,
            answer,
        } => record(
            "answer_selected",
            &json!({
                "question_number": question + 1,
                "question_text": prompt,
                "answer": answer,
            }),
        ),
        TrackEvent::QuizCompleted { answers } => record(
            "quiz_completed",
            &json!({
                "num_answers": answers.len(),
                "answers": answers,
            }),
        ),
        TrackEvent::SpinStarted { attempt } => record(
            "spin_started",
            &json!({ "attempt_number": attempt }),
        ),
        TrackEvent::SpinResult { label, is_win } => record(
            "spin_result",
            &json!({
                "outcome": label,
                "is_win": is_win,
            }),
        ),
        TrackEvent::ConversionClicked { label } => record(
            "conversion_clicked",
            &json!({ "outcome": label }),
        ),
    }
}

/// Retention event fired when a funnel screen becomes visible.
pub fn page_view(page: &str) {
    record("page_viewed", &json!({ "page": page }));
}
