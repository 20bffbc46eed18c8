mod app_config;
mod dom;
mod flow_result;
mod language;
mod observer;
mod persisted_store;
mod reveal;
mod scroll_hint;
mod tooltip;
mod view_controller;

use gloo::events::EventListener;

fn main() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_event| {
            view_controller::boot();
        })
        .forget();
    } else {
        view_controller::boot();
    }
}
