use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::throttle::Throttle;

pub fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or_default()
}

/// Calls `on_scroll` with the vertical offset once on mount and then at most
/// once per `window_ms` while the page scrolls. The callback is captured on
/// mount, so it should only push state, never read it. Nothing is attached
/// while `enabled` is false.
#[hook]
pub fn use_throttled_scroll(window_ms: u32, enabled: bool, on_scroll: Callback<f64>) {
    use_effect_with_deps(
        move |&(window_ms, enabled)| {
            let destructor: Box<dyn FnOnce()> = match web_sys::window().filter(|_| enabled) {
                Some(window) => {
                    let throttle = Rc::new(Throttle::new(window_ms));

                    // Initial check
                    on_scroll.emit(current_scroll_y());

                    let listener = {
                        let throttle = throttle.clone();
                        Closure::wrap(Box::new(move || {
                            let on_scroll = on_scroll.clone();
                            throttle.trigger(move || on_scroll.emit(current_scroll_y()));
                        }) as Box<dyn FnMut()>)
                    };

                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        listener.as_ref().unchecked_ref(),
                    );

                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            listener.as_ref().unchecked_ref(),
                        );
                        throttle.cancel();
                    })
                }
                None => Box::new(|| ()),
            };
            move || destructor()
        },
        (window_ms, enabled),
    );
}
