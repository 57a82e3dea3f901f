// Shared harness for the browser component tests.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::time::Duration;

use launchquests_web::config::SiteConfig;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, EventInit, EventTarget, HtmlElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, KeyboardEvent, KeyboardEventInit, MouseEvent,
};
use yew::platform::time::sleep;

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Let Yew flush pending renders.
pub async fn settle() {
    sleep(Duration::ZERO).await;
}

/// Timings short enough for tests to wait out; carousel never auto-advances.
pub fn fast_config() -> SiteConfig {
    SiteConfig {
        page_animation_delay_ms: 0,
        page_animation_step_ms: 0,
        focus_delay_ms: 0,
        carousel_interval_ms: 600_000,
        simulated_submit_ms: 50,
        notice_dismiss_ms: 600_000,
        ..SiteConfig::default()
    }
}

pub fn find(mount: &Element, selector: &str) -> HtmlElement {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .dyn_into::<HtmlElement>()
        .unwrap()
}

pub fn count(mount: &Element, selector: &str) -> u32 {
    mount.query_selector_all(selector).unwrap().length()
}

/// Ids of every element matching `selector`, in document order.
pub fn ids(mount: &Element, selector: &str) -> Vec<String> {
    let nodes = mount.query_selector_all(selector).unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .map(|e| e.id())
        .collect()
}

pub fn data_pages(mount: &Element, selector: &str) -> Vec<String> {
    let nodes = mount.query_selector_all(selector).unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .filter_map(|e| e.get_attribute("data-page"))
        .collect()
}

pub fn click(mount: &Element, selector: &str) {
    find(mount, selector).click();
}

/// Set an input's value and fire a bubbling `input` event, as typing does,
/// then let the resulting render land.
pub async fn type_into(mount: &Element, selector: &str, value: &str) {
    let field = mount.query_selector(selector).unwrap().unwrap();
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    } else {
        panic!("{selector} is not a text field");
    }
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("input", &init).unwrap();
    field.dispatch_event(&event).unwrap();
    settle().await;
}

pub fn key_event(key: &str) -> KeyboardEvent {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap()
}

/// Fire a bubbling event with no payload, such as `change`, `resize` or `mousedown`.
pub fn dispatch(target: &EventTarget, kind: &str) {
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

/// Fire a pointer event like `mouseenter` directly on the element under test.
pub fn pointer(target: &EventTarget, kind: &str) {
    let event = MouseEvent::new(kind).unwrap();
    target.dispatch_event(&event).unwrap();
}

/// Pick an option in a `<select>` the way a user would.
pub async fn choose(mount: &Element, selector: &str, value: &str) {
    let select = mount
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlSelectElement>()
        .unwrap();
    select.set_value(value);
    dispatch(&select, "change");
    settle().await;
}
