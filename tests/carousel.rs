#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{
    cleanup, click, count, create_mount_point, fast_config, find, key_event, pointer, settle,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

use launchquests_web::carousel::Testimonials;
use launchquests_web::config::SiteConfig;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, PartialEq)]
struct Props {
    config: SiteConfig,
}

#[function_component(Wrapper)]
fn wrapper(props: &Props) -> Html {
    html! {
        <ContextProvider<SiteConfig> context={props.config.clone()}>
            <Testimonials />
        </ContextProvider<SiteConfig>>
    }
}

fn mount_with(config: SiteConfig) -> web_sys::Element {
    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root_and_props(mount.clone(), Props { config }).render();
    mount
}

/// Index of the single active card; panics unless exactly one is active.
fn active_index(mount: &web_sys::Element, selector: &str) -> usize {
    let nodes = mount.query_selector_all(selector).unwrap();
    let active: Vec<usize> = (0..nodes.length())
        .filter(|&i| {
            nodes
                .item(i)
                .and_then(|n| n.dyn_into::<web_sys::Element>().ok())
                .map(|e| e.class_list().contains("active"))
                .unwrap_or(false)
        })
        .map(|i| i as usize)
        .collect();
    assert_eq!(active.len(), 1, "exactly one of {selector} must be active");
    active[0]
}

#[wasm_bindgen_test]
async fn starts_on_first_testimonial() {
    let mount = mount_with(fast_config());
    settle().await;

    assert_eq!(count(&mount, ".testimonial-card"), 3);
    assert_eq!(active_index(&mount, ".testimonial-card"), 0);
    assert_eq!(active_index(&mount, ".indicator"), 0);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn next_and_prev_wrap_around() {
    let mount = mount_with(fast_config());
    settle().await;

    click(&mount, "#prevTestimonial");
    settle().await;
    assert_eq!(active_index(&mount, ".testimonial-card"), 2);
    assert_eq!(active_index(&mount, ".indicator"), 2);

    click(&mount, "#nextTestimonial");
    settle().await;
    click(&mount, "#nextTestimonial");
    settle().await;
    assert_eq!(active_index(&mount, ".testimonial-card"), 1);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn indicator_jumps_to_its_testimonial() {
    let mount = mount_with(fast_config());
    settle().await;

    click(&mount, ".indicator:nth-child(3)");
    settle().await;
    assert_eq!(active_index(&mount, ".testimonial-card"), 2);
    assert_eq!(active_index(&mount, ".indicator"), 2);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn arrow_keys_step_the_carousel() {
    let mount = mount_with(fast_config());
    settle().await;

    let carousel = find(&mount, ".testimonials-carousel");
    carousel.dispatch_event(&key_event("ArrowRight")).unwrap();
    settle().await;
    assert_eq!(active_index(&mount, ".testimonial-card"), 1);

    carousel.dispatch_event(&key_event("ArrowLeft")).unwrap();
    settle().await;
    carousel.dispatch_event(&key_event("ArrowLeft")).unwrap();
    settle().await;
    assert_eq!(active_index(&mount, ".testimonial-card"), 2);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn advances_on_its_own() {
    let config = SiteConfig {
        carousel_interval_ms: 60,
        ..fast_config()
    };
    let mount = mount_with(config);
    settle().await;

    sleep(Duration::from_millis(100)).await;
    assert_ne!(active_index(&mount, ".testimonial-card"), 0);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn hovering_pauses_rotation_until_pointer_leaves() {
    let config = SiteConfig {
        carousel_interval_ms: 60,
        ..fast_config()
    };
    let mount = mount_with(config);
    settle().await;

    let carousel = find(&mount, ".testimonials-carousel");
    pointer(&carousel, "mouseenter");
    settle().await;

    sleep(Duration::from_millis(150)).await;
    assert_eq!(active_index(&mount, ".testimonial-card"), 0);

    pointer(&carousel, "mouseleave");
    settle().await;

    sleep(Duration::from_millis(150)).await;
    assert_ne!(active_index(&mount, ".testimonial-card"), 0);

    cleanup(&mount);
}
