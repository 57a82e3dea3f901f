use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

const THRESHOLD: f64 = 0.1;
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Fired once, the first time the element scrolls into view.
    #[prop_or_default]
    pub on_reveal: Callback<()>,
}

/// Wraps content that animates in the first time it enters the viewport.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let animated = use_state_eq(|| false);

    {
        let animated = animated.clone();
        let on_reveal = props.on_reveal.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observed = node.cast::<Element>().and_then(|element| {
                    let callback = Closure::wrap(Box::new(
                        move |entries: Array, observer: IntersectionObserver| {
                            let visible = entries.iter().any(|entry| {
                                entry
                                    .dyn_into::<IntersectionObserverEntry>()
                                    .map(|e| e.is_intersecting())
                                    .unwrap_or(false)
                            });
                            if visible {
                                observer.disconnect();
                                animated.set(true);
                                on_reveal.emit(());
                            }
                        },
                    )
                        as Box<dyn FnMut(Array, IntersectionObserver)>);

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(THRESHOLD));
                    options.set_root_margin(ROOT_MARGIN);

                    match IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(observer) => {
                            observer.observe(&element);
                            Some((observer, callback))
                        }
                        Err(e) => {
                            log::warn!("IntersectionObserver unavailable: {:?}", e);
                            None
                        }
                    }
                });

                move || {
                    if let Some((observer, _callback)) = observed {
                        observer.disconnect();
                    }
                }
            },
            node.clone(),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!(
                props.class.clone(),
                (*animated).then(|| classes!("animate-in", "animated"))
            )}
        >
            { for props.children.iter() }
        </div>
    }
}
