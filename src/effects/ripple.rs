use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

const RIPPLE_MS: u32 = 600;

/// A square ripple centered on the click point, in button-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    pub fn from_click(rect: (f64, f64, f64, f64), client_x: f64, client_y: f64) -> Self {
        let (rect_left, rect_top, width, height) = rect;
        let size = width.max(height);
        Self {
            size,
            left: client_x - rect_left - size / 2.0,
            top: client_y - rect_top - size / 2.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {0}px; height: {0}px; left: {1}px; top: {2}px;",
            self.size, self.left, self.top
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct RippleButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_else(|| AttrValue::from("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    /// Navigation key this button leads to, rendered as `data-page`.
    #[prop_or_default]
    pub data_page: Option<AttrValue>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

#[function_component(RippleButton)]
pub fn ripple_button(props: &RippleButtonProps) -> Html {
    let ripple = use_state(|| None::<(u64, Ripple)>);
    let generation = use_mut_ref(|| 0u64);

    let onclick = {
        let ripple = ripple.clone();
        let generation = generation.clone();
        let forward = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(target) = e.current_target().and_then(|t| t.dyn_into::<Element>().ok()) {
                let rect = target.get_bounding_client_rect();
                let id = {
                    let mut generation = generation.borrow_mut();
                    *generation += 1;
                    *generation
                };
                ripple.set(Some((
                    id,
                    Ripple::from_click(
                        (rect.left(), rect.top(), rect.width(), rect.height()),
                        e.client_x() as f64,
                        e.client_y() as f64,
                    ),
                )));

                let ripple = ripple.clone();
                let generation = generation.clone();
                Timeout::new(RIPPLE_MS, move || {
                    // A newer click owns the ripple now.
                    if *generation.borrow() == id {
                        ripple.set(None);
                    }
                })
                .forget();
            }
            forward.emit(e);
        })
    };

    html! {
        <button
            id={props.id.clone()}
            type={props.button_type.clone()}
            data-page={props.data_page.clone()}
            class={classes!("btn", "ripple-host", props.class.clone())}
            disabled={props.disabled}
            {onclick}
        >
            { for props.children.iter() }
            {
                if let Some((id, ripple)) = *ripple {
                    html! { <span key={id.to_string()} class="ripple" style={ripple.style()}></span> }
                } else {
                    html! {}
                }
            }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_uses_larger_side_and_centers_on_click() {
        let ripple = Ripple::from_click((100.0, 50.0, 200.0, 40.0), 150.0, 70.0);
        assert_eq!(ripple.size, 200.0);
        assert_eq!(ripple.left, -50.0);
        assert_eq!(ripple.top, -80.0);
    }

    #[test]
    fn style_places_ripple() {
        let ripple = Ripple { size: 10.0, left: 1.0, top: 2.0 };
        assert_eq!(ripple.style(), "width: 10px; height: 10px; left: 1px; top: 2px;");
    }
}
