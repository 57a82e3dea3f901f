use yew::prelude::*;

use super::scroll::use_throttled_scroll;
use crate::config::SiteConfig;

const BASE_SPEED: f64 = 0.3;
const SPEED_STEP: f64 = 0.1;

/// Vertical shift of the `index`th floating card; later cards move faster.
pub fn parallax_offset(scroll_y: f64, index: usize) -> f64 {
    -(scroll_y * (BASE_SPEED + index as f64 * SPEED_STEP))
}

#[derive(Properties, PartialEq)]
pub struct FloatingCardsProps {
    pub labels: &'static [&'static str],
}

#[function_component(FloatingCards)]
pub fn floating_cards(props: &FloatingCardsProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let scroll_y = use_state_eq(|| 0.0_f64);

    {
        let scroll_y = scroll_y.clone();
        use_throttled_scroll(
            config.effects_throttle_ms,
            true,
            Callback::from(move |y: f64| scroll_y.set(y)),
        );
    }

    html! {
        <div class="floating-cards" aria-hidden="true">
            { for props.labels.iter().enumerate().map(|(i, label)| html! {
                <div
                    class="floating-card"
                    style={format!("transform: translateY({:.1}px);", parallax_offset(*scroll_y, i))}
                >
                    {*label}
                </div>
            }) }
        </div>
    }
}
