use yew::prelude::*;

/// How far a card rises under the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lift {
    /// Headline cards: rise and grow slightly.
    Feature,
    /// Detail, value and case-study cards.
    Subtle,
}

impl Lift {
    pub fn transform(self, hovered: bool) -> &'static str {
        match (self, hovered) {
            (Lift::Feature, true) => "translateY(-12px) scale(1.02)",
            (Lift::Feature, false) => "translateY(0) scale(1)",
            (Lift::Subtle, true) => "translateY(-5px)",
            (Lift::Subtle, false) => "translateY(0)",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HoverCardProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(Lift::Subtle)]
    pub lift: Lift,
}

#[function_component(HoverCard)]
pub fn hover_card(props: &HoverCardProps) -> Html {
    let hovered = use_state_eq(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <div
            class={props.class.clone()}
            style={format!("transform: {}; transition: transform 0.3s ease;", props.lift.transform(*hovered))}
            {onmouseenter}
            {onmouseleave}
        >
            { for props.children.iter() }
        </div>
    }
}
