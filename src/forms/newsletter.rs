use std::collections::BTreeMap;

use log::info;
use yew::prelude::*;

use super::contact::event_value;
use super::validation::{validate, FieldError, NEWSLETTER_FORM};

#[function_component(NewsletterForm)]
pub fn newsletter_form() -> Html {
    let email = use_state(String::new);
    let error = use_state_eq(|| None::<FieldError>);
    let subscribed = use_state_eq(|| false);

    let oninput = {
        let email = email.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            email.set(event_value(&e));
            error.set(None);
        })
    };

    let onsubmit = {
        let email = email.clone();
        let error = error.clone();
        let subscribed = subscribed.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let values = BTreeMap::from([("email", email.trim())]);
            match validate(&NEWSLETTER_FORM, &values) {
                Ok(()) => {
                    info!("Newsletter signup accepted");
                    subscribed.set(true);
                    email.set(String::new());
                }
                Err(errors) => error.set(errors.get("email")),
            }
        })
    };

    if *subscribed {
        return html! {
            <p class="newsletter-thanks">{"Thanks! You're on the list."}</p>
        };
    }

    html! {
        <form class="newsletter-form" novalidate=true {onsubmit}>
            <input
                id="newsletterEmail"
                type="email"
                placeholder="you@company.com"
                class={classes!("form-control", error.is_some().then_some("error"))}
                value={(*email).clone()}
                {oninput}
            />
            <button type="submit" class="btn btn-secondary">{"Subscribe"}</button>
            {
                if let Some(err) = *error {
                    html! { <div class="field-error">{err.to_string()}</div> }
                } else {
                    html! {}
                }
            }
        </form>
    }
}
