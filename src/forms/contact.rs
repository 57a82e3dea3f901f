use log::{error, info};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::submit::{Lead, Submitter};
use super::validation::{validate, validate_field, FieldErrors, FormSchema, CONTACT_FORM};
use crate::config::SiteConfig;
use crate::effects::ripple::RippleButton;

const SUBMIT_LABEL: &str = "Send Message";
const BUSY_LABEL: &str = "Sending...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Invalid,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Trims and validates a draft. Only an `Ok` may move the form into its
/// busy state.
pub fn prepare_submission(schema: &FormSchema, draft: &Lead) -> Result<Lead, FieldErrors> {
    let lead = draft.trimmed();
    validate(schema, &lead)?;
    Ok(lead)
}

/// Reads the value of whichever form control fired the event.
pub fn event_value(e: &Event) -> String {
    let Some(target) = e.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

const SERVICES: &[(&str, &str)] = &[
    ("", "Select a service"),
    ("strategy", "Launch Strategy"),
    ("development", "Product Development"),
    ("marketing", "Growth Marketing"),
    ("support", "Ongoing Support"),
];

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let draft = use_state(Lead::default);
    let errors = use_state(FieldErrors::default);
    let busy = use_state_eq(|| false);
    let notice = use_state(|| None::<Notice>);
    let notice_ids = use_mut_ref(|| 0u64);
    let service_ref = use_node_ref();

    let show_notice = {
        let notice = notice.clone();
        let notice_ids = notice_ids.clone();
        Callback::from(move |(kind, text): (NoticeKind, String)| {
            let id = {
                let mut ids = notice_ids.borrow_mut();
                *ids += 1;
                *ids
            };
            notice.set(Some(Notice { id, kind, text }));
        })
    };

    // Each notice dismisses itself; a newer notice cancels the old timer.
    {
        let notice = notice.clone();
        let dismiss_ms = config.notice_dismiss_ms;
        let current_id = (*notice).as_ref().map(|n| n.id);
        use_effect_with_deps(
            move |current_id| {
                let timeout = current_id.map(|_| {
                    gloo_timers::callback::Timeout::new(dismiss_ms, move || notice.set(None))
                });
                move || drop(timeout)
            },
            current_id,
        );
    }

    let on_input = |key: &'static str| {
        let draft = draft.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*draft).clone();
            if let Some(field) = next.field_mut(key) {
                *field = event_value(&e);
            }
            draft.set(next);

            if errors.get(key).is_some() {
                let mut cleared = (*errors).clone();
                cleared.clear(key);
                errors.set(cleared);
            }
        })
    };

    let on_blur = |key: &'static str| {
        let errors = errors.clone();
        Callback::from(move |e: FocusEvent| {
            let value = event_value(&e);
            let mut next = (*errors).clone();
            let changed = match validate_field(&CONTACT_FORM, key, &value) {
                Some(err) => {
                    let changed = next.get(key) != Some(err);
                    next.set(key, err);
                    changed
                }
                None => next.clear(key),
            };
            if changed {
                errors.set(next);
            }
        })
    };

    let on_change = |key: &'static str| {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let mut next = (*draft).clone();
            if let Some(field) = next.field_mut(key) {
                *field = event_value(&e);
            }
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let busy = busy.clone();
        let notice = notice.clone();
        let show_notice = show_notice.clone();
        let service_ref = service_ref.clone();
        let submitter = Submitter::from_mode(&config.submission, config.simulated_submit_ms);
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }

            let lead = match prepare_submission(&CONTACT_FORM, &draft) {
                Ok(lead) => lead,
                Err(failed) => {
                    info!("Contact form invalid: {:?}", failed.keys().collect::<Vec<_>>());
                    show_notice.emit((NoticeKind::Invalid, failed.summary()));
                    errors.set(failed);
                    return;
                }
            };

            errors.set(FieldErrors::default());
            notice.set(None);
            busy.set(true);

            let draft = draft.clone();
            let busy = busy.clone();
            let show_notice = show_notice.clone();
            let submitter = submitter.clone();
            let service_ref = service_ref.clone();
            spawn_local(async move {
                match submitter.submit(&lead).await {
                    Ok(receipt) => {
                        info!("Contact form submitted");
                        draft.set(Lead::default());
                        // A select the user has touched ignores `selected` changes.
                        if let Some(select) = service_ref.cast::<HtmlSelectElement>() {
                            select.set_value("");
                        }
                        show_notice.emit((NoticeKind::Success, receipt.message));
                    }
                    Err(err) => {
                        error!("Contact form submission failed: {}", err);
                        show_notice.emit((NoticeKind::Error, err.user_message()));
                    }
                }
                busy.set(false);
            });
        })
    };

    let field_class = |key: &str| classes!("form-control", errors.get(key).map(|_| "error"));
    let field_error = |key: &str| match errors.get(key) {
        Some(err) => html! { <div class="field-error">{err.to_string()}</div> },
        None => html! {},
    };

    let notice_html = match &*notice {
        Some(n) => {
            let class = match n.kind {
                NoticeKind::Success => "form-notice form-success",
                NoticeKind::Error => "form-notice form-error",
                NoticeKind::Invalid => "form-notice form-invalid",
            };
            html! { <div key={n.id.to_string()} class={class} role="status">{n.text.clone()}</div> }
        }
        None => html! {},
    };

    html! {
        <form id="contactForm" class="contact-form" novalidate=true {onsubmit}>
            <style>
                {r#"
                .contact-form .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
                .contact-form .form-group { display: flex; flex-direction: column; margin-bottom: 1rem; }
                .contact-form .form-control.error { border-color: #ff4444; box-shadow: 0 0 0 3px rgba(255, 68, 68, 0.2); }
                .contact-form .field-error { color: #ff4444; font-size: 0.85rem; margin-top: 0.5rem; animation: slideDown 0.3s ease-out; }
                .form-notice { padding: 1rem; border-radius: 8px; margin-bottom: 1rem; animation: slideInUp 0.5s ease-out; }
                .form-success { background: #D4EDDA; color: #155724; border: 1px solid #C3E6CB; }
                .form-error, .form-invalid { background: #F8D7DA; color: #721C24; border: 1px solid #F5C6CB; }
                @media (max-width: 768px) {
                    .contact-form .form-row { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            { notice_html }
            <div class="form-row">
                <div class="form-group">
                    <label for="firstName">{"First name *"}</label>
                    <input id="firstName" name="firstName" type="text" required=true
                        class={field_class("firstName")}
                        value={draft.first_name.clone()}
                        oninput={on_input("firstName")}
                        onblur={on_blur("firstName")} />
                    { field_error("firstName") }
                </div>
                <div class="form-group">
                    <label for="lastName">{"Last name *"}</label>
                    <input id="lastName" name="lastName" type="text" required=true
                        class={field_class("lastName")}
                        value={draft.last_name.clone()}
                        oninput={on_input("lastName")}
                        onblur={on_blur("lastName")} />
                    { field_error("lastName") }
                </div>
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="email">{"Email *"}</label>
                    <input id="email" name="email" type="email" required=true
                        class={field_class("email")}
                        value={draft.email.clone()}
                        oninput={on_input("email")}
                        onblur={on_blur("email")} />
                    { field_error("email") }
                </div>
                <div class="form-group">
                    <label for="phone">{"Phone"}</label>
                    <input id="phone" name="phone" type="tel"
                        class={field_class("phone")}
                        value={draft.phone.clone()}
                        oninput={on_input("phone")} />
                </div>
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="company">{"Company"}</label>
                    <input id="company" name="company" type="text"
                        class={field_class("company")}
                        value={draft.company.clone()}
                        oninput={on_input("company")} />
                </div>
                <div class="form-group">
                    <label for="service">{"Service"}</label>
                    <select id="service" name="service" ref={service_ref}
                        class={field_class("service")}
                        onchange={on_change("service")}>
                        { for SERVICES.iter().map(|(value, label)| html! {
                            <option value={*value} selected={draft.service == *value}>{*label}</option>
                        }) }
                    </select>
                </div>
            </div>
            <div class="form-group">
                <label for="message">{"Message *"}</label>
                <textarea id="message" name="message" rows="5" required=true
                    class={field_class("message")}
                    value={draft.message.clone()}
                    oninput={on_input("message")}
                    onblur={on_blur("message")} />
                { field_error("message") }
            </div>
            <RippleButton button_type="submit" class={classes!("btn-primary", "submit-btn")} disabled={*busy}>
                { if *busy { BUSY_LABEL } else { SUBMIT_LABEL } }
            </RippleButton>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::validation::FieldError;

    fn filled() -> Lead {
        Lead {
            first_name: " Ada ".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com ".into(),
            message: "Let's talk".into(),
            ..Lead::default()
        }
    }

    #[test]
    fn valid_draft_is_trimmed_for_sending() {
        let lead = prepare_submission(&CONTACT_FORM, &filled()).unwrap();
        assert_eq!(lead.first_name, "Ada");
        assert_eq!(lead.email, "ada@example.com");
        assert_eq!(lead.phone, "");
    }

    #[test]
    fn missing_required_field_blocks_submission() {
        let mut draft = filled();
        draft.last_name.clear();
        let errors = prepare_submission(&CONTACT_FORM, &draft).unwrap_err();
        assert_eq!(errors.get("lastName"), Some(FieldError::Required));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn empty_draft_marks_every_required_field() {
        let errors = prepare_submission(&CONTACT_FORM, &Lead::default()).unwrap_err();
        let mut keys: Vec<_> = errors.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["email", "firstName", "lastName", "message"]);
    }
}
