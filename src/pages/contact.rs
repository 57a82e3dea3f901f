use yew::prelude::*;

use crate::components::page::{Breadcrumb, Page};
use crate::forms::contact::ContactForm;

const CONTACT_ITEMS: &[(&str, &str)] = &[
    ("Email", "hello@launchquests.com"),
    ("Phone", "+1 (555) 014-2200"),
    ("Office", "200 Harbor Street, Suite 4, San Francisco"),
];

#[function_component(Contact)]
pub fn contact() -> Html {
    let header = html! {
        <div class="page-header">
            <Breadcrumb current="Contact" />
            <h1>{"Let's plan your launch"}</h1>
            <p>{"Tell us about your product and we will get back within one business day."}</p>
        </div>
    };

    html! {
        <Page page="contact" {header}>
            { for CONTACT_ITEMS.iter().map(|(label, value)| html! {
                <div class="contact-item">
                    <strong>{*label}</strong>
                    <span>{*value}</span>
                </div>
            }) }
            <ContactForm />
        </Page>
    }
}
