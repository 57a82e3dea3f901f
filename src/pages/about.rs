use yew::prelude::*;

use crate::components::page::{Breadcrumb, Page};
use crate::effects::hover::HoverCard;

const VALUES: &[(&str, &str)] = &[
    ("Ship early", "A product in customers' hands teaches more than any slide deck."),
    ("Own the outcome", "We measure ourselves by what launches, not by hours billed."),
    ("Stay curious", "Every market is different; we start every quest by listening."),
];

const CASE_STUDIES: &[(&str, &str)] = &[
    ("Fintech onboarding", "Cut sign-up time from nine minutes to ninety seconds."),
    ("Retail marketplace", "Launched in four countries within one quarter."),
];

#[function_component(About)]
pub fn about() -> Html {
    let header = html! {
        <div class="page-header">
            <Breadcrumb current="About" />
            <h1>{"About Launch Quests"}</h1>
            <p>{"A studio of strategists, engineers and marketers who love launch day."}</p>
        </div>
    };

    html! {
        <Page page="about" {header}>
            { for VALUES.iter().map(|(title, text)| html! {
                <HoverCard class={classes!("value-card")}>
                    <h3>{*title}</h3>
                    <p>{*text}</p>
                </HoverCard>
            }) }
            { for CASE_STUDIES.iter().map(|(title, result)| html! {
                <HoverCard class={classes!("case-study-card")}>
                    <h3>{*title}</h3>
                    <p>{*result}</p>
                </HoverCard>
            }) }
        </Page>
    }
}
