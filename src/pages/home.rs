use yew::prelude::*;

use crate::carousel::Testimonials;
use crate::components::page::Page;
use crate::effects::counter::StatCounter;
use crate::effects::hover::{HoverCard, Lift};
use crate::effects::parallax::FloatingCards;
use crate::effects::ripple::RippleButton;
use crate::forms::newsletter::NewsletterForm;
use crate::navigation::controller::NavigationHandle;

struct ServicePreview {
    title: &'static str,
    summary: &'static str,
    features: &'static [&'static str],
}

const SERVICE_PREVIEWS: &[ServicePreview] = &[
    ServicePreview {
        title: "Launch Strategy",
        summary: "Positioning, pricing and a go-to-market plan built around your first hundred customers.",
        features: &["Market research", "Competitor mapping", "Launch roadmap"],
    },
    ServicePreview {
        title: "Product Development",
        summary: "From prototype to production with a team that ships weekly.",
        features: &["MVP scoping", "Design systems", "Release pipelines"],
    },
    ServicePreview {
        title: "Growth Marketing",
        summary: "Campaigns, funnels and analytics that keep the momentum after launch day.",
        features: &["Paid acquisition", "Content engine", "Conversion tuning"],
    },
];

const HERO_CARDS: &[&str] = &["Strategy", "Build", "Launch"];

const STATS: &[(&str, &str)] = &[
    ("150+", "Products launched"),
    ("98%", "Client retention"),
    ("12", "Years in the field"),
    ("40+", "Specialists"),
];

#[function_component(Home)]
pub fn home() -> Html {
    let nav = use_context::<NavigationHandle>();
    let go = |key: &'static str| nav.as_ref().map(|n| n.link(key)).unwrap_or_default();

    let header = html! {
        <div class="hero">
            <h1 class="hero-title">{"Launch products people remember"}</h1>
            <p class="hero-subtitle">
                {"Launch Quests takes ideas from whiteboard to market with strategy, engineering and growth under one roof."}
            </p>
            <FloatingCards labels={HERO_CARDS} />
            <div class="hero-actions">
                <RippleButton class={classes!("btn-primary")} data_page="contact" onclick={go("contact")}>
                    {"Start your quest"}
                </RippleButton>
                <RippleButton class={classes!("btn-secondary")} data_page="services" onclick={go("services")}>
                    {"Explore services"}
                </RippleButton>
            </div>
        </div>
    };

    html! {
        <Page page="home" {header}>
            <div class="hero-stats">
                { for STATS.iter().map(|(value, label)| html! {
                    <StatCounter value={*value} label={*label} />
                }) }
            </div>
            <div class="services-preview">
                <h2>{"What we do"}</h2>
                <div class="card-grid">
                    { for SERVICE_PREVIEWS.iter().map(|service| html! {
                        <HoverCard class={classes!("service-card")} lift={Lift::Feature}>
                            <h3>{service.title}</h3>
                            <p>{service.summary}</p>
                            <ul class="service-features">
                                { for service.features.iter().map(|f| html! { <li>{*f}</li> }) }
                            </ul>
                        </HoverCard>
                    }) }
                </div>
            </div>
            <div class="testimonials">
                <h2>{"What our clients say"}</h2>
                <Testimonials />
            </div>
            <div class="newsletter">
                <h2>{"Launch notes, monthly"}</h2>
                <p>{"One email a month with what we learned shipping products."}</p>
                <NewsletterForm />
            </div>
        </Page>
    }
}
