use yew::prelude::*;

use crate::components::page::{Breadcrumb, Page};
use crate::effects::hover::HoverCard;
use crate::effects::ripple::RippleButton;
use crate::navigation::controller::NavigationHandle;

struct ServiceModule {
    title: &'static str,
    description: &'static str,
    deliverables: &'static [&'static str],
}

const MODULES: &[ServiceModule] = &[
    ServiceModule {
        title: "Discovery Sprint",
        description: "Two weeks of interviews, data and prototypes to find the product worth building.",
        deliverables: &["Customer interviews", "Opportunity map", "Clickable prototype"],
    },
    ServiceModule {
        title: "Launch Strategy",
        description: "A plan that names the audience, the message and the channels before a line of code.",
        deliverables: &["Positioning brief", "Pricing model", "Launch calendar"],
    },
    ServiceModule {
        title: "Product Development",
        description: "Cross-functional squads that design, build and ship in weekly increments.",
        deliverables: &["Design system", "Web and mobile apps", "CI/CD setup"],
    },
    ServiceModule {
        title: "Growth Marketing",
        description: "Acquisition and retention programs measured against revenue, not vanity numbers.",
        deliverables: &["Campaign playbooks", "Analytics dashboards", "Lifecycle email"],
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    let nav = use_context::<NavigationHandle>();
    let schedule = nav
        .as_ref()
        .map(|n| n.schedule_consultation.reform(|_: MouseEvent| ()))
        .unwrap_or_default();

    let header = html! {
        <div class="page-header">
            <Breadcrumb current="Services" />
            <h1>{"Services"}</h1>
            <p>{"Pick a single module or run the whole quest with us."}</p>
        </div>
    };

    html! {
        <Page page="services" {header}>
            { for MODULES.iter().map(|module| html! {
                <HoverCard class={classes!("service-module", "service-detail-card")}>
                    <h3>{module.title}</h3>
                    <p>{module.description}</p>
                    <ul class="service-features">
                        { for module.deliverables.iter().map(|d| html! { <li>{*d}</li> }) }
                    </ul>
                </HoverCard>
            }) }
            <div class="consultation-cta">
                <h2>{"Not sure where to start?"}</h2>
                <RippleButton id="scheduleConsultation" class={classes!("btn-primary")} onclick={schedule}>
                    {"Schedule a consultation"}
                </RippleButton>
            </div>
        </Page>
    }
}
