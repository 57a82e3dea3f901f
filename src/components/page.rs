use yew::prelude::*;

use crate::config::{Layout, SiteConfig};
use crate::effects::reveal::Reveal;
use crate::effects::schedule::use_staggered_reveal;
use crate::navigation::controller::NavigationHandle;

#[derive(Properties, PartialEq)]
pub struct PageProps {
    /// Navigation key; doubles as the container id.
    pub page: &'static str,
    #[prop_or_default]
    pub class: Classes,
    /// Rendered above the animated items, outside the stagger.
    #[prop_or_default]
    pub header: Html,
    #[prop_or_default]
    pub children: Children,
}

/// Container for one page (pages layout) or one section (sections layout).
///
/// In the pages layout only the current page carries `active`, and its
/// children animate in one after another each time it is shown. In the
/// sections layout every child reveals itself on first scroll into view.
#[function_component(Page)]
pub fn page(props: &PageProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let nav = use_context::<NavigationHandle>();
    let layout = nav.as_ref().map_or(config.layout, |n| n.layout);
    let visible = nav.as_ref().map_or(true, |n| n.is_visible(props.page));

    let run = match (layout, &nav) {
        (Layout::Pages, Some(nav)) if visible => Some(nav.entrance_run.unwrap_or(0)),
        _ => None,
    };
    let revealed = use_staggered_reveal(
        run,
        props.children.len(),
        config.page_animation_delay_ms,
        config.page_animation_step_ms,
    );

    match layout {
        Layout::Pages => html! {
            <section
                id={props.page}
                class={classes!("page", visible.then_some("active"), props.class.clone())}
                aria-hidden={(!visible).to_string()}
            >
                { props.header.clone() }
                { for props.children.iter().enumerate().map(|(i, child)| html! {
                    <div class={classes!("stagger-item", (i < revealed).then_some("animate-in"))}>
                        { child }
                    </div>
                }) }
            </section>
        },
        Layout::Sections => html! {
            <section id={props.page} class={classes!("section", props.class.clone())}>
                { props.header.clone() }
                { for props.children.iter().map(|child| html! {
                    <Reveal class={classes!("stagger-item")}>{ child }</Reveal>
                }) }
            </section>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct BreadcrumbProps {
    pub current: &'static str,
}

#[function_component(Breadcrumb)]
pub fn breadcrumb(props: &BreadcrumbProps) -> Html {
    let nav = use_context::<NavigationHandle>();
    let Some(nav) = nav else {
        return html! {};
    };
    html! {
        <div class="breadcrumb">
            <span data-page="home" onclick={nav.link("home")}>{"Home"}</span>
            {" / "}
            <strong>{props.current}</strong>
        </div>
    }
}
