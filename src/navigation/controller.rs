use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{error, info};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};
use yew::prelude::*;

use super::pages::PageState;
use super::scroll_spy::{current_section, element_span, measure_sections, scroll_position, target_offset};
use super::site_map::{NavigationTarget, SiteMap};
use crate::config::{Layout, SiteConfig};
use crate::effects::scroll::use_throttled_scroll;

pub const CONTACT_KEY: &str = "contact";
pub const FIRST_CONTACT_FIELD: &str = "firstName";

#[derive(Clone, PartialEq)]
pub struct NavigationHandle {
    pub layout: Layout,
    /// Visible page container (pages layout only).
    pub current_page: Option<String>,
    /// Key of the navigation entry to mark active.
    pub active_key: Option<String>,
    /// Bumped on every page switch; drives entrance animations of the new page.
    pub entrance_run: Option<u64>,
    pub navigate: Callback<NavigationTarget>,
    pub schedule_consultation: Callback<()>,
}

impl NavigationHandle {
    pub fn is_visible(&self, key: &str) -> bool {
        match self.layout {
            Layout::Pages => self.current_page.as_deref() == Some(key),
            Layout::Sections => true,
        }
    }

    /// Click handler for an entry that navigates to `key`.
    pub fn link(&self, key: &'static str) -> Callback<MouseEvent> {
        let navigate = self.navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate.emit(key.into());
        })
    }
}

fn smooth_scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(top.max(0.0));
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

fn focus_field(id: &str) {
    let Some(field) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    else {
        error!("Field to focus not found: {}", id);
        return;
    };
    let _ = field.focus();
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    field.scroll_into_view_with_scroll_into_view_options(&options);
}

#[hook]
pub fn use_navigation(map: Rc<SiteMap>, config: SiteConfig, close_menu: Callback<()>) -> NavigationHandle {
    let layout = config.layout;
    let page = use_state_eq({
        let map = map.clone();
        move || PageState::new(&map)
    });
    let spy_active = use_state_eq(|| None::<String>);
    let entrance_run = use_state_eq(|| None::<u64>);

    // Section tracking, including the initial pass before any scrolling.
    {
        let spy_active = spy_active.clone();
        let map = map.clone();
        let nav_bar_height = config.nav_bar_height;
        let lookahead = config.spy_lookahead;
        use_throttled_scroll(
            config.spy_throttle_ms,
            layout == Layout::Sections,
            Callback::from(move |scroll_y: f64| {
                let spans = measure_sections(map.keys());
                let position = scroll_position(scroll_y, nav_bar_height, lookahead);
                spy_active.set(current_section(&spans, position).map(str::to_string));
            }),
        );
    }

    let navigate = {
        let map = map.clone();
        let page = page.clone();
        let entrance_run = entrance_run.clone();
        let close_menu = close_menu.clone();
        let nav_bar_height = config.nav_bar_height;
        let margin = config.scroll_margin;
        Callback::from(move |target: NavigationTarget| {
            info!("Navigating to: {}", target);
            match layout {
                Layout::Pages => {
                    let Some(mut next) = (*page).clone() else {
                        error!("No pages to navigate between");
                        return;
                    };
                    match next.navigate(&map, &target) {
                        Ok(switch) => {
                            page.set(Some(next));
                            entrance_run.set(Some(entrance_run.map_or(1, |run| run + 1)));
                            smooth_scroll_to(0.0);
                            close_menu.emit(());
                            info!("Successfully navigated from {} to {}", switch.from, switch.to);
                        }
                        Err(e) => error!("{}", e),
                    }
                }
                Layout::Sections => {
                    let span = map
                        .resolve(&target)
                        .map_err(|e| e.to_string())
                        .and_then(|d| {
                            element_span(d.key).ok_or_else(|| format!("section element missing: {}", d.key))
                        });
                    match span {
                        Ok(span) => {
                            smooth_scroll_to(target_offset(span.top, nav_bar_height, margin));
                            close_menu.emit(());
                        }
                        Err(e) => error!("{}", e),
                    }
                }
            }
        })
    };

    let schedule_consultation = {
        let navigate = navigate.clone();
        let focus_delay_ms = config.focus_delay_ms;
        Callback::from(move |_: ()| {
            navigate.emit(CONTACT_KEY.into());
            Timeout::new(focus_delay_ms, || focus_field(FIRST_CONTACT_FIELD)).forget();
        })
    };

    let current_page = match layout {
        Layout::Pages => (*page).as_ref().map(|p| p.current().to_string()),
        Layout::Sections => None,
    };
    let active_key = match layout {
        Layout::Pages => current_page.clone(),
        Layout::Sections => (*spy_active).clone(),
    };

    NavigationHandle {
        layout,
        current_page,
        active_key,
        entrance_run: *entrance_run,
        navigate,
        schedule_consultation,
    }
}
