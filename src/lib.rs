use std::rc::Rc;

use log::info;
use yew::prelude::*;

pub mod config;
pub mod carousel;
pub mod menu;
pub mod navigation {
    pub mod active;
    pub mod controller;
    pub mod pages;
    pub mod scroll_spy;
    pub mod site_map;
}
pub mod effects {
    pub mod counter;
    pub mod hover;
    pub mod keyboard;
    pub mod parallax;
    pub mod reveal;
    pub mod ripple;
    pub mod schedule;
    pub mod scroll;
    pub mod throttle;
}
pub mod forms {
    pub mod contact;
    pub mod newsletter;
    pub mod submit;
    pub mod validation;
}
pub mod components {
    pub mod page;
}
pub mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod services;
}

use config::SiteConfig;
use effects::keyboard::use_keyboard_navigation_class;
use effects::scroll::use_throttled_scroll;
use menu::{use_mobile_menu, MenuHandle};
use navigation::active::entry_classes;
use navigation::controller::{use_navigation, NavigationHandle};
use navigation::site_map::SiteMap;
use pages::{about::About, contact::Contact, home::Home, services::Services};

const GLOBAL_STYLES: &str = r#"
.page { display: none; }
.page.active { display: block; animation: fadeIn 0.4s ease-out; }
.stagger-item { opacity: 0; transform: translateY(20px); transition: opacity 0.5s ease-out, transform 0.5s ease-out; }
.stagger-item.animate-in { opacity: 1; transform: translateY(0); }
.navbar { position: fixed; top: 0; left: 0; right: 0; height: 80px; z-index: 1000; transition: background 0.3s ease, box-shadow 0.3s ease; }
.navbar.scrolled { background: rgba(255, 255, 255, 0.97); box-shadow: 0 2px 20px rgba(0, 0, 0, 0.1); }
.nav-link.active { color: #5B4BDB; font-weight: 600; }
.testimonial-card { display: none; }
.testimonial-card.active { display: block; animation: slideInUp 0.5s ease-out; }
.indicator.active { background: #5B4BDB; }
.ripple-host { position: relative; overflow: hidden; }
.ripple { position: absolute; background: rgba(255, 255, 255, 0.3); border-radius: 50%; transform: scale(0); animation: ripple 0.6s linear; pointer-events: none; z-index: 1; }
.animate-in .service-card .service-features li { animation: slideInUp 0.3s ease-out both; }
.animate-in .service-card .service-features li:nth-child(2) { animation-delay: 0.1s; }
.animate-in .service-card .service-features li:nth-child(3) { animation-delay: 0.2s; }
.floating-cards { position: relative; height: 0; }
.floating-card { position: absolute; right: 5%; padding: 0.75rem 1.25rem; border-radius: 12px; background: #fff; box-shadow: 0 10px 30px rgba(0, 0, 0, 0.1); will-change: transform; }
.keyboard-navigation *:focus { outline: 2px solid #5B4BDB; outline-offset: 2px; }
@keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
@keyframes slideInUp { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: translateY(0); } }
@keyframes slideDown { from { opacity: 0; transform: translateY(-10px); } to { opacity: 1; transform: translateY(0); } }
@keyframes ripple { to { transform: scale(4); opacity: 0; } }
@media (max-width: 768px) {
    .nav-menu { display: none; }
    .nav-menu.active { display: flex; flex-direction: column; position: fixed; top: 80px; left: 0; right: 0; background: #fff; }
}
"#;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub map: Rc<SiteMap>,
    pub menu: MenuHandle,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { map, menu } = props;
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let handle = use_context::<NavigationHandle>();
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        let threshold = config.navbar_scrolled_threshold;
        use_throttled_scroll(
            config.effects_throttle_ms,
            true,
            Callback::from(move |scroll_y: f64| is_scrolled.set(scroll_y > threshold)),
        );
    }

    let Some(handle) = handle else {
        return html! {};
    };
    let active = handle.active_key.as_deref();

    html! {
        <nav class={classes!("navbar", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-container" ref={menu.node.clone()}>
                <a href="#home" class="nav-logo" data-page="home" onclick={handle.link("home")}>
                    {"Launch Quests"}
                </a>
                <ul class={classes!("nav-menu", menu.is_open.then_some("active"))}>
                    { for map.entries().filter(|d| d.show_in_nav).map(|d| html! {
                        <li class="nav-item">
                            <a
                                href={format!("#{}", d.key)}
                                class={entry_classes(d.key, active)}
                                data-page={d.key}
                                onclick={handle.link(d.key)}
                            >
                                {d.label}
                            </a>
                        </li>
                    }) }
                </ul>
                <button
                    id="mobileToggle"
                    class={classes!("mobile-toggle", menu.is_open.then_some("active"))}
                    aria-label="Toggle menu"
                    aria-expanded={menu.is_open.to_string()}
                    onclick={menu.toggle.clone()}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    #[prop_or_else(SiteConfig::from_build_env)]
    pub config: SiteConfig,
}

impl Default for AppProps {
    fn default() -> Self {
        Self {
            config: SiteConfig::from_build_env(),
        }
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    let map = use_memo(|_| SiteMap::default(), ());
    let menu = use_mobile_menu(config.menu_breakpoint);
    let nav = use_navigation(map.clone(), config.clone(), menu.close.clone());
    use_keyboard_navigation_class();

    {
        let layout = config.layout;
        use_effect_with_deps(
            move |_| {
                info!("Launch Quests site mounted with {:?} layout", layout);
                || ()
            },
            (),
        );
    }

    html! {
        <ContextProvider<SiteConfig> context={config}>
            <ContextProvider<NavigationHandle> context={nav}>
                <style>{GLOBAL_STYLES}</style>
                <Nav map={map} menu={menu} />
                <main class="site-main">
                    <Home />
                    <Services />
                    <About />
                    <Contact />
                </main>
                <footer class="site-footer">
                    <p>{"© Launch Quests. All rights reserved."}</p>
                </footer>
            </ContextProvider<NavigationHandle>>
        </ContextProvider<SiteConfig>>
    }
}
