use log::debug;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns whether anything changed.
    pub fn open(&mut self) -> bool {
        let changed = !self.open;
        self.open = true;
        changed
    }

    pub fn close(&mut self) -> bool {
        let changed = self.open;
        self.open = false;
        changed
    }

    pub fn toggle(&mut self) -> bool {
        if self.open {
            self.close()
        } else {
            self.open()
        }
    }
}

/// Whether a viewport this wide should force the menu closed.
pub fn past_breakpoint(viewport_width: f64, breakpoint: f64) -> bool {
    viewport_width > breakpoint
}

fn set_body_scroll_lock(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let style = body.style();
    let _ = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
}

#[derive(Clone, PartialEq)]
pub struct MenuHandle {
    pub is_open: bool,
    /// Attach to the element wrapping both the toggle and the menu.
    pub node: NodeRef,
    pub toggle: Callback<MouseEvent>,
    pub close: Callback<()>,
}

#[hook]
pub fn use_mobile_menu(breakpoint: f64) -> MenuHandle {
    let state = use_state_eq(MenuState::default);
    let node = use_node_ref();

    let close = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let mut next = *state;
            if next.close() {
                debug!("Closing mobile menu");
                state.set(next);
            }
        })
    };

    let toggle = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            let mut next = *state;
            next.toggle();
            debug!("Toggle mobile menu, now open: {}", next.is_open());
            state.set(next);
        })
    };

    {
        let is_open = state.is_open();
        use_effect_with_deps(
            move |open| {
                set_body_scroll_lock(*open);
                || ()
            },
            is_open,
        );
    }

    {
        let close = close.clone();
        use_click_away(node.clone(), move |_: Event| close.emit(()));
    }
    {
        let close = close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                close.emit(());
            }
        });
    }
    {
        let close = close.clone();
        use_event_with_window("resize", move |_: Event| {
            let width = web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|w| w.as_f64())
                .unwrap_or_default();
            if past_breakpoint(width, breakpoint) {
                close.emit(());
            }
        });
    }

    MenuHandle {
        is_open: state.is_open(),
        node,
        toggle,
        close,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_walks_closed_open_closed() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        assert!(menu.toggle());
        assert!(menu.is_open());
        assert!(menu.toggle());
        assert!(!menu.is_open());
    }

    #[test]
    fn close_when_closed_is_a_no_op() {
        let mut menu = MenuState::default();
        assert!(!menu.close());
        assert!(!menu.is_open());
    }

    #[test]
    fn open_twice_reports_one_change() {
        let mut menu = MenuState::default();
        assert!(menu.open());
        assert!(!menu.open());
        assert!(menu.close());
    }

    #[test]
    fn breakpoint_is_exclusive() {
        assert!(!past_breakpoint(768.0, 768.0));
        assert!(past_breakpoint(769.0, 768.0));
        assert!(!past_breakpoint(375.0, 768.0));
    }
}
