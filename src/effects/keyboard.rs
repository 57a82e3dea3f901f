use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

pub const KEYBOARD_CLASS: &str = "keyboard-navigation";

fn set_body_class(class: &str, on: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let classes = body.class_list();
    let _ = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
}

/// Shows focus outlines only for keyboard users: Tab turns them on for the
/// whole document, any mouse press turns them off again.
#[hook]
pub fn use_keyboard_navigation_class() {
    use_event_with_window("keydown", |e: KeyboardEvent| {
        if e.key() == "Tab" {
            set_body_class(KEYBOARD_CLASS, true);
        }
    });
    use_event_with_window("mousedown", |_: MouseEvent| {
        set_body_class(KEYBOARD_CLASS, false);
    });
}
