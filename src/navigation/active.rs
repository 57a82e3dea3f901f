use yew::{classes, Classes};

pub fn is_active(entry_key: &str, current: Option<&str>) -> bool {
    current.map_or(false, |key| key == entry_key)
}

/// One flag per entry; every entry is cleared before the matches are set.
pub fn active_flags<'a, I>(entries: I, current: Option<&str>) -> Vec<bool>
where
    I: IntoIterator<Item = &'a str>,
{
    entries
        .into_iter()
        .map(|entry_key| is_active(entry_key, current))
        .collect()
}

pub fn entry_classes(entry_key: &str, current: Option<&str>) -> Classes {
    classes!("nav-link", is_active(entry_key, current).then_some("active"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: [&str; 4] = ["home", "services", "about", "contact"];

    #[test]
    fn marks_exactly_the_matching_entry() {
        let flags = active_flags(KEYS, Some("contact"));
        assert_eq!(flags, vec![false, false, false, true]);
    }

    #[test]
    fn nothing_is_active_without_a_current_key() {
        assert!(active_flags(KEYS, None).iter().all(|f| !f));
    }

    #[test]
    fn unknown_current_key_marks_nothing() {
        assert!(active_flags(KEYS, Some("blog")).iter().all(|f| !f));
    }

    #[test]
    fn recomputation_is_idempotent() {
        let first = active_flags(KEYS, Some("services"));
        let second = active_flags(KEYS, Some("services"));
        assert_eq!(first, second);
        assert_eq!(first.iter().filter(|f| **f).count(), 1);
    }

    #[test]
    fn classes_carry_active_marker() {
        assert_eq!(entry_classes("about", Some("about")), classes!("nav-link", "active"));
        assert_eq!(entry_classes("about", Some("home")), classes!("nav-link"));
    }
}
