use super::site_map::{NavError, NavigationTarget, SiteMap};

/// Which page container is visible. Holding a single key makes the
/// one-visible-page invariant structural.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageState {
    current: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageSwitch {
    pub from: String,
    pub to: String,
}

impl PageSwitch {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

impl PageState {
    /// Starts on the first destination of the map.
    pub fn new(map: &SiteMap) -> Option<Self> {
        map.first().map(|d| Self {
            current: d.key.to_string(),
        })
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.current == key
    }

    pub fn navigate(
        &mut self,
        map: &SiteMap,
        target: &NavigationTarget,
    ) -> Result<PageSwitch, NavError> {
        let destination = map.resolve(target)?;
        let from = std::mem::replace(&mut self.current, destination.key.to_string());
        Ok(PageSwitch {
            from,
            to: self.current.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_count(state: &PageState, map: &SiteMap) -> usize {
        map.keys().filter(|k| state.is_visible(k)).count()
    }

    #[test]
    fn starts_on_home_with_one_visible_page() {
        let map = SiteMap::default();
        let state = PageState::new(&map).unwrap();
        assert_eq!(state.current(), "home");
        assert_eq!(visible_count(&state, &map), 1);
    }

    #[test]
    fn every_valid_target_leaves_exactly_one_visible_page() {
        let map = SiteMap::default();
        let mut state = PageState::new(&map).unwrap();
        let keys: Vec<_> = map.keys().collect();
        for key in keys {
            state.navigate(&map, &key.into()).unwrap();
            assert!(state.is_visible(key));
            assert_eq!(visible_count(&state, &map), 1);
        }
    }

    #[test]
    fn contact_scenario_shows_only_contact() {
        let map = SiteMap::default();
        let mut state = PageState::new(&map).unwrap();
        let switch = state.navigate(&map, &"contact".into()).unwrap();
        assert_eq!(switch.from, "home");
        assert_eq!(switch.to, "contact");
        assert!(switch.changed());
        assert!(!state.is_visible("home"));
        assert!(state.is_visible("contact"));
    }

    #[test]
    fn invalid_target_leaves_state_unchanged() {
        let map = SiteMap::default();
        let mut state = PageState::new(&map).unwrap();
        state.navigate(&map, &"about".into()).unwrap();
        let before = state.clone();

        let err = state.navigate(&map, &"missing".into()).unwrap_err();
        assert_eq!(err, NavError::UnknownTarget("missing".to_string()));
        assert_eq!(state, before);
    }

    #[test]
    fn renavigating_to_current_page_is_not_a_change() {
        let map = SiteMap::default();
        let mut state = PageState::new(&map).unwrap();
        let switch = state.navigate(&map, &"home".into()).unwrap();
        assert!(!switch.changed());
    }

    #[test]
    fn empty_map_has_no_initial_page() {
        assert!(PageState::new(&SiteMap::new(&[])).is_none());
    }
}
