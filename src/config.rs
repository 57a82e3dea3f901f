
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Content layout of the site. A build renders exactly one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Mutually exclusive page containers, one visible at a time.
    Pages,
    /// One continuous document of sections tracked by scroll position.
    Sections,
}

impl Layout {
    fn from_env(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("sections") => Layout::Sections,
            _ => Layout::Pages,
        }
    }
}

/// Where validated contact leads go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionMode {
    Simulated,
    Remote {
        endpoint: String,
        token_header: String,
        token: String,
    },
}

pub const LEAD_TOKEN_HEADER: &str = "X-Launch-Token";
const DEFAULT_LEAD_PATH: &str = "/api/leads";

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub layout: Layout,
    pub submission: SubmissionMode,

    /// Height of the fixed navigation bar, in CSS pixels.
    pub nav_bar_height: f64,
    /// Gap left between the nav bar and a section after scrolling to it.
    pub scroll_margin: f64,
    /// How far below the nav bar a section counts as current.
    pub spy_lookahead: f64,
    pub spy_throttle_ms: u32,
    pub effects_throttle_ms: u32,
    pub navbar_scrolled_threshold: f64,

    pub page_animation_delay_ms: u32,
    pub page_animation_step_ms: u32,
    pub focus_delay_ms: u32,

    pub carousel_interval_ms: u32,
    pub simulated_submit_ms: u32,
    pub notice_dismiss_ms: u32,

    pub menu_breakpoint: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            layout: Layout::Pages,
            submission: SubmissionMode::Simulated,
            nav_bar_height: 80.0,
            scroll_margin: 20.0,
            spy_lookahead: 100.0,
            spy_throttle_ms: 100,
            effects_throttle_ms: 16,
            navbar_scrolled_threshold: 50.0,
            page_animation_delay_ms: 100,
            page_animation_step_ms: 100,
            focus_delay_ms: 500,
            carousel_interval_ms: 5000,
            simulated_submit_ms: 2000,
            notice_dismiss_ms: 5000,
            menu_breakpoint: 768.0,
        }
    }
}

impl SiteConfig {
    /// Defaults overridden by values baked in at build time.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("LAUNCHQUESTS_LAYOUT"),
            option_env!("LAUNCHQUESTS_LEAD_TOKEN"),
            option_env!("LAUNCHQUESTS_LEAD_ENDPOINT"),
        )
    }

    fn from_values(layout: Option<&str>, token: Option<&str>, endpoint: Option<&str>) -> Self {
        let submission = match token.map(str::trim).filter(|t| !t.is_empty()) {
            Some(token) => SubmissionMode::Remote {
                endpoint: endpoint
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{}{}", get_backend_url(), DEFAULT_LEAD_PATH)),
                token_header: LEAD_TOKEN_HEADER.to_string(),
                token: token.to_string(),
            },
            None => SubmissionMode::Simulated,
        };

        Self {
            layout: Layout::from_env(layout),
            submission,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_pages_and_simulated_submission() {
        let config = SiteConfig::from_values(None, None, None);
        assert_eq!(config.layout, Layout::Pages);
        assert_eq!(config.submission, SubmissionMode::Simulated);
        assert_eq!(config.spy_throttle_ms, 100);
        assert_eq!(config.menu_breakpoint, 768.0);
    }

    #[test]
    fn sections_layout_is_case_insensitive() {
        let config = SiteConfig::from_values(Some(" Sections "), None, None);
        assert_eq!(config.layout, Layout::Sections);

        let config = SiteConfig::from_values(Some("carousel"), None, None);
        assert_eq!(config.layout, Layout::Pages);
    }

    #[test]
    fn token_switches_to_remote_submission() {
        let config = SiteConfig::from_values(None, Some("s3cret"), Some("https://leads.example/api"));
        match config.submission {
            SubmissionMode::Remote { endpoint, token_header, token } => {
                assert_eq!(endpoint, "https://leads.example/api");
                assert_eq!(token_header, LEAD_TOKEN_HEADER);
                assert_eq!(token, "s3cret");
            }
            SubmissionMode::Simulated => panic!("expected remote submission"),
        }
    }

    #[test]
    fn blank_token_keeps_simulated_submission() {
        let config = SiteConfig::from_values(None, Some("   "), None);
        assert_eq!(config.submission, SubmissionMode::Simulated);
    }
}
