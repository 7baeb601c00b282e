// Page configuration (single source of truth for timings and clinic details)

use std::time::Duration;

pub const CLINIC_NAME: &str = "Newcastle Veterinary Clinic";
pub const CLINIC_PHONE: &str = "+27 34 062 0910";
pub const CLINIC_EMAIL: &str = "nnvetclinic@gmail.com";
pub const CLINIC_ADDRESS: &str = "46 Gemsbok Avenue, Newcastle, South Africa, 2940";
pub const FOUNDED_YEAR: u32 = 2013;
pub const YEARS_OF_SERVICE: u32 = 12;

/// Relative path of the clinic logo. Not bundled; deployed next to `index.html`.
pub const LOGO_SRC: &str = "log.jpeg";

/// Timing and threshold knobs for every animated piece of the page.
///
/// Provided once at the root through Leptos context. Sections read it with
/// [`page_config`], so a missing provider still yields the defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageConfig {
    /// Period between carousel advances.
    pub carousel_interval: Duration,
    /// Length of the carousel cross-fade.
    pub carousel_fade: Duration,
    /// Scroll offsets strictly above this show the scroll-to-top button.
    pub scroll_threshold: f64,
    /// Vertical offset (px) of the hidden scroll-to-top button.
    pub scroll_button_offset: f64,
    /// Length of a section reveal.
    pub reveal_duration: Duration,
    /// Extra delay per sibling index in a staggered reveal.
    pub reveal_stagger: Duration,
    /// Extra delay per block in the hero, which is on screen at load.
    pub hero_stagger: Duration,
    /// Vertical offset (px) of a section before it is revealed.
    pub reveal_offset: f64,
    /// Length of the mobile menu expand/collapse.
    pub menu_transition: Duration,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            carousel_interval: Duration::from_millis(4000),
            carousel_fade: Duration::from_millis(1000),
            scroll_threshold: 500.0,
            scroll_button_offset: 20.0,
            reveal_duration: Duration::from_millis(800),
            reveal_stagger: Duration::from_millis(200),
            hero_stagger: Duration::from_millis(40),
            reveal_offset: 40.0,
            menu_transition: Duration::from_millis(300),
        }
    }
}

/// Config from context, or the defaults when no provider exists.
pub fn page_config() -> PageConfig {
    leptos::prelude::use_context::<PageConfig>().unwrap_or_default()
}

/// Formats a duration as a CSS time value, e.g. `0.8s`.
pub fn css_seconds(duration: Duration) -> String {
    format!("{}s", duration.as_secs_f64())
}
