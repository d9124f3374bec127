//! Scroll and in-page navigation state.
//!
//! [`NavController`] owns the two independent flags that drive the navbar
//! chrome and the mobile drawer, plus the derived scroll-to-top visibility.
//! All DOM access goes through the [`Viewport`] trait so the controller can
//! be exercised without a browser.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::config::ScrollConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// No element with this id exists in the document.
    #[error("no section with id '{0}' on the page")]
    SectionNotFound(String),
    #[error("'{0}' is not a known section anchor")]
    UnknownSection(String),
}

/// Named anchors on the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Services,
    Testimonials,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Services,
        SectionId::Testimonials,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Services => "services",
            SectionId::Testimonials => "testimonials",
            SectionId::Contact => "contact",
        }
    }

    /// `#id` form, for plain `href`s.
    pub fn href(self) -> String {
        format!("#{}", self.as_str())
    }

    /// Section named by a URL fragment such as `#services`. An empty
    /// fragment (or a bare `#`) names no section.
    pub fn from_hash(hash: &str) -> Result<Option<Self>, NavError> {
        let id = hash.strip_prefix('#').unwrap_or(hash);
        if id.is_empty() {
            return Ok(None);
        }
        id.parse().map(Some)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| NavError::UnknownSection(s.to_string()))
    }
}

/// A navigation entry: visible label and the anchor it scrolls to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: SectionId,
}

/// The page surface the controller scrolls.
pub trait Viewport {
    /// Smooth-scroll the element with `id` into view. Returns `false` when no
    /// such element exists.
    fn scroll_into_view(&self, id: &str) -> bool;

    /// Smooth-scroll back to offset zero.
    fn scroll_to_top(&self);
}

/// Navbar-relevant state. Two independent booleans, four reachable states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub is_scrolled_past_threshold: bool,
    pub is_mobile_menu_open: bool,
}

/// UI flags derived from a scroll offset alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollFlags {
    pub navbar_solid: bool,
    pub show_scroll_top: bool,
}

/// Pure mapping from scroll offset to UI flags. Both thresholds are
/// exclusive: the flag flips only once `y` is strictly greater.
pub fn flags_for_offset(y: f64, thresholds: &ScrollConfig) -> ScrollFlags {
    ScrollFlags {
        navbar_solid: y > thresholds.navbar_threshold,
        show_scroll_top: y > thresholds.scroll_top_threshold,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavController {
    thresholds: ScrollConfig,
    state: ScrollState,
    show_scroll_top: bool,
}

impl Default for NavController {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl NavController {
    pub fn new(thresholds: ScrollConfig) -> Self {
        Self {
            thresholds,
            state: ScrollState::default(),
            show_scroll_top: false,
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn is_scrolled_past_threshold(&self) -> bool {
        self.state.is_scrolled_past_threshold
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.state.is_mobile_menu_open
    }

    pub fn show_scroll_top(&self) -> bool {
        self.show_scroll_top
    }

    /// Apply a scroll event at offset `y`. Returns whether any flag changed,
    /// so callers can skip a re-render for the common no-change case.
    pub fn on_scroll(&mut self, y: f64) -> bool {
        let flags = flags_for_offset(y, &self.thresholds);
        let changed = flags.navbar_solid != self.state.is_scrolled_past_threshold
            || flags.show_scroll_top != self.show_scroll_top;
        self.state.is_scrolled_past_threshold = flags.navbar_solid;
        self.show_scroll_top = flags.show_scroll_top;
        changed
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.state.is_mobile_menu_open = !self.state.is_mobile_menu_open;
        tracing::debug!(open = self.state.is_mobile_menu_open, "mobile menu toggled");
    }

    pub fn close_mobile_menu(&mut self) {
        self.state.is_mobile_menu_open = false;
    }

    /// Scroll to the anchor `id` and close the drawer.
    ///
    /// When the anchor is missing nothing changes and
    /// [`NavError::SectionNotFound`] is returned.
    pub fn scroll_to_section(&mut self, viewport: &impl Viewport, id: &str) -> Result<(), NavError> {
        if !viewport.scroll_into_view(id) {
            return Err(NavError::SectionNotFound(id.to_string()));
        }
        self.close_mobile_menu();
        tracing::debug!(section = id, "scrolled to section");
        Ok(())
    }

    pub fn scroll_to_top(&self, viewport: &impl Viewport) {
        viewport.scroll_to_top();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::HashSet;

    use super::Viewport;

    /// In-memory page: a set of anchor ids and a log of scroll requests.
    #[derive(Debug, Default)]
    pub struct FakeViewport {
        pub anchors: HashSet<String>,
        pub scrolled_to: RefCell<Vec<String>>,
        pub top_requests: RefCell<usize>,
    }

    impl FakeViewport {
        pub fn with_anchors(ids: &[&str]) -> Self {
            Self {
                anchors: ids.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            }
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_into_view(&self, id: &str) -> bool {
            if self.anchors.contains(id) {
                self.scrolled_to.borrow_mut().push(id.to_string());
                true
            } else {
                false
            }
        }

        fn scroll_to_top(&self) {
            *self.top_requests.borrow_mut() += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeViewport;
    use super::*;
    use pretty_assertions::assert_eq;

    fn page() -> FakeViewport {
        FakeViewport::with_anchors(&["home", "about", "services", "testimonials", "contact"])
    }

    #[test]
    fn navbar_threshold_is_exclusive_at_50() {
        let cfg = ScrollConfig::default();
        for y in [0.0, 10.0, 49.9, 50.0] {
            assert!(!flags_for_offset(y, &cfg).navbar_solid, "y = {y}");
        }
        for y in [50.1, 51.0, 500.0] {
            assert!(flags_for_offset(y, &cfg).navbar_solid, "y = {y}");
        }
    }

    #[test]
    fn scroll_top_threshold_is_exclusive_at_100() {
        let cfg = ScrollConfig::default();
        assert!(!flags_for_offset(100.0, &cfg).show_scroll_top);
        assert!(flags_for_offset(100.5, &cfg).show_scroll_top);
        assert_eq!(
            flags_for_offset(75.0, &cfg),
            ScrollFlags {
                navbar_solid: true,
                show_scroll_top: false,
            }
        );
    }

    #[test]
    fn on_scroll_reports_only_real_changes() {
        let mut nav = NavController::default();
        assert!(!nav.on_scroll(10.0));
        assert!(nav.on_scroll(60.0));
        assert!(!nav.on_scroll(70.0));
        assert!(nav.on_scroll(120.0));
        assert!(nav.show_scroll_top());
        assert!(nav.on_scroll(0.0));
        assert_eq!(nav.state(), ScrollState::default());
        assert!(!nav.show_scroll_top());
    }

    #[test]
    fn scrolling_leaves_menu_alone() {
        let mut nav = NavController::default();
        nav.toggle_mobile_menu();
        nav.on_scroll(300.0);
        assert_eq!(
            nav.state(),
            ScrollState {
                is_scrolled_past_threshold: true,
                is_mobile_menu_open: true,
            }
        );
    }

    #[test]
    fn toggle_flips_each_call() {
        let mut nav = NavController::default();
        nav.toggle_mobile_menu();
        assert!(nav.is_mobile_menu_open());
        nav.toggle_mobile_menu();
        assert!(!nav.is_mobile_menu_open());
    }

    #[test]
    fn scroll_to_existing_section_closes_menu() {
        let viewport = page();
        let mut nav = NavController::default();
        nav.toggle_mobile_menu();

        nav.scroll_to_section(&viewport, "contact").unwrap();

        assert!(!nav.is_mobile_menu_open());
        assert_eq!(*viewport.scrolled_to.borrow(), vec!["contact".to_string()]);
    }

    #[test]
    fn scroll_to_missing_section_changes_nothing() {
        let viewport = page();
        let mut nav = NavController::default();
        nav.on_scroll(80.0);
        nav.toggle_mobile_menu();
        let before = nav.clone();

        let err = nav.scroll_to_section(&viewport, "nonexistent").unwrap_err();

        assert_eq!(err, NavError::SectionNotFound("nonexistent".into()));
        assert_eq!(nav, before);
        assert!(viewport.scrolled_to.borrow().is_empty());
    }

    #[test]
    fn scroll_to_top_delegates_to_viewport() {
        let viewport = page();
        let nav = NavController::default();
        nav.scroll_to_top(&viewport);
        assert_eq!(*viewport.top_requests.borrow(), 1);
    }

    #[test]
    fn custom_thresholds_are_honoured() {
        let mut nav = NavController::new(ScrollConfig {
            navbar_threshold: 200.0,
            scroll_top_threshold: 10.0,
        });
        nav.on_scroll(150.0);
        assert!(!nav.is_scrolled_past_threshold());
        assert!(nav.show_scroll_top());
    }

    #[test]
    fn section_ids_round_trip_through_strings() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>().unwrap(), id);
        }
        assert_eq!(SectionId::Contact.href(), "#contact");
        assert!(matches!(
            "pricing".parse::<SectionId>(),
            Err(NavError::UnknownSection(_))
        ));
    }

    #[test]
    fn location_hash_resolves_to_section() {
        assert_eq!(SectionId::from_hash("#services"), Ok(Some(SectionId::Services)));
        assert_eq!(SectionId::from_hash("about"), Ok(Some(SectionId::About)));
        assert_eq!(SectionId::from_hash(""), Ok(None));
        assert_eq!(SectionId::from_hash("#"), Ok(None));
        assert_eq!(
            SectionId::from_hash("#pricing"),
            Err(NavError::UnknownSection("pricing".into()))
        );
    }
}
