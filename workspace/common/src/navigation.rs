//! Fixed navigation sections and the page's view state.

/// Icons available to navigation entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionIcon {
    Home,
    TrendingUp,
    Building,
    ChefHat,
    MapPin,
    DollarSign,
    Target,
}

impl SectionIcon {
    /// Font Awesome classes rendering this icon.
    pub fn css_class(self) -> &'static str {
        match self {
            SectionIcon::Home => "fas fa-home",
            SectionIcon::TrendingUp => "fas fa-chart-line",
            SectionIcon::Building => "fas fa-building",
            SectionIcon::ChefHat => "fas fa-utensils",
            SectionIcon::MapPin => "fas fa-map-marker-alt",
            SectionIcon::DollarSign => "fas fa-dollar-sign",
            SectionIcon::Target => "fas fa-bullseye",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationSection {
    /// Also the id of the section's anchor element in the page.
    pub id: &'static str,
    pub title: &'static str,
    pub icon: SectionIcon,
}

pub const NAVIGATION_SECTIONS: [NavigationSection; 7] = [
    NavigationSection { id: "overview", title: "Genel Bakış", icon: SectionIcon::Home },
    NavigationSection { id: "market", title: "Pazar Analizi", icon: SectionIcon::TrendingUp },
    NavigationSection { id: "business", title: "İş Modeli", icon: SectionIcon::Building },
    NavigationSection { id: "menu", title: "Menü & Ürünler", icon: SectionIcon::ChefHat },
    NavigationSection { id: "operations", title: "Operasyon", icon: SectionIcon::MapPin },
    NavigationSection { id: "financial", title: "Finansal", icon: SectionIcon::DollarSign },
    NavigationSection { id: "investment", title: "Yatırım", icon: SectionIcon::Target },
];

pub fn find_section(id: &str) -> Option<&'static NavigationSection> {
    NAVIGATION_SECTIONS.iter().find(|section| section.id == id)
}

/// Scrolls the document to a section anchor.
pub trait SectionScroller {
    /// Returns `false` when no element carries `id`.
    fn scroll_to(&self, id: &str) -> bool;
}

/// Which section is highlighted and whether the mobile menu is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub active_section_id: String,
    pub mobile_menu_open: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_section_id: NAVIGATION_SECTIONS[0].id.to_string(),
            mobile_menu_open: false,
        }
    }
}

impl ViewState {
    /// Scroll to `id` if the anchor exists, then make it active and close the
    /// mobile menu. The state changes even when the anchor is missing.
    pub fn select_section(&mut self, id: &str, scroller: &dyn SectionScroller) {
        if !scroller.scroll_to(id) {
            tracing::debug!("No element with id '{}' to scroll to", id);
        }
        self.active_section_id = id.to_string();
        self.mobile_menu_open = false;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_section_id == id
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashSet;

    use super::*;

    struct FakeDocument {
        anchors: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl FakeDocument {
        fn with_all_sections() -> Self {
            Self {
                anchors: NAVIGATION_SECTIONS.iter().map(|s| s.id).collect(),
                scrolled: RefCell::new(Vec::new()),
            }
        }
    }

    impl SectionScroller for FakeDocument {
        fn scroll_to(&self, id: &str) -> bool {
            if self.anchors.contains(&id) {
                self.scrolled.borrow_mut().push(id.to_string());
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn test_section_ids_are_unique() {
        let ids: HashSet<_> = NAVIGATION_SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), NAVIGATION_SECTIONS.len());
    }

    #[test]
    fn test_default_state() {
        let state = ViewState::default();
        assert!(state.is_active("overview"));
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn test_select_every_section_is_idempotent() {
        let document = FakeDocument::with_all_sections();
        for section in NAVIGATION_SECTIONS {
            let mut once = ViewState::default();
            once.select_section(section.id, &document);
            let mut twice = once.clone();
            twice.select_section(section.id, &document);

            assert_eq!(once.active_section_id, section.id);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_select_closes_mobile_menu_and_scrolls() {
        let document = FakeDocument::with_all_sections();
        let mut state = ViewState::default();
        state.toggle_mobile_menu();
        assert!(state.mobile_menu_open);

        state.select_section("financial", &document);

        assert!(!state.mobile_menu_open);
        assert_eq!(*document.scrolled.borrow(), vec!["financial".to_string()]);
    }

    #[test]
    fn test_select_missing_anchor_still_updates_state() {
        let document = FakeDocument { anchors: vec![], scrolled: RefCell::new(Vec::new()) };
        let mut state = ViewState { active_section_id: "overview".to_string(), mobile_menu_open: true };

        state.select_section("investment", &document);

        assert!(state.is_active("investment"));
        assert!(!state.mobile_menu_open);
        assert!(document.scrolled.borrow().is_empty());
    }

    #[test]
    fn test_exactly_one_entry_is_active() {
        let state = ViewState { active_section_id: "menu".to_string(), mobile_menu_open: false };
        let active = NAVIGATION_SECTIONS.iter().filter(|s| state.is_active(s.id)).count();
        assert_eq!(active, 1);
    }

    #[test]
    fn test_find_section() {
        assert_eq!(find_section("operations").map(|s| s.icon), Some(SectionIcon::MapPin));
        assert!(find_section("pricing").is_none());
    }
}
