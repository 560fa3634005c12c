// navigation decisions
//
// the webapp reads offsets and hrefs out of the dom and asks these functions what the
// page should look like; nothing in here touches the dom itself

pub const ACTIVE_CLASS: &str = "active";
pub const SCROLLED_CLASS: &str = "scrolled";

// mobile menu, mirrored onto both the menu container and the toggle control
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn close(self) -> Self {
        MenuState::Closed
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    // the dom stores the state as a class, so we read it back the same way
    pub fn from_marker(has_active_class: bool) -> Self {
        if has_active_class {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollChrome {
    Normal,
    Scrolled,
}

impl ScrollChrome {
    // strictly greater: sitting exactly on the threshold is still the normal header
    pub fn for_offset(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            ScrollChrome::Scrolled
        } else {
            ScrollChrome::Normal
        }
    }

    pub fn is_scrolled(self) -> bool {
        self == ScrollChrome::Scrolled
    }
}

// "#about" -> Some("about"), "/contact" -> None
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

pub fn anchor_scroll_top(section_top: f64, header_offset: f64) -> f64 {
    section_top - header_offset
}

// a section as seen by the scroll handler: its id and its offset from the top of the page
#[derive(Clone, Debug, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

impl SectionOffset {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        SectionOffset { id: id.into(), top }
    }
}

// the current section is the last one (in document order) whose top, pulled up by the
// lookahead, is at or above the scroll position
//
// sections are not sorted -- document order wins even if the layout puts a
// later section higher on the page.  a section with an empty id has no link pointing at it
// and never becomes current
pub fn active_section(sections: &[SectionOffset], scroll_y: f64, lookahead: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .filter(|s| !s.id.is_empty())
        .find(|s| scroll_y >= s.top - lookahead)
        .map(|s| s.id.as_str())
}

pub fn is_active_link(href: &str, active: Option<&str>) -> bool {
    match (anchor_target(href), active) {
        (Some(target), Some(active)) => !target.is_empty() && target == active,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sections() -> Vec<SectionOffset> {
        vec![
            SectionOffset::new("home", 0.0),
            SectionOffset::new("about", 600.0),
            SectionOffset::new("services", 1400.0),
            SectionOffset::new("contact", 2200.0),
        ]
    }

    #[test]
    fn menu_toggles_and_closes() {
        let state = MenuState::default();
        assert!(!state.is_open());
        assert_eq!(state.toggled(), MenuState::Open);
        assert_eq!(state.toggled().toggled(), MenuState::Closed);
        assert_eq!(MenuState::from_marker(true), MenuState::Open);
        assert_eq!(MenuState::from_marker(false), MenuState::Closed);
    }

    #[test]
    fn close_is_idempotent() {
        assert_eq!(MenuState::Open.close(), MenuState::Closed);
        assert_eq!(MenuState::Closed.close(), MenuState::Closed);
        assert_eq!(MenuState::Open.close().close(), MenuState::Closed);
        assert_eq!(MenuState::Closed.close().close(), MenuState::Closed);
    }

    #[test]
    fn scroll_chrome_boundary() {
        assert_eq!(ScrollChrome::for_offset(0.0, 50.0), ScrollChrome::Normal);
        assert_eq!(ScrollChrome::for_offset(50.0, 50.0), ScrollChrome::Normal);
        assert_eq!(ScrollChrome::for_offset(51.0, 50.0), ScrollChrome::Scrolled);
        assert_eq!(ScrollChrome::for_offset(50.5, 50.0), ScrollChrome::Scrolled);
    }

    #[test]
    fn anchors() {
        assert_eq!(anchor_target("#about"), Some("about"));
        assert_eq!(anchor_target("#"), Some(""));
        assert_eq!(anchor_target("/contact"), None);
        assert_eq!(anchor_target("https://example.com/#about"), None);
        assert_eq!(anchor_scroll_top(600.0, 80.0), 520.0);
    }

    #[test]
    fn active_section_picks_last_reached() {
        let sections = sections();

        assert_eq!(active_section(&sections, 0.0, 100.0), Some("home"));
        assert_eq!(active_section(&sections, 499.0, 100.0), Some("home"));
        assert_eq!(active_section(&sections, 500.0, 100.0), Some("about"));
        assert_eq!(active_section(&sections, 1350.0, 100.0), Some("services"));
        assert_eq!(active_section(&sections, 10_000.0, 100.0), Some("contact"));
    }

    #[test]
    fn active_section_empty_above_first() {
        let sections = vec![SectionOffset::new("about", 600.0)];

        assert_eq!(active_section(&sections, 0.0, 100.0), None);
        assert_eq!(active_section(&sections, 499.9, 100.0), None);
        assert_eq!(active_section(&[], 300.0, 100.0), None);
    }

    #[test]
    fn active_section_uses_document_order() {
        let sections = vec![
            SectionOffset::new("late", 900.0),
            SectionOffset::new("early", 100.0),
        ];

        assert_eq!(active_section(&sections, 1000.0, 100.0), Some("early"));
    }

    #[test]
    fn unnamed_sections_never_become_current() {
        assert_eq!(active_section(&[SectionOffset::new("", 0.0)], 10.0, 100.0), None);

        let sections = vec![
            SectionOffset::new("home", 0.0),
            SectionOffset::new("", 400.0),
        ];
        assert_eq!(active_section(&sections, 1000.0, 100.0), Some("home"));
    }

    #[test]
    fn bare_hash_link_is_never_active() {
        assert!(!is_active_link("#", Some("")));
        assert!(!is_active_link("#", Some("home")));
    }

    #[test]
    fn link_matching() {
        assert!(is_active_link("#about", Some("about")));
        assert!(!is_active_link("#about", Some("contact")));
        assert!(!is_active_link("/about", Some("about")));
        assert!(!is_active_link("#about", None));
        assert!(!is_active_link("#", None));
    }

    proptest! {
        #[test]
        fn chrome_scrolled_iff_past_threshold(y in 0.0f64..10_000.0) {
            let chrome = ScrollChrome::for_offset(y, 50.0);
            prop_assert_eq!(chrome.is_scrolled(), y > 50.0);
        }

        #[test]
        fn active_section_matches_definition(
            mut tops in prop::collection::vec(0.0f64..5_000.0, 1..8),
            y in 0.0f64..6_000.0
        ) {
            tops.sort_by(|a, b| a.total_cmp(b));
            let sections: Vec<_> = tops
                .iter()
                .enumerate()
                .map(|(i, top)| SectionOffset::new(format!("s{i}"), *top))
                .collect();

            let expected = tops
                .iter()
                .rposition(|top| top - 100.0 <= y)
                .map(|i| format!("s{i}"));

            prop_assert_eq!(
                active_section(&sections, y, 100.0).map(String::from),
                expected
            );

            if y < tops[0] - 100.0 {
                prop_assert!(active_section(&sections, y, 100.0).is_none());
            }
        }
    }
}
