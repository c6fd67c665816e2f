use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Height of the fixed header, subtracted so a section title isn't hidden behind it.
pub const HEADER_OFFSET: f64 = 70.0;

/// Scroll distance after which the header switches to its compact, opaque style.
pub const SCROLLED_THRESHOLD: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Anchor {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 5] = [
        Anchor::Home,
        Anchor::About,
        Anchor::Skills,
        Anchor::Projects,
        Anchor::Contact,
    ];

    /// Element id of the section.
    pub fn id(self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::About => "about",
            Anchor::Skills => "skills",
            Anchor::Projects => "projects",
            Anchor::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Anchor::Home => "Home",
            Anchor::About => "About",
            Anchor::Skills => "Skills",
            Anchor::Projects => "Projects",
            Anchor::Contact => "Contact",
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no such anchor: {0}")]
pub struct AnchorParseError(String);

impl FromStr for Anchor {
    type Err = AnchorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Anchor::ALL
            .into_iter()
            .find(|a| a.id() == s)
            .ok_or_else(|| AnchorParseError(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: Anchor,
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        label: "About",
        anchor: Anchor::About,
    },
    NavLink {
        label: "Work",
        anchor: Anchor::Projects,
    },
    NavLink {
        label: "Contact",
        anchor: Anchor::Contact,
    },
];

/// The page surface the navigator scrolls.
pub trait Viewport {
    /// Top of the element with `id` relative to the visible viewport, if it exists.
    fn element_top(&self, id: &str) -> Option<f64>;
    /// Current vertical scroll position of the page.
    fn page_offset(&self) -> f64;
    fn smooth_scroll_to(&self, top: f64);
}

pub fn scroll_target(element_top: f64, page_offset: f64, header_offset: f64) -> f64 {
    (element_top + page_offset - header_offset).max(0.0)
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// Smooth-scroll to the named anchor. Returns whether a scroll was issued.
///
/// Unknown names and anchors not present in the view are ignored.
pub fn scroll_to_anchor<V: Viewport + ?Sized>(viewport: &V, name: &str) -> bool {
    let anchor = match name.parse::<Anchor>() {
        Ok(anchor) => anchor,
        Err(e) => {
            log::debug!("{e}");
            return false;
        }
    };
    let Some(top) = viewport.element_top(anchor.id()) else {
        log::debug!("anchor {anchor} is not mounted");
        return false;
    };
    let target = scroll_target(top, viewport.page_offset(), HEADER_OFFSET);
    viewport.smooth_scroll_to(target);
    true
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct FakeViewport {
        tops: HashMap<&'static str, f64>,
        offset: f64,
        scrolls: RefCell<Vec<f64>>,
    }

    impl Viewport for FakeViewport {
        fn element_top(&self, id: &str) -> Option<f64> {
            self.tops.get(id).copied()
        }

        fn page_offset(&self) -> f64 {
            self.offset
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.scrolls.borrow_mut().push(top);
        }
    }

    #[test]
    fn test_scroll_subtracts_header() {
        let viewport = FakeViewport {
            tops: HashMap::from([("about", 500.0)]),
            offset: 200.0,
            ..Default::default()
        };
        assert!(scroll_to_anchor(&viewport, "about"));
        assert_eq!(*viewport.scrolls.borrow(), vec![630.0]);
    }

    #[test]
    fn test_missing_anchor_is_noop() {
        let viewport = FakeViewport {
            tops: HashMap::from([("about", 500.0)]),
            ..Default::default()
        };
        assert!(!scroll_to_anchor(&viewport, "contact"));
        assert!(!scroll_to_anchor(&viewport, "blog"));
        assert!(!scroll_to_anchor(&viewport, ""));
        assert!(viewport.scrolls.borrow().is_empty());
    }

    #[test]
    fn test_repeated_calls_issue_new_scrolls() {
        let viewport = FakeViewport {
            tops: HashMap::from([("home", 0.0)]),
            offset: 1000.0,
            ..Default::default()
        };
        scroll_to_anchor(&viewport, "home");
        scroll_to_anchor(&viewport, "home");
        assert_eq!(*viewport.scrolls.borrow(), vec![930.0, 930.0]);
    }

    #[test]
    fn test_scroll_target_clamps_at_top() {
        assert_eq!(scroll_target(10.0, 0.0, HEADER_OFFSET), 0.0);
        assert_eq!(scroll_target(-50.0, 400.0, HEADER_OFFSET), 280.0);
    }

    #[test]
    fn test_anchor_ids_round_trip() {
        for anchor in Anchor::ALL {
            assert_eq!(anchor.id().parse::<Anchor>(), Ok(anchor));
        }
        assert!("Home".parse::<Anchor>().is_err());
    }

    #[test]
    fn test_scrolled_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
    }
}
