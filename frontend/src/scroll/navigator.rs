use std::fmt;
use std::str::FromStr;

use log::debug;
use thiserror::Error;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config::HEADER_CLEARANCE_PX;

/// The addressable regions of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Portfolio,
    Timeline,
    Blueprint,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Portfolio,
        Section::Timeline,
        Section::Blueprint,
        Section::Contact,
    ];

    /// The `id` attribute rendered on the section element.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Portfolio => "portfolio",
            Section::Timeline => "timeline",
            Section::Blueprint => "blueprint",
            Section::Contact => "contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

/// Somewhere the viewport can be sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Top,
    Section(Section),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown section anchor `{0}`")]
pub struct UnknownSection(pub String);

impl FromStr for NavTarget {
    type Err = UnknownSection;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        if id == "top" {
            return Ok(NavTarget::Top);
        }
        Section::ALL
            .into_iter()
            .find(|section| section.anchor() == id)
            .map(NavTarget::Section)
            .ok_or_else(|| UnknownSection(id.to_string()))
    }
}

/// Layout queries and scroll requests the navigator needs from the host.
pub trait Viewport {
    /// Document offset of the section's top edge, if it is currently rendered.
    fn section_offset(&self, section: Section) -> Option<f64>;

    /// Asks the host to animate the viewport to `top`. Must not block.
    fn smooth_scroll_to(&self, top: f64);
}

pub struct SectionNavigator<V> {
    viewport: V,
}

impl<V: Viewport> SectionNavigator<V> {
    pub fn new(viewport: V) -> Self {
        Self { viewport }
    }

    /// Scrolls to `target` and returns the requested offset, or `None` when
    /// the section is not rendered and nothing was requested.
    pub fn navigate_to(&self, target: NavTarget) -> Option<f64> {
        let top = match target {
            NavTarget::Top => 0.0,
            NavTarget::Section(section) => match self.viewport.section_offset(section) {
                Some(offset) => offset - HEADER_CLEARANCE_PX,
                None => {
                    debug!("section `{}` is not mounted, ignoring navigation", section);
                    return None;
                }
            },
        };
        debug!("smooth scrolling to {}", top);
        self.viewport.smooth_scroll_to(top);
        Some(top)
    }

    /// String form of [`navigate_to`](Self::navigate_to). Unknown ids are a no-op.
    pub fn navigate_to_id(&self, id: &str) -> Option<f64> {
        match id.parse::<NavTarget>() {
            Ok(target) => self.navigate_to(target),
            Err(err) => {
                debug!("{}, ignoring navigation", err);
                None
            }
        }
    }
}

/// Typed handles to the rendered section elements.
#[derive(Clone, Default, PartialEq)]
pub struct SectionAnchors {
    portfolio: NodeRef,
    timeline: NodeRef,
    blueprint: NodeRef,
    contact: NodeRef,
}

impl SectionAnchors {
    pub fn node_ref(&self, section: Section) -> NodeRef {
        match section {
            Section::Portfolio => self.portfolio.clone(),
            Section::Timeline => self.timeline.clone(),
            Section::Blueprint => self.blueprint.clone(),
            Section::Contact => self.contact.clone(),
        }
    }
}

/// The real browser window, resolving sections through their node refs.
pub struct BrowserViewport {
    anchors: SectionAnchors,
}

impl BrowserViewport {
    pub fn new(anchors: SectionAnchors) -> Self {
        Self { anchors }
    }
}

impl Viewport for BrowserViewport {
    fn section_offset(&self, section: Section) -> Option<f64> {
        self.anchors
            .node_ref(section)
            .cast::<HtmlElement>()
            .map(|element| element.offset_top() as f64)
    }

    fn smooth_scroll_to(&self, top: f64) {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    #[derive(Default)]
    struct RecordingViewport {
        offsets: HashMap<Section, f64>,
        lookups: Cell<usize>,
        requests: RefCell<Vec<f64>>,
    }

    impl RecordingViewport {
        fn with(offsets: &[(Section, f64)]) -> Self {
            Self {
                offsets: offsets.iter().copied().collect(),
                ..Default::default()
            }
        }
    }

    impl Viewport for &RecordingViewport {
        fn section_offset(&self, section: Section) -> Option<f64> {
            self.lookups.set(self.lookups.get() + 1);
            self.offsets.get(&section).copied()
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.requests.borrow_mut().push(top);
        }
    }

    #[test]
    fn contact_lands_below_header() {
        let viewport = RecordingViewport::with(&[(Section::Contact, 3200.0)]);
        let navigator = SectionNavigator::new(&viewport);

        assert_eq!(navigator.navigate_to_id("contact"), Some(3120.0));
        assert_eq!(*viewport.requests.borrow(), vec![3120.0]);
    }

    #[test]
    fn repeated_navigation_requests_same_target() {
        let viewport = RecordingViewport::with(&[(Section::Timeline, 1400.0)]);
        let navigator = SectionNavigator::new(&viewport);

        let first = navigator.navigate_to(NavTarget::Section(Section::Timeline));
        let second = navigator.navigate_to(NavTarget::Section(Section::Timeline));

        assert_eq!(first, Some(1320.0));
        assert_eq!(first, second);
        assert_eq!(*viewport.requests.borrow(), vec![1320.0, 1320.0]);
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let viewport = RecordingViewport::with(&[(Section::Contact, 3200.0)]);
        let navigator = SectionNavigator::new(&viewport);

        assert_eq!(navigator.navigate_to_id("nonexistent-id"), None);
        assert_eq!(viewport.lookups.get(), 0);
        assert!(viewport.requests.borrow().is_empty());
    }

    #[test]
    fn unmounted_section_is_a_no_op() {
        let viewport = RecordingViewport::with(&[(Section::Contact, 3200.0)]);
        let navigator = SectionNavigator::new(&viewport);

        assert_eq!(navigator.navigate_to(NavTarget::Section(Section::Blueprint)), None);
        assert_eq!(viewport.lookups.get(), 1);
        assert!(viewport.requests.borrow().is_empty());
    }

    #[test]
    fn top_skips_lookup() {
        let viewport = RecordingViewport::default();
        let navigator = SectionNavigator::new(&viewport);

        assert_eq!(navigator.navigate_to_id("top"), Some(0.0));
        assert_eq!(viewport.lookups.get(), 0);
        assert_eq!(*viewport.requests.borrow(), vec![0.0]);
    }

    #[test]
    fn section_near_top_is_not_clamped() {
        let viewport = RecordingViewport::with(&[(Section::Portfolio, 40.0)]);
        let navigator = SectionNavigator::new(&viewport);

        assert_eq!(navigator.navigate_to_id("portfolio"), Some(-40.0));
    }

    #[test]
    fn parses_every_anchor() {
        for section in Section::ALL {
            assert_eq!(section.anchor().parse::<NavTarget>(), Ok(NavTarget::Section(section)));
        }
        assert_eq!("top".parse::<NavTarget>(), Ok(NavTarget::Top));
        assert_eq!(
            "Contact".parse::<NavTarget>(),
            Err(UnknownSection("Contact".to_string()))
        );
    }

    #[test]
    fn unresolved_node_refs_are_absent() {
        let viewport = BrowserViewport::new(SectionAnchors::default());
        for section in Section::ALL {
            assert_eq!(viewport.section_offset(section), None);
        }
    }
}
