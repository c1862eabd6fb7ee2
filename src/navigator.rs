//! Section navigation: scroll a registered anchor into view.

use std::collections::HashMap;

use tracing::debug;

use crate::models::Section;

/// How a scroll should move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollMotion {
    /// Animated, smoothed scrolling
    #[default]
    Smooth,
    /// Jump straight to the target
    Instant,
}

/// Something that can be scrolled into view, typically a section element.
pub trait ScrollAnchor {
    /// Scrolls the anchor into the viewport.
    fn scroll_into_view(&self, motion: ScrollMotion);
}

/// Maps sections to their live anchors.
#[derive(Debug)]
pub struct ScrollNavigator<A> {
    anchors: HashMap<Section, A>,
    motion: ScrollMotion,
}

impl<A: ScrollAnchor> ScrollNavigator<A> {
    /// Creates a navigator with no anchors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            anchors: HashMap::new(),
            motion: ScrollMotion::Smooth,
        }
    }

    /// Sets the motion used by every navigation, e.g. [`ScrollMotion::Instant`]
    /// when the visitor prefers reduced motion.
    #[must_use]
    pub fn with_motion(mut self, motion: ScrollMotion) -> Self {
        self.motion = motion;
        self
    }

    /// Motion used by navigations.
    #[must_use]
    pub fn motion(&self) -> ScrollMotion {
        self.motion
    }

    /// Registers (or replaces) the anchor for a section.
    pub fn register(&mut self, section: Section, anchor: A) -> Option<A> {
        self.anchors.insert(section, anchor)
    }

    /// Removes the anchor for a section.
    pub fn unregister(&mut self, section: Section) -> Option<A> {
        self.anchors.remove(&section)
    }

    /// Whether a live anchor exists for the section.
    #[must_use]
    pub fn has_anchor(&self, section: Section) -> bool {
        self.anchors.contains_key(&section)
    }

    /// Scrolls to the section. Does nothing when no anchor is registered.
    pub fn navigate(&self, section: Section) {
        match self.anchors.get(&section) {
            Some(anchor) => anchor.scroll_into_view(self.motion),
            None => debug!(%section, "no anchor registered, ignoring navigation"),
        }
    }

    /// Navigates by anchor id. Unknown ids are ignored.
    pub fn navigate_to_id(&self, id: &str) {
        if let Some(section) = Section::from_id(id) {
            self.navigate(section);
        }
    }
}

impl<A: ScrollAnchor> Default for ScrollNavigator<A> {
    fn default() -> Self {
        Self::new()
    }
}
