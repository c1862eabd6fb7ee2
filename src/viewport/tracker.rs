//! Section visibility tracking.
//!
//! The tracker consumes intersection observations (one per section anchor
//! whose visibility changed) and pointer moves, keeps the derived state and
//! publishes [`TrackerEvent`]s to subscribers.
//!
//! # Tie-break
//!
//! When several sections cross the threshold in the same batch, entries are
//! applied in observation order and the last qualifying one becomes active.
//! Observation order is whatever the platform delivers, not document order.

use std::collections::BTreeSet;
use std::fmt;

use tracing::debug;

use super::pointer::PointerPosition;
use crate::models::Section;

/// Fraction of a section that must be visible before it counts as seen.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.3;

/// Step between the intersection ratios the observer reports at.
const OBSERVATION_STEP: f64 = 0.1;

/// One intersection observation for a section anchor.
///
/// A section taller than `1 / threshold` viewports never reaches the
/// threshold ratio, so the fraction of the viewport it fills also counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Section the observed anchor belongs to
    pub section: Section,
    /// Visible fraction of the anchor, 0.0 to 1.0
    pub ratio: f64,
    /// Fraction of the viewport covered by the visible part, 0.0 to 1.0
    pub root_coverage: f64,
}

impl Intersection {
    /// Creates an observation with no viewport coverage recorded.
    #[must_use]
    pub const fn new(section: Section, ratio: f64) -> Self {
        Self {
            section,
            ratio,
            root_coverage: 0.0,
        }
    }

    /// Records how much of the viewport the visible part covers.
    #[must_use]
    pub const fn with_root_coverage(mut self, root_coverage: f64) -> Self {
        self.root_coverage = root_coverage;
        self
    }

    /// The larger of the visible ratio and the viewport coverage.
    ///
    /// NaN in either measure yields NaN, which never crosses a threshold.
    #[must_use]
    pub fn visibility(&self) -> f64 {
        if self.ratio.is_nan() || self.root_coverage.is_nan() {
            f64::NAN
        } else {
            self.ratio.max(self.root_coverage)
        }
    }
}

/// State changes published by the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackerEvent {
    /// A section crossed the threshold for the first time.
    Revealed(Section),
    /// The highlighted navigation entry changed.
    ActiveChanged {
        /// Previously active section
        previous: Section,
        /// Newly active section
        current: Section,
    },
    /// The pointer moved.
    PointerMoved(PointerPosition),
}

/// Handle returned by [`ViewportTracker::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&TrackerEvent)>;

/// Tracks revealed sections, the active section and the pointer.
pub struct ViewportTracker {
    threshold: f64,
    anchors: BTreeSet<Section>,
    revealed: BTreeSet<Section>,
    active: Section,
    pointer: PointerPosition,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl ViewportTracker {
    /// Creates a tracker with the given reveal threshold.
    ///
    /// The threshold is clamped to `[0, 1]`; a NaN threshold falls back to
    /// [`DEFAULT_REVEAL_THRESHOLD`].
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_REVEAL_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };

        Self {
            threshold,
            anchors: BTreeSet::new(),
            revealed: BTreeSet::new(),
            active: Section::Hero,
            pointer: PointerPosition::default(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Reveal threshold in effect.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Ratios at which the platform observer should report.
    ///
    /// Steps of 0.1 plus the threshold itself, so tall sections keep
    /// reporting while their viewport coverage grows.
    #[must_use]
    pub fn observation_thresholds(&self) -> Vec<f64> {
        let mut steps: Vec<f64> = (0..=10_u8)
            .map(|step| f64::from(step) * OBSERVATION_STEP)
            .collect();
        if !steps
            .iter()
            .any(|step| (step - self.threshold).abs() < f64::EPSILON)
        {
            steps.push(self.threshold);
            steps.sort_by(f64::total_cmp);
        }
        steps
    }

    /// Starts observing a section whose anchor exists on the page.
    pub fn track(&mut self, section: Section) {
        self.anchors.insert(section);
    }

    /// Starts observing every section in `sections`.
    pub fn track_all(&mut self, sections: impl IntoIterator<Item = Section>) {
        self.anchors.extend(sections);
    }

    /// Whether the section has an observed anchor.
    #[must_use]
    pub fn is_tracked(&self, section: Section) -> bool {
        self.anchors.contains(&section)
    }

    /// Sections currently observed, in navigation order.
    pub fn tracked(&self) -> impl Iterator<Item = Section> + '_ {
        self.anchors.iter().copied()
    }

    /// Whether the section has ever crossed the threshold.
    #[must_use]
    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed.contains(&section)
    }

    /// Revealed sections in navigation order.
    pub fn revealed(&self) -> impl Iterator<Item = Section> + '_ {
        self.revealed.iter().copied()
    }

    /// Section highlighted in the navigation bar.
    #[must_use]
    pub fn active(&self) -> Section {
        self.active
    }

    /// Last known pointer position.
    #[must_use]
    pub fn pointer(&self) -> PointerPosition {
        self.pointer
    }

    /// Registers a listener for tracker events.
    pub fn subscribe(&mut self, listener: impl FnMut(&TrackerEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Applies a batch of intersection observations.
    ///
    /// An entry crosses when its [`Intersection::visibility`] reaches the
    /// threshold. Other entries and entries for untracked sections are
    /// ignored.
    pub fn observe(&mut self, entries: impl IntoIterator<Item = Intersection>) {
        for entry in entries {
            if !self.anchors.contains(&entry.section)
                || !(entry.visibility() >= self.threshold)
            {
                continue;
            }

            if self.revealed.insert(entry.section) {
                debug!(section = %entry.section, ratio = entry.ratio, "section revealed");
                self.publish(&TrackerEvent::Revealed(entry.section));
            }

            if self.active != entry.section {
                let previous = self.active;
                self.active = entry.section;
                self.publish(&TrackerEvent::ActiveChanged {
                    previous,
                    current: entry.section,
                });
            }
        }
    }

    /// Reveals every tracked section without changing the active one.
    ///
    /// Used when visibility cannot be observed at all.
    pub fn reveal_all(&mut self) {
        let pending: Vec<Section> = self.anchors.difference(&self.revealed).copied().collect();
        for section in pending {
            self.revealed.insert(section);
            self.publish(&TrackerEvent::Revealed(section));
        }
        debug!(sections = self.revealed.len(), "all sections revealed");
    }

    /// Records a pointer move.
    pub fn move_pointer(&mut self, position: PointerPosition) {
        self.pointer = position;
        self.publish(&TrackerEvent::PointerMoved(position));
    }

    fn publish(&mut self, event: &TrackerEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }
}

impl Default for ViewportTracker {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_THRESHOLD)
    }
}

impl fmt::Debug for ViewportTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportTracker")
            .field("threshold", &self.threshold)
            .field("anchors", &self.anchors)
            .field("revealed", &self.revealed)
            .field("active", &self.active)
            .field("pointer", &self.pointer)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
