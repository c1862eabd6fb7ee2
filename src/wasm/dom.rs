//! DOM lookups and the class changes the stylesheet reacts to.

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, ScrollBehavior,
    ScrollIntoViewOptions, Window,
};

use crate::models::Section;
use crate::navigator::{ScrollAnchor, ScrollMotion};
use crate::scene::Viewport;
use crate::viewport::{PointerPosition, TrackerEvent};

/// Added to `<html>` while the runtime is mounted.
pub const READY_CLASS: &str = "js-ready";
/// Added to a section once it has been seen.
pub const REVEALED_CLASS: &str = "is-revealed";
/// Marks the navigation entry of the active section.
pub const ACTIVE_CLASS: &str = "is-active";

/// Scrolls a section element into view.
pub struct ElementAnchor(Element);

impl ElementAnchor {
    /// Wraps a section element.
    pub fn new(element: Element) -> Self {
        Self(element)
    }
}

impl ScrollAnchor for ElementAnchor {
    fn scroll_into_view(&self, motion: ScrollMotion) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(match motion {
            ScrollMotion::Smooth => ScrollBehavior::Smooth,
            ScrollMotion::Instant => ScrollBehavior::Instant,
        });
        self.0
            .scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Instant scrolling when the visitor asks for reduced motion, smooth otherwise.
pub fn preferred_motion(window: &Window) -> ScrollMotion {
    let reduced = window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches());
    if reduced {
        ScrollMotion::Instant
    } else {
        ScrollMotion::Smooth
    }
}

/// Sections whose anchor exists in the document, with the anchor element.
pub fn section_anchors(document: &Document) -> Vec<(Section, Element)> {
    Section::ALL
        .into_iter()
        .filter_map(|section| {
            document
                .get_element_by_id(section.id())
                .map(|element| (section, element))
        })
        .collect()
}

/// Inner size of the browser window in CSS pixels.
pub fn window_viewport(window: &Window) -> Viewport {
    let side = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value
            .ok()
            .and_then(|v| v.as_f64())
            .map_or(0, |v| v.max(0.0) as u32)
    };
    Viewport::new(side(window.inner_width()), side(window.inner_height()))
}

/// Current value of a text input or text area.
pub fn control_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    element
        .dyn_ref::<HtmlTextAreaElement>()
        .map(HtmlTextAreaElement::value)
}

/// Mirrors a tracker event into the document.
pub fn apply_event(document: &Document, event: &TrackerEvent) {
    match *event {
        TrackerEvent::Revealed(section) => {
            if let Some(element) = document.get_element_by_id(section.id()) {
                let _ = element.class_list().add_1(REVEALED_CLASS);
            }
        }
        TrackerEvent::ActiveChanged { previous, current } => {
            for_each_nav_link(document, previous, |link| {
                let _ = link.class_list().remove_1(ACTIVE_CLASS);
            });
            for_each_nav_link(document, current, |link| {
                let _ = link.class_list().add_1(ACTIVE_CLASS);
            });
        }
        TrackerEvent::PointerMoved(position) => move_highlight(document, position),
    }
}

fn for_each_nav_link(document: &Document, section: Section, mut f: impl FnMut(&Element)) {
    let selector = format!(".nav-link[data-section=\"{}\"]", section.id());
    let Ok(links) = document.query_selector_all(&selector) else {
        return;
    };
    for index in 0..links.length() {
        if let Some(link) = links.item(index).and_then(|node| node.dyn_into::<Element>().ok()) {
            f(&link);
        }
    }
}

fn move_highlight(document: &Document, position: PointerPosition) {
    let Some(highlight) = document
        .get_element_by_id("pointer-highlight")
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let (left, top) = position.highlight_origin();
    let style = highlight.style();
    let _ = style.set_property("left", &format!("{left}px"));
    let _ = style.set_property("top", &format!("{top}px"));
}
