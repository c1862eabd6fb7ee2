//! Browser runtime: binds the page components to the rendered document.
//!
//! `start` runs when the module loads and `unmount` tears everything down.
//! The mounted [`Runtime`] lives in a thread-local slot so that `unmount` can
//! reach it; everything else is owned by the runtime itself.

// wasm-bindgen exports expand to unsafe glue.
#![allow(unsafe_code)]

mod canvas;
mod dom;

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, Window,
};

use crate::contact::{ContactField, ContactForm};
use crate::models::Section;
use crate::navigator::ScrollNavigator;
use crate::scene::{AmbientRenderer, AmbientScene, AnimationLoop};
use crate::viewport::{
    Intersection, PointerPosition, SubscriptionId, ViewportTracker, DEFAULT_REVEAL_THRESHOLD,
};

use canvas::{CanvasBackend, RafScheduler};
use dom::{ElementAnchor, READY_CLASS};

type Ambient = AnimationLoop<RafScheduler, CanvasBackend>;
type ObserverCallback = Closure<dyn FnMut(Array)>;

thread_local! {
    static RUNTIME: RefCell<Option<Runtime>> = const { RefCell::new(None) };
}

fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

/// Mounts the runtime. Runs automatically when the module is initialised.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    if RUNTIME.with(|slot| slot.borrow().is_some()) {
        return Ok(());
    }
    let runtime = Runtime::mount()?;
    RUNTIME.with(|slot| *slot.borrow_mut() = Some(runtime));
    Ok(())
}

/// Disconnects observers, removes listeners and stops the ambient scene.
#[wasm_bindgen]
pub fn unmount() {
    let runtime = RUNTIME.with(|slot| slot.borrow_mut().take());
    drop(runtime);
}

struct Runtime {
    document: Document,
    tracker: Rc<RefCell<ViewportTracker>>,
    subscription: SubscriptionId,
    observer: Option<(IntersectionObserver, ObserverCallback)>,
    listeners: Vec<EventListener>,
    ambient: Option<Rc<Ambient>>,
}

impl Runtime {
    fn mount() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?;

        let threshold = body
            .get_attribute("data-reveal-threshold")
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_REVEAL_THRESHOLD);
        let recipient = body.get_attribute("data-mail-recipient").unwrap_or_default();

        let anchors = dom::section_anchors(&document);
        let mut tracker = ViewportTracker::new(threshold);
        tracker.track_all(anchors.iter().map(|(section, _)| *section));
        let subscription = tracker.subscribe({
            let document = document.clone();
            move |event| dom::apply_event(&document, event)
        });
        let tracker = Rc::new(RefCell::new(tracker));

        let mut navigator = ScrollNavigator::new().with_motion(dom::preferred_motion(&window));
        for (section, element) in &anchors {
            navigator.register(*section, ElementAnchor::new(element.clone()));
        }

        let observer = match observe_sections(&tracker, &anchors) {
            Ok(observer) => Some(observer),
            Err(err) => {
                web_sys::console::warn_2(&"section observer unavailable".into(), &err);
                tracker.borrow_mut().reveal_all();
                None
            }
        };

        let ambient = mount_ambient(&window, &document);

        let mut listeners = vec![
            pointer_listener(&window, &tracker),
            navigation_listener(&document, Rc::new(navigator)),
        ];
        if let Some(ambient) = &ambient {
            listeners.push(resize_listener(&window, ambient));
        }
        if let Some(form) = document.get_element_by_id("contact-form") {
            listeners.extend(contact_listeners(&window, &form, recipient));
        }

        if let Some(root) = document.document_element() {
            root.class_list().add_1(READY_CLASS)?;
        }

        log(&format!(
            "folio runtime mounted: {} sections, ambient scene {}",
            anchors.len(),
            if ambient.is_some() { "on" } else { "off" }
        ));

        Ok(Self {
            document,
            tracker,
            subscription,
            observer,
            listeners,
            ambient,
        })
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        if let Some((observer, _callback)) = self.observer.take() {
            observer.disconnect();
        }
        self.listeners.clear();
        if let Some(ambient) = self.ambient.take() {
            ambient.stop();
        }
        self.tracker.borrow_mut().unsubscribe(self.subscription);
        if let Some(root) = self.document.document_element() {
            let _ = root.class_list().remove_1(READY_CLASS);
        }
        log("folio runtime unmounted");
    }
}

fn observe_sections(
    tracker: &Rc<RefCell<ViewportTracker>>,
    anchors: &[(Section, Element)],
) -> Result<(IntersectionObserver, ObserverCallback), JsValue> {
    let callback: ObserverCallback = Closure::new({
        let tracker = Rc::clone(tracker);
        move |entries: Array| {
            let batch: Vec<Intersection> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    Section::from_id(&entry.target().id()).map(|section| {
                        Intersection::new(section, entry.intersection_ratio())
                            .with_root_coverage(root_coverage(&entry))
                    })
                })
                .collect();
            tracker.borrow_mut().observe(batch);
        }
    });

    let thresholds: Array = tracker
        .borrow()
        .observation_thresholds()
        .into_iter()
        .map(JsValue::from_f64)
        .collect();
    let options = IntersectionObserverInit::new();
    options.set_threshold(&thresholds);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for (_, element) in anchors {
        observer.observe(element);
    }
    Ok((observer, callback))
}

/// Fraction of the viewport height covered by the visible part of the target.
fn root_coverage(entry: &IntersectionObserverEntry) -> f64 {
    entry
        .root_bounds()
        .map(|root| root.height())
        .filter(|height| *height > 0.0)
        .map_or(0.0, |height| {
            (entry.intersection_rect().height() / height).clamp(0.0, 1.0)
        })
}

fn mount_ambient(window: &Window, document: &Document) -> Option<Rc<Ambient>> {
    let backend = document
        .get_element_by_id("ambient-scene")
        .and_then(|host| CanvasBackend::attach(document, &host).ok());
    let renderer = AmbientRenderer::try_mount(
        backend,
        dom::window_viewport(window),
        AmbientScene::random(),
    )?;
    Some(Rc::new(AnimationLoop::start(renderer, RafScheduler)))
}

fn pointer_listener(window: &Window, tracker: &Rc<RefCell<ViewportTracker>>) -> EventListener {
    let tracker = Rc::clone(tracker);
    EventListener::new(window, "mousemove", move |event: &Event| {
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            let position = PointerPosition::new(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
            );
            tracker.borrow_mut().move_pointer(position);
        }
    })
}

fn navigation_listener(
    document: &Document,
    navigator: Rc<ScrollNavigator<ElementAnchor>>,
) -> EventListener {
    EventListener::new_with_options(
        document,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            let Some(link) = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|target| target.closest("[data-section]").ok().flatten())
            else {
                return;
            };
            let Some(id) = link.get_attribute("data-section") else {
                return;
            };
            event.prevent_default();
            navigator.navigate_to_id(&id);
        },
    )
}

fn resize_listener(window: &Window, ambient: &Rc<Ambient>) -> EventListener {
    let ambient = Rc::downgrade(ambient);
    let source = window.clone();
    EventListener::new(window, "resize", move |_event: &Event| {
        if let Some(ambient) = ambient.upgrade() {
            ambient.resize(dom::window_viewport(&source));
        }
    })
}

fn contact_listeners(window: &Window, form: &Element, recipient: String) -> Vec<EventListener> {
    let state = Rc::new(RefCell::new(ContactForm::default()));

    let input = EventListener::new(form, "input", {
        let state = Rc::clone(&state);
        move |event: &Event| {
            let Some(control) = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
            else {
                return;
            };
            let field = control
                .get_attribute("name")
                .and_then(|name| ContactField::from_control_name(&name));
            if let (Some(field), Some(value)) = (field, dom::control_value(&control)) {
                state.borrow_mut().set(field, value);
            }
        }
    });

    let submit = EventListener::new_with_options(
        form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        {
            let window = window.clone();
            move |event: &Event| {
                event.prevent_default();
                let href = state.borrow().mail_link(&recipient).href();
                if let Err(err) = window.location().set_href(&href) {
                    web_sys::console::warn_2(&"could not open mail client".into(), &err);
                }
            }
        },
    );

    vec![input, submit]
}
