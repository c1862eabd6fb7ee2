//! A visitor session driven through the public API, without a browser.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use folio::contact::{ContactField, ContactForm};
use folio::models::{Section, SiteContent};
use folio::navigator::{ScrollAnchor, ScrollMotion, ScrollNavigator};
use folio::render::{render_page, PageOptions};
use folio::scene::{
    AmbientRenderer, AmbientScene, AnimationLoop, FrameRecorder, ManualScheduler, Viewport,
};
use folio::viewport::{Intersection, PointerPosition, TrackerEvent, ViewportTracker};

/// Mirrors the classes the browser runtime would toggle.
#[derive(Default)]
struct PageClasses {
    revealed: BTreeSet<Section>,
    active_link: Option<Section>,
    highlight: Option<(f64, f64)>,
}

struct LoggedAnchor {
    section: Section,
    log: Rc<RefCell<Vec<Section>>>,
}

impl ScrollAnchor for LoggedAnchor {
    fn scroll_into_view(&self, motion: ScrollMotion) {
        assert_eq!(motion, ScrollMotion::Smooth);
        self.log.borrow_mut().push(self.section);
    }
}

fn anchors_in(page: &str) -> Vec<Section> {
    Section::ALL
        .into_iter()
        .filter(|s| page.contains(&format!("<section id=\"{}\"", s.id())))
        .collect()
}

#[test]
fn test_scrolling_through_the_page() {
    let content = SiteContent::builtin().unwrap();
    let page = render_page(&content, &PageOptions::default());

    let mut tracker = ViewportTracker::new(0.3);
    tracker.track_all(anchors_in(&page));
    assert_eq!(tracker.tracked().count(), Section::ALL.len());

    let classes = Rc::new(RefCell::new(PageClasses::default()));
    tracker.subscribe({
        let classes = Rc::clone(&classes);
        move |event| {
            let mut classes = classes.borrow_mut();
            match *event {
                TrackerEvent::Revealed(section) => {
                    classes.revealed.insert(section);
                }
                TrackerEvent::ActiveChanged { current, .. } => classes.active_link = Some(current),
                TrackerEvent::PointerMoved(position) => {
                    classes.highlight = Some(position.highlight_origin());
                }
            }
        }
    });

    tracker.observe([Intersection::new(Section::About, 0.45)]);
    tracker.observe([
        Intersection::new(Section::Services, 0.31),
        Intersection::new(Section::Skills, 0.8),
    ]);
    // Scrolling back up leaves everything revealed
    tracker.observe([
        Intersection::new(Section::Skills, 0.0),
        Intersection::new(Section::About, 0.9),
    ]);
    tracker.move_pointer(PointerPosition::new(200.0, 192.0));

    let classes = classes.borrow();
    assert_eq!(
        classes.revealed,
        BTreeSet::from([Section::About, Section::Services, Section::Skills])
    );
    assert_eq!(classes.active_link, Some(Section::About));
    assert_eq!(tracker.active(), Section::About);
    assert_eq!(classes.highlight, Some((8.0, 0.0)));
}

#[test]
fn test_navigation_follows_registered_anchors() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut navigator = ScrollNavigator::new();
    for section in [Section::Hero, Section::Projects] {
        navigator.register(
            section,
            LoggedAnchor {
                section,
                log: Rc::clone(&log),
            },
        );
    }

    navigator.navigate_to_id("projects");
    navigator.navigate(Section::Contact);
    navigator.navigate_to_id("visual-art-gallery");
    navigator.navigate(Section::Hero);

    assert_eq!(*log.borrow(), vec![Section::Projects, Section::Hero]);
}

#[test]
fn test_contact_submission_composes_link() {
    let content = SiteContent::builtin().unwrap();
    let mut form = ContactForm::default();
    form.set(ContactField::Name, "Ada");
    form.set(ContactField::Email, "ada@example.com");
    form.set(ContactField::Message, "Hello");

    let link = form.mail_link(&content.contact.email);
    assert_eq!(link.recipient(), "manyaj.work@gmail.com");
    assert_eq!(link.body(), "Hello");
    assert!(link.subject().contains("Ada"));
    assert!(link.subject().contains("ada@example.com"));
}

#[test]
fn test_ambient_scene_lifecycle() {
    let scheduler = ManualScheduler::new();
    let renderer = AmbientRenderer::mount(
        FrameRecorder::new(),
        Viewport::new(1600, 900),
        AmbientScene::seeded(3),
    );
    let animation = AnimationLoop::start(renderer, scheduler.clone());

    for frame in 1..=4 {
        assert_eq!(scheduler.fire(f64::from(frame) * 16.0), 1);
    }
    animation.resize(Viewport::new(800, 800));
    animation.with_renderer(|renderer| {
        assert_eq!(renderer.scene().shapes().len(), 10);
        assert_eq!(renderer.scene().lights().len(), 3);
        assert_eq!(renderer.scene().frame_count(), 4);
        assert!((renderer.camera().aspect() - 1.0).abs() < f32::EPSILON);
        assert_eq!(
            renderer.backend().map(FrameRecorder::viewport),
            Some(Viewport::new(800, 800))
        );
    });

    drop(animation);
    assert_eq!(scheduler.pending(), 0);
    assert_eq!(scheduler.fire(100.0), 0);
}
