//! Frame loop driving an [`AmbientRenderer`] from a platform frame clock.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tracing::debug;

use super::camera::Viewport;
use super::renderer::{AmbientRenderer, RenderBackend};

/// Callback run when a requested frame is due, with the frame timestamp in ms.
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Source of display frames (e.g. `requestAnimationFrame`).
pub trait FrameScheduler {
    /// Handle for a requested frame. Dropping it cancels the request.
    type Pending;

    /// Requests a single callback for the next frame.
    fn request_frame(&self, callback: FrameCallback) -> Self::Pending;
}

struct LoopState<S: FrameScheduler, B: RenderBackend> {
    renderer: RefCell<AmbientRenderer<B>>,
    scheduler: S,
    pending: RefCell<Option<S::Pending>>,
    running: Cell<bool>,
}

/// A running frame loop.
///
/// Every frame advances and paints the scene, then requests the next one.
/// Stopping (or dropping) the loop cancels the outstanding frame request and
/// releases the renderer, so nothing keeps running once the page unmounts.
pub struct AnimationLoop<S, B>
where
    S: FrameScheduler + 'static,
    B: RenderBackend + 'static,
{
    state: Rc<LoopState<S, B>>,
}

impl<S, B> AnimationLoop<S, B>
where
    S: FrameScheduler + 'static,
    B: RenderBackend + 'static,
{
    /// Starts the loop by requesting its first frame.
    pub fn start(renderer: AmbientRenderer<B>, scheduler: S) -> Self {
        let state = Rc::new(LoopState {
            renderer: RefCell::new(renderer),
            scheduler,
            pending: RefCell::new(None),
            running: Cell::new(true),
        });
        Self::schedule(&state);
        debug!("animation loop started");
        Self { state }
    }

    fn schedule(state: &Rc<LoopState<S, B>>) {
        let weak: Weak<LoopState<S, B>> = Rc::downgrade(state);
        let pending = state.scheduler.request_frame(Box::new(move |now_ms| {
            if let Some(state) = weak.upgrade() {
                Self::on_frame(&state, now_ms);
            }
        }));
        state.pending.replace(Some(pending));
    }

    fn on_frame(state: &Rc<LoopState<S, B>>, now_ms: f64) {
        if !state.running.get() {
            return;
        }
        let drawn = state.renderer.borrow_mut().render_frame(now_ms);
        if drawn {
            Self::schedule(state);
        } else {
            state.running.set(false);
        }
    }

    /// Whether frames are still being requested.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    /// Forwards a surface resize to the renderer.
    pub fn resize(&self, viewport: Viewport) {
        self.state.renderer.borrow_mut().resize(viewport);
    }

    /// Runs `f` against the renderer.
    pub fn with_renderer<R>(&self, f: impl FnOnce(&AmbientRenderer<B>) -> R) -> R {
        f(&self.state.renderer.borrow())
    }

    /// Cancels the pending frame and releases the renderer. Idempotent.
    pub fn stop(&self) {
        let was_running = self.state.running.replace(false);
        let pending = self.state.pending.borrow_mut().take();
        drop(pending);
        self.state.renderer.borrow_mut().release();
        if was_running {
            debug!("animation loop stopped");
        }
    }
}

impl<S, B> Drop for AnimationLoop<S, B>
where
    S: FrameScheduler + 'static,
    B: RenderBackend + 'static,
{
    fn drop(&mut self) {
        self.stop();
    }
}

type FrameQueue = Rc<RefCell<Vec<(u64, FrameCallback)>>>;

/// Scheduler whose frames are fired explicitly by the caller.
///
/// Drives the loop outside a browser: headless rendering from the command
/// line, and tests.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: FrameQueue,
    next_id: Rc<Cell<u64>>,
}

/// Outstanding request on a [`ManualScheduler`]; dropping it cancels the request.
pub struct ManualFrame {
    id: u64,
    queue: FrameQueue,
}

impl Drop for ManualFrame {
    fn drop(&mut self) {
        let removed: Vec<_> = {
            let mut queue = self.queue.borrow_mut();
            let (cancelled, kept): (Vec<_>, Vec<_>) =
                queue.drain(..).partition(|(id, _)| *id == self.id);
            *queue = kept;
            cancelled
        };
        drop(removed);
    }
}

impl ManualScheduler {
    /// Creates a scheduler with no pending frames.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frame requests waiting to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Fires every request made before this call. Returns how many ran.
    pub fn fire(&self, now_ms: f64) -> usize {
        let due: Vec<_> = self.queue.borrow_mut().drain(..).collect();
        let fired = due.len();
        for (_, callback) in due {
            callback(now_ms);
        }
        fired
    }
}

impl FrameScheduler for ManualScheduler {
    type Pending = ManualFrame;

    fn request_frame(&self, callback: FrameCallback) -> ManualFrame {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.queue.borrow_mut().push((id, callback));
        ManualFrame {
            id,
            queue: Rc::clone(&self.queue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::frame::FrameView;
    use crate::scene::{AmbientScene, FrameRecorder, SHAPE_COUNT};

    #[derive(Default)]
    struct Counters {
        attached: Cell<i32>,
        draws: Cell<u32>,
    }

    struct CountingBackend(Rc<Counters>);

    impl CountingBackend {
        fn attach(counters: &Rc<Counters>) -> Self {
            counters.attached.set(counters.attached.get() + 1);
            Self(Rc::clone(counters))
        }
    }

    impl RenderBackend for CountingBackend {
        fn resize(&mut self, _viewport: Viewport) {}

        fn draw(&mut self, frame: &FrameView) {
            assert_eq!(frame.primitives.len(), SHAPE_COUNT);
            self.0.draws.set(self.0.draws.get() + 1);
        }

        fn release(&mut self) {
            self.0.attached.set(self.0.attached.get() - 1);
        }
    }

    fn counted_loop(
        counters: &Rc<Counters>,
        scheduler: &ManualScheduler,
    ) -> AnimationLoop<ManualScheduler, CountingBackend> {
        let renderer = AmbientRenderer::mount(
            CountingBackend::attach(counters),
            Viewport::new(1280, 720),
            AmbientScene::seeded(5),
        );
        AnimationLoop::start(renderer, scheduler.clone())
    }

    #[test]
    fn test_each_frame_requests_the_next() {
        let counters = Rc::new(Counters::default());
        let scheduler = ManualScheduler::new();
        let animation = counted_loop(&counters, &scheduler);

        assert_eq!(scheduler.pending(), 1);
        for frame in 1..=3 {
            assert_eq!(scheduler.fire(f64::from(frame) * 16.0), 1);
            assert_eq!(scheduler.pending(), 1);
        }
        assert_eq!(counters.draws.get(), 3);
        assert_eq!(animation.with_renderer(|r| r.scene().frame_count()), 3);
    }

    #[test]
    fn test_stop_cancels_and_releases() {
        let counters = Rc::new(Counters::default());
        let scheduler = ManualScheduler::new();
        let animation = counted_loop(&counters, &scheduler);
        scheduler.fire(16.0);

        animation.stop();
        assert!(!animation.is_running());
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(counters.attached.get(), 0);

        assert_eq!(scheduler.fire(32.0), 0);
        assert_eq!(counters.draws.get(), 1);

        animation.stop();
        assert_eq!(counters.attached.get(), 0);
    }

    #[test]
    fn test_drop_tears_down() {
        let counters = Rc::new(Counters::default());
        let scheduler = ManualScheduler::new();
        {
            let _animation = counted_loop(&counters, &scheduler);
            assert_eq!(counters.attached.get(), 1);
        }
        assert_eq!(counters.attached.get(), 0);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_stale_callback_after_drop_is_inert() {
        let scheduler = ManualScheduler::new();
        let stale: Rc<RefCell<Option<FrameCallback>>> = Rc::default();
        let counters = Rc::new(Counters::default());
        {
            let animation = counted_loop(&counters, &scheduler);
            // Steal the queued callback so dropping the loop cannot cancel it.
            let (_, callback) = scheduler.queue.borrow_mut().remove(0);
            stale.replace(Some(callback));
            drop(animation);
        }
        if let Some(callback) = stale.take() {
            callback(16.0);
        }
        assert_eq!(counters.draws.get(), 0);
    }

    #[test]
    fn test_resize_reaches_camera() {
        let scheduler = ManualScheduler::new();
        let renderer = AmbientRenderer::mount(
            FrameRecorder::new(),
            Viewport::new(800, 600),
            AmbientScene::seeded(5),
        );
        let animation = AnimationLoop::start(renderer, scheduler.clone());
        animation.resize(Viewport::new(600, 800));
        scheduler.fire(16.0);

        animation.with_renderer(|renderer| {
            let recorder = renderer.backend().unwrap();
            assert_eq!(recorder.viewport(), Viewport::new(600, 800));
            assert_eq!(
                recorder.last_frame().unwrap().viewport,
                Viewport::new(600, 800)
            );
        });
    }
}
