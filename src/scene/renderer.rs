//! Rendering backends and the renderer that owns one.

use tracing::{debug, info};

use super::camera::{Camera, Viewport};
use super::frame::FrameView;
use super::AmbientScene;

/// A drawing surface the scene can be painted on.
pub trait RenderBackend {
    /// Matches the surface to a new size.
    fn resize(&mut self, viewport: Viewport);

    /// Paints one frame, replacing the previous one.
    fn draw(&mut self, frame: &FrameView);

    /// Frees every resource held for the surface.
    ///
    /// Called exactly once, when the renderer is released.
    fn release(&mut self);
}

/// Owns the scene, its camera and the backend it paints on.
///
/// Releasing is idempotent; dropping the renderer releases it.
pub struct AmbientRenderer<B: RenderBackend> {
    scene: AmbientScene,
    camera: Camera,
    backend: Option<B>,
}

impl<B: RenderBackend> AmbientRenderer<B> {
    /// Attaches the scene to a backend sized to `viewport`.
    pub fn mount(mut backend: B, viewport: Viewport, scene: AmbientScene) -> Self {
        let camera = Camera::new(viewport);
        backend.resize(camera.viewport());
        info!(
            width = camera.viewport().width,
            height = camera.viewport().height,
            shapes = scene.shapes().len(),
            "ambient renderer mounted"
        );
        Self {
            scene,
            camera,
            backend: Some(backend),
        }
    }

    /// Like [`Self::mount`], but tolerates a missing backend.
    ///
    /// Returns `None` when no backend could be acquired; the page simply has
    /// no backdrop.
    pub fn try_mount(backend: Option<B>, viewport: Viewport, scene: AmbientScene) -> Option<Self> {
        match backend {
            Some(backend) => Some(Self::mount(backend, viewport, scene)),
            None => {
                debug!("no rendering backend available, skipping ambient scene");
                None
            }
        }
    }

    /// The scene being rendered.
    #[must_use]
    pub fn scene(&self) -> &AmbientScene {
        &self.scene
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The backend, until released.
    #[must_use]
    pub fn backend(&self) -> Option<&B> {
        self.backend.as_ref()
    }

    /// Whether the backend is still attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.backend.is_some()
    }

    /// Advances the scene and paints it. Returns false once released.
    pub fn render_frame(&mut self, now_ms: f64) -> bool {
        let Some(backend) = self.backend.as_mut() else {
            return false;
        };
        self.scene.advance(now_ms);
        let frame = self.scene.frame(&self.camera, now_ms);
        backend.draw(&frame);
        true
    }

    /// Follows a surface resize. Zero-sized surfaces are ignored.
    pub fn resize(&mut self, viewport: Viewport) {
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        if self.camera.resize(viewport) {
            debug!(width = viewport.width, height = viewport.height, "ambient surface resized");
            backend.resize(viewport);
        }
    }

    /// Detaches and frees the backend. Safe to call more than once.
    pub fn release(&mut self) {
        if let Some(mut backend) = self.backend.take() {
            backend.release();
            info!(frames = self.scene.frame_count(), "ambient renderer released");
        }
    }
}

impl<B: RenderBackend> Drop for AmbientRenderer<B> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Headless backend that keeps the last frame in memory.
///
/// Used to render the scene outside a browser.
#[derive(Debug, Default)]
pub struct FrameRecorder {
    viewport: Viewport,
    last_frame: Option<FrameView>,
    frames_drawn: u64,
}

impl FrameRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Size of the surface after the latest resize.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Most recently drawn frame.
    #[must_use]
    pub fn last_frame(&self) -> Option<&FrameView> {
        self.last_frame.as_ref()
    }

    /// Number of frames drawn.
    #[must_use]
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }
}

impl RenderBackend for FrameRecorder {
    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn draw(&mut self, frame: &FrameView) {
        self.last_frame = Some(frame.clone());
        self.frames_drawn += 1;
    }

    fn release(&mut self) {
        self.last_frame = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts live surfaces and release calls.
    struct CountingBackend {
        live: Rc<Cell<i32>>,
        releases: Rc<Cell<u32>>,
        resizes: Vec<Viewport>,
    }

    impl CountingBackend {
        fn new(live: &Rc<Cell<i32>>, releases: &Rc<Cell<u32>>) -> Self {
            live.set(live.get() + 1);
            Self {
                live: Rc::clone(live),
                releases: Rc::clone(releases),
                resizes: Vec::new(),
            }
        }
    }

    impl RenderBackend for CountingBackend {
        fn resize(&mut self, viewport: Viewport) {
            self.resizes.push(viewport);
        }

        fn draw(&mut self, _frame: &FrameView) {}

        fn release(&mut self) {
            self.live.set(self.live.get() - 1);
            self.releases.set(self.releases.get() + 1);
        }
    }

    fn counters() -> (Rc<Cell<i32>>, Rc<Cell<u32>>) {
        (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)))
    }

    #[test]
    fn test_mount_sizes_backend() {
        let renderer = AmbientRenderer::mount(
            FrameRecorder::new(),
            Viewport::new(1024, 768),
            AmbientScene::seeded(1),
        );
        assert_eq!(
            renderer.backend().unwrap().viewport(),
            Viewport::new(1024, 768)
        );
        assert!((renderer.camera().aspect() - 1024.0 / 768.0).abs() < 1e-6);
    }

    #[test]
    fn test_render_frame_draws_and_advances() {
        let mut renderer = AmbientRenderer::mount(
            FrameRecorder::new(),
            Viewport::new(800, 600),
            AmbientScene::seeded(1),
        );
        assert!(renderer.render_frame(16.0));
        assert!(renderer.render_frame(32.0));

        let recorder = renderer.backend().unwrap();
        assert_eq!(recorder.frames_drawn(), 2);
        assert_eq!(renderer.scene().frame_count(), 2);
        assert!((recorder.last_frame().unwrap().time_ms - 32.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resize_forwards_valid_sizes_only() {
        let (live, releases) = counters();
        let mut renderer = AmbientRenderer::mount(
            CountingBackend::new(&live, &releases),
            Viewport::new(800, 600),
            AmbientScene::seeded(1),
        );
        renderer.resize(Viewport::new(0, 0));
        renderer.resize(Viewport::new(1280, 720));
        renderer.resize(Viewport::new(1280, 720));

        assert_eq!(
            renderer.backend().unwrap().resizes,
            vec![Viewport::new(800, 600), Viewport::new(1280, 720)]
        );
        assert!((renderer.camera().aspect() - 1280.0 / 720.0).abs() < 1e-6);
    }

    #[test]
    fn test_release_is_idempotent() {
        let (live, releases) = counters();
        let mut renderer = AmbientRenderer::mount(
            CountingBackend::new(&live, &releases),
            Viewport::new(800, 600),
            AmbientScene::seeded(1),
        );
        renderer.release();
        renderer.release();
        drop(renderer);

        assert_eq!(live.get(), 0);
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn test_drop_releases() {
        let (live, releases) = counters();
        {
            let _renderer = AmbientRenderer::mount(
                CountingBackend::new(&live, &releases),
                Viewport::new(800, 600),
                AmbientScene::seeded(1),
            );
            assert_eq!(live.get(), 1);
        }
        assert_eq!(live.get(), 0);
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn test_released_renderer_stops_drawing() {
        let mut renderer = AmbientRenderer::mount(
            FrameRecorder::new(),
            Viewport::new(800, 600),
            AmbientScene::seeded(1),
        );
        renderer.release();
        assert!(!renderer.render_frame(16.0));
        assert!(!renderer.is_attached());
        assert_eq!(renderer.scene().frame_count(), 0);
    }

    #[test]
    fn test_try_mount_without_backend() {
        let renderer = AmbientRenderer::<FrameRecorder>::try_mount(
            None,
            Viewport::new(800, 600),
            AmbientScene::seeded(1),
        );
        assert!(renderer.is_none());
    }
}
