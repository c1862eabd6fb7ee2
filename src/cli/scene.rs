//! `folio scene`: run the ambient scene headlessly and dump a snapshot.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::scene::{
    AmbientRenderer, AmbientScene, AnimationLoop, FrameRecorder, FrameView, ManualScheduler,
    Primitive, Viewport,
};
use clap::Args;
use serde::Serialize;

/// Interval between simulated frames, in milliseconds (60 Hz).
const FRAME_INTERVAL_MS: f64 = 1000.0 / 60.0;

/// Render ambient scene frames without a browser
#[derive(Debug, Clone, Args)]
pub struct SceneArgs {
    /// Random seed; a fresh scene every run when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Number of frames to run
    #[arg(long, default_value_t = 1)]
    frames: u32,

    /// Surface width in pixels
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Surface height in pixels
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Output the scene and last frame as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct SceneSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    frames: u64,
    viewport: Viewport,
    scene: AmbientScene,
    frame: Option<FrameView>,
}

impl SceneArgs {
    /// Execute the scene command
    pub fn execute(&self) -> CliResult<()> {
        if self.frames == 0 {
            return Err(CliError::validation("--frames must be at least 1"));
        }
        let viewport = Viewport::new(self.width, self.height);
        if viewport.is_empty() {
            return Err(CliError::validation("Surface width and height must be non-zero"));
        }

        let snapshot = self.run(viewport);

        if self.json {
            print_json(&snapshot)?;
        } else {
            print_summary(&snapshot);
        }
        Ok(())
    }

    fn run(&self, viewport: Viewport) -> SceneSnapshot {
        let scene = self.seed.map_or_else(AmbientScene::random, AmbientScene::seeded);
        let renderer = AmbientRenderer::mount(FrameRecorder::new(), viewport, scene);
        let scheduler = ManualScheduler::new();
        let animation = AnimationLoop::start(renderer, scheduler.clone());

        for frame in 1..=self.frames {
            scheduler.fire(f64::from(frame) * FRAME_INTERVAL_MS);
        }

        animation.with_renderer(|renderer| SceneSnapshot {
            seed: self.seed,
            frames: renderer.scene().frame_count(),
            viewport: renderer.camera().viewport(),
            scene: renderer.scene().clone(),
            frame: renderer
                .backend()
                .and_then(FrameRecorder::last_frame)
                .cloned(),
        })
    }
}

fn print_summary(snapshot: &SceneSnapshot) {
    println!(
        "Ambient scene: {} shapes, {} lights, {} frames at {}x{}",
        snapshot.scene.shapes().len(),
        snapshot.scene.lights().len(),
        snapshot.frames,
        snapshot.viewport.width,
        snapshot.viewport.height
    );

    let Some(frame) = &snapshot.frame else {
        return;
    };
    let discs = frame
        .primitives
        .iter()
        .filter(|p| matches!(p, Primitive::Disc { .. }))
        .count();
    println!(
        "Last frame: {} primitives ({} spheres, {} knots) at t={:.1}ms",
        frame.primitives.len(),
        discs,
        frame.primitives.len() - discs,
        frame.time_ms
    );
}
