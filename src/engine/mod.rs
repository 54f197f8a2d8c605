//! Rendering orchestration for the Lorenz attractor.
//!
//! [`LorenzRenderEngine`] ties the GPU-free [`scene::LorenzScene`] to the
//! camera and line renderers. Commands arrive as [`command::LorenzCommand`]
//! values from the input layer or from embedding code.

mod input;
mod options;
pub mod command;
pub mod scene;

use std::path::PathBuf;

use web_time::Instant;

pub use self::input::apply_scene_command;
use self::scene::LorenzScene;
use crate::camera::controller::CameraController;
use crate::error::LorenzError;
use crate::gpu::render_context::RenderContext;
use crate::input::InputProcessor;
use crate::options::Options;
use crate::renderer::axes;
use crate::renderer::lines::{self, LineRenderer};
use crate::util::color::ColorMode;
use crate::util::frame_timing::FrameTiming;

/// Where presets are saved and loaded unless configured otherwise.
pub const DEFAULT_PRESETS_DIR: &str = "presets";

/// What the trajectory vertex buffer currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct UploadedTrajectory {
    generation: u64,
    points: usize,
    color_mode: ColorMode,
}

/// The rendering orchestrator for the Lorenz attractor.
///
/// Owns the GPU context, the camera, the line renderers, and the
/// [`LorenzScene`] they draw. The platform layer forwards input through
/// [`execute`](Self::execute) / [`handle_input`](Self::handle_input) and
/// calls [`render`](Self::render) once per redraw.
///
/// # Frame loop
///
/// Each frame advances the reveal animation, re-uploads the visible
/// trajectory prefix if it changed, and draws the axes and the trajectory
/// into the swapchain with a depth test.
pub struct LorenzRenderEngine {
    /// Core wgpu device, queue, and surface.
    pub context: RenderContext,
    /// Orthographic camera controller.
    pub camera_controller: CameraController,
    /// Mouse and keyboard translation into commands.
    pub input: InputProcessor,
    trajectory_renderer: LineRenderer,
    axes_renderer: LineRenderer,
    uploaded: Option<UploadedTrajectory>,
    scene: LorenzScene,
    options: Options,
    active_preset: Option<String>,
    presets_dir: PathBuf,
    frame_timing: FrameTiming,
}

impl LorenzRenderEngine {
    /// Engine drawing into a window surface.
    ///
    /// # Errors
    ///
    /// Returns [`LorenzError`] if GPU initialization fails or the options
    /// describe an unusable trajectory.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
    ) -> Result<Self, LorenzError> {
        let context = RenderContext::new(window, size).await?;
        Self::init_with_context(context, options)
    }

    fn init_with_context(
        context: RenderContext,
        options: Options,
    ) -> Result<Self, LorenzError> {
        options.validate()?;
        let now = Instant::now();
        let scene = LorenzScene::new(
            &options.simulation,
            &options.animation,
            options.display.color_mode,
            now,
        )?;
        let camera_controller =
            CameraController::new(&context, &options.camera);
        let trajectory_renderer =
            LineRenderer::new(&context, &camera_controller.layout, "Trajectory");
        let mut axes_renderer =
            LineRenderer::new(&context, &camera_controller.layout, "Axes");
        axes_renderer
            .upload(&context, &axes::axis_vertices(options.display.axis_color));

        Ok(Self {
            context,
            camera_controller,
            input: InputProcessor::with_key_bindings(options.keybindings.clone()),
            trajectory_renderer,
            axes_renderer,
            uploaded: None,
            scene,
            options,
            active_preset: None,
            presets_dir: PathBuf::from(DEFAULT_PRESETS_DIR),
            frame_timing: FrameTiming::new(now),
        })
    }

    /// The visualization state.
    pub fn scene(&self) -> &LorenzScene {
        &self.scene
    }

    /// Advance the reveal animation to `now`.
    pub fn update(&mut self, now: Instant) {
        let _ = self.scene.tick(now);
    }

    /// Re-upload the trajectory vertices if the visible prefix, the
    /// trajectory, or the coloring changed since the last upload.
    fn sync_trajectory(&mut self) {
        let visible = self.scene.visible_points();
        let current = UploadedTrajectory {
            generation: self.scene.generation(),
            points: visible.len(),
            color_mode: self.scene.color_mode(),
        };
        if self.uploaded == Some(current) {
            return;
        }
        let vertices = lines::trajectory_vertices(
            visible,
            self.scene.point_count(),
            current.color_mode,
        );
        self.trajectory_renderer.upload(&self.context, &vertices);
        self.uploaded = Some(current);
    }

    /// Per-frame updates: reveal tick, camera uniform, vertex upload.
    fn pre_render(&mut self, now: Instant) {
        self.update(now);
        self.camera_controller.update_gpu(&self.context.queue);
        self.sync_trajectory();
    }

    /// Encode the single line pass into `view`.
    fn render_to_view(&self, view: &wgpu::TextureView) -> wgpu::CommandEncoder {
        let [r, g, b] = self.options.display.background;
        let mut encoder = self.context.create_encoder();
        {
            let mut pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Lorenz Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(wgpu::Color {
                                    r: f64::from(r),
                                    g: f64::from(g),
                                    b: f64::from(b),
                                    a: 1.0,
                                }),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        },
                    )],
                    depth_stencil_attachment: Some(
                        wgpu::RenderPassDepthStencilAttachment {
                            view: self.context.depth_view(),
                            depth_ops: Some(wgpu::Operations {
                                load: wgpu::LoadOp::Clear(1.0),
                                store: wgpu::StoreOp::Store,
                            }),
                            stencil_ops: None,
                        },
                    ),
                    ..Default::default()
                });

            let camera = &self.camera_controller.bind_group;
            if self.options.display.show_axes {
                self.axes_renderer.draw(&mut pass, camera);
            }
            self.trajectory_renderer.draw(&mut pass, camera);
        }
        encoder
    }

    /// Draw one frame and present it.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the swapchain frame cannot be
    /// acquired.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let now = Instant::now();
        self.pre_render(now);

        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let encoder = self.render_to_view(&view);
        self.context.submit(encoder);
        frame.present();

        let _ = self.frame_timing.end_frame(Instant::now());
        Ok(())
    }

    /// Resize the surface, depth buffer, and camera projection.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.context.resize(width, height);
            self.camera_controller.resize(width, height);
        }
    }

    /// Status line for the window title, or `None` if one was produced
    /// too recently.
    pub fn poll_status_title(&mut self) -> Option<String> {
        self.frame_timing
            .status_due(Instant::now())
            .then(|| self.status_title())
    }

    /// View angles, scene status, active preset, and frame rate on one
    /// line.
    pub fn status_title(&self) -> String {
        let camera = &self.camera_controller.camera;
        let preset = self
            .active_preset()
            .map(|name| format!(" | Preset: {name}"))
            .unwrap_or_default();
        format!(
            "View: {:.0},{:.0} | {}{preset} | FPS: {:.0}",
            camera.azimuth,
            camera.elevation,
            self.scene.status_line(),
            self.frame_timing.fps()
        )
    }
}
