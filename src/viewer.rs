//! Standalone visualization window backed by winit.
//!
//! ```no_run
//! # use lorenz_viz::Viewer;
//! Viewer::builder()
//!     .with_title("Lorenz Attractor")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::Key,
    window::{Window, WindowId},
};

use crate::{
    engine::command::LorenzCommand, error::LorenzError, options::Options,
    InputEvent, LorenzRenderEngine, MouseButton,
};

/// Initial window size in logical pixels.
const DEFAULT_SIZE: (u32, u32) = (800, 600);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
    presets_dir: Option<PathBuf>,
}

impl ViewerBuilder {
    /// Builder with the default title and options.
    fn new() -> Self {
        Self {
            options: None,
            title: "Lorenz Attractor".into(),
            presets_dir: None,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title prefix.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Directory for the save/load preset keys.
    #[must_use]
    pub fn with_presets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.presets_dir = Some(dir.into());
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
            presets_dir: self.presets_dir,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that animates the Lorenz attractor.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
    presets_dir: Option<PathBuf>,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed or [`LorenzCommand::Quit`] is issued.
    ///
    /// # Errors
    ///
    /// Returns [`LorenzError::Viewer`] if the event loop cannot be created
    /// or exits abnormally, and the engine's error if GPU setup failed.
    pub fn run(self) -> Result<(), LorenzError> {
        let event_loop =
            EventLoop::new().map_err(|e| LorenzError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            options: Some(self.options),
            title: self.title,
            presets_dir: self.presets_dir,
            init_error: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| LorenzError::Viewer(e.to_string()))?;
        app.init_error.map_or(Ok(()), Err)
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<LorenzRenderEngine>,
    options: Option<Options>,
    title: String,
    presets_dir: Option<PathBuf>,
    init_error: Option<LorenzError>,
}

/// Binding name for a logical key: the produced text for characters, the
/// variant name (`"Space"`, `"ArrowLeft"`) for named keys.
fn key_name(key: &Key) -> Option<String> {
    match key {
        Key::Character(text) => Some(text.as_str().to_owned()),
        Key::Named(named) => Some(format!("{named:?}")),
        _ => None,
    }
}

/// Surface size for a window, never zero.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

impl ViewerApp {
    /// Push the status line into the window title when due.
    fn update_title(&mut self) {
        let (Some(window), Some(engine)) = (&self.window, &mut self.engine)
        else {
            return;
        };
        if let Some(status) = engine.poll_status_title() {
            window.set_title(&format!("{} | {status}", self.title));
        }
    }

    fn redraw(&mut self) {
        let Some(engine) = &mut self.engine else {
            return;
        };
        match engine.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Outdated) => {
                if let Some(w) = &self.window {
                    let (vp_w, vp_h) = viewport_size(w.inner_size());
                    engine.resize(vp_w, vp_h);
                }
            }
            Err(wgpu::SurfaceError::Lost) => {
                log::warn!("surface lost, reconfiguring");
                engine.context.reconfigure();
            }
            Err(e) => log::error!("render error: {e:?}"),
        }
        self.update_title();
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                DEFAULT_SIZE.0,
                DEFAULT_SIZE.1,
            ));
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("failed to create window: {e}");
                self.init_error = Some(LorenzError::Viewer(e.to_string()));
                event_loop.exit();
                return;
            }
        };

        let options = self.options.take().unwrap_or_default();
        let size = viewport_size(window.inner_size());
        let mut engine = match pollster::block_on(LorenzRenderEngine::new(
            window.clone(),
            size,
            options,
        )) {
            Ok(e) => e,
            Err(e) => {
                log::error!("failed to initialize engine: {e}");
                self.init_error = Some(e);
                event_loop.exit();
                return;
            }
        };

        if let Some(dir) = self.presets_dir.take() {
            engine.set_presets_dir(dir);
        }

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: both window and engine must be initialised.
        if self.window.is_none() {
            return;
        }
        let Some(engine) = &mut self.engine else {
            return;
        };

        match event {
            WindowEvent::Resized(event_size) => {
                let (vp_w, vp_h) = viewport_size(event_size);
                engine.resize(vp_w, vp_h);
            }

            WindowEvent::RedrawRequested => self.redraw(),

            WindowEvent::MouseInput { button, state, .. } => {
                let _ = engine.handle_input(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                let _ = engine.handle_input(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let scroll_delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                let _ = engine.handle_input(InputEvent::Scroll {
                    delta: scroll_delta,
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                let Some(key) = key_name(&event.logical_key) else {
                    return;
                };
                if engine.handle_key_press(&key) == Some(LorenzCommand::Quit) {
                    log::info!("quit requested");
                    event_loop.exit();
                }
            }

            _ => (),
        }
    }
}
