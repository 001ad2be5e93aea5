//! Standalone interaction window backed by winit.
//!
//! The viewer owns the event loop, translates raw window events into
//! [`InputEvent`]s, and applies the engine's cursor requests to the window.
//! Drawing is the host's concern — embedders read the engine state
//! ([`GalleryEngine::outline_targets`], [`GalleryEngine::camera`],
//! [`GalleryEngine::active_panel`]) from their own render loop; the
//! standalone binary just exercises the interaction layer.
//!
//! ```no_run
//! # use galleria::Viewer;
//! Viewer::builder()
//!     .with_manifest("assets/scenes/room.json")
//!     .run()
//!     .unwrap();
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use web_time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{CursorIcon, Window, WindowId},
};

use crate::engine::GalleryEngine;
use crate::error::GalleriaError;
use crate::highlight::CursorStyle;
use crate::input::{InputEvent, InputProcessor, PointerButton};
use crate::options::Options;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    manifest: Option<PathBuf>,
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Galleria", no
    /// manifest, default options).
    fn new() -> Self {
        Self {
            manifest: None,
            options: None,
            title: "Galleria".into(),
        }
    }

    /// Set the scene manifest path (`.json`).
    #[must_use]
    pub fn with_manifest(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest = Some(path.into());
        self
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            manifest: self.manifest,
            options: self.options,
            title: self.title,
        }
    }

    /// Build and immediately run. Blocks until the window is closed.
    pub fn run(self) -> Result<(), GalleriaError> {
        self.build().run()
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window driving a [`GalleryEngine`].
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to enter
/// the event loop.
pub struct Viewer {
    manifest: Option<PathBuf>,
    options: Option<Options>,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    pub fn run(self) -> Result<(), GalleriaError> {
        let event_loop = EventLoop::new()
            .map_err(|e| GalleriaError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            processor: InputProcessor::new(),
            last_frame_time: Instant::now(),
            applied_cursor: CursorStyle::Default,
            last_panel: None,
            manifest: self.manifest,
            options: self.options,
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| GalleriaError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<GalleryEngine>,
    processor: InputProcessor,
    last_frame_time: Instant,
    applied_cursor: CursorStyle,
    last_panel: Option<String>,
    manifest: Option<PathBuf>,
    options: Option<Options>,
    title: String,
}

impl ViewerApp {
    /// Forward a platform-agnostic event through the processor to the
    /// engine.
    fn forward(&mut self, event: InputEvent) {
        let commands = self.processor.handle_event(event);
        if let Some(engine) = &mut self.engine {
            for cmd in commands {
                engine.execute(cmd);
            }
        }
    }

    /// Mirror the engine's cursor request and panel state onto the window.
    fn sync_presentation(&mut self) {
        let Some(engine) = &self.engine else {
            return;
        };

        let cursor = engine.cursor();
        if cursor != self.applied_cursor {
            self.applied_cursor = cursor;
            if let Some(window) = &self.window {
                window.set_cursor(match cursor {
                    CursorStyle::Default => CursorIcon::Default,
                    CursorStyle::Pointer => CursorIcon::Pointer,
                });
            }
        }

        let panel = engine.active_panel().map(str::to_owned);
        if panel != self.last_panel {
            match &panel {
                Some(id) => log::info!("panel active: {id}"),
                None => log::info!("panel closed"),
            }
            self.last_panel = panel;
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes().with_title(&self.title);
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        let viewport = (inner.width.max(1), inner.height.max(1));

        let options = self.options.take().unwrap_or_default();
        self.processor = InputProcessor::with_key_bindings(
            options.keybindings.clone(),
        );
        let _ = self.processor.handle_event(InputEvent::Resized {
            width: viewport.0,
            height: viewport.1,
        });

        let engine_result = match self.manifest.take() {
            Some(path) => {
                GalleryEngine::with_manifest(options, path, viewport)
            }
            None => Ok(GalleryEngine::with_scene(
                options,
                crate::scene::Scene::new(),
                viewport,
            )),
        };

        let engine = match engine_result {
            Ok(e) => e,
            Err(e) => {
                log::error!("failed to initialize engine: {e}");
                event_loop.exit();
                return;
            }
        };

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
        if self.window.is_none() || self.engine.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                let (w, h) = (size.width.max(1), size.height.max(1));
                self.forward(InputEvent::Resized {
                    width: w,
                    height: h,
                });
                if let Some(engine) = &mut self.engine {
                    engine.resize(w, h);
                }
            }

            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let dt = now.duration_since(self.last_frame_time).as_secs_f32();
                self.last_frame_time = now;

                if let Some(engine) = &mut self.engine {
                    engine.update(dt);
                }
                self.sync_presentation();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.forward(InputEvent::PointerMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                    primary: true,
                });
                self.sync_presentation();
            }

            WindowEvent::MouseInput { button, state, .. } => {
                self.forward(InputEvent::PointerButton {
                    button: PointerButton::from(button),
                    pressed: state == ElementState::Pressed,
                    primary: true,
                });
                self.sync_presentation();
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let scroll_delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                self.forward(InputEvent::Scroll {
                    delta: scroll_delta,
                });
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.forward(InputEvent::ModifiersChanged {
                    shift: modifiers.state().shift_key(),
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                use winit::keyboard::PhysicalKey;
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                self.forward(InputEvent::KeyPressed {
                    key: format!("{code:?}"),
                });
                self.sync_presentation();
            }

            _ => (),
        }
    }
}
