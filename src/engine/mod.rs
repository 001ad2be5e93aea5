//! The gallery interaction engine: composition root for the scene, orbit
//! camera, selection controller, and presenters.
//!
//! The engine is renderer-agnostic. Each frame the host calls
//! [`update`](GalleryEngine::update), then reads the outline target set,
//! cursor request, active panel id, and camera matrix and draws however it
//! likes.

mod command;

use std::path::PathBuf;

pub use command::GalleryCommand;
use glam::Mat4;

use crate::camera::{Camera, OrbitController};
use crate::error::GalleriaError;
use crate::highlight::{CursorStyle, OutlineHighlight};
use crate::options::Options;
use crate::panel::PanelModel;
use crate::picking::SceneRaycaster;
use crate::scene::loader::{self, SceneLoad};
use crate::scene::{ObjectId, Scene};
use crate::selection::SelectionController;

/// The interaction engine for a gallery room scene.
///
/// Owns the scene (once loaded), the orbit camera, the selection
/// controller, and the presenter state the host renderer consumes.
pub struct GalleryEngine {
    options: Options,
    scene: Scene,
    pending_load: Option<SceneLoad>,
    camera_controller: OrbitController,
    selection: SelectionController,
    highlight: OutlineHighlight,
    panels: PanelModel,
}

impl GalleryEngine {
    /// Create an engine that loads its scene manifest in the background.
    ///
    /// The engine is fully interactive immediately; picking runs against an
    /// empty scene until the load completes.
    pub fn with_manifest(
        options: Options,
        manifest_path: PathBuf,
        viewport: (u32, u32),
    ) -> Result<Self, GalleriaError> {
        let load = loader::spawn(manifest_path)?;
        Ok(Self::from_parts(options, Scene::new(), Some(load), viewport))
    }

    /// Create an engine around an already-built scene.
    #[must_use]
    pub fn with_scene(
        options: Options,
        scene: Scene,
        viewport: (u32, u32),
    ) -> Self {
        let mut engine = Self::from_parts(options, Scene::new(), None, viewport);
        engine.install_scene(scene);
        engine
    }

    fn from_parts(
        options: Options,
        scene: Scene,
        pending_load: Option<SceneLoad>,
        viewport: (u32, u32),
    ) -> Self {
        let aspect = if viewport.1 > 0 {
            viewport.0 as f32 / viewport.1 as f32
        } else {
            1.0
        };
        let camera_controller = OrbitController::new(&options.camera, aspect);
        let selection = SelectionController::new(
            options.scene.selectable_prefix.clone(),
        );

        Self {
            options,
            scene,
            pending_load,
            camera_controller,
            selection,
            highlight: OutlineHighlight::new(),
            panels: PanelModel::new(),
        }
    }

    /// Execute an interactive command.
    pub fn execute(&mut self, command: GalleryCommand) {
        match command {
            GalleryCommand::PointerMove { ndc } => {
                let raycaster = SceneRaycaster::new(&self.scene);
                self.selection.pointer_move(
                    ndc,
                    &self.camera_controller.camera,
                    &raycaster,
                    &mut self.highlight,
                );
            }
            GalleryCommand::PointerDown { ndc } => {
                let raycaster = SceneRaycaster::new(&self.scene);
                self.selection.pointer_down(
                    ndc,
                    &self.camera_controller.camera,
                    &raycaster,
                    &mut self.panels,
                );
            }
            GalleryCommand::RotateCamera { delta } => {
                self.camera_controller.rotate(delta);
            }
            GalleryCommand::PanCamera { delta } => {
                self.camera_controller.pan(delta);
            }
            GalleryCommand::Zoom { delta } => {
                self.camera_controller.zoom(delta);
            }
            GalleryCommand::RecenterCamera => {
                self.camera_controller.recenter();
            }
            GalleryCommand::ClosePanel => {
                self.selection.close_panel(&mut self.panels);
            }
        }
    }

    /// Per-frame update: poll the pending scene load and advance camera
    /// damping. `dt` is the frame delta in seconds.
    pub fn update(&mut self, dt: f32) {
        self.poll_scene_load();
        self.camera_controller.update(dt);
    }

    /// Update the viewport aspect ratio after a resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera_controller.resize(width, height);
    }

    fn poll_scene_load(&mut self) {
        let Some(load) = self.pending_load.as_mut() else {
            return;
        };
        match load.poll() {
            None => {}
            Some(Ok(scene)) => {
                self.pending_load = None;
                self.install_scene(scene);
            }
            Some(Err(e)) => {
                self.pending_load = None;
                log::error!("scene load failed: {e}");
            }
        }
    }

    /// Install the loaded scene and publish the selectable pool once.
    fn install_scene(&mut self, scene: Scene) {
        let pool = scene.selectables(&self.options.scene.selectable_prefix);
        log::info!(
            "scene ready: {} objects, {} selectable",
            scene.objects().len(),
            pool.len()
        );
        self.scene = scene;
        self.selection.publish_pool(pool, &mut self.highlight);
    }

    // ── Host-facing accessors ───────────────────────────────────────

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Mutable options access for host UIs.
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// The loaded scene (empty until the background load completes).
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Whether a scene load is still pending.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.pending_load.is_some()
    }

    /// The camera the host renderer should draw with.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera_controller.camera
    }

    /// Combined view-projection matrix of the current camera.
    #[must_use]
    pub fn view_proj(&self) -> Mat4 {
        self.camera_controller.camera.build_matrix()
    }

    /// Objects the outline pass should highlight this frame.
    #[must_use]
    pub fn outline_targets(&self) -> &[ObjectId] {
        self.highlight.targets()
    }

    /// Cursor style requested by the selection controller.
    #[must_use]
    pub fn cursor(&self) -> CursorStyle {
        self.highlight.cursor()
    }

    /// Identifier of the active info panel, if any.
    #[must_use]
    pub fn active_panel(&self) -> Option<&str> {
        self.selection.active_panel()
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use super::*;
    use crate::picking::Aabb;
    use crate::scene::Collider;

    /// A room with one painting straight ahead of the home camera and a
    /// bookshelf off to the side.
    fn room() -> Scene {
        let mut scene = Scene::new();
        // On the segment from the default eye (8, 4, 8) to (0, 1, 0)
        let _ = scene.add_object(
            "Painting_3",
            Collider::Aabb(Aabb {
                min: Vec3::new(3.5, 2.0, 3.5),
                max: Vec3::new(4.5, 3.0, 4.5),
            }),
        );
        let _ = scene.add_object(
            "Bookshelf",
            Collider::Aabb(Aabb {
                min: Vec3::new(-6.0, 0.0, -6.0),
                max: Vec3::new(-5.0, 3.0, -5.0),
            }),
        );
        scene
    }

    fn engine() -> GalleryEngine {
        GalleryEngine::with_scene(Options::default(), room(), (800, 600))
    }

    #[test]
    fn scene_install_publishes_pool_as_default_outline() {
        let e = engine();
        assert_eq!(e.outline_targets(), &[ObjectId(0)]);
        assert_eq!(e.cursor(), CursorStyle::Default);
        assert!(!e.loading());
    }

    #[test]
    fn hover_and_click_straight_ahead_select_the_painting() {
        let mut e = engine();
        e.execute(GalleryCommand::PointerMove { ndc: Vec2::ZERO });
        assert_eq!(e.outline_targets(), &[ObjectId(0)]);
        assert_eq!(e.cursor(), CursorStyle::Pointer);

        e.execute(GalleryCommand::PointerDown { ndc: Vec2::ZERO });
        assert_eq!(e.active_panel(), Some("Painting_3"));
    }

    #[test]
    fn close_panel_command_clears_the_panel() {
        let mut e = engine();
        e.execute(GalleryCommand::PointerDown { ndc: Vec2::ZERO });
        assert_eq!(e.active_panel(), Some("Painting_3"));

        e.execute(GalleryCommand::ClosePanel);
        assert_eq!(e.active_panel(), None);

        // Redundant close is a no-op
        e.execute(GalleryCommand::ClosePanel);
        assert_eq!(e.active_panel(), None);
    }

    #[test]
    fn hover_into_empty_space_reverts_to_pool() {
        let mut e = engine();
        e.execute(GalleryCommand::PointerMove { ndc: Vec2::ZERO });
        assert_eq!(e.cursor(), CursorStyle::Pointer);

        e.execute(GalleryCommand::PointerMove {
            ndc: Vec2::new(1.0, 1.0),
        });
        assert_eq!(e.outline_targets(), &[ObjectId(0)]);
        assert_eq!(e.cursor(), CursorStyle::Default);
    }

    #[test]
    fn camera_commands_move_the_camera() {
        let mut e = engine();
        let before = e.camera().eye;
        e.execute(GalleryCommand::Zoom { delta: 2.0 });
        e.update(1.0);
        assert!((e.camera().eye - e.camera().target).length()
            < (before - e.camera().target).length());

        e.execute(GalleryCommand::RecenterCamera);
        e.update(100.0);
        assert!((e.camera().eye - before).length() < 1e-2);
    }
}
