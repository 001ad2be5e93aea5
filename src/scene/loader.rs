//! Background scene loading with a one-shot completion channel.
//!
//! The original load-then-mutate-shared-state callback is modeled as an
//! explicit completion: the loader thread parses the manifest off the main
//! thread and publishes the built [`Scene`] through an mpsc channel exactly
//! once. The engine polls the receiver each frame and stays fully usable
//! (empty selectable pool) until the scene arrives.

use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use super::{Scene, SceneManifest};
use crate::error::GalleriaError;

/// Receiving end of a pending scene load.
pub struct SceneLoad {
    rx: mpsc::Receiver<Result<Scene, GalleriaError>>,
}

impl SceneLoad {
    /// Poll for the completed load without blocking.
    ///
    /// Returns `None` while the load is still running (or after the result
    /// was already taken).
    pub fn poll(&mut self) -> Option<Result<Scene, GalleriaError>> {
        self.rx.try_recv().ok()
    }
}

/// Spawn a background thread that loads `path` and publishes the result.
pub fn spawn(path: PathBuf) -> Result<SceneLoad, GalleriaError> {
    let (tx, rx) = mpsc::channel();

    let _handle = thread::Builder::new()
        .name("galleria-scene-loader".into())
        .spawn(move || {
            log::debug!("loading scene manifest {}", path.display());
            let result = SceneManifest::load(&path).map(SceneManifest::into_scene);
            match &result {
                Ok(scene) => {
                    log::debug!("scene loaded: {} objects", scene.objects().len());
                }
                Err(e) => log::error!("scene load failed: {e}"),
            }
            // Receiver may already be gone if the engine shut down
            let _ = tx.send(result);
        })
        .map_err(GalleriaError::ThreadSpawn)?;

    Ok(SceneLoad { rx })
}

/// A pre-built scene as an already-completed load, for hosts that construct
/// the scene themselves.
#[must_use]
pub fn ready(scene: Scene) -> SceneLoad {
    let (tx, rx) = mpsc::channel();
    // The receiver lives as long as the returned handle; send cannot fail
    let _ = tx.send(Ok(scene));
    SceneLoad { rx }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Collider;
    use crate::picking::Aabb;
    use glam::Vec3;

    #[test]
    fn ready_load_delivers_exactly_once() {
        let mut scene = Scene::new();
        let _ = scene.add_object(
            "Painting_1",
            Collider::Aabb(Aabb {
                min: Vec3::ZERO,
                max: Vec3::ONE,
            }),
        );

        let mut load = ready(scene);
        let first = load.poll();
        assert!(matches!(first, Some(Ok(_))));
        assert!(load.poll().is_none());
    }

    #[test]
    fn missing_file_reports_io_error() {
        let mut load = spawn(PathBuf::from("/nonexistent/room.json")).unwrap();
        // Loader thread is short-lived; block briefly until it reports
        let mut result = None;
        for _ in 0..200 {
            if let Some(r) = load.poll() {
                result = Some(r);
                break;
            }
            thread::sleep(std::time::Duration::from_millis(5));
        }
        assert!(matches!(result, Some(Err(GalleriaError::Io(_)))));
    }
}
